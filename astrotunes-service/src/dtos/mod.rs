pub mod astro;
pub mod generate;

pub use astro::{ChartPlanet, ChartRequest, ChartResponse, LocalizedName, ZodiacPlacement};
pub use generate::{AstroInput, MusicOutput, WelcomeResponse};
