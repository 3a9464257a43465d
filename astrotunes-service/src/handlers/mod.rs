//! HTTP handlers for astrotunes-service.

pub mod app;
pub mod astro;
pub mod generate;
pub mod metrics;

pub use app::{health_check, index, not_found};
pub use astro::generate_from_chart;
pub use generate::generate_music;
