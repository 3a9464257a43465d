pub mod music;
pub mod zodiac;

pub use music::{ChartMusic, Music};
pub use zodiac::{Element, Mode, Note, Sign, UnknownSign};
