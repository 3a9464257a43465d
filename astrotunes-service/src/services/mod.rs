pub mod chart;
pub mod composer;
pub mod metrics;

pub use chart::{ChartError, REQUIRED_PLANETS, compose_from_chart};
pub use composer::{ComposeError, Composer, PlaceholderComposer};
pub use metrics::{get_metrics, init_metrics, record_composition};
