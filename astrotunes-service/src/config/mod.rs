use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

pub const SERVICE_NAME: &str = "astrotunes-service";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AstroConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
}

impl AstroConfig {
    /// Load from the optional `configuration` file and `APP__*` variables
    /// (`APP__HOST`, `APP__PORT`, `APP__LOG_LEVEL`, `APP__OTLP_ENDPOINT`).
    pub fn load() -> Result<Self, AppError> {
        Ok(AstroConfig {
            common: core_config::Config::load()?,
        })
    }

    pub fn address(&self) -> String {
        self.common.address()
    }
}
