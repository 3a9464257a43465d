use crate::models::ChartMusic;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/astro`: planet positions as produced by a chart API.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChartRequest {
    #[validate(length(min = 1, message = "Chart must contain at least one planet"))]
    pub output: Vec<ChartPlanet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPlanet {
    pub planet: LocalizedName,
    #[serde(default)]
    pub full_degree: Option<f64>,
    #[serde(default)]
    pub norm_degree: Option<f64>,
    #[serde(default)]
    pub is_retro: Option<String>,
    #[serde(rename = "zodiac_sign")]
    pub zodiac_sign: ZodiacPlacement,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedName {
    pub en: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZodiacPlacement {
    #[serde(default)]
    pub number: Option<u8>,
    pub name: LocalizedName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    pub success: bool,
    pub music: ChartMusic,
}
