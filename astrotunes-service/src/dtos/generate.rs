use crate::models::Music;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Body of `POST /generate`: a list of free-form planet records.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AstroInput {
    pub planets: Vec<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicOutput {
    pub success: bool,
    pub music: Music,
}

impl MusicOutput {
    pub fn success(music: Music) -> Self {
        Self {
            success: true,
            music,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}
