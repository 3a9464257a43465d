use super::zodiac::{Mode, Note};
use serde::{Deserialize, Serialize};

/// Music description returned by `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Music {
    pub key: String,
    pub tempo: u32,
    pub mood: String,
    pub instruments: Vec<String>,
}

/// Musical parameters derived from a natal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMusic {
    pub key: Note,
    pub mode: Mode,
    pub tempo: u32,
    pub melody_mood: String,
    pub instrument: String,
    pub rhythm_intensity: String,
    /// Length of the piece in seconds.
    pub duration: u32,
    pub time_signature: String,
    pub scale: Vec<Note>,
}
