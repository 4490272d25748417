//! Serializable engine state, persisted as the `engineState` half of a
//! stored game record.

use serde::{Deserialize, Serialize};

/// Everything needed to resume a game: the position, the moves that
/// produced it, and the derived status flags the UI displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub fen: String,
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default)]
    pub check: bool,
    #[serde(default)]
    pub check_mate: bool,
    #[serde(default)]
    pub is_finished: bool,
}
