//! The stored shape of one game: a display FEN plus the engine snapshot
//! needed to resume play, JSON-encoded into a single store value.

use chess_engine::{EngineGame, EngineSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub fen: String,
    pub engine_state: EngineSnapshot,
}

impl GameRecord {
    pub fn from_engine(game: &EngineGame) -> Self {
        Self {
            fen: game.fen(),
            engine_state: game.snapshot(),
        }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_roundtrip() {
        let game = EngineGame::new();
        let record = GameRecord::from_engine(&game);
        let raw = record.encode().unwrap();
        assert!(raw.contains("\"engineState\""));
        assert!(raw.contains("\"fen\""));

        let decoded = GameRecord::decode(&raw).unwrap();
        assert_eq!(decoded, record);
        assert_eq!(decoded.fen, decoded.engine_state.fen);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(GameRecord::decode("not json").is_err());
        assert!(GameRecord::decode("{\"fen\": 3}").is_err());
    }
}
