//! Chess rules adapter: wraps shakmaty behind a coordinate-move interface,
//! with a serializable game snapshot and a shallow search for reply moves.

pub mod error;
pub mod game;
pub mod search;
pub mod snapshot;

pub use error::EngineError;
pub use game::{EngineGame, PlayedMove};
pub use snapshot::EngineSnapshot;
