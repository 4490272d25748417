//! Headless controller for the browser chess board: owns the per-game
//! session state and talks to the game service, leaving rendering and input
//! to whatever implements [`BoardView`].

pub mod api;
pub mod error;
pub mod session;
pub mod view;

pub use api::{GameApi, GameState, HttpGameApi, ReplyMove};
pub use error::ClientError;
pub use session::{resolve_game_id, BoardSession, Phase, StageOutcome, StagedMove};
pub use view::BoardView;
