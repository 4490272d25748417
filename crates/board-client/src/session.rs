//! Per-game session state machine. One session owns the loaded game, the
//! local rules engine mirroring the server, and the in-flight move flag.
//!
//! A user move runs in two steps: [`BoardSession::stage_move`] validates it
//! locally and renders the optimistic position, then
//! [`BoardSession::finish_move`] sends it to the service and either applies
//! the engine's reply or rolls the board back to where it was before the
//! user touched it.

use chess_engine::{EngineGame, EngineSnapshot};

use crate::api::{GameApi, GameState};
use crate::error::ClientError;
use crate::view::BoardView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingReply,
}

/// Result of staging a user move.
#[derive(Debug)]
pub enum StageOutcome {
    /// Move refused; the widget should snap the piece back.
    Snapback,
    /// Move applied optimistically. Must be handed to
    /// [`BoardSession::finish_move`] to complete or roll back.
    Staged(StagedMove),
}

/// A staged move waiting for the server's verdict, with the snapshot to
/// restore if it is rejected.
#[derive(Debug)]
pub struct StagedMove {
    pub from: String,
    pub to: String,
    undo: EngineSnapshot,
}

struct LoadedGame {
    id: i64,
    engine: EngineGame,
}

pub struct BoardSession<A, V> {
    api: A,
    view: V,
    game: Option<LoadedGame>,
    phase: Phase,
}

impl<A: GameApi, V: BoardView> BoardSession<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            game: None,
            phase: Phase::Idle,
        }
    }

    pub fn game_id(&self) -> Option<i64> {
        self.game.as_ref().map(|game| game.id)
    }

    /// FEN of the locally tracked position, if a game is loaded.
    pub fn position(&self) -> Option<String> {
        self.game.as_ref().map(|game| game.engine.fen())
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.phase == Phase::AwaitingReply
    }

    /// Create a fresh game on the service and render its starting position.
    pub async fn new_game(&mut self) -> Result<i64, ClientError> {
        self.view.clear_error();

        let raw_id = self.api.create_game().await?;
        let game_id = raw_id
            .parse::<i64>()
            .map_err(|_| ClientError::MalformedId(raw_id.clone()))?;

        let state = self.api.fetch_state(game_id).await?;
        self.install(game_id, state)?;

        tracing::info!("started game {game_id}");
        Ok(game_id)
    }

    /// Load an existing game. The identifier comes from the form input if
    /// one was typed, otherwise from the URL parameter; whichever wins must
    /// be numeric. Returns false when there was nothing to load or the
    /// service does not know the game (the latter shows an inline error).
    pub async fn load_game(
        &mut self,
        form_input: Option<&str>,
        url_param: Option<&str>,
    ) -> Result<bool, ClientError> {
        let Some(game_id) = resolve_game_id(form_input, url_param) else {
            return Ok(false);
        };

        match self.api.fetch_state(game_id).await {
            Ok(state) => {
                self.install(game_id, state)?;
                self.view.clear_error();
                Ok(true)
            }
            Err(ClientError::GameNotFound) => {
                tracing::debug!("game {game_id} not found");
                self.view.show_error("Game ID not found");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Synchronous half of a user move, called from the widget's drop
    /// handler. Refuses the move while another is in flight, when no game
    /// is loaded, or when the local engine rejects it.
    pub fn stage_move(&mut self, from: &str, to: &str) -> StageOutcome {
        if self.phase == Phase::AwaitingReply {
            tracing::debug!("move refused: previous move still awaiting its reply");
            return StageOutcome::Snapback;
        }
        let Some(game) = self.game.as_mut() else {
            tracing::debug!("move refused: no game loaded");
            return StageOutcome::Snapback;
        };

        let undo = game.engine.snapshot();
        let played = match game.engine.play(from, to) {
            Ok(played) => played,
            Err(e) => {
                tracing::debug!("move refused locally: {e}");
                return StageOutcome::Snapback;
            }
        };

        let fen = game.engine.fen();
        self.view.set_position(&fen);
        self.phase = Phase::AwaitingReply;

        StageOutcome::Staged(StagedMove {
            from: played.from,
            to: played.to,
            undo,
        })
    }

    /// Asynchronous half: submit the staged move and reconcile. Any failure
    /// restores the position from before the user's move.
    pub async fn finish_move(&mut self, staged: StagedMove) -> Result<(), ClientError> {
        let result = self.exchange(&staged).await;
        self.phase = Phase::Idle;

        if let Err(e) = result {
            tracing::warn!("move {}{} failed, rolling back: {e}", staged.from, staged.to);
            self.rollback(&staged.undo)?;
            return Err(e);
        }
        Ok(())
    }

    /// Stage and finish in one call. Returns false for a snapback.
    pub async fn submit_move(&mut self, from: &str, to: &str) -> Result<bool, ClientError> {
        match self.stage_move(from, to) {
            StageOutcome::Snapback => Ok(false),
            StageOutcome::Staged(staged) => {
                self.finish_move(staged).await?;
                Ok(true)
            }
        }
    }

    async fn exchange(&mut self, staged: &StagedMove) -> Result<(), ClientError> {
        let game = self.game.as_mut().ok_or(ClientError::NoGame)?;
        let reply = self
            .api
            .send_move(game.id, &staged.from, &staged.to)
            .await?;

        // Null squares mean the player's own move ended the game.
        if let (Some(from), Some(to)) = (reply.from.as_deref(), reply.to.as_deref()) {
            game.engine.play(from, to)?;
        }

        let fen = game.engine.fen();
        self.view.set_position(&fen);
        Ok(())
    }

    fn rollback(&mut self, undo: &EngineSnapshot) -> Result<(), ClientError> {
        let game = self.game.as_mut().ok_or(ClientError::NoGame)?;
        game.engine = EngineGame::from_snapshot(undo)?;
        let fen = game.engine.fen();
        self.view.set_position(&fen);
        Ok(())
    }

    fn install(&mut self, game_id: i64, state: GameState) -> Result<(), ClientError> {
        let engine = EngineGame::from_snapshot(&state.engine_state)?;
        self.view.set_position(&state.fen);
        self.view.set_game_id(&game_id.to_string());
        self.game = Some(LoadedGame {
            id: game_id,
            engine,
        });
        self.phase = Phase::Idle;
        Ok(())
    }
}

/// Resolution order is the raw form input first, then the URL parameter;
/// whichever is chosen must parse as a positive integer or there is no game
/// to load at all.
pub fn resolve_game_id(form_input: Option<&str>, url_param: Option<&str>) -> Option<i64> {
    let raw = [form_input, url_param]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|raw| !raw.is_empty())?;
    raw.parse().ok().filter(|id| *id > 0)
}
