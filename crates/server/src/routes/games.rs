use std::sync::Arc;

use axum::{extract::Query, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::AppError;
use crate::game_id::{GameId, GameIdGenerator};
use crate::record::GameRecord;
use crate::store::SharedStore;
use chess_engine::EngineGame;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateQuery {
    pub game_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveQuery {
    pub game_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// The engine's answer to a player move. Both squares are null when the
/// player's move ended the game.
#[derive(Serialize)]
pub struct MoveReply {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// GET /new
///
/// Creates a game at the starting position and returns its ID as plain text.
pub async fn new_game(
    Extension(store): Extension<SharedStore>,
    Extension(ids): Extension<Arc<GameIdGenerator>>,
) -> Result<String, AppError> {
    let game = EngineGame::new();
    let game_id = ids.next_id();

    let record = GameRecord::from_engine(&game);
    let raw = record
        .encode()
        .map_err(|e| AppError::Internal(format!("encode game record: {e}")))?;
    store.put(&game_id.to_string(), &raw).await?;

    tracing::info!("Created game {game_id}");
    Ok(game_id.to_string())
}

/// GET /state?gameId=...
pub async fn get_state(
    Extension(store): Extension<SharedStore>,
    Query(q): Query<StateQuery>,
) -> Result<Json<GameRecord>, AppError> {
    // An unparsable ID can never be a stored key, so it reads as unknown.
    let game_id = q
        .game_id
        .as_deref()
        .and_then(GameId::parse)
        .ok_or_else(|| AppError::NotFound("Invalid game ID".to_string()))?;

    let raw = store
        .get(&game_id.to_string())
        .await?
        .ok_or_else(|| AppError::NotFound("Invalid game ID".to_string()))?;

    let record = GameRecord::decode(&raw)
        .map_err(|_| AppError::BadRequest("Invalid game state".to_string()))?;

    Ok(Json(record))
}

/// GET /move?gameId=...&from=e2&to=e4
///
/// Applies the player's move, lets the engine answer, and persists the new
/// state with a compare-and-swap so racing writers cannot silently clobber
/// each other.
pub async fn apply_move(
    Extension(store): Extension<SharedStore>,
    Extension(config): Extension<Config>,
    Query(q): Query<MoveQuery>,
) -> Result<Json<MoveReply>, AppError> {
    let game_id = q
        .game_id
        .as_deref()
        .and_then(GameId::parse)
        .ok_or_else(|| AppError::BadRequest("Invalid game ID".to_string()))?;
    let key = game_id.to_string();

    let previous = store
        .get(&key)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid game ID".to_string()))?;
    let record = GameRecord::decode(&previous)
        .map_err(|_| AppError::BadRequest("Invalid game ID".to_string()))?;

    let mut game = EngineGame::from_snapshot(&record.engine_state)
        .map_err(|_| AppError::BadRequest("Invalid game ID".to_string()))?;

    let from = q.from.as_deref().unwrap_or_default();
    let to = q.to.as_deref().unwrap_or_default();
    game.play(from, to).map_err(|e| {
        tracing::debug!("Game {game_id}: rejected move {from}->{to}: {e}");
        AppError::BadRequest("Invalid move".to_string())
    })?;

    let reply = game
        .reply(config.ai_depth)
        .map_err(|e| AppError::Internal(format!("reply search failed: {e}")))?;

    let updated = GameRecord::from_engine(&game);
    let raw = updated
        .encode()
        .map_err(|e| AppError::Internal(format!("encode game record: {e}")))?;

    if !store.put_if(&key, &previous, &raw).await? {
        return Err(AppError::Conflict(
            "Game state changed, move not applied".to_string(),
        ));
    }

    let (reply_from, reply_to) = match reply {
        Some(m) => (Some(m.from), Some(m.to)),
        None => (None, None),
    };
    Ok(Json(MoveReply {
        from: reply_from,
        to: reply_to,
    }))
}
