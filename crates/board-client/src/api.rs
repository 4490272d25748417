//! HTTP access to the game session service, behind a trait so the session
//! logic can be driven against a scripted server in tests.

use async_trait::async_trait;
use chess_engine::EngineSnapshot;
use serde::Deserialize;

use crate::error::ClientError;

/// What `/state` returns for one game.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub fen: String,
    pub engine_state: EngineSnapshot,
}

/// What `/move` returns: the engine's counter-move, or nulls when the
/// player's move ended the game.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyMove {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[async_trait]
pub trait GameApi: Send + Sync {
    async fn create_game(&self) -> Result<String, ClientError>;

    async fn fetch_state(&self, game_id: i64) -> Result<GameState, ClientError>;

    async fn send_move(&self, game_id: i64, from: &str, to: &str)
        -> Result<ReplyMove, ClientError>;
}

pub struct HttpGameApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGameApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn create_game(&self) -> Result<String, ClientError> {
        let resp = self
            .client
            .get(format!("{}/new", self.base_url))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ClientError::Status(resp.status().as_u16()));
        }
        Ok(resp.text().await?.trim().to_string())
    }

    async fn fetch_state(&self, game_id: i64) -> Result<GameState, ClientError> {
        let resp = self
            .client
            .get(format!("{}/state", self.base_url))
            .query(&[("gameId", game_id.to_string())])
            .send()
            .await?;
        if resp.status().as_u16() == 404 {
            return Err(ClientError::GameNotFound);
        }
        if !resp.status().is_success() {
            return Err(ClientError::Status(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }

    async fn send_move(
        &self,
        game_id: i64,
        from: &str,
        to: &str,
    ) -> Result<ReplyMove, ClientError> {
        let resp = self
            .client
            .get(format!("{}/move", self.base_url))
            .query(&[
                ("gameId", game_id.to_string()),
                ("from", from.to_string()),
                ("to", to.to_string()),
            ])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ClientError::Status(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }
}
