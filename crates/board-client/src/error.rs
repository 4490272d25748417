use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no game loaded")]
    NoGame,

    #[error("game ID not found")]
    GameNotFound,

    #[error("malformed game id: {0}")]
    MalformedId(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Engine(#[from] chess_engine::EngineError),
}
