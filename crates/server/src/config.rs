use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub public_dir: String,
    pub state_db: Option<String>,
    pub ai_depth: u8,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8787),
            public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
            // Unset means in-memory; set it to e.g. sqlite:games.db to persist.
            state_db: env::var("STATE_DB").ok().filter(|v| !v.is_empty()),
            ai_depth: env::var("AI_DEPTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
        }
    }
}
