//! Game state wrapper around shakmaty: coordinate-move application, FEN
//! export, and the engine's reply move.

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, EnPassantMode, File, Move, Position, Role, Square};

use crate::error::EngineError;
use crate::search;
use crate::snapshot::EngineSnapshot;

/// A move that was applied to the board, as a pair of lowercase squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub from: String,
    pub to: String,
}

/// A chess game: the current position plus the move history that produced it.
#[derive(Debug, Clone)]
pub struct EngineGame {
    position: Chess,
    history: Vec<String>,
}

impl EngineGame {
    pub fn new() -> Self {
        Self {
            position: Chess::default(),
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let fen: Fen = fen
            .parse()
            .map_err(|e| EngineError::InvalidFen(format!("{e}")))?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| EngineError::InvalidFen(format!("{e}")))?;
        Ok(Self {
            position,
            history: Vec::new(),
        })
    }

    /// Rebuild a game from a previously exported snapshot.
    pub fn from_snapshot(snapshot: &EngineSnapshot) -> Result<Self, EngineError> {
        let mut game = Self::from_fen(&snapshot.fen)?;
        game.history = snapshot.history.clone();
        Ok(game)
    }

    pub fn fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            fen: self.fen(),
            history: self.history.clone(),
            check: self.position.is_check(),
            check_mate: self.position.is_checkmate(),
            is_finished: self.is_finished(),
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Checkmate, stalemate, or a dead position: no further moves accepted.
    pub fn is_finished(&self) -> bool {
        self.position.is_checkmate()
            || self.position.is_stalemate()
            || self.position.is_insufficient_material()
    }

    /// Validate and apply a move given as a pair of squares ("e2", "e4").
    ///
    /// Square names are accepted in either case. Castling is given as the
    /// king's two-file hop; promotions always pick a queen.
    pub fn play(&mut self, from: &str, to: &str) -> Result<PlayedMove, EngineError> {
        if self.is_finished() {
            return Err(EngineError::GameOver);
        }

        let from_sq = parse_square(from)?;
        let to_sq = parse_square(to)?;

        let mut chosen: Option<Move> = None;
        for m in self.position.legal_moves() {
            let (m_from, m_to) = move_endpoints(&m);
            if m_from != from_sq || m_to != to_sq {
                continue;
            }
            // All four promotions share the same squares; take the queen.
            if chosen.is_none() || m.promotion() == Some(Role::Queen) {
                chosen = Some(m);
            }
        }

        let m = chosen.ok_or_else(|| EngineError::IllegalMove(format!("{from_sq}{to_sq}")))?;
        Ok(self.apply(&m))
    }

    /// Pick and play the engine's counter-move. `None` when the game ended
    /// before the engine could answer.
    pub fn reply(&mut self, depth: u8) -> Result<Option<PlayedMove>, EngineError> {
        if self.is_finished() {
            return Ok(None);
        }
        let m = search::best_move(&self.position, depth).ok_or(EngineError::GameOver)?;
        let (from, to) = move_endpoints(&m);
        // Replay through the coordinate path so both ends of the wire
        // normalize promotions the same way.
        let played = self.play(&from.to_string(), &to.to_string())?;
        Ok(Some(played))
    }

    fn apply(&mut self, m: &Move) -> PlayedMove {
        let uci = UciMove::from_move(m, CastlingMode::Standard).to_string();
        let (from, to) = move_endpoints(m);
        self.position.play_unchecked(m);
        self.history.push(uci);
        PlayedMove {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl Default for EngineGame {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_square(raw: &str) -> Result<Square, EngineError> {
    raw.trim()
        .to_ascii_lowercase()
        .parse()
        .map_err(|_| EngineError::InvalidSquare(raw.to_string()))
}

/// The squares a move occupies on the rendered board. Castling maps to the
/// king's own hop rather than shakmaty's king-and-rook pair.
fn move_endpoints(m: &Move) -> (Square, Square) {
    match *m {
        Move::Normal { from, to, .. } => (from, to),
        Move::EnPassant { from, to } => (from, to),
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                File::new(6)
            } else {
                File::new(2)
            };
            (king, Square::from_coords(file, king.rank()))
        }
        _ => (m.to(), m.to()),
    }
}
