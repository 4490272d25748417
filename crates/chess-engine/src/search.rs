//! Reply-move selection: material and piece-square evaluation under a
//! shallow alpha-beta search.

use shakmaty::{Chess, Color, File, Move, Position, Rank, Role, Square};

const INFINITY: i32 = 1_000_000;
const MATE_SCORE: i32 = 100_000;

/// Pick the strongest move for the side to play, or `None` if the position
/// has no legal moves. Ties keep the first candidate, so the choice is
/// deterministic for a given position and depth.
pub fn best_move(position: &Chess, depth: u8) -> Option<Move> {
    let mut best: Option<Move> = None;
    let mut alpha = -INFINITY;
    for m in position.legal_moves() {
        let mut child = position.clone();
        child.play_unchecked(&m);
        let score = -negamax(&child, depth.saturating_sub(1), -INFINITY, -alpha);
        if score > alpha {
            alpha = score;
            best = Some(m);
        }
    }
    best
}

fn negamax(position: &Chess, depth: u8, mut alpha: i32, beta: i32) -> i32 {
    let moves = position.legal_moves();
    if moves.is_empty() {
        // Mate scores scale with remaining depth so shorter mates win.
        return if position.is_check() {
            -(MATE_SCORE + i32::from(depth))
        } else {
            0
        };
    }
    if position.is_insufficient_material() {
        return 0;
    }
    if depth == 0 {
        return evaluate(position);
    }

    let mut best = -INFINITY;
    for m in moves {
        let mut child = position.clone();
        child.play_unchecked(&m);
        let score = -negamax(&child, depth - 1, -beta, -alpha);
        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Static evaluation from the side to move's point of view, in centipawns.
fn evaluate(position: &Chess) -> i32 {
    let board = position.board();
    let mut score = 0;
    for rank in 0..8u32 {
        for file in 0..8u32 {
            let square = Square::from_coords(File::new(file), Rank::new(rank));
            let Some(piece) = board.piece_at(square) else {
                continue;
            };
            let table = square_table(piece.role);
            // Tables are written rank-8 first from white's side; black
            // reads them mirrored.
            score += match piece.color {
                Color::White => piece_value(piece.role) + table[((7 - rank) * 8 + file) as usize],
                Color::Black => -piece_value(piece.role) - table[(rank * 8 + file) as usize],
            };
        }
    }
    if position.turn() == Color::Black {
        -score
    } else {
        score
    }
}

fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 0,
    }
}

fn square_table(role: Role) -> &'static [i32; 64] {
    match role {
        Role::Pawn => &PAWN_TABLE,
        Role::Knight => &KNIGHT_TABLE,
        Role::Bishop => &BISHOP_TABLE,
        Role::Rook => &ROOK_TABLE,
        Role::Queen => &QUEEN_TABLE,
        Role::King => &KING_TABLE,
    }
}

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::fen::Fen;
    use shakmaty::CastlingMode;

    fn position(fen: &str) -> Chess {
        fen.parse::<Fen>()
            .unwrap()
            .into_position(CastlingMode::Standard)
            .unwrap()
    }

    #[test]
    fn test_starting_position_is_balanced() {
        assert_eq!(evaluate(&Chess::default()), 0);
    }

    #[test]
    fn test_finds_mate_in_one() {
        // After 1. f3 e5 2. g4 black mates with Qh4.
        let pos = position("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq g3 0 2");
        let m = best_move(&pos, 2).unwrap();
        assert_eq!(m.from(), Some(Square::D8));
        assert_eq!(m.to(), Square::H4);
    }

    #[test]
    fn test_takes_a_hanging_rook() {
        let pos = position("k7/8/8/3q4/8/8/3R4/K7 b - - 0 1");
        let m = best_move(&pos, 2).unwrap();
        assert_eq!(m.from(), Some(Square::D5));
        assert_eq!(m.to(), Square::D2);
    }

    #[test]
    fn test_no_move_in_stalemate() {
        let pos = position("8/8/8/8/8/6q1/5k2/7K w - - 0 1");
        assert!(best_move(&pos, 2).is_none());
    }

    #[test]
    fn test_depth_zero_still_picks_a_move() {
        assert!(best_move(&Chess::default(), 0).is_some());
    }

    #[test]
    fn test_choice_is_deterministic() {
        let first = best_move(&Chess::default(), 2).unwrap();
        let second = best_move(&Chess::default(), 2).unwrap();
        assert_eq!(first, second);
    }
}
