//! Algebraic text for squares and positions, plus the one-character verdict grid.
//!
//! Squares print as `a1`..`h8`. A position prints its pawns a-file first and the queen as
//! `Q<square>`, leading when Black is to move and trailing when White is: `Qd1 d6 e6` and
//! `d6 e6 Qd1`.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::board::Board;
use crate::core::square::Square;
use crate::error::QpError;
use crate::pieces::{Pawns, Side, Status};
use crate::position::Position;
use crate::solve::evaluate::Engine;

const FILE_LETTERS: &[u8; 8] = b"abcdefgh";

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = FILE_LETTERS[self.file() as usize - 1] as char;
        write!(f, "{letter}{}", self.rank())
    }
}

impl FromStr for Square {
    type Err = QpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || QpError::InvalidSquare {
            text: s.to_string(),
        };
        let bytes = s.trim().as_bytes();
        let [file, rank] = bytes else {
            return Err(invalid());
        };
        let file = FILE_LETTERS
            .iter()
            .position(|&c| c == file.to_ascii_lowercase())
            .ok_or_else(invalid)?;
        let rank = match rank {
            b'1'..=b'8' => rank - b'0',
            _ => return Err(invalid()),
        };
        Ok(Square::new(file as u8 + 1, rank))
    }
}

impl fmt::Display for Pawns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{sq}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pawns = self.pawns();
        match (self.side(), pawns.is_empty()) {
            (_, true) => write!(f, "Q{}", self.queen()),
            (Side::Black, false) => write!(f, "Q{} {pawns}", self.queen()),
            (Side::White, false) => write!(f, "{pawns} Q{}", self.queen()),
        }
    }
}

fn place_pawn(pawns: &mut Pawns, token: &str) -> Result<(), QpError> {
    let sq: Square = token.parse()?;
    if sq.rank() == 1 {
        return Err(QpError::InvalidPosition {
            reason: format!("pawn on {sq}: pawns never stand on rank 1"),
        });
    }
    if let Some(prev) = pawns.pawn_on_file(sq.file()) {
        return Err(QpError::InvalidPosition {
            reason: format!("pawns {prev} and {sq} share a file"),
        });
    }
    pawns.set(sq);
    Ok(())
}

/// Parse whitespace-separated pawn squares: ranks 2..8, one pawn per file.
pub fn parse_pawns(text: &str) -> Result<Pawns, QpError> {
    let mut pawns = Pawns::new();
    for token in text.split_whitespace() {
        place_pawn(&mut pawns, token)?;
    }
    Ok(pawns)
}

/// Parse whitespace-separated pawn squares and one `Q`-prefixed queen square.
///
/// Only placement is checked here (one queen, pawns as in [`parse_pawns`], no shared
/// square); side-specific legality is [`Position::is_valid`].
pub fn parse_position(text: &str, side: Side, board: &Arc<Board>) -> Result<Position, QpError> {
    let invalid = |reason: String| QpError::InvalidPosition { reason };

    let mut pawns = Pawns::new();
    let mut queen: Option<Square> = None;

    for token in text.split_whitespace() {
        if let Some(rest) = token.strip_prefix('Q') {
            let sq: Square = rest.parse()?;
            if queen.replace(sq).is_some() {
                return Err(invalid(format!("more than one queen in {text:?}")));
            }
            continue;
        }
        place_pawn(&mut pawns, token)?;
    }

    let queen = queen.ok_or_else(|| invalid(format!("no queen in {text:?}")))?;
    if pawns.occupies(queen) {
        return Err(invalid(format!("queen and pawn share {queen}")));
    }

    Ok(Position::new(board, side, pawns, queen))
}

/// One-character summary of `(white to move, black to move)` verdicts, from Black's view.
///
/// `+`, `=`, `-`: the queen wins, draws or loses and the placement is illegal with White to
/// move. Otherwise one letter per combination.
pub fn verdict_char(white: Option<Status>, black: Status) -> char {
    use Status::*;
    match (white, black) {
        (None, Win) => '+',
        (None, Draw) => '=',
        (None, Lose) => '-',
        (Some(Win), Win) => '+',
        (Some(Win), Draw) => 'D',
        (Some(Win), Lose) => '-',
        (Some(Draw), Win) => 'B',
        (Some(Draw), Draw) => 'E',
        (Some(Draw), Lose) => 'H',
        (Some(Lose), Win) => 'w',
        (Some(Lose), Draw) => 'F',
        (Some(Lose), Lose) => 'z',
    }
}

/// The 8×8 grid of [`verdict_char`] for every queen square, rank 8 on top; pawn squares
/// show `p`.
pub fn verdict_grid(engine: &mut Engine, pawns: &Pawns) -> Result<String, QpError> {
    if pawns.is_empty() || pawns.promoted_count() > 1 {
        return Err(QpError::InvalidPosition {
            reason: format!("pawn set [{pawns}] has no legal black-to-move placement"),
        });
    }

    let mut out = String::new();
    for rank in (1..=8u8).rev() {
        out.push_str(&rank.to_string());
        for file in 1..=8u8 {
            let queen = Square::new(file, rank);
            let c = if pawns.occupies(queen) {
                'p'
            } else {
                let (white, black) = engine.evaluate_pair(pawns, queen);
                verdict_char(white, black)
            };
            out.push(' ');
            out.push(c);
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_print_and_parse() {
        assert_eq!(Square::new(4, 6).to_string(), "d6");
        assert_eq!("h8".parse::<Square>(), Ok(Square::new(8, 8)));
        assert_eq!("A1".parse::<Square>(), Ok(Square::new(1, 1)));
        for bad in ["", "d", "d9", "i4", "d10", "44"] {
            assert!(bad.parse::<Square>().is_err(), "{bad:?} parsed");
        }
    }

    #[test]
    fn positions_print_queen_first_for_black() {
        let board = Board::shared();
        let black = parse_position("e6 d6 Qd1", Side::Black, &board).unwrap();
        assert_eq!(black.to_string(), "Qd1 d6 e6");
        let white = parse_position("Qd1 d6 e6", Side::White, &board).unwrap();
        assert_eq!(white.to_string(), "d6 e6 Qd1");
    }

    #[test]
    fn parse_position_rejects_bad_placements() {
        let board = Board::shared();
        for bad in ["d6 e6", "d6 Qd1 Qe1", "d6 d5 Qa1", "d1 Qa8", "d6 Qd6", "z9 Qa1"] {
            assert!(
                parse_position(bad, Side::Black, &board).is_err(),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn pawn_lists_share_the_position_checks() {
        let pawns = parse_pawns("d6 e6").unwrap();
        assert_eq!(pawns.to_string(), "d6 e6");
        assert!(parse_pawns("").unwrap().is_empty());
        for bad in ["d1", "d6 d5", "q4"] {
            assert!(parse_pawns(bad).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn grid_marks_pawn_squares() {
        let mut engine = Engine::new();
        let pawns = Pawns::from_squares([Square::new(1, 7)]);
        let grid = verdict_grid(&mut engine, &pawns).unwrap();
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1].split_whitespace().nth(1), Some("p"));
        assert!(verdict_grid(&mut engine, &Pawns::new()).is_err());
    }
}
