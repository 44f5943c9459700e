//! Interactive step-through of every legal move in a position.
//!
//! Used to eyeball a suspect move once divide has narrowed a perft bug down
//! to one line: each move is shown played and then taken back.

use std::io::{self, BufRead, Write};

use tracing::debug;

use castellan_core::{Board, Move};

/// Walk every legal move of `board`, printing the board after each play and
/// each undo and waiting for a line on `input` between steps.
///
/// A line reading `q` (or end of input) stops early. Returns the number of
/// moves fully stepped through. The board is unchanged on return.
pub fn step_through<R: BufRead, W: Write>(board: &mut Board, mut input: R, out: &mut W) -> io::Result<usize> {
    let moves = board.legal_moves();
    writeln!(out, "{}", board.pretty())?;
    writeln!(out, "{} legal moves; Enter steps, q quits", moves.len())?;

    let mut stepped = 0;
    for mv in moves {
        board.play_move(mv);
        let shown = show_played(board, mv, out).and_then(|()| wait(&mut input));
        board.undo_move(mv);
        if !shown? {
            break;
        }
        writeln!(out)?;
        writeln!(out, "undone {mv}")?;
        writeln!(out, "{}", board.pretty())?;
        stepped += 1;
        debug!(%mv, "stepped");
        if !wait(&mut input)? {
            break;
        }
    }
    Ok(stepped)
}

fn show_played<W: Write>(board: &Board, mv: Move, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "played {mv}")?;
    writeln!(out, "{}", board.pretty())
}

/// Block for one line of input. Returns `false` on `q` or end of input.
fn wait<R: BufRead>(input: &mut R) -> io::Result<bool> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim() != "q")
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::step_through;
    use castellan_core::Board;

    /// Accepts `budget` writes, then fails every one after.
    struct FailingWriter {
        budget: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::other("disk full"));
            }
            self.budget -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn steps_every_move_and_restores() {
        // King and rook against king: 5 king moves, 9 rook moves, 1 castle.
        let mut board: Board = "4k3/8/8/8/8/8/8/4K2R w K - 0 1".parse().unwrap();
        let before = board.clone();
        let input = "\n".repeat(64);
        let mut out = Vec::new();
        let stepped = step_through(&mut board, input.as_bytes(), &mut out).unwrap();
        assert_eq!(stepped, 15);
        assert_eq!(board, before);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("15 legal moves"));
        assert!(text.contains("played e1g1"));
        assert_eq!(text.matches("undone ").count(), 15);
    }

    #[test]
    fn q_stops_early() {
        let mut board = Board::starting_position();
        let mut out = Vec::new();
        let stepped = step_through(&mut board, "\n\nq\n".as_bytes(), &mut out).unwrap();
        assert_eq!(stepped, 1);
        assert_eq!(board, Board::starting_position());
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn end_of_input_stops() {
        let mut board = Board::starting_position();
        let stepped = step_through(&mut board, "".as_bytes(), &mut Vec::new()).unwrap();
        assert_eq!(stepped, 0);
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn failed_write_still_restores_the_board() {
        for budget in [0, 3, 6, 12, 40] {
            let mut board = Board::starting_position();
            let mut out = FailingWriter { budget };
            let input = "\n".repeat(64);
            let result = step_through(&mut board, input.as_bytes(), &mut out);
            assert!(result.is_err(), "budget {budget} should run out");
            assert_eq!(board, Board::starting_position(), "budget {budget}");
        }
    }
}
