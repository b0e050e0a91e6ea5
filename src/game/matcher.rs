//! Winning row detection.
//!
//! A row wins once every filled cell in it has been called. Blank cells
//! never count for or against a row. Whole-row completion is the only
//! winning pattern.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::game::Game;
use crate::cards::{Card, ROWS};
use crate::core::{BingoError, BingoResult};

/// Matched 1-based row indices in ascending order.
pub type WinningRows = SmallVec<[u8; ROWS]>;

/// Rows of `card` fully covered by the numbers called in `game`.
///
/// Fails with `CardDoesNotBelongToGame` if the card was generated for a
/// different game, and with `InvalidCard` if a loaded card breaks the
/// layout rules.
pub fn match_winning_rows(game: &Game, card: &Card) -> BingoResult<WinningRows> {
    if card.game_id != game.id {
        return Err(BingoError::CardDoesNotBelongToGame {
            card_game: card.game_id,
            game: game.id,
        });
    }
    card.validate()?;

    let called: FxHashSet<u8> = game.called_numbers().iter().map(|ball| ball.number()).collect();

    let mut filled = [0usize; ROWS];
    let mut hits = [0usize; ROWS];
    for cell in &card.grid_numbers {
        let row = cell.row as usize - 1;
        filled[row] += 1;
        if called.contains(&cell.number) {
            hits[row] += 1;
        }
    }

    Ok((0..ROWS)
        .filter(|&row| filled[row] > 0 && hits[row] == filled[row])
        .map(|row| row as u8 + 1)
        .collect())
}
