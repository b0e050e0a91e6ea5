//! Bingo cards.
//!
//! A `Card` is created in memory by [`Card::random`], numbered before it is
//! persisted, and gets its storage `id` on first save. Afterwards the only
//! permitted change is attaching a player.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{
    check_layout, generate_grid, CardGridNumber, LayoutViolation, COLUMNS, ROWS, ROW_FILL,
};
use crate::core::{CardId, CardRng, GameId, PlayerId};

/// Dense view of a card. Blank cells are 0.
pub type CardMatrix = [[u8; COLUMNS]; ROWS];

/// A 90-ball bingo card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Storage id. `None` until the card has been saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CardId>,

    /// Sequential number, unique within the game.
    pub number: u64,

    /// Game the card was generated for.
    pub game_id: GameId,

    /// Player holding the card, if it was handed out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,

    /// The 15 filled cells.
    pub grid_numbers: Vec<CardGridNumber>,
}

impl Card {
    /// Create a card with a freshly generated grid.
    ///
    /// The grid depends only on the draws taken from `rng`, so a card can be
    /// regenerated from the [`CardRngState`](crate::core::CardRngState)
    /// recorded just before the call.
    #[must_use]
    pub fn random(rng: &mut CardRng, game_id: GameId, number: u64) -> Self {
        Self {
            id: None,
            number,
            game_id,
            player_id: None,
            grid_numbers: generate_grid(rng),
        }
    }

    /// Hand the card to a player.
    pub fn assign_player(&mut self, player_id: PlayerId) {
        self.player_id = Some(player_id);
    }

    /// Dense 3x9 view where `matrix[row - 1][col - 1]` is the cell's number.
    ///
    /// Cells outside the grid are left out; use [`Card::validate`] to reject
    /// such a card.
    ///
    /// ```
    /// use bingo_box::cards::Card;
    /// use bingo_box::core::{CardRng, GameId};
    ///
    /// let card = Card::random(&mut CardRng::new(1), GameId::new(1), 1);
    /// let m = card.matrix();
    /// for cell in &card.grid_numbers {
    ///     assert_eq!(m[cell.row as usize - 1][cell.col as usize - 1], cell.number);
    /// }
    /// ```
    #[must_use]
    pub fn matrix(&self) -> CardMatrix {
        let mut m = [[0; COLUMNS]; ROWS];
        for cell in &self.grid_numbers {
            let (Some(row), Some(col)) = (cell.row.checked_sub(1), cell.col.checked_sub(1)) else {
                continue;
            };
            if let Some(slot) = m.get_mut(row as usize).and_then(|r| r.get_mut(col as usize)) {
                *slot = cell.number;
            }
        }
        m
    }

    /// All numbers on the card, ascending.
    #[must_use]
    pub fn numbers(&self) -> Vec<u8> {
        let mut nums: Vec<u8> = self.grid_numbers.iter().map(|cell| cell.number).collect();
        nums.sort_unstable();
        nums
    }

    /// Filled numbers of a 1-based row, left to right.
    #[must_use]
    pub fn row_numbers(&self, row: u8) -> SmallVec<[u8; ROW_FILL]> {
        let mut cells: SmallVec<[&CardGridNumber; ROW_FILL]> =
            self.grid_numbers.iter().filter(|cell| cell.row == row).collect();
        cells.sort_unstable_by_key(|cell| cell.col);
        cells.into_iter().map(|cell| cell.number).collect()
    }

    /// Does the grid satisfy every layout rule?
    pub fn validate(&self) -> Result<(), LayoutViolation> {
        check_layout(&self.grid_numbers)
    }

    /// Shorthand for `validate().is_ok()`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_card_fields() {
        let card = Card::random(&mut CardRng::new(1), GameId::new(4), 17);

        assert_eq!(card.id, None);
        assert_eq!(card.player_id, None);
        assert_eq!(card.game_id, GameId::new(4));
        assert_eq!(card.number, 17);
        assert!(card.is_valid());
    }

    #[test]
    fn test_numbers_are_unique_and_ascending() {
        let card = Card::random(&mut CardRng::new(1), GameId::new(1), 1);
        let nums = card.numbers();

        assert_eq!(nums.len(), 15);
        assert!(nums.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_matrix_matches_grid_numbers() {
        let card = Card::random(&mut CardRng::new(1), GameId::new(1), 1);
        let m = card.matrix();

        assert_eq!(m.len(), 3);
        for cell in &card.grid_numbers {
            assert_eq!(m[cell.row as usize - 1][cell.col as usize - 1], cell.number);
        }

        let filled = m.iter().flatten().filter(|&&n| n != 0).count();
        assert_eq!(filled, 15);
    }

    #[test]
    fn test_row_numbers() {
        let card = Card::random(&mut CardRng::new(2), GameId::new(1), 1);
        let m = card.matrix();

        for row in 1..=3u8 {
            let nums = card.row_numbers(row);
            let expected: Vec<u8> =
                m[row as usize - 1].iter().copied().filter(|&n| n != 0).collect();
            assert_eq!(nums.as_slice(), expected.as_slice());
            assert_eq!(nums.len(), 5);
        }
        assert!(card.row_numbers(4).is_empty());
    }

    #[test]
    fn test_assign_player() {
        let mut card = Card::random(&mut CardRng::new(2), GameId::new(1), 1);
        let grid = card.grid_numbers.clone();

        card.assign_player(PlayerId::new(9));

        assert_eq!(card.player_id, Some(PlayerId::new(9)));
        assert_eq!(card.grid_numbers, grid);
    }

    #[test]
    fn test_same_seed_same_card() {
        let a = Card::random(&mut CardRng::new(99), GameId::new(1), 1);
        let b = Card::random(&mut CardRng::new(99), GameId::new(1), 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_field_names() {
        let card = Card::random(&mut CardRng::new(1), GameId::new(3), 2);
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["number"], 2);
        assert_eq!(json["gameId"], 3);
        assert!(json.get("id").is_none());
        assert!(json.get("playerId").is_none());
        assert_eq!(json["gridNumbers"].as_array().unwrap().len(), 15);

        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn test_matrix_skips_cells_outside_grid() {
        let mut card = Card::random(&mut CardRng::new(1), GameId::new(1), 1);
        card.grid_numbers[0].row = 0;
        card.grid_numbers[1].col = 10;

        let m = card.matrix();
        let filled = m.iter().flatten().filter(|&&n| n != 0).count();
        assert_eq!(filled, 13);
        assert!(!card.is_valid());
    }
}
