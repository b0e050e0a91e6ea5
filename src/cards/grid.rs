//! Grid layout generation for 90-ball bingo cards.
//!
//! A card is a 3x9 grid holding exactly 15 numbers:
//!
//! - every row holds 5 numbers
//! - every column holds 1 to 3 numbers
//! - column `c` (0-based) only holds `10c+1..=10c+9`, except the first
//!   column which holds `1..=9` and the last which holds `80..=90`
//! - numbers ascend top to bottom within a column
//!
//! ## Algorithm
//!
//! Rows 1 and 2 each pick 5 random columns. Columns neither row picked are
//! forced into row 3, and row 3 is topped up to 5 from columns that rows 1/2
//! already cover. Each column then draws as many distinct numbers as it has
//! marks, and the sorted numbers are poured into the marked cells column by
//! column.
//!
//! Output is a pure function of the `CardRng` draw sequence.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::CardRng;

/// Rows on a card.
pub const ROWS: usize = 3;

/// Columns on a card.
pub const COLUMNS: usize = 9;

/// Filled cells per row.
pub const ROW_FILL: usize = 5;

/// Filled cells per card.
pub const CARD_GRID_NUMBERS: usize = ROWS * ROW_FILL;

/// Bit `c` set = column `c` is marked.
type ColumnMask = u16;

const ALL_COLUMNS: ColumnMask = (1 << COLUMNS) - 1;

/// One filled cell. `row` and `col` are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardGridNumber {
    pub row: u8,
    pub col: u8,
    pub number: u8,
}

/// Valid numbers for a 0-based column index.
///
/// ```
/// use bingo_box::cards::column_range;
///
/// assert_eq!(column_range(0), 1..=9);
/// assert_eq!(column_range(4), 41..=49);
/// assert_eq!(column_range(8), 80..=90);
/// ```
#[must_use]
pub fn column_range(col_index: usize) -> RangeInclusive<u8> {
    debug_assert!(col_index < COLUMNS);
    match col_index {
        0 => 1..=9,
        8 => 80..=90,
        c => {
            let base = (c * 10) as u8;
            base + 1..=base + 9
        }
    }
}

/// Which cells of the grid receive a number.
#[derive(Clone, Copy, Debug, Default)]
struct Layout {
    rows: [ColumnMask; ROWS],
}

impl Layout {
    fn draw(rng: &mut CardRng) -> Self {
        let mut layout = Layout::default();
        for row in 0..2 {
            layout.rows[row] = mask_of(&rng.permutation(COLUMNS)[..ROW_FILL]);
        }

        let covered = layout.rows[0] | layout.rows[1];

        // Uncovered columns must go in row 3; at most 4 can be uncovered.
        let mut third = !covered & ALL_COLUMNS;
        for col in rng.permutation(COLUMNS) {
            if third.count_ones() as usize == ROW_FILL {
                break;
            }
            let bit = 1 << col;
            if covered & bit == 0 || third & bit != 0 {
                continue;
            }
            third |= bit;
        }
        layout.rows[2] = third;

        debug_assert!(layout.rows.iter().all(|r| r.count_ones() as usize == ROW_FILL));
        layout
    }

    fn is_marked(&self, row: usize, col: usize) -> bool {
        self.rows[row] & (1 << col) != 0
    }

    fn column_counts(&self) -> [usize; COLUMNS] {
        let mut counts = [0; COLUMNS];
        for (col, count) in counts.iter_mut().enumerate() {
            *count = (0..ROWS).filter(|&row| self.is_marked(row, col)).count();
        }
        counts
    }
}

fn mask_of(columns: &[usize]) -> ColumnMask {
    columns.iter().fold(0, |mask, &col| mask | (1 << col))
}

/// Generate the 15 filled cells of one card.
///
/// Cells are returned column-major, top to bottom within a column.
pub fn generate_grid(rng: &mut CardRng) -> Vec<CardGridNumber> {
    let layout = Layout::draw(rng);

    let mut numbers: SmallVec<[u8; CARD_GRID_NUMBERS]> = SmallVec::new();
    for (col, &count) in layout.column_counts().iter().enumerate() {
        let range = column_range(col);
        let start = *range.start();
        let width = range.len();
        numbers.extend(rng.sample(width, count).into_iter().map(|offset| start + offset as u8));
    }

    // Column ranges are disjoint and ascending, so the sorted run fills
    // each column with its own numbers in ascending order.
    numbers.sort_unstable();

    let mut cells = Vec::with_capacity(CARD_GRID_NUMBERS);
    let mut next = numbers.into_iter();
    for col in 0..COLUMNS {
        for row in 0..ROWS {
            if !layout.is_marked(row, col) {
                continue;
            }
            if let Some(number) = next.next() {
                cells.push(CardGridNumber {
                    row: row as u8 + 1,
                    col: col as u8 + 1,
                    number,
                });
            }
        }
    }
    cells
}

/// A broken card layout rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutViolation {
    #[error("card has {0} numbers, expected 15")]
    WrongCount(usize),

    #[error("cell row {row} col {col} is outside the 3x9 grid")]
    OutOfGrid { row: u8, col: u8 },

    #[error("cell row {row} col {col} is filled twice")]
    DuplicateCell { row: u8, col: u8 },

    #[error("number {0} appears twice")]
    DuplicateNumber(u8),

    #[error("number {number} does not belong in column {col}")]
    WrongColumn { number: u8, col: u8 },

    #[error("row {row} has {count} numbers, expected 5")]
    RowFill { row: u8, count: usize },

    #[error("column {col} has {count} numbers, expected 1 to 3")]
    ColumnFill { col: u8, count: usize },

    #[error("column {col} is not ascending top to bottom")]
    ColumnOrder { col: u8 },
}

/// Check every layout rule against a set of filled cells.
pub fn check_layout(cells: &[CardGridNumber]) -> Result<(), LayoutViolation> {
    if cells.len() != CARD_GRID_NUMBERS {
        return Err(LayoutViolation::WrongCount(cells.len()));
    }

    let mut grid = [[0u8; COLUMNS]; ROWS];
    let mut seen = [false; 91];

    for cell in cells {
        if !(1..=ROWS as u8).contains(&cell.row) || !(1..=COLUMNS as u8).contains(&cell.col) {
            return Err(LayoutViolation::OutOfGrid { row: cell.row, col: cell.col });
        }
        let slot = &mut grid[cell.row as usize - 1][cell.col as usize - 1];
        if *slot != 0 {
            return Err(LayoutViolation::DuplicateCell { row: cell.row, col: cell.col });
        }
        if !column_range(cell.col as usize - 1).contains(&cell.number) {
            return Err(LayoutViolation::WrongColumn { number: cell.number, col: cell.col });
        }
        if seen[cell.number as usize] {
            return Err(LayoutViolation::DuplicateNumber(cell.number));
        }
        seen[cell.number as usize] = true;
        *slot = cell.number;
    }

    for (row, cols) in grid.iter().enumerate() {
        let count = cols.iter().filter(|&&n| n != 0).count();
        if count != ROW_FILL {
            return Err(LayoutViolation::RowFill { row: row as u8 + 1, count });
        }
    }

    for col in 0..COLUMNS {
        let filled: SmallVec<[u8; ROWS]> = (0..ROWS)
            .map(|row| grid[row][col])
            .filter(|&n| n != 0)
            .collect();
        if filled.is_empty() {
            return Err(LayoutViolation::ColumnFill { col: col as u8 + 1, count: filled.len() });
        }
        if filled.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(LayoutViolation::ColumnOrder { col: col as u8 + 1 });
        }
    }

    Ok(())
}
