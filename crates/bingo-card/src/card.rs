//! Card layout, phrase drawing, and line detection.

use std::collections::HashSet;

use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use show_db::Show;

const DEFAULT_CARD_SIZE: usize = 5;
const MIN_CARD_SIZE: usize = 3;
const MAX_CARD_SIZE: usize = 9;

/// Text of the pinned center cell when the show has no center phrase.
pub const FREE_SPACE: &str = "FREE";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardLayout {
    /// Cells per row and per column.
    pub size: usize,
    /// Pin a free space in the middle when the show has no center phrase.
    pub free_center: bool,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            size: DEFAULT_CARD_SIZE,
            free_center: true,
        }
    }
}

impl CardLayout {
    pub fn new(size: usize, free_center: bool) -> Result<Self, CardError> {
        if !(MIN_CARD_SIZE..=MAX_CARD_SIZE).contains(&size) {
            return Err(CardError::InvalidSize(size));
        }
        Ok(Self { size, free_center })
    }

    fn center_index(&self) -> Option<usize> {
        (self.size % 2 == 1).then(|| (self.size / 2) * self.size + self.size / 2)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cell {
    pub phrase: String,
    pub marked: bool,
    /// Pinned center cell; always marked and never toggled.
    pub pinned: bool,
}

/// A completed line on the card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum Line {
    Row(usize),
    Column(usize),
    Diagonal,
    AntiDiagonal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "CardParts")]
pub struct BingoCard {
    pub show_id: i64,
    pub show_title: String,
    pub size: usize,
    /// Row-major cells.
    cells: Vec<Cell>,
}

/// Unchecked wire form of a card.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardParts {
    show_id: i64,
    show_title: String,
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<CardParts> for BingoCard {
    type Error = CardError;

    fn try_from(parts: CardParts) -> Result<Self, Self::Error> {
        if !(MIN_CARD_SIZE..=MAX_CARD_SIZE).contains(&parts.size) {
            return Err(CardError::InvalidSize(parts.size));
        }
        let expected = parts.size * parts.size;
        if parts.cells.len() != expected {
            return Err(CardError::CellCount {
                expected,
                found: parts.cells.len(),
            });
        }
        Ok(Self {
            show_id: parts.show_id,
            show_title: parts.show_title,
            size: parts.size,
            cells: parts.cells,
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CardError {
    #[error("card size {0} is outside 3..=9")]
    InvalidSize(usize),
    #[error("not enough phrases: need {needed}, have {available}")]
    NotEnoughPhrases { needed: usize, available: usize },
    #[error("cell ({row}, {col}) is off the card")]
    OutOfBounds { row: usize, col: usize },
    #[error("the center cell is pinned")]
    CenterLocked,
    #[error("card holds {found} cells, expected {expected}")]
    CellCount { expected: usize, found: usize },
}

/// Center phrase for `show` under `layout`, if the center is pinned.
fn center_phrase(show: &Show, layout: &CardLayout) -> Option<String> {
    layout.center_index()?;
    match show.center_square.as_deref().map(str::trim) {
        Some(phrase) if !phrase.is_empty() => Some(phrase.to_string()),
        _ if layout.free_center => Some(FREE_SPACE.to_string()),
        _ => None,
    }
}

/// Distinct, trimmed, non-empty phrases in their original order, without the
/// pinned center phrase.
pub fn phrase_pool(show: &Show, layout: &CardLayout) -> Vec<String> {
    let center = center_phrase(show, layout);
    let mut seen = HashSet::new();
    show.phrases
        .iter()
        .map(|phrase| phrase.trim())
        .filter(|phrase| !phrase.is_empty())
        .filter(|phrase| center.as_deref() != Some(*phrase))
        .filter(|phrase| seen.insert(phrase.to_string()))
        .map(str::to_string)
        .collect()
}

/// Number of drawn phrases a card for `show` needs.
pub fn required_phrases(show: &Show, layout: &CardLayout) -> usize {
    let cells = layout.size * layout.size;
    if center_phrase(show, layout).is_some() {
        cells - 1
    } else {
        cells
    }
}

pub fn generate_card(show: &Show, layout: &CardLayout) -> Result<BingoCard, CardError> {
    let mut rng = OsRng;
    generate_card_with_rng(show, layout, &mut rng)
}

pub fn generate_card_with_rng<R: Rng + ?Sized>(
    show: &Show,
    layout: &CardLayout,
    rng: &mut R,
) -> Result<BingoCard, CardError> {
    if !(MIN_CARD_SIZE..=MAX_CARD_SIZE).contains(&layout.size) {
        return Err(CardError::InvalidSize(layout.size));
    }

    let needed = required_phrases(show, layout);
    let mut pool = phrase_pool(show, layout);
    if pool.len() < needed {
        return Err(CardError::NotEnoughPhrases {
            needed,
            available: pool.len(),
        });
    }

    pool.shuffle(rng);
    pool.truncate(needed);

    let center = center_phrase(show, layout);
    let center_index = center.as_ref().and(layout.center_index());
    let mut drawn = pool.into_iter();
    let mut cells = Vec::with_capacity(layout.size * layout.size);
    for index in 0..layout.size * layout.size {
        let cell = match (&center, center_index) {
            (Some(phrase), Some(c)) if c == index => Cell {
                phrase: phrase.clone(),
                marked: true,
                pinned: true,
            },
            _ => Cell {
                phrase: drawn.next().unwrap_or_default(),
                marked: false,
                pinned: false,
            },
        };
        cells.push(cell);
    }

    Ok(BingoCard {
        show_id: show.id,
        show_title: show.show_title.clone(),
        size: layout.size,
        cells,
    })
}

impl BingoCard {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Flip the mark on a cell and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, CardError> {
        if row >= self.size || col >= self.size {
            return Err(CardError::OutOfBounds { row, col });
        }
        let cell = &mut self.cells[row * self.size + col];
        if cell.pinned {
            return Err(CardError::CenterLocked);
        }
        cell.marked = !cell.marked;
        Ok(cell.marked)
    }

    pub fn clear_marks(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| !cell.pinned) {
            cell.marked = false;
        }
    }

    /// Every fully marked row, column, and diagonal.
    pub fn completed_lines(&self) -> Vec<Line> {
        let n = self.size;
        let marked = |row: usize, col: usize| self.cells[row * n + col].marked;

        let mut lines = Vec::new();
        for row in 0..n {
            if (0..n).all(|col| marked(row, col)) {
                lines.push(Line::Row(row));
            }
        }
        for col in 0..n {
            if (0..n).all(|row| marked(row, col)) {
                lines.push(Line::Column(col));
            }
        }
        if (0..n).all(|i| marked(i, i)) {
            lines.push(Line::Diagonal);
        }
        if (0..n).all(|i| marked(i, n - 1 - i)) {
            lines.push(Line::AntiDiagonal);
        }
        lines
    }

    pub fn has_bingo(&self) -> bool {
        !self.completed_lines().is_empty()
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
