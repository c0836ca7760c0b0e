#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use category::*;
pub use clue::*;
pub use controller::*;
pub use error::*;
pub use fetcher::*;
pub use session::*;
pub use types::*;

mod category;
mod clue;
mod controller;
mod error;
mod fetcher;
mod session;
#[cfg(test)]
mod testing;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: usize,
    pub clues_per_category: usize,
}

impl GameConfig {
    pub const DEFAULT_CATEGORIES: usize = 6;
    pub const DEFAULT_CLUES: usize = 5;
    /// Number of category summaries requested when drawing a board.
    pub const CANDIDATE_BATCH: usize = 100;

    pub const fn new_unchecked(categories: usize, clues_per_category: usize) -> Self {
        Self {
            categories,
            clues_per_category,
        }
    }

    pub fn new(categories: usize, clues_per_category: usize) -> Self {
        Self::new_unchecked(
            categories.clamp(1, Self::CANDIDATE_BATCH),
            clues_per_category.max(1),
        )
    }

    pub const fn total_clues(&self) -> usize {
        self.categories.saturating_mul(self.clues_per_category)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_CATEGORIES, Self::DEFAULT_CLUES)
    }
}
