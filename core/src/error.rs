use alloc::string::String;
use thiserror::Error;

use crate::CategoryId;

/// Failure while pulling game data from the trivia source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Malformed(String),
    #[error("No categories with at least {min_clues} clues")]
    NoEligibleCategories { min_clues: usize },
    #[error("Loaded categories have no playable clues")]
    NoPlayableClues,
    #[error("Category {0} was returned more than once")]
    DuplicateCategory(CategoryId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("A game is already loading")]
    AlreadyLoading,
    #[error("Load result belongs to a game that was reset or replaced")]
    StaleLoad,
    #[error("Failed to load game: {0}")]
    Fetch(#[from] FetchError),
}

pub type Result<T> = core::result::Result<T, GameError>;
