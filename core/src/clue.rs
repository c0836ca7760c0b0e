use alloc::string::String;
use clueboard_protocol::RawClue;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub id: ClueId,
    pub question: String,
    pub answer: String,
    pub value: Points,
}

impl Clue {
    pub fn new(
        id: ClueId,
        question: impl Into<String>,
        answer: impl Into<String>,
        value: Points,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            value,
        }
    }

    /// Builds a clue from its wire form. A missing or zero value is replaced
    /// by the synthesized value for `position`.
    pub fn from_raw(raw: RawClue, position: usize) -> Self {
        let value = match raw.value {
            Some(value) if value > 0 => value,
            _ => synthesized_value(position),
        };
        Self {
            id: raw.id,
            question: raw.question.unwrap_or_default(),
            answer: raw.answer.unwrap_or_default(),
            value,
        }
    }
}

/// Whether a clue is still on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClueStatus {
    Open,
    Completed,
}

impl ClueStatus {
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl Default for ClueStatus {
    fn default() -> Self {
        Self::Open
    }
}
