use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Reveal stage of the clue currently on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Idle,
    QuestionShown,
    AnswerShown,
}

impl Stage {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::Idle
    }
}

/// The clue mid-reveal. Only exists while the stage is not [`Stage::Idle`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveClue {
    pub category_id: CategoryId,
    pub clue_id: ClueId,
    pub clue: Clue,
    pub stage: Stage,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClueOutcome {
    NoChange,
    QuestionShown,
    AnswerShown,
    Completed,
    GameOver,
}

impl ClueOutcome {
    pub const fn has_update(self) -> bool {
        use ClueOutcome::*;
        match self {
            NoChange => false,
            QuestionShown => true,
            AnswerShown => true,
            Completed => true,
            GameOver => true,
        }
    }
}

/// Mutable state of one playthrough.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    categories: Vec<Category>,
    score: Score,
    active: Option<ActiveClue>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categories keep the given order. A repeated category id is dropped.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut session = Self::new();
        for category in categories {
            if session.category(category.id()).is_some() {
                log::warn!("Dropping duplicate category {}", category.id());
                continue;
            }
            session.categories.push(category);
        }
        session
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, category_id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.id() == category_id)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn active_clue(&self) -> Option<&ActiveClue> {
        self.active.as_ref()
    }

    pub fn stage(&self) -> Stage {
        self.active.as_ref().map_or(Stage::Idle, |active| active.stage)
    }

    pub fn clue_status(&self, category_id: CategoryId, clue_id: ClueId) -> Option<ClueStatus> {
        self.category(category_id)?.status_of(clue_id)
    }

    /// A loaded session is over once every category has run out of clues.
    pub fn is_over(&self) -> bool {
        !self.categories.is_empty() && self.categories.iter().all(Category::is_exhausted)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Puts a clue's question up. Ignored while another clue is mid-reveal or
    /// when the reference no longer resolves to an open clue.
    pub fn select_clue(&mut self, category_id: CategoryId, clue_id: ClueId) -> ClueOutcome {
        if !self.stage().is_idle() {
            log::trace!(
                "Ignoring selection of {}/{}, a clue is already active",
                category_id,
                clue_id
            );
            return ClueOutcome::NoChange;
        }

        let Some(clue) = self
            .category(category_id)
            .and_then(|category| category.clue(clue_id))
        else {
            log::debug!("Ignoring stale clue reference {}/{}", category_id, clue_id);
            return ClueOutcome::NoChange;
        };

        self.active = Some(ActiveClue {
            category_id,
            clue_id,
            clue: clue.clone(),
            stage: Stage::QuestionShown,
        });
        ClueOutcome::QuestionShown
    }

    /// Moves the active clue one stage forward. Leaving the answer scores the
    /// clue and removes it from its category in the same step.
    pub fn advance_active_clue(&mut self) -> ClueOutcome {
        let Some(active) = self.active.as_mut() else {
            log::trace!("No active clue to advance");
            return ClueOutcome::NoChange;
        };

        match active.stage {
            Stage::Idle => ClueOutcome::NoChange,
            Stage::QuestionShown => {
                active.stage = Stage::AnswerShown;
                ClueOutcome::AnswerShown
            }
            Stage::AnswerShown => {
                let ActiveClue {
                    category_id,
                    clue_id,
                    ..
                } = *active;
                self.active = None;
                self.complete(category_id, clue_id)
            }
        }
    }

    fn complete(&mut self, category_id: CategoryId, clue_id: ClueId) -> ClueOutcome {
        let value = self
            .categories
            .iter_mut()
            .find(|cat| cat.id() == category_id)
            .and_then(|category| category.complete(clue_id))
            .map(|clue| clue.value);

        let Some(value) = value else {
            log::warn!("Active clue {}/{} vanished before scoring", category_id, clue_id);
            return ClueOutcome::NoChange;
        };

        self.score = self.score.saturating_add(Score::from(value));
        log::debug!("Completed {}/{} for {}, score {}", category_id, clue_id, value, self.score);

        if self.is_over() {
            ClueOutcome::GameOver
        } else {
            ClueOutcome::Completed
        }
    }
}
