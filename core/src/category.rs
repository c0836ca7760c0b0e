use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A clue together with its place on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    clue: Clue,
    status: ClueStatus,
}

impl Slot {
    pub fn clue(&self) -> &Clue {
        &self.clue
    }

    pub fn status(&self) -> ClueStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        !self.status.is_completed()
    }
}

/// One board column.
///
/// The column keeps every clue it was loaded with as a [`Slot`], so completed
/// cells can still be drawn in their original row. The clue sequence seen by
/// the game is the open slots, in load order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    slots: Vec<Slot>,
}

impl Category {
    /// Clue ids must be unique within the category.
    pub fn new(
        id: CategoryId,
        title: impl Into<String>,
        clues: impl IntoIterator<Item = Clue>,
    ) -> Self {
        let slots: Vec<Slot> = clues
            .into_iter()
            .map(|clue| Slot {
                clue,
                status: ClueStatus::Open,
            })
            .collect();
        debug_assert!(
            slots
                .iter()
                .enumerate()
                .all(|(i, slot)| slots[..i].iter().all(|other| other.clue.id != slot.clue.id)),
            "duplicate clue id in category {id}"
        );
        Self {
            id,
            title: title.into(),
            slots,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Remaining clues, in board order.
    pub fn clues(&self) -> impl Iterator<Item = &Clue> + '_ {
        self.slots
            .iter()
            .filter(|slot| slot.is_open())
            .map(|slot| &slot.clue)
    }

    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_open()).count()
    }

    pub fn is_exhausted(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_open())
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, row: usize) -> Option<&Slot> {
        self.slots.get(row)
    }

    /// Looks up a clue that is still in play.
    pub fn clue(&self, clue_id: ClueId) -> Option<&Clue> {
        self.clues().find(|clue| clue.id == clue_id)
    }

    pub fn status_of(&self, clue_id: ClueId) -> Option<ClueStatus> {
        self.slots
            .iter()
            .find(|slot| slot.clue.id == clue_id)
            .map(|slot| slot.status)
    }

    /// Takes a clue off the board. Returns `None` if it is unknown or was
    /// already completed, so a clue can leave the sequence only once.
    pub(crate) fn complete(&mut self, clue_id: ClueId) -> Option<&Clue> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.clue.id == clue_id && slot.is_open())?;
        slot.status = ClueStatus::Completed;
        Some(&slot.clue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn category() -> Category {
        Category::new(
            7,
            "rivers",
            vec![
                Clue::new(1, "Longest river", "Nile", 200),
                Clue::new(2, "Flows through Paris", "Seine", 400),
                Clue::new(3, "Flows through Vienna", "Danube", 600),
            ],
        )
    }

    #[test]
    fn completing_a_clue_removes_it_from_the_sequence() {
        let mut category = category();

        assert_eq!(category.complete(2).map(|clue| clue.value), Some(400));

        assert_eq!(category.remaining(), 2);
        assert!(category.clue(2).is_none());
        assert_eq!(category.status_of(2), Some(ClueStatus::Completed));
        assert_eq!(category.slot(1).map(Slot::status), Some(ClueStatus::Completed));
        let ids: Vec<_> = category.clues().map(|clue| clue.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn a_clue_completes_only_once() {
        let mut category = category();

        assert!(category.complete(1).is_some());
        assert!(category.complete(1).is_none());
        assert!(category.complete(99).is_none());
        assert_eq!(category.remaining(), 2);
    }

    #[test]
    fn exhausted_after_every_clue_completes() {
        let mut category = category();

        for id in [1, 2, 3] {
            assert!(!category.is_exhausted());
            category.complete(id);
        }

        assert!(category.is_exhausted());
        assert_eq!(category.clues().count(), 0);
        assert_eq!(category.slots().len(), 3);
    }
}
