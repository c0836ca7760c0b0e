//! In-memory trivia source for tests.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use clueboard_protocol::{CategoryDetail, CategorySummary, RawClue};

use crate::*;

pub(crate) fn summary(id: CategoryId, clues_count: u32) -> CategorySummary {
    CategorySummary {
        id,
        title: alloc::format!("category {id}"),
        clues_count,
    }
}

pub(crate) fn raw_clue(id: ClueId, question: &str, answer: &str, value: Option<Points>) -> RawClue {
    RawClue {
        id,
        question: Some(String::from(question)),
        answer: Some(String::from(answer)),
        value,
    }
}

pub(crate) fn detail(id: CategoryId, clues: Vec<RawClue>) -> CategoryDetail {
    CategoryDetail {
        id,
        title: alloc::format!("category {id}"),
        clues,
    }
}

pub(crate) struct FakeSource {
    listing: core::result::Result<Vec<CategorySummary>, FetchError>,
    details: BTreeMap<CategoryId, core::result::Result<CategoryDetail, FetchError>>,
    category_requests: RefCell<Vec<usize>>,
    detail_requests: RefCell<Vec<CategoryId>>,
}

impl FakeSource {
    pub(crate) fn new(summaries: Vec<CategorySummary>) -> Self {
        Self {
            listing: Ok(summaries),
            details: BTreeMap::new(),
            category_requests: RefCell::default(),
            detail_requests: RefCell::default(),
        }
    }

    pub(crate) fn failing_listing(err: FetchError) -> Self {
        Self {
            listing: Err(err),
            ..Self::new(Vec::new())
        }
    }

    /// Categories `1..=count`, each with `clues` playable clues valued by row.
    pub(crate) fn with_categories(count: CategoryId, clues: u32) -> Self {
        let mut source = Self::new((1..=count).map(|id| summary(id, clues)).collect());
        for id in 1..=count {
            let raw = (0..u64::from(clues))
                .map(|row| raw_clue(id * 100 + row, "question", "answer", None))
                .collect();
            source.details.insert(id, Ok(detail(id, raw)));
        }
        source
    }

    pub(crate) fn with_detail(mut self, detail: CategoryDetail) -> Self {
        self.details.insert(detail.id, Ok(detail));
        self
    }

    pub(crate) fn fail_detail(mut self, id: CategoryId, err: FetchError) -> Self {
        self.details.insert(id, Err(err));
        self
    }

    /// Makes a request for `id` answer with the detail of `other`.
    pub(crate) fn alias_detail(mut self, id: CategoryId, other: CategoryId) -> Self {
        let aliased = self.details[&other].clone();
        self.details.insert(id, aliased);
        self
    }

    pub(crate) fn category_requests(&self) -> Vec<usize> {
        self.category_requests.borrow().clone()
    }

    pub(crate) fn detail_requests(&self) -> Vec<CategoryId> {
        self.detail_requests.borrow().clone()
    }
}

impl TriviaSource for FakeSource {
    async fn categories(&self, count: usize) -> core::result::Result<Vec<CategorySummary>, FetchError> {
        self.category_requests.borrow_mut().push(count);
        self.listing.clone()
    }

    async fn category(&self, id: CategoryId) -> core::result::Result<CategoryDetail, FetchError> {
        self.detail_requests.borrow_mut().push(id);
        self.details
            .get(&id)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}
