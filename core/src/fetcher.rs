use alloc::vec::Vec;
use clueboard_protocol::{CategoryDetail, CategorySummary, RawClue};
use rand::Rng;

use crate::*;

/// Where category and clue data comes from.
///
/// Implementations perform one request per call and map transport or decode
/// failures into [`FetchError`].
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    async fn categories(&self, count: usize) -> core::result::Result<Vec<CategorySummary>, FetchError>;

    async fn category(&self, id: CategoryId) -> core::result::Result<CategoryDetail, FetchError>;
}

/// Picks `count` distinct items uniformly at random with a partial
/// Fisher-Yates shuffle. Returns every item, shuffled, when there are not
/// enough to choose from.
pub fn sample_distinct<T, R: Rng>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    let len = items.len();
    let count = count.min(len);
    for i in 0..count {
        let j = rng.random_range(i..len);
        items.swap(i, j);
    }
    items.truncate(count);
    items
}

/// Fetches a batch of category summaries and draws `desired_count` ids among
/// those with at least `min_clue_count` clues.
pub async fn fetch_candidate_category_ids<S, R>(
    source: &S,
    min_clue_count: usize,
    desired_count: usize,
    rng: &mut R,
) -> core::result::Result<Vec<CategoryId>, FetchError>
where
    S: TriviaSource + ?Sized,
    R: Rng,
{
    let summaries = source.categories(GameConfig::CANDIDATE_BATCH).await?;
    let total = summaries.len();

    let mut eligible: Vec<CategoryId> = Vec::new();
    for summary in summaries {
        let clues_count = usize::try_from(summary.clues_count).unwrap_or(usize::MAX);
        if clues_count >= min_clue_count && !eligible.contains(&summary.id) {
            eligible.push(summary.id);
        }
    }
    log::debug!("{} of {} categories have at least {} clues", eligible.len(), total, min_clue_count);

    if eligible.is_empty() {
        return Err(FetchError::NoEligibleCategories {
            min_clues: min_clue_count,
        });
    }
    if eligible.len() < desired_count {
        log::warn!(
            "Only {} eligible categories, wanted {}",
            eligible.len(),
            desired_count
        );
    }

    Ok(sample_distinct(eligible, desired_count, rng))
}

/// Turns a category detail into a board column: keeps the first `clue_count`
/// playable clues in their original order and prices unpriced ones by row.
pub fn normalize_category(detail: CategoryDetail, clue_count: usize) -> Category {
    let CategoryDetail { id, title, clues } = detail;

    let mut kept: Vec<RawClue> = Vec::with_capacity(clue_count);
    for raw in clues {
        if kept.len() == clue_count {
            break;
        }
        if !raw.is_playable() {
            continue;
        }
        if kept.iter().any(|other| other.id == raw.id) {
            log::warn!("Category {}: skipping duplicate clue {}", id, raw.id);
            continue;
        }
        kept.push(raw);
    }

    if kept.len() < clue_count {
        log::warn!("Category {} only has {} of {} playable clues", id, kept.len(), clue_count);
    }

    let clues = kept
        .into_iter()
        .enumerate()
        .map(|(position, raw)| Clue::from_raw(raw, position));
    Category::new(id, title, clues)
}

/// Fetches one category and normalizes it into a board column.
pub async fn fetch_category_detail<S>(
    source: &S,
    id: CategoryId,
    clue_count: usize,
) -> core::result::Result<Category, FetchError>
where
    S: TriviaSource + ?Sized,
{
    let detail = source.category(id).await?;
    if detail.id != id {
        log::warn!("Requested category {} but received {}", id, detail.id);
    }
    Ok(normalize_category(detail, clue_count))
}

/// Assembles a full board. Categories are fetched one after another, in the
/// order their ids were drawn. The first failure aborts the whole load and
/// nothing fetched so far is returned.
pub async fn load_game<S, R>(
    source: &S,
    config: &GameConfig,
    rng: &mut R,
) -> core::result::Result<Vec<Category>, FetchError>
where
    S: TriviaSource + ?Sized,
    R: Rng,
{
    let ids =
        fetch_candidate_category_ids(source, config.clues_per_category, config.categories, rng)
            .await?;

    let mut categories: Vec<Category> = Vec::with_capacity(ids.len());
    for id in ids {
        let category = fetch_category_detail(source, id, config.clues_per_category).await?;
        if categories.iter().any(|other| other.id() == category.id()) {
            return Err(FetchError::DuplicateCategory(category.id()));
        }
        log::trace!("Loaded category {} ({})", category.id(), category.title());
        categories.push(category);
    }

    Ok(categories)
}
