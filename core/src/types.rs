/// Identifier of a category, as issued by the trivia API.
pub type CategoryId = u64;

/// Identifier of a clue, unique within its category.
pub type ClueId = u64;

/// Dollar value of a single clue.
pub type Points = u32;

/// Running total of completed clue values.
pub type Score = u64;

/// Step used to synthesize the value of a clue the API left unpriced.
pub const VALUE_STEP: Points = 200;

/// Value given to an unpriced clue at 0-indexed `position` of its column.
pub const fn synthesized_value(position: usize) -> Points {
    let rank = position.saturating_add(1);
    let rank = if rank > Points::MAX as usize {
        Points::MAX
    } else {
        rank as Points
    };
    rank.saturating_mul(VALUE_STEP)
}
