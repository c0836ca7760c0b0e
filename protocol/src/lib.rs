//! Wire types for the trivia HTTP API.
//!
//! Records are decoded leniently: unknown fields are ignored and fields the
//! game can do without (`clues_count`, `question`, `answer`, `value`) default
//! when absent or `null`.

use serde::{Deserialize, Serialize};

/// Default public instance of the trivia API.
pub const DEFAULT_API_URL: &str = "https://rithm-jeopardy.herokuapp.com/api/";

/// One entry of `GET {base}/categories?count=N`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues_count: u32,
}

/// Body of `GET {base}/category?id=N`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues: Vec<RawClue>,
}

/// A clue exactly as the API reports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClue {
    pub id: u64,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub value: Option<u32>,
}

impl RawClue {
    pub fn question(&self) -> &str {
        self.question.as_deref().unwrap_or_default()
    }

    pub fn answer(&self) -> &str {
        self.answer.as_deref().unwrap_or_default()
    }

    /// Both a question and an answer are present and non-empty.
    pub fn is_playable(&self) -> bool {
        !self.question().is_empty() && !self.answer().is_empty()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Categories { count: usize },
    Category { id: u64 },
}

impl Endpoint {
    pub fn path_and_query(self) -> String {
        use Endpoint::*;
        match self {
            Categories { count } => format!("categories?count={count}"),
            Category { id } => format!("category?id={id}"),
        }
    }

    /// Joins the endpoint onto `base`, which may or may not end with `/`.
    pub fn url(self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.path_and_query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_handles_trailing_slash() {
        let endpoint = Endpoint::Categories { count: 100 };

        assert_eq!(
            endpoint.url("https://example.test/api/"),
            "https://example.test/api/categories?count=100"
        );
        assert_eq!(
            endpoint.url("https://example.test/api"),
            "https://example.test/api/categories?count=100"
        );
        assert_eq!(
            Endpoint::Category { id: 42 }.url(DEFAULT_API_URL),
            "https://rithm-jeopardy.herokuapp.com/api/category?id=42"
        );
    }

    #[test]
    fn category_list_ignores_unknown_fields() {
        let json = r#"[
            {"id": 2, "title": "baseball", "clues_count": 5, "created_at": "2014-02-11"},
            {"id": 3, "title": "odd jobs"}
        ]"#;

        let summaries: Vec<CategorySummary> = serde_json::from_str(json).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].clues_count, 5);
        assert_eq!(summaries[1].title, "odd jobs");
        assert_eq!(summaries[1].clues_count, 0);
    }

    #[test]
    fn category_detail_tolerates_null_and_missing_clue_fields() {
        let json = r#"{
            "id": 11,
            "title": "sports",
            "clues": [
                {"id": 1, "question": "Q1", "answer": "A1", "value": 200},
                {"id": 2, "question": "Q2", "answer": "A2", "value": null},
                {"id": 3, "question": "", "answer": "A3"},
                {"id": 4, "answer": "A4", "value": 800}
            ]
        }"#;

        let detail: CategoryDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.clues.len(), 4);
        assert_eq!(detail.clues[0].value, Some(200));
        assert_eq!(detail.clues[1].value, None);
        assert!(detail.clues[1].is_playable());
        assert!(!detail.clues[2].is_playable());
        assert!(!detail.clues[3].is_playable());
        assert_eq!(detail.clues[3].question(), "");
    }

    #[test]
    fn malformed_detail_is_rejected() {
        let json = r#"{"title": "no id", "clues": []}"#;

        assert!(serde_json::from_str::<CategoryDetail>(json).is_err());
    }
}
