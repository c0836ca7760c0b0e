use clueboard_core::{CategoryId, FetchError, TriviaSource};
use clueboard_protocol::{CategoryDetail, CategorySummary, Endpoint};
use gloo::net::http::Request;
use serde::de::DeserializeOwned;

/// Trivia source backed by the browser's `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpTriviaSource {
    base_url: String,
}

impl HttpTriviaSource {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub(crate) fn url(&self, endpoint: Endpoint) -> String {
        endpoint.url(&self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, FetchError> {
        let url = self.url(endpoint);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        if !response.ok() {
            log::warn!("GET {} returned {}", url, response.status());
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| FetchError::Malformed(err.to_string()))
    }
}

impl TriviaSource for HttpTriviaSource {
    async fn categories(&self, count: usize) -> Result<Vec<CategorySummary>, FetchError> {
        self.get_json(Endpoint::Categories { count }).await
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, FetchError> {
        self.get_json(Endpoint::Category { id }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_api_layout() {
        let source = HttpTriviaSource::new("http://localhost:8000/api/");

        assert_eq!(
            source.url(Endpoint::Categories { count: 100 }),
            "http://localhost:8000/api/categories?count=100"
        );
        assert_eq!(
            source.url(Endpoint::Category { id: 17 }),
            "http://localhost:8000/api/category?id=17"
        );
    }
}
