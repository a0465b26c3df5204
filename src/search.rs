// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CLIENTE DE BUSCA
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Trait do agregador de busca web e implementações (Jina e mock).
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use async_trait::async_trait;
use serde::Deserialize;

use crate::types::SearchHit;

/// Erros do cliente de busca
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search API error: {0}")]
    ApiError(String),

    #[error("Rate limit exceeded")]
    RateLimitError,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response format: {0}")]
    ParseError(String),
}

/// Agregador de busca web.
///
/// Uma chamada por consulta; sem retry nesta camada.
#[async_trait]
pub trait SearchAggregator: Send + Sync {
    async fn multi_search(
        &self,
        query: &str,
        max_results_per_provider: usize,
    ) -> Result<Vec<SearchHit>, SearchError>;
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO MOCK PARA TESTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Agregador mock: devolve os mesmos resultados para qualquer consulta
#[derive(Debug, Default, Clone)]
pub struct MockSearchAggregator {
    pub hits: Vec<SearchHit>,
}

impl MockSearchAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hits(hits: Vec<SearchHit>) -> Self {
        Self { hits }
    }
}

#[async_trait]
impl SearchAggregator for MockSearchAggregator {
    async fn multi_search(
        &self,
        _query: &str,
        max_results_per_provider: usize,
    ) -> Result<Vec<SearchHit>, SearchError> {
        Ok(self
            .hits
            .iter()
            .take(max_results_per_provider)
            .cloned()
            .collect())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO JINA
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Cliente para Jina Search (s.jina.ai)
pub struct JinaClient {
    api_key: String,
    search_endpoint: String,
    client: reqwest::Client,
}

impl JinaClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            search_endpoint: "https://s.jina.ai".into(),
            client: reqwest::Client::new(),
        }
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/?q={}", self.search_endpoint, urlencoding::encode(query))
    }
}

#[async_trait]
impl SearchAggregator for JinaClient {
    async fn multi_search(
        &self,
        query: &str,
        max_results_per_provider: usize,
    ) -> Result<Vec<SearchHit>, SearchError> {
        #[derive(Deserialize)]
        struct JinaResponse {
            #[serde(default)]
            data: Vec<JinaData>,
        }

        #[derive(Deserialize)]
        struct JinaData {
            #[serde(default)]
            title: String,
            #[serde(default)]
            url: String,
            #[serde(default)]
            description: String,
            #[serde(default)]
            content: String,
        }

        log::debug!("🔍 Jina search: {}", query);

        let response = self
            .client
            .get(self.search_url(query))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .header("X-Respond-With", "no-content")
            .send()
            .await
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(SearchError::RateLimitError);
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError(format!("HTTP {}: {}", status, error_text)));
        }

        let body: JinaResponse = response
            .json()
            .await
            .map_err(|e| SearchError::ParseError(e.to_string()))?;

        let hits = body
            .data
            .into_iter()
            .filter(|d| !d.url.is_empty())
            .take(max_results_per_provider)
            .map(|d| {
                let snippet = if d.description.is_empty() {
                    d.content.chars().take(300).collect()
                } else {
                    d.description
                };
                SearchHit::new(d.title, d.url, snippet, "jina")
            })
            .collect();

        Ok(hits)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// UTILITÁRIOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Extrai hostname de uma URL
pub fn extract_hostname(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hostname() {
        assert_eq!(
            extract_hostname("https://www.example.com/path"),
            Some("www.example.com".into())
        );
        assert_eq!(extract_hostname("invalid"), None);
    }

    #[test]
    fn test_jina_search_url_encodes_query() {
        let client = JinaClient::new("jina-test".into());
        assert_eq!(
            client.search_url("mercado consultoria Brasil"),
            "https://s.jina.ai/?q=mercado%20consultoria%20Brasil"
        );
    }

    #[tokio::test]
    async fn test_mock_search_respects_limit() {
        let hits = (0..5)
            .map(|i| SearchHit::new(format!("t{i}"), format!("https://x.com/{i}"), "s", "mock"))
            .collect();
        let client = MockSearchAggregator::with_hits(hits);

        let result = client.multi_search("consulta", 3).await.unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].title, "t0");

        let empty = MockSearchAggregator::new();
        assert!(empty.multi_search("consulta", 10).await.unwrap().is_empty());
    }
}
