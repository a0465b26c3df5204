// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FASE 1: PESQUISA WEB
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::search::{extract_hostname, SearchAggregator, SearchError};
use crate::types::{BusinessProfile, SearchHit};

/// Resultado consolidado da pesquisa web
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebResearch {
    #[serde(rename = "total_resultados")]
    pub total_results: usize,
    #[serde(rename = "queries_executadas")]
    pub executed_queries: Vec<String>,
    #[serde(rename = "resultados_detalhados")]
    pub hits: Vec<SearchHit>,
    /// URLs distintas
    #[serde(rename = "fontes_unicas")]
    pub unique_sources: usize,
    #[serde(rename = "dominios_unicos")]
    pub unique_domains: usize,
    #[serde(rename = "provedores_utilizados")]
    pub providers: Vec<String>,
}

impl WebResearch {
    /// Consolida os resultados de todas as consultas
    pub fn from_hits(queries: Vec<String>, hits: Vec<SearchHit>) -> Self {
        let unique_sources = hits
            .iter()
            .map(|h| h.url.as_str())
            .collect::<BTreeSet<_>>()
            .len();
        let unique_domains = hits
            .iter()
            .filter_map(|h| extract_hostname(&h.url))
            .collect::<BTreeSet<_>>()
            .len();
        let providers = hits
            .iter()
            .map(|h| h.source.clone())
            .filter(|s| !s.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            total_results: hits.len(),
            executed_queries: queries,
            hits,
            unique_sources,
            unique_domains,
            providers,
        }
    }

    /// A pesquisa não rodou (sem query ou falhou)
    pub fn is_empty(&self) -> bool {
        self.executed_queries.is_empty()
    }
}

/// As 8 consultas derivadas do perfil; `None` sem query principal
pub fn research_queries(profile: &BusinessProfile) -> Option<Vec<String>> {
    let query = profile.query()?;
    let segment = profile.segment().unwrap_or_default();

    let queries = [
        query.to_string(),
        format!("mercado {segment} Brasil 2024 tendências crescimento"),
        format!("análise competitiva {segment} oportunidades"),
        format!("futuro {segment} inovação tecnologia"),
        format!("dados estatísticas {segment} consumidor brasileiro"),
        format!("investimento {segment} venture capital funding"),
        format!("regulamentação {segment} mudanças legais"),
        format!("cases sucesso {segment} empresas brasileiras"),
    ];

    Some(
        queries
            .iter()
            .map(|q| q.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect(),
    )
}

/// Executa a pesquisa web.
///
/// Qualquer erro do agregador descarta a fase inteira: o erro é logado e o
/// resultado é uma pesquisa vazia.
pub async fn run_research(
    search: &dyn SearchAggregator,
    profile: &BusinessProfile,
    results_per_provider: usize,
) -> WebResearch {
    let Some(queries) = research_queries(profile) else {
        log::info!("⏭️ Sem query principal, pesquisa web ignorada");
        return WebResearch::default();
    };

    log::info!("🌐 Executando pesquisa web ({} consultas)...", queries.len());

    match collect_hits(search, &queries, results_per_provider).await {
        Ok(hits) => {
            let research = WebResearch::from_hits(queries, hits);
            log::info!(
                "✅ Pesquisa: {} resultados, {} fontes únicas, {} domínios",
                research.total_results,
                research.unique_sources,
                research.unique_domains
            );
            research
        }
        Err(e) => {
            log::error!("❌ Erro na pesquisa web: {}", e);
            WebResearch::default()
        }
    }
}

async fn collect_hits(
    search: &dyn SearchAggregator,
    queries: &[String],
    results_per_provider: usize,
) -> Result<Vec<SearchHit>, SearchError> {
    let mut hits = Vec::new();
    for query in queries {
        let results = search.multi_search(query, results_per_provider).await?;
        log::debug!("🔍 '{}' → {} resultados", query, results.len());
        hits.extend(results);
    }
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MockSearchAggregator;
    use async_trait::async_trait;

    struct FailingSearch;

    #[async_trait]
    impl SearchAggregator for FailingSearch {
        async fn multi_search(&self, _q: &str, _n: usize) -> Result<Vec<SearchHit>, SearchError> {
            Err(SearchError::NetworkError("offline".into()))
        }
    }

    fn profile_with_query() -> BusinessProfile {
        BusinessProfile {
            segment: Some("consultoria".into()),
            query: Some("consultoria empresarial".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_eight_queries() {
        let queries = research_queries(&profile_with_query()).unwrap();
        assert_eq!(queries.len(), 8);
        assert_eq!(queries[0], "consultoria empresarial");
        assert_eq!(queries[1], "mercado consultoria Brasil 2024 tendências crescimento");
        assert_eq!(queries[7], "cases sucesso consultoria empresas brasileiras");
    }

    #[test]
    fn test_queries_without_segment_have_no_double_spaces() {
        let profile = BusinessProfile {
            query: Some("academias".into()),
            ..Default::default()
        };
        let queries = research_queries(&profile).unwrap();
        assert_eq!(queries[3], "futuro inovação tecnologia");
    }

    #[test]
    fn test_no_query_no_research() {
        assert!(research_queries(&BusinessProfile::with_segment("x")).is_none());
    }

    #[tokio::test]
    async fn test_research_aggregates() {
        let search = MockSearchAggregator::with_hits(vec![
            SearchHit::new("A", "https://a.com/1", "s", "jina"),
            SearchHit::new("B", "https://a.com/2", "s", "bing"),
        ]);
        let research = run_research(&search, &profile_with_query(), 10).await;

        assert_eq!(research.total_results, 16);
        assert_eq!(research.unique_sources, 2);
        assert_eq!(research.unique_domains, 1);
        assert_eq!(research.providers, vec!["bing".to_string(), "jina".to_string()]);
        assert_eq!(research.executed_queries.len(), 8);
    }

    #[tokio::test]
    async fn test_search_failure_yields_empty_research() {
        let research = run_research(&FailingSearch, &profile_with_query(), 10).await;
        assert_eq!(research, WebResearch::default());
        assert!(research.is_empty());
    }
}
