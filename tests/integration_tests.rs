//! # Testes de Integração
//!
//! Valida o fluxo completo do montador de relatório com colaboradores mock:
//! - Perfil → Drivers: dores e objeções do perfil guiam a seleção
//! - IA ausente, JSON parcial e texto livre
//! - Determinismo: mesmas entradas, mesmo relatório (exceto `generated_at`)

use async_trait::async_trait;
use deep_market::prelude::*;
use deep_market::report::SECTION_KEYS;
use deep_market::search::SearchError;
use serde_json::{json, Value};
use std::sync::Arc;

// ============================================================================
// HELPERS
// ============================================================================

struct FailingSearch;

#[async_trait]
impl SearchAggregator for FailingSearch {
    async fn multi_search(
        &self,
        _query: &str,
        _max_results_per_provider: usize,
    ) -> Result<Vec<SearchHit>, SearchError> {
        Err(SearchError::NetworkError("provedor fora do ar".into()))
    }
}

fn offline_assembler() -> ReportAssembler {
    assembler_with(MockAnalysisGenerator::new(), MockSearchAggregator::new())
}

fn assembler_with(
    generator: MockAnalysisGenerator,
    search: MockSearchAggregator,
) -> ReportAssembler {
    ReportAssembler::new(
        Arc::new(search),
        Arc::new(generator),
        Arc::new(MockFuturePredictor::new()),
    )
}

fn consulting_profile() -> BusinessProfile {
    serde_json::from_value(json!({
        "segmento": "consultoria",
        "preco": 997,
        "dores_viscerais": ["trabalho muito e não cresço"],
        "objecoes_reais": ["está caro"]
    }))
    .unwrap()
}

fn report_json(report: &MarketReport) -> Value {
    serde_json::to_value(report).unwrap()
}

const DRIVER_BLOCK_KEYS: [&str; 4] = [
    "drivers_mentais_customizados",
    "sistema_anti_objecao",
    "pre_pitch_invisivel",
    "arsenal_emergencia",
];

const CONSOLIDATION_KEYS: [&str; 14] = [
    "inteligencia_competitiva",
    "oportunidades_ocultas_identificadas",
    "ameacas_potenciais_mapeadas",
    "roadmap_dominancia_mercado",
    "sistema_monitoramento_continuo",
    "plano_contingencia_completo",
    "analise_roi_ultra_detalhada",
    "cronograma_implementacao_semanal",
    "scripts_vendas_customizados",
    "estrategia_pricing_psicologico",
    "funil_conversao_otimizado",
    "sistema_fidelizacao_clientes",
    "estrategia_expansao_geografica",
    "plano_sucessao_negocio",
];

// ============================================================================
// TESTE 1: Perfil → Drivers
// ============================================================================

#[tokio::test]
async fn test_consulting_profile_selects_stagnation_and_price_drivers() {
    let report = offline_assembler()
        .generate_report(&consulting_profile(), None)
        .await;

    let ids: Vec<DriverId> = report.drivers.iter().map(|d| d.id).collect();

    for essential in deep_market::drivers::ESSENTIAL_DRIVERS {
        assert!(ids.contains(&essential), "faltou essencial {:?}", essential);
    }
    assert!(ids.contains(&DriverId::AmbienteVampiro));
    assert!(ids.contains(&DriverId::CustoInvisivel));
    assert!(ids.len() <= 7);

    let value = report_json(&report);
    assert_eq!(
        value["estrategia_pricing_psicologico"]["preco_principal"],
        "R$ 997"
    );
}

// ============================================================================
// TESTE 2: Perfil vazio
// ============================================================================

#[tokio::test]
async fn test_empty_profile_uses_generic_segment() {
    let report = offline_assembler()
        .generate_report(&BusinessProfile::default(), None)
        .await;

    let text = report.to_json(false).unwrap();
    assert!(text.contains("negócios") || text.contains("Negócios"));
    assert!(!text.contains("{segmento}"));
    assert!(!text.contains("{segment}"));

    assert!(report.research.is_empty());
    assert_eq!(report.metadata.data_sources, 0);
    assert!(!report.drivers.is_empty());
}

// ============================================================================
// TESTE 3: IA ausente → todas as chaves
// ============================================================================

#[tokio::test]
async fn test_missing_ai_produces_every_top_level_key() {
    let report = offline_assembler()
        .generate_report(&consulting_profile(), Some("sessao-1"))
        .await;

    assert_eq!(report.analysis.path, AnalysisPath::Fallback);

    let value = report_json(&report);
    let object = value.as_object().unwrap();

    let expected = SECTION_KEYS
        .iter()
        .chain(DRIVER_BLOCK_KEYS.iter())
        .chain(CONSOLIDATION_KEYS.iter())
        .chain(
            [
                "raw_ai_response",
                "predicoes_futuro_detalhadas",
                "pesquisa_web_massiva",
                "metadata_gigante",
                "insights_finais_ultra_exclusivos",
            ]
            .iter(),
        );

    for key in expected {
        assert!(object.contains_key(*key), "faltou chave {}", key);
    }

    assert_eq!(value["metadata_gigante"]["session_id"], "sessao-1");
    assert_eq!(value["metadata_gigante"]["future_horizon"], "60 meses");
    assert!(value["raw_ai_response"].is_null());
}

// ============================================================================
// TESTE 4: JSON parcial da IA
// ============================================================================

#[tokio::test]
async fn test_partial_ai_json_keeps_valid_sections() {
    let response = json!({
        "escopo_posicionamento_ultra": {"posicionamento_principal": "Referência nacional"},
        "insights_exclusivos_gigantes": ["Insight único da IA"],
        "metricas_performance_ultra_detalhadas": "texto no lugar de objeto"
    });
    let generator = MockAnalysisGenerator::with_response(format!("```json\n{}\n```", response));

    let report = assembler_with(generator, MockSearchAggregator::new())
        .generate_report(&consulting_profile(), None)
        .await;

    assert_eq!(report.analysis.path, AnalysisPath::IaJson);
    assert_eq!(report.analysis.ai_section_count(), 2);

    let value = report_json(&report);
    assert_eq!(
        value["escopo_posicionamento_ultra"]["posicionamento_principal"],
        "Referência nacional"
    );
    assert_eq!(value["insights_exclusivos_gigantes"][0], "Insight único da IA");
    assert!(value["metricas_performance_ultra_detalhadas"].is_object());

    let origins = &value["metadata_gigante"]["section_origins"];
    assert_eq!(origins["escopo_posicionamento_ultra"], "ia");
    assert_eq!(origins["metricas_performance_ultra_detalhadas"], "template");
}

// ============================================================================
// TESTE 5: Texto livre da IA
// ============================================================================

#[tokio::test]
async fn test_text_response_keeps_preview_and_rich_avatar() {
    let text = "Análise livre do mercado. ".repeat(200);
    let generator = MockAnalysisGenerator::with_response(text);

    let report = assembler_with(generator, MockSearchAggregator::new())
        .generate_report(&BusinessProfile::with_segment("consultoria"), None)
        .await;

    assert_eq!(report.analysis.path, AnalysisPath::IaTexto);
    let preview = report.analysis.raw_ai_response.as_deref().unwrap();
    assert_eq!(preview.chars().count(), 2000);

    let avatar = report.analysis.avatar.template().unwrap();
    assert_eq!(avatar.dores_viscerais_ultra.len(), 20);
    assert_eq!(avatar.objecoes_reais_completas.len(), 15);
    assert!(report.drivers.len() <= 7);
}

// ============================================================================
// TESTE 6: Determinismo
// ============================================================================

#[test]
fn test_same_inputs_same_report_except_timestamp() {
    let assembler = offline_assembler();
    let profile = consulting_profile();

    let mut first = report_json(&tokio_test::block_on(
        assembler.generate_report(&profile, Some("s")),
    ));
    let mut second = report_json(&tokio_test::block_on(
        assembler.generate_report(&profile, Some("s")),
    ));

    for value in [&mut first, &mut second] {
        value["metadata_gigante"]
            .as_object_mut()
            .unwrap()
            .remove("generated_at");
    }

    assert_eq!(first, second);
}

// ============================================================================
// TESTE 7: Pesquisa web
// ============================================================================

#[tokio::test]
async fn test_search_failure_yields_empty_research() {
    let assembler = ReportAssembler::new(
        Arc::new(FailingSearch),
        Arc::new(MockAnalysisGenerator::new()),
        Arc::new(MockFuturePredictor::new()),
    );
    let mut profile = consulting_profile();
    profile.query = Some("mercado de consultoria".into());

    let report = assembler.generate_report(&profile, None).await;

    assert!(report.research.is_empty());
    assert_eq!(report.research.total_results, 0);
    assert!(!report.drivers.is_empty());
}

#[tokio::test]
async fn test_search_hits_reach_metadata() {
    let hits = vec![
        SearchHit::new("Mercado", "https://exemplo.com.br/a", "Crescimento", "jina"),
        SearchHit::new("Tendências", "https://outro.com/b", "Digital", "jina"),
    ];
    let mut profile = consulting_profile();
    profile.query = Some("mercado de consultoria".into());

    let report = assembler_with(MockAnalysisGenerator::new(), MockSearchAggregator::with_hits(hits))
        .generate_report(&profile, None)
        .await;

    assert_eq!(report.research.executed_queries.len(), 8);
    assert!(report.research.total_results > 0);
    assert_eq!(report.metadata.data_sources, report.research.hits.len());
}

#[tokio::test]
async fn test_failing_predictor_yields_empty_object() {
    let assembler = ReportAssembler::new(
        Arc::new(MockSearchAggregator::new()),
        Arc::new(MockAnalysisGenerator::new()),
        Arc::new(MockFuturePredictor::failing()),
    );

    let report = assembler.generate_report(&consulting_profile(), None).await;
    assert_eq!(report.future_predictions, json!({}));
}
