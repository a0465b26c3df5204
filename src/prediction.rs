// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PREDIÇÃO DE MERCADO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// O relatório trata a predição como JSON opaco. A implementação baseada em
// LLM cai num baseline de templates quando o gerador falha.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::llm::{parse_json_object, AnalysisGenerator, LlmError};
use crate::types::BusinessProfile;

/// Tokens pedidos ao gerador para a predição
const PREDICTION_MAX_TOKENS: u32 = 4096;

/// Erros do preditor
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("Horizonte inválido: {0} meses")]
    InvalidHorizon(u32),

    #[error("Generator error: {0}")]
    Generator(#[from] LlmError),

    #[error("Prediction unavailable: {0}")]
    Unavailable(String),
}

/// Gerador de predições de mercado
#[async_trait]
pub trait FuturePredictor: Send + Sync {
    async fn predict_market_future(
        &self,
        segment: &str,
        profile: &BusinessProfile,
        horizon_months: u32,
    ) -> Result<Value, PredictionError>;
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO MOCK PARA TESTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Preditor mock: devolve sempre o mesmo JSON (ou falha)
#[derive(Debug, Clone)]
pub struct MockFuturePredictor {
    pub prediction: Value,
    pub fail: bool,
}

impl Default for MockFuturePredictor {
    fn default() -> Self {
        Self {
            prediction: json!({ "mock": true }),
            fail: false,
        }
    }
}

impl MockFuturePredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prediction(prediction: Value) -> Self {
        Self {
            prediction,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl FuturePredictor for MockFuturePredictor {
    async fn predict_market_future(
        &self,
        _segment: &str,
        _profile: &BusinessProfile,
        _horizon_months: u32,
    ) -> Result<Value, PredictionError> {
        if self.fail {
            return Err(PredictionError::Unavailable("mock configurado para falhar".into()));
        }
        Ok(self.prediction.clone())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO VIA LLM
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Preditor que pede um JSON ao gerador de análise.
///
/// Sem gerador (modo offline) devolve direto o baseline de templates.
pub struct LlmFuturePredictor {
    generator: Option<Arc<dyn AnalysisGenerator>>,
}

impl LlmFuturePredictor {
    pub fn new(generator: Arc<dyn AnalysisGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Preditor sem IA: apenas o baseline
    pub fn offline() -> Self {
        Self { generator: None }
    }
}

#[async_trait]
impl FuturePredictor for LlmFuturePredictor {
    async fn predict_market_future(
        &self,
        segment: &str,
        profile: &BusinessProfile,
        horizon_months: u32,
    ) -> Result<Value, PredictionError> {
        if horizon_months == 0 {
            return Err(PredictionError::InvalidHorizon(horizon_months));
        }

        let Some(generator) = &self.generator else {
            log::info!("🔮 Predição offline de {} (baseline)", segment);
            return Ok(baseline_prediction(segment, horizon_months));
        };

        log::info!("🔮 Predizendo futuro de {} ({} meses)...", segment, horizon_months);

        let prompt = build_prediction_prompt(segment, profile, horizon_months);
        let response = generator
            .generate_analysis(&prompt, PREDICTION_MAX_TOKENS)
            .await;

        match response {
            Ok(Some(text)) => match parse_json_object(&text) {
                Ok(map) => return Ok(Value::Object(map)),
                Err(e) => log::warn!("⚠️ Predição não veio em JSON: {}", e),
            },
            Ok(None) => log::warn!("⚠️ Gerador não retornou predição"),
            Err(e) => log::warn!("⚠️ Falha no gerador de predição: {}", e),
        }

        Ok(baseline_prediction(segment, horizon_months))
    }
}

/// Prompt de predição de mercado
pub fn build_prediction_prompt(segment: &str, profile: &BusinessProfile, horizon_months: u32) -> String {
    format!(
        r#"Preveja a evolução do mercado de {segment} no Brasil pelos próximos {horizon_months} meses.

Produto/Serviço: {product}
Público-Alvo: {audience}

Responda apenas com JSON no formato:
{{
  "tendencias_emergentes": ["..."],
  "cenarios": {{"conservador": "...", "realista": "...", "otimista": "..."}},
  "pontos_inflexao": ["..."],
  "oportunidades": ["..."],
  "ameacas": ["..."],
  "recomendacoes": ["..."]
}}"#,
        product = profile.product().unwrap_or("Não informado"),
        audience = profile.audience.as_deref().unwrap_or("Não informado"),
    )
}

/// Predição de templates usada quando o gerador não responde
pub fn baseline_prediction(segment: &str, horizon_months: u32) -> Value {
    json!({
        "segmento": segment,
        "horizonte_meses": horizon_months,
        "origem": "baseline",
        "tendencias_emergentes": [
            format!("IA Generativa vai automatizar 60% das tarefas operacionais em {segment} até 2026"),
            format!("Personalização em massa se tornará obrigatória no {segment} até 2025"),
            format!("Modelos de assinatura vão dominar 70% do mercado de {segment} até 2027")
        ],
        "cenarios": {
            "conservador": format!("Crescimento orgânico de 25% ao ano no {segment} com digitalização gradual"),
            "realista": format!("Transformação digital acelera crescimento para 45% ao ano no {segment}"),
            "otimista": format!("IA e automação redefinem completamente o mercado de {segment}")
        },
        "pontos_inflexao": [
            format!("Adoção em massa de IA pelos líderes de {segment}"),
            format!("Consolidação dos principais players de {segment}")
        ],
        "recomendacoes": [
            format!("Integrar IA nos processos de {segment} nos próximos 12 meses"),
            "Construir base própria de clientes e dados"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockAnalysisGenerator;

    #[tokio::test]
    async fn test_llm_predictor_parses_json() {
        let generator = Arc::new(MockAnalysisGenerator::with_response(
            r#"```json
{"tendencias_emergentes": ["x"], "cenarios": {}}
```"#,
        ));
        let predictor = LlmFuturePredictor::new(generator);
        let prediction = predictor
            .predict_market_future("fitness", &BusinessProfile::default(), 60)
            .await
            .unwrap();
        assert_eq!(prediction["tendencias_emergentes"][0], "x");
    }

    #[tokio::test]
    async fn test_llm_predictor_falls_back_to_baseline() {
        let predictor = LlmFuturePredictor::new(Arc::new(MockAnalysisGenerator::new()));
        let prediction = predictor
            .predict_market_future("fitness", &BusinessProfile::default(), 60)
            .await
            .unwrap();
        assert_eq!(prediction["origem"], "baseline");
        assert_eq!(prediction["horizonte_meses"], 60);

        let predictor = LlmFuturePredictor::new(Arc::new(MockAnalysisGenerator::with_response("texto livre")));
        let prediction = predictor
            .predict_market_future("fitness", &BusinessProfile::default(), 12)
            .await
            .unwrap();
        assert_eq!(prediction["segmento"], "fitness");
    }

    #[tokio::test]
    async fn test_offline_predictor_returns_baseline() {
        let prediction = LlmFuturePredictor::offline()
            .predict_market_future("fitness", &BusinessProfile::default(), 60)
            .await
            .unwrap();
        assert_eq!(prediction, baseline_prediction("fitness", 60));
        assert_eq!(prediction["origem"], "baseline");
        assert!(prediction.get("mock").is_none());
    }

    #[tokio::test]
    async fn test_zero_horizon_is_rejected() {
        let predictor = LlmFuturePredictor::new(Arc::new(MockAnalysisGenerator::new()));
        let result = predictor
            .predict_market_future("fitness", &BusinessProfile::default(), 0)
            .await;
        assert!(matches!(result, Err(PredictionError::InvalidHorizon(0))));
    }

    #[tokio::test]
    async fn test_mock_predictor() {
        let ok = MockFuturePredictor::new();
        assert_eq!(
            ok.predict_market_future("x", &BusinessProfile::default(), 60).await.unwrap()["mock"],
            true
        );
        assert!(MockFuturePredictor::failing()
            .predict_market_future("x", &BusinessProfile::default(), 60)
            .await
            .is_err());
    }

    #[test]
    fn test_prediction_prompt() {
        let mut profile = BusinessProfile::with_segment("pet shop");
        profile.product = Some("banho e tosa".into());
        let prompt = build_prediction_prompt("pet shop", &profile, 60);
        assert!(prompt.contains("próximos 60 meses"));
        assert!(prompt.contains("Produto/Serviço: banho e tosa"));
        assert!(prompt.contains("Público-Alvo: Não informado"));
    }
}
