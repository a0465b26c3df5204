// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ANÁLISE DE MERCADO (IA + TEMPLATES)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Três caminhos:
// - IA respondeu JSON: cada seção válida é mantida, as demais viram template
// - IA respondeu texto: avatar rico + templates + prévia da resposta bruta
// - IA ausente ou com erro: tudo de templates
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::Serialize;
use serde_json::{Map, Value};

use crate::llm::parse_json_object;
use crate::types::{BusinessProfile, TextMap};

use super::fallback;
use super::prompt::truncate_chars;
use super::research::WebResearch;
use super::sections::*;

/// Caminho que produziu a análise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisPath {
    /// Resposta JSON (total ou parcialmente aproveitada)
    IaJson,
    /// Resposta em texto livre
    IaTexto,
    /// Sem resposta da IA
    Fallback,
}

/// As nove seções da análise, mais dados brutos da IA
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketAnalysis {
    #[serde(rename = "avatar_ultra_detalhado")]
    pub avatar: SectionContent<AvatarProfile>,
    #[serde(rename = "escopo_posicionamento_ultra")]
    pub positioning: SectionContent<Positioning>,
    #[serde(rename = "analise_concorrencia_ultra_profunda")]
    pub competition: SectionContent<Vec<CompetitorProfile>>,
    #[serde(rename = "estrategia_palavras_chave_ultra")]
    pub keywords: SectionContent<KeywordStrategy>,
    #[serde(rename = "metricas_performance_ultra_detalhadas")]
    pub metrics: SectionContent<PerformanceMetrics>,
    #[serde(rename = "plano_acao_ultra_detalhado")]
    pub action_plan: SectionContent<ActionPlan>,
    #[serde(rename = "predicoes_futuro_ultra")]
    pub predictions: SectionContent<FuturePredictions>,
    #[serde(rename = "insights_exclusivos_gigantes")]
    pub insights: SectionContent<Vec<String>>,
    #[serde(rename = "inteligencia_mercado_ultra")]
    pub market_intelligence: SectionContent<TextMap>,
    /// Prévia da resposta quando ela não era JSON
    pub raw_ai_response: Option<String>,
    /// Chaves extras devolvidas pela IA fora do schema
    #[serde(rename = "dados_adicionais_ia", skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    pub path: AnalysisPath,
}

/// Listas do avatar usadas para selecionar drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarList {
    Pains,
    Desires,
    Objections,
}

impl AvatarList {
    fn key(&self) -> &'static str {
        match self {
            Self::Pains => "dores_viscerais_ultra",
            Self::Desires => "desejos_secretos_profundos",
            Self::Objections => "objecoes_reais_completas",
        }
    }

    fn in_template<'a>(&self, avatar: &'a AvatarProfile) -> &'a [String] {
        match self {
            Self::Pains => &avatar.dores_viscerais_ultra,
            Self::Desires => &avatar.desejos_secretos_profundos,
            Self::Objections => &avatar.objecoes_reais_completas,
        }
    }
}

impl MarketAnalysis {
    /// Tudo de templates
    pub fn fallback(profile: &BusinessProfile, research: &WebResearch) -> Self {
        Self {
            avatar: SectionContent::Template(fallback::avatar(profile)),
            positioning: SectionContent::Template(fallback::positioning(profile)),
            competition: SectionContent::Template(fallback::competition(profile)),
            keywords: SectionContent::Template(fallback::keyword_strategy(profile)),
            metrics: SectionContent::Template(fallback::performance_metrics(profile)),
            action_plan: SectionContent::Template(fallback::action_plan(profile)),
            predictions: SectionContent::Template(fallback::future_predictions(profile)),
            insights: SectionContent::Template(fallback::insights(profile, research)),
            market_intelligence: SectionContent::Template(fallback::market_intelligence(
                profile, research,
            )),
            raw_ai_response: None,
            extra: Map::new(),
            path: AnalysisPath::Fallback,
        }
    }

    /// Resposta em texto livre: avatar rico e prévia da resposta
    pub fn from_text(
        text: &str,
        profile: &BusinessProfile,
        research: &WebResearch,
        preview_chars: usize,
    ) -> Self {
        Self {
            avatar: SectionContent::Template(fallback::rich_avatar(profile)),
            raw_ai_response: Some(truncate_chars(text, preview_chars)),
            path: AnalysisPath::IaTexto,
            ..Self::fallback(profile, research)
        }
    }

    /// Resposta JSON: seções válidas da IA, templates no resto
    pub fn from_json(
        mut map: Map<String, Value>,
        profile: &BusinessProfile,
        research: &WebResearch,
    ) -> Self {
        let avatar = take_section(&mut map, AVATAR_KEY, || fallback::avatar(profile));
        let positioning = take_section(&mut map, POSITIONING_KEY, || fallback::positioning(profile));
        let competition = take_section(&mut map, COMPETITION_KEY, || fallback::competition(profile));
        let keywords = take_section(&mut map, KEYWORDS_KEY, || fallback::keyword_strategy(profile));
        let metrics = take_section(&mut map, METRICS_KEY, || fallback::performance_metrics(profile));
        let action_plan = take_section(&mut map, ACTION_PLAN_KEY, || fallback::action_plan(profile));
        let predictions =
            take_section(&mut map, PREDICTIONS_KEY, || fallback::future_predictions(profile));
        let insights = take_section(&mut map, INSIGHTS_KEY, || fallback::insights(profile, research));
        let market_intelligence = take_section(&mut map, MARKET_INTELLIGENCE_KEY, || {
            fallback::market_intelligence(profile, research)
        });

        // "raw_ai_response" é reservado para o caminho de texto
        map.remove("raw_ai_response");

        Self {
            avatar,
            positioning,
            competition,
            keywords,
            metrics,
            action_plan,
            predictions,
            insights,
            market_intelligence,
            raw_ai_response: None,
            extra: map,
            path: AnalysisPath::IaJson,
        }
    }

    /// Interpreta a resposta do gerador e escolhe o caminho.
    ///
    /// Resposta vazia (ou só espaços) conta como ausente.
    pub fn from_response(
        response: Option<&str>,
        profile: &BusinessProfile,
        research: &WebResearch,
        preview_chars: usize,
    ) -> Self {
        let Some(text) = response.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::fallback(profile, research);
        };

        match parse_json_object(text) {
            Ok(map) => Self::from_json(map, profile, research),
            Err(e) => {
                log::warn!("⚠️ Resposta da IA não é JSON ({}), usando caminho de texto", e);
                Self::from_text(text, profile, research, preview_chars)
            }
        }
    }

    /// Origem de cada seção, por chave
    pub fn section_origins(&self) -> Vec<(&'static str, SectionOrigin)> {
        vec![
            (AVATAR_KEY, self.avatar.origin()),
            (POSITIONING_KEY, self.positioning.origin()),
            (COMPETITION_KEY, self.competition.origin()),
            (KEYWORDS_KEY, self.keywords.origin()),
            (METRICS_KEY, self.metrics.origin()),
            (ACTION_PLAN_KEY, self.action_plan.origin()),
            (PREDICTIONS_KEY, self.predictions.origin()),
            (INSIGHTS_KEY, self.insights.origin()),
            (MARKET_INTELLIGENCE_KEY, self.market_intelligence.origin()),
        ]
    }

    /// Quantas seções vieram da IA
    pub fn ai_section_count(&self) -> usize {
        self.section_origins()
            .iter()
            .filter(|(_, origin)| *origin == SectionOrigin::Ia)
            .count()
    }

    /// Lista do avatar (dores, desejos ou objeções), seja da IA ou do template
    pub fn avatar_list(&self, list: AvatarList) -> Vec<String> {
        match &self.avatar {
            SectionContent::Template(avatar) => list.in_template(avatar).to_vec(),
            SectionContent::Ai(value) => value
                .get(list.key())
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

fn take_section<T>(
    map: &mut Map<String, Value>,
    key: &str,
    template: impl FnOnce() -> T,
) -> SectionContent<T> {
    match map.remove(key) {
        Some(value) if SectionShape::of(key).accepts(&value) => SectionContent::Ai(value),
        Some(_) => {
            log::warn!("⚠️ Seção '{}' da IA em formato inesperado, usando template", key);
            SectionContent::Template(template())
        }
        None => {
            log::debug!("Seção '{}' ausente na resposta da IA", key);
            SectionContent::Template(template())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile() -> BusinessProfile {
        BusinessProfile::with_segment("consultoria")
    }

    #[test]
    fn test_no_response_is_full_fallback() {
        let analysis = MarketAnalysis::from_response(None, &profile(), &WebResearch::default(), 2000);
        assert_eq!(analysis.path, AnalysisPath::Fallback);
        assert_eq!(analysis.ai_section_count(), 0);
        assert!(analysis.raw_ai_response.is_none());
    }

    #[test]
    fn test_blank_response_is_full_fallback() {
        for blank in ["", "  \n"] {
            let analysis =
                MarketAnalysis::from_response(Some(blank), &profile(), &WebResearch::default(), 2000);
            assert_eq!(analysis.path, AnalysisPath::Fallback);
            assert!(analysis.raw_ai_response.is_none());
            assert_eq!(analysis.ai_section_count(), 0);
        }
    }

    #[test]
    fn test_partial_json_merges_per_section() {
        let response = json!({
            "avatar_ultra_detalhado": {"nome_ficticio": "Ana", "dores_viscerais_ultra": ["sem tempo"]},
            "insights_exclusivos_gigantes": ["insight da IA"],
            "analise_concorrencia_ultra_profunda": {"errado": true},
            "escopo_posicionamento_ultra": {},
            "campo_extra": 42
        })
        .to_string();

        let analysis =
            MarketAnalysis::from_response(Some(&response), &profile(), &WebResearch::default(), 2000);

        assert_eq!(analysis.path, AnalysisPath::IaJson);
        assert!(analysis.avatar.is_ai());
        assert!(analysis.insights.is_ai());
        assert!(!analysis.competition.is_ai());
        assert!(!analysis.positioning.is_ai());
        assert_eq!(analysis.ai_section_count(), 2);
        assert_eq!(analysis.extra["campo_extra"], 42);
        assert_eq!(analysis.avatar_list(AvatarList::Pains), vec!["sem tempo".to_string()]);
        assert!(analysis.avatar_list(AvatarList::Objections).is_empty());
    }

    #[test]
    fn test_text_response_keeps_preview() {
        let text = "x".repeat(5000);
        let analysis =
            MarketAnalysis::from_response(Some(&text), &profile(), &WebResearch::default(), 2000);

        assert_eq!(analysis.path, AnalysisPath::IaTexto);
        assert_eq!(analysis.raw_ai_response.as_ref().map(String::len), Some(2000));
        assert_eq!(analysis.avatar_list(AvatarList::Pains).len(), 20);
        assert_eq!(analysis.avatar_list(AvatarList::Objections).len(), 15);
        assert!(!analysis.positioning.is_ai());
    }

    #[test]
    fn test_serialized_keys() {
        let analysis = MarketAnalysis::fallback(&profile(), &WebResearch::default());
        let value = serde_json::to_value(&analysis).unwrap();
        let object = value.as_object().unwrap();

        for key in SECTION_KEYS {
            assert!(object.contains_key(key), "faltou {key}");
        }
        assert!(object["raw_ai_response"].is_null());
        assert!(!object.contains_key("dados_adicionais_ia"));
        assert!(!object.contains_key("path"));
    }
}
