// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SEÇÕES DA ANÁLISE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Cada uma das nove seções é conteúdo da IA (JSON livre) ou template tipado.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::Serialize;
use serde_json::Value;

use crate::types::TextMap;

pub const AVATAR_KEY: &str = "avatar_ultra_detalhado";
pub const POSITIONING_KEY: &str = "escopo_posicionamento_ultra";
pub const COMPETITION_KEY: &str = "analise_concorrencia_ultra_profunda";
pub const KEYWORDS_KEY: &str = "estrategia_palavras_chave_ultra";
pub const METRICS_KEY: &str = "metricas_performance_ultra_detalhadas";
pub const ACTION_PLAN_KEY: &str = "plano_acao_ultra_detalhado";
pub const PREDICTIONS_KEY: &str = "predicoes_futuro_ultra";
pub const INSIGHTS_KEY: &str = "insights_exclusivos_gigantes";
pub const MARKET_INTELLIGENCE_KEY: &str = "inteligencia_mercado_ultra";

/// Chaves das nove seções, na ordem do schema
pub const SECTION_KEYS: [&str; 9] = [
    AVATAR_KEY,
    POSITIONING_KEY,
    COMPETITION_KEY,
    KEYWORDS_KEY,
    METRICS_KEY,
    ACTION_PLAN_KEY,
    PREDICTIONS_KEY,
    INSIGHTS_KEY,
    MARKET_INTELLIGENCE_KEY,
];

/// Formato JSON esperado de uma seção vinda da IA
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionShape {
    Object,
    Array,
}

impl SectionShape {
    /// Formato de cada seção do schema
    pub fn of(key: &str) -> Self {
        match key {
            COMPETITION_KEY | INSIGHTS_KEY => Self::Array,
            _ => Self::Object,
        }
    }

    /// Aceita apenas valores do formato certo e não vazios
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Object, Value::Object(map)) => !map.is_empty(),
            (Self::Array, Value::Array(items)) => !items.is_empty(),
            _ => false,
        }
    }
}

/// Origem de uma seção do relatório
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionOrigin {
    Ia,
    Template,
}

/// Conteúdo de uma seção: JSON da IA ou template tipado.
///
/// Serializa sem tag, então o consumidor vê apenas o conteúdo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionContent<T> {
    Ai(Value),
    Template(T),
}

impl<T> SectionContent<T> {
    pub fn origin(&self) -> SectionOrigin {
        match self {
            Self::Ai(_) => SectionOrigin::Ia,
            Self::Template(_) => SectionOrigin::Template,
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Self::Ai(_))
    }

    pub fn template(&self) -> Option<&T> {
        match self {
            Self::Template(t) => Some(t),
            Self::Ai(_) => None,
        }
    }

    pub fn ai(&self) -> Option<&Value> {
        match self {
            Self::Ai(v) => Some(v),
            Self::Template(_) => None,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// AVATAR
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Avatar do cliente ideal.
///
/// O avatar básico só tem nome e demografia; o avatar rico (caminho de texto)
/// preenche os demais blocos.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarProfile {
    pub nome_ficticio: String,
    pub perfil_demografico_completo: Demographics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perfil_psicografico_profundo: Option<TextMap>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dores_viscerais_ultra: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub desejos_secretos_profundos: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub objecoes_reais_completas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jornada_emocional_detalhada: Option<TextMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linguagem_interna_completa: Option<InternalLanguage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demographics {
    pub idade_especifica: String,
    pub genero_distribuicao: String,
    pub renda_detalhada: String,
    pub escolaridade_completa: String,
    pub localizacao_geografica: String,
    pub estado_civil_detalhado: String,
    pub filhos_situacao: String,
    pub profissao_especifica: String,
    pub tempo_mercado: String,
    pub nivel_hierarquico: String,
}

/// Linguagem que o avatar usa
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternalLanguage {
    pub frases_dor_especificas: Vec<String>,
    pub frases_desejo_especificas: Vec<String>,
    pub metaforas_universo: Vec<String>,
    pub vocabulario_tecnico: Vec<String>,
    pub expressoes_cotidianas: Vec<String>,
    pub tom_comunicacao_detalhado: String,
    pub canais_preferidos: String,
    pub horarios_atencao: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DEMAIS SEÇÕES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Positioning {
    pub posicionamento_mercado_detalhado: String,
    pub proposta_valor_irresistivel: String,
    pub diferenciais_competitivos_defensaveis: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorProfile {
    pub nome_concorrente: String,
    pub analise_swot_detalhada: Swot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swot {
    pub forcas_especificas: Vec<String>,
    pub fraquezas_exploraveis: Vec<String>,
    pub oportunidades_nao_vistas: Vec<String>,
    pub ameacas_representadas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordStrategy {
    pub palavras_primarias_volume_alto: Vec<String>,
    pub palavras_secundarias_complementares: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceMetrics {
    pub kpis_principais_especificos: Vec<Kpi>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub metrica: String,
    pub objetivo_numerico: String,
    pub frequencia_medicao: String,
    pub responsavel_acompanhamento: String,
    pub acao_desvio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionPlan {
    pub fase_1_preparacao_completa: ActionPhase,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionPhase {
    pub duracao_especifica: String,
    pub atividades_detalhadas: Vec<String>,
    pub investimento_breakdown: String,
    pub entregas_especificas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuturePredictions {
    pub tendencias_emergentes_especificas: Vec<String>,
    pub cenarios_futuros_detalhados: TextMap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_shapes() {
        assert_eq!(SectionShape::of(COMPETITION_KEY), SectionShape::Array);
        assert_eq!(SectionShape::of(INSIGHTS_KEY), SectionShape::Array);
        assert_eq!(SectionShape::of(AVATAR_KEY), SectionShape::Object);

        assert!(SectionShape::Object.accepts(&json!({"a": 1})));
        assert!(!SectionShape::Object.accepts(&json!({})));
        assert!(!SectionShape::Object.accepts(&json!(["a"])));
        assert!(SectionShape::Array.accepts(&json!(["a"])));
        assert!(!SectionShape::Array.accepts(&json!("texto")));
    }

    #[test]
    fn test_section_content_serializes_untagged() {
        let ai: SectionContent<Positioning> = SectionContent::Ai(json!({"x": 1}));
        assert_eq!(serde_json::to_value(&ai).unwrap(), json!({"x": 1}));
        assert_eq!(ai.origin(), SectionOrigin::Ia);

        let template: SectionContent<Vec<String>> = SectionContent::Template(vec!["a".into()]);
        assert_eq!(serde_json::to_value(&template).unwrap(), json!(["a"]));
        assert_eq!(serde_json::to_value(template.origin()).unwrap(), json!("template"));
    }
}
