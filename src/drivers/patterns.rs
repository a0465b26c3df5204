// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DETECÇÃO DE PADRÕES EMOCIONAIS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Tabelas de regras avaliadas em ordem fixa de prioridade. A primeira regra
// com qualquer palavra-chave presente vence (first-match-wins). As tabelas de
// mapeamento de drivers dependem dessa ordem.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};

/// Padrão de dor dominante
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PainPattern {
    /// Trabalha muito e não sai do lugar
    #[default]
    #[serde(rename = "frustração_estagnação")]
    Stagnation,
    /// Medo de fracassar ou perder tudo
    #[serde(rename = "medo_fracasso")]
    FearOfFailure,
    /// Sobrecarga de tempo
    #[serde(rename = "sobrecarga_tempo")]
    TimeOverload,
    /// Comparação com concorrentes e pares
    #[serde(rename = "comparação_social")]
    SocialComparison,
}

impl PainPattern {
    /// Rótulo usado no relatório
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stagnation => "frustração_estagnação",
            Self::FearOfFailure => "medo_fracasso",
            Self::TimeOverload => "sobrecarga_tempo",
            Self::SocialComparison => "comparação_social",
        }
    }
}

/// Desejo primário
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DesirePattern {
    /// Liberdade e reconhecimento
    #[default]
    #[serde(rename = "liberdade_reconhecimento")]
    FreedomRecognition,
    /// Segurança e controle
    #[serde(rename = "segurança_controle")]
    SecurityControl,
    /// Impacto social
    #[serde(rename = "impacto_social")]
    SocialImpact,
    /// Abundância material
    #[serde(rename = "abundância_material")]
    MaterialAbundance,
}

impl DesirePattern {
    /// Rótulo usado no relatório
    pub fn label(&self) -> &'static str {
        match self {
            Self::FreedomRecognition => "liberdade_reconhecimento",
            Self::SecurityControl => "segurança_controle",
            Self::SocialImpact => "impacto_social",
            Self::MaterialAbundance => "abundância_material",
        }
    }
}

/// Regras de dor, em ordem de prioridade
pub const PAIN_RULES: [(PainPattern, &[&str]); 4] = [
    (
        PainPattern::Stagnation,
        &["estagnação", "não sair do lugar", "trabalhar muito", "sem crescimento"],
    ),
    (
        PainPattern::FearOfFailure,
        &["fracasso", "desmoronar", "perder tudo", "não conseguir"],
    ),
    (
        PainPattern::TimeOverload,
        &["tempo", "sobrecarregado", "não conseguir se desconectar", "12 horas"],
    ),
    (
        PainPattern::SocialComparison,
        &["concorrência", "outros crescendo", "ficar para trás", "competidores"],
    ),
];

/// Regras de desejo, em ordem de prioridade
pub const DESIRE_RULES: [(DesirePattern, &[&str]); 4] = [
    (
        DesirePattern::FreedomRecognition,
        &["autoridade", "reconhecido", "liberdade", "legado"],
    ),
    (
        DesirePattern::SecurityControl,
        &["segurança", "controle", "estabilidade", "previsibilidade"],
    ),
    (
        DesirePattern::SocialImpact,
        &["impactar", "ajudar", "transformar", "diferença"],
    ),
    (
        DesirePattern::MaterialAbundance,
        &["dinheiro", "riqueza", "abundância", "financeira"],
    ),
];

/// Conjunto de padrões emocionais do avatar
///
/// Só `dominant_pain` e `primary_desire` vêm da análise de texto; os demais
/// campos são sempre os valores padrão.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSet {
    /// Dor dominante
    #[serde(rename = "dor_dominante")]
    pub dominant_pain: PainPattern,
    /// Desejo primário
    #[serde(rename = "desejo_primario")]
    pub primary_desire: DesirePattern,
    /// Medo central
    #[serde(rename = "medo_central")]
    pub central_fear: String,
    /// Motivador principal
    #[serde(rename = "motivador_principal")]
    pub main_motivator: String,
    /// Bloqueio mental
    #[serde(rename = "bloqueio_mental")]
    pub mental_block: String,
    /// Gatilho de decisão
    #[serde(rename = "gatilho_decisão")]
    pub decision_trigger: String,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            dominant_pain: PainPattern::default(),
            primary_desire: DesirePattern::default(),
            central_fear: "fracasso_público".into(),
            main_motivator: "crescimento_pessoal".into(),
            mental_block: "perfeccionismo_paralisante".into(),
            decision_trigger: "urgência_oportunidade".into(),
        }
    }
}

/// Identifica os padrões emocionais a partir das dores e desejos.
///
/// O perfil psicográfico é aceito por compatibilidade de assinatura, mas
/// nenhuma regra o consulta hoje.
pub fn identify_patterns(
    pains: &[String],
    desires: &[String],
    _psych_profile: Option<&serde_json::Value>,
) -> PatternSet {
    let mut patterns = PatternSet::default();

    if let Some(pain) = first_match(&PAIN_RULES, pains) {
        patterns.dominant_pain = pain;
    }

    if let Some(desire) = first_match(&DESIRE_RULES, desires) {
        patterns.primary_desire = desire;
    }

    log::debug!(
        "Padrões: dor={} desejo={}",
        patterns.dominant_pain.label(),
        patterns.primary_desire.label()
    );

    patterns
}

/// Retorna o rótulo da primeira regra com alguma palavra-chave nos textos
fn first_match<P: Copy>(rules: &[(P, &[&str])], texts: &[String]) -> Option<P> {
    let lowered: Vec<String> = texts.iter().map(|t| t.to_lowercase()).collect();

    rules
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|keyword| lowered.iter().any(|text| text.contains(&keyword.to_lowercase())))
        })
        .map(|(label, _)| *label)
}

/// Verifica se algum texto contém alguma das palavras (case-insensitive)
pub fn mentions_any(texts: &[String], keywords: &[&str]) -> bool {
    texts.iter().any(|text| {
        let lowered = text.to_lowercase();
        keywords.iter().any(|k| lowered.contains(&k.to_lowercase()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_pattern_when_nothing_matches() {
        let a = identify_patterns(&strings(&["nada a ver"]), &strings(&["viajar"]), None);
        let b = identify_patterns(&[], &[], None);
        assert_eq!(a, PatternSet::default());
        assert_eq!(a, b);
        assert_eq!(a.dominant_pain.label(), "frustração_estagnação");
        assert_eq!(a.primary_desire.label(), "liberdade_reconhecimento");
    }

    #[test]
    fn test_first_match_wins_over_best_match() {
        // "tempo" aparece 3 vezes, "fracasso" uma; a regra de medo vem antes
        let pains = strings(&["medo do fracasso", "sem tempo", "tempo curto", "tempo perdido"]);
        let patterns = identify_patterns(&pains, &[], None);
        assert_eq!(patterns.dominant_pain, PainPattern::FearOfFailure);
    }

    #[test]
    fn test_time_overload() {
        let pains = strings(&["Trabalho 12 horas por dia"]);
        let patterns = identify_patterns(&pains, &[], None);
        assert_eq!(patterns.dominant_pain, PainPattern::TimeOverload);
    }

    #[test]
    fn test_social_comparison_case_insensitive() {
        let pains = strings(&["Meus COMPETIDORES vendem mais"]);
        let patterns = identify_patterns(&pains, &[], None);
        assert_eq!(patterns.dominant_pain, PainPattern::SocialComparison);
    }

    #[test]
    fn test_desire_patterns() {
        let patterns = identify_patterns(&[], &strings(&["quero ajudar pessoas"]), None);
        assert_eq!(patterns.primary_desire, DesirePattern::SocialImpact);

        let patterns = identify_patterns(&[], &strings(&["independência financeira"]), None);
        assert_eq!(patterns.primary_desire, DesirePattern::MaterialAbundance);

        let patterns = identify_patterns(&[], &strings(&["mais previsibilidade"]), None);
        assert_eq!(patterns.primary_desire, DesirePattern::SecurityControl);
    }

    #[test]
    fn test_fixed_fields_never_change() {
        let patterns = identify_patterns(&strings(&["fracasso"]), &strings(&["riqueza"]), None);
        assert_eq!(patterns.central_fear, "fracasso_público");
        assert_eq!(patterns.decision_trigger, "urgência_oportunidade");
    }

    #[test]
    fn test_pattern_set_serializes_labels() {
        let json = serde_json::to_value(PatternSet::default()).unwrap();
        assert_eq!(json["dor_dominante"], "frustração_estagnação");
        assert_eq!(json["desejo_primario"], "liberdade_reconhecimento");
    }

    #[test]
    fn test_mentions_any() {
        let objections = strings(&["Está CARO demais"]);
        assert!(mentions_any(&objections, &["caro"]));
        assert!(!mentions_any(&objections, &["tempo"]));
    }
}
