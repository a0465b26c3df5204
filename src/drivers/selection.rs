// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SELEÇÃO DE DRIVERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use super::catalog::{DriverId, ESSENTIAL_DRIVERS};
use super::patterns::{mentions_any, PainPattern, PatternSet};

/// Máximo de drivers por seleção
pub const MAX_SELECTED_DRIVERS: usize = 7;

/// Palavras de objeção que indicam falta de tempo
const TIME_OBJECTION_KEYWORDS: &[&str] = &["tempo"];

/// Palavras de objeção ligadas a preço
const PRICE_OBJECTION_KEYWORDS: &[&str] = &["dinheiro", "preço", "caro"];

/// Palavras de objeção de quem já tentou antes
const DISBELIEF_OBJECTION_KEYWORDS: &[&str] = &["não funciona", "já tentei"];

/// Drivers mais eficazes para cada padrão de dor
pub fn drivers_for_pain(pattern: PainPattern) -> [DriverId; 3] {
    use DriverId::*;

    match pattern {
        PainPattern::Stagnation => [DiagnosticoBrutal, AmbienteVampiro, RelogioPsicologico],
        PainPattern::FearOfFailure => [CoragemNecessaria, MentorSalvador, MetodoVsSorte],
        PainPattern::TimeOverload => [CustoInvisivel, AtalhoEtico, DecisaoBinaria],
        PainPattern::SocialComparison => [InvejaProdutiva, AmbicaoExpandida, OportunidadeOculta],
    }
}

/// Seleciona os drivers para o avatar.
///
/// Ordem de inserção: essenciais, drivers do padrão de dor e por fim os
/// disparados por objeções (tempo, preço, descrença). Duplicatas são
/// descartadas mantendo a primeira ocorrência e o resultado é truncado em
/// [`MAX_SELECTED_DRIVERS`]. Como os essenciais entram primeiro, nunca são
/// cortados.
pub fn select_drivers(patterns: &PatternSet, objections: &[String]) -> Vec<DriverId> {
    let mut candidates: Vec<DriverId> = ESSENTIAL_DRIVERS.to_vec();
    candidates.extend(drivers_for_pain(patterns.dominant_pain));

    if mentions_any(objections, TIME_OBJECTION_KEYWORDS) {
        candidates.push(DriverId::AtalhoEtico);
    }

    if mentions_any(objections, PRICE_OBJECTION_KEYWORDS) {
        candidates.push(DriverId::CustoInvisivel);
    }

    if mentions_any(objections, DISBELIEF_OBJECTION_KEYWORDS) {
        candidates.push(DriverId::MetodoVsSorte);
    }

    let mut selected: Vec<DriverId> = Vec::with_capacity(MAX_SELECTED_DRIVERS);
    for id in candidates {
        if !selected.contains(&id) {
            selected.push(id);
        }
    }
    selected.truncate(MAX_SELECTED_DRIVERS);

    log::debug!(
        "Drivers selecionados ({}): {:?}",
        selected.len(),
        selected.iter().map(|id| id.as_key()).collect::<Vec<_>>()
    );

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::patterns::identify_patterns;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn patterns_with(pain: PainPattern) -> PatternSet {
        PatternSet {
            dominant_pain: pain,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_selection() {
        let selected = select_drivers(&PatternSet::default(), &[]);
        assert_eq!(
            selected,
            vec![
                DriverId::DiagnosticoBrutal,
                DriverId::AmbicaoExpandida,
                DriverId::RelogioPsicologico,
                DriverId::AmbienteVampiro,
            ]
        );
    }

    #[test]
    fn test_consulting_scenario() {
        let pains = strings(&["trabalho muito e não cresço"]);
        let patterns = identify_patterns(&pains, &[], None);
        assert_eq!(patterns.dominant_pain, PainPattern::Stagnation);

        let selected = select_drivers(&patterns, &strings(&["está caro"]));
        for essential in ESSENTIAL_DRIVERS {
            assert!(selected.contains(&essential));
        }
        assert!(selected.contains(&DriverId::AmbienteVampiro));
        assert!(selected.contains(&DriverId::CustoInvisivel));
        assert!(selected.len() <= MAX_SELECTED_DRIVERS);
    }

    #[test]
    fn test_truncation_keeps_essentials() {
        // 3 essenciais + 3 do padrão + 2 novos de objeções = 8 candidatos distintos
        let objections = strings(&["não tenho tempo", "falta dinheiro", "já tentei de tudo"]);
        let selected = select_drivers(&patterns_with(PainPattern::FearOfFailure), &objections);

        assert_eq!(selected.len(), MAX_SELECTED_DRIVERS);
        assert_eq!(&selected[..3], &ESSENTIAL_DRIVERS[..]);
        // Método vs Sorte já veio do padrão; Custo Invisível foi cortado
        assert!(selected.contains(&DriverId::MetodoVsSorte));
        assert!(selected.contains(&DriverId::AtalhoEtico));
        assert!(!selected.contains(&DriverId::CustoInvisivel));
    }

    #[test]
    fn test_selection_is_unique_and_bounded() {
        for pain in [
            PainPattern::Stagnation,
            PainPattern::FearOfFailure,
            PainPattern::TimeOverload,
            PainPattern::SocialComparison,
        ] {
            for objections in [
                vec![],
                strings(&["preço"]),
                strings(&["tempo", "dinheiro", "não funciona"]),
            ] {
                let selected = select_drivers(&patterns_with(pain), &objections);
                assert!(selected.len() >= 3 && selected.len() <= MAX_SELECTED_DRIVERS);

                let mut dedup = selected.clone();
                dedup.sort();
                dedup.dedup();
                assert_eq!(dedup.len(), selected.len());
            }
        }
    }

    #[test]
    fn test_selection_is_deterministic() {
        let objections = strings(&["sem tempo", "preço alto"]);
        let patterns = patterns_with(PainPattern::TimeOverload);
        assert_eq!(
            select_drivers(&patterns, &objections),
            select_drivers(&patterns, &objections)
        );
    }

    #[test]
    fn test_social_comparison_mapping() {
        let selected = select_drivers(&patterns_with(PainPattern::SocialComparison), &[]);
        assert_eq!(selected.len(), 5);
        assert!(selected.contains(&DriverId::InvejaProdutiva));
        assert!(selected.contains(&DriverId::OportunidadeOculta));
    }
}
