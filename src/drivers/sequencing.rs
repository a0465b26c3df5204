// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SEQUENCIAMENTO E GUIA DE IMPLEMENTAÇÃO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::catalog::DriverId;
use super::customize::CustomizedDriver;
use crate::types::to_strings;

/// Drivers de cada fase da apresentação
const AWAKENING_PHASE: [DriverId; 2] = [DriverId::DiagnosticoBrutal, DriverId::FeridaExposta];
const DESIRE_PHASE: [DriverId; 2] = [DriverId::AmbicaoExpandida, DriverId::TrofeuSecreto];
const DECISION_PHASE: [DriverId; 2] = [DriverId::RelogioPsicologico, DriverId::CustoInvisivel];
const DIRECTION_PHASE: [DriverId; 2] = [DriverId::MetodoVsSorte, DriverId::CoragemNecessaria];

/// Ritmo de aplicação dos drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalTiming {
    #[serde(rename = "intervalo_entre_drivers")]
    pub interval_between_drivers: String,
    #[serde(rename = "reforco_necessario")]
    pub reinforcement: String,
    #[serde(rename = "intensidade_crescente")]
    pub rising_intensity: String,
}

impl Default for OptimalTiming {
    fn default() -> Self {
        Self {
            interval_between_drivers: "3-5 minutos".into(),
            reinforcement: "A cada 15 minutos".into(),
            rising_intensity: "Aumentar 20% a cada driver".into(),
        }
    }
}

/// Plano de sequenciamento em quatro fases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencingPlan {
    #[serde(rename = "fase_1_despertar")]
    pub awakening: Vec<CustomizedDriver>,
    #[serde(rename = "fase_2_desejo")]
    pub desire: Vec<CustomizedDriver>,
    #[serde(rename = "fase_3_decisao")]
    pub decision: Vec<CustomizedDriver>,
    #[serde(rename = "fase_4_direcao")]
    pub direction: Vec<CustomizedDriver>,
    /// Nomes em ordem de impacto decrescente
    #[serde(rename = "sequencia_recomendada")]
    pub recommended_sequence: Vec<String>,
    #[serde(rename = "timing_otimo")]
    pub optimal_timing: OptimalTiming,
}

/// Monta o plano de sequenciamento.
///
/// A ordenação por impacto é estável: empates mantêm a ordem da seleção.
/// Drivers fora das quatro fases só aparecem na sequência recomendada.
pub fn sequence(customized: &[CustomizedDriver]) -> SequencingPlan {
    let mut ordered: Vec<&CustomizedDriver> = customized.iter().collect();
    ordered.sort_by(|a, b| {
        b.impact_score
            .partial_cmp(&a.impact_score)
            .unwrap_or(Ordering::Equal)
    });

    let phase = |members: &[DriverId]| -> Vec<CustomizedDriver> {
        ordered
            .iter()
            .filter(|d| members.contains(&d.id))
            .map(|d| (*d).clone())
            .collect()
    };

    SequencingPlan {
        awakening: phase(&AWAKENING_PHASE),
        desire: phase(&DESIRE_PHASE),
        decision: phase(&DECISION_PHASE),
        direction: phase(&DIRECTION_PHASE),
        recommended_sequence: ordered.iter().map(|d| d.name.clone()).collect(),
        optimal_timing: OptimalTiming::default(),
    }
}

/// Guia de implementação (conteúdo fixo)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationGuide {
    #[serde(rename = "preparacao")]
    pub preparation: Preparation,
    #[serde(rename = "execucao")]
    pub execution: Execution,
    #[serde(rename = "monitoramento")]
    pub monitoring: Monitoring,
    #[serde(rename = "otimizacao")]
    pub optimization: Optimization,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preparation {
    #[serde(rename = "estudo_avatar")]
    pub avatar_study: String,
    #[serde(rename = "teste_drivers")]
    pub driver_testing: String,
    #[serde(rename = "calibragem")]
    pub calibration: String,
    pub backup_plan: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    #[serde(rename = "abertura")]
    pub opening: String,
    #[serde(rename = "desenvolvimento")]
    pub development: String,
    pub climax: String,
    #[serde(rename = "fechamento")]
    pub closing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitoring {
    #[serde(rename = "sinais_positivos")]
    pub positive_signals: Vec<String>,
    #[serde(rename = "sinais_negativos")]
    pub negative_signals: Vec<String>,
    #[serde(rename = "ajustes_tempo_real")]
    pub realtime_adjustments: String,
    pub escalation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Optimization {
    #[serde(rename = "teste_ab")]
    pub ab_testing: String,
    #[serde(rename = "metricas")]
    pub metrics: String,
    #[serde(rename = "refinamento")]
    pub refinement: String,
    #[serde(rename = "personalizacao")]
    pub personalization: String,
}

/// Guia completo de implementação dos drivers
pub fn implementation_guide() -> ImplementationGuide {
    ImplementationGuide {
        preparation: Preparation {
            avatar_study: "Memorize as 3 dores principais e 3 desejos secretos".into(),
            driver_testing: "Teste cada driver com 5 pessoas do avatar antes de usar".into(),
            calibration: "Ajuste intensidade baseado na reação da audiência".into(),
            backup_plan: "Tenha 2 drivers alternativos para cada momento".into(),
        },
        execution: Execution {
            opening: "Sempre comece com Diagnóstico Brutal para quebrar padrão".into(),
            development: "Use drivers emocionais para criar tensão".into(),
            climax: "Combine 2-3 drivers no momento da oferta".into(),
            closing: "Termine com Decisão Binária para forçar ação".into(),
        },
        monitoring: Monitoring {
            positive_signals: to_strings(&[
                "Silêncio absoluto",
                "Perguntas específicas",
                "Linguagem corporal tensa",
            ]),
            negative_signals: to_strings(&["Dispersão", "Conversas paralelas", "Saídas da sala"]),
            realtime_adjustments: "Como modificar drivers baseado na reação".into(),
            escalation: "Quando e como intensificar drivers que não estão funcionando".into(),
        },
        optimization: Optimization {
            ab_testing: "Como testar diferentes versões dos drivers".into(),
            metrics: "Taxa de engajamento, tempo de atenção, conversões".into(),
            refinement: "Como melhorar drivers baseado nos resultados".into(),
            personalization: "Como adaptar drivers para diferentes segmentos do avatar".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::customize::customize;
    use crate::types::BusinessProfile;

    fn plan_for(ids: &[DriverId]) -> SequencingPlan {
        sequence(&customize(ids, &BusinessProfile::default()))
    }

    #[test]
    fn test_sorted_by_impact() {
        let plan = plan_for(&[
            DriverId::AmbienteVampiro,
            DriverId::DiagnosticoBrutal,
            DriverId::RelogioPsicologico,
        ]);
        assert_eq!(plan.recommended_sequence[0], "Diagnóstico Brutal");
        assert_eq!(plan.recommended_sequence.len(), 3);
    }

    #[test]
    fn test_phase_membership() {
        let plan = plan_for(&DriverId::ALL);
        assert_eq!(plan.awakening.len(), 2);
        assert_eq!(plan.desire.len(), 2);
        assert_eq!(plan.decision.len(), 2);
        assert_eq!(plan.direction.len(), 2);
        assert!(plan.decision.iter().any(|d| d.id == DriverId::CustoInvisivel));
        assert_eq!(plan.recommended_sequence.len(), 19);
    }

    #[test]
    fn test_drivers_outside_phases_only_in_sequence() {
        let plan = plan_for(&[DriverId::PadraoOculto]);
        assert!(plan.awakening.is_empty());
        assert!(plan.direction.is_empty());
        assert_eq!(plan.recommended_sequence, vec!["Padrão Oculto".to_string()]);
    }

    #[test]
    fn test_stable_ordering_on_ties() {
        let mut customized = customize(
            &[DriverId::MetodoVsSorte, DriverId::CoragemNecessaria],
            &BusinessProfile::default(),
        );
        for driver in &mut customized {
            driver.impact_score = 8.0;
        }
        let plan = sequence(&customized);
        assert_eq!(plan.direction[0].id, DriverId::MetodoVsSorte);
        assert_eq!(plan.direction[1].id, DriverId::CoragemNecessaria);
    }

    #[test]
    fn test_timing_and_guide_keys() {
        let plan = plan_for(&[]);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["timing_otimo"]["intervalo_entre_drivers"], "3-5 minutos");

        let guide = serde_json::to_value(implementation_guide()).unwrap();
        assert_eq!(guide["monitoramento"]["sinais_positivos"][0], "Silêncio absoluto");
        assert_eq!(guide["preparacao"]["backup_plan"], "Tenha 2 drivers alternativos para cada momento");
    }
}
