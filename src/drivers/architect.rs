// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ARQUITETO DE DRIVERS MENTAIS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Orquestra a análise do avatar: padrões → seleção → customização →
// sequenciamento, e anexa os blocos de apoio (arsenal, anti-objeção,
// pré-pitch, métricas, casos de uso e troubleshooting).
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::arsenal::{anti_objection_system, emergency_arsenal, AntiObjectionSystem};
use super::catalog::{catalog, DriverId, DriverTemplate};
use super::customize::{customize, CustomizedDriver};
use super::patterns::{identify_patterns, PatternSet};
use super::playbook::{
    effectiveness_metrics, practical_use_cases, pre_pitch_system, troubleshooting_guide,
    EffectivenessMetrics, PracticalUseCases, PrePitchSystem, TroubleshootingGuide,
};
use super::selection::select_drivers;
use super::sequencing::{implementation_guide, sequence, ImplementationGuide, SequencingPlan};
use crate::types::{parse_amount, BusinessProfile, DEFAULT_PRICE, DEFAULT_SEGMENT};

/// Resultado da análise do avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverAnalysis {
    #[serde(rename = "padroes_emocionais")]
    pub patterns: PatternSet,
    #[serde(rename = "drivers_selecionados")]
    pub selected: Vec<DriverId>,
    #[serde(rename = "drivers_customizados")]
    pub customized: Vec<CustomizedDriver>,
    #[serde(rename = "sequenciamento_estrategico")]
    pub sequencing: SequencingPlan,
    #[serde(rename = "guia_implementacao")]
    pub implementation_guide: ImplementationGuide,
}

/// Sistema completo de drivers mentais
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSystem {
    #[serde(rename = "padroes_emocionais")]
    pub patterns: PatternSet,
    #[serde(rename = "drivers_selecionados")]
    pub selected: Vec<DriverId>,
    #[serde(rename = "drivers_customizados")]
    pub customized: Vec<CustomizedDriver>,
    #[serde(rename = "sequenciamento_estrategico")]
    pub sequencing: SequencingPlan,
    #[serde(rename = "guia_implementacao")]
    pub implementation_guide: ImplementationGuide,
    #[serde(rename = "arsenal_emergencia")]
    pub emergency_arsenal: Vec<String>,
    #[serde(rename = "sistema_anti_objecao")]
    pub anti_objection: AntiObjectionSystem,
    #[serde(rename = "pre_pitch_invisivel")]
    pub pre_pitch: PrePitchSystem,
    #[serde(rename = "metricas_eficacia")]
    pub effectiveness_metrics: EffectivenessMetrics,
    #[serde(rename = "casos_uso_pratico")]
    pub practical_use_cases: PracticalUseCases,
    pub troubleshooting: TroubleshootingGuide,
}

/// Arquiteto de drivers mentais
///
/// Não guarda estado além da referência ao catálogo estático; pode ser
/// compartilhado entre tasks livremente.
#[derive(Debug, Clone)]
pub struct DriversArchitect {
    catalog: &'static BTreeMap<DriverId, DriverTemplate>,
}

impl Default for DriversArchitect {
    fn default() -> Self {
        Self::new()
    }
}

impl DriversArchitect {
    pub fn new() -> Self {
        let catalog = catalog();
        log::info!("🧠 Arquiteto de Drivers Mentais pronto com {} drivers", catalog.len());
        Self { catalog }
    }

    /// Catálogo usado pelo arquiteto
    pub fn catalog(&self) -> &'static BTreeMap<DriverId, DriverTemplate> {
        self.catalog
    }

    /// Analisa o avatar e monta os drivers customizados
    pub fn analyze_avatar(&self, avatar: &BusinessProfile) -> DriverAnalysis {
        let patterns = identify_patterns(
            &avatar.pains,
            &avatar.desires,
            avatar.psych_profile.as_ref(),
        );
        let selected = select_drivers(&patterns, &avatar.objections);
        let customized = customize(&selected, avatar);
        let sequencing = sequence(&customized);

        DriverAnalysis {
            patterns,
            selected,
            customized,
            sequencing,
            implementation_guide: implementation_guide(),
        }
    }

    /// Gera o sistema completo.
    ///
    /// Segmento e preço vêm do avatar e, na falta, do contexto do projeto.
    pub fn generate_complete_drivers_system(
        &self,
        avatar: &BusinessProfile,
        context: &BusinessProfile,
    ) -> DriverSystem {
        log::info!("🧠 Gerando sistema completo de drivers mentais...");

        let avatar = merge_context(avatar, context);
        let segment = avatar.segment_or_default();
        let price = avatar.price_amount();

        let analysis = self.analyze_avatar(&avatar);

        log::info!(
            "✅ {} drivers customizados para {}",
            analysis.customized.len(),
            segment
        );

        DriverSystem {
            patterns: analysis.patterns,
            selected: analysis.selected,
            customized: analysis.customized,
            sequencing: analysis.sequencing,
            implementation_guide: analysis.implementation_guide,
            emergency_arsenal: emergency_arsenal(segment),
            anti_objection: anti_objection_system(segment, price),
            pre_pitch: pre_pitch_system(segment),
            effectiveness_metrics: effectiveness_metrics(),
            practical_use_cases: practical_use_cases(segment),
            troubleshooting: troubleshooting_guide(),
        }
    }
}

/// Completa segmento e preço do avatar com os do contexto
fn merge_context(avatar: &BusinessProfile, context: &BusinessProfile) -> BusinessProfile {
    let mut merged = avatar.clone();

    if merged.segment().is_none() {
        merged.segment = context.segment().map(str::to_string);
    }

    let avatar_price_usable = merged
        .price
        .as_deref()
        .and_then(parse_amount)
        .is_some();
    if !avatar_price_usable {
        merged.price = context.price.clone();
    }

    log::debug!(
        "Avatar para drivers: segmento={} preço={}",
        merged.segment().unwrap_or(DEFAULT_SEGMENT),
        merged
            .price
            .as_deref()
            .and_then(parse_amount)
            .unwrap_or(DEFAULT_PRICE)
    );

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::catalog::ESSENTIAL_DRIVERS;

    #[test]
    fn test_consulting_scenario() {
        let avatar = BusinessProfile {
            segment: Some("consultoria".into()),
            price: Some("997".into()),
            pains: vec!["trabalho muito e não cresço".into()],
            objections: vec!["está caro".into()],
            ..Default::default()
        };
        let system = DriversArchitect::new().generate_complete_drivers_system(&avatar, &avatar);

        for essential in ESSENTIAL_DRIVERS {
            assert!(system.selected.contains(&essential));
        }
        assert!(system.selected.contains(&DriverId::CustoInvisivel));
        assert!(system.selected.contains(&DriverId::AmbienteVampiro));
        assert!(system.customized.iter().all(|d| !d.visceral_definition.is_empty()));
        assert!(system.anti_objection.closing_scripts.value.contains("R$ 997"));
        assert!(system.emergency_arsenal[0].contains("consultoria"));
    }

    #[test]
    fn test_context_fills_segment_and_price() {
        let avatar = BusinessProfile::default();
        let mut context = BusinessProfile::with_segment("marketing digital");
        context.price = Some("2000".into());

        let system = DriversArchitect::new().generate_complete_drivers_system(&avatar, &context);
        assert!(system.emergency_arsenal[3].contains("marketing digital"));
        assert!(system.anti_objection.closing_scripts.value.starts_with("R$ 2000"));
    }

    #[test]
    fn test_avatar_wins_over_context() {
        let avatar = BusinessProfile::with_segment("odontologia");
        let context = BusinessProfile::with_segment("fitness");

        let system = DriversArchitect::new().generate_complete_drivers_system(&avatar, &context);
        assert!(system.pre_pitch.value_anchoring["roi_demonstrado"].contains("odontologia"));
    }

    #[test]
    fn test_empty_avatar_defaults() {
        let system = DriversArchitect::default()
            .generate_complete_drivers_system(&BusinessProfile::default(), &BusinessProfile::default());
        assert_eq!(system.selected.len(), 4);
        assert!(system.emergency_arsenal[0].contains("negócios"));
        assert!(system.anti_objection.closing_scripts.value.starts_with("R$ 997"));
    }

    #[test]
    fn test_analyze_avatar_sequencing() {
        let analysis = DriversArchitect::new().analyze_avatar(&BusinessProfile::default());
        assert_eq!(analysis.sequencing.recommended_sequence[0], "Diagnóstico Brutal");
        assert_eq!(analysis.customized.len(), analysis.selected.len());
    }

    #[test]
    fn test_system_serialization_keys() {
        let system = DriversArchitect::new()
            .generate_complete_drivers_system(&BusinessProfile::default(), &BusinessProfile::default());
        let json = serde_json::to_value(&system).unwrap();
        for key in [
            "drivers_customizados",
            "sequenciamento_estrategico",
            "guia_implementacao",
            "arsenal_emergencia",
            "sistema_anti_objecao",
            "pre_pitch_invisivel",
            "metricas_eficacia",
            "casos_uso_pratico",
            "troubleshooting",
        ] {
            assert!(json.get(key).is_some(), "faltando {}", key);
        }
    }
}
