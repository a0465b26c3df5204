// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// MONTADOR DO RELATÓRIO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Cinco fases, sempre nesta ordem:
//   1. Pesquisa web
//   2. Análise (prompt → IA → JSON / texto / templates)
//   3. Drivers mentais
//   4. Predição de mercado
//   5. Consolidação
//
// Nenhuma falha de colaborador interrompe o relatório.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};

use crate::config::ReportConfig;
use crate::drivers::{DriverSystem, DriversArchitect};
use crate::llm::AnalysisGenerator;
use crate::prediction::FuturePredictor;
use crate::search::SearchAggregator;
use crate::types::BusinessProfile;

use super::analysis::{AvatarList, MarketAnalysis};
use super::consolidation;
use super::model::{MarketReport, ReportMetadata};
use super::prompt::{build_context, build_prompt};
use super::research::{run_research, WebResearch};

/// Orquestra colaboradores e templates para gerar o relatório
pub struct ReportAssembler {
    search: Arc<dyn SearchAggregator>,
    generator: Arc<dyn AnalysisGenerator>,
    predictor: Arc<dyn FuturePredictor>,
    architect: DriversArchitect,
    config: ReportConfig,
}

impl ReportAssembler {
    /// Cria o montador com a configuração padrão
    pub fn new(
        search: Arc<dyn SearchAggregator>,
        generator: Arc<dyn AnalysisGenerator>,
        predictor: Arc<dyn FuturePredictor>,
    ) -> Self {
        Self {
            search,
            generator,
            predictor,
            architect: DriversArchitect::new(),
            config: ReportConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Gera o relatório completo. Nunca falha: colaboradores com erro são
    /// substituídos por templates.
    pub async fn generate_report(
        &self,
        profile: &BusinessProfile,
        session_id: Option<&str>,
    ) -> MarketReport {
        let start = Instant::now();
        log::info!(
            "🚀 Iniciando análise gigante: {} (sessão: {})",
            profile.segment_or_title(),
            session_id.unwrap_or("-")
        );

        // FASE 1
        log::info!("📊 Coletando dados...");
        let research = run_research(
            self.search.as_ref(),
            profile,
            self.config.results_per_provider,
        )
        .await;

        // FASE 2
        let analysis = self.perform_analysis(profile, &research).await;

        // FASE 3
        let driver_avatar = driver_avatar(profile, &analysis);
        let drivers = self
            .architect
            .generate_complete_drivers_system(&driver_avatar, profile);

        // FASE 4
        let future_predictions = self.predict(profile).await;

        // FASE 5
        let report = self.consolidate(profile, research, analysis, drivers, future_predictions, session_id);

        log::info!(
            "✅ Análise gigante concluída em {}ms ({} seções da IA, caminho {:?})",
            start.elapsed().as_millis(),
            report.analysis.ai_section_count(),
            report.analysis.path
        );

        report
    }

    async fn perform_analysis(&self, profile: &BusinessProfile, research: &WebResearch) -> MarketAnalysis {
        log::info!("🧠 Executando análise profunda...");

        let context = build_context(
            profile,
            research,
            self.config.prompt_results,
            self.config.context_char_limit,
        );
        let prompt = build_prompt(&context);
        log::debug!("Prompt de análise: {} caracteres", prompt.chars().count());

        let response = match self
            .generator
            .generate_analysis(&prompt, self.config.max_tokens)
            .await
        {
            Ok(Some(text)) => Some(text),
            Ok(None) => {
                log::warn!("⚠️ IA não retornou análise, usando templates");
                None
            }
            Err(e) => {
                log::warn!("⚠️ Falha na IA ({}), usando templates", e);
                None
            }
        };

        MarketAnalysis::from_response(
            response.as_deref(),
            profile,
            research,
            self.config.raw_preview_chars,
        )
    }

    async fn predict(&self, profile: &BusinessProfile) -> Value {
        log::info!("🔮 Predizendo futuro do mercado...");

        match self
            .predictor
            .predict_market_future(
                profile.segment_or_default(),
                profile,
                self.config.horizon_months,
            )
            .await
        {
            Ok(prediction) => prediction,
            Err(e) => {
                log::warn!("⚠️ Predição indisponível: {}", e);
                json!({})
            }
        }
    }

    fn consolidate(
        &self,
        profile: &BusinessProfile,
        research: WebResearch,
        analysis: MarketAnalysis,
        drivers: DriverSystem,
        future_predictions: Value,
        session_id: Option<&str>,
    ) -> MarketReport {
        log::info!("📦 Consolidando relatório...");

        let metadata = ReportMetadata::new(&analysis, &research, self.config.horizon_months, session_id);

        MarketReport {
            drivers: drivers.customized,
            anti_objection: drivers.anti_objection,
            pre_pitch: drivers.pre_pitch,
            emergency_arsenal: drivers.emergency_arsenal,
            future_predictions,
            competitive_intelligence: consolidation::competitive_intelligence(),
            hidden_opportunities: consolidation::hidden_opportunities(profile),
            potential_threats: consolidation::potential_threats(profile),
            dominance_roadmap: consolidation::dominance_roadmap(profile),
            monitoring: consolidation::monitoring_system(),
            contingency_plan: consolidation::contingency_plan(),
            roi_analysis: consolidation::roi_analysis(profile),
            weekly_schedule: consolidation::weekly_schedule(),
            sales_scripts: consolidation::sales_scripts(profile),
            pricing_strategy: consolidation::pricing_strategy(profile),
            conversion_funnel: consolidation::conversion_funnel(),
            loyalty_system: consolidation::loyalty_system(),
            geographic_expansion: consolidation::geographic_expansion(),
            succession_plan: consolidation::succession_plan(),
            final_insights: consolidation::final_insights(profile),
            metadata,
            research,
            analysis,
        }
    }
}

/// Avatar para os drivers: valores do perfil, com dores, desejos e objeções
/// da análise quando o perfil não traz nenhuma
pub fn driver_avatar(profile: &BusinessProfile, analysis: &MarketAnalysis) -> BusinessProfile {
    let mut avatar = profile.clone();

    if avatar.pains.is_empty() {
        avatar.pains = analysis.avatar_list(AvatarList::Pains);
    }
    if avatar.desires.is_empty() {
        avatar.desires = analysis.avatar_list(AvatarList::Desires);
    }
    if avatar.objections.is_empty() {
        avatar.objections = analysis.avatar_list(AvatarList::Objections);
    }

    avatar
}
