//! # Deep Market - Relatórios de Marketing em Rust
//!
//! Este crate gera relatórios de mercado em português a partir de um perfil
//! de negócio (segmento, produto, preço, público, dores, desejos, objeções).
//!
//! ## O que o relatório contém?
//!
//! - Avatar do cliente ideal, posicionamento, concorrência, palavras-chave,
//!   métricas, plano de ação, predições e inteligência de mercado
//! - Drivers mentais customizados (gatilhos psicológicos) com roteiros de
//!   ativação, sequenciamento e sistema anti-objeção
//! - Blocos de consolidação: ROI, precificação psicológica, funil,
//!   fidelização, expansão, sucessão...
//!
//! ## Arquitetura
//!
//! ### 1. Drivers Mentais (`drivers`)
//! Catálogo fixo de 19 drivers, detecção de padrões por palavras-chave,
//! seleção (máximo 7, essenciais sempre presentes), customização e
//! sequenciamento em 4 fases. Totalmente determinístico.
//!
//! ### 2. Relatório (`report`)
//! Orquestra pesquisa web → prompt → IA → JSON/texto/templates → drivers →
//! predição → consolidação. Cada seção da análise guarda sua origem (IA ou
//! template).
//!
//! ### 3. Colaboradores (`llm`, `search`, `prediction`)
//! Traits assíncronas com implementação real (OpenAI, Jina) e mocks.
//!
//! ## Exemplo de Uso
//!
//! ```rust,ignore
//! use deep_market::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let assembler = ReportAssembler::new(
//!         Arc::new(MockSearchAggregator::new()),
//!         Arc::new(MockAnalysisGenerator::new()),
//!         Arc::new(MockFuturePredictor::new()),
//!     );
//!     let profile = BusinessProfile::with_segment("consultoria");
//!     let report = assembler.generate_report(&profile, None).await;
//!     println!("{}", report.to_json(true).unwrap());
//! }
//! ```

#![warn(rust_2018_idioms)]

/// Tipos compartilhados: perfil de negócio, resultado de busca e helpers de
/// valores monetários.
pub mod types;

/// Drivers mentais: catálogo, padrões, seleção, customização,
/// sequenciamento e blocos de apoio (arsenal, anti-objeção, pré-pitch).
pub mod drivers;

/// Relatório de mercado e o montador que orquestra as cinco fases.
pub mod report;

/// Gerador de análise (LLM).
///
/// Define a trait `AnalysisGenerator` e implementações para:
/// - APIs compatíveis com OpenAI (chat completions)
/// - Mock para testes
pub mod llm;

/// Agregador de busca web.
///
/// Define a trait `SearchAggregator` e implementações para:
/// - Jina Search
/// - Mock para testes
pub mod search;

/// Preditor de futuro do mercado (JSON opaco).
pub mod prediction;

/// Configuração via variáveis de ambiente.
///
/// **LLM:**
/// - `LLM_PROVIDER`: Provider ("openai", "local") - padrão: "openai"
/// - `LLM_MODEL`: Modelo (padrão: "gpt-4.1-mini")
/// - `LLM_API_BASE_URL`: URL base customizada (opcional)
/// - `LLM_TEMPERATURE`: Temperatura (padrão: 0.7)
/// - `OPENAI_API_KEY`: Chave da API
///
/// **Busca:**
/// - `JINA_API_KEY`: Chave do Jina Search
///
/// **Relatório:**
/// - `REPORT_MAX_TOKENS` (8192), `REPORT_RESULTS_PER_PROVIDER` (10),
///   `REPORT_CONTEXT_CHAR_LIMIT` (15000), `REPORT_PROMPT_RESULTS` (20),
///   `REPORT_HORIZON_MONTHS` (60), `REPORT_RAW_PREVIEW_CHARS` (2000)
pub mod config;

// Re-exports principais
pub use config::{load_app_config, AppConfig, LlmConfig, LlmProvider, ReportConfig};
pub use drivers::{DriverId, DriverSystem, DriversArchitect};
pub use report::{MarketReport, ReportAssembler};
pub use types::*;

/// Versão da biblioteca.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude com imports comuns para uso rápido.
///
/// ```rust,ignore
/// use deep_market::prelude::*;
/// ```
pub mod prelude {
    pub use crate::drivers::{
        catalog, customize, identify_patterns, select_drivers, sequence, CustomizedDriver,
        DriverId, DriverSystem, DriversArchitect, PatternSet,
    };
    pub use crate::llm::{AnalysisGenerator, MockAnalysisGenerator, OpenAiClient};
    pub use crate::prediction::{FuturePredictor, LlmFuturePredictor, MockFuturePredictor};
    pub use crate::report::{AnalysisPath, MarketReport, ReportAssembler, SectionOrigin};
    pub use crate::search::{JinaClient, MockSearchAggregator, SearchAggregator};
    pub use crate::types::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
