// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RELATÓRIO DE MERCADO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Pesquisa web, análise por IA com fallback de templates, drivers mentais,
// predição e consolidação em um único relatório tipado.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

mod analysis;
mod assembler;
mod consolidation;
mod model;
mod prompt;
mod research;
mod sections;

pub mod fallback;

pub use analysis::*;
pub use assembler::*;
pub use consolidation::*;
pub use model::*;
pub use prompt::*;
pub use research::*;
pub use sections::*;
