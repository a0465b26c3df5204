// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DRIVERS MENTAIS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Catálogo fixo de 19 gatilhos psicológicos, detecção de padrões no avatar,
// seleção, customização e sequenciamento. Tudo aqui é determinístico e
// síncrono.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

mod architect;
mod arsenal;
mod catalog;
mod customize;
mod patterns;
mod playbook;
mod selection;
mod sequencing;

pub use architect::*;
pub use arsenal::*;
pub use catalog::*;
pub use customize::*;
pub use patterns::*;
pub use playbook::*;
pub use selection::*;
pub use sequencing::*;
