// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CATÁLOGO DOS 19 DRIVERS UNIVERSAIS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Identificador de cada driver do catálogo.
///
/// O enum garante que não existem drivers "inventados" e permite que a
/// customização seja feita por `match`, sem depender do nome de exibição.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverId {
    FeridaExposta,
    TrofeuSecreto,
    InvejaProdutiva,
    RelogioPsicologico,
    IdentidadeAprisionada,
    CustoInvisivel,
    AmbicaoExpandida,
    DiagnosticoBrutal,
    AmbienteVampiro,
    MentorSalvador,
    CoragemNecessaria,
    MecanismoRevelado,
    ProvaMatematica,
    PadraoOculto,
    ExcecaoPossivel,
    AtalhoEtico,
    DecisaoBinaria,
    OportunidadeOculta,
    MetodoVsSorte,
}

impl DriverId {
    /// Todos os drivers, na ordem do catálogo
    pub const ALL: [DriverId; 19] = [
        Self::FeridaExposta,
        Self::TrofeuSecreto,
        Self::InvejaProdutiva,
        Self::RelogioPsicologico,
        Self::IdentidadeAprisionada,
        Self::CustoInvisivel,
        Self::AmbicaoExpandida,
        Self::DiagnosticoBrutal,
        Self::AmbienteVampiro,
        Self::MentorSalvador,
        Self::CoragemNecessaria,
        Self::MecanismoRevelado,
        Self::ProvaMatematica,
        Self::PadraoOculto,
        Self::ExcecaoPossivel,
        Self::AtalhoEtico,
        Self::DecisaoBinaria,
        Self::OportunidadeOculta,
        Self::MetodoVsSorte,
    ];

    /// Chave estável em snake_case
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::FeridaExposta => "ferida_exposta",
            Self::TrofeuSecreto => "trofeu_secreto",
            Self::InvejaProdutiva => "inveja_produtiva",
            Self::RelogioPsicologico => "relogio_psicologico",
            Self::IdentidadeAprisionada => "identidade_aprisionada",
            Self::CustoInvisivel => "custo_invisivel",
            Self::AmbicaoExpandida => "ambicao_expandida",
            Self::DiagnosticoBrutal => "diagnostico_brutal",
            Self::AmbienteVampiro => "ambiente_vampiro",
            Self::MentorSalvador => "mentor_salvador",
            Self::CoragemNecessaria => "coragem_necessaria",
            Self::MecanismoRevelado => "mecanismo_revelado",
            Self::ProvaMatematica => "prova_matematica",
            Self::PadraoOculto => "padrao_oculto",
            Self::ExcecaoPossivel => "excecao_possivel",
            Self::AtalhoEtico => "atalho_etico",
            Self::DecisaoBinaria => "decisao_binaria",
            Self::OportunidadeOculta => "oportunidade_oculta",
            Self::MetodoVsSorte => "metodo_vs_sorte",
        }
    }

    /// Converte a chave snake_case de volta para o enum
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_key() == key)
    }

    /// Nome de exibição
    pub fn name(&self) -> &'static str {
        self.template().name
    }

    /// Template do catálogo
    pub fn template(&self) -> &'static DriverTemplate {
        &CATALOG[self]
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// Os três drivers presentes em qualquer seleção
pub const ESSENTIAL_DRIVERS: [DriverId; 3] = [
    DriverId::DiagnosticoBrutal,
    DriverId::AmbicaoExpandida,
    DriverId::RelogioPsicologico,
];

/// Categoria do driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriverCategory {
    /// Gatilhos emocionais primários
    #[serde(rename = "emocional_primario")]
    EmotionalPrimary,
    /// Gatilhos racionais que complementam os emocionais
    #[serde(rename = "racional_complementar")]
    RationalComplementary,
}

impl DriverCategory {
    /// Retorna a categoria como string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmotionalPrimary => "emocional_primario",
            Self::RationalComplementary => "racional_complementar",
        }
    }
}

/// Registro estático de um driver mental
#[derive(Debug, Clone, PartialEq)]
pub struct DriverTemplate {
    /// Identificador
    pub id: DriverId,
    /// Nome de exibição
    pub name: &'static str,
    /// Categoria
    pub category: DriverCategory,
    /// Gatilho central
    pub core_trigger: &'static str,
    /// Mecânica psicológica
    pub mechanism: &'static str,
    /// Momento ideal na apresentação
    pub ideal_moment: &'static str,
    /// Texto base de ativação (com marcadores entre colchetes)
    pub base_activation_text: &'static str,
    /// Poder de impacto (0.0 - 10.0)
    pub impact_score: f32,
    /// Drivers que potencializam este
    pub complements: &'static [DriverId],
}

static CATALOG: Lazy<BTreeMap<DriverId, DriverTemplate>> = Lazy::new(build_catalog);

/// Catálogo fixo com os 19 drivers universais.
///
/// Construído uma única vez e nunca alterado.
pub fn catalog() -> &'static BTreeMap<DriverId, DriverTemplate> {
    &CATALOG
}

/// Alias de [`catalog`] mantido para quem carrega o catálogo explicitamente
pub fn load_catalog() -> &'static BTreeMap<DriverId, DriverTemplate> {
    catalog()
}

fn build_catalog() -> BTreeMap<DriverId, DriverTemplate> {
    use DriverCategory::{EmotionalPrimary, RationalComplementary};
    use DriverId::*;

    let templates = [
        DriverTemplate {
            id: FeridaExposta,
            name: "Ferida Exposta",
            category: EmotionalPrimary,
            core_trigger: "Dor não resolvida",
            mechanism: "Trazer à consciência o que foi reprimido",
            ideal_moment: "Abertura da apresentação - quebra de padrão",
            base_activation_text: "Você ainda [comportamento doloroso] mesmo sabendo que [consequência]?",
            impact_score: 9.5,
            complements: &[DiagnosticoBrutal, CustoInvisivel],
        },
        DriverTemplate {
            id: TrofeuSecreto,
            name: "Troféu Secreto",
            category: EmotionalPrimary,
            core_trigger: "Desejo inconfessável",
            mechanism: "Validar ambições 'proibidas'",
            ideal_moment: "Meio da apresentação - amplificação do desejo",
            base_activation_text: "Não é sobre dinheiro, é sobre [desejo real oculto]",
            impact_score: 9.0,
            complements: &[AmbicaoExpandida, IdentidadeAprisionada],
        },
        DriverTemplate {
            id: InvejaProdutiva,
            name: "Inveja Produtiva",
            category: EmotionalPrimary,
            core_trigger: "Comparação com pares",
            mechanism: "Transformar inveja em combustível",
            ideal_moment: "Demonstração de resultados - prova social",
            base_activation_text: "Enquanto você [situação atual], outros como você [resultado desejado]",
            impact_score: 8.5,
            complements: &[AmbienteVampiro, OportunidadeOculta],
        },
        DriverTemplate {
            id: RelogioPsicologico,
            name: "Relógio Psicológico",
            category: EmotionalPrimary,
            core_trigger: "Urgência existencial",
            mechanism: "Tempo como recurso finito",
            ideal_moment: "Antes da oferta - criação de urgência",
            base_activation_text: "Quantos [período] você ainda vai [desperdício]?",
            impact_score: 9.2,
            complements: &[CustoInvisivel, DecisaoBinaria],
        },
        DriverTemplate {
            id: IdentidadeAprisionada,
            name: "Identidade Aprisionada",
            category: EmotionalPrimary,
            core_trigger: "Conflito entre quem é e quem poderia ser",
            mechanism: "Expor a máscara social",
            ideal_moment: "Desenvolvimento do problema - consciência",
            base_activation_text: "Você não é [rótulo limitante], você é [potencial real]",
            impact_score: 8.8,
            complements: &[AmbicaoExpandida, CoragemNecessaria],
        },
        DriverTemplate {
            id: CustoInvisivel,
            name: "Custo Invisível",
            category: EmotionalPrimary,
            core_trigger: "Perda não percebida",
            mechanism: "Quantificar o preço da inação",
            ideal_moment: "Agitação do problema - amplificação da dor",
            base_activation_text: "Cada dia sem [solução] custa [perda específica]",
            impact_score: 9.3,
            complements: &[RelogioPsicologico, DiagnosticoBrutal],
        },
        DriverTemplate {
            id: AmbicaoExpandida,
            name: "Ambição Expandida",
            category: EmotionalPrimary,
            core_trigger: "Sonhos pequenos demais",
            mechanism: "Elevar o teto mental de possibilidades",
            ideal_moment: "Visão do futuro - expansão de possibilidades",
            base_activation_text: "Se o esforço é o mesmo, por que você está pedindo tão pouco?",
            impact_score: 8.7,
            complements: &[TrofeuSecreto, OportunidadeOculta],
        },
        DriverTemplate {
            id: DiagnosticoBrutal,
            name: "Diagnóstico Brutal",
            category: EmotionalPrimary,
            core_trigger: "Confronto com a realidade atual",
            mechanism: "Criar indignação produtiva com status quo",
            ideal_moment: "Início - quebra de padrão e consciência",
            base_activation_text: "Olhe seus números/situação. Até quando você vai aceitar isso?",
            impact_score: 9.8,
            complements: &[FeridaExposta, AmbienteVampiro],
        },
        DriverTemplate {
            id: AmbienteVampiro,
            name: "Ambiente Vampiro",
            category: EmotionalPrimary,
            core_trigger: "Consciência do entorno tóxico",
            mechanism: "Revelar como ambiente atual suga energia/potencial",
            ideal_moment: "Identificação de obstáculos externos",
            base_activation_text: "Seu ambiente te impulsiona ou te mantém pequeno?",
            impact_score: 8.4,
            complements: &[MentorSalvador, CoragemNecessaria],
        },
        DriverTemplate {
            id: MentorSalvador,
            name: "Mentor Salvador",
            category: EmotionalPrimary,
            core_trigger: "Necessidade de orientação externa",
            mechanism: "Ativar desejo por figura de autoridade que acredita neles",
            ideal_moment: "Apresentação da solução - posicionamento de autoridade",
            base_activation_text: "Você precisa de alguém que veja seu potencial quando você não consegue",
            impact_score: 8.6,
            complements: &[AmbienteVampiro, MetodoVsSorte],
        },
        DriverTemplate {
            id: CoragemNecessaria,
            name: "Coragem Necessária",
            category: EmotionalPrimary,
            core_trigger: "Medo paralisante disfarçado",
            mechanism: "Transformar desculpas em decisões corajosas",
            ideal_moment: "Fechamento - superação de objeções",
            base_activation_text: "Não é sobre condições perfeitas, é sobre decidir apesar do medo",
            impact_score: 8.9,
            complements: &[DecisaoBinaria, IdentidadeAprisionada],
        },
        DriverTemplate {
            id: MecanismoRevelado,
            name: "Mecanismo Revelado",
            category: RationalComplementary,
            core_trigger: "Compreensão do 'como'",
            mechanism: "Desmistificar o complexo",
            ideal_moment: "Demonstração da solução - prova de conceito",
            base_activation_text: "É simplesmente [analogia simples], não [complicação percebida]",
            impact_score: 7.8,
            complements: &[MetodoVsSorte, PadraoOculto],
        },
        DriverTemplate {
            id: ProvaMatematica,
            name: "Prova Matemática",
            category: RationalComplementary,
            core_trigger: "Certeza numérica",
            mechanism: "Equação irrefutável",
            ideal_moment: "Validação da solução - dados concretos",
            base_activation_text: "Se você fizer X por Y dias = Resultado Z garantido",
            impact_score: 8.2,
            complements: &[MecanismoRevelado, AtalhoEtico],
        },
        DriverTemplate {
            id: PadraoOculto,
            name: "Padrão Oculto",
            category: RationalComplementary,
            core_trigger: "Insight revelador",
            mechanism: "Mostrar o que sempre esteve lá",
            ideal_moment: "Educação - revelação de insights",
            base_activation_text: "Todos que conseguiram [resultado] fizeram [padrão específico]",
            impact_score: 8.0,
            complements: &[ExcecaoPossivel, OportunidadeOculta],
        },
        DriverTemplate {
            id: ExcecaoPossivel,
            name: "Exceção Possível",
            category: RationalComplementary,
            core_trigger: "Quebra de limitação",
            mechanism: "Provar que regras podem ser quebradas",
            ideal_moment: "Superação de crenças limitantes",
            base_activation_text: "Diziam que [limitação], mas [prova contrária]",
            impact_score: 7.9,
            complements: &[PadraoOculto, AmbicaoExpandida],
        },
        DriverTemplate {
            id: AtalhoEtico,
            name: "Atalho Ético",
            category: RationalComplementary,
            core_trigger: "Eficiência sem culpa",
            mechanism: "Validar o caminho mais rápido",
            ideal_moment: "Apresentação do método - justificativa",
            base_activation_text: "Por que sofrer [tempo longo] se existe [atalho comprovado]?",
            impact_score: 8.1,
            complements: &[MetodoVsSorte, ProvaMatematica],
        },
        DriverTemplate {
            id: DecisaoBinaria,
            name: "Decisão Binária",
            category: RationalComplementary,
            core_trigger: "Simplificação radical",
            mechanism: "Eliminar zona cinzenta",
            ideal_moment: "Fechamento - forçar decisão",
            base_activation_text: "Ou você [ação desejada] ou aceita [consequência dolorosa]",
            impact_score: 9.1,
            complements: &[RelogioPsicologico, CoragemNecessaria],
        },
        DriverTemplate {
            id: OportunidadeOculta,
            name: "Oportunidade Oculta",
            category: RationalComplementary,
            core_trigger: "Vantagem não percebida",
            mechanism: "Revelar demanda/chance óbvia mas ignorada",
            ideal_moment: "Contextualização do mercado - timing",
            base_activation_text: "O mercado está gritando por [solução] e ninguém está ouvindo",
            impact_score: 8.3,
            complements: &[PadraoOculto, AmbicaoExpandida],
        },
        DriverTemplate {
            id: MetodoVsSorte,
            name: "Método vs Sorte",
            category: RationalComplementary,
            core_trigger: "Caos vs sistema",
            mechanism: "Contrastar tentativa aleatória com caminho estruturado",
            ideal_moment: "Diferenciação da solução - metodologia",
            base_activation_text: "Sem método você está cortando mata com foice. Com método, está na autoestrada",
            impact_score: 8.7,
            complements: &[MentorSalvador, AtalhoEtico],
        },
    ];

    templates.into_iter().map(|t| (t.id, t)).collect()
}
