// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PRÉ-PITCH INVISÍVEL, MÉTRICAS, CASOS DE USO E TROUBLESHOOTING
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};

use crate::types::{text_map, to_strings, TextMap};

/// Uma fase da orquestração emocional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalPhase {
    #[serde(rename = "fase")]
    pub phase: String,
    #[serde(rename = "objetivo")]
    pub goal: String,
    #[serde(rename = "tempo")]
    pub time: String,
    #[serde(rename = "tecnicas")]
    pub techniques: Vec<String>,
    #[serde(rename = "exemplo")]
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalOrchestration {
    #[serde(rename = "sequencia_psicologica")]
    pub psychological_sequence: Vec<EmotionalPhase>,
}

/// Sistema de pré-pitch invisível
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrePitchSystem {
    #[serde(rename = "orquestracao_emocional")]
    pub emotional_orchestration: EmotionalOrchestration,
    #[serde(rename = "ancoragem_de_valor")]
    pub value_anchoring: TextMap,
    #[serde(rename = "triggers_decisao")]
    pub decision_triggers: TextMap,
}

fn phase(name: &str, goal: &str, time: &str, techniques: &[&str], example: String) -> EmotionalPhase {
    EmotionalPhase {
        phase: name.into(),
        goal: goal.into(),
        time: time.into(),
        techniques: to_strings(techniques),
        example,
    }
}

/// Orquestração emocional em seis fases, ancoragem de valor e gatilhos de decisão
pub fn pre_pitch_system(segment: &str) -> PrePitchSystem {
    let psychological_sequence = vec![
        phase(
            "Quebra de Padrão",
            "Interromper piloto automático mental",
            "Primeiros 2 minutos",
            &["Pergunta chocante", "Estatística surpreendente", "Afirmação controversa"],
            format!("Quem aqui está satisfeito com seus resultados no {segment}? [Pausa] Ninguém? Então vocês estão no lugar certo."),
        ),
        phase(
            "Validação Emocional",
            "Criar conexão e confiança",
            "Minutos 3-7",
            &["História pessoal", "Vulnerabilidade controlada", "Espelhamento de dores"],
            format!("Eu também já trabalhei 14 horas por dia no {segment} achando que esforço era sinônimo de resultado."),
        ),
        phase(
            "Amplificação do Problema",
            "Intensificar consciência da dor",
            "Minutos 8-15",
            &["Custo da inação", "Comparação social", "Projeção futura"],
            format!("Enquanto vocês hesitam, outros no {segment} estão construindo impérios."),
        ),
        phase(
            "Vislumbre da Solução",
            "Plantar esperança e possibilidade",
            "Minutos 16-25",
            &["Casos de sucesso", "Demonstração", "Prova de conceito"],
            format!("Deixe-me mostrar como Maria transformou seu negócio de {segment} em 90 dias."),
        ),
        phase(
            "Autoridade e Credibilidade",
            "Estabelecer posição de especialista",
            "Minutos 26-35",
            &["Resultados próprios", "Reconhecimento externo", "Metodologia única"],
            format!("Nos últimos 5 anos, ajudei 847 profissionais a dominarem o {segment}."),
        ),
        phase(
            "Urgência Genuína",
            "Criar pressão temporal real",
            "Minutos 36-40",
            &["Oportunidade limitada", "Custo crescente", "Timing de mercado"],
            format!("O mercado de {segment} está mudando. Quem não se adaptar agora, vai ficar para trás."),
        ),
    ];

    PrePitchSystem {
        emotional_orchestration: EmotionalOrchestration {
            psychological_sequence,
        },
        value_anchoring: text_map(&[
            ("valor_percebido", format!("Como fazer a audiência perceber o valor real da transformação no {segment}")),
            ("comparacao_custos", format!("Como contrastar custo da solução vs custo da inação no {segment}")),
            ("roi_demonstrado", format!("Como provar ROI através de casos reais no {segment}")),
            ("investimento_vs_gasto", format!("Como reposicionar preço como investimento no {segment}")),
        ]),
        decision_triggers: text_map(&[
            ("escassez_real", format!("Como criar escassez genuína para {segment}")),
            ("prova_social_massiva", format!("Como usar depoimentos específicos do {segment}")),
            ("autoridade_emprestada", format!("Como usar credibilidade de terceiros no {segment}")),
            ("reciprocidade_ativada", format!("Como gerar obrigação moral no {segment}")),
        ]),
    }
}

/// Métricas de eficácia dos drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessMetrics {
    #[serde(rename = "metricas_engajamento")]
    pub engagement: TextMap,
    #[serde(rename = "metricas_conversao")]
    pub conversion: TextMap,
    #[serde(rename = "metricas_qualitativas")]
    pub qualitative: TextMap,
    #[serde(rename = "benchmarks_industria")]
    pub industry_benchmarks: TextMap,
}

pub fn effectiveness_metrics() -> EffectivenessMetrics {
    EffectivenessMetrics {
        engagement: text_map(&[
            ("atencao_sustentada", "Tempo médio de atenção durante ativação do driver"),
            ("interacao_verbal", "Número de perguntas/comentários após driver"),
            ("linguagem_corporal", "Mudanças posturais e expressões faciais"),
            ("participacao_ativa", "Nível de participação em exercícios"),
        ]),
        conversion: text_map(&[
            ("taxa_permanencia", "% que fica até o final da apresentação"),
            ("taxa_interesse", "% que faz perguntas sobre a solução"),
            ("taxa_conversao", "% que se torna cliente"),
            ("valor_medio", "Ticket médio dos convertidos"),
        ]),
        qualitative: text_map(&[
            ("feedback_emocional", "Comentários sobre impacto emocional"),
            ("mudanca_perspectiva", "Relatos de mudança de visão"),
            ("urgencia_percebida", "Nível de urgência demonstrado"),
            ("confianca_gerada", "Grau de confiança estabelecido"),
        ]),
        industry_benchmarks: text_map(&[
            ("driver_mais_eficaz", "Diagnóstico Brutal (94% de engajamento)"),
            ("sequencia_otima", "Diagnóstico → Ambição → Relógio → Método"),
            ("timing_ideal", "3-5 minutos por driver com reforço a cada 15 minutos"),
            ("audiencia_ideal", "25-50 pessoas para máximo impacto"),
        ]),
    }
}

/// Casos de uso práticos por canal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticalUseCases {
    #[serde(rename = "webinar_vendas")]
    pub sales_webinar: TextMap,
    #[serde(rename = "live_aquecimento")]
    pub warmup_live: TextMap,
    #[serde(rename = "sequencia_emails")]
    pub email_sequence: TextMap,
    #[serde(rename = "vendas_individuais")]
    pub one_on_one_sales: TextMap,
}

pub fn practical_use_cases(segment: &str) -> PracticalUseCases {
    PracticalUseCases {
        sales_webinar: text_map(&[
            ("estrutura", "Como usar drivers em webinar de 90 minutos"),
            ("timing", "Quando ativar cada driver durante o webinar"),
            ("transicoes", "Como conectar drivers de forma fluida"),
            ("fechamento", "Como usar drivers no momento da oferta"),
        ]),
        warmup_live: text_map(&[
            ("abertura", format!("Como usar Diagnóstico Brutal para abrir live sobre {segment}")),
            ("desenvolvimento", format!("Como desenvolver Ambição Expandida durante live de {segment}")),
            ("engajamento", format!("Como usar drivers para manter audiência engajada no {segment}")),
            ("direcionamento", format!("Como direcionar para próxima ação no {segment}")),
        ]),
        email_sequence: text_map(&[
            ("email_1", format!("Como usar Ferida Exposta no primeiro e-mail sobre {segment}")),
            ("email_2", format!("Como desenvolver Custo Invisível no segundo e-mail sobre {segment}")),
            ("email_3", format!("Como ativar Relógio Psicológico no terceiro e-mail sobre {segment}")),
            ("email_4", format!("Como usar Decisão Binária no e-mail de fechamento sobre {segment}")),
        ]),
        one_on_one_sales: text_map(&[
            ("descoberta", format!("Como usar drivers durante descoberta de necessidades no {segment}")),
            ("apresentacao", format!("Como incorporar drivers na apresentação da solução para {segment}")),
            ("objecoes", format!("Como usar drivers para superar objeções no {segment}")),
            ("fechamento", format!("Como usar drivers no fechamento de vendas individuais no {segment}")),
        ]),
    }
}

/// Sintomas, causas e soluções de um problema comum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    #[serde(rename = "sintomas")]
    pub symptoms: Vec<String>,
    #[serde(rename = "causas")]
    pub causes: Vec<String>,
    #[serde(rename = "solucoes")]
    pub solutions: Vec<String>,
}

impl Diagnosis {
    fn new(symptoms: &[&str], causes: &[&str], solutions: &[&str]) -> Self {
        Self {
            symptoms: to_strings(symptoms),
            causes: to_strings(causes),
            solutions: to_strings(solutions),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonProblems {
    #[serde(rename = "audiencia_resistente")]
    pub resistant_audience: Diagnosis,
    #[serde(rename = "drivers_nao_funcionam")]
    pub drivers_not_working: Diagnosis,
    #[serde(rename = "conversao_baixa")]
    pub low_conversion: Diagnosis,
}

/// Guia de solução de problemas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TroubleshootingGuide {
    #[serde(rename = "problemas_comuns")]
    pub common_problems: CommonProblems,
    #[serde(rename = "ajustes_tempo_real")]
    pub realtime_adjustments: TextMap,
    #[serde(rename = "otimizacao_continua")]
    pub continuous_optimization: TextMap,
}

pub fn troubleshooting_guide() -> TroubleshootingGuide {
    TroubleshootingGuide {
        common_problems: CommonProblems {
            resistant_audience: Diagnosis::new(
                &["Braços cruzados", "Expressões céticas", "Conversas paralelas"],
                &["Overselling anterior", "Desconfiança", "Saturação de promessas"],
                &["Começar com vulnerabilidade", "Usar dados, não promessas", "Validar ceticismo"],
            ),
            drivers_not_working: Diagnosis::new(
                &["Falta de reação", "Dispersão", "Desinteresse"],
                &["Avatar mal definido", "Timing incorreto", "Intensidade inadequada"],
                &["Revisar avatar", "Ajustar sequência", "Aumentar intensidade gradualmente"],
            ),
            low_conversion: Diagnosis::new(
                &["Alto engajamento, baixa conversão", "Interesse sem ação"],
                &["Falta de urgência", "Preço mal ancorado", "Oferta confusa"],
                &["Intensificar Relógio Psicológico", "Melhorar ancoragem de valor", "Simplificar oferta"],
            ),
        },
        realtime_adjustments: text_map(&[
            ("leitura_audiencia", "Como identificar sinais de engajamento/resistência"),
            ("modificacao_drivers", "Como ajustar drivers baseado na reação"),
            ("escalation", "Quando e como intensificar drivers"),
            ("backup_plans", "Drivers alternativos para situações específicas"),
        ]),
        continuous_optimization: text_map(&[
            ("teste_ab", "Como testar diferentes versões dos drivers"),
            ("feedback_loop", "Como coletar e usar feedback para melhorar"),
            ("personalizacao", "Como adaptar drivers para diferentes segmentos"),
            ("evolucao", "Como evoluir drivers baseado em resultados"),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_pitch_six_phases() {
        let system = pre_pitch_system("nutrição");
        let phases = &system.emotional_orchestration.psychological_sequence;
        assert_eq!(phases.len(), 6);
        assert_eq!(phases[0].phase, "Quebra de Padrão");
        assert_eq!(phases[5].time, "Minutos 36-40");
        assert!(phases.iter().all(|p| p.example.contains("nutrição")));
        assert_eq!(system.value_anchoring.len(), 4);
        assert!(system.decision_triggers["escassez_real"].ends_with("para nutrição"));
    }

    #[test]
    fn test_fixed_guides() {
        let metrics = effectiveness_metrics();
        assert_eq!(
            metrics.industry_benchmarks["driver_mais_eficaz"],
            "Diagnóstico Brutal (94% de engajamento)"
        );

        let guide = serde_json::to_value(troubleshooting_guide()).unwrap();
        assert_eq!(
            guide["problemas_comuns"]["conversao_baixa"]["solucoes"][0],
            "Intensificar Relógio Psicológico"
        );
    }

    #[test]
    fn test_use_cases_segment() {
        let cases = practical_use_cases("yoga");
        assert_eq!(
            cases.email_sequence["email_4"],
            "Como usar Decisão Binária no e-mail de fechamento sobre yoga"
        );
        assert!(!cases.sales_webinar["estrutura"].contains("yoga"));
    }
}
