// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FASE 5: BLOCOS DE CONSOLIDAÇÃO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Blocos fixos anexados a todo relatório, independentes do caminho da
// análise.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::Serialize;

use crate::types::{format_amount, text_map, to_strings, BusinessProfile, TextMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenOpportunity {
    pub nome: String,
    pub potencial: String,
    pub timeline: String,
    pub investimento: String,
    pub roi_esperado: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PotentialThreat {
    pub nome: String,
    pub probabilidade: f64,
    pub impacto: String,
    pub timeline: String,
    pub mitigacao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitoringSystem {
    pub metricas_diarias: Vec<String>,
    pub metricas_semanais: Vec<String>,
    pub metricas_mensais: Vec<String>,
    pub alertas_automaticos: String,
}

/// Projeção de retorno em múltiplos do preço
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiAnalysis {
    pub investimento_inicial: String,
    pub retorno_12_meses: String,
    pub roi_percentual: String,
    pub payback_period: String,
    pub valor_presente_liquido: String,
}

/// Âncora (3x), preço cheio e desconto (80%)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingStrategy {
    pub preco_ancora: String,
    pub preco_principal: String,
    pub preco_desconto: String,
    pub justificativa_valor: String,
}

pub fn competitive_intelligence() -> TextMap {
    text_map(&[
        ("mapeamento_completo", "Análise de 50+ concorrentes diretos e indiretos"),
        ("vulnerabilidades_identificadas", "12 pontos fracos específicos da concorrência"),
        ("oportunidades_ataque", "8 estratégias para superar concorrentes principais"),
        ("timing_otimo", "Janelas de oportunidade identificadas para cada concorrente"),
    ])
}

pub fn hidden_opportunities(profile: &BusinessProfile) -> Vec<HiddenOpportunity> {
    vec![HiddenOpportunity {
        nome: format!("Automação Inteligente {}", profile.segment_or_title()),
        potencial: "R$ 500M - R$ 2B".into(),
        timeline: "6-18 meses".into(),
        investimento: "R$ 100K - R$ 500K".into(),
        roi_esperado: "400-800%".into(),
    }]
}

pub fn potential_threats(profile: &BusinessProfile) -> Vec<PotentialThreat> {
    vec![PotentialThreat {
        nome: "Disrupção por IA".into(),
        probabilidade: 0.75,
        impacto: "Alto".into(),
        timeline: "12-36 meses".into(),
        mitigacao: format!("Integrar IA nos processos de {}", profile.segment_or_title()),
    }]
}

pub fn dominance_roadmap(profile: &BusinessProfile) -> TextMap {
    let seg = profile.segment_or_title();
    text_map(&[
        ("fase_1_estabelecimento", format!("Estabelecer presença sólida no {seg} (6 meses)")),
        ("fase_2_crescimento", format!("Crescer market share no {seg} (12 meses)")),
        ("fase_3_lideranca", format!("Assumir liderança no {seg} (24 meses)")),
        ("fase_4_dominancia", format!("Dominar categoria específica do {seg} (36 meses)")),
    ])
}

pub fn monitoring_system() -> MonitoringSystem {
    MonitoringSystem {
        metricas_diarias: to_strings(&["Leads gerados", "Conversões", "Receita"]),
        metricas_semanais: to_strings(&["CAC", "LTV", "Churn rate"]),
        metricas_mensais: to_strings(&["Market share", "NPS", "ROI"]),
        alertas_automaticos: "Sistema de alertas para desvios críticos".into(),
    }
}

pub fn contingency_plan() -> TextMap {
    text_map(&[
        ("cenario_recessao", "Estratégias para mercado em recessão"),
        ("cenario_disrupcao", "Plano para disrupção tecnológica"),
        ("cenario_regulatorio", "Resposta a mudanças regulatórias"),
        ("cenario_competitivo", "Reação a ataques competitivos"),
    ])
}

pub fn roi_analysis(profile: &BusinessProfile) -> RoiAnalysis {
    let price = profile.price_amount();
    RoiAnalysis {
        investimento_inicial: format!("R$ {}", format_amount(price * 50.0)),
        retorno_12_meses: format!("R$ {}", format_amount(price * 200.0)),
        roi_percentual: "300-500%".into(),
        payback_period: "3-4 meses".into(),
        valor_presente_liquido: format!("R$ {}", format_amount(price * 150.0)),
    }
}

pub fn weekly_schedule() -> TextMap {
    text_map(&[
        ("semana_1", "Auditoria e diagnóstico inicial"),
        ("semana_2", "Definição de estratégia e posicionamento"),
        ("semana_3", "Desenvolvimento de avatar e mensagens"),
        ("semana_4", "Estruturação de funil de vendas"),
    ])
}

pub fn sales_scripts(profile: &BusinessProfile) -> TextMap {
    let seg = profile.segment_or_title();
    text_map(&[
        ("abertura", format!("Como você se sente sobre seus resultados atuais no {seg}?")),
        ("desenvolvimento", format!("Deixe-me mostrar como outros profissionais de {seg} transformaram seus negócios")),
        ("fechamento", format!("Você está pronto para dominar o mercado de {seg}?")),
    ])
}

pub fn pricing_strategy(profile: &BusinessProfile) -> PricingStrategy {
    let price = profile.price_amount();
    PricingStrategy {
        preco_ancora: format!("R$ {}", format_amount(price * 3.0)),
        preco_principal: format!("R$ {}", format_amount(price)),
        preco_desconto: format!("R$ {}", format_amount(price * 0.8)),
        justificativa_valor: "Baseado no ROI de 400% em 12 meses".into(),
    }
}

pub fn conversion_funnel() -> TextMap {
    text_map(&[
        ("topo_funil", "Conteúdo educativo e atração"),
        ("meio_funil", "Nutrição e qualificação de leads"),
        ("fundo_funil", "Conversão e fechamento"),
        ("pos_venda", "Onboarding e sucesso do cliente"),
    ])
}

pub fn loyalty_system() -> TextMap {
    text_map(&[
        ("programa_pontos", "Sistema de pontuação por engajamento"),
        ("beneficios_exclusivos", "Acesso a conteúdos e eventos VIP"),
        ("comunidade_privada", "Grupo exclusivo de clientes"),
        ("suporte_prioritario", "Atendimento diferenciado"),
    ])
}

pub fn geographic_expansion() -> TextMap {
    text_map(&[
        ("fase_1_regional", "Expansão para estados vizinhos"),
        ("fase_2_nacional", "Cobertura nacional completa"),
        ("fase_3_internacional", "Expansão para América Latina"),
        ("criterios_expansao", "População, PIB, concorrência, regulamentação"),
    ])
}

pub fn succession_plan() -> TextMap {
    text_map(&[
        ("preparacao_equipe", "Desenvolvimento de lideranças internas"),
        ("documentacao_processos", "Sistematização completa"),
        ("valuation_empresa", "Avaliação para venda futura"),
        ("estrategia_saida", "Opções de exit strategy"),
    ])
}

/// Os 12 insights que fecham o relatório
pub fn final_insights(profile: &BusinessProfile) -> Vec<String> {
    let seg = profile.segment_or_title();
    vec![
        format!("🔮 PREDIÇÃO EXCLUSIVA: O mercado de {seg} vai se dividir em 3 categorias distintas até 2026"),
        format!("💎 INSIGHT ÚNICO: 94% dos profissionais de sucesso no {seg} usam exatamente 7 drivers mentais específicos"),
        format!("🚀 OPORTUNIDADE OCULTA: Existe uma janela de 18 meses para dominar categoria emergente no {seg}"),
        format!("⚡ VANTAGEM COMPETITIVA: Quem implementar IA primeiro no {seg} terá 5 anos de vantagem"),
        format!("🎯 ESTRATÉGIA SECRETA: Combinação específica de 3 canais gera 340% mais resultados no {seg}"),
        format!("🔥 TIMING PERFEITO: Próximos 24 meses são janela única para crescimento exponencial no {seg}"),
        format!("💰 POTENCIAL OCULTO: Mercado adjacente ao {seg} tem potencial de R$ 800M não explorado"),
        format!("🧠 PSICOLOGIA REVELADA: Avatar do {seg} tem 12 gatilhos emocionais específicos não mapeados"),
        format!("📈 CRESCIMENTO GARANTIDO: Fórmula específica garante crescimento de 300% em 12 meses no {seg}"),
        format!("🎪 DIFERENCIAÇÃO TOTAL: Estratégia de oceano azul específica para dominar {seg} sem concorrência"),
        format!("🔐 SEGREDO REVELADO: 89% dos fracassos no {seg} acontecem por ignorar 1 fator específico"),
        format!("⭐ INSIGHT FINAL: Quem dominar os 19 drivers mentais customizados vai liderar o {seg} por décadas"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_multiples_with_default_price() {
        let profile = BusinessProfile::default();

        let roi = roi_analysis(&profile);
        assert_eq!(roi.investimento_inicial, "R$ 49850");
        assert_eq!(roi.retorno_12_meses, "R$ 199400");
        assert_eq!(roi.valor_presente_liquido, "R$ 149550");

        let pricing = pricing_strategy(&profile);
        assert_eq!(pricing.preco_ancora, "R$ 2991");
        assert_eq!(pricing.preco_principal, "R$ 997");
        assert_eq!(pricing.preco_desconto, "R$ 798");
    }

    #[test]
    fn test_empty_price_string_uses_default() {
        let mut profile = BusinessProfile::with_segment("moda");
        profile.price = Some(String::new());
        assert_eq!(pricing_strategy(&profile).preco_principal, "R$ 997");
    }

    #[test]
    fn test_segment_in_texts() {
        let profile = BusinessProfile::with_segment("moda");
        assert_eq!(hidden_opportunities(&profile)[0].nome, "Automação Inteligente moda");
        assert_eq!(potential_threats(&profile)[0].mitigacao, "Integrar IA nos processos de moda");
        assert_eq!(
            sales_scripts(&profile)["fechamento"],
            "Você está pronto para dominar o mercado de moda?"
        );
        assert_eq!(dominance_roadmap(&profile).len(), 4);
    }

    #[test]
    fn test_final_insights() {
        let insights = final_insights(&BusinessProfile::default());
        assert_eq!(insights.len(), 12);
        assert!(insights[0].starts_with("🔮"));
        assert!(insights[11].starts_with("⭐"));
        assert!(insights.iter().all(|i| i.contains("Negócios")));
    }

    #[test]
    fn test_fixed_blocks() {
        assert_eq!(competitive_intelligence().len(), 4);
        assert_eq!(contingency_plan().len(), 4);
        assert_eq!(weekly_schedule()["semana_1"], "Auditoria e diagnóstico inicial");
        assert_eq!(conversion_funnel().len(), 4);
        assert_eq!(loyalty_system().len(), 4);
        assert_eq!(geographic_expansion().len(), 4);
        assert_eq!(succession_plan().len(), 4);
        assert_eq!(monitoring_system().metricas_semanais, vec!["CAC", "LTV", "Churn rate"]);
    }
}
