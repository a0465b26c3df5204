// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CUSTOMIZAÇÃO DE DRIVERS PARA O AVATAR
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Cada campo gerado é despachado por `DriverId`. Drivers sem texto dedicado
// recebem a versão genérica, sempre com o segmento interpolado.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};

use super::catalog::{DriverCategory, DriverId};
use crate::types::{format_amount, BusinessProfile};

/// Roteiro de ativação em quatro tempos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivationScript {
    #[serde(rename = "pergunta_abertura")]
    pub opening_question: String,
    #[serde(rename = "historia_analogia")]
    pub analogy_story: String,
    #[serde(rename = "metafora_visual")]
    pub visual_metaphor: String,
    #[serde(rename = "comando_acao")]
    pub action_command: String,
}

/// Prova lógica que sustenta o driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalProof {
    #[serde(rename = "estatistica")]
    pub statistic: String,
    #[serde(rename = "caso_exemplo")]
    pub example_case: String,
    #[serde(rename = "demonstracao")]
    pub demonstration: String,
}

/// Onde e como aplicar o driver ao longo do lançamento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticalImplementation {
    #[serde(rename = "live_aquecimento")]
    pub warmup_live: String,
    #[serde(rename = "cpl_1")]
    pub content_piece_1: String,
    #[serde(rename = "cpl_2")]
    pub content_piece_2: String,
    #[serde(rename = "cpl_3")]
    pub content_piece_3: String,
    #[serde(rename = "webinar_vendas")]
    pub sales_webinar: String,
    #[serde(rename = "follow_up")]
    pub follow_up: String,
    #[serde(rename = "objecoes")]
    pub objections: String,
    #[serde(rename = "fechamento")]
    pub closing: String,
}

/// Driver do catálogo preenchido com os dados do avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizedDriver {
    pub id: DriverId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: DriverCategory,
    #[serde(rename = "gatilho_central")]
    pub core_trigger: String,
    #[serde(rename = "mecanica_psicologica")]
    pub mechanism: String,
    #[serde(rename = "momento_ideal")]
    pub ideal_moment: String,
    #[serde(rename = "poder_impacto")]
    pub impact_score: f32,
    #[serde(rename = "definicao_visceral")]
    pub visceral_definition: String,
    #[serde(rename = "roteiro_ativacao")]
    pub activation_script: ActivationScript,
    #[serde(rename = "frases_ancoragem")]
    pub anchoring_phrases: Vec<String>,
    #[serde(rename = "prova_logica")]
    pub logical_proof: LogicalProof,
    #[serde(rename = "loop_reforco")]
    pub reinforcement_loop: String,
    #[serde(rename = "implementacao_pratica")]
    pub practical_implementation: PracticalImplementation,
}

/// Customiza cada driver selecionado para o avatar.
///
/// Preserva a ordem de entrada. Nunca falha: dados ausentes no perfil viram
/// os textos padrão.
pub fn customize(selected: &[DriverId], avatar: &BusinessProfile) -> Vec<CustomizedDriver> {
    let segment = avatar.segment_or_default();
    let price = avatar.price_amount();

    selected
        .iter()
        .map(|&id| {
            let template = id.template();
            CustomizedDriver {
                id,
                name: template.name.to_string(),
                category: template.category,
                core_trigger: template.core_trigger.to_string(),
                mechanism: template.mechanism.to_string(),
                ideal_moment: template.ideal_moment.to_string(),
                impact_score: template.impact_score,
                visceral_definition: visceral_definition(id, segment),
                activation_script: activation_script(id, segment),
                anchoring_phrases: anchoring_phrases(id, segment),
                logical_proof: logical_proof(id, segment, price),
                reinforcement_loop: reinforcement_loop(id, segment),
                practical_implementation: practical_implementation(segment),
            }
        })
        .collect()
}

/// Definição visceral do driver
pub fn visceral_definition(id: DriverId, segment: &str) -> String {
    match id {
        DriverId::DiagnosticoBrutal => format!(
            "O momento devastador quando você percebe que está trabalhando como escravo no próprio negócio de {segment}, gerando resultados medíocres enquanto vê outros com menos experiência alcançando o que você sempre sonhou."
        ),
        DriverId::AmbicaoExpandida => format!(
            "A revelação de que você está subestimando drasticamente seu potencial no mercado de {segment}, pedindo migalhas quando poderia estar dominando territórios inteiros."
        ),
        DriverId::RelogioPsicologico => format!(
            "A consciência aterrorizante de que cada dia perdido em estratégias fracas no {segment} é um dia a menos para construir o império que você merece."
        ),
        DriverId::CustoInvisivel => format!(
            "A hemorragia silenciosa de oportunidades, dinheiro e tempo que vaza do seu negócio de {segment} enquanto você mantém processos obsoletos e mentalidade pequena."
        ),
        DriverId::AmbienteVampiro => format!(
            "O reconhecimento doloroso de que seu ambiente atual no {segment} está sugando sua energia, criatividade e ambição, mantendo você preso em um ciclo de mediocridade."
        ),
        DriverId::MetodoVsSorte => format!(
            "A diferença brutal entre quem tem um sistema comprovado no {segment} e quem está tentando na sorte, cortando mato com facão enquanto outros voam de helicóptero."
        ),
        DriverId::CoragemNecessaria => format!(
            "O momento de verdade onde você precisa escolher entre a segurança falsa da zona de conforto no {segment} e a coragem de construir algo extraordinário."
        ),
        _ => format!("Driver customizado para {segment}"),
    }
}

/// Roteiro de ativação do driver
pub fn activation_script(id: DriverId, segment: &str) -> ActivationScript {
    let (opening_question, analogy_story, visual_metaphor, action_command) = match id {
        DriverId::DiagnosticoBrutal => (
            format!("Você está satisfeito com seus resultados atuais no {segment}? Olhe seus números dos últimos 6 meses. Isso é tudo que você consegue produzir?"),
            format!("É como um piloto de Fórmula 1 dirigindo um Fusca 1970. Você tem o talento, a experiência, o conhecimento do mercado de {segment}, mas está usando ferramentas e estratégias de 20 anos atrás. Enquanto isso, novatos com sistemas modernos estão te ultrapassando na curva."),
            format!("Imagine um painel de controle onde cada métrica do seu negócio de {segment} pisca verde. Onde cada processo funciona como um relógio suíço. Onde você acorda sabendo exatamente quanto vai faturar este mês."),
            format!("Pare de aceitar migalhas no {segment}. Comece a construir o sistema que você merece ter."),
        ),
        DriverId::AmbicaoExpandida => (
            format!("Se você pudesse multiplicar seus resultados no {segment} por 10 com o mesmo esforço, você faria? Então por que está se contentando com tão pouco?"),
            format!("É como pedir um copo d'água quando você está na frente de uma cachoeira. O mercado de {segment} tem potencial infinito, mas você está operando com mentalidade de escassez, limitando artificialmente suas possibilidades."),
            format!("Visualize seu nome sendo anunciado como a maior autoridade em {segment} do país. Imagine palestrando para milhares, sendo procurado pela mídia, tendo uma fila de clientes esperando para trabalhar com você."),
            format!("Expanda sua visão. Se o esforço é o mesmo, por que não dominar todo o mercado de {segment}?"),
        ),
        DriverId::RelogioPsicologico => (
            format!("Quantos anos você ainda vai desperdiçar tentando crescer no {segment} sem um sistema que funciona?"),
            format!("É como plantar uma árvore. O melhor momento foi há 20 anos. O segundo melhor momento é agora. Cada dia que você adia implementar um sistema real no {segment} é um dia a menos para colher os frutos da árvore que você poderia ter plantado."),
            format!("Imagine olhar para trás daqui a 5 anos e perceber que você poderia ter construído um império no {segment}, mas perdeu tempo com estratégias fracas e mentalidade pequena."),
            format!("O tempo não volta. Comece hoje a construir o futuro que você quer no {segment}."),
        ),
        _ => (
            format!("Como você se sente sobre sua situação atual no {segment}?"),
            format!("É como navegar sem bússola no mercado de {segment}."),
            format!("Imagine ter total controle sobre seu negócio de {segment}."),
            format!("Tome uma decisão que mude sua trajetória no {segment}."),
        ),
    };

    ActivationScript {
        opening_question,
        analogy_story,
        visual_metaphor,
        action_command,
    }
}

/// Frases de ancoragem do driver
pub fn anchoring_phrases(id: DriverId, segment: &str) -> Vec<String> {
    match id {
        DriverId::DiagnosticoBrutal => vec![
            format!("Mediocridade no {segment} é uma escolha, não um destino"),
            format!("Seus resultados atuais no {segment} são o reflexo das suas estratégias fracas"),
            format!("Enquanto você aceita migalhas, outros dominam o mercado de {segment}"),
            format!("Talento sem sistema no {segment} é desperdício de potencial"),
            format!("Você não está preso aos seus resultados atuais no {segment}"),
        ],
        DriverId::AmbicaoExpandida => vec![
            format!("Se você vai sonhar com {segment}, sonhe grande ou vá para casa"),
            format!("Pequenos planos no {segment} não inflamam o sangue dos homens"),
            format!("Você nasceu para dominar o {segment}, não para sobreviver nele"),
            format!("Mediocridade é o maior insulto ao seu potencial no {segment}"),
            format!("O mercado de {segment} está esperando por um líder. Por que não você?"),
        ],
        DriverId::RelogioPsicologico => vec![
            format!("Cada dia sem sistema no {segment} é dinheiro jogado fora"),
            format!("O tempo perdido no {segment} nunca volta, mas o futuro ainda pode ser construído"),
            format!("Procrastinação no {segment} é o assassino silencioso dos sonhos"),
            format!("Enquanto você hesita no {segment}, oportunidades viram pesadelos"),
            format!("O melhor momento para dominar o {segment} foi ontem. O segundo melhor é agora"),
        ],
        _ => vec![
            format!("Transforme sua realidade no {segment}"),
            format!("O poder está em suas mãos no {segment}"),
            format!("Decida ser extraordinário no {segment}"),
        ],
    }
}

/// Prova lógica do driver; o preço entra no custo do atraso
pub fn logical_proof(id: DriverId, segment: &str, price: f64) -> LogicalProof {
    let (statistic, example_case, demonstration) = match id {
        DriverId::DiagnosticoBrutal => (
            format!("87% dos profissionais de {segment} trabalham mais de 60 horas por semana mas faturam menos que deveriam"),
            format!("João tinha 15 anos de experiência em {segment} mas faturava R$ 8.000/mês. Após implementar um sistema, chegou a R$ 45.000/mês em 8 meses"),
            format!("Compare seus resultados dos últimos 12 meses no {segment} com o potencial real do seu mercado"),
        ),
        DriverId::AmbicaoExpandida => (
            format!("O mercado brasileiro de {segment} movimenta R$ 2,3 bilhões anuais, mas 95% dos profissionais capturam menos de 0,01% desse valor"),
            format!("Maria expandiu sua visão no {segment} de R$ 5.000/mês para R$ 50.000/mês simplesmente mudando sua estratégia de precificação"),
            format!("Calcule: se você atendesse apenas 1% do seu mercado potencial em {segment}, quanto faturaria?"),
        ),
        DriverId::RelogioPsicologico => (
            format!("Profissionais que implementam sistemas no {segment} recuperam o investimento em média 3,2 meses"),
            format!("Carlos perdeu 2 anos tentando crescer sozinho no {segment}. Com mentoria, alcançou em 6 meses o que não conseguiu em 24"),
            format!(
                "Cada mês de atraso no {segment} custa em média R$ {} em oportunidades perdidas",
                format_amount(price * 3.0)
            ),
        ),
        _ => (
            format!("Dados comprovam eficácia no {segment}"),
            format!("Casos reais de sucesso no {segment}"),
            format!("Resultados mensuráveis no {segment}"),
        ),
    };

    LogicalProof {
        statistic,
        example_case,
        demonstration,
    }
}

/// Loop de reforço do driver
pub fn reinforcement_loop(id: DriverId, segment: &str) -> String {
    match id {
        DriverId::DiagnosticoBrutal => format!("Toda vez que você olhar seus resultados no {segment}, lembre: 'Isso é reflexo das minhas estratégias fracas, não do meu potencial'"),
        DriverId::AmbicaoExpandida => format!("Sempre que alguém perguntar sobre seus planos no {segment}, responda com sua visão expandida, não com sua realidade atual"),
        DriverId::RelogioPsicologico => format!("A cada decisão adiada no {segment}, calcule: 'Quanto isso está me custando em oportunidades perdidas?'"),
        DriverId::CustoInvisivel => format!("Quando ver um processo manual no seu negócio de {segment}, pense: 'Quanto dinheiro está vazando aqui?'"),
        DriverId::MetodoVsSorte => format!("Antes de qualquer ação no {segment}, pergunte: 'Isso é baseado em método comprovado ou estou tentando na sorte?'"),
        _ => format!("Reforce constantemente a importância da transformação no {segment}"),
    }
}

/// Guia de implementação prática (igual para todos os drivers)
pub fn practical_implementation(segment: &str) -> PracticalImplementation {
    PracticalImplementation {
        warmup_live: format!("Como introduzir o driver durante live de aquecimento para {segment}"),
        content_piece_1: format!("Como desenvolver o driver na primeira aula/conteúdo sobre {segment}"),
        content_piece_2: format!("Como aprofundar o driver na segunda aula/conteúdo sobre {segment}"),
        content_piece_3: format!("Como cristalizar o driver na terceira aula/conteúdo sobre {segment}"),
        sales_webinar: format!("Como usar o driver durante webinar de vendas para {segment}"),
        follow_up: format!("Como reativar o driver em e-mails de follow-up sobre {segment}"),
        objections: format!("Como usar o driver para superar objeções específicas do {segment}"),
        closing: format!("Como usar o driver no fechamento de vendas para {segment}"),
    }
}
