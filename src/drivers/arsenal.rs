// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ARSENAL DE EMERGÊNCIA E SISTEMA ANTI-OBJEÇÃO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};

use crate::types::format_amount;

/// Frases prontas para situações críticas durante a apresentação
pub fn emergency_arsenal(segment: &str) -> Vec<String> {
    vec![
        format!("Se a audiência está dispersa: 'Quem aqui está satisfeito com seus resultados no {segment}? Ninguém? Então me deem 5 minutos.'"),
        format!("Se há resistência: 'Eu sei que vocês já ouviram promessas sobre {segment}. Eu também já fui enganado. Por isso vou mostrar dados, não promessas.'"),
        format!("Se questionam credibilidade: 'Vocês não precisam acreditar em mim. Acreditem nos números e nos resultados que vou mostrar sobre {segment}.'"),
        format!("Se há objeções de preço: 'O caro não é investir em {segment}. O caro é continuar perdendo dinheiro com estratégias fracas.'"),
        format!("Se há objeções de tempo: 'Vocês não têm tempo para implementar, mas têm tempo para continuar frustrados no {segment}?'"),
        format!("Se questionam se funciona: 'Não funciona para quem não implementa. Para quem implementa no {segment}, os resultados são inevitáveis.'"),
        format!("Se há comparação com concorrentes: 'A diferença não está no que ensinamos sobre {segment}, mas em como garantimos que vocês implementem.'"),
        format!("Se há dúvidas sobre timing: 'O melhor momento para plantar uma árvore no {segment} foi há 10 anos. O segundo melhor momento é agora.'"),
        format!("Se questionam necessidade: 'Vocês podem continuar como estão no {segment}. A pergunta é: por quanto tempo mais?'"),
        format!("Se há medo de mudança: 'O maior risco no {segment} não é mudar. É ficar parado enquanto o mercado evolui.'"),
    ]
}

/// Contra-ataque para uma objeção universal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectionCounter {
    #[serde(rename = "objecao")]
    pub objection: String,
    #[serde(rename = "raiz_emocional")]
    pub emotional_root: String,
    #[serde(rename = "contra_ataque")]
    pub counter_attack: String,
    #[serde(rename = "prova_logica")]
    pub logical_proof: String,
    pub reframe: String,
}

/// As cinco objeções universais
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversalObjections {
    #[serde(rename = "preco_alto")]
    pub price_too_high: ObjectionCounter,
    #[serde(rename = "falta_tempo")]
    pub no_time: ObjectionCounter,
    #[serde(rename = "ja_tentei_antes")]
    pub tried_before: ObjectionCounter,
    #[serde(rename = "meu_nicho_diferente")]
    pub niche_is_different: ObjectionCounter,
    #[serde(rename = "preciso_pensar")]
    pub need_to_think: ObjectionCounter,
}

impl UniversalObjections {
    /// Objeções com o segmento interpolado
    pub fn for_segment(segment: &str) -> Self {
        Self {
            price_too_high: ObjectionCounter {
                objection: "Está muito caro".into(),
                emotional_root: "Medo de perder dinheiro / Desvalorização própria".into(),
                counter_attack: format!("O caro não é investir em {segment}. O caro é continuar perdendo R$ X por mês com estratégias fracas. Em 6 meses, você vai ter gastado mais tentando sozinho do que investindo na solução certa agora."),
                logical_proof: format!("Clientes que investiram recuperaram o valor em média em 3,2 meses no {segment}"),
                reframe: "Não é gasto, é investimento com ROI comprovado".into(),
            },
            no_time: ObjectionCounter {
                objection: "Não tenho tempo para implementar".into(),
                emotional_root: "Sobrecarga / Medo de mais trabalho".into(),
                counter_attack: format!("Você não tem tempo para implementar, mas tem tempo para continuar trabalhando 12 horas por dia no {segment} pelos próximos 5 anos? O sistema economiza 20 horas por semana depois de implementado."),
                logical_proof: format!("Implementação leva 30 dias, economia de tempo dura para sempre no {segment}"),
                reframe: "Não é sobre ter tempo, é sobre criar tempo".into(),
            },
            tried_before: ObjectionCounter {
                objection: "Já tentei várias coisas e não funcionou".into(),
                emotional_root: "Frustração acumulada / Descrença".into(),
                counter_attack: format!("Exato! Você tentou várias coisas no {segment} e não funcionou porque eram táticas isoladas, não um sistema completo. É como tentar construir uma casa comprando apenas tijolos, sem planta, sem fundação, sem arquiteto."),
                logical_proof: format!("92% das tentativas isoladas falham no {segment}. 87% dos sistemas completos funcionam"),
                reframe: "Suas tentativas anteriores foram investimento em aprendizado".into(),
            },
            niche_is_different: ObjectionCounter {
                objection: format!("Meu nicho em {segment} é muito específico"),
                emotional_root: "Medo de não se encaixar / Necessidade de ser especial".into(),
                counter_attack: format!("Perfeito! Nichos específicos no {segment} são onde estão as maiores oportunidades. Quanto mais específico, menos concorrência e maior margem. Você está na posição ideal."),
                logical_proof: format!("Nichos específicos no {segment} têm 340% mais lucratividade que mercados gerais"),
                reframe: "Especificidade é vantagem competitiva, não limitação".into(),
            },
            need_to_think: ObjectionCounter {
                objection: "Preciso pensar / conversar com esposa".into(),
                emotional_root: "Medo de decisão errada / Procrastinação".into(),
                counter_attack: format!("Entendo. Mas me responda: há quanto tempo você está 'pensando' em crescer no {segment}? 6 meses? 1 ano? 2 anos? Pensar sem agir é só uma forma sofisticada de procrastinar."),
                logical_proof: format!("Cada mês de 'pensamento' no {segment} custa R$ X em oportunidades perdidas"),
                reframe: "A melhor decisão é a que você toma com informação suficiente, não perfeita".into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedTechniques {
    #[serde(rename = "inversao_objecao")]
    pub objection_inversion: String,
    #[serde(rename = "validacao_emocional")]
    pub emotional_validation: String,
    #[serde(rename = "prova_social_direcionada")]
    pub targeted_social_proof: String,
    #[serde(rename = "urgencia_genuina")]
    pub genuine_urgency: String,
}

impl Default for AdvancedTechniques {
    fn default() -> Self {
        Self {
            objection_inversion: "Como transformar objeção em razão para comprar".into(),
            emotional_validation: "Como validar a emoção por trás da objeção".into(),
            targeted_social_proof: "Como usar casos específicos para cada objeção".into(),
            genuine_urgency: "Como criar urgência real, não artificial".into(),
        }
    }
}

/// Scripts de fechamento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosingScripts {
    #[serde(rename = "fechamento_direto")]
    pub direct: String,
    #[serde(rename = "fechamento_assumptivo")]
    pub assumptive: String,
    #[serde(rename = "fechamento_escassez")]
    pub scarcity: String,
    #[serde(rename = "fechamento_urgencia")]
    pub urgency: String,
    #[serde(rename = "fechamento_valor")]
    pub value: String,
}

/// Scripts de fechamento com segmento e preço
pub fn closing_scripts(segment: &str, price: f64) -> ClosingScripts {
    let price = format_amount(price);
    ClosingScripts {
        direct: format!("Vocês têm duas opções no {segment}: continuar como estão pelos próximos 5 anos ou transformar tudo nos próximos 90 dias. O que escolhem?"),
        assumptive: format!("Quando vocês implementarem isso no {segment}, vão perceber que era mais simples do que imaginavam. A pergunta não é se funciona, é quando vocês querem começar."),
        scarcity: format!("Só posso trabalhar com 20 pessoas por vez no {segment}. Quem está pronto para ser uma delas?"),
        urgency: format!("O mercado de {segment} não vai esperar vocês se decidirem. Ou vocês agem agora ou assistem outros tomarem suas oportunidades."),
        value: format!("R$ {price} é o que vocês gastam em 3 meses tentando sozinhos no {segment}. Aqui vocês têm a solução completa e ainda sobra dinheiro."),
    }
}

/// Sistema anti-objeção completo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntiObjectionSystem {
    #[serde(rename = "objecoes_universais")]
    pub universal_objections: UniversalObjections,
    #[serde(rename = "arsenal_emergencia")]
    pub emergency_arsenal: Vec<String>,
    #[serde(rename = "tecnicas_avancadas")]
    pub advanced_techniques: AdvancedTechniques,
    #[serde(rename = "scripts_fechamento")]
    pub closing_scripts: ClosingScripts,
}

/// Monta o sistema anti-objeção
pub fn anti_objection_system(segment: &str, price: f64) -> AntiObjectionSystem {
    AntiObjectionSystem {
        universal_objections: UniversalObjections::for_segment(segment),
        emergency_arsenal: emergency_arsenal(segment),
        advanced_techniques: AdvancedTechniques::default(),
        closing_scripts: closing_scripts(segment, price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emergency_arsenal_has_ten_lines() {
        let arsenal = emergency_arsenal("estética");
        assert_eq!(arsenal.len(), 10);
        assert!(arsenal.iter().all(|line| line.contains("estética")));
    }

    #[test]
    fn test_closing_value_uses_price() {
        let scripts = closing_scripts("consultoria", 1497.0);
        assert!(scripts.value.starts_with("R$ 1497 é o que vocês gastam"));
    }

    #[test]
    fn test_anti_objection_keys() {
        let system = anti_objection_system("negócios", 997.0);
        let json = serde_json::to_value(&system).unwrap();

        let objections = json["objecoes_universais"].as_object().unwrap();
        assert_eq!(objections.len(), 5);
        for key in ["preco_alto", "falta_tempo", "ja_tentei_antes", "meu_nicho_diferente", "preciso_pensar"] {
            assert!(objections.contains_key(key), "faltando {}", key);
        }
        assert_eq!(json["scripts_fechamento"].as_object().unwrap().len(), 5);
        assert_eq!(json["arsenal_emergencia"].as_array().unwrap().len(), 10);
        assert_eq!(
            json["objecoes_universais"]["meu_nicho_diferente"]["objecao"],
            "Meu nicho em negócios é muito específico"
        );
    }
}
