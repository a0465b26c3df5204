// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TIPOS COMPARTILHADOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Segmento usado nos textos de drivers quando o perfil não informa nenhum
pub const DEFAULT_SEGMENT: &str = "negócios";

/// Segmento usado nos textos do relatório quando o perfil não informa nenhum
pub const DEFAULT_SEGMENT_TITLE: &str = "Negócios";

/// Preço assumido quando o perfil não informa um valor utilizável
pub const DEFAULT_PRICE: f64 = 997.0;

/// Perfil de negócio fornecido pelo chamador.
///
/// Nenhum campo é obrigatório. As chaves seguem o formato em português
/// (`segmento`, `produto`, `preco`...) e aceitam aliases em inglês
/// (`segment`, `product`, `price`...). Campos ausentes viram textos
/// genéricos na hora de preencher os templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// Segmento de mercado
    #[serde(rename = "segmento", alias = "segment", default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
    /// Produto ou serviço
    #[serde(rename = "produto", alias = "product", default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Preço (número ou texto)
    #[serde(
        rename = "preco",
        alias = "price",
        default,
        deserialize_with = "flexible_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,
    /// Público-alvo
    #[serde(rename = "publico", alias = "audience", default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// Concorrentes (texto livre ou lista)
    #[serde(
        rename = "concorrentes",
        alias = "competitors",
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub competitors: Option<String>,
    /// Dores do avatar
    #[serde(rename = "dores_viscerais", alias = "pains", default, skip_serializing_if = "Vec::is_empty")]
    pub pains: Vec<String>,
    /// Desejos do avatar
    #[serde(rename = "desejos_secretos", alias = "desires", default, skip_serializing_if = "Vec::is_empty")]
    pub desires: Vec<String>,
    /// Objeções do avatar
    #[serde(rename = "objecoes_reais", alias = "objections", default, skip_serializing_if = "Vec::is_empty")]
    pub objections: Vec<String>,
    /// Perfil psicográfico livre
    #[serde(
        rename = "perfil_psicografico",
        alias = "psych_profile",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub psych_profile: Option<serde_json::Value>,
    /// Meta de receita
    #[serde(
        rename = "objetivo_receita",
        alias = "revenue_goal",
        default,
        deserialize_with = "flexible_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub revenue_goal: Option<String>,
    /// Orçamento de marketing
    #[serde(
        rename = "orcamento_marketing",
        alias = "marketing_budget",
        default,
        deserialize_with = "flexible_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub marketing_budget: Option<String>,
    /// Prazo de lançamento
    #[serde(rename = "prazo_lancamento", alias = "launch_deadline", default, skip_serializing_if = "Option::is_none")]
    pub launch_deadline: Option<String>,
    /// Informações adicionais
    #[serde(rename = "dados_adicionais", alias = "additional_info", default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Consulta principal para a pesquisa web (sem ela a pesquisa não roda)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl BusinessProfile {
    /// Cria um perfil apenas com o segmento
    pub fn with_segment(segment: impl Into<String>) -> Self {
        Self {
            segment: Some(segment.into()),
            ..Default::default()
        }
    }

    /// Segmento informado (ignora textos em branco)
    pub fn segment(&self) -> Option<&str> {
        non_blank(self.segment.as_deref())
    }

    /// Segmento ou o padrão em minúsculas ("negócios")
    pub fn segment_or_default(&self) -> &str {
        self.segment().unwrap_or(DEFAULT_SEGMENT)
    }

    /// Segmento ou o padrão capitalizado ("Negócios")
    pub fn segment_or_title(&self) -> &str {
        self.segment().unwrap_or(DEFAULT_SEGMENT_TITLE)
    }

    /// Produto informado (ignora textos em branco)
    pub fn product(&self) -> Option<&str> {
        non_blank(self.product.as_deref())
    }

    /// Consulta de pesquisa informada (ignora textos em branco)
    pub fn query(&self) -> Option<&str> {
        non_blank(self.query.as_deref())
    }

    /// Preço numérico; vazio ou inválido resulta em [`DEFAULT_PRICE`]
    pub fn price_amount(&self) -> f64 {
        self.price
            .as_deref()
            .and_then(parse_amount)
            .unwrap_or(DEFAULT_PRICE)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Converte texto monetário em número.
///
/// Aceita "997", "997.50", "997,50" e "R$ 997".
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().trim_start_matches("R$").trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formata um valor monetário sem casas decimais
pub fn format_amount(value: f64) -> String {
    format!("{:.0}", value)
}

/// Bloco de texto chave → valor usado nos guias fixos do relatório
pub type TextMap = BTreeMap<String, String>;

/// Monta um [`TextMap`] a partir de pares
pub fn text_map<S: AsRef<str>>(pairs: &[(&str, S)]) -> TextMap {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.as_ref().to_string()))
        .collect()
}

/// Converte uma lista de `&str` em `Vec<String>`
pub fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Aceita número ou texto e guarda como texto
fn flexible_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Aceita texto ou lista de textos (unida por vírgula)
fn string_or_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Array(items)) => {
            let joined = items
                .iter()
                .filter_map(|item| item.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Some(joined)
        }
        _ => None,
    })
}

/// Resultado de busca devolvido pelo agregador
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Título da página
    #[serde(default)]
    pub title: String,
    /// URL do resultado
    #[serde(default)]
    pub url: String,
    /// Trecho/descrição
    #[serde(default)]
    pub snippet: String,
    /// Provedor que retornou o resultado
    #[serde(default)]
    pub source: String,
}

impl SearchHit {
    /// Cria um resultado de busca
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_portuguese_keys() {
        let profile: BusinessProfile = serde_json::from_value(serde_json::json!({
            "segmento": "consultoria",
            "preco": 997,
            "dores_viscerais": ["trabalho muito e não cresço"],
            "objecoes_reais": ["está caro"]
        }))
        .unwrap();

        assert_eq!(profile.segment(), Some("consultoria"));
        assert_eq!(profile.price.as_deref(), Some("997"));
        assert_eq!(profile.pains.len(), 1);
        assert_eq!(profile.objections, vec!["está caro".to_string()]);
    }

    #[test]
    fn test_profile_english_aliases() {
        let profile: BusinessProfile = serde_json::from_value(serde_json::json!({
            "segment": "fitness",
            "price": "1497",
            "competitors": ["A", "B"],
            "desires": ["liberdade"]
        }))
        .unwrap();

        assert_eq!(profile.segment_or_default(), "fitness");
        assert_eq!(profile.price_amount(), 1497.0);
        assert_eq!(profile.competitors.as_deref(), Some("A, B"));
        assert_eq!(profile.desires, vec!["liberdade".to_string()]);
    }

    #[test]
    fn test_empty_profile_defaults() {
        let profile: BusinessProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.segment_or_default(), "negócios");
        assert_eq!(profile.segment_or_title(), "Negócios");
        assert_eq!(profile.price_amount(), DEFAULT_PRICE);
        assert!(profile.query().is_none());
    }

    #[test]
    fn test_blank_segment_uses_default() {
        let profile = BusinessProfile::with_segment("   ");
        assert_eq!(profile.segment_or_default(), DEFAULT_SEGMENT);
    }

    #[test]
    fn test_invalid_price_falls_back() {
        let mut profile = BusinessProfile::default();
        profile.price = Some(String::new());
        assert_eq!(profile.price_amount(), 997.0);
        profile.price = Some("sob consulta".into());
        assert_eq!(profile.price_amount(), 997.0);
        profile.price = Some("R$ 1.997,00".into());
        // "1.997.00" não é número válido
        assert_eq!(profile.price_amount(), 997.0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("997"), Some(997.0));
        assert_eq!(parse_amount("R$ 2500"), Some(2500.0));
        assert_eq!(parse_amount("49,90"), Some(49.9));
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_text_map() {
        let segment = "fitness";
        let map = text_map(&[("b", format!("no {segment}")), ("a", "fixo".to_string())]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["b"], "no fitness");
        assert_eq!(map.keys().next().map(String::as_str), Some("a"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(997.0 * 3.0), "2991");
        assert_eq!(format_amount(997.0 * 0.15), "150");
    }
}
