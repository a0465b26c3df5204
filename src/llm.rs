// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CLIENTE LLM
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Trait e implementações do gerador de análise. O relatório só precisa de
// "prompt entra, texto sai"; o formato (JSON ou texto livre) é tratado por
// quem chama.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{LlmConfig, LlmProvider};

/// Erros do cliente LLM
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limit exceeded")]
    RateLimitError,

    #[error("Invalid response format: {0}")]
    ParseError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Missing API key for {0}")]
    MissingApiKey(String),
}

/// Gerador de análise baseado em LLM.
///
/// `Ok(None)` significa que o provedor respondeu sem conteúdo; o relatório
/// trata esse caso igual a uma falha e usa os templates.
#[async_trait]
pub trait AnalysisGenerator: Send + Sync {
    async fn generate_analysis(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<Option<String>, LlmError>;
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO MOCK PARA TESTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Gerador mock com resposta fixa (ou nenhuma)
#[derive(Debug, Default, Clone)]
pub struct MockAnalysisGenerator {
    pub response: Option<String>,
}

impl MockAnalysisGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }
}

#[async_trait]
impl AnalysisGenerator for MockAnalysisGenerator {
    async fn generate_analysis(
        &self,
        _prompt: &str,
        _max_tokens: u32,
    ) -> Result<Option<String>, LlmError> {
        Ok(self.response.clone())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO OPENAI (CHAT COMPLETIONS)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const SYSTEM_PROMPT: &str = "Você é um analista de mercado sênior. Quando o pedido trouxer um schema JSON, responda apenas com o JSON.";

/// Cliente para APIs compatíveis com OpenAI
pub struct OpenAiClient {
    provider: LlmProvider,
    api_key: Option<String>,
    model: String,
    base_url: String,
    temperature: f32,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self::from_config(&LlmConfig {
            api_key: Some(api_key),
            ..Default::default()
        })
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self {
            provider: config.provider,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl AnalysisGenerator for OpenAiClient {
    async fn generate_analysis(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<Option<String>, LlmError> {
        // Provedores locais aceitam chamadas sem chave
        if self.provider == LlmProvider::OpenAi && self.api_key.is_none() {
            return Err(LlmError::MissingApiKey(self.provider.to_string()));
        }

        #[derive(Serialize)]
        struct ChatMessage<'a> {
            role: &'a str,
            content: &'a str,
        }

        #[derive(Serialize)]
        struct ChatRequest<'a> {
            model: &'a str,
            messages: Vec<ChatMessage<'a>>,
            temperature: f32,
            max_tokens: u32,
        }

        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<ChatChoice>,
        }

        #[derive(Deserialize)]
        struct ChatChoice {
            message: ChatResponseMessage,
        }

        #[derive(Deserialize)]
        struct ChatResponseMessage {
            content: Option<String>,
        }

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens,
        };

        log::debug!(
            "🤖 Chat completion: modelo={} prompt={} chars max_tokens={}",
            self.model,
            prompt.chars().count(),
            max_tokens
        );

        let mut builder = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(&request);

        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(LlmError::RateLimitError);
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError(format!("HTTP {}: {}", status, error_text)));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty());

        Ok(content)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// UTILITÁRIOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Remove cercas markdown (```json ... ```) ao redor da resposta
pub fn strip_code_fences(response: &str) -> &str {
    if response.contains("```json") {
        response
            .split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .unwrap_or(response)
            .trim()
    } else if response.contains("```") {
        response
            .split("```")
            .nth(1)
            .unwrap_or(response)
            .trim()
    } else {
        response.trim()
    }
}

/// Interpreta a resposta como objeto JSON (cercas markdown toleradas)
pub fn parse_json_object(
    response: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, LlmError> {
    let json_str = strip_code_fences(response);
    match serde_json::from_str::<serde_json::Value>(json_str) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => Err(LlmError::ParseError(format!(
            "esperado objeto JSON, recebido {}",
            json_kind(&other)
        ))),
        Err(e) => Err(LlmError::ParseError(e.to_string())),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "número",
        serde_json::Value::String(_) => "texto",
        serde_json::Value::Array(_) => "lista",
        serde_json::Value::Object(_) => "objeto",
    }
}
