// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CONFIGURAÇÃO DO PROVEDOR LLM E DO RELATÓRIO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Todas as configurações podem ser definidas via .env. Valores inválidos são
// ignorados com aviso e o padrão é mantido.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::fmt;
use std::str::FromStr;

/// Erros de configuração
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Valor inválido para {var}: '{value}'")]
    InvalidValue { var: String, value: String },
}

/// Provedor do modelo de linguagem.
///
/// - `OpenAi`: API oficial (`https://api.openai.com/v1`)
/// - `Local`: servidor compatível com OpenAI (Ollama, vLLM, LM Studio...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmProvider {
    #[default]
    OpenAi,
    Local,
}

impl LlmProvider {
    /// Converte string do .env para LlmProvider.
    ///
    /// Case-insensitive: "local" → Local, qualquer outro valor → OpenAi
    pub fn from_env(value: &str) -> Self {
        match value.to_lowercase().trim() {
            "local" => Self::Local,
            _ => Self::OpenAi,
        }
    }

    /// URL base padrão do provedor
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1",
            Self::Local => "http://localhost:11434/v1",
        }
    }

    /// Nome legível para logs
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Local => "Local (compatível OpenAI)",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Configuração do cliente LLM
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    /// Modelo usado nas chamadas de chat
    pub model: String,
    /// URL base da API (sem `/chat/completions`)
    pub api_base_url: String,
    pub temperature: f32,
    /// Chave da API; provedores locais podem dispensá-la
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        let provider = LlmProvider::default();
        Self {
            provider,
            model: "gpt-4.1-mini".to_string(),
            api_base_url: provider.default_base_url().to_string(),
            temperature: 0.7,
            api_key: None,
        }
    }
}

/// Limites e parâmetros do relatório
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Tokens máximos pedidos ao gerador de análise
    pub max_tokens: u32,
    /// Resultados por provedor em cada consulta de pesquisa
    pub results_per_provider: usize,
    /// Limite de caracteres do bloco de contexto
    pub context_char_limit: usize,
    /// Resultados de pesquisa incluídos no contexto
    pub prompt_results: usize,
    /// Horizonte da predição de mercado
    pub horizon_months: u32,
    /// Caracteres da resposta bruta guardados no caminho de texto
    pub raw_preview_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_tokens: 8192,
            results_per_provider: 10,
            context_char_limit: 15_000,
            prompt_results: 20,
            horizon_months: 60,
            raw_preview_chars: 2000,
        }
    }
}

/// Configuração completa da aplicação
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub report: ReportConfig,
    pub jina_api_key: Option<String>,
}

/// Lê e converte uma variável numérica.
///
/// `Ok(None)` quando a variável não existe; `Err` quando existe mas não é
/// um valor válido.
pub fn parse_env_var<T: FromStr>(var: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => parse_value(var, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_value<T: FromStr>(var: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        value: raw.to_string(),
    })
}

/// Aplica uma variável numérica em `target`, mantendo o padrão se inválida
fn apply_env<T: FromStr + fmt::Display>(var: &str, target: &mut T) {
    match parse_env_var::<T>(var) {
        Ok(Some(value)) => {
            log::info!("📦 {}={}", var, value);
            *target = value;
        }
        Ok(None) => {}
        Err(e) => log::warn!("⚠️ {} (mantendo {})", e, target),
    }
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Carrega a configuração do LLM.
///
/// Variáveis suportadas:
/// - `LLM_PROVIDER`: "openai" ou "local"
/// - `LLM_MODEL`: modelo (padrão: gpt-4.1-mini)
/// - `LLM_API_BASE_URL`: URL base (padrão depende do provedor)
/// - `LLM_TEMPERATURE`: temperatura (padrão: 0.7)
/// - `OPENAI_API_KEY`: chave da API
pub fn load_llm_config() -> LlmConfig {
    let mut config = LlmConfig::default();

    if let Some(provider) = non_empty_env("LLM_PROVIDER") {
        config.provider = LlmProvider::from_env(&provider);
        config.api_base_url = config.provider.default_base_url().to_string();
        log::info!("📦 LLM_PROVIDER={}", config.provider);
    }

    if let Some(model) = non_empty_env("LLM_MODEL") {
        log::info!("📦 LLM_MODEL={}", model);
        config.model = model;
    }

    if let Some(base_url) = non_empty_env("LLM_API_BASE_URL") {
        log::info!("📦 LLM_API_BASE_URL={}", base_url);
        config.api_base_url = base_url.trim_end_matches('/').to_string();
    }

    apply_env("LLM_TEMPERATURE", &mut config.temperature);

    config.api_key = non_empty_env("OPENAI_API_KEY");

    config
}

/// Carrega os parâmetros do relatório.
///
/// Variáveis suportadas: `REPORT_MAX_TOKENS`, `REPORT_RESULTS_PER_PROVIDER`,
/// `REPORT_CONTEXT_CHAR_LIMIT`, `REPORT_PROMPT_RESULTS`,
/// `REPORT_HORIZON_MONTHS`, `REPORT_RAW_PREVIEW_CHARS`.
pub fn load_report_config() -> ReportConfig {
    let mut config = ReportConfig::default();

    apply_env("REPORT_MAX_TOKENS", &mut config.max_tokens);
    apply_env("REPORT_RESULTS_PER_PROVIDER", &mut config.results_per_provider);
    apply_env("REPORT_CONTEXT_CHAR_LIMIT", &mut config.context_char_limit);
    apply_env("REPORT_PROMPT_RESULTS", &mut config.prompt_results);
    apply_env("REPORT_HORIZON_MONTHS", &mut config.horizon_months);
    apply_env("REPORT_RAW_PREVIEW_CHARS", &mut config.raw_preview_chars);

    config
}

/// Carrega toda a configuração a partir do ambiente
pub fn load_app_config() -> AppConfig {
    let config = AppConfig {
        llm: load_llm_config(),
        report: load_report_config(),
        jina_api_key: non_empty_env("JINA_API_KEY"),
    };

    log::info!(
        "🔧 LLM: {} / {} | Jina: {}",
        config.llm.provider,
        config.llm.model,
        if config.jina_api_key.is_some() { "ok" } else { "ausente" }
    );

    config
}
