// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DEEP MARKET CLI
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Gera o relatório de mercado a partir de um perfil em JSON.
//
// Uso:
//   deep-market-cli perfil.json
//   deep-market-cli perfil.json --pretty --session minha-sessao
//   deep-market-cli perfil.json --offline   (sem IA nem busca, só templates)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use anyhow::Context;
use deep_market::config::LlmProvider;
use deep_market::prelude::*;
use deep_market::{load_app_config, AppConfig};
use std::path::PathBuf;
use std::sync::Arc;

/// Tenta carregar o arquivo .env de múltiplos locais possíveis
fn load_dotenv() {
    let possible_paths = [
        PathBuf::from(".env"),
        PathBuf::from("../.env"),
        // Caminho do crate em tempo de compilação (fallback)
        {
            let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
            p.push(".env");
            p
        },
    ];

    for path in &possible_paths {
        if path.exists() {
            match dotenvy::from_path(path) {
                Ok(_) => {
                    eprintln!(
                        "✓ Carregado .env de: {:?}",
                        path.canonicalize().unwrap_or(path.clone())
                    );
                    return;
                }
                Err(e) => {
                    eprintln!("⚠ Erro ao carregar {:?}: {}", path, e);
                }
            }
        }
    }

    if dotenvy::dotenv().is_err() {
        eprintln!("⚠ Nenhum arquivo .env encontrado. Sem OPENAI_API_KEY/JINA_API_KEY o relatório usa apenas templates.");
    }
}

fn print_usage() {
    eprintln!("Uso: deep-market-cli <perfil.json> [opções]");
    eprintln!();
    eprintln!("Opções:");
    eprintln!("  --session <id>   Identificador da sessão (padrão: UUID v4)");
    eprintln!("  --offline        Não chama IA nem busca web");
    eprintln!("  --pretty         JSON indentado");
    eprintln!();
    eprintln!("Exemplo de perfil:");
    eprintln!(r#"  {{"segmento": "consultoria", "produto": "Mentoria", "preco": "1997"}}"#);
}

/// Argumentos da linha de comando
#[derive(Debug, Default)]
struct CliArgs {
    profile_path: Option<PathBuf>,
    session_id: Option<String>,
    offline: bool,
    pretty: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--session" => {
                let id = iter.next().context("--session requer um valor")?;
                parsed.session_id = Some(id.clone());
            }
            "--offline" => parsed.offline = true,
            "--pretty" => parsed.pretty = true,
            other if other.starts_with("--") => anyhow::bail!("opção desconhecida: {}", other),
            path => parsed.profile_path = Some(PathBuf::from(path)),
        }
    }

    Ok(parsed)
}

/// Monta os colaboradores reais quando há credenciais; sem elas, análise e
/// predição saem dos templates
fn build_assembler(config: &AppConfig, offline: bool) -> ReportAssembler {
    let has_llm = config.llm.api_key.is_some() || config.llm.provider == LlmProvider::Local;

    let generator: Arc<dyn AnalysisGenerator> = if !offline && has_llm {
        log::info!("🧠 Gerador: {} ({})", config.llm.provider, config.llm.model);
        Arc::new(OpenAiClient::from_config(&config.llm))
    } else {
        log::warn!("⚠️ Sem gerador de análise, usando templates");
        Arc::new(MockAnalysisGenerator::new())
    };

    let search: Arc<dyn SearchAggregator> = match (&config.jina_api_key, offline) {
        (Some(key), false) => Arc::new(JinaClient::new(key.clone())),
        _ => {
            log::warn!("⚠️ Sem busca web, pesquisa ficará vazia");
            Arc::new(MockSearchAggregator::new())
        }
    };

    let predictor: Arc<dyn FuturePredictor> = if !offline && has_llm {
        Arc::new(LlmFuturePredictor::new(generator.clone()))
    } else {
        Arc::new(LlmFuturePredictor::offline())
    };

    ReportAssembler::new(search, generator, predictor).with_config(config.report.clone())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let cli = parse_args(&args)?;
    let Some(profile_path) = cli.profile_path else {
        print_usage();
        std::process::exit(1);
    };

    let raw = std::fs::read_to_string(&profile_path)
        .with_context(|| format!("falha ao ler {:?}", profile_path))?;
    let profile: BusinessProfile =
        serde_json::from_str(&raw).with_context(|| format!("perfil inválido em {:?}", profile_path))?;

    let config = load_app_config();
    let session_id = cli
        .session_id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let assembler = build_assembler(&config, cli.offline);
    let report = assembler.generate_report(&profile, Some(&session_id)).await;

    log::info!(
        "📋 Relatório pronto: {} seções da IA, {} drivers",
        report.analysis.ai_section_count(),
        report.drivers.len()
    );

    println!("{}", report.to_json(cli.pretty)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let cli = parse_args(&args(&["perfil.json", "--session", "abc", "--pretty"])).unwrap();
        assert_eq!(cli.profile_path, Some(PathBuf::from("perfil.json")));
        assert_eq!(cli.session_id.as_deref(), Some("abc"));
        assert!(cli.pretty);
        assert!(!cli.offline);
    }

    #[tokio::test]
    async fn test_offline_report_uses_baseline_prediction() {
        let assembler = build_assembler(&AppConfig::default(), true);
        let profile = BusinessProfile::with_segment("consultoria");

        let report = assembler.generate_report(&profile, Some("s")).await;

        assert_eq!(report.future_predictions["origem"], "baseline");
        assert_eq!(report.future_predictions["segmento"], "consultoria");
        assert!(report.future_predictions.get("mock").is_none());
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--session"])).is_err());
        assert!(parse_args(&args(&["--turbo"])).is_err());
    }
}
