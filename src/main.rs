//! Dolmetscher CLI
//!
//! 从文件或标准输入读取文本/HTML，翻译后写到标准输出。
//! 凭证与调优参数来自环境变量（支持 `.env` 文件）和可选的
//! 配置文件，命令行参数优先级最高

use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use dolmetscher::env::{core as core_env, EnvVar};
use dolmetscher::translation::{
    load_translation_config, validate_language_code, TranslationResult, TranslationService,
};

#[derive(Parser)]
#[command(
    name = "dolmetscher",
    version,
    about = "Translate plain text and HTML documents while preserving markup structure"
)]
struct Cli {
    /// 输入文件；省略时从标准输入读取
    input: Option<PathBuf>,

    /// 目标语言代码，如 EN-US、DE、JA
    #[arg(short = 'l', long = "language")]
    language: String,

    /// 将输入作为HTML文档处理，保持标记结构
    #[arg(long)]
    html: bool,

    /// 覆盖翻译API地址
    #[arg(long)]
    api_url: Option<String>,

    /// 每个分块的最大词数
    #[arg(long)]
    tokens_per_chunk: Option<usize>,

    /// 最大并发请求数
    #[arg(long)]
    max_concurrent: Option<usize>,
}

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();
    let cli = Cli::parse();

    init_logging();

    if let Err(e) = run(cli).await {
        eprintln!("dolmetscher: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let level = core_env::LogLevel::get().unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dolmetscher={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> TranslationResult<()> {
    validate_language_code(&cli.language)?;

    let mut config = load_translation_config(cli.api_url.as_deref());
    if let Some(tokens) = cli.tokens_per_chunk {
        config.tokens_per_chunk = tokens;
    }
    if let Some(max_concurrent) = cli.max_concurrent {
        config.max_concurrent_requests = max_concurrent;
    }

    let service = TranslationService::with_config(config)?;

    let input = read_input(&cli)?;

    let output = if cli.html {
        service.translate_document(&input, &cli.language).await
    } else {
        service.translate_text(&input, &cli.language).await
    };

    println!("{}", output);

    Ok(())
}

fn read_input(cli: &Cli) -> TranslationResult<String> {
    match &cli.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
