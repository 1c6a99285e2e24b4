use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wikiget_model::{Config, Language, NamingScheme, DEFAULT_TIMEOUT};

const EXAMPLES: &str = "\
Examples:
    wikiget -d ./pages -l it -n 10 list
    wikiget -d ./pages note.md";

/// Fetch rendered Wikipedia pages through the api.php parse endpoint.
///
/// Reads a file with one page URL per line (e.g. https://en.wikipedia.org/wiki/Rust),
/// requests each page from Wikipedia and writes the HTML into a local file.
#[derive(Debug, Parser)]
#[command(name = "wikiget", version)]
#[command(arg_required_else_help = true, after_help = EXAMPLES)]
struct Cli {
    /// Destination directory for each page (must exist)
    #[arg(short = 'd', value_name = "PATH", default_value = ".")]
    destination: PathBuf,

    /// Number of pages to download; 0 fetches every URL in the list
    #[arg(short = 'n', value_name = "MAX", default_value_t = 0)]
    limit: usize,

    /// Wiki language for every page: "en" or "it" (default: taken from each URL)
    #[arg(short = 'l', value_name = "LANG")]
    lang: Option<Language>,

    /// Save pages without the page name suffix
    #[arg(long)]
    strip_suffix: bool,

    /// Save pages without the page number prefix
    #[arg(long)]
    strip_prefix: bool,

    /// Enable debug logging (logs each request URL)
    #[arg(long)]
    debug: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs(), value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// File with the list of page URLs; anything after it is ignored
    #[arg(value_name = "LIST", num_args = 1.., trailing_var_arg = true)]
    list: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Cli {
    fn effective_log_level(&self) -> LogLevel {
        if self.debug && self.log_level != LogLevel::Trace {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }

    fn to_config(&self) -> Result<Config> {
        Ok(Config {
            language_override: self.lang,
            item_limit: self.limit,
            destination: self.destination.clone(),
            list_file: self.list.first().cloned(),
            naming: NamingScheme::new(self.strip_prefix, self.strip_suffix)?,
            debug: self.debug,
            timeout: Duration::from_secs(self.timeout),
        })
    }
}

/// Build the log filter: `RUST_LOG` if it parses, otherwise `level`.
///
/// Debug mode always keeps the fetcher at debug so request URLs are logged.
fn log_filter(level: LogLevel, debug: bool, rust_log: Option<&str>) -> Result<EnvFilter> {
    // Keep the HTTP stack quiet at debug/trace
    let default = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn",
        LogLevel::Trace => "trace,hyper=warn,hyper_util=warn,rustls=warn",
    };
    let mut filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    if debug && level != LogLevel::Trace {
        filter = filter.add_directive("wikiget_acquire=debug".parse()?);
    }
    Ok(filter)
}

fn init_logging(level: LogLevel, debug: bool, utc: bool) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_filter = log_filter(level, debug, rust_log.as_deref())?;

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z".to_string();

    if utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format))
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => err.exit(),
        Err(err) => {
            // Help and usage errors both end the run with status 1
            let _ = err.print();
            std::process::exit(1);
        }
    };

    let config = cli.to_config()?;
    init_logging(cli.effective_log_level(), config.debug, cli.utc)?;

    if cli.list.len() > 1 {
        tracing::warn!(ignored = ?&cli.list[1..], "Ignoring arguments after the list file");
    }
    tracing::debug!(?config, "Resolved configuration");

    let summary = wikiget_acquire::run(&config).await?;
    tracing::info!(
        pages = summary.pages(),
        destination = %config.destination.display(),
        "Batch complete"
    );
    println!(
        "Closing. Total required time: {:5.3} seconds",
        summary.elapsed.as_secs_f64()
    );

    Ok(())
}
