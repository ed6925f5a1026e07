// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;

use crate::app_config::Config;
use crate::app_controller::{Controller, ErrorOutput};

mod app_config;
mod app_controller;
mod errors;
mod providers;
mod summarizer;
mod transcript_processor;
mod video_utils;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a YouTube video transcript (default command)
    #[command(alias = "summarize")]
    Summarize(SummarizeArgs),

    /// Generate shell completions for ytldr
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SummarizeArgs {
    /// YouTube video URL or bare 11-character video id
    #[arg(value_name = "VIDEO_URL")]
    url: String,

    /// Preferred caption language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    language: Option<String>,

    /// Maximum number of sentences in the summary
    #[arg(short, long)]
    target_sentences: Option<i64>,

    /// Omit the formatted transcript from the JSON output
    #[arg(short = 'n', long)]
    no_transcript: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// ytldr - YouTube transcript summarizer
///
/// Fetches the caption track of a YouTube video, builds a transcript, and
/// prints an extractive summary as a single JSON object on stdout.
#[derive(Parser, Debug)]
#[command(name = "ytldr")]
#[command(version = "1.0.0")]
#[command(about = "Extractive YouTube transcript summarizer")]
#[command(long_about = "ytldr fetches the caption track of a YouTube video and prints a deterministic
extractive summary as JSON on stdout.

EXAMPLES:
    ytldr https://www.youtube.com/watch?v=dQw4w9WgXcQ   # Summarize with default config
    ytldr -t 6 https://youtu.be/dQw4w9WgXcQ             # Shorter summary (6 sentences)
    ytldr -l es dQw4w9WgXcQ                             # Prefer Spanish captions, bare id
    ytldr -n dQw4w9WgXcQ                                # Summary only, no transcript field
    ytldr --log-level debug dQw4w9WgXcQ                 # Debug logging on stderr
    ytldr completions bash > ytldr.bash                 # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

OUTPUT:
    One JSON object on stdout: summary, transcript, title and videoId on
    success, or a single error field on failure. Logs go to stderr only.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YouTube video URL or bare 11-character video id
    #[arg(value_name = "VIDEO_URL")]
    url: Option<String>,

    /// Preferred caption language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    language: Option<String>,

    /// Maximum number of sentences in the summary
    #[arg(short, long)]
    target_sentences: Option<i64>,

    /// Omit the formatted transcript from the JSON output
    #[arg(short = 'n', long)]
    no_transcript: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ytldr", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Summarize(args)) => run_summarize(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let url = cli
                .url
                .ok_or_else(|| anyhow!("VIDEO_URL is required when no subcommand is specified"))?;

            let summarize_args = SummarizeArgs {
                url,
                language: cli.language,
                target_sentences: cli.target_sentences,
                no_transcript: cli.no_transcript,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_summarize(summarize_args).await
        }
    }
}

async fn run_summarize(options: SummarizeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader::<_, Config>(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(language) = &options.language {
        config.language = language.clone();
    }

    if let Some(target) = options.target_sentences {
        if target < 1 {
            // Reject the bad budget here so nothing is fetched for a doomed run
            let failure = errors::SummarizeError::InvalidTarget(target);
            emit_error(&failure.to_string())?;
            std::process::exit(1);
        }
        config.summary.target_sentences = target as usize;
    }

    if options.no_transcript {
        config.summary.include_transcript = false;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller and run the workflow
    let controller = Controller::with_config(config)?;

    match controller.run(&options.url).await {
        Ok(output) => {
            let json = serde_json::to_string(&output)
                .context("Failed to serialize summary output to JSON")?;
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            error!("Summarization failed: {}", e);
            emit_error(&e.to_string())?;
            std::process::exit(1);
        }
    }
}

/// Print the `{ "error": … }` object on stdout
fn emit_error(message: &str) -> Result<()> {
    let output = ErrorOutput {
        error: message.to_string(),
    };
    let json =
        serde_json::to_string(&output).context("Failed to serialize error output to JSON")?;
    println!("{}", json);
    Ok(())
}
