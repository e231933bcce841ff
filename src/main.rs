// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use ebutt2srt::app_config::{Config, LogLevel};
use ebutt2srt::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for ebutt2srt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// ebutt2srt - Convert subtitles in EBU-TT xml format to srt
#[derive(Parser, Debug)]
#[command(name = "ebutt2srt")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Convert subtitles in EBU-TT xml format to srt.")]
#[command(long_about = "ebutt2srt reads an EBU-TT (TTML) subtitle document and writes a SubRip file
next to it, replacing the extension with .srt. An existing file is never
overwritten: clip.srt is followed by clip001.srt, clip002.srt and so on.

EXAMPLES:
    ebutt2srt clip.xml                      # Writes clip.srt (or clip001.srt, ...)
    ebutt2srt -f clip.xml                   # Overwrite clip.srt
    ebutt2srt /captions/                    # Convert every .xml file in a directory
    ebutt2srt --log-level debug clip.xml    # Show paths and timings
    ebutt2srt completions bash > ebutt2srt.bash")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input xml file or directory
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Overwrite the default output file instead of picking a numbered name
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
// Filtering is left to log::max_level so the level can change after init
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
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

fn main() -> ExitCode {
    // Info until the config has been read
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "ebutt2srt", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    match run_convert(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error. {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_convert(options: CommandLineOptions) -> Result<()> {
    // A command-line level wins over the config file
    if let Some(cli_level) = &options.log_level {
        let level: LogLevel = cli_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_default(&options.config_path)?;

    if let Some(cli_level) = options.log_level {
        config.log_level = cli_level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    controller.run(options.input_path, options.force_overwrite)?;

    Ok(())
}
