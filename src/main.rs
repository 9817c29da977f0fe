use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use rayon::prelude::*;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wordcase::cli::output::{self, Conversion, OutputFormat, Tokenization};
use wordcase::config::Overrides;
use wordcase::{Config, Convention, IndentKind};

#[derive(Parser, Debug)]
#[command(name = "wordcase")]
#[command(version, about = "Split identifiers into words and convert their case", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(short = 'o', long, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Convert identifiers to another naming convention
    Convert {
        /// Target convention
        #[arg(short, long, ignore_case = true)]
        to: Option<Convention>,

        /// Identifiers to convert; reads one per line from stdin when empty
        #[arg(value_name = "WORDS")]
        words: Vec<String>,
    },
    /// Show the words an identifier splits into
    Tokenize {
        /// Identifiers to split; reads one per line from stdin when empty
        #[arg(value_name = "WORDS")]
        words: Vec<String>,
    },
    /// Indent every non-empty line
    Indent {
        /// Indent with this many tabs
        #[arg(long, conflicts_with = "spaces")]
        tabs: Option<usize>,

        /// Indent with this many spaces
        #[arg(long)]
        spaces: Option<usize>,

        /// Repeat the space indentation this many times
        #[arg(long, requires = "spaces")]
        times: Option<usize>,

        /// Drop empty lines instead of keeping them
        #[arg(long)]
        omit_empty: bool,

        /// File to read; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Strip trailing spaces from every line
    Trim {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let colored = !cli.no_color;

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e), colored);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wordcase=debug")
    } else {
        EnvFilter::new("wordcase=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "wordcase", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let overrides = overrides_for(&command, cli.format);
    let config = Config::load(overrides)?;
    let colored = !cli.no_color;

    let rendered = match command {
        Commands::Convert { words, .. } => {
            let inputs = inputs_or_stdin(words)?;
            debug!(count = inputs.len(), convention = %config.convention, "converting");
            let conversions: Vec<Conversion> = inputs
                .par_iter()
                .map(|input| Conversion {
                    input: input.clone(),
                    output: wordcase::to_case(input, config.convention),
                })
                .collect();
            output::format_conversions(&conversions, config.convention, config.format)?
        }
        Commands::Tokenize { words } => {
            let inputs = inputs_or_stdin(words)?;
            let tokenizations: Vec<Tokenization> = inputs
                .par_iter()
                .map(|input| Tokenization {
                    input: input.clone(),
                    tokens: wordcase::tokenize(input),
                })
                .collect();
            output::format_tokenizations(&tokenizations, config.format, colored)?
        }
        Commands::Indent { file, .. } => {
            let text = read_text(file)?;
            let indented = wordcase::indent(&text, config.indent, config.omit_empty_lines);
            output::format_text(&indented, config.format)?
        }
        Commands::Trim { file } => {
            let text = read_text(file)?;
            let trimmed = wordcase::trim_trailing_spaces_per_line(&text);
            output::format_text(&trimmed, config.format)?
        }
    };

    let bytes = wordcase::encode_utf8(&rendered)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&bytes)
        .context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn overrides_for(command: &Commands, format: Option<OutputFormat>) -> Overrides {
    let mut overrides = Overrides {
        format,
        ..Default::default()
    };

    match command {
        Commands::Convert { to, .. } => overrides.convention = *to,
        Commands::Indent {
            tabs,
            spaces,
            times,
            omit_empty,
            ..
        } => {
            overrides.indent = match (tabs, spaces) {
                (Some(n), _) => Some(IndentKind::Tabs(*n)),
                (None, Some(width)) => Some(IndentKind::Spaces {
                    width: *width,
                    times: times.unwrap_or(1),
                }),
                (None, None) => None,
            };
            overrides.omit_empty_lines = *omit_empty;
        }
        Commands::Tokenize { .. } | Commands::Trim { .. } => {}
    }

    overrides
}

/// Use the given words, or every non-blank stdin line when there are none.
fn inputs_or_stdin(words: Vec<String>) -> Result<Vec<String>> {
    if !words.is_empty() {
        return Ok(words);
    }

    let text = read_text(None)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn read_text(file: Option<PathBuf>) -> Result<String> {
    let bytes = match &file {
        Some(path) => fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let source = file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());
    wordcase::decode_utf8(&bytes).with_context(|| format!("Failed to decode {}", source))
}
