use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use oldphonepad::{
    format_output, render_keymap, render_trace, run_repl, Config, Decoder, TraceFormat,
};

#[derive(Parser)]
#[command(name = "oldphonepad")]
#[command(about = "Decode old mobile phone keypad presses into text")]
#[command(version)]
struct Cli {
    /// TOML file with front-end options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Single keypad sequence to decode, e.g. "4433555 555666#"
    input: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one or more keypad sequences
    Decode {
        /// Keypad sequences, one result line each
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Show every step taken while decoding
    Trace {
        /// Emit the trace as JSON
        #[arg(long)]
        json: bool,
        /// Keypad sequence to trace
        input: String,
    },
    /// Print the keypad table
    Keymap,
    /// Decode lines read from stdin
    Repl,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("OLDPHONEPAD_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            let config = Config::load_toml(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

fn handle_repl(decoder: &Decoder, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("oldphonepad: type keypad presses and press Enter (e.g. 4433555 555666#)");
        println!("Ctrl-D to exit.");
    }
    run_repl(decoder, config, stdin.lock(), io::stdout().lock(), interactive)
        .context("reading keypad input from stdin")?;
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let decoder = Decoder::new();

    match cli.command {
        Some(Commands::Decode { inputs }) => {
            for input in &inputs {
                println!("{}", format_output(&decoder.decode(input), &config));
            }
        }
        Some(Commands::Trace { json, input }) => {
            let format = if json {
                TraceFormat::Json
            } else {
                config.trace_format
            };
            let trace = decoder.trace(&input);
            let rendered = render_trace(&trace, format, &config).context("rendering trace")?;
            println!("{}", rendered);
        }
        Some(Commands::Keymap) => {
            println!("{}", render_keymap(&decoder.keymap()));
        }
        Some(Commands::Repl) => handle_repl(&decoder, &config)?,
        None => match cli.input {
            Some(input) => println!("{}", format_output(&decoder.decode(&input), &config)),
            None => handle_repl(&decoder, &config)?,
        },
    }

    Ok(())
}
