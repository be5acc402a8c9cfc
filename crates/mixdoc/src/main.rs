//! Command-line front end generating the alsamixer manual page sections and default configuration.

use std::{fs, path::PathBuf};

use anyhow::{Result, anyhow};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use libmixdoc::Mixdoc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default alsamixer.rc generated from the mixer sources
    Mkconfig {
        /// Source file holding the key bindings tables (bindings.c)
        #[arg(env = "MIXDOC_BINDINGS")]
        bindings_source_file: PathBuf,

        /// Source file holding the color setup (colors.c)
        #[arg(env = "MIXDOC_COLORS")]
        colors_source_file: PathBuf,

        /// Comment out every generated setting
        #[arg(long, default_value_t = false)]
        comment: bool,

        /// Override an option default
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_setting)]
        settings: Vec<(String, String)>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the configuration sections of the alsamixer manual page (troff)
    Mkman {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_setting(arg: &str) -> Result<(String, String)> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{arg}'"))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit(document: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, format!("{document}\n"))
                .map_err(|e| anyhow!("Failed to write {}: {e}", path.display()))?;
            info!(path = %path.display(), "wrote document");
            Ok(())
        }
        None => {
            println!("{document}");
            Ok(())
        }
    }
}

fn run(command: &Commands) -> Result<()> {
    match command {
        Commands::Mkconfig {
            bindings_source_file,
            colors_source_file,
            comment,
            settings,
            output,
        } => {
            let mixdoc = settings
                .iter()
                .fold(Mixdoc::new().with_commented(*comment), |m, (name, value)| {
                    m.with_setting(name, value)
                });
            let document = mixdoc.render_config(bindings_source_file, colors_source_file)?;
            emit(&document, output.as_ref())
        }
        Commands::Mkman { output } => emit(&Mixdoc::new().render_manpage(), output.as_ref()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help().ok();
        std::process::exit(1);
    };

    if let Err(e) = run(&command) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
