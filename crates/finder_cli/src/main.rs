//! Command-line shell over `move_finder`.
//!
//! Resolves pasted rosters and move lists against one generation of the
//! catalog and reports which Pokémon can learn the moves.
//!
//! Usage:
//!   move-finder search --pokemon "Pikachu, Gengar" --moves "Thunderbolt, Protect"
//!   move-finder --gen 5 search -p Pikachu -m "Volt Switch" --logic or --explain
//!   move-finder resolve "Mr Mime, Farfetch'd, Fakemon"
//!   move-finder suggest chu
//!   move-finder sprite urshifurapidstrike

mod cmd;
mod models;
mod utils;

use clap::{error::ErrorKind, Parser, Subcommand};
use cmd::{generations, resolve, search, sprite, suggest, Context};
use move_finder::Generation;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "move-finder", version, about = "Find which Pokémon in a roster can learn a set of moves")]
struct Cli {
    /// Directory holding pokedex.json, moves.json and learnsets.json
    #[arg(long, global = true, env = "MOVE_FINDER_DATA")]
    data_dir: Option<PathBuf>,

    /// Generation whose rules and catalog apply (1-9)
    #[arg(long = "gen", global = true, env = "MOVE_FINDER_GEN", default_value_t = Generation::LATEST)]
    generation: Generation,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter a roster by the moves its members can learn
    Search(search::SearchArgs),

    /// Resolve a pasted list of names
    Resolve(resolve::ResolveArgs),

    /// Autocomplete a partial name
    Suggest(suggest::SuggestArgs),

    /// Sprite server name and URL for an id
    Sprite(sprite::SpriteArgs),

    /// List the selectable generations
    Generations,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "move_finder=debug,finder_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                    ExitCode::SUCCESS
                }
                _ => {
                    let _ = err.print();
                    ExitCode::FAILURE
                }
            };
        }
    };
    init_tracing(cli.verbose);

    let outcome = dispatch(cli).await;
    if let Err(err) = &outcome {
        eprintln!("error: {err:#}");
    }
    ExitCode::from(exit_status(&outcome))
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::new(cli.data_dir, cli.generation);
    match cli.command {
        Some(Commands::Search(args)) => search::execute(args, &ctx).await,
        Some(Commands::Resolve(args)) => resolve::execute(args, &ctx),
        Some(Commands::Suggest(args)) => suggest::execute(args, &ctx),
        Some(Commands::Sprite(args)) => sprite::execute(args),
        Some(Commands::Generations) => generations::execute(&ctx),
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let _ = cmd.print_help();
            Ok(())
        }
    }
}

/// 0 on success, 1 for any failure (bad input, unreadable catalog).
fn exit_status(outcome: &anyhow::Result<()>) -> u8 {
    match outcome {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
