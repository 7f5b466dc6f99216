use super::{print_json, Context};
use crate::models::{MoveMethods, SearchReport, SearchRow, SearchState};
use anyhow::Result;
use clap::Args;
use move_finder::{
    filter_by_moves, filter_by_moves_concurrent, resolve_batch, GenerationDex, SearchLogic,
};
use tracing::info;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Roster, comma or newline separated
    #[arg(short, long)]
    pub pokemon: String,

    /// Moves to look for, comma or newline separated
    #[arg(short, long)]
    pub moves: String,

    /// "and": must learn every move, "or": at least one
    #[arg(short, long, default_value_t = SearchLogic::Or)]
    pub logic: SearchLogic,

    /// Check roster members concurrently
    #[arg(long)]
    pub concurrent: bool,

    /// Show how each matching move is learned
    #[arg(long)]
    pub explain: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: SearchArgs, ctx: &Context) -> Result<()> {
    let dex = ctx.snapshot()?;
    let report = build_report(&dex, &args).await?;

    if args.json {
        return print_json(&report);
    }
    print_text(&report);
    Ok(())
}

/// Resolve both lists and run the search, unless either list came out empty.
pub async fn build_report(dex: &GenerationDex, args: &SearchArgs) -> Result<SearchReport> {
    let roster = resolve_batch(&args.pokemon, dex.species(), &[]);
    let moves = resolve_batch(&args.moves, dex.moves(), &[]);
    let roster_names = roster.resolved_names();
    let move_names = moves.resolved_names();

    let state = if roster_names.is_empty() {
        SearchState::NotSearched {
            reason: "no Pokémon selected".to_string(),
        }
    } else if move_names.is_empty() {
        SearchState::NotSearched {
            reason: "no moves selected".to_string(),
        }
    } else {
        let results = if args.concurrent {
            filter_by_moves_concurrent(&roster_names, &move_names, args.logic, dex).await
        } else {
            filter_by_moves(&roster_names, &move_names, args.logic, dex).await
        };
        info!(matched = results.len(), roster = roster_names.len(), "search complete");

        let mut rows = Vec::with_capacity(results.len());
        for result in results {
            let mut row = SearchRow::from(result);
            if args.explain {
                row.methods = explain(dex, &row).await?;
            }
            rows.push(row);
        }
        SearchState::Completed { results: rows }
    };

    Ok(SearchReport {
        generation: dex.generation(),
        logic: args.logic,
        roster: roster_names,
        moves: move_names,
        unresolved_pokemon: roster.unresolved,
        unresolved_moves: moves.unresolved,
        state,
    })
}

async fn explain(dex: &GenerationDex, row: &SearchRow) -> Result<Vec<MoveMethods>> {
    let Some(species) = dex.find_species(&row.member) else {
        return Ok(Vec::new());
    };
    let mut explained = Vec::with_capacity(row.learnable_moves.len());
    for move_ in row.learnable_moves.iter().filter_map(|name| dex.find_move(name)) {
        let methods = dex.learn_methods(species, move_).await?;
        explained.push(MoveMethods {
            move_name: move_.name.clone(),
            methods: methods.labels(),
        });
    }
    Ok(explained)
}

fn print_text(report: &SearchReport) {
    let label = report.generation.label();
    if !report.unresolved_pokemon.is_empty() {
        eprintln!(
            "Pokémon not found in {label}: {}",
            report.unresolved_pokemon.join(", ")
        );
    }
    if !report.unresolved_moves.is_empty() {
        eprintln!(
            "Moves not found in {label}: {}",
            report.unresolved_moves.join(", ")
        );
    }

    match &report.state {
        SearchState::NotSearched { reason } => {
            println!("Nothing to search: {reason}.");
        }
        SearchState::Completed { results } if results.is_empty() => {
            let joiner = match report.logic {
                SearchLogic::And => " and ",
                SearchLogic::Or => " or ",
            };
            println!(
                "{label}: none of {} Pokémon can learn {}.",
                report.roster.len(),
                report.moves.join(joiner)
            );
        }
        SearchState::Completed { results } => {
            println!(
                "{label}, logic {}: {} of {} Pokémon match",
                report.logic.to_string().to_uppercase(),
                results.len(),
                report.roster.len()
            );
            for row in results {
                println!("  {}: {}", row.member, row.learnable_moves.join(", "));
                for entry in &row.methods {
                    let methods = if entry.methods.is_empty() {
                        "unknown".to_string()
                    } else {
                        entry.methods.join(", ")
                    };
                    println!("      {}: {methods}", entry.move_name);
                }
            }
        }
    }
}
