use super::{print_json, Context};
use crate::models::ResolveReport;
use anyhow::Result;
use clap::Args;
use move_finder::{resolve_batch, CatalogEntry};

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Names, comma or newline separated
    pub text: String,

    /// Resolve against moves instead of Pokémon
    #[arg(long)]
    pub moves: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ResolveArgs, ctx: &Context) -> Result<()> {
    let dex = ctx.snapshot()?;
    if args.moves {
        let batch = resolve_batch(&args.text, dex.moves(), &[]);
        report(batch.resolved, batch.unresolved, args.json)
    } else {
        let batch = resolve_batch(&args.text, dex.species(), &[]);
        report(batch.resolved, batch.unresolved, args.json)
    }
}

fn report<T>(resolved: Vec<&T>, unresolved: Vec<String>, json: bool) -> Result<()>
where
    T: CatalogEntry + serde::Serialize,
{
    let report = ResolveReport {
        resolved,
        unresolved,
    };
    if json {
        return print_json(&report);
    }
    for entry in &report.resolved {
        println!("{} ({})", entry.name(), entry.id());
    }
    if !report.unresolved.is_empty() {
        println!("Not found: {}", report.unresolved.join(", "));
    }
    Ok(())
}
