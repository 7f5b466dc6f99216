use super::Context;
use anyhow::Result;
use clap::Args;
use move_finder::{suggest, SUGGESTION_LIMIT};

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Partial name
    pub query: String,

    /// Suggest moves instead of Pokémon
    #[arg(long)]
    pub moves: bool,

    #[arg(long, default_value_t = SUGGESTION_LIMIT)]
    pub limit: usize,
}

pub fn execute(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let dex = ctx.snapshot()?;
    if args.moves {
        for move_ in suggest(&args.query, dex.moves(), &[], args.limit) {
            println!("{} ({} {})", move_.name, move_.move_type, move_.category);
        }
    } else {
        for species in suggest(&args.query, dex.species(), &[], args.limit) {
            println!("#{:03} {}", species.num, species.name);
        }
    }
    Ok(())
}
