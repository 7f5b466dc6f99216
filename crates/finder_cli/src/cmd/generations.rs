use super::Context;
use anyhow::Result;
use move_finder::Generation;

pub fn execute(ctx: &Context) -> Result<()> {
    for gen in Generation::SELECTABLE {
        let marker = if gen == ctx.generation() { "*" } else { " " };
        println!("{marker} {}", gen.label());
    }
    Ok(())
}
