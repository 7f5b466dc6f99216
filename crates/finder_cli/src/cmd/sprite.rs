use anyhow::Result;
use clap::Args;
use move_finder::sprites::{icon_url, sprite_url, to_display_id};

#[derive(Args, Debug)]
pub struct SpriteArgs {
    /// Species id or name
    pub id: String,

    /// National dex number, for the box icon URL
    #[arg(long)]
    pub num: Option<u16>,
}

pub fn execute(args: SpriteArgs) -> Result<()> {
    println!("{}", to_display_id(&args.id));
    println!("{}", sprite_url(&args.id));
    if let Some(num) = args.num {
        println!("{}", icon_url(num));
    }
    Ok(())
}
