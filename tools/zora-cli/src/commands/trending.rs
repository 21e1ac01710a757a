//! `zora trending` - show the trending-phrase list.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::commands::load_vocabulary;
use crate::output::Output;

#[derive(Args)]
pub struct TrendingArgs {
    /// Vocabulary TOML override
    #[arg(long)]
    vocabulary: Option<PathBuf>,
}

pub fn run(args: TrendingArgs, output: &Output) -> Result<()> {
    let vocabulary = load_vocabulary(args.vocabulary.as_deref())?;

    if output.is_json() {
        output.json(&vocabulary.trending);
        return Ok(());
    }

    output.header("Trending searches");
    for phrase in &vocabulary.trending {
        output.list_item(phrase);
    }
    Ok(())
}
