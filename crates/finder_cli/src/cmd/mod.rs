//! Subcommand implementations.

pub mod generations;
pub mod resolve;
pub mod search;
pub mod sprite;
pub mod suggest;

use crate::utils::resolve_data_dir;
use anyhow::{Context as _, Result};
use move_finder::{Dex, Generation, GenerationDex};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    data_dir: Option<PathBuf>,
    generation: Generation,
}

impl Context {
    pub fn new(data_dir: Option<PathBuf>, generation: Generation) -> Self {
        Context {
            data_dir,
            generation,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Load the catalog and cut the selected generation out of it.
    pub fn snapshot(&self) -> Result<GenerationDex> {
        let dir = resolve_data_dir(self.data_dir.clone())?;
        debug!(dir = %dir.display(), gen = self.generation.num(), "loading catalog");
        let dex = Dex::load(&dir)
            .with_context(|| format!("failed to load catalog from {}", dir.display()))?;
        dex.generation(self.generation)
            .with_context(|| format!("failed to build {} catalog", self.generation.short_label()))
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
