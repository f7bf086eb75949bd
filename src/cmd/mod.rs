pub mod count;
pub mod walk;

use clap::Args;
use shingles::config::Config;
use shingles::corpus::{self, Corpus};
use shingles::{ShingleResult, ShingleStore};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Files or directories to shingle. Reads stdin when none are given.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl InputArgs {
    pub fn load(&self) -> ShingleResult<Vec<Corpus>> {
        if self.paths.is_empty() {
            info!("📥 Reading corpus from stdin");
            return Ok(vec![corpus::read_corpus(io::stdin().lock(), "<stdin>")?]);
        }
        corpus::load_paths(&self.paths)
    }
}

/// Builds a store from the configured length and ingests every input corpus.
pub fn build_store(config: &Config, input: &InputArgs) -> ShingleResult<ShingleStore> {
    let corpora = input.load()?;
    let store = ShingleStore::new(config.shingling.ngram_length)?;
    store.incorporate_all(&corpora, config.shingling.normalize);
    Ok(store)
}
