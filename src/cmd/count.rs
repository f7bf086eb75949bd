use super::InputArgs;
use crate::reports;
use clap::Args;
use shingles::config::Config;
use shingles::{ShingleResult, ShingleStore};
use std::io::Write;

#[derive(Args, Debug, Clone)]
pub struct CountArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run<W: Write>(config: &Config, store: &ShingleStore, out: &mut W) -> ShingleResult<()> {
    reports::summary(
        store.count(),
        store.total_occurrences(),
        store.ngram_length(),
        config.output.format,
        out,
    )
}
