use super::InputArgs;
use crate::reports;
use clap::Args;
use shingles::config::Config;
use shingles::ranker;
use shingles::{ShingleResult, ShingleStore};
use std::io::Write;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct WalkArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub input: InputArgs,

    /// Skip ranking and list n-grams in storage order
    #[arg(long, default_value_t = false)]
    pub unsorted: bool,

    /// Skip ranking and list n-grams in the order they were first seen
    #[arg(long, default_value_t = false, conflicts_with = "unsorted")]
    pub insertion_order: bool,

    /// Rank least frequent first
    #[arg(long, default_value_t = false, conflicts_with_all = ["unsorted", "insertion_order"])]
    pub ascending: bool,
}

pub fn run<W: Write>(
    args: &WalkArgs,
    config: &Config,
    store: &ShingleStore,
    out: &mut W,
) -> ShingleResult<()> {
    let mut records = if args.unsorted {
        store.walk()
    } else if args.insertion_order {
        store.ordered_walk()
    } else if args.ascending {
        ranker::rank_ascending(store.ordered_walk())
    } else {
        store.sorted_walk()
    };

    let limit = config.output.limit;
    if limit > 0 && records.len() > limit {
        records.truncate(limit);
    }
    debug!("Emitting {} of {} records", records.len(), store.count());

    reports::emit(&records, config.output.format, out)
}
