use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use shingles::config::Config;
use shingles::ShingleResult;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Count and rank word shingles (n-grams) in text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; flags given on the command line take precedence
    #[arg(global = true, long = "config", value_name = "FILE")]
    config_file: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the number of distinct n-grams
    Count(cmd::count::CountArgs),
    /// List n-grams with their counts and frequencies
    Walk(cmd::walk::WalkArgs),
}

fn resolve_config(
    cli_config: &Config,
    config_file: &Option<PathBuf>,
    sub_matches: &ArgMatches,
) -> ShingleResult<Config> {
    let config = match config_file {
        Some(path) => {
            info!("⚙️  Loading config from: {:?}", path);
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => cli_config.clone(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli, matches: &ArgMatches) -> ShingleResult<()> {
    let (cli_config, input, name) = match &cli.command {
        Commands::Count(args) => (&args.config, &args.input, "count"),
        Commands::Walk(args) => (&args.config, &args.input, "walk"),
    };
    let sub_matches = matches
        .subcommand_matches(name)
        .ok_or_else(|| shingles::ShingleError::Config(format!("missing '{}' arguments", name)))?;

    let config = resolve_config(cli_config, &cli.config_file, sub_matches)?;
    let store = cmd::build_store(&config, input)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match &cli.command {
        Commands::Count(_) => cmd::count::run(&config, &store, &mut out)?,
        Commands::Walk(args) => cmd::walk::run(args, &config, &store, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
