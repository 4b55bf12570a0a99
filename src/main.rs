use anyhow::Result;
use clap::Parser;
use eix_pycheck::cli::RootArgs;
use eix_pycheck::load::{dump_collection, load_collection};
use eix_pycheck::report::{report, ReportOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    let collection = load_collection(&args.database)?;
    if args.dump {
        println!("{}", dump_collection(&collection)?);
        return Ok(());
    }

    let options = ReportOptions {
        baseline: args.baseline,
        search: args.search,
    };
    for line in report(&collection, &options) {
        println!("{line}");
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
