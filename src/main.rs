extern crate env_logger;
#[macro_use]
extern crate log;
use std::path::Path;

use anyhow::{ensure, Result};
use clap::Parser;

mod barcode;
mod cli;
mod convert;
mod dialect;
mod errors;
mod io;
mod options;
mod rewrite;
mod summary;
mod walk;

use cli::Cli;
use options::Options;

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let opts = Options::from(&cli);

    let default_level = if opts.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_target(false)
        .target(env_logger::Target::Stdout)
        .init();

    info!("recasava v{}", cli::VERSION);

    let input = Path::new(&cli.input);
    ensure!(input.is_dir(), "Input directory {} does not exist", input.display());

    let summary = convert::convert_tree(input, &opts);
    info!("Completed: {}", summary.describe());

    if let Some(output) = &cli.summary {
        summary.write_json(output)?;
        info!("Wrote run summary to {output}");
    }

    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
