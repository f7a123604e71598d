mod cli;
mod config;
mod db;
mod format;
mod logger;
mod names;
mod prompt;
mod record;
mod seed;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};

use crate::cli::Args;
use crate::config::app_config_dir;

fn main() -> Result<()> {
    // Log to a file under the app config directory; seeding still runs without it.
    if let Ok(dir) = app_config_dir() {
        let _ = logger::init(&dir.join("staffseed.log"));
    }

    let stdout = io::stdout();
    let result = run(Args::parse(), &mut io::stdin().lock(), &mut stdout.lock());
    if let Err(err) = &result {
        error!(error = ?err, "fatal error");
    }
    result
}

fn run<R: BufRead, W: Write>(args: Args, input: &mut R, out: &mut W) -> Result<()> {
    let config = args.resolve_config()?;
    let db_path = config.resolved_db_path()?;

    let count = match args.count {
        Some(n) => n,
        None => prompt::prompt_count(input, out, config.default_count)?,
    };

    let rng_seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        count,
        table = %config.table,
        path = %db_path.display(),
        wipe = config.wipe,
        seed = rng_seed,
        "seeding"
    );
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);

    seed::prepare_table(&db_path, &config.table, out)?;
    let report = seed::generate_data(&db_path, &config.table, count, config.wipe, &mut rng, out)?;
    info!(
        wiped = ?report.wiped,
        inserted = report.inserted,
        total = report.records.rows.len(),
        "done"
    );
    Ok(())
}
