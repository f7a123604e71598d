use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::SeedConfig;
use crate::db::validate_table_name;

#[derive(Parser, Debug)]
#[command(name = "staffseed")]
#[command(about = "Populate a SQLite table with synthetic employee records", long_about = None)]
pub struct Args {
    /// SQLite database file (overrides the config file)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Table to create and fill (overrides the config file)
    #[arg(long)]
    pub table: Option<String>,

    /// Number of records to generate; prompts when omitted
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Append to existing rows instead of wiping them first
    #[arg(long)]
    pub no_wipe: bool,

    /// Random seed for reproducible data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Alternate config file (default: <config dir>/staffseed/config.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Read the config file this invocation points at and layer the flags over it.
    pub fn resolve_config(&self) -> Result<SeedConfig> {
        let base = match &self.config {
            Some(path) => SeedConfig::load_from(path)?,
            None => SeedConfig::load()?,
        };
        self.apply(base)
    }

    /// Flags win over file values. The resulting table name is validated here,
    /// before anything touches the database file.
    pub fn apply(&self, mut config: SeedConfig) -> Result<SeedConfig> {
        if let Some(db) = &self.db {
            config.db_path = db.clone();
        }
        if let Some(table) = &self.table {
            config.table = table.clone();
        }
        if self.no_wipe {
            config.wipe = false;
        }
        validate_table_name(&config.table)?;
        Ok(config)
    }
}
