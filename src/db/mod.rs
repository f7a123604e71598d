mod sqlite;

use anyhow::{bail, Result};

pub use sqlite::{create_table, fetch_records, insert_employees, open, wipe_table};

const MAX_TABLE_NAME_LEN: usize = 64;

/// A table read back in full, every cell already stringified.
#[derive(Debug, Clone)]
pub struct Records {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>, // each inner Vec is a row of stringified values
}

impl Records {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Table names are interpolated into SQL text, so only plain identifiers pass.
pub fn validate_table_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        bail!("table name must not be empty");
    };
    if name.len() > MAX_TABLE_NAME_LEN {
        bail!("table name '{name}' is longer than {MAX_TABLE_NAME_LEN} characters");
    }
    if !(first.is_ascii_alphabetic() || first == '_') {
        bail!("table name '{name}' must start with a letter or underscore");
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        bail!("table name '{name}' may only contain letters, digits and underscores");
    }
    if name.to_ascii_lowercase().starts_with("sqlite_") {
        bail!("table name '{name}' uses the reserved sqlite_ prefix");
    }
    Ok(())
}
