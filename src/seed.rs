use std::io::Write;
use std::path::Path;

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info};

use crate::db::{self, Records};
use crate::format::format_table;
use crate::names::generate_names;
use crate::record::Employee;

/// What one seeding pass did, plus the table as read back afterwards.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub wiped: Option<usize>,
    pub inserted: usize,
    pub records: Records,
}

/// Make sure the table exists and report it.
pub fn prepare_table<W: Write>(path: &Path, table: &str, out: &mut W) -> Result<()> {
    db::create_table(path, table)?;
    info!(table, path = %path.display(), "table ready");
    writeln!(out, "Table '{table}' is ready.")?;
    Ok(())
}

/// Optionally wipe, insert `count` synthetic employees, then print the whole table.
pub fn generate_data<R: Rng + ?Sized, W: Write>(
    path: &Path,
    table: &str,
    count: usize,
    wipe: bool,
    rng: &mut R,
    out: &mut W,
) -> Result<SeedReport> {
    let mut conn = db::open(path)?;

    let wiped = if wipe {
        let deleted = db::wipe_table(&conn, table)?;
        writeln!(out, "Existing data in table '{table}' has been wiped.")?;
        writeln!(out, "Identity column for table '{table}' has been reset.")?;
        Some(deleted)
    } else {
        None
    };

    let today = chrono::Local::now().date_naive();
    let employees: Vec<Employee> = generate_names(rng, count)?
        .iter()
        .map(|(first, last)| Employee::random(rng, first, last, today))
        .collect();
    debug!(count = employees.len(), "generated employees");

    let inserted = db::insert_employees(&mut conn, table, &employees)?;
    info!(table, inserted, "rows inserted");
    writeln!(out, "{inserted} records inserted into table '{table}'.")?;

    let records = db::fetch_records(&conn, table)?;
    writeln!(out, "\nData in table '{table}':")?;
    if records.is_empty() {
        writeln!(out, "No data found in the table.")?;
    } else {
        writeln!(out, "{}", format_table(&records.columns, &records.rows))?;
    }

    conn.close().map_err(|(_, e)| e)?;
    Ok(SeedReport { wiped, inserted, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tempfile::TempDir;

    fn seed(path: &Path, count: usize, wipe: bool, seed: u64) -> (SeedReport, String) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut out = Vec::new();
        let report = generate_data(path, "employees", count, wipe, &mut rng, &mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    fn ids(report: &SeedReport) -> Vec<i64> {
        report.records.rows.iter().map(|r| r[0].parse().unwrap()).collect()
    }

    #[test]
    fn fresh_table_with_wipe_yields_exact_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.db");
        let mut out = Vec::new();
        prepare_table(&path, "employees", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Table 'employees' is ready.\n");

        let (report, printed) = seed(&path, 5, true, 1);
        assert_eq!(report.wiped, Some(0));
        assert_eq!(report.inserted, 5);
        assert_eq!(ids(&report), [1, 2, 3, 4, 5]);

        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines[0], "Existing data in table 'employees' has been wiped.");
        assert_eq!(lines[1], "Identity column for table 'employees' has been reset.");
        assert_eq!(lines[2], "5 records inserted into table 'employees'.");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Data in table 'employees':");

        let header: Vec<&str> = lines[5].split(" | ").map(str::trim).collect();
        assert_eq!(header, ["id", "name", "age", "salary", "hire_date"]);
        assert!(lines[6].chars().all(|c| c == '-' || c == '+'));

        let table = &lines[5..];
        assert_eq!(table.len(), 7);
        let width = table[0].chars().count();
        assert!(table.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn wipe_restarts_ids_at_one() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.db");
        prepare_table(&path, "employees", &mut Vec::new()).unwrap();

        seed(&path, 4, false, 2);
        let (report, _) = seed(&path, 2, true, 3);
        assert_eq!(report.wiped, Some(4));
        assert_eq!(ids(&report), [1, 2]);
    }

    #[test]
    fn appending_continues_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.db");
        prepare_table(&path, "employees", &mut Vec::new()).unwrap();

        let (first, printed) = seed(&path, 3, false, 4);
        assert_eq!(ids(&first), [1, 2, 3]);
        assert!(!printed.contains("wiped"));

        let (second, _) = seed(&path, 2, false, 5);
        assert_eq!(second.wiped, None);
        assert_eq!(ids(&second), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn zero_records_prints_empty_notice() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.db");
        prepare_table(&path, "employees", &mut Vec::new()).unwrap();

        let (report, printed) = seed(&path, 0, true, 6);
        assert_eq!(report.inserted, 0);
        assert!(report.records.is_empty());
        assert!(printed.ends_with("Data in table 'employees':\nNo data found in the table.\n"));
    }

    #[test]
    fn stored_rows_hold_valid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.db");
        prepare_table(&path, "employees", &mut Vec::new()).unwrap();

        let (report, _) = seed(&path, 50, true, 7);
        let today = chrono::Local::now().date_naive();
        let mut tokens = std::collections::HashSet::new();
        for row in &report.records.rows {
            let (first, last) = row[1].split_once(' ').unwrap();
            assert!(tokens.insert(first.to_string()));
            assert!(tokens.insert(last.to_string()));

            let age: u32 = row[2].parse().unwrap();
            assert!((18..=65).contains(&age));
            assert!(row[3].starts_with('$'));

            let hired = chrono::NaiveDate::parse_from_str(&row[4], "%m/%d/%Y").unwrap();
            assert!(hired >= crate::record::hire_date_start() && hired <= today);
        }
    }

    #[test]
    fn missing_table_aborts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.db");
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let res = generate_data(&path, "employees", 3, false, &mut rng, &mut Vec::new());
        assert!(res.is_err());
    }
}
