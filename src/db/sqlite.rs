use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection};
use tracing::debug;

use super::{validate_table_name, Records};
use crate::record::Employee;

pub fn open(path: &Path) -> Result<Connection> {
    debug!(path = %path.display(), "sqlite: opening");
    let conn = Connection::open(path)
        .with_context(|| format!("failed to open sqlite database at {}", path.display()))?;
    Ok(conn)
}

fn close(conn: Connection) -> Result<()> {
    conn.close().map_err(|(_, e)| e)?;
    Ok(())
}

/// Create the employee table if it does not exist yet. Uses its own connection.
pub fn create_table(path: &Path, table: &str) -> Result<()> {
    validate_table_name(table)?;
    let conn = open(path)?;
    conn.execute_batch(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            age INTEGER,
            salary TEXT,
            hire_date TEXT
        );
        "#
    ))
    .with_context(|| format!("failed to create table '{table}'"))?;
    close(conn)
}

/// Delete every row, then reset the AUTOINCREMENT counter so ids restart at 1.
/// Each statement commits on its own.
pub fn wipe_table(conn: &Connection, table: &str) -> Result<usize> {
    validate_table_name(table)?;
    let deleted = conn
        .execute(&format!("DELETE FROM {table}"), [])
        .with_context(|| format!("failed to wipe table '{table}'"))?;
    conn.execute("DELETE FROM sqlite_sequence WHERE name = ?1", params![table])
        .with_context(|| format!("failed to reset identity for table '{table}'"))?;
    debug!(table, deleted, "sqlite: wiped");
    Ok(deleted)
}

/// Insert all rows inside one transaction; nothing is visible until the commit.
pub fn insert_employees(conn: &mut Connection, table: &str, employees: &[Employee]) -> Result<usize> {
    validate_table_name(table)?;
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO {table} (name, age, salary, hire_date) VALUES (?1, ?2, ?3, ?4)"
        ))?;
        for e in employees {
            stmt.execute(params![e.name, e.age, e.salary, e.hire_date])
                .with_context(|| format!("failed to insert '{}' into '{table}'", e.name))?;
        }
    }
    tx.commit()?;
    Ok(employees.len())
}

/// Read the whole table in id order.
pub fn fetch_records(conn: &Connection, table: &str) -> Result<Records> {
    validate_table_name(table)?;
    let mut stmt = conn.prepare(&format!("SELECT * FROM {table} ORDER BY id"))?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let col_count = columns.len();

    // read ValueRef per column and stringify conservatively
    let mut rows_vec: Vec<Vec<String>> = Vec::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut v = Vec::with_capacity(col_count);
        for i in 0..col_count {
            let s = match row.get_ref(i)? {
                ValueRef::Null => String::new(),
                ValueRef::Integer(i) => i.to_string(),
                ValueRef::Real(f) => f.to_string(),
                ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
                ValueRef::Blob(b) => format!("<blob {} bytes>", b.len()),
            };
            v.push(s);
        }
        rows_vec.push(v);
    }

    Ok(Records { columns, rows: rows_vec })
}
