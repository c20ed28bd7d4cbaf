use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::parser::IndexEntry;

/// Open a fresh search index database, dropping any leftover from a previous
/// run. Dash and friends expect exactly this table shape.
pub fn create(db_path: &Path) -> Result<Connection> {
    // Stale index from an earlier build; ignore a missing file.
    let _ = fs::remove_file(db_path);

    let conn = Connection::open(db_path)
        .with_context(|| format!("Unable to create search index at {}", db_path.display()))?;
    conn.execute_batch(
        "CREATE TABLE searchIndex(id INTEGER PRIMARY KEY, name TEXT, type TEXT, path TEXT);",
    )?;
    Ok(conn)
}

/// Insert entries in one transaction, deduplicating on (name, type, path)
/// across everything passed in. Returns the number of rows written.
pub fn insert_entries(conn: &Connection, entries: &[IndexEntry]) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
    let mut count = 0;
    {
        let mut stmt =
            tx.prepare("INSERT INTO searchIndex(name, type, path) VALUES (?1, ?2, ?3)")?;
        for entry in entries {
            let label = entry.element_type.label();
            if seen.insert((entry.name.as_str(), label, entry.path.as_str())) {
                stmt.execute(rusqlite::params![entry.name, label, entry.path])?;
                count += 1;
            }
        }
    }
    tx.commit()?;
    Ok(count)
}
