//! Plain-text table rendering for key records.
//!
//! Columns are padded to the widest cell using display width, so names
//! with wide characters still line up.

use crate::error::{KeyError, Result};
use crate::model::KeyRecord;
use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthStr;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const COLUMN_GAP: usize = 2;

/// Render the key listing: a `Name` / `Created` table, one row per record
/// in input order. An empty input renders the header only.
pub fn render_list(records: &[KeyRecord]) -> String {
    let mut rows = vec![vec!["Name".to_string(), "Created".to_string()]];
    for record in records {
        rows.push(vec![
            record.name.clone(),
            format_timestamp(record.inserted_at),
        ]);
    }
    layout(&rows)
}

/// Render the detail view of a single key.
///
/// A record the registry returns without its `last_use` entry violates the
/// fetch contract; that is reported as [`KeyError::MalformedResult`] rather
/// than rendered with holes.
pub fn render_detail(record: &KeyRecord) -> Result<String> {
    let last_use = record.last_use.as_ref().ok_or_else(|| {
        KeyError::MalformedResult(format!("key {} is missing its last_use entry", record.name))
    })?;

    let rows = vec![
        vec![
            "Name".to_string(),
            "Created".to_string(),
            "Updated".to_string(),
            "LastUsed".to_string(),
            "LastUsedBy".to_string(),
        ],
        vec![
            record.name.clone(),
            format_timestamp(record.inserted_at),
            format_timestamp(record.updated_at),
            format_timestamp(last_use.used_at),
            last_use.ip.clone(),
        ],
    ];
    Ok(layout(&rows))
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

fn layout(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(cell);
            if i + 1 < row.len() {
                let padding = widths[i].saturating_sub(cell.width()) + COLUMN_GAP;
                line.push_str(&" ".repeat(padding));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
