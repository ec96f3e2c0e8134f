use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::models::FilteredRecord;

/// Two lines: everything GitHub matched, then what survived the star filter.
pub fn print_counts<W: Write>(out: &mut W, unfiltered: u64, filtered: usize) -> io::Result<()> {
    writeln!(out, "{}", unfiltered)?;
    writeln!(out, "{}", filtered)?;
    out.flush()
}

pub async fn save_records(path: &Path, records: &[FilteredRecord]) -> Result<()> {
    let json = serde_json::to_vec_pretty(records)?;
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&json).await?;
    writer.flush().await?;
    Ok(())
}
