//! Package file loading.
//!
//! Readings are stored as JSONL (JSON Lines), one `{"code", "values"}`
//! object per line. The file is read under a shared lock so a tracker
//! appending under an exclusive lock never hands us a torn line.

use crate::{Error, Package, Result};
use fs2::FileExt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read all packages from a JSONL file, in file order
pub fn read_packages(path: &Path) -> Result<Vec<Package>> {
    let file = File::open(path)?;
    // Acquire shared lock for reading
    FileExt::lock_shared(&file)?;

    let reader = BufReader::new(&file);
    let mut packages = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        let package: Package = serde_json::from_str(&line).map_err(|e| Error::Json {
            line: line_num + 1,
            source: e,
        })?;
        packages.push(package);
    }

    FileExt::unlock(&file)?;

    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}
