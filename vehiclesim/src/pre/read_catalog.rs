use crate::core::vehicle::Catalog;
use anyhow::Context;
use std::fs::OpenOptions;
use std::path::Path;

/// read_catalog reads the JSON file and decodes the JSON string into the vehicle catalog struct.
pub fn read_catalog(filepath: &Path) -> anyhow::Result<Catalog> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open catalog file {}!",
            filepath.to_str().unwrap()
        ))?;

    // read and parse catalog file content
    let catalog = serde_json::from_reader(&fh).context(format!(
        "Failed to parse catalog file {}!",
        filepath.to_str().unwrap()
    ))?;
    Ok(catalog)
}
