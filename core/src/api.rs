use crate::error::Result;
use crate::tables::{build_rows, lung_attribute_mapping, topic_model, write_tables, Tables};
use crate::types::SceneGraphRecord;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Collects scene-graph JSON files from a directory (non-recursive)
///
/// Files are matched by a case-insensitive `.json` extension and returned
/// sorted by path for deterministic processing order.
pub fn collect_json_files(directory: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(ext) = path.extension() {
                if ext.eq_ignore_ascii_case("json") {
                    files.push(path);
                }
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Loads every record from a collection of JSON files
///
/// Any unreadable file, missing key, or malformed attribute triple aborts
/// the whole run; downstream tables assume complete metadata.
pub fn load_records(files: &[PathBuf]) -> Result<Vec<SceneGraphRecord>> {
    let mut records = Vec::with_capacity(files.len());
    for path in files {
        let record = SceneGraphRecord::from_file(path)?;
        debug!("Loaded {}", path.display());
        records.push(record);
    }
    Ok(records)
}

/// Derives all three tables from a loaded record collection
pub fn build_tables(records: &[SceneGraphRecord]) -> Tables {
    let wide = build_rows(records);
    let lung = lung_attribute_mapping(&wide);
    let topic = topic_model(&wide);
    Tables {
        wide,
        lung_attribute_mapping: lung,
        topic_model: topic,
    }
}

/// Runs the full pipeline: discover, load, derive, write
///
/// # Errors
///
/// Returns an error on the first unreadable or malformed record, or if the
/// output destination is unwritable. No retries; a run completes or fails
/// outright.
pub fn run(input_dir: &Path, output_dir: &Path) -> Result<Tables> {
    let files = collect_json_files(input_dir)?;
    info!("Found {} JSON files in {}", files.len(), input_dir.display());

    let records = load_records(&files)?;
    info!("Loaded {} records", records.len());

    let tables = build_tables(&records);
    info!(
        "Derived tables: {} wide rows, {} visit rows, {} topic rows",
        tables.wide.len(),
        tables.lung_attribute_mapping.len(),
        tables.topic_model.len()
    );

    write_tables(&tables, output_dir)?;
    Ok(tables)
}
