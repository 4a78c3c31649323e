use crate::error::Result;
use crate::types::{SceneRow, TopicRow, VisitRow};
use csv::WriterBuilder;
use log::info;
use serde::Serialize;
use std::path::Path;

/// Output file name for the full wide table
pub const WIDE_TABLE_FILE: &str = "Scene_Graph_Disease_Only.csv";

/// Output file name for the visit-numbered view
pub const VISIT_MAPPING_FILE: &str = "lung_attribute_mapping.csv";

/// Output file name for the topic-model view
pub const TOPIC_MODEL_FILE: &str = "hf_copd_df_topic_model.csv";

/// The three output tables of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    pub wide: Vec<SceneRow>,
    pub lung_attribute_mapping: Vec<VisitRow>,
    pub topic_model: Vec<TopicRow>,
}

/// Writes all three tables as CSV files into `out_dir`
///
/// Each file gets a header row even when the table is empty; no index
/// column is written.
///
/// # Errors
///
/// Returns an error if the destination is unwritable or serialization
/// fails. Partial output may exist on failure; callers treat the run as
/// failed outright.
pub fn write_tables(tables: &Tables, out_dir: &Path) -> Result<()> {
    write_csv(&tables.wide, &SceneRow::HEADERS, &out_dir.join(WIDE_TABLE_FILE))?;
    write_csv(
        &tables.lung_attribute_mapping,
        &VisitRow::HEADERS,
        &out_dir.join(VISIT_MAPPING_FILE),
    )?;
    write_csv(
        &tables.topic_model,
        &TopicRow::HEADERS,
        &out_dir.join(TOPIC_MODEL_FILE),
    )?;
    Ok(())
}

/// Writes one table with an explicit header record
fn write_csv<T: Serialize>(rows: &[T], headers: &[&str], path: &Path) -> Result<()> {
    // Header is written explicitly so empty tables still carry one.
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_tables() -> Tables {
        let wide = vec![SceneRow {
            image_id: "i1".to_string(),
            patient_id: "p1".to_string(),
            study_id: "s1".to_string(),
            gender: "F".to_string(),
            age_decile: "40-50".to_string(),
            reason_for_exam: Some("___F with cough".to_string()),
            study_datetime: "2180-01-01 09:00:00".to_string(),
            attribute_category: "lung opacity".to_string(),
            disease_category: "copd/emphysema".to_string(),
            reason_clean: " with cough".to_string(),
        }];
        let lung_attribute_mapping = vec![VisitRow {
            image_id: "i1".to_string(),
            patient_id: "p1".to_string(),
            study_id: "s1".to_string(),
            gender: "F".to_string(),
            age_decile: "40-50".to_string(),
            study_datetime: "2180-01-01 09:00:00".to_string(),
            attribute_category: "lung opacity".to_string(),
            disease_category: "copd/emphysema".to_string(),
            reason_clean: " with cough".to_string(),
            visits: 1,
        }];
        let topic_model = vec![TopicRow {
            disease_category: "copd/emphysema".to_string(),
            reason_clean: " with cough".to_string(),
            patient_id: "p1".to_string(),
            study_id: "s1".to_string(),
            gender: "F".to_string(),
            age_decile: "40-50".to_string(),
            study_datetime: "2180-01-01 09:00:00".to_string(),
        }];
        Tables {
            wide,
            lung_attribute_mapping,
            topic_model,
        }
    }

    #[test]
    fn test_write_tables_creates_all_files() {
        let dir = TempDir::new().unwrap();
        write_tables(&sample_tables(), dir.path()).unwrap();

        for file in [WIDE_TABLE_FILE, VISIT_MAPPING_FILE, TOPIC_MODEL_FILE] {
            assert!(dir.path().join(file).is_file(), "missing {file}");
        }
    }

    #[test]
    fn test_round_trip_preserves_rows_and_columns() {
        let dir = TempDir::new().unwrap();
        let tables = sample_tables();
        write_tables(&tables, dir.path()).unwrap();

        let mut reader = csv::Reader::from_path(dir.path().join(VISIT_MAPPING_FILE)).unwrap();
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(headers, VisitRow::HEADERS);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), tables.lung_attribute_mapping.len());
        assert_eq!(rows[0].get(9), Some("1")); // visits column
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let dir = TempDir::new().unwrap();
        let tables = Tables {
            wide: Vec::new(),
            lung_attribute_mapping: Vec::new(),
            topic_model: Vec::new(),
        };
        write_tables(&tables, dir.path()).unwrap();

        let mut reader = csv::Reader::from_path(dir.path().join(WIDE_TABLE_FILE)).unwrap();
        assert_eq!(reader.headers().unwrap().len(), SceneRow::HEADERS.len());
        assert_eq!(reader.records().count(), 0);
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(write_tables(&sample_tables(), &missing).is_err());
    }
}
