//! Table assembly: the full wide table plus its derived views

mod views;
mod writer;

pub use views::{lung_attribute_mapping, topic_model, TARGET_DISEASES};
pub use writer::{
    write_tables, Tables, TOPIC_MODEL_FILE, VISIT_MAPPING_FILE, WIDE_TABLE_FILE,
};

use crate::extraction::{classify, clean_reason, Domain};
use crate::types::{SceneGraphRecord, SceneRow};

/// Builds the full wide table: one row per record, metadata plus the three
/// derived columns
pub fn build_rows(records: &[SceneGraphRecord]) -> Vec<SceneRow> {
    records.iter().map(build_row).collect()
}

fn build_row(record: &SceneGraphRecord) -> SceneRow {
    SceneRow {
        image_id: record.image_id.clone(),
        patient_id: record.patient_id.clone(),
        study_id: record.study_id.clone(),
        gender: record.gender.clone(),
        age_decile: record.age_decile.clone(),
        reason_for_exam: record.reason_for_exam.clone(),
        study_datetime: record.study_datetime.clone(),
        attribute_category: classify(&record.attributes, Domain::AnatomicalFinding),
        disease_category: classify(&record.attributes, Domain::Disease),
        reason_clean: clean_reason(record.reason_for_exam.as_deref()),
    }
}
