use crate::types::{SceneRow, TopicRow, VisitRow};
use std::collections::{HashMap, HashSet};

/// Disease substrings selecting the longitudinal cohorts (matched
/// case-insensitively against disease_category)
pub const TARGET_DISEASES: [&str; 2] = ["copd/emphysema", "fluid overload/heart failure"];

/// Whether a disease_category belongs to one of the target cohorts
fn has_target_disease(disease_category: &str) -> bool {
    let lower = disease_category.to_lowercase();
    TARGET_DISEASES.iter().any(|d| lower.contains(d))
}

/// Builds the `lung_attribute_mapping` view
///
/// Projects the visit columns, drops duplicate rows (first occurrence kept,
/// compared before any case folding), lower-cases both category columns,
/// keeps rows in a target disease cohort, sorts by (patient_id,
/// StudyDateTime), then numbers each patient's rows 1-based in that order.
pub fn lung_attribute_mapping(rows: &[SceneRow]) -> Vec<VisitRow> {
    let mut seen = HashSet::new();
    let mut view: Vec<VisitRow> = rows
        .iter()
        .map(|row| VisitRow {
            image_id: row.image_id.clone(),
            patient_id: row.patient_id.clone(),
            study_id: row.study_id.clone(),
            gender: row.gender.clone(),
            age_decile: row.age_decile.clone(),
            study_datetime: row.study_datetime.clone(),
            attribute_category: row.attribute_category.clone(),
            disease_category: row.disease_category.clone(),
            reason_clean: row.reason_clean.clone(),
            visits: 0,
        })
        .filter(|row| seen.insert(dedup_key_visit(row)))
        .map(|mut row| {
            row.attribute_category = row.attribute_category.to_lowercase();
            row.disease_category = row.disease_category.to_lowercase();
            row
        })
        .filter(|row| has_target_disease(&row.disease_category))
        .collect();

    view.sort_by(|a, b| {
        (&a.patient_id, &a.study_datetime).cmp(&(&b.patient_id, &b.study_datetime))
    });

    let mut counters: HashMap<String, u32> = HashMap::new();
    for row in &mut view {
        let count = counters.entry(row.patient_id.clone()).or_insert(0);
        *count += 1;
        row.visits = *count;
    }

    view
}

/// Builds the `hf_copd_df_topic_model` view
///
/// Same disease filter and sort as the visit mapping, fewer columns, no
/// visit numbering. Duplicates are likewise dropped before case folding.
pub fn topic_model(rows: &[SceneRow]) -> Vec<TopicRow> {
    let mut seen = HashSet::new();
    let mut view: Vec<TopicRow> = rows
        .iter()
        .map(|row| TopicRow {
            disease_category: row.disease_category.clone(),
            reason_clean: row.reason_clean.clone(),
            patient_id: row.patient_id.clone(),
            study_id: row.study_id.clone(),
            gender: row.gender.clone(),
            age_decile: row.age_decile.clone(),
            study_datetime: row.study_datetime.clone(),
        })
        .filter(|row| seen.insert(dedup_key_topic(row)))
        .map(|mut row| {
            row.disease_category = row.disease_category.to_lowercase();
            row
        })
        .filter(|row| has_target_disease(&row.disease_category))
        .collect();

    view.sort_by(|a, b| {
        (&a.patient_id, &a.study_datetime).cmp(&(&b.patient_id, &b.study_datetime))
    });

    view
}

fn dedup_key_visit(row: &VisitRow) -> (String, String, String, String, String, String, String, String, String) {
    (
        row.image_id.clone(),
        row.patient_id.clone(),
        row.study_id.clone(),
        row.gender.clone(),
        row.age_decile.clone(),
        row.study_datetime.clone(),
        row.attribute_category.clone(),
        row.disease_category.clone(),
        row.reason_clean.clone(),
    )
}

fn dedup_key_topic(row: &TopicRow) -> (String, String, String, String, String, String, String) {
    (
        row.disease_category.clone(),
        row.reason_clean.clone(),
        row.patient_id.clone(),
        row.study_id.clone(),
        row.gender.clone(),
        row.age_decile.clone(),
        row.study_datetime.clone(),
    )
}
