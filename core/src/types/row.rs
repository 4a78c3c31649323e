use serde::Serialize;

/// One row of the full wide table (`Scene_Graph_Disease_Only`)
///
/// Metadata fields are copied verbatim from the source record; the three
/// derived columns come from the classifier and the reason cleaner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneRow {
    pub image_id: String,
    pub patient_id: String,
    pub study_id: String,
    pub gender: String,
    pub age_decile: String,
    pub reason_for_exam: Option<String>,
    #[serde(rename = "StudyDateTime")]
    pub study_datetime: String,
    pub attribute_category: String,
    pub disease_category: String,
    pub reason_clean: String,
}

impl SceneRow {
    /// CSV header, in column order
    pub const HEADERS: [&'static str; 10] = [
        "image_id",
        "patient_id",
        "study_id",
        "gender",
        "age_decile",
        "reason_for_exam",
        "StudyDateTime",
        "attribute_category",
        "disease_category",
        "reason_clean",
    ];
}

/// One row of the `lung_attribute_mapping` view
///
/// `visits` is a 1-based running count of the patient's records in
/// (patient_id, StudyDateTime) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitRow {
    pub image_id: String,
    pub patient_id: String,
    pub study_id: String,
    pub gender: String,
    pub age_decile: String,
    #[serde(rename = "StudyDateTime")]
    pub study_datetime: String,
    pub attribute_category: String,
    pub disease_category: String,
    pub reason_clean: String,
    pub visits: u32,
}

impl VisitRow {
    /// CSV header, in column order
    pub const HEADERS: [&'static str; 10] = [
        "image_id",
        "patient_id",
        "study_id",
        "gender",
        "age_decile",
        "StudyDateTime",
        "attribute_category",
        "disease_category",
        "reason_clean",
        "visits",
    ];
}

/// One row of the `hf_copd_df_topic_model` view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicRow {
    pub disease_category: String,
    pub reason_clean: String,
    pub patient_id: String,
    pub study_id: String,
    pub gender: String,
    pub age_decile: String,
    #[serde(rename = "StudyDateTime")]
    pub study_datetime: String,
}

impl TopicRow {
    /// CSV header, in column order
    pub const HEADERS: [&'static str; 7] = [
        "disease_category",
        "reason_clean",
        "patient_id",
        "study_id",
        "gender",
        "age_decile",
        "StudyDateTime",
    ];
}
