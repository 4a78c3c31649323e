use crate::error::{Result, SceneTabError};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

/// One scene-graph attribute triple: `category|yes_or_no|label`
///
/// Triples are encoded in the source JSON as a single string, delimited by
/// commas at the top level and by `|` within each triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTriple {
    /// Attribute domain, e.g. contains "anatomicalfinding" or "disease"
    pub category: String,

    /// Presence flag; only the literal "yes" counts as present
    pub flag: String,

    /// Value name, e.g. "lung opacity"
    pub label: String,
}

impl AttributeTriple {
    /// Whether this attribute is flagged as present
    pub fn is_present(&self) -> bool {
        self.flag == "yes"
    }
}

/// Raw JSON shape of a scene-graph annotation file
///
/// All keys are required; a missing key fails deserialization and therefore
/// the whole run. Id fields tolerate numeric JSON values and are carried as
/// strings throughout.
#[derive(Debug, Deserialize)]
struct RawSceneGraph {
    attributes: String,
    #[serde(deserialize_with = "string_or_number")]
    image_id: String,
    #[serde(deserialize_with = "string_or_number")]
    patient_id: String,
    #[serde(deserialize_with = "string_or_number")]
    study_id: String,
    gender: String,
    #[serde(deserialize_with = "string_or_number")]
    age_decile: String,
    #[serde(deserialize_with = "nullable_string")]
    reason_for_exam: Option<String>,
    #[serde(rename = "StudyDateTime", deserialize_with = "string_or_number")]
    study_datetime: String,
}

/// One loaded scene-graph record: the seven metadata fields plus the
/// parsed attribute triples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneGraphRecord {
    pub image_id: String,
    pub patient_id: String,
    pub study_id: String,
    pub gender: String,
    pub age_decile: String,
    /// Free-text exam reason; null in the source JSON maps to `None`
    pub reason_for_exam: Option<String>,
    /// `StudyDateTime` in the source JSON
    pub study_datetime: String,
    pub attributes: Vec<AttributeTriple>,
}

impl SceneGraphRecord {
    /// Loads a record from a scene-graph JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a required key is
    /// missing, or an attribute triple does not have exactly three
    /// `|`-delimited fields.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| SceneTabError::LoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let raw: RawSceneGraph =
            serde_json::from_str(&contents).map_err(|e| SceneTabError::LoadError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::from_raw(raw)
    }

    /// Loads a record from an in-memory JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawSceneGraph =
            serde_json::from_str(json).map_err(|e| SceneTabError::LoadError {
                path: PathBuf::from("<json>"),
                message: e.to_string(),
            })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSceneGraph) -> Result<Self> {
        let attributes = parse_attributes(&raw.attributes, &raw.image_id)?;
        Ok(Self {
            image_id: raw.image_id,
            patient_id: raw.patient_id,
            study_id: raw.study_id,
            gender: raw.gender,
            age_decile: raw.age_decile,
            reason_for_exam: raw.reason_for_exam,
            study_datetime: raw.study_datetime,
            attributes,
        })
    }
}

/// Parses an attributes string into triples
///
/// An empty or whitespace-only string yields no triples. Any chunk without
/// exactly three `|`-delimited fields fails the record (fail-fast policy;
/// the source data provides no meaning for partial triples).
pub fn parse_attributes(attributes: &str, record_id: &str) -> Result<Vec<AttributeTriple>> {
    if attributes.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut triples = Vec::new();
    for chunk in attributes.split(',') {
        let fields: Vec<&str> = chunk.split('|').collect();
        if fields.len() != 3 {
            return Err(SceneTabError::MalformedAttribute {
                record_id: record_id.to_string(),
                chunk: chunk.to_string(),
            });
        }
        triples.push(AttributeTriple {
            category: fields[0].to_string(),
            flag: fields[1].to_string(),
            label: fields[2].to_string(),
        });
    }
    Ok(triples)
}

/// Deserializes a JSON string or number into a string
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

/// Deserializes a nullable JSON string; the key itself is still required
fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}
