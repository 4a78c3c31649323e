pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod tables;
pub mod types;

pub use api::{build_tables, collect_json_files, load_records, run};
pub use error::{Result, SceneTabError};
pub use extraction::{classify, clean_reason, Domain};
pub use tables::{build_rows, lung_attribute_mapping, topic_model, write_tables, Tables};
pub use types::*;
