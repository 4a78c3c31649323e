//! Core type definitions for scene-graph flattening
//!
//! This module provides the fundamental types used throughout the scenetab
//! library:
//! - [`AttributeTriple`]: one parsed `category|yes_or_no|label` attribute
//! - [`SceneGraphRecord`]: one loaded scene-graph JSON record
//! - [`SceneRow`]: one row of the full wide table
//! - [`VisitRow`]: one row of the lung_attribute_mapping view
//! - [`TopicRow`]: one row of the hf_copd_df_topic_model view

mod record;
mod row;

pub use record::{parse_attributes, AttributeTriple, SceneGraphRecord};
pub use row::{SceneRow, TopicRow, VisitRow};
