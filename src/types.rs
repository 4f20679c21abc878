use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::material::Category;

// Rejection text carried verbatim in the response payload; one message covers
// every validation failure (missing material, unparseable or negative weight).
pub const INVALID_ROW_MESSAGE: &str = "Puuttuva tai virheellinen materiaali tai paino";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Row {
    pub material: Option<String>,
    pub weight: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InvalidRow {
    pub row: Row,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AggregationResult {
    pub totals: BTreeMap<Category, f64>,
    pub invalid_rows: Vec<InvalidRow>,
    pub unknown_materials: HashSet<String>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Error in input data: `{0}`.")]
    Input(String),
    #[error("Duplicate synonym `{0}` in material table")]
    DuplicateSynonym(String),
    #[error("Empty synonym for category {0}")]
    EmptySynonym(Category),
    #[error("Serialization error: {0}")]
    Serialization(String),
}
