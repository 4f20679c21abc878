use std::collections::{BTreeMap, HashSet};

use crate::material::{Category, SynonymTable};
use crate::types::{AggregationResult, InvalidRow, Row, INVALID_ROW_MESSAGE};

#[derive(Debug)]
pub struct Aggregator<'a> {
    table: &'a SynonymTable,
    totals: BTreeMap<Category, f64>,
    invalid_rows: Vec<InvalidRow>,
    unknown_materials: HashSet<String>,
}

impl<'a> Aggregator<'a> {
    pub fn new(table: &'a SynonymTable) -> Aggregator<'a> {
        Aggregator {
            table,
            totals: BTreeMap::new(),
            invalid_rows: Vec::new(),
            unknown_materials: HashSet::new(),
        }
    }

    // Every row lands in exactly one bucket: totals, invalid or unknown.
    // Validation runs before resolution, so a row with a bad weight and an
    // unrecognized material counts as invalid, not unknown.
    pub fn process_row(&mut self, row: Row) {
        let material_present = row.material.as_deref().is_some_and(|label| !label.is_empty());
        let weight = row.weight.as_deref().and_then(parse_weight);

        match weight {
            Some(weight) if material_present => {
                match self.table.resolve(row.material.as_deref()) {
                    Some(category) => *self.totals.entry(category).or_insert(0.0) += weight,

                    None => {
                        // Unknown labels keep their raw spelling so the
                        // report can echo exactly what the file contained.
                        if let Some(label) = row.material {
                            self.unknown_materials.insert(label);
                        }
                    }
                }
            }

            _ => self.invalid_rows.push(InvalidRow {
                row,
                message: INVALID_ROW_MESSAGE.to_string(),
            }),
        }
    }

    pub fn into_result(self) -> AggregationResult {
        AggregationResult {
            totals: self.totals,
            invalid_rows: self.invalid_rows,
            unknown_materials: self.unknown_materials,
        }
    }
}

pub fn aggregate<I>(table: &SynonymTable, rows: I) -> AggregationResult
where
    I: IntoIterator<Item = Row>,
{
    let mut aggregator = Aggregator::new(table);
    for row in rows {
        aggregator.process_row(row);
    }
    aggregator.into_result()
}

fn parse_weight(raw: &str) -> Option<f64> {
    let weight: f64 = raw.trim().parse().ok()?;
    (weight.is_finite() && weight >= 0.0).then_some(weight)
}
