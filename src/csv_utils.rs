use std::io::Read;

use serde::Deserialize;

use crate::types::{Error, Row};

// Uploads name their columns inconsistently; the aliases cover the header
// spellings seen in real files. Cells are not trimmed here so unknown labels
// reach the report in their raw form.
#[derive(Deserialize, Debug)]
pub struct Input {
    #[serde(default, alias = "Material", alias = "materiaali", alias = "Materiaali")]
    material: Option<String>,
    #[serde(default, alias = "Weight", alias = "paino", alias = "Paino")]
    weight: Option<String>,
}

impl From<Input> for Row {
    fn from(inp: Input) -> Row {
        Row {
            material: inp.material,
            weight: inp.weight,
        }
    }
}

pub fn read_rows(reader: impl Read) -> Result<Vec<Row>, Error> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.deserialize::<Input>() {
        let input = record.map_err(|e| Error::Input(e.to_string()))?;
        rows.push(input.into());
    }
    Ok(rows)
}
