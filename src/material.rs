use std::collections::HashMap;
use std::fmt::Display;

use serde::Serialize;

use crate::types::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Paper,
    Plastic,
    Metal,
    Glass,
    Wood,
    Composite,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Paper => "paper",
            Category::Plastic => "plastic",
            Category::Metal => "metal",
            Category::Glass => "glass",
            Category::Wood => "wood",
            Category::Composite => "composite",
            Category::Other => "other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Synonyms are stored lowercase; includes the Finnish terms used in uploads.
const BUILTIN_SYNONYMS: &[(Category, &[&str])] = &[
    (
        Category::Paper,
        &["paper", "cardboard", "carton", "kartonki", "pahvi", "fiber"],
    ),
    (Category::Plastic, &["plastic", "muovi"]),
    (Category::Metal, &["metal", "metalli", "aluminum", "alu", "tin"]),
    (Category::Glass, &["glass", "lasi"]),
    (Category::Wood, &["wood", "puu"]),
    (Category::Composite, &["composite", "komposiitti"]),
    (Category::Other, &["other", "muu"]),
];

#[derive(Clone, Debug, PartialEq)]
pub struct SynonymTable {
    index: HashMap<String, Category>,
}

impl SynonymTable {
    pub fn builtin() -> SynonymTable {
        let mut index = HashMap::new();
        for (category, synonyms) in BUILTIN_SYNONYMS {
            for synonym in *synonyms {
                index.insert((*synonym).to_string(), *category);
            }
        }
        SynonymTable { index }
    }

    // Synonym sets must stay disjoint so resolution never needs a tie-break.
    // The builtin table is covered by a test against this same check.
    pub fn from_entries<I, S>(entries: I) -> Result<SynonymTable, Error>
    where
        I: IntoIterator<Item = (Category, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut index = HashMap::new();
        for (category, synonyms) in entries {
            for synonym in synonyms {
                let normalized = synonym.as_ref().trim().to_lowercase();
                if normalized.is_empty() {
                    return Err(Error::EmptySynonym(category));
                }
                if index.insert(normalized.clone(), category).is_some() {
                    return Err(Error::DuplicateSynonym(normalized));
                }
            }
        }
        Ok(SynonymTable { index })
    }

    pub fn resolve(&self, label: Option<&str>) -> Option<Category> {
        let normalized = label?.trim().to_lowercase();
        self.index.get(&normalized).copied()
    }
}
