//! Aggregate statistics over all pets

use serde::{Deserialize, Serialize};

/// Pet count for one distinct type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeStatistic {
    #[serde(rename = "type")]
    pub pet_type: String,
    pub count: i64,
}

/// Snapshot of the pet population, grouped by type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_pets: i64,
    pub type_statistics: Vec<TypeStatistic>,
}

impl Analytics {
    /// Assemble analytics from statistics rows in the order they were read.
    ///
    /// Each row carries the global total alongside its own type count; the
    /// total is identical on every row, so the first one is used. No rows
    /// means an empty table.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (i64, TypeStatistic)>,
    {
        let mut total_pets = None;
        let type_statistics = rows
            .into_iter()
            .map(|(total, stat)| {
                total_pets.get_or_insert(total);
                stat
            })
            .collect();

        Self {
            total_pets: total_pets.unwrap_or(0),
            type_statistics,
        }
    }
}
