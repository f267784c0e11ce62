use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::model::{Availability, StationRecord};

/// Station list as served by the station API. The `retVal` mapping keys are
/// opaque station ids; values stay raw JSON here so that one malformed entry
/// does not discard the whole mapping. `IndexMap` keeps upstream order.
#[derive(Deserialize)]
pub struct StationList {
    #[serde(rename = "retVal")]
    pub ret_val: IndexMap<String, Value>,
}

#[derive(Deserialize)]
pub struct StationAttributes {
    pub name_tw: String,
    pub available_spaces: Option<Spaces>,
}

/* The API has served both `"available_spaces": 5` and `"available_spaces": "5"`. */
#[derive(Deserialize)]
#[serde(untagged)]
pub enum Spaces {
    Count(i64),
    Text(String),
}

impl From<StationAttributes> for StationRecord {
    fn from(attributes: StationAttributes) -> StationRecord {
        let available_spaces = match attributes.available_spaces {
            Some(Spaces::Count(n)) => Availability::Spaces(n),
            Some(Spaces::Text(s)) => s
                .trim()
                .parse()
                .map(Availability::Spaces)
                .unwrap_or(Availability::Unavailable),
            None => Availability::Unavailable,
        };

        StationRecord {
            name: attributes.name_tw,
            available_spaces,
        }
    }
}

impl StationList {
    /// Convert the raw mapping into station records, preserving upstream
    /// order. Entries that do not decode as station attributes are logged
    /// and skipped; the rest of the batch survives.
    pub fn records(self) -> Vec<StationRecord> {
        self.ret_val
            .into_iter()
            .filter_map(|(id, value)| {
                serde_json::from_value::<StationAttributes>(value)
                    .map_err(|e| log::warn!("Skipping undecodable station {}: {}", id, e))
                    .ok()
            })
            .map(StationRecord::from)
            .collect()
    }
}
