use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of the stats scoreboard endpoint: a list of tabular result sets.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreboardResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ScoreboardResponse {
    pub fn result_set(&self, name: &str) -> Option<&ResultSet> {
        self.result_sets.iter().find(|rs| rs.name == name)
    }
}

impl ResultSet {
    /// Zip the header row onto every data row, one object per row.
    pub fn normalized(&self) -> Vec<Map<String, Value>> {
        self.row_set
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect::<Map<String, Value>>()
            })
            .collect()
    }
}
