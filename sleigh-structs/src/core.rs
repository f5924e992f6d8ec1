use serde::{Deserialize, Serialize};

/// One row of the gifts table. Fields are kept verbatim; nothing here is
/// parsed as a number except on demand.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Gift {
    pub id: String,
    pub latitude: String,
    pub longitude: String,
    pub weight: String,
}

impl Gift {
    pub fn new(
        id: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            weight: weight.into(),
        }
    }

    /// Id as a signed integer, ignoring surrounding whitespace.
    pub fn numeric_id(&self) -> Option<i64> {
        self.id.trim().parse().ok()
    }
}
