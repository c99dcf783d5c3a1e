//! Wire and storage types for the notes resource

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A stored record. `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Record {
    pub id: i32,
    pub name: String,
    pub lastname: String,
}

/// Create payload, forwarded to the store as-is.
///
/// Missing fields stay `None` and reach the store as NULL; the store's
/// NOT NULL constraint decides what happens to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewRecord {
    pub name: Option<String>,
    pub lastname: Option<String>,
}

impl NewRecord {
    pub fn new(name: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            lastname: Some(lastname.into()),
        }
    }

    /// Pick `name` and `lastname` out of a parsed request body.
    ///
    /// Only string members of a JSON object count. Arrays, scalars and
    /// non-string members all come out as `None`.
    pub fn from_body(body: &Value) -> Self {
        let field = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            name: field("name"),
            lastname: field("lastname"),
        }
    }
}

/// Response body for `POST /notes`.
///
/// The `newname` key is part of the public wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    pub newname: Record,
}
