use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Document;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Date,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Date => "date",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "name" => Ok(SortField::Name),
            // "created" mirrors the column heading.
            "date" | "created" => Ok(SortField::Date),
            other => anyhow::bail!("unknown sort field `{}` (expected name|date)", other),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flip(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "^",
            SortOrder::Desc => "v",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => anyhow::bail!("unknown sort order `{}` (expected asc|desc)", other),
        }
    }
}

/// Client-side mirror of the remote document list.
///
/// `items` is kept in whatever order the server returned for
/// `(sort_field, sort_order)`; it is never re-sorted locally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionView {
    pub items: Vec<Document>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub error: Option<String>,

    /// Document most recently opened for editing.
    pub current: Option<Document>,

    // Fencing for list fetches: `fetch_seq` is handed out on every fetch,
    // `applied_seq` is the newest fetch whose outcome reached the state.
    pub fetch_seq: u64,
    pub applied_seq: u64,
}
