use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description;

pub type DocumentId = i64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Durable encoding of the grid; see `content::decode`.
    #[serde(default)]
    pub content: String,

    pub created_date: String,

    #[serde(default)]
    pub modified_date: Option<String>,

    #[serde(default)]
    pub user_id: Option<i64>,
}

impl Document {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Calendar day of `created_date`, falling back to the raw string when the
    /// server sends something that is not an ISO-8601 timestamp.
    pub fn created_day(&self) -> String {
        parse_day(&self.created_date)
            .map(|d| d.to_string())
            .unwrap_or_else(|| self.created_date.clone())
    }
}

fn parse_day(s: &str) -> Option<Date> {
    let day = s.get(..10)?;
    let fmt = format_description::parse("[year]-[month]-[day]").ok()?;
    Date::parse(day, &fmt).ok()
}

/// Body for create/update requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPayload {
    pub name: String,
    pub description: String,
    pub content: String,
}
