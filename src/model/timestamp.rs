//! Row timestamps, stored as RFC 3339 text so one schema serves every backend.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Text form written to `created_at` / `updated_at`.
    pub fn to_db(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = chrono::ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        DateTime::parse_from_rfc3339(&s).map(|d| Timestamp(d.with_timezone(&Utc)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_text_parses_back() {
        let now = Timestamp::now();
        let parsed = Timestamp::try_from(now.to_db()).unwrap();
        assert_eq!(parsed.to_db(), now.to_db());
        assert!(now.to_db().ends_with('Z'));
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(Timestamp::try_from("yesterday".to_string()).is_err());
    }
}
