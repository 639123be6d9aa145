use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// UTC wall-clock instant stamped on each run, rendered as RFC3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn format_rfc3339(self) -> String {
        // UTC instants from the system clock always fit RFC3339.
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_utc_rfc3339() {
        let value = serde_json::to_value(UtcDateTime::now()).expect("serialize");
        let text = value.as_str().expect("string");
        assert!(text.ends_with('Z'), "{text}");
        assert!(OffsetDateTime::parse(text, &Rfc3339).is_ok());
    }
}
