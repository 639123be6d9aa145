use serde::{Deserialize, Serialize};

/// A post as handed over by a content source: title, optional body and the
/// bodies of its top-level comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTextRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub comments: Vec<String>,
}

impl RawTextRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            comments: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Body text, with an absent body read as empty.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_body_and_comments_deserialize_as_empty() {
        let record: RawTextRecord =
            serde_json::from_str(r#"{"title":"TSLA to the moon"}"#).expect("must deserialize");
        assert_eq!(record.body, None);
        assert_eq!(record.body_text(), "");
        assert!(record.comments.is_empty());
    }

    #[test]
    fn builder_collects_comments_in_order() {
        let record = RawTextRecord::new("title")
            .with_body("body")
            .with_comment("first")
            .with_comment("second");
        assert_eq!(record.body_text(), "body");
        assert_eq!(record.comments, ["first", "second"]);
    }
}
