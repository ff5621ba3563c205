use crate::domain::errors::DomainResult;
use crate::domain::value::{non_blank, positive_id, requested_id};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(i64);

impl ContentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        positive_id(id, "content id").map(Self)
    }

    pub fn requested(id: i64) -> DomainResult<Option<Self>> {
        Ok(requested_id(id, "content id")?.map(Self))
    }
}

impl From<ContentId> for i64 {
    fn from(value: ContentId) -> Self {
        value.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One fragment attached to an article: a URL, an image reference or text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentData(String);

impl ContentData {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        non_blank(value.into(), "content data").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
