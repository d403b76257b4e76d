use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a single tab, supplied by whoever declares the pane.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TabId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for TabId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Tab id paired with its display title, as shown by the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    pub tab_id: TabId,
    pub title: String,
}

impl TabEntry {
    pub fn new(tab_id: impl Into<TabId>, title: impl Into<String>) -> Self {
        Self {
            tab_id: tab_id.into(),
            title: title.into(),
        }
    }
}

/// Identity of one tab group (one `<Tabs>` instance). Used to tell groups apart in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabGroupId(Uuid);

impl TabGroupId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TabGroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // short form is enough to tell groups apart on one page
        let full = self.0.simple().to_string();
        f.write_str(&full[..8])
    }
}
