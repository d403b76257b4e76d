use thiserror::Error;

use super::ids::TabId;

/// Ошибки регистрации таба в реестре
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("tab '{tab_id}' cannot be registered without a title")]
    MissingTitle { tab_id: TabId },

    #[error("tab titled '{title}' cannot be registered without a tab id")]
    MissingTabId { title: String },

    #[error("both a tab title and a tab id need to be provided to register a tab")]
    MissingBoth,
}

impl RegistrationError {
    /// Classifies a rejected `(title, tab_id)` pair. Returns `None` when both are present.
    pub fn check(title: &str, tab_id: &TabId) -> Option<Self> {
        match (title.is_empty(), tab_id.is_empty()) {
            (false, false) => None,
            (true, false) => Some(Self::MissingTitle {
                tab_id: tab_id.clone(),
            }),
            (false, true) => Some(Self::MissingTabId {
                title: title.to_string(),
            }),
            (true, true) => Some(Self::MissingBoth),
        }
    }
}
