//! Реестр табов - единственный источник правды для группы табов
//!
//! Хранит ключ открытого таба и заголовки, зарегистрированные панелями.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::RegistrationError;
use super::ids::{TabEntry, TabId};

/// Open tab id plus the `tab id -> title` registrations of one tab group.
///
/// Titles iterate in registration order; overwriting a title keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRegistry {
    open_tab: Option<TabId>,
    titles: IndexMap<TabId, String>,
    /// Panes currently holding each id; duplicates share one entry.
    #[serde(skip)]
    holders: HashMap<TabId, usize>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the open tab. The id does not have to be registered.
    pub fn set_open_tab(&mut self, tab_id: impl Into<TabId>) {
        self.open_tab = Some(tab_id.into());
    }

    pub fn clear_open_tab(&mut self) {
        self.open_tab = None;
    }

    pub fn open_tab(&self) -> Option<&TabId> {
        self.open_tab.as_ref()
    }

    pub fn is_open(&self, tab_id: &TabId) -> bool {
        self.open_tab.as_ref() == Some(tab_id)
    }

    /// Inserts or overwrites the title for `tab_id`.
    ///
    /// Returns the previous title when one was replaced.
    pub fn register_title(
        &mut self,
        title: impl Into<String>,
        tab_id: impl Into<TabId>,
    ) -> Result<Option<String>, RegistrationError> {
        let title = title.into();
        let tab_id = tab_id.into();
        if let Some(err) = RegistrationError::check(&title, &tab_id) {
            return Err(err);
        }
        Ok(self.titles.insert(tab_id, title))
    }

    /// Removes a registration, keeping the order of the remaining ones.
    pub fn unregister(&mut self, tab_id: &TabId) -> Option<String> {
        self.holders.remove(tab_id);
        self.titles.shift_remove(tab_id)
    }

    /// `register_title` on behalf of a mounted pane. Each successful call must be
    /// paired with one `release`.
    pub fn attach(
        &mut self,
        title: impl Into<String>,
        tab_id: impl Into<TabId>,
    ) -> Result<Option<String>, RegistrationError> {
        let tab_id = tab_id.into();
        let previous = self.register_title(title, tab_id.clone())?;
        *self.holders.entry(tab_id).or_insert(0) += 1;
        Ok(previous)
    }

    /// Drops one pane's hold on `tab_id`. The entry goes away with the last holder;
    /// its title is returned then.
    pub fn release(&mut self, tab_id: &TabId) -> Option<String> {
        if self.holders(tab_id) <= 1 {
            return self.unregister(tab_id);
        }
        if let Some(count) = self.holders.get_mut(tab_id) {
            *count -= 1;
        }
        None
    }

    pub fn holders(&self, tab_id: &TabId) -> usize {
        self.holders.get(tab_id).copied().unwrap_or(0)
    }

    pub fn all_titles(&self) -> &IndexMap<TabId, String> {
        &self.titles
    }

    pub fn title(&self, tab_id: &TabId) -> Option<&str> {
        self.titles.get(tab_id).map(String::as_str)
    }

    pub fn entries(&self) -> Vec<TabEntry> {
        self.titles
            .iter()
            .map(|(tab_id, title)| TabEntry {
                tab_id: tab_id.clone(),
                title: title.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
