//! TabState - общее состояние одной группы табов
//!
//! Реестр лежит в одном `RwSignal`, поэтому любое чтение внутри реактивного
//! замыкания перевычисляется при изменении. Компоненты получают узкие
//! хендлы: `TabReader` (чтение), `TabOpener` (открыть таб), `TabRegistrar`
//! (регистрация заголовков).

use contracts::tabs::{RegistrationError, TabEntry, TabGroupId, TabId, TabRegistry, TabsConfig};
use indexmap::IndexMap;
use leptos::prelude::*;

/// Shared state of one `<Tabs>` group, provided to descendants via context.
#[derive(Debug, Clone, Copy)]
pub struct TabState {
    group: TabGroupId,
    config: TabsConfig,
    registry: RwSignal<TabRegistry>,
}

impl TabState {
    pub fn new(config: TabsConfig) -> Self {
        let group = TabGroupId::new();
        log::debug!(
            "tab group {} created (discovery: {:?})",
            group,
            config.discovery.mode
        );
        Self {
            group,
            config,
            registry: RwSignal::new(TabRegistry::new()),
        }
    }

    pub fn group_id(&self) -> TabGroupId {
        self.group
    }

    pub fn config(&self) -> TabsConfig {
        self.config
    }

    pub fn reader(&self) -> TabReader {
        TabReader {
            registry: self.registry,
        }
    }

    pub fn opener(&self) -> TabOpener {
        TabOpener {
            group: self.group,
            registry: self.registry,
        }
    }

    pub fn registrar(&self) -> TabRegistrar {
        TabRegistrar {
            group: self.group,
            registry: self.registry,
        }
    }
}

impl Default for TabState {
    fn default() -> Self {
        Self::new(TabsConfig::default())
    }
}

/// Read access. Every method tracks, so calls inside `move ||` closures re-run on change.
#[derive(Debug, Clone, Copy)]
pub struct TabReader {
    registry: RwSignal<TabRegistry>,
}

impl TabReader {
    pub fn open_tab(&self) -> Option<TabId> {
        self.registry.with(|r| r.open_tab().cloned())
    }

    pub fn is_open(&self, tab_id: &TabId) -> bool {
        self.registry.with(|r| r.is_open(tab_id))
    }

    pub fn all_titles(&self) -> IndexMap<TabId, String> {
        self.registry.with(|r| r.all_titles().clone())
    }

    pub fn title(&self, tab_id: &TabId) -> Option<String> {
        self.registry.with(|r| r.title(tab_id).map(str::to_string))
    }

    pub fn entries(&self) -> Vec<TabEntry> {
        self.registry.with(TabRegistry::entries)
    }

    /// Untracked access for timers and cleanups. `None` once the group is disposed.
    pub fn try_read_untracked<U>(&self, f: impl FnOnce(&TabRegistry) -> U) -> Option<U> {
        self.registry.try_with_untracked(f)
    }
}

/// The "open a tab" capability, handed to the navigation bar and the container.
#[derive(Debug, Clone, Copy)]
pub struct TabOpener {
    group: TabGroupId,
    registry: RwSignal<TabRegistry>,
}

impl TabOpener {
    pub fn open(&self, tab_id: impl Into<TabId>) {
        let tab_id = tab_id.into();
        log::debug!("tab group {}: open '{}'", self.group, tab_id);
        self.registry.update(|r| r.set_open_tab(tab_id));
    }
}

/// The "register a title" capability, handed to content panes.
///
/// Every successful `register` holds the id until the matching `release`.
#[derive(Debug, Clone, Copy)]
pub struct TabRegistrar {
    group: TabGroupId,
    registry: RwSignal<TabRegistry>,
}

impl TabRegistrar {
    pub fn register(
        &self,
        title: impl Into<String>,
        tab_id: impl Into<TabId>,
    ) -> Result<(), RegistrationError> {
        let title = title.into();
        let tab_id = tab_id.into();
        let replaced = self
            .registry
            .try_update(|r| r.attach(title.clone(), tab_id.clone()))
            .transpose()?
            .flatten();
        match replaced {
            Some(previous) => log::debug!(
                "tab group {}: '{}' retitled '{}' -> '{}'",
                self.group,
                tab_id,
                previous,
                title
            ),
            None => log::debug!(
                "tab group {}: registered '{}' as '{}'",
                self.group,
                tab_id,
                title
            ),
        }
        Ok(())
    }

    /// Drops one hold on `tab_id`; the entry is removed with the last one.
    /// Safe to call after the group is gone.
    pub fn release(&self, tab_id: &TabId) {
        let removed = self.registry.try_update(|r| r.release(tab_id)).flatten();
        if removed.is_some() {
            log::debug!("tab group {}: unregistered '{}'", self.group, tab_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_read_back() {
        Owner::new().with(|| {
            let state = TabState::default();
            assert_eq!(state.reader().open_tab(), None);

            state.opener().open("not-registered");
            assert_eq!(
                state.reader().open_tab(),
                Some(TabId::from("not-registered"))
            );
        });
    }

    #[test]
    fn test_registrar_rejects_empty_values() {
        Owner::new().with(|| {
            let state = TabState::default();
            let registrar = state.registrar();
            assert_eq!(
                registrar.register("", "1"),
                Err(RegistrationError::MissingTitle {
                    tab_id: TabId::from("1")
                })
            );
            assert_eq!(registrar.register("", ""), Err(RegistrationError::MissingBoth));
            assert!(state.reader().all_titles().is_empty());
        });
    }

    #[test]
    fn test_register_overwrite_and_release() {
        Owner::new().with(|| {
            let state = TabState::default();
            let registrar = state.registrar();
            let reader = state.reader();
            let id = TabId::from("1");

            registrar.register("First", "1").unwrap();
            registrar.register("Premier", "1").unwrap();
            assert_eq!(reader.title(&id), Some("Premier".to_string()));
            assert_eq!(reader.all_titles().len(), 1);

            // two holders, the first release keeps the entry
            registrar.release(&id);
            assert_eq!(reader.title(&id), Some("Premier".to_string()));

            registrar.release(&id);
            assert_eq!(reader.title(&id), None);
            // extra release is a no-op
            registrar.release(&id);
            assert!(reader.entries().is_empty());
        });
    }

    #[test]
    fn test_groups_are_independent() {
        Owner::new().with(|| {
            let left = TabState::default();
            let right = TabState::default();
            assert_ne!(left.group_id(), right.group_id());

            left.registrar().register("First", "1").unwrap();
            left.opener().open("1");
            right.opener().open("2");

            assert!(left.reader().is_open(&TabId::from("1")));
            assert!(right.reader().is_open(&TabId::from("2")));
            assert!(right.reader().entries().is_empty());
        });
    }
}
