use super::ids::TabEntry;
use super::registry::TabRegistry;

/// Outcome of one polling tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryTick {
    /// Registry still empty, keep the timer running.
    Pending,
    /// First non-empty tick: the timer must be cancelled now.
    Discovered(Vec<TabEntry>),
    /// Discovery already finished earlier; the tick is ignored.
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DiscoveryState {
    Polling { ticks: u32 },
    Settled { entries: Vec<TabEntry>, ticks: u32 },
}

/// One-shot title discovery driven by a recurring timer.
///
/// Registrations made after the first non-empty tick are never picked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleDiscovery {
    state: DiscoveryState,
}

impl TitleDiscovery {
    pub fn new() -> Self {
        Self {
            state: DiscoveryState::Polling { ticks: 0 },
        }
    }

    pub fn tick(&mut self, registry: &TabRegistry) -> DiscoveryTick {
        match &mut self.state {
            DiscoveryState::Settled { .. } => DiscoveryTick::Settled,
            DiscoveryState::Polling { ticks } => {
                *ticks += 1;
                if registry.is_empty() {
                    return DiscoveryTick::Pending;
                }
                let ticks = *ticks;
                let entries = registry.entries();
                self.state = DiscoveryState::Settled {
                    entries: entries.clone(),
                    ticks,
                };
                DiscoveryTick::Discovered(entries)
            }
        }
    }

    /// True while the timer should keep firing.
    pub fn is_active(&self) -> bool {
        matches!(self.state, DiscoveryState::Polling { .. })
    }

    pub fn entries(&self) -> &[TabEntry] {
        match &self.state {
            DiscoveryState::Polling { .. } => &[],
            DiscoveryState::Settled { entries, .. } => entries,
        }
    }

    pub fn ticks(&self) -> u32 {
        match self.state {
            DiscoveryState::Polling { ticks } | DiscoveryState::Settled { ticks, .. } => ticks,
        }
    }
}

impl Default for TitleDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_while_registry_is_empty() {
        let registry = TabRegistry::new();
        let mut discovery = TitleDiscovery::new();
        for _ in 0..5 {
            assert_eq!(discovery.tick(&registry), DiscoveryTick::Pending);
        }
        assert!(discovery.is_active());
        assert!(discovery.entries().is_empty());
        assert_eq!(discovery.ticks(), 5);
    }

    #[test]
    fn test_first_registration_settles_discovery() {
        let mut registry = TabRegistry::new();
        let mut discovery = TitleDiscovery::new();
        assert_eq!(discovery.tick(&registry), DiscoveryTick::Pending);
        assert_eq!(discovery.tick(&registry), DiscoveryTick::Pending);

        registry.register_title("First", "1").unwrap();
        assert_eq!(
            discovery.tick(&registry),
            DiscoveryTick::Discovered(vec![TabEntry::new("1", "First")])
        );
        assert!(!discovery.is_active());
        assert_eq!(discovery.ticks(), 3);
    }

    #[test]
    fn test_late_registration_is_not_picked_up() {
        let mut registry = TabRegistry::new();
        let mut discovery = TitleDiscovery::new();
        registry.register_title("First", "1").unwrap();
        discovery.tick(&registry);

        registry.register_title("Second", "2").unwrap();
        assert_eq!(discovery.tick(&registry), DiscoveryTick::Settled);
        assert_eq!(discovery.entries(), &[TabEntry::new("1", "First")]);
        assert_eq!(discovery.ticks(), 1);
    }

    #[test]
    fn test_discovered_order_follows_registry() {
        let mut registry = TabRegistry::new();
        registry.register_title("Second", "2").unwrap();
        registry.register_title("First", "1").unwrap();
        let mut discovery = TitleDiscovery::new();
        discovery.tick(&registry);
        let ids: Vec<_> = discovery.entries().iter().map(|e| e.tab_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }
}
