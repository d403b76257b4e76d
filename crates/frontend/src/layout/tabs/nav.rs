use super::state::{TabOpener, TabReader, TabState};
use contracts::tabs::{DiscoveryMode, DiscoveryTick, TabEntry, TabId, TitleDiscovery, TAB_NAV};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::ops::ControlFlow;
use wasm_bindgen_futures::spawn_local;

/// Click and highlight behaviour of the navigation links.
#[derive(Debug, Clone, Copy)]
pub struct NavActions {
    reader: TabReader,
    opener: TabOpener,
}

impl NavActions {
    pub fn new(state: TabState) -> Self {
        Self {
            reader: state.reader(),
            opener: state.opener(),
        }
    }

    pub fn open(&self, tab_id: &TabId) {
        self.opener.open(tab_id.clone());
    }

    pub fn is_active(&self, tab_id: &TabId) -> bool {
        self.reader.is_open(tab_id)
    }
}

/// Polling side of `DiscoveryMode::Poll`: fills `discovered` once, then stops.
#[derive(Debug)]
pub struct PollTask {
    reader: TabReader,
    discovered: RwSignal<Vec<TabEntry>>,
    discovery: TitleDiscovery,
    interval_ms: u32,
}

impl PollTask {
    fn new(reader: TabReader, discovered: RwSignal<Vec<TabEntry>>, interval_ms: u32) -> Self {
        Self {
            reader,
            discovered,
            discovery: TitleDiscovery::new(),
            interval_ms,
        }
    }

    /// One timer tick. `Break` means the timer has to stop.
    pub fn step(&mut self) -> ControlFlow<()> {
        // nav bar already torn down
        if self.discovered.is_disposed() {
            return ControlFlow::Break(());
        }

        let discovery = &mut self.discovery;
        match self
            .reader
            .try_read_untracked(|registry| discovery.tick(registry))
        {
            Some(DiscoveryTick::Pending) => ControlFlow::Continue(()),
            Some(DiscoveryTick::Discovered(entries)) => {
                log::debug!(
                    "tab nav discovered {} tab(s) after {} tick(s)",
                    entries.len(),
                    self.discovery.ticks()
                );
                self.discovered.set(entries);
                ControlFlow::Break(())
            }
            Some(DiscoveryTick::Settled) | None => ControlFlow::Break(()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.discovery.is_active()
    }

    pub async fn run(mut self) {
        loop {
            TimeoutFuture::new(self.interval_ms).await;
            if self.step().is_break() {
                break;
            }
        }
    }
}

/// Link list of the tab group, discovered according to the group's `DiscoveryMode`.
///
/// In poll mode the returned task has to be spawned by the caller.
pub fn discovered_tabs(state: TabState) -> (Signal<Vec<TabEntry>>, Option<PollTask>) {
    let settings = state.config().discovery;
    let reader = state.reader();
    match settings.mode {
        // memoized so that opening a tab does not rebuild the links
        DiscoveryMode::Subscribe => (Memo::new(move |_| reader.entries()).into(), None),
        DiscoveryMode::Poll => {
            let discovered = RwSignal::new(Vec::new());
            let task = PollTask::new(reader, discovered, settings.poll_interval_ms);
            (discovered.into(), Some(task))
        }
    }
}

/// Navigation bar: one link per registered tab, the open one marked `active`.
#[component]
pub fn TabNav() -> impl IntoView {
    let state = use_context::<TabState>()
        .expect("TabState context not found: <TabNav> must be placed inside <Tabs>");

    if let Err(missing) = TAB_NAV.validate(|_| None) {
        log::warn!("{}", missing);
    }

    let actions = NavActions::new(state);
    let (tabs, poll) = discovered_tabs(state);
    if let Some(task) = poll {
        spawn_local(task.run());
    }

    view! {
        <div class="td-tab-nav">
            {move || {
                tabs.get()
                    .into_iter()
                    .map(|TabEntry { tab_id, title }| {
                        let tab_for_class = tab_id.clone();
                        view! {
                            <a
                                class="td-tab-link"
                                class:active=move || actions.is_active(&tab_for_class)
                                on:click=move |_| actions.open(&tab_id)
                            >
                                {title}
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
