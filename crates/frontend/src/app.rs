use crate::layout::tabs::{TabContent, TabNav, Tabs};
use contracts::tabs::{load_config, TabsConfig};
use leptos::prelude::*;

fn polling_config() -> TabsConfig {
    match load_config(Some("[discovery]\nmode = \"poll\"\npoll_interval_ms = 300\n")) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{:#}, falling back to defaults", err);
            TabsConfig::default()
        }
    }
}

#[component]
fn Counter() -> impl IntoView {
    let count = RwSignal::new(0);
    view! {
        <button on:click=move |_| count.update(|c| *c += 1)>
            "Clicked " {move || count.get()} " times"
        </button>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let polling = polling_config();

    view! {
        <Tabs tab_default="2">
            <TabNav />
            <TabContent tab_id="1" tab_title="First">
                <p>"First tab. The counter keeps its value while hidden."</p>
                <Counter />
            </TabContent>
            <TabContent tab_id="2" tab_title="Second">
                <p>"Second tab, open by default."</p>
            </TabContent>
        </Tabs>

        <Tabs tab_default="a" config=polling>
            <TabContent tab_id="a" tab_title="Polled A">
                <p>"Registered before the nav bar of this group mounts."</p>
            </TabContent>
            <TabNav />
            <TabContent tab_id="b" tab_title="Polled B">
                <p>"The nav bar of this group polls every 300 ms until it finds a tab."</p>
            </TabContent>
        </Tabs>
    }
}
