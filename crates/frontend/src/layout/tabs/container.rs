use super::state::TabState;
use contracts::tabs::{MissingAttributes, TabsConfig, TABS};
use leptos::prelude::*;

/// Seeds the open tab from `tab_default`.
///
/// A missing default is reported back, the state is left untouched.
pub fn seed_default_tab(state: TabState, tab_default: Option<&str>) -> Result<(), MissingAttributes> {
    TABS.validate(|name| match name {
        "tab_default" => tab_default,
        _ => None,
    })?;
    if let Some(default) = tab_default {
        state.opener().open(default);
    }
    Ok(())
}

/// Outer wrapper of a tab group.
///
/// Owns the group's `TabState` and provides it to `<TabNav>` and `<TabContent>`
/// placed anywhere inside. `config` is only used when no `state` is injected.
#[component]
pub fn Tabs(
    #[prop(optional, into)] tab_default: Option<String>,
    #[prop(optional)] state: Option<TabState>,
    #[prop(optional)] config: Option<TabsConfig>,
    children: Children,
) -> impl IntoView {
    let state = state.unwrap_or_else(|| TabState::new(config.unwrap_or_default()));

    if let Err(missing) = seed_default_tab(state, tab_default.as_deref()) {
        log::warn!("{}", missing);
    }

    provide_context(state);

    view! {
        <div class="td-tabs" data-tab-group=state.group_id().to_string()>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::tabs::TabId;

    #[test]
    fn test_default_is_opened() {
        Owner::new().with(|| {
            let state = TabState::default();
            assert!(seed_default_tab(state, Some("2")).is_ok());
            assert_eq!(state.reader().open_tab(), Some(TabId::from("2")));
        });
    }

    #[test]
    fn test_missing_default_is_reported_once() {
        Owner::new().with(|| {
            let state = TabState::default();
            let err = seed_default_tab(state, None).unwrap_err();
            assert_eq!(err.tag, "tabs");
            assert_eq!(err.missing, vec!["tab_default"]);
            assert_eq!(state.reader().open_tab(), None);

            let err = seed_default_tab(state, Some("")).unwrap_err();
            assert_eq!(err.missing.len(), 1);
        });
    }
}
