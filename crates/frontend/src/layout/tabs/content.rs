//! TabContent - панель контента одного таба
//!
//! Отвечает за:
//! - Регистрацию заголовка в TabState при создании
//! - Показ/скрытие контента в зависимости от открытого таба
//! - Снятие регистрации при уничтожении

use super::state::{TabReader, TabRegistrar, TabState};
use contracts::tabs::{MissingAttributes, RegistrationError, TabId, TAB_CONTENT};
use leptos::prelude::*;

/// Pane side of the protocol: one registration plus the visibility predicate.
#[derive(Debug, Clone)]
pub struct PaneBinding {
    tab_id: TabId,
    reader: TabReader,
    registrar: TabRegistrar,
}

impl PaneBinding {
    /// Registers `(title, tab_id)` with the group. An invalid pair aborts the mount.
    pub fn mount(
        state: TabState,
        tab_id: impl Into<TabId>,
        title: impl Into<String>,
    ) -> Result<Self, RegistrationError> {
        let tab_id = tab_id.into();
        let registrar = state.registrar();
        registrar.register(title, tab_id.clone())?;
        Ok(Self {
            tab_id,
            reader: state.reader(),
            registrar,
        })
    }

    pub fn tab_id(&self) -> &TabId {
        &self.tab_id
    }

    /// Not cached: compares against the open tab on every call.
    pub fn is_open(&self) -> bool {
        self.reader.is_open(&self.tab_id)
    }

    pub fn unmount(&self) {
        self.registrar.release(&self.tab_id);
    }
}

pub fn validate_pane_attributes(
    tab_id: Option<&str>,
    tab_title: Option<&str>,
) -> Result<(), MissingAttributes> {
    TAB_CONTENT.validate(|name| match name {
        "tab_id" => tab_id,
        "tab_title" => tab_title,
        _ => None,
    })
}

/// Why a `<TabContent>` did not mount. Exactly one diagnostic per failed pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneMountError {
    Attributes(MissingAttributes),
    Registration(RegistrationError),
}

/// Validates the attributes, then registers. Missing attributes stop the mount
/// before the registry is touched, so no registration error follows the warning.
pub fn mount_pane(
    state: TabState,
    tab_id: Option<&str>,
    tab_title: Option<&str>,
) -> Result<PaneBinding, PaneMountError> {
    validate_pane_attributes(tab_id, tab_title).map_err(PaneMountError::Attributes)?;
    PaneBinding::mount(
        state,
        tab_id.unwrap_or_default(),
        tab_title.unwrap_or_default(),
    )
    .map_err(PaneMountError::Registration)
}

/// Content region of one tab. Children are rendered once and only hidden while
/// another tab is open, so their state survives tab switches.
#[component]
pub fn TabContent(
    #[prop(optional, into)] tab_id: Option<String>,
    #[prop(optional, into)] tab_title: Option<String>,
    children: Children,
) -> impl IntoView {
    let state = use_context::<TabState>()
        .expect("TabState context not found: <TabContent> must be placed inside <Tabs>");

    let binding = match mount_pane(state, tab_id.as_deref(), tab_title.as_deref()) {
        Ok(binding) => binding,
        Err(PaneMountError::Attributes(missing)) => {
            log::warn!("{}", missing);
            return view! { <></> }.into_any();
        }
        Err(PaneMountError::Registration(err)) => {
            log::error!("tab group {}: {}", state.group_id(), err);
            return view! { <></> }.into_any();
        }
    };

    let tab_key = binding.tab_id().to_string();
    log::debug!("TabContent mounted: '{}'", tab_key);

    let binding_for_cleanup = binding.clone();
    on_cleanup(move || {
        log::debug!("TabContent destroyed: '{}'", binding_for_cleanup.tab_id());
        binding_for_cleanup.unmount();
    });

    let is_open = Signal::derive(move || binding.is_open());

    view! {
        <div
            class="td-tab-content"
            class:td-tab-content--hidden=move || !is_open.get()
            style:display=move || if is_open.get() { "" } else { "none" }
            data-tab-id=tab_key
        >
            {children()}
        </div>
    }
    .into_any()
}
