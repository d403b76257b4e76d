//! Tab management module
//!
//! Содержит:
//! - `state` - TabState группы табов и хендлы доступа к нему
//! - `container` - компонент `<Tabs>`, создаёт TabState и открывает таб по умолчанию
//! - `content` - компонент `<TabContent>`, регистрирует заголовок и показывает контент
//! - `nav` - компонент `<TabNav>`, ссылки на зарегистрированные табы

pub mod container;
pub mod content;
pub mod nav;
pub mod state;

pub use container::Tabs;
pub use content::TabContent;
pub use nav::TabNav;
pub use state::{TabOpener, TabReader, TabRegistrar, TabState};
