//! Модель табов без привязки к UI-фреймворку
//!
//! Содержит:
//! - `ids` - идентификаторы табов и групп табов
//! - `registry` - реестр заголовков и открытый таб (единственный источник правды)
//! - `discovery` - обнаружение табов навигацией (poll / subscribe)
//! - `attributes` - проверка обязательных атрибутов компонентов
//! - `config` - настройки группы табов
//! - `error` - ошибки регистрации

pub mod attributes;
pub mod config;
pub mod discovery;
pub mod error;
pub mod ids;
pub mod registry;

pub use attributes::{MissingAttributes, RequiredAttributes, TABS, TAB_CONTENT, TAB_NAV};
pub use config::{load_config, DiscoveryMode, DiscoverySettings, TabsConfig};
pub use discovery::{DiscoveryTick, TitleDiscovery};
pub use error::RegistrationError;
pub use ids::{TabEntry, TabGroupId, TabId};
pub use registry::TabRegistry;
