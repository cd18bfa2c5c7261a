pub mod accounts;
pub mod config;
pub mod feedback;
pub mod models;
pub mod records;
pub mod validate;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use accounts::{Credentials, Registration};
pub use config::{AuthConfig, ChatConfig, SiteConfig};
pub use feedback::FeedbackForm;
pub use models::{FeedbackEntry, Theme, UserRecord};
pub use records::{KeyValueStore, Records};
pub use validate::{escape_html, FormError};
