//! Shared records constructor for all platforms.
//!
//! Returns [`store::Records`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via `store::LocalStorage`
//! - **Native**: [`store::MemoryStore`], which forgets everything on exit

use dioxus::prelude::*;
use store::Records;

/// Create platform-appropriate records.
pub fn make_records() -> Records {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Records::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Records::new(store::MemoryStore::new())
    }
}

/// The records handle provided by the app root.
pub fn use_records() -> Records {
    use_context::<Records>()
}
