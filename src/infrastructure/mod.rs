pub mod menu_store;

pub use menu_store::{MenuStore, PersistedWheel};
