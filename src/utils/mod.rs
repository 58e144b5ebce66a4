// Utils compartidos

pub mod china_city;
pub mod constants;
pub mod lead_name;
pub mod storage;

pub use china_city::{normalize_city_input, query_city_suggestions, CitySuggestion};
pub use constants::*;
pub use lead_name::{validate_lead_name, NameCheck};
pub use storage::{MemoryStorage, StorageBackend};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
