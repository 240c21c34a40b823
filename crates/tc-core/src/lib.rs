pub mod config;
pub mod error;
pub mod model;
pub mod persist;

pub use config::EditorConfig;
pub use error::{PersistError, StoreError};
pub use model::*;
pub use persist::{CanvasState, KeyValueStore, MemoryStore};
