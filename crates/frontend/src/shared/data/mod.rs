pub mod list_state;
pub mod resource_store;

pub use list_state::{ListState, LoadPhase, RefreshBackoff};
pub use resource_store::ResourceStore;
