pub mod error;
pub mod event;
pub mod store;

pub use error::{StateError, StateResult};
pub use event::{ChangeCause, StoreSnapshot};
pub use store::ConfigStore;
