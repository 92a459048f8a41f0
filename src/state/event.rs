use std::sync::Arc;

use crate::model::{Config, ConfigPath};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Update(ConfigPath),
    Replace,
    Reset,
}

/// What observers receive after every commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub revision: u64,
    pub cause: ChangeCause,
    pub config: Arc<Config>,
}
