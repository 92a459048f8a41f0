use crate::preset::PresetError;
use crate::serialize::SerializeError;
use crate::state::StateError;
use crate::storage::StorageError;
use crate::theme::ThemeError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Preset(#[from] PresetError),
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
