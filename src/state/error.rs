use crate::model::MutationError;
use thiserror::Error;

pub type StateResult<T> = std::result::Result<T, StateError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("rejected update at revision {revision}: {source}")]
    RejectedUpdate {
        revision: u64,
        #[source]
        source: MutationError,
    },
}
