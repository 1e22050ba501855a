use thiserror::Error;

pub type PropsResult<T> = Result<T, PropsError>;

/// Shape problems in the inputs handed to the slide widgets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropsError {
    #[error("Media item at index {0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate media item id: {0}")]
    DuplicateId(String),

    #[error("Current id {0:?} is not in the item list")]
    UnknownCurrentId(String),
}
