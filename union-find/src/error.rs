use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnionFindError {
    #[error("element has not been inserted into the disjoint set")]
    InvalidElement,
}

pub type Result<T, E = UnionFindError> = std::result::Result<T, E>;
