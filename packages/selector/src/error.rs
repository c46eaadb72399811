use crate::fragment::FragmentKind;
use thiserror::Error;

pub type SelectorResult<T> = Result<T, SelectorError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Duplicate {kind} fragment: a selector holds at most one")]
    DuplicateFragment { kind: FragmentKind },

    #[error("Out-of-order {kind} fragment: {seen} fragment already present")]
    OutOfOrder {
        kind: FragmentKind,
        seen: FragmentKind,
    },
}
