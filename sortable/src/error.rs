use crate::NodeId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SortableError {
    #[error("node {0:?} does not belong to this document")]
    UnknownNode(NodeId),
    #[error("node {0:?} is not an initialized sortable container")]
    NotInitialized(NodeId),
    #[error("invalid placeholder markup: {0}")]
    Placeholder(#[from] MarkupError),
    #[error(transparent)]
    Selector(#[from] SelectorError),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },
    #[error("unterminated `[` or `(` starting at offset {offset}")]
    Unterminated { offset: usize },
    #[error("unsupported pseudo-class at offset {offset}")]
    UnsupportedPseudo { offset: usize },
    #[error("combinators are not supported (offset {offset})")]
    Combinator { offset: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("markup contains no element")]
    NoElement,
    #[error("markup placeholders require the `std` feature")]
    RequiresStd,
}
