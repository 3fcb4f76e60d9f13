//! Errors raised while assembling a tree.

use thiserror::Error;

/// Assembly mistakes reported by [`TreeBuilder::build`](crate::TreeBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("cannot add leaf `{leaf}` without an open parent; it must be nested in a composite or decorator")]
    NoParent { leaf: &'static str },

    #[error("end_composite called but the top of the stack is {found}")]
    NotAComposite { found: &'static str },

    #[error("composite `{kind}` was closed without any children")]
    EmptyComposite { kind: &'static str },

    #[error("cannot build a tree with zero nodes")]
    EmptyTree,

    #[error("{0} parent node(s) still open at build time")]
    UnclosedParents(usize),
}

pub type Result<T> = std::result::Result<T, BuildError>;
