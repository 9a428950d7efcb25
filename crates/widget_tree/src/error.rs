use core::error::Error;
use core::fmt;

/// A structural mutation the tree refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// The handle does not name a live arena node.
    UnknownNode,
    /// The child is the parent itself or one of its ancestors.
    Cycle,
    /// The root cannot be attached below another node or removed.
    RootMoved,
    /// A child position past the end of the parent's children.
    OutOfRange { index: usize, len: usize },
    /// The arena rejected the operation.
    Arena(String),
}

impl fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode => formatter.write_str("unknown widget"),
            Self::Cycle => formatter.write_str("widget cannot be attached below itself"),
            Self::RootMoved => formatter.write_str("the root widget cannot be moved"),
            Self::OutOfRange { index, len } => {
                write!(formatter, "child index {index} out of range for {len} children")
            }
            Self::Arena(reason) => write!(formatter, "arena error: {reason}"),
        }
    }
}

impl Error for TreeError {}
