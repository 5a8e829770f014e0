use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LlrbError {
    #[error("delete op error: no such item")]
    KeyNotFound,
}

/// First broken invariant found by [`crate::util::assert_llrb_tree`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root is not black")]
    RootNotBlack,
    #[error("left-leaning property violated: red right link")]
    RightLeaningRed,
    #[error("red node has red left child")]
    ConsecutiveReds,
    #[error("black height mismatch: left {left}, right {right}")]
    BlackHeightMismatch { left: usize, right: usize },
    #[error("node order violated")]
    OrderViolated,
}
