//! Left-leaning red-black (LLRB) trees.
//!
//! An LLRB tree is a red-black tree in which red links only ever lean left,
//! which makes it isomorphic to a 2-3 tree. Every mutation walks down
//! recursively, changes one spot and restores the invariants on the way back
//! up with a three-step fix-up (rotate left, rotate right, color flip).
//!
//! Nodes own their children through `Box`; rotations move subtrees between
//! slots and hand the new subtree root back to the caller. There are no
//! parent pointers.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Color`] |
//! [`node`] | [`Node`], `is_red` / `is_black`, rotations and color flip |
//! [`util`] | fix-up, move-red-left/right, insert, delete, invariant checker |
//! [`map`] | [`LlrbMap`], value-carrying ordered map |
//! [`tree`] | [`LlrbTree`], key-only ordered set |
//! [`iter`] | in-order iterators |
//! [`error`] | [`LlrbError`], [`InvariantViolation`] |

pub mod error;
pub mod iter;
pub mod map;
pub mod node;
pub mod tree;
pub mod types;
pub mod util;

pub use error::{InvariantViolation, LlrbError};
pub use iter::{Iter, Keys};
pub use map::LlrbMap;
pub use node::{is_black, is_red, Node};
pub use tree::{LlrbTree, TreeNode};
pub use types::Color;
pub use util::assert_llrb_tree;
