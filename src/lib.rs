//! This crate exposes two implementations of the same unbalanced Binary Search Tree, one built out
//! of loops and one built out of recursion, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Values are unique: inserting a value that is already present is rejected. Neither tree
//! rebalances itself, so the shape of the tree (and therefore its height, which bounds the cost
//! of every operation) depends entirely on the order values were inserted in.
//!
//! ## Two engines
//!
//! [`iterative::Tree`] and [`recursive::Tree`] have the same API and always agree on contents,
//! shape, and traversal order given the same sequence of operations:
//!
//! ```
//! use ordered_bst::{iterative, recursive};
//!
//! let mut loops = iterative::Tree::new();
//! let mut recursion = recursive::Tree::new();
//!
//! for x in [50, 30, 70, 20, 40, 60, 80] {
//!     loops.insert(x);
//!     recursion.insert(x);
//! }
//! loops.delete(&50);
//! recursion.delete(&50);
//!
//! assert_eq!(loops.bfs(), recursion.bfs());
//! assert_eq!(loops.bfs(), [&60, &30, &70, &20, &40, &80]);
//! ```
//!
//! The [`traversal`] module describes the orders that values can be read back in.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iterative;
mod metrics;
mod node;
pub mod recursive;
pub mod traversal;

pub use node::Node;
