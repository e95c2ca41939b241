//! An unbalanced, duplicate-free Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
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
//! Searching for values in the tree takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). This tree does nothing to limit its
//! height: inserting values in sorted order builds a chain as tall as the tree is
//! long. BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ## Equality
//!
//! Two [`Tree`]s are equal when they have the same *shape* and the same values in
//! the same positions. Because the shape depends on the order values were inserted,
//! trees holding the same values can compare unequal:
//!
//! ```
//! use bst::Tree;
//!
//! let a = Tree::from([1, 3, 5, 9, 10, 23, 99]);
//! let b = Tree::from([3, 9, 22, 99, 3, 0, 11, 32]);
//! let c = Tree::from([3, 9, 22, 99, 3, 0, 11, 32]);
//!
//! assert!(a != b);
//! assert!(b == c);
//!
//! // Same values, different insertion order.
//! assert_ne!(Tree::from([1, 2]), Tree::from([2, 1]));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
mod tree;


pub use error::{Error, Result};
pub use iter::{IntoIter, Iter, IterMut};
pub use tree::Tree;
