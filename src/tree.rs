//! An unbalanced Binary Search Tree that stores each value at most once.
//!
//! Every node exclusively owns its children through a `Box` and keeps a non-owning pointer back
//! to its parent. Nothing here ever follows that pointer; it's maintained through every insert,
//! removal and clone so that it always names the node's structural parent.
//!
//! The tree never rebalances. Inserting values in sorted order produces a chain whose height
//! equals its length so nothing here recurses per level. Searches, inserts and removals walk a
//! cursor down the tree, and everything that visits the whole tree (dropping, clearing, cloning,
//! measuring the height, comparing) uses an explicit stack.
//!
//! # Examples
//!
//! ```
//! use bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.find(&1));
//! assert_eq!(tree.min(), Err(Error::EmptyContainer));
//!
//! assert!(tree.insert(1));
//! assert!(tree.find(&1));
//!
//! // Inserting the same value again does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.find(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter, IterMut};

/// The slot a node lives in: the tree's root or one of its parent's children.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A duplicate-free, unbalanced Binary Search Tree.
///
/// Values are kept in the order given by their [`Ord`] implementation and can be iterated in
/// ascending or descending order. Inserting a value that is already present leaves the tree
/// untouched.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `value` into the tree. Returns `false`, leaving the tree unchanged, if an equal
    /// value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            // Only the root is ever reached empty; below it the new node is linked from its parent.
            let Some(node) = slot.as_deref() else {
                *slot = Some(Node::new_boxed(value, None));
                break;
            };
            let ordering = value.cmp(&node.value);
            let child = match ordering {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return false,
            };

            if child.is_none() {
                if let Some(node) = slot.as_deref_mut() {
                    let parent = Some(NonNull::from(&*node));
                    *node.child_mut(ordering) = Some(Node::new_boxed(value, parent));
                    node.check_order();
                }
                break;
            }
            if let Some(node) = slot {
                slot = node.child_mut(ordering);
            }
        }

        self.len += 1;
        true
    }

    /// Removes `value` from the tree. Returns `false` if it wasn't there.
    ///
    /// A node with two children is replaced by its in-order successor, the smallest value in its
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::from([5, 3, 8, 1]);
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 8]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let before = self.len;
        remove_from(&mut self.root, value, &mut self.len);
        self.len != before
    }

    /// Returns whether the tree contains `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::from([1, 2]);
    ///
    /// assert!(tree.find(&1));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match value.cmp(&n.value) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Greater => n.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Returns the smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Error, Tree};
    ///
    /// assert_eq!(Tree::from([5, 3, 8]).min(), Ok(&3));
    /// assert_eq!(Tree::<i32>::new().min(), Err(Error::EmptyContainer));
    /// ```
    pub fn min(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyContainer)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns the largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the tree is empty.
    pub fn max(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyContainer)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a single node a height of 1.
    ///
    /// Heights aren't cached so this visits every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// assert_eq!(Tree::from([2, 1, 3]).height(), 2);
    ///
    /// // Sorted input degenerates into a chain.
    /// assert_eq!(Tree::from([1, 2, 3]).height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<_> = self
            .root
            .as_deref()
            .map(|root| (root, 1))
            .into_iter()
            .collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }
        height
    }

    /// Removes every value from the tree. Children are dropped before their parents.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            // A node is only dropped once it has no children left to drop.
            if let Some(child) = node.left.take().or_else(|| node.right.take()) {
                pending.push(node);
                pending.push(child);
            }
        }
        self.len = 0;
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Exchanges the contents of two trees without touching any nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut a = Tree::from([1, 2]);
    /// let mut b = Tree::from([3]);
    /// a.swap(&mut b);
    ///
    /// assert_eq!(a, Tree::from([3]));
    /// assert_eq!(b, Tree::from([1, 2]));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.root, &mut other.root);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// An iterator over the values in ascending order. Call [`rev`][Iterator::rev] on it for
    /// descending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// An iterator over mutable references to the values in ascending order.
    ///
    /// It is a logic error to change a value's ordering relative to the rest of the tree.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.root.as_deref_mut(), self.len)
    }
}

/// Removes the node holding `value` from the subtree rooted in `slot`, decrementing `len` if one
/// was found.
fn remove_from<T: Ord>(mut slot: &mut Link<T>, value: &T, len: &mut usize) {
    loop {
        let Some(node) = slot.as_deref() else {
            return;
        };
        let ordering = value.cmp(&node.value);
        if ordering == Ordering::Equal {
            break;
        }
        if let Some(node) = slot {
            slot = node.child_mut(ordering);
        }
    }

    unlink(slot);
    *len -= 1;
    if let Some(node) = slot.as_deref() {
        node.check_order();
    }
}

/// Unlinks the node in `slot`.
///
/// With at most one child, that child takes the node's place. With two children the node stays
/// put, takes its successor's value, and the successor is unlinked instead.
fn unlink<T>(slot: &mut Link<T>) {
    if let Some(node) = slot.as_deref_mut() {
        if node.left.is_some() && node.right.is_some() {
            if let Some(successor) = take_min(&mut node.right) {
                node.value = successor.value;
            }
            return;
        }
    }

    if let Some(mut node) = slot.take() {
        let parent = node.parent;
        *slot = node
            .left
            .take()
            .or_else(|| node.right.take())
            .map(|child| child.with_parent(parent));
    }
}

/// Detaches the leftmost node of the subtree in `slot`, moving its right child into its place.
fn take_min<T>(mut slot: &mut Link<T>) -> Link<T> {
    while slot.as_ref()?.left.is_some() {
        if let Some(node) = slot {
            slot = &mut node.left;
        }
    }

    let mut min = slot.take()?;
    let parent = min.parent;
    *slot = min.right.take().map(|child| child.with_parent(parent));
    Some(min)
}

impl<T: Clone> Clone for Tree<T> {
    /// Copies every node. The copy has the same shape as `self` and shares nothing with it.
    fn clone(&self) -> Self {
        let mut root = None;
        // Each entry is a source node, the empty slot its copy goes in, and the copy's parent.
        let mut pending = Vec::new();
        if let Some(source) = self.root.as_deref() {
            pending.push((source, &mut root, None));
        }

        while let Some((source, slot, parent)) = pending.pop() {
            let copy = slot.insert(Node::new_boxed(source.value.clone(), parent));
            let this = Some(NonNull::from(&**copy));
            let Node { left, right, .. } = &mut **copy;
            if let Some(source_left) = source.left.as_deref() {
                pending.push((source_left, left, this));
            }
            if let Some(source_right) = source.right.as_deref() {
                pending.push((source_right, right, this));
            }
        }

        Self {
            root,
            len: self.len,
        }
    }
}

/// Trees are equal when they have the same *shape* and hold equal values at every position.
///
/// This is stricter than comparing the sets of values: the shape of an unbalanced tree depends on
/// insertion order so two trees holding the same values can compare unequal.
///
/// ```
/// use bst::Tree;
///
/// assert_eq!(Tree::from([2, 1, 3]), Tree::from([2, 3, 1]));
/// assert_ne!(Tree::from([2, 1, 3]), Tree::from([1, 2, 3]));
/// ```
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut pending = vec![(self.root.as_deref(), other.root.as_deref())];
        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    if a.value != b.value {
                        return false;
                    }
                    pending.push((a.left.as_deref(), b.left.as_deref()));
                    pending.push((a.right.as_deref(), b.right.as_deref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Tree<T> {
    /// Inserts the values in array order, dropping duplicates.
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let len = mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Tree<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    parent: Option<NonNull<Node<T>>>,
}

// SAFETY: `parent` is never dereferenced, it's only ever compared and copied. A `Node` is
// otherwise just a `T` and two boxes so it can cross threads whenever `T` can.
unsafe impl<T: Send> Send for Node<T> {}
// SAFETY: See above.
unsafe impl<T: Sync> Sync for Node<T> {}

impl<T> Node<T> {
    fn new_boxed(value: T, parent: Option<NonNull<Node<T>>>) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
            parent,
        })
    }

    /// The child slot a value ordered `ordering` relative to this node descends into.
    fn child_mut(&mut self, ordering: Ordering) -> &mut Link<T> {
        match ordering {
            Ordering::Less => &mut self.left,
            _ => &mut self.right,
        }
    }

    fn with_parent(mut self: Box<Self>, parent: Option<NonNull<Node<T>>>) -> Box<Self> {
        self.parent = parent;
        self
    }

    /// In debug builds, asserts that this node sits between its children.
    fn check_order(&self)
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            if let Some(left) = self.left.as_deref() {
                assert!(left.value < self.value);
            }
            if let Some(right) = self.right.as_deref() {
                assert!(self.value < right.value);
            }
        }
    }
}
