//! In-order iterators over a [`Tree`][crate::Tree].
//!
//! All of the iterators here are thin wrappers around a single in-order walk which keeps an
//! explicit stack of the nodes it still has to visit instead of recursing or following parent
//! pointers. The walk is generic over how a node is held (shared reference, mutable reference or
//! owned box) so the borrowing, mutating and consuming iterators share one traversal.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::from([5, 3, 8, 1]);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 8]);
//! assert_eq!(tree.iter().rev().copied().collect::<Vec<_>>(), [8, 5, 3, 1]);
//!
//! for value in tree.iter_mut() {
//!     *value *= 10;
//! }
//! assert_eq!(tree.into_iter().collect::<Vec<_>>(), [10, 30, 50, 80]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::tree::{Link, Node};

/// A handle to a node which can be taken apart into the item it yields and handles to its
/// children.
pub(crate) trait Split: Sized {
    type Item;

    /// Returns `(item, left, right)`.
    fn split(self) -> (Self::Item, Option<Self>, Option<Self>);
}

impl<'a, T> Split for &'a Node<T> {
    type Item = &'a T;

    fn split(self) -> (&'a T, Option<Self>, Option<Self>) {
        (&self.value, self.left.as_deref(), self.right.as_deref())
    }
}

impl<'a, T> Split for &'a mut Node<T> {
    type Item = &'a mut T;

    fn split(self) -> (&'a mut T, Option<Self>, Option<Self>) {
        let Node {
            value, left, right, ..
        } = self;
        (value, left.as_deref_mut(), right.as_deref_mut())
    }
}

impl<T> Split for Box<Node<T>> {
    type Item = T;

    fn split(self) -> (T, Option<Self>, Option<Self>) {
        let Node {
            value, left, right, ..
        } = *self;
        (value, left, right)
    }
}

/// Which way a [`Walk`] moves through the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Left subtree, node, right subtree.
    Ascending,
    /// Right subtree, node, left subtree.
    Descending,
}

/// An in-order walk using an explicit stack.
///
/// Each stack entry is a node that hasn't been yielded yet, already split into its item and the
/// subtree to visit after it. The top of the stack is always the next item.
pub(crate) struct Walk<N: Split> {
    stack: Vec<(N::Item, Option<N>)>,
    direction: Direction,
}

impl<N: Split> Walk<N> {
    pub(crate) fn new(root: Option<N>, direction: Direction) -> Self {
        let mut walk = Self {
            stack: Vec::new(),
            direction,
        };
        walk.push_spine(root);
        walk
    }

    /// Pushes `node` and every node reached by repeatedly moving towards the nearest end (left
    /// when ascending, right when descending).
    fn push_spine(&mut self, mut node: Option<N>) {
        while let Some(n) = node {
            let (item, left, right) = n.split();
            let (near, far) = match self.direction {
                Direction::Ascending => (left, right),
                Direction::Descending => (right, left),
            };
            self.stack.push((item, far));
            node = near;
        }
    }

    /// Yields the next item, or `None` once the walk is done. Once it returns `None` it always
    /// will.
    pub(crate) fn step(&mut self) -> Option<N::Item> {
        let (item, far) = self.stack.pop()?;
        self.push_spine(far);
        Some(item)
    }

    fn peek(&self) -> Option<&N::Item> {
        self.stack.last().map(|(item, _)| item)
    }
}

impl<N: Split> Default for Walk<N> {
    fn default() -> Self {
        Self {
            stack: Vec::new(),
            direction: Direction::Ascending,
        }
    }
}

impl<'a, T> Clone for Walk<&'a Node<T>> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            direction: self.direction,
        }
    }
}

/// A read-only, double ended, in-order iterator over a [`Tree`][crate::Tree].
///
/// Created by [`Tree::iter`][crate::Tree::iter]. Iterating forward yields values in ascending
/// order and [`rev`][Iterator::rev] yields them in descending order.
///
/// Two `Iter`s compare equal when the next value they'd yield is the same value in the same
/// tree. All exhausted iterators are equal to each other and to [`Iter::default`].
pub struct Iter<'a, T> {
    front: Walk<&'a Node<T>>,
    back: Walk<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            front: Walk::new(root, Direction::Ascending),
            back: Walk::new(root, Direction::Descending),
            remaining: len,
        }
    }

    /// The value the next call to `next` will yield.
    fn current(&self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.front.peek().copied()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.front.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.back.step()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Default for Iter<'_, T> {
    /// An exhausted iterator, usable as an end sentinel.
    fn default() -> Self {
        Self {
            front: Walk::default(),
            back: Walk::default(),
            remaining: 0,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current(), other.current()) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An in-order iterator yielding mutable references to the values of a
/// [`Tree`][crate::Tree].
///
/// Created by [`Tree::iter_mut`][crate::Tree::iter_mut]. It is a logic error to change a value
/// in a way that changes its ordering relative to the other values in the tree. Doing so won't
/// cause undefined behavior but later searches may miss values.
///
/// This iterator only runs forward, so [`rev`][Iterator::rev] isn't available. Use
/// [`Tree::iter`][crate::Tree::iter]`().rev()` to read values in descending order.
pub struct IterMut<'a, T> {
    walk: Walk<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(root: Option<&'a mut Node<T>>, len: usize) -> Self {
        Self {
            walk: Walk::new(root, Direction::Ascending),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let item = self.walk.step()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// An in-order iterator which moves values out of a [`Tree`][crate::Tree].
///
/// Created by calling `into_iter` on a `Tree`. Values that haven't been yielded when this is
/// dropped are dropped along with it.
///
/// Like [`IterMut`] this only runs forward; collect it and reverse the result, or use
/// [`Tree::iter`][crate::Tree::iter]`().rev()`, for descending order.
pub struct IntoIter<T> {
    walk: Walk<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        Self {
            walk: Walk::new(root, Direction::Ascending),
            remaining: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.walk.step()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    // Unvisited subtrees hang off the stack as boxes. Walking them one node at a time keeps a
    // degenerate remainder from being dropped recursively.
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
