//! A BST whose operations recurse down the tree. Each step takes a subtree by value and hands
//! back the (possibly different) root of that subtree for its parent to re-attach, so no step
//! ever needs to know who its parent is.
//!
//! Everything here uses stack space proportional to the height of the tree. An unbalanced tree
//! built from sorted input is as tall as it is long, so prefer [`crate::iterative::Tree`] for large
//! inputs of unknown order. Dropping and cloning don't recurse.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::recursive::Tree;
//!
//! let mut tree = Tree::new();
//!
//! assert!(tree.insert(50));
//! assert!(tree.insert(30));
//! assert!(tree.insert(70));
//! assert!(!tree.insert(30));
//!
//! assert_eq!(tree.dfs_in_order(), [&30, &50, &70]);
//! assert_eq!(tree.delete(&50), Some(50));
//! assert_eq!(tree.dfs_in_order(), [&30, &70]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::metrics;
use crate::node::{self, Link, Node};
use crate::traversal::{self, Iter, Order};

/// An unbalanced Binary Search Tree of unique values, implemented by recursive reconstruction.
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
        node::release(&mut self.root);
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    fn clone(&self) -> Self {
        Self {
            root: node::clone_link(&self.root),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &node::Nodes(self.root()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        node::fmt_summary(f, &self.dfs_pre_order(), self.root())
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Finds the node holding `value`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::recursive::Tree;
    ///
    /// let tree: Tree<i32> = [2, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.lookup(&2).and_then(|n| n.left()).map(|n| *n.value()), Some(1));
    /// assert!(tree.lookup(&42).is_none());
    /// ```
    pub fn lookup(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        lookup(self.root(), value)
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.lookup(value).is_some()
    }

    /// Adds `value` as a new leaf. Returns `false`, leaving the tree untouched, if the value is
    /// already present.
    ///
    /// **Note** This recurses once per level on the way down to the new leaf. A tree grown from
    /// around a hundred thousand values in sorted order is that tall and overflows the default
    /// stack of a thread; use [`crate::iterative::Tree`] for input like that.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut inserted = false;
        self.root = Some(insert(self.root.take(), value, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `value` from the tree and returns it, or returns `None` if it wasn't there.
    ///
    /// **Note** Like [`Tree::insert`] this recurses once per level, down to the value and then on
    /// down to its successor, so it has the same limit on chain shaped trees.
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let (root, removed) = delete(self.root.take(), value);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        node::release(&mut self.root);
        self.len = 0;
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        node::extreme(&self.root, Ordering::Less)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        node::extreme(&self.root, Ordering::Greater)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// The values level by level, each level from left to right.
    pub fn bfs(&self) -> Vec<&T> {
        traversal::breadth_first(self.root())
    }

    /// Same output as [`Tree::bfs`], handling one level per recursive step.
    pub fn bfs_recursive(&self) -> Vec<&T> {
        traversal::breadth_first_recursive(self.root())
    }

    /// The values with each node before its subtrees.
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        traversal::depth_first(self.root(), Order::Pre)
    }

    /// The values in ascending order.
    pub fn dfs_in_order(&self) -> Vec<&T> {
        traversal::depth_first(self.root(), Order::In)
    }

    /// The values with each node after its subtrees.
    pub fn dfs_post_order(&self) -> Vec<&T> {
        traversal::depth_first(self.root(), Order::Post)
    }

    /// The number of edges on the longest path from the root down to a leaf. `None` for an empty
    /// tree.
    pub fn height(&self) -> Option<usize> {
        metrics::height(self.root())
    }

    /// The number of edges from the root to `value`, or `None` if it isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::recursive::Tree;
    ///
    /// let tree: Tree<i32> = [50, 30, 70, 80].into_iter().collect();
    ///
    /// assert_eq!(tree.depth(&50), Some(0));
    /// assert_eq!(tree.depth(&80), Some(2));
    /// assert_eq!(tree.depth(&100), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        metrics::depth(self.root(), value)
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

fn lookup<'a, T>(node: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    let node = node?;
    match value.cmp(&node.value) {
        Ordering::Less => lookup(node.left(), value),
        Ordering::Equal => Some(node),
        Ordering::Greater => lookup(node.right(), value),
    }
}

/// Returns `link` with `value` added. `inserted` is only set by the call that creates the new leaf;
/// reaching an equal value leaves the subtree as it was.
fn insert<T>(link: Link<T>, value: T, inserted: &mut bool) -> Box<Node<T>>
where
    T: Ord,
{
    let Some(mut node) = link else {
        *inserted = true;
        return Node::new_boxed(value);
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = Some(insert(node.left.take(), value, inserted)),
        Ordering::Equal => {}
        Ordering::Greater => node.right = Some(insert(node.right.take(), value, inserted)),
    }

    node.debug_assert_ordered();
    node
}

/// Returns `link` without `value`, along with the removed value if it was found.
fn delete<T>(link: Link<T>, value: &T) -> (Link<T>, Option<T>)
where
    T: Ord,
{
    let Some(mut node) = link else {
        return (None, None);
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = delete(node.left.take(), value);
            node.left = left;
            (Some(node), removed)
        }
        Ordering::Greater => {
            let (right, removed) = delete(node.right.take(), value);
            node.right = right;
            (Some(node), removed)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => (None, Some(node.value)),
            (Some(left), None) => (Some(left), Some(node.value)),
            (None, Some(right)) => (Some(right), Some(node.value)),
            (Some(left), Some(mut right)) => {
                // Trade values with the in-order successor. `value` then sits at the leftmost
                // spot of the right subtree, which is still a valid position for it since it's
                // smaller than everything there, and an ordinary delete can remove it.
                swap_with_leftmost(&mut right, &mut node.value);
                let (right, removed) = delete(Some(right), value);

                node.left = Some(left);
                node.right = right;
                node.debug_assert_ordered();
                (Some(node), removed)
            }
        },
    }
}

fn swap_with_leftmost<T>(node: &mut Node<T>, value: &mut T) {
    match node.left.as_deref_mut() {
        Some(left) => swap_with_leftmost(left, value),
        None => mem::swap(&mut node.value, value),
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
