//! A BST whose operations are all loops. Searches walk down from the root keeping hold of the
//! slot (the root field or one side of a parent) that owns the current node, which is all a
//! deletion needs in order to rewire the tree.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::iterative::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Values are unique so inserting the same value again does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a value hands it back.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::metrics;
use crate::node::{self, Link, Node};
use crate::traversal::{self, Iter, Order};

/// An unbalanced Binary Search Tree of unique values, implemented without recursion.
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

/// Renders the values in pre-order followed by the root, e.g. `[2, 1, 3] (root: Node(2))`.
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

    /// Finds the node holding `value`, if there is one. The node can be used to inspect the
    /// subtree below the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::iterative::Tree;
    ///
    /// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// let root = tree.lookup(&2).unwrap();
    /// assert_eq!(root.left().map(|n| *n.value()), Some(1));
    /// assert_eq!(root.right().map(|n| *n.value()), Some(3));
    ///
    /// assert!(tree.lookup(&42).is_none());
    /// ```
    pub fn lookup(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(node.value()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
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
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let slot = node::slot_of(&mut self.root, &value);
        if slot.is_some() {
            return false;
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// Removes `value` from the tree and returns it, or returns `None` if it wasn't there.
    ///
    /// A node with two children isn't unlinked itself. Instead it takes over the value of its
    /// in-order successor (the smallest value to its right) and the successor's node is unlinked
    /// in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::iterative::Tree;
    ///
    /// let mut tree: Tree<i32> = [50, 30, 70, 60, 80].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&50), Some(50));
    /// assert_eq!(tree.lookup(&60).map(|n| n.is_leaf()), Some(false));
    /// assert_eq!(tree.dfs_in_order(), [&30, &60, &70, &80]);
    ///
    /// assert_eq!(tree.delete(&50), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let slot = node::slot_of(&mut self.root, value);
        let target = slot.as_deref_mut()?;

        let removed = match (target.left.is_some(), target.right.is_some()) {
            (false, false) => {
                let target = slot.take()?;
                target.value
            }
            (true, false) => {
                let mut target = slot.take()?;
                *slot = target.left.take();
                target.value
            }
            (false, true) => {
                let mut target = slot.take()?;
                *slot = target.right.take();
                target.value
            }
            (true, true) => Self::replace_with_successor(target),
        };

        self.len -= 1;
        Some(removed)
    }

    /// Moves the in-order successor's value into `target`, unlinks the successor's node, and
    /// returns `target`'s old value. `target` must have two children.
    fn replace_with_successor(target: &mut Node<T>) -> T
    where
        T: Ord,
    {
        // The successor is owned either by `target.right` directly or by the `left` side of a
        // node further down. `take_leftmost` rewires whichever slot that is.
        let successor =
            node::take_leftmost(&mut target.right).expect("Two children => right subtree");
        let removed = mem::replace(&mut target.value, successor.value);

        target.debug_assert_ordered();
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
    ///
    /// **Note** This recurses once per level, so a chain shaped tree recurses once per node.
    pub fn bfs_recursive(&self) -> Vec<&T> {
        traversal::breadth_first_recursive(self.root())
    }

    /// The values with each node before its subtrees.
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        traversal::depth_first_stacked(self.root(), Order::Pre)
    }

    /// The values in ascending order.
    pub fn dfs_in_order(&self) -> Vec<&T> {
        traversal::depth_first_stacked(self.root(), Order::In)
    }

    /// The values with each node after its subtrees.
    pub fn dfs_post_order(&self) -> Vec<&T> {
        traversal::depth_first_stacked(self.root(), Order::Post)
    }

    /// The number of edges on the longest path from the root down to a leaf. `None` for an empty
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), None);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.height(), Some(0));
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), Some(1));
    /// ```
    pub fn height(&self) -> Option<usize> {
        metrics::height_by_levels(self.root())
    }

    /// The number of edges from the root to `value`, or `None` if it isn't in the tree.
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        metrics::depth_stacked(self.root(), value)
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
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
