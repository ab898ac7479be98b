//! The storage unit shared by both tree engines, plus the slot-level helpers that don't depend on
//! which engine owns the nodes.

use std::cmp::Ordering;
use std::fmt;

/// An owning, possibly empty, child slot. Either a tree's root field or one side of a parent.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single value in a tree along with the (possibly empty) subtrees hanging off of it.
///
/// `Node`s are only handed out by reference (see `lookup` on either tree) so they can be inspected
/// but never rewired from outside the owning tree.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, whose values are all smaller than this node's.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose values are all larger than this node's.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The slot a search for a value ordered `ordering` relative to this node continues into.
    fn child_mut(&mut self, ordering: Ordering) -> &mut Link<T> {
        match ordering {
            Ordering::Less => &mut self.left,
            _ => &mut self.right,
        }
    }

    /// Panics (in debug builds only) if either child is on the wrong side of this node.
    pub(crate) fn debug_assert_ordered(&self)
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(self.value > left.value);
            }
            if let Some(right) = self.right() {
                assert!(self.value < right.value);
            }
        }
    }
}

/// Shows the children by value only. `Nodes` lists a whole subtree.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// `Debug` for every node of a subtree, listed in pre-order with an explicit stack.
pub(crate) struct Nodes<'a, T>(pub(crate) Option<&'a Node<T>>);

impl<T> fmt::Debug for Nodes<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut stack: Vec<&Node<T>> = self.0.into_iter().collect();
        while let Some(node) = stack.pop() {
            list.entry(node);
            stack.extend(node.right());
            stack.extend(node.left());
        }
        list.finish()
    }
}

impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.value)
    }
}

/// Writes `values` as a bracketed list followed by the root, e.g. `[2, 1, 3] (root: Node(2))`.
pub(crate) fn fmt_summary<T>(
    f: &mut fmt::Formatter<'_>,
    values: &[&T],
    root: Option<&Node<T>>,
) -> fmt::Result
where
    T: fmt::Display,
{
    write!(f, "[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    match root {
        Some(root) => write!(f, "] (root: {})", root),
        None => write!(f, "] (root: None)"),
    }
}

/// Walks down from `root` and returns the slot that either holds `value` or is the empty slot
/// where `value` would be attached as a new leaf.
///
/// The returned slot is what a parent-tracking search would describe as "the parent's left or
/// right side", or the root field itself when there is no parent.
pub(crate) fn slot_of<'a, T>(root: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    let mut slot = root;
    loop {
        // Compare through a shared borrow first so the `Equal` exit doesn't hold a mutable one.
        match slot.as_deref().map(|node| value.cmp(&node.value)) {
            None | Some(Ordering::Equal) => return slot,
            Some(ordering) => {
                if let Some(node) = slot {
                    slot = node.child_mut(ordering);
                }
            }
        }
    }
}

/// Detaches the leftmost node of the subtree in `slot`, splicing that node's right child into the
/// slot it leaves behind. Returns `None` only if `slot` is empty.
///
/// The slot that ends up owning the leftmost node is either `slot` itself (the subtree root has no
/// left child) or the `left` side of some node further down. Rewiring "the slot that owned it"
/// covers both, so a caller passing a node's `right` slot never loses that node's `left` subtree.
pub(crate) fn take_leftmost<T>(slot: &mut Link<T>) -> Link<T> {
    let mut slot = slot;
    while slot.as_ref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = slot {
            slot = &mut node.left;
        }
    }

    let mut leftmost = slot.take()?;
    *slot = leftmost.right.take();
    Some(leftmost)
}

/// Follows `left` (or `right`) links from `link` to the end.
pub(crate) fn extreme<T>(link: &Link<T>, ordering: Ordering) -> Option<&T> {
    let mut node = link.as_deref()?;
    loop {
        let next = match ordering {
            Ordering::Less => node.left(),
            _ => node.right(),
        };
        match next {
            Some(next) => node = next,
            None => return Some(&node.value),
        }
    }
}

/// Drops every node under `link` without recursing, leaving the slot empty.
pub(crate) fn release<T>(link: &mut Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Builds a copy of the subtree in `link` with the same shape. Inserting values in pre-order
/// places every value under the same ancestors it had in the original.
pub(crate) fn clone_link<T>(link: &Link<T>) -> Link<T>
where
    T: Clone + Ord,
{
    let mut copy = None;
    let mut stack: Vec<&Node<T>> = link.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
        let slot = slot_of(&mut copy, &node.value);
        *slot = Some(Node::new_boxed(node.value.clone()));

        stack.extend(node.right());
        stack.extend(node.left());
    }

    copy
}
