//! Breadth-first and depth-first walks over a tree, shared by both engines.
//!
//! Every traversal comes in a recursive flavour and an explicit-stack (or explicit-queue) flavour
//! that produce the same sequence. The recursive flavours mirror the textbook definitions; the
//! explicit ones don't grow the call stack with the height of the tree, which matters for
//! degenerate (chain shaped) trees.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::iterative::Tree;
//!
//! let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.bfs(), [&2, &1, &3]);
//! assert_eq!(tree.dfs_pre_order(), [&2, &1, &3]);
//! assert_eq!(tree.dfs_in_order(), [&1, &2, &3]);
//! assert_eq!(tree.dfs_post_order(), [&1, &3, &2]);
//! ```

use std::collections::VecDeque;

use crate::node::Node;

/// When a node's own value is emitted relative to its two subtrees during a depth-first walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    /// Value, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then value, then right subtree. Ascending for a valid BST.
    In,
    /// Left subtree, then right subtree, then value.
    Post,
}

/// Level-order walk using a FIFO queue.
pub(crate) fn breadth_first<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut output = Vec::new();
    let mut queue: VecDeque<&Node<T>> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        output.push(&node.value);
        queue.extend(node.left());
        queue.extend(node.right());
    }

    output
}

/// Level-order walk where each call drains one whole level of the queue and recurses on the next
/// one, so the recursion is only as deep as the tree is tall.
pub(crate) fn breadth_first_recursive<T>(root: Option<&Node<T>>) -> Vec<&T> {
    fn level<'a, T>(mut queue: VecDeque<&'a Node<T>>, mut output: Vec<&'a T>) -> Vec<&'a T> {
        if queue.is_empty() {
            return output;
        }
        for _ in 0..queue.len() {
            if let Some(node) = queue.pop_front() {
                output.push(&node.value);
                queue.extend(node.left());
                queue.extend(node.right());
            }
        }
        level(queue, output)
    }

    level(root.into_iter().collect(), Vec::new())
}

/// Depth-first walk by plain recursion.
pub(crate) fn depth_first<T>(root: Option<&Node<T>>, order: Order) -> Vec<&T> {
    fn visit<'a, T>(node: Option<&'a Node<T>>, order: Order, output: &mut Vec<&'a T>) {
        let Some(node) = node else {
            return;
        };
        if order == Order::Pre {
            output.push(&node.value);
        }
        visit(node.left(), order, output);
        if order == Order::In {
            output.push(&node.value);
        }
        visit(node.right(), order, output);
        if order == Order::Post {
            output.push(&node.value);
        }
    }

    let mut output = Vec::new();
    visit(root, order, &mut output);
    output
}

/// Work item for [`depth_first_stacked`]: either a subtree still to be expanded or a value whose
/// turn to be emitted has come.
enum Step<'a, T> {
    Expand(&'a Node<T>),
    Emit(&'a T),
}

/// Depth-first walk with an explicit stack. Items are pushed in the reverse of the order they
/// should be handled, so the output matches [`depth_first`] exactly.
pub(crate) fn depth_first_stacked<T>(root: Option<&Node<T>>, order: Order) -> Vec<&T> {
    let mut output = Vec::new();
    let mut stack: Vec<Step<'_, T>> = root.into_iter().map(Step::Expand).collect();

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Emit(value) => {
                output.push(value);
                continue;
            }
            Step::Expand(node) => node,
        };

        if order == Order::Post {
            stack.push(Step::Emit(&node.value));
        }
        stack.extend(node.right().map(Step::Expand));
        if order == Order::In {
            stack.push(Step::Emit(&node.value));
        }
        stack.extend(node.left().map(Step::Expand));
        if order == Order::Pre {
            stack.push(Step::Emit(&node.value));
        }
    }

    output
}

/// An iterator over the values of a tree in ascending order.
///
/// Created by `iter` on either tree. Only the path from the current value back up to the root is
/// kept on the stack, so this is lazy and uses `O(height)` memory.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}
