//! Height and depth. `None` stands for the `-1` of the usual textbook definitions: the height of
//! an empty tree, or the depth of a value that isn't stored.

use std::collections::VecDeque;

use crate::node::Node;

/// Longest root-to-leaf path, counted in edges, by recursive descent.
pub(crate) fn height<T>(node: Option<&Node<T>>) -> Option<usize> {
    let node = node?;
    let tallest_child = match (height(node.left()), height(node.right())) {
        (None, None) => return Some(0),
        (left, right) => left.max(right),
    };
    tallest_child.map(|h| h + 1)
}

/// Same as [`height`] but counts levels of a breadth-first walk instead of recursing.
pub(crate) fn height_by_levels<T>(root: Option<&Node<T>>) -> Option<usize> {
    let mut level: VecDeque<&Node<T>> = root.into_iter().collect();
    let mut levels: usize = 0;

    while !level.is_empty() {
        levels += 1;
        for _ in 0..level.len() {
            if let Some(node) = level.pop_front() {
                level.extend(node.left());
                level.extend(node.right());
            }
        }
    }

    levels.checked_sub(1)
}

/// Number of edges between the root and the node holding `value`.
///
/// This deliberately doesn't use the ordering of the tree: it searches the left subtree before the
/// right one and stops at the first match, so it only needs `PartialEq`.
pub(crate) fn depth<T>(node: Option<&Node<T>>, value: &T) -> Option<usize>
where
    T: PartialEq,
{
    fn search<T: PartialEq>(node: Option<&Node<T>>, value: &T, current: usize) -> Option<usize> {
        let node = node?;
        if node.value == *value {
            return Some(current);
        }
        search(node.left(), value, current + 1).or_else(|| search(node.right(), value, current + 1))
    }

    search(node, value, 0)
}

/// Same as [`depth`] with an explicit stack. The right child is pushed before the left one so the
/// left subtree is still searched first.
pub(crate) fn depth_stacked<T>(root: Option<&Node<T>>, value: &T) -> Option<usize>
where
    T: PartialEq,
{
    let mut stack: Vec<(&Node<T>, usize)> = root.into_iter().map(|node| (node, 0)).collect();

    while let Some((node, current)) = stack.pop() {
        if node.value == *value {
            return Some(current);
        }
        stack.extend(node.right().map(|right| (right, current + 1)));
        stack.extend(node.left().map(|left| (left, current + 1)));
    }

    None
}
