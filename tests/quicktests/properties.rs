/// Generates the same set of property tests for a tree engine. Both engines promise the same
/// behaviour so they're held to the same properties.
macro_rules! properties {
    ($engine:ident) => {
        mod $engine {
            use std::collections::{BTreeSet, HashSet};

            use ordered_bst::$engine::Tree;
            use quickcheck_macros::quickcheck;

            use crate::Op;

            /// Applies a set of operations to a tree and a `BTreeSet`. Returns whether every
            /// operation returned the same thing on both and whether the tree stayed sorted.
            fn do_ops(ops: &[Op<i8>], bst: &mut Tree<i8>, set: &mut BTreeSet<i8>) -> bool {
                ops.iter().all(|op| {
                    let agrees = match op {
                        Op::Insert(x) => bst.insert(*x) == set.insert(*x),
                        Op::Delete(x) => bst.delete(x) == set.take(x),
                    };
                    let ascending = bst.dfs_in_order().windows(2).all(|w| w[0] < w[1]);

                    agrees && ascending && bst.len() == set.len()
                })
            }

            #[quickcheck]
            fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
                let mut tree = Tree::new();
                let mut set = BTreeSet::new();

                do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
            }

            #[quickcheck]
            fn contains(xs: Vec<i8>) -> bool {
                let tree: Tree<i8> = xs.iter().copied().collect();

                xs.iter().all(|x| tree.contains(x))
            }

            #[quickcheck]
            fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
                let tree: Tree<i8> = xs.iter().copied().collect();
                let added: HashSet<_> = xs.into_iter().collect();
                let nots: HashSet<_> = nots.into_iter().collect();
                let mut nots = nots.difference(&added);

                nots.all(|x| tree.lookup(x).is_none())
            }

            #[quickcheck]
            fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
                let mut tree: Tree<i8> = xs.iter().copied().collect();
                for delete in &deletes {
                    tree.delete(delete);
                }

                let mut still_present = xs;
                still_present.retain(|x| !deletes.contains(x));

                deletes.iter().all(|x| !tree.contains(x))
                    && still_present.iter().all(|x| tree.contains(x))
            }

            #[quickcheck]
            fn duplicate_is_rejected(xs: Vec<i8>, x: i8) -> bool {
                let mut tree: Tree<i8> = xs.iter().copied().collect();
                let before = tree.len();
                let fresh = tree.insert(x);
                let after = tree.len();

                fresh == !xs.contains(&x)
                    && after == before + usize::from(fresh)
                    && !tree.insert(x)
                    && tree.len() == after
            }

            #[quickcheck]
            fn deleting_a_leaf_moves_nothing_else(xs: Vec<i8>) -> bool {
                let tree: Tree<i8> = xs.iter().copied().collect();

                tree.iter()
                    .filter(|x| tree.lookup(x).map_or(false, |n| n.is_leaf()))
                    .all(|x| {
                        let mut after = tree.clone();
                        after.delete(x) == Some(*x)
                            && tree
                                .iter()
                                .filter(|v| *v != x)
                                .all(|v| after.depth(v) == tree.depth(v))
                    })
            }

            #[quickcheck]
            fn one_child_is_promoted(xs: Vec<i8>) -> bool {
                let tree: Tree<i8> = xs.iter().copied().collect();

                tree.iter()
                    .filter_map(|x| {
                        let node = tree.lookup(x)?;
                        match (node.left(), node.right()) {
                            (Some(child), None) | (None, Some(child)) => Some((x, child.value())),
                            _ => None,
                        }
                    })
                    .all(|(x, child)| {
                        let mut after = tree.clone();
                        after.delete(x);
                        after.depth(child) == tree.depth(x)
                    })
            }

            #[quickcheck]
            fn two_children_take_the_successor(xs: Vec<i8>) -> bool {
                let tree: Tree<i8> = xs.iter().copied().collect();

                tree.iter()
                    .filter(|x| {
                        tree.lookup(x)
                            .map_or(false, |n| n.left().is_some() && n.right().is_some())
                    })
                    .all(|x| {
                        let successor = tree.iter().find(|v| *v > x).copied();
                        let mut after = tree.clone();

                        after.delete(x) == Some(*x)
                            && !after.contains(x)
                            && successor.map_or(false, |s| after.depth(&s) == tree.depth(x))
                            && after.len() == tree.len() - 1
                    })
            }

            #[quickcheck]
            fn height_is_deepest_depth(xs: Vec<i8>) -> bool {
                let tree: Tree<i8> = xs.iter().copied().collect();
                let deepest = tree.iter().filter_map(|x| tree.depth(x)).max();

                tree.height() == deepest && tree.height().is_none() == tree.is_empty()
            }

            fn sorted(mut values: Vec<&i8>) -> Vec<&i8> {
                values.sort();
                values
            }

            #[quickcheck]
            fn traversals_visit_everything_once(xs: Vec<i8>) -> bool {
                let tree: Tree<i8> = xs.iter().copied().collect();
                let in_order = tree.dfs_in_order();
                tree.bfs() == tree.bfs_recursive()
                    && sorted(tree.bfs()) == in_order
                    && sorted(tree.dfs_pre_order()) == in_order
                    && sorted(tree.dfs_post_order()) == in_order
                    && tree.iter().eq(in_order.iter().copied())
                    && in_order.len() == tree.len()
            }

            #[quickcheck]
            fn clone_keeps_shape(xs: Vec<i8>) -> bool {
                let tree: Tree<i8> = xs.iter().copied().collect();
                let copy = tree.clone();

                copy.bfs() == tree.bfs() && copy.len() == tree.len()
            }

            #[quickcheck]
            fn min_and_max(xs: Vec<i8>) -> bool {
                let tree: Tree<i8> = xs.iter().copied().collect();

                tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
            }

            #[quickcheck]
            fn clear_releases_everything(xs: Vec<i8>) -> bool {
                let mut tree: Tree<i8> = xs.iter().copied().collect();
                tree.clear();

                tree.is_empty()
                    && tree.len() == 0
                    && tree.height().is_none()
                    && xs.iter().all(|x| !tree.contains(x))
            }
        }
    };
}

properties!(iterative);
properties!(recursive);
