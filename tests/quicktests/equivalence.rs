//! The two engines are different algorithms for the same tree, so any sequence of operations has
//! to leave both with the same shape.

use ordered_bst::{iterative, recursive};
use quickcheck_macros::quickcheck;

use crate::Op;

/// Asserts that both trees hold the same values in the same shape.
macro_rules! assert_same_tree {
    ($loops:expr, $recursion:expr) => {{
        assert_eq!($loops.len(), $recursion.len());
        assert_eq!($loops.bfs(), $recursion.bfs());
        assert_eq!($loops.dfs_pre_order(), $recursion.dfs_pre_order());
        assert_eq!($loops.dfs_in_order(), $recursion.dfs_in_order());
        assert_eq!($loops.dfs_post_order(), $recursion.dfs_post_order());
        assert_eq!($loops.height(), $recursion.height());
        assert_eq!($loops.to_string(), $recursion.to_string());
    }};
}

#[quickcheck]
fn engines_agree_at_every_step(ops: Vec<Op<i8>>) {
    let mut loops = iterative::Tree::new();
    let mut recursion = recursive::Tree::new();

    for op in ops {
        match op {
            Op::Insert(x) => assert_eq!(loops.insert(x), recursion.insert(x)),
            Op::Delete(x) => assert_eq!(loops.delete(&x), recursion.delete(&x)),
        }
        assert_same_tree!(loops, recursion);
    }
}

#[quickcheck]
fn engines_agree_on_depth(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let loops: iterative::Tree<i8> = xs.iter().copied().collect();
    let recursion: recursive::Tree<i8> = xs.iter().copied().collect();

    xs.iter()
        .chain(&probes)
        .all(|x| loops.depth(x) == recursion.depth(x) && loops.contains(x) == recursion.contains(x))
}

#[test]
fn walkthrough() {
    let mut loops = iterative::Tree::new();
    let mut recursion = recursive::Tree::new();

    for x in [50, 30, 70, 20, 40, 60, 80] {
        assert!(loops.insert(x));
        assert!(recursion.insert(x));
    }
    assert_same_tree!(loops, recursion);
    assert_eq!(loops.dfs_in_order(), [&20, &30, &40, &50, &60, &70, &80]);
    assert_eq!(loops.height(), Some(2));
    assert_eq!(recursion.depth(&80), Some(2));
    assert_eq!(recursion.depth(&100), None);

    for (x, in_order) in [
        (20, vec![&30, &40, &50, &60, &70, &80]),
        (30, vec![&40, &50, &60, &70, &80]),
        (50, vec![&40, &60, &70, &80]),
    ] {
        assert_eq!(loops.delete(&x), Some(x));
        assert_eq!(recursion.delete(&x), Some(x));
        assert_same_tree!(loops, recursion);
        assert_eq!(loops.dfs_in_order(), in_order);
    }

    assert_eq!(loops.to_string(), "[60, 40, 70, 80] (root: Node(60))");

    loops.clear();
    recursion.clear();
    assert_same_tree!(loops, recursion);
    assert_eq!(loops.to_string(), "[] (root: None)");
}

#[test]
fn sorted_input_degenerates_into_a_chain() {
    let loops: iterative::Tree<u16> = (0..500).collect();
    let recursion: recursive::Tree<u16> = (0..500).collect();

    assert_same_tree!(loops, recursion);
    assert_eq!(recursion.height(), Some(499));
    assert_eq!(loops.depth(&499), Some(499));
}
