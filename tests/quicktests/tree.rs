use bst::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                bst.remove(v);
                set.remove(v);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len()
            && tree.iter().eq(set.iter())
            && tree.iter().rev().eq(set.iter().rev())
    }

    fn ascending_and_unique(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let unique: HashSet<_> = xs.iter().collect();
        let values: Vec<_> = tree.iter().collect();

        values.len() == unique.len() && values.windows(2).all(|pair| pair[0] < pair[1])
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.find(x))
    }

    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for remove in &removes {
            tree.remove(remove);
        }

        let still_present: BTreeSet<_> = xs.iter().filter(|x| !removes.contains(*x)).collect();

        removes.iter().all(|x| !tree.find(x))
            && still_present.iter().all(|x| tree.find(*x))
            && tree.len() == still_present.len()
    }

    fn clone_is_independent(xs: Vec<i8>, extra: i8) -> bool {
        let original: Tree<_> = xs.iter().copied().collect();
        let before: Vec<_> = original.iter().copied().collect();

        let mut copy = original.clone();
        copy.insert(extra);
        if let Ok(&min) = original.min() {
            copy.remove(&min);
        }

        original.iter().copied().eq(before)
            && original.len() == xs.iter().collect::<HashSet<_>>().len()
    }

    fn take_empties_source(xs: Vec<i8>) -> bool {
        let mut source: Tree<_> = xs.iter().copied().collect();
        let expected: Vec<_> = source.iter().copied().collect();

        let moved = std::mem::take(&mut source);

        source.is_empty()
            && xs.iter().all(|x| !source.find(x))
            && moved.iter().copied().eq(expected)
    }

    fn same_insertion_order_is_equal(xs: Vec<i8>) -> bool {
        let a: Tree<_> = xs.iter().copied().collect();
        let b: Tree<_> = xs.iter().copied().collect();

        a == b && b == a && a == a
    }

    fn extremes(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        tree.min().ok() == xs.iter().min() && tree.max().ok() == xs.iter().max()
    }

    fn height_is_bounded(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        (tree.is_empty() || tree.height() >= 1) && tree.height() <= tree.len()
    }

    fn into_iter_matches_iter(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let borrowed: Vec<_> = tree.iter().copied().collect();

        tree.into_iter().eq(borrowed)
    }
}

#[test]
fn sorted_insertions_degenerate() {
    let tree: Tree<_> = (0..500).collect();

    assert_eq!(tree.height(), 500);
    assert_eq!(tree.len(), 500);
    assert!(tree.iter().copied().eq(0..500));
}
