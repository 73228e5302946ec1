use std::collections::HashSet;

use containers::tree::Tree;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert((*x).into());
    }

    xs.iter().all(|x| tree.contains((*x).into()))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert((*x).into());
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains((*x).into()))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert((*x).into());
    }
    for delete in &deletes {
        tree.remove((*delete).into());
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains((*x).into()))
        && still_present.iter().all(|x| tree.contains((*x).into()))
}

#[quickcheck]
fn in_order_walk_is_sorted(xs: Vec<i8>) -> bool {
    let tree = xs.iter().map(|x| i32::from(*x)).collect::<Tree>();

    let mut walked = Vec::new();
    tree.walk_in_order(|value| walked.push(value));

    walked.windows(2).all(|pair| pair[0] < pair[1]) && walked.len() == tree.len()
}
