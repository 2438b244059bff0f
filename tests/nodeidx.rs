use orx_refcount_col::*;
use std::hash::{DefaultHasher, Hash, Hasher};

fn hash_single<H: Hash>(val: H) -> u64 {
    let mut hasher = DefaultHasher::new();
    val.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn copy() {
    let mut tree = RcTree::new();

    let idx1 = tree.create(0.to_string());
    let idx2 = tree.create(1.to_string());

    assert_ne!(idx1, idx2);

    let copied = idx1;

    assert_eq!(idx1, copied);
    assert_ne!(idx2, copied);
}

#[test]
fn hash() {
    let mut tree = RcTree::new();

    let idx1 = tree.create(0.to_string());
    let idx2 = tree.create(1.to_string());

    assert_ne!(hash_single(idx1), hash_single(idx2));
    assert_eq!(hash_single(idx1), hash_single(idx1));
}

#[test]
fn is_valid_for_state() {
    let mut tree = RcTree::new();

    let idx = tree.create(0);
    let state = tree.memory_state();
    assert!(idx.is_in_state(state));
    assert!(tree.is_valid(idx));

    tree.release(idx);
    assert!(!tree.is_valid(idx));
    assert_ne!(tree.memory_state(), state);
    assert!(!idx.is_in_state(tree.memory_state()));

    let new_idx = tree.create(1);
    assert!(new_idx.is_in_state(tree.memory_state()));
    assert!(!tree.is_valid(idx));
    assert!(tree.is_valid(new_idx));
}

#[test]
fn stale_index_errors() {
    let mut tree = RcTree::new();

    let keep = tree.create('k');
    let gone = tree.create('g');
    assert_eq!(tree.release(gone), 0);

    assert_eq!(
        tree.try_retain(gone),
        Err(TreeError::InvalidNode(NodeIdxError::RemovedNode))
    );

    let mut other = RcTree::new();
    let foreign = other.create('f');
    assert_eq!(
        tree.try_retain(foreign),
        Err(TreeError::InvalidNode(NodeIdxError::OutOfBounds))
    );

    assert_eq!(tree.release(keep), 0);
    let _ = tree.create('n');
    assert_eq!(
        tree.try_release(keep),
        Err(TreeError::InvalidNode(NodeIdxError::ReorganizedCollection))
    );
}
