use orx_refcount_col::*;
use std::{cell::RefCell, rc::Rc};
use test_case::test_case;

type Log = Rc<RefCell<Vec<&'static str>>>;

fn recorder(log: &Log, name: &'static str) -> Disposal<&'static str> {
    let log = log.clone();
    Disposal::callback(move |x: &'static str| {
        assert_eq!(x, name);
        log.borrow_mut().push(x);
    })
}

fn new_log() -> Log {
    Rc::new(RefCell::new(vec![]))
}

#[test]
fn root_with_left_child() {
    let log = new_log();
    let mut tree = RcTree::new();

    let r = tree.create_with("R", recorder(&log, "R"));
    let l = tree.create_with("L", recorder(&log, "L"));

    tree.set_left(r, Some(l));
    assert_eq!(tree.left(r), Some(l));
    assert_eq!(tree.right(r), None);
    assert_eq!(tree.parent(l), Some(r));
    assert_eq!(tree.parent(r), None);
    assert_eq!(tree.ref_count(l), 2);
    assert!(!tree.is_leaf(r));
    assert!(tree.is_leaf(l));

    assert_eq!(tree.release(l), 1);
    assert!(log.borrow().is_empty());
    assert_eq!(tree.value(l), Some(&"L"));

    assert_eq!(tree.release(r), 0);
    assert_eq!(log.borrow().as_slice(), &["L", "R"]);
    assert!(tree.is_empty());
}

#[test]
fn set_value_disposes_previous() {
    let log = new_log();
    let mut tree = RcTree::new();

    let n = tree.create_empty();
    assert_eq!(tree.value(n), None);

    tree.set_value_with(n, "A", recorder(&log, "A"));
    assert_eq!(tree.value(n), Some(&"A"));

    tree.set_value_with(n, "B", recorder(&log, "B"));
    assert_eq!(log.borrow().as_slice(), &["A"]);
    assert_eq!(tree.value(n), Some(&"B"));

    tree.release(n);
    assert_eq!(log.borrow().as_slice(), &["A", "B"]);
}

#[test]
fn clear_value_disposes() {
    let log = new_log();
    let mut tree = RcTree::new();

    let n = tree.create_with("A", recorder(&log, "A"));
    tree.clear_value(n);
    assert_eq!(log.borrow().as_slice(), &["A"]);
    assert_eq!(tree.value(n), None);

    tree.release(n);
    assert_eq!(log.borrow().as_slice(), &["A"]);
}

#[test]
fn value_mut() {
    let mut tree = RcTree::new();
    let n = tree.create(String::from("x"));

    if let Some(value) = tree.value_mut(n) {
        value.push('y');
    }
    assert_eq!(tree.value(n).map(|x| x.as_str()), Some("xy"));
}

#[test_case(0)]
#[test_case(1)]
#[test_case(5)]
fn retain_release_balance(num_retains: usize) {
    let log = new_log();
    let mut tree = RcTree::new();

    let n = tree.create_with("N", recorder(&log, "N"));
    for i in 0..num_retains {
        assert_eq!(tree.retain(n), n);
        assert_eq!(tree.ref_count(n), i + 2);
    }

    for i in (0..num_retains).rev() {
        assert_eq!(tree.release(n), i + 1);
        assert!(log.borrow().is_empty());
    }

    assert_eq!(tree.release(n), 0);
    assert_eq!(log.borrow().as_slice(), &["N"]);
}

#[test]
fn shared_subtree_survives_detach() {
    let log = new_log();
    let mut tree = RcTree::new();

    let a = tree.create_with("A", recorder(&log, "A"));
    let b = tree.create_with("B", recorder(&log, "B"));
    let c = tree.create_with("C", recorder(&log, "C"));

    tree.set_left(a, Some(c));
    tree.set_right(b, Some(c));
    tree.release(c);
    assert_eq!(tree.ref_count(c), 2);
    assert_eq!(tree.parent(c), Some(b));

    tree.set_right(b, None);
    assert_eq!(tree.ref_count(c), 1);
    assert!(tree.is_leaf(b));
    assert_eq!(tree.parent(c), Some(a));
    assert!(log.borrow().is_empty());

    assert_eq!(tree.release(a), 0);
    assert_eq!(log.borrow().as_slice(), &["C", "A"]);

    assert_eq!(tree.release(b), 0);
    assert_eq!(log.borrow().as_slice(), &["C", "A", "B"]);
}

#[test]
fn parent_cleared_when_surviving_child_detached() {
    let mut tree = RcTree::new();

    let p = tree.create(1);
    let c = tree.create(2);

    tree.set_left(p, Some(c));
    assert_eq!(tree.parent(c), Some(p));

    tree.set_left(p, None);
    assert_eq!(tree.parent(c), None);
    assert_eq!(tree.ref_count(c), 1);
    assert!(tree.is_valid(c));
}

#[test]
fn parent_kept_while_other_branch_holds_child() {
    let mut tree = RcTree::new();

    let p = tree.create(1);
    let c = tree.create(2);

    tree.set_left(p, Some(c));
    tree.set_right(p, Some(c));
    assert_eq!(tree.ref_count(c), 3);

    tree.set_left(p, None);
    assert_eq!(tree.parent(c), Some(p));
    assert_eq!(tree.ref_count(c), 2);
}

#[test]
fn parent_of_destroyed_holder_is_cleared() {
    let mut tree = RcTree::new();

    let p = tree.create(1);
    let c = tree.create(2);

    tree.set_left(p, Some(c));
    assert_eq!(tree.release(p), 0);

    assert!(tree.is_valid(c));
    assert_eq!(tree.parent(c), None);
    assert_eq!(tree.ref_count(c), 1);
}

#[test]
fn set_same_child_twice() {
    let log = new_log();
    let mut tree = RcTree::new();

    let p = tree.create_with("P", recorder(&log, "P"));
    let c = tree.create_with("C", recorder(&log, "C"));

    tree.set_left(p, Some(c));
    tree.release(c);
    assert_eq!(tree.ref_count(c), 1);

    tree.set_left(p, Some(c));
    assert_eq!(tree.ref_count(c), 1);
    assert_eq!(tree.left(p), Some(c));
    assert_eq!(tree.parent(c), Some(p));
    assert!(log.borrow().is_empty());
}

#[test]
fn replacing_child_releases_old() {
    let log = new_log();
    let mut tree = RcTree::new();

    let p = tree.create_with("P", recorder(&log, "P"));
    let a = tree.create_with("A", recorder(&log, "A"));
    let b = tree.create_with("B", recorder(&log, "B"));

    tree.set_right(p, Some(a));
    tree.release(a);

    tree.set_right(p, Some(b));
    tree.release(b);
    assert_eq!(log.borrow().as_slice(), &["A"]);
    assert!(!tree.is_valid(a));
    assert_eq!(tree.right(p), Some(b));

    tree.release(p);
    assert_eq!(log.borrow().as_slice(), &["A", "B", "P"]);
}

#[test]
fn cyclic_attachment_is_rejected() {
    let mut tree = RcTree::new();

    let a = tree.create(1);
    let b = tree.create(2);
    let c = tree.create(3);

    tree.set_left(a, Some(b));
    tree.set_right(b, Some(c));

    assert_eq!(tree.try_set_left(a, Some(a)), Err(TreeError::WouldCycle));
    assert_eq!(tree.try_set_left(c, Some(a)), Err(TreeError::WouldCycle));
    assert_eq!(tree.try_set_right(b, Some(a)), Err(TreeError::WouldCycle));

    assert_eq!(tree.ref_count(a), 1);
    assert_eq!(tree.right(b), Some(c));
    assert!(tree.is_leaf(c));
}

#[test]
#[should_panic]
fn set_child_panics_on_cycle() {
    let mut tree = RcTree::new();
    let a = tree.create(1);
    tree.set_left(a, Some(a));
}

#[test]
fn try_release_after_destruction() {
    let mut tree = RcTree::new();

    let keep = tree.create(0);
    let n = tree.create(1);

    assert_eq!(tree.try_release(n), Ok(0));
    assert_eq!(
        tree.try_release(n),
        Err(TreeError::InvalidNode(NodeIdxError::RemovedNode))
    );
    assert_eq!(
        tree.try_set_left(keep, Some(n)),
        Err(TreeError::InvalidNode(NodeIdxError::RemovedNode))
    );
    assert_eq!(tree.ref_count(keep), 1);
}

#[test]
#[should_panic]
fn release_panics_when_over_released() {
    let mut tree = RcTree::new();

    let _keep = tree.create(0);
    let n = tree.create(1);
    tree.release(n);
    tree.release(n);
}

#[test]
fn post_order_disposal() {
    let log = new_log();
    let mut tree = RcTree::new();

    //        R
    //      /   \
    //     A     B
    //    / \     \
    //   C   D     E
    let r = tree.create_with("R", recorder(&log, "R"));
    let a = tree.create_with("A", recorder(&log, "A"));
    let b = tree.create_with("B", recorder(&log, "B"));
    let c = tree.create_with("C", recorder(&log, "C"));
    let d = tree.create_with("D", recorder(&log, "D"));
    let e = tree.create_with("E", recorder(&log, "E"));

    tree.set_left(a, Some(c));
    tree.set_right(a, Some(d));
    tree.set_right(b, Some(e));
    tree.set_left(r, Some(a));
    tree.set_right(r, Some(b));
    for x in [a, b, c, d, e] {
        assert_eq!(tree.release(x), 1);
    }
    assert_eq!(tree.len(), 6);

    assert_eq!(tree.release(r), 0);
    assert_eq!(log.borrow().as_slice(), &["C", "D", "A", "E", "B", "R"]);
    assert!(tree.is_empty());
    assert_eq!(tree.utilization().num_closed_nodes, 0);
}

#[test]
fn deep_chain_release() {
    let num_nodes = 100_000;
    let disposed = Rc::new(RefCell::new(0usize));
    let mut tree = RcTree::new();

    let make = |tree: &mut RcTree<usize>, i: usize| {
        let disposed = disposed.clone();
        tree.create_with(
            i,
            Disposal::callback(move |_| *disposed.borrow_mut() += 1),
        )
    };

    let root = make(&mut tree, 0);
    let mut last = root;
    for i in 1..num_nodes {
        let node = make(&mut tree, i);
        tree.set_left(last, Some(node));
        tree.release(node);
        last = node;
    }
    assert_eq!(tree.len(), num_nodes);
    assert_eq!(tree.parent(last).and_then(|p| tree.value(p).copied()), Some(num_nodes - 2));

    assert_eq!(tree.release(root), 0);
    assert_eq!(*disposed.borrow(), num_nodes);
    assert!(tree.is_empty());
}

#[test]
fn drop_disposes_remaining_values() {
    let log = new_log();

    {
        let mut tree = RcTree::new();
        let a = tree.create_with("A", recorder(&log, "A"));
        let b = tree.create_with("B", recorder(&log, "B"));
        let c = tree.create_with("C", recorder(&log, "C"));
        tree.set_left(a, Some(c));
        tree.release(b);
        assert_eq!(log.borrow().as_slice(), &["B"]);
    }

    assert_eq!(log.borrow().as_slice(), &["B", "A", "C"]);
}

#[test]
fn forget_runs_no_destructor() {
    let tracker = Rc::new(());
    let mut tree = RcTree::new();

    let n = tree.create_with(tracker.clone(), Disposal::Forget);
    assert_eq!(Rc::strong_count(&tracker), 2);

    tree.release(n);
    assert_eq!(Rc::strong_count(&tracker), 2);

    let m = tree.create(tracker.clone());
    tree.release(m);
    assert_eq!(Rc::strong_count(&tracker), 2);
}

#[test]
fn reorganized_after_tree_becomes_empty() {
    let mut tree = RcTree::new();

    let a = tree.create('a');
    let state = tree.memory_state();
    tree.release(a);
    assert_ne!(tree.memory_state(), state);

    let b = tree.create('b');
    assert_eq!(
        tree.try_retain(a),
        Err(TreeError::InvalidNode(NodeIdxError::ReorganizedCollection))
    );
    assert_eq!(tree.value(b), Some(&'b'));
}

#[test]
fn index_of_another_tree() {
    let mut tree = RcTree::new();
    let mut other = RcTree::new();

    let a = tree.create(1);
    let x = other.create(2);

    assert!(!tree.is_valid(x));
    assert_eq!(
        tree.try_set_left(a, Some(x)),
        Err(TreeError::InvalidNode(NodeIdxError::OutOfBounds))
    );
    assert!(tree.is_leaf(a));
    assert_eq!(other.ref_count(x), 1);
}

#[test]
fn child_by_branch() {
    let mut tree = RcTree::new();

    let p = tree.create(0);
    let l = tree.create(1);
    let r = tree.create(2);

    tree.set_child(p, Branch::Left, Some(l));
    tree.set_child(p, Branch::Right, Some(r));

    assert_eq!(tree.child(p, Branch::Left), tree.left(p));
    assert_eq!(tree.child(p, Branch::Right), tree.right(p));
    assert_eq!(tree.child(p, Branch::Right), Some(r));
}

#[test]
fn destroyed_positions_are_reused() {
    let mut tree = RcTree::new();

    let root = tree.create(0);
    for i in 1..100_000 {
        let child = tree.create(i);
        tree.set_left(root, Some(child));
        tree.release(child);
    }

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.left(root).and_then(|x| tree.value(x)), Some(&99_999));

    let utilization = tree.utilization();
    assert_eq!(utilization.num_active_nodes, 2);
    assert!(utilization.num_closed_nodes <= 1);
}

#[test]
fn stale_index_of_reused_position() {
    let mut tree = RcTree::new();

    let keep = tree.create('k');
    let a = tree.create('a');
    assert_eq!(tree.release(a), 0);

    let b = tree.create('b');
    assert_eq!(tree.utilization().num_closed_nodes, 0);
    assert_ne!(a, b);

    assert!(!tree.is_valid(a));
    assert!(tree.is_valid(b));
    assert_eq!(
        tree.try_retain(a),
        Err(TreeError::InvalidNode(NodeIdxError::RemovedNode))
    );
    assert_eq!(
        tree.try_set_left(keep, Some(a)),
        Err(TreeError::InvalidNode(NodeIdxError::RemovedNode))
    );

    assert_eq!(tree.ref_count(b), 1);
    assert_eq!(tree.value(b), Some(&'b'));
    assert!(tree.is_leaf(keep));
}

#[test]
fn parent_falls_back_to_remaining_holder() {
    let mut tree = RcTree::new();

    let a = tree.create(1);
    let b = tree.create(2);
    let x = tree.create(3);

    tree.set_left(a, Some(x));
    tree.set_right(b, Some(x));
    assert_eq!(tree.parent(x), Some(b));

    tree.set_right(b, None);
    assert_eq!(tree.parent(x), Some(a));

    assert_eq!(tree.release(a), 0);
    assert_eq!(tree.parent(x), None);
    assert_eq!(tree.ref_count(x), 1);
}

#[test]
fn parent_falls_back_when_holder_is_destroyed() {
    let mut tree = RcTree::new();

    let a = tree.create(1);
    let b = tree.create(2);
    let x = tree.create(3);

    tree.set_left(a, Some(x));
    tree.set_left(b, Some(x));
    tree.release(x);
    assert_eq!(tree.parent(x), Some(b));

    assert_eq!(tree.release(b), 0);
    assert_eq!(tree.parent(x), Some(a));
    assert_eq!(tree.ref_count(x), 1);
}
