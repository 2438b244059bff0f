use super::{Branch, RcTree, TreePtr, TreeVariant};
use crate::Node;
use alloc::vec::Vec;
use orx_pinned_vec::PinnedVec;

/// Pending work of a release cascade.
enum Step<T> {
    /// Decrement the reference count of `node` on behalf of the dying `holder`.
    Release { node: TreePtr<T>, holder: TreePtr<T> },
    /// Close `node` and dispose its value; its children are already released.
    Destroy(TreePtr<T>),
}

impl<T, P> RcTree<T, P>
where
    P: PinnedVec<Node<TreeVariant<T>>>,
{
    /// Releases the node at `node` on behalf of `holder`, which is either the node
    /// dropping it as a child or None for an external handle.
    ///
    /// Returns the remaining reference count of `node`.
    ///
    /// Destruction is post-order: the left subtree, the right subtree and then the
    /// node's own value. The cascade runs on an explicit stack so that the depth of
    /// the tree is not bounded by the call stack.
    pub(super) fn release_ptr(&mut self, node: TreePtr<T>, holder: Option<TreePtr<T>>) -> usize {
        let mut stack = Vec::new();
        let remaining = self.decrement(node, holder, &mut stack);

        while let Some(step) = stack.pop() {
            match step {
                Step::Release { node, holder } => {
                    _ = self.decrement(node, Some(holder), &mut stack);
                }
                Step::Destroy(node) => self.destroy(node),
            }
        }

        if self.col.is_empty() && self.col.nodes().len() > 0 {
            log::debug!(
                "all tree nodes are destroyed, clearing {} closed positions",
                self.col.nodes().len()
            );
            self.col.clear();
            self.vacant.clear();
        }

        remaining
    }

    fn decrement(
        &mut self,
        node: TreePtr<T>,
        holder: Option<TreePtr<T>>,
        stack: &mut Vec<Step<T>>,
    ) -> usize {
        let slot = self.col.data_mut(&node);
        debug_assert!(slot.ref_count > 0);
        slot.ref_count -= 1;
        if holder.is_some() {
            slot.num_holders -= 1;
        }
        let remaining = slot.ref_count;

        match remaining {
            0 => {
                stack.push(Step::Destroy(node));

                let children = self.col.node_mut(&node).next_mut();
                let left = children.take(Branch::Left.position());
                let right = children.take(Branch::Right.position());

                // pushed in reverse so that the left subtree is released first
                for child in [right, left].into_iter().flatten() {
                    stack.push(Step::Release {
                        node: child,
                        holder: node,
                    });
                }
            }
            _ => {
                log::trace!("tree node released, {remaining} references remain");
                if let Some(holder) = holder {
                    self.unlink_parent(node, holder);
                }
            }
        }

        remaining
    }

    fn destroy(&mut self, node: TreePtr<T>) {
        let slot = self.col.close_and_reclaim(&node);
        self.vacant.push(node);
        log::trace!("tree node destroyed");
        if let Some(value) = slot.value {
            value.dispose();
        }
    }

    /// Moves the parent link of the surviving `child` away from `holder` if `holder` no
    /// longer holds it; the link falls back to another holder, if any.
    pub(super) fn unlink_parent(&mut self, child: TreePtr<T>, holder: TreePtr<T>) {
        let still_held = self.col.node(&holder).next().contains(child);
        if still_held || !self.col.node(&child).prev().is(holder) {
            return;
        }

        let parent = match self.col.data(&child).num_holders {
            0 => None,
            _ => self.find_holder(child),
        };
        self.col.node_mut(&child).prev_mut().set(parent);
    }

    /// Returns a live node holding `child` on either of its branches.
    fn find_holder(&self, child: TreePtr<T>) -> Option<TreePtr<T>> {
        (0..self.col.nodes().len())
            .map(|position| self.col.node_ptr_at_pos(position))
            .find(|ptr| {
                let node = self.col.node(ptr);
                node.is_active() && node.next().contains(child)
            })
    }
}
