use super::{Branch, RcTree, TreeError, TreePtr, TreeVariant};
use crate::Node;
use alloc::vec;
use orx_pinned_vec::PinnedVec;

impl<T, P> RcTree<T, P>
where
    P: PinnedVec<Node<TreeVariant<T>>>,
{
    /// Replaces the child of `node` on `branch` with `child`.
    ///
    /// The new child is retained before the old one is released, so that setting the child
    /// which is already held does not destroy it on the way. The old child is released
    /// before the branch is overwritten.
    pub(super) fn replace_child(
        &mut self,
        node: TreePtr<T>,
        branch: Branch,
        child: Option<TreePtr<T>>,
    ) -> Result<(), TreeError> {
        if let Some(child) = child {
            if self.reaches(child, node) {
                return Err(TreeError::WouldCycle);
            }
            let slot = self.col.data_mut(&child);
            slot.ref_count += 1;
            slot.num_holders += 1;
        }

        if let Some(old) = self.col.node_mut(&node).next_mut().take(branch.position()) {
            _ = self.release_ptr(old, Some(node));
        }

        if let Some(child) = child {
            self.col
                .node_mut(&node)
                .next_mut()
                .set(branch.position(), Some(child));
            self.col.node_mut(&child).prev_mut().set_some(node);
        }

        Ok(())
    }

    /// Returns true if `target` is `from` itself or a node of the subtree below `from`.
    fn reaches(&self, from: TreePtr<T>, target: TreePtr<T>) -> bool {
        let mut stack = vec![from];
        while let Some(ptr) = stack.pop() {
            if ptr == target {
                return true;
            }
            stack.extend(self.col.node(&ptr).next().iter());
        }
        false
    }
}
