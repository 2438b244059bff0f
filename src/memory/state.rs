/// Memory state of a self referential collection.
///
/// The state advances whenever node positions in the storage become invalid;
/// i.e., after the storage is compacted by a memory policy or cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MemoryState {
    pub(crate) id: usize,
}

impl MemoryState {
    pub(crate) const fn successor_state(&self) -> Self {
        Self { id: self.id + 1 }
    }
}
