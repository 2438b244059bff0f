use super::refs::Refs;

/// Zero-sized link storage for variants without such links.
#[derive(Clone, Debug)]
pub struct RefsNone;

impl Refs for RefsNone {
    #[inline(always)]
    fn empty() -> Self {
        Self
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        true
    }

    #[inline(always)]
    fn clear(&mut self) {}
}
