/// Remaining levels of nested messages that may still be generated.
///
/// Every nested message field consumes one level. Once the budget is spent
/// the field holds the default instance of its type instead, which is what
/// terminates self-referential and mutually recursive schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RecursionGuard {
    remaining: usize,
}

impl RecursionGuard {
    pub(crate) fn new(budget: usize) -> Self {
        Self { remaining: budget }
    }

    pub(crate) fn remaining(self) -> usize {
        self.remaining
    }

    /// The guard for one level deeper, or `None` once the budget is spent.
    pub(crate) fn descend(self) -> Option<Self> {
        self.remaining.checked_sub(1).map(Self::new)
    }
}
