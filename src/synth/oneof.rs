use prost_reflect::{FieldDescriptor, OneofDescriptor};

use super::Synthesizer;
use crate::source::RandomSource;

impl<R: RandomSource + ?Sized> Synthesizer<'_, R> {
    /// Picks the member of `oneof` to populate.
    ///
    /// A single-member group is returned without a draw. An empty group
    /// selects nothing.
    pub(super) fn select_oneof(&mut self, oneof: &OneofDescriptor) -> Option<FieldDescriptor> {
        let mut members: Vec<_> = oneof.fields().collect();
        match members.len() {
            0 => None,
            1 => members.pop(),
            len => {
                let index = self.source.intn(len);
                members.into_iter().nth(index)
            }
        }
    }
}
