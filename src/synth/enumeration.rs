use prost_reflect::EnumDescriptor;

use super::Synthesizer;
use crate::source::RandomSource;

impl<R: RandomSource + ?Sized> Synthesizer<'_, R> {
    /// Picks the number of one of `descriptor`'s values.
    ///
    /// With two or more values the index is drawn from `[0, N-1)`, so the
    /// last declared value is never chosen. With one value that value is
    /// returned without a draw, and an enum without values yields 0.
    pub(super) fn enum_number(&mut self, descriptor: &EnumDescriptor) -> i32 {
        let len = descriptor.values().count();
        let index = if len >= 2 {
            self.source.intn(len - 1)
        } else {
            0
        };
        descriptor
            .values()
            .nth(index)
            .map_or(0, |value| value.number())
    }
}
