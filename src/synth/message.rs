use prost_reflect::{DynamicMessage, MessageDescriptor};

use super::{RecursionGuard, Synthesizer};
use crate::error::Error;
use crate::source::RandomSource;

impl<R: RandomSource + ?Sized> Synthesizer<'_, R> {
    /// Populates every field of `descriptor`.
    ///
    /// The member of each oneof is chosen before any field is generated.
    /// Fields are then visited in declaration order so a fixed seed always
    /// consumes the stream identically. Any error aborts the whole message.
    pub(super) fn message(
        &mut self,
        descriptor: &MessageDescriptor,
        guard: RecursionGuard,
    ) -> Result<DynamicMessage, Error> {
        tracing::trace!(
            message = descriptor.full_name(),
            remaining_depth = guard.remaining(),
            "generating fields"
        );

        let mut selected = Vec::new();
        for oneof in descriptor.oneofs() {
            if let Some(member) = self.select_oneof(&oneof) {
                tracing::trace!(
                    oneof = oneof.name(),
                    member = member.name(),
                    "selected oneof member"
                );
                selected.push(member.number());
            }
        }

        let mut message = DynamicMessage::new(descriptor.clone());
        for field in descriptor.fields() {
            if field.containing_oneof().is_some() && !selected.contains(&field.number()) {
                continue;
            }

            let value = if field.is_map() {
                self.map(&field, guard)?
            } else if field.is_list() {
                self.list(&field, guard)?
            } else {
                self.value(&field, &field.kind(), guard)?
            };
            message.set_field(&field, value);
        }

        Ok(message)
    }
}
