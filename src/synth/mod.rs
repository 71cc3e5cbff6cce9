//! Descriptor-driven random message synthesis.
//!
//! A [`Synthesizer`] borrows a [`RandomSource`] and a [`Config`] for the
//! duration of one generation call and walks a [`MessageDescriptor`]
//! depth-first. Each concern lives in its own file as a separate `impl`
//! block:
//!
//! - `message`: the walk over a message's fields, with oneof selection
//!   made up front.
//! - `field`: per-kind dispatch for a single value.
//! - `enumeration`: enum value selection.
//! - `oneof`: picking the populated member of a oneof.
//! - `collection`: the single element of a repeated field or the single
//!   entry of a map field.
//! - `recursion`: the depth budget that bounds nested messages.

mod collection;
mod enumeration;
mod field;
mod message;
mod oneof;
mod recursion;

pub(crate) use recursion::RecursionGuard;

use prost_reflect::{DynamicMessage, MessageDescriptor};

use crate::config::Config;
use crate::error::Error;
use crate::source::RandomSource;

/// State for a single generation call.
pub(crate) struct Synthesizer<'a, R: RandomSource + ?Sized> {
    source: &'a mut R,
    config: &'a Config,
}

impl<'a, R: RandomSource + ?Sized> Synthesizer<'a, R> {
    pub(crate) fn new(source: &'a mut R, config: &'a Config) -> Self {
        Self { source, config }
    }

    /// Generates a populated instance of `descriptor` with the configured
    /// depth budget.
    pub(crate) fn generate(&mut self, descriptor: &MessageDescriptor) -> Result<DynamicMessage, Error> {
        let guard = RecursionGuard::new(self.config.max_depth);
        self.message(descriptor, guard)
    }
}
