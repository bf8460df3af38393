//! Per-call mapping context.

use xamlify_core::{Options, ResourceLookup};

/// Options and project lookups handed to every mapping function.
///
/// The context is read-only; mappers never mutate it.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    options: &'a Options,
    project: &'a dyn ResourceLookup,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a Options, project: &'a dyn ResourceLookup) -> Self {
        Self { options, project }
    }

    pub fn options(&self) -> &'a Options {
        self.options
    }

    pub fn project(&self) -> &'a dyn ResourceLookup {
        self.project
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("options", self.options)
            .finish_non_exhaustive()
    }
}
