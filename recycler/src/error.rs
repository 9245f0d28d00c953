use thiserror::Error;

/// Errors returned by [`crate::VirtualList::initialize`].
///
/// A failed initialization leaves the list inert; ticks do nothing until it succeeds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// No [`crate::SlotFactory`] was provided.
    #[error("no slot factory is set")]
    MissingSlotFactory,

    /// No [`crate::LayoutSource`] was provided.
    #[error("no layout source is set")]
    MissingLayoutSource,

    /// The list was torn down and cannot be brought back.
    #[error("the list has been torn down")]
    TornDown,
}
