//! Error returned when a value is demanded from a container that has
//! none.

/// Why a progressive container could not produce a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum NotValued {
    /// Nothing has been requested yet.
    #[error("no value: nothing has been requested yet")]
    Empty,
    /// A request is in flight and no earlier value exists.
    #[error("no value: request still in flight")]
    Loading,
}
