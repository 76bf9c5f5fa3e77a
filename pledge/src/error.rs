use thiserror::Error;

/// Error returned when attempting to settle a promise that has
/// already been settled.
///
/// Settlement is first-wins: the first call to
/// [`fulfill`](crate::promise::Resolver::fulfill) or
/// [`reject`](crate::promise::Resolver::reject) decides the outcome,
/// and every later attempt leaves the state untouched and reports
/// this error. Callers racing several producers against each other
/// can simply ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The promise was already fulfilled or rejected.
    #[error("promise already settled")]
    AlreadySettled,
}
