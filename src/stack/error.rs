use thiserror::Error;

/// Errors returned by the fallible `Stack<T>` operations.
///
/// Both cases are recoverable: callers can test `is_empty()` or `is_full()`
/// up front, or match on the error after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
  /// The stack has no elements to pop or peek at.
  #[error("stack is empty")]
  EmptyStack,

  /// The stack already holds its configured maximum number of elements.
  /// Carries the configured capacity.
  #[error("stack capacity of {0} exceeded")]
  CapacityExceeded(usize),
}
