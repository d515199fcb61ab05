use thiserror::Error;

/// The error type for registry operations.
///
/// Every variant signals a wiring or startup-ordering bug rather than a
/// transient condition, so none of them are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// A second process-wide `Registry` was requested.
  #[error("Registry singleton already exists.")]
  DuplicateSingleton,

  /// `resolve` was called before `bootstrap`.
  #[error("No modules defined.")]
  NoModulesDefined,

  /// The name was never declared, or is declared but not yet instantiated.
  #[error("\"{0}\" has not been bootstrapped.")]
  NotBootstrapped(String),

  /// The name exists but its instance was registered under another capability type.
  #[error("\"{name}\" is not registered as {expected}.")]
  TypeMismatch {
    name: String,
    expected: &'static str,
  },

  /// `bootstrap` was called on a registry that is already active.
  #[error("Registry has already been bootstrapped.")]
  AlreadyBootstrapped,
}

/// A specialized `Result` type for `fibre_registry` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
