//! Typed component keys.

use std::fmt;
use std::marker::PhantomData;

/// The name of a component paired with the capability type it is resolved as.
///
/// `T` is usually a trait object (`dyn MyService`), so that callers program
/// against the contract and never against the concrete implementation:
///
/// ```
/// use fibre_registry::Key;
///
/// trait Clock {
///   fn now(&self) -> u64;
/// }
///
/// const CLOCK: Key<dyn Clock> = Key::new("IClock");
/// assert_eq!(CLOCK.name(), "IClock");
/// ```
pub struct Key<T: ?Sized + 'static> {
  name: &'static str,
  // `fn() -> *const T` keeps the key `Copy`, `Send` and `Sync` whatever `T` is.
  _contract: PhantomData<fn() -> *const T>,
}

impl<T: ?Sized + 'static> Key<T> {
  pub const fn new(name: &'static str) -> Self {
    Self {
      name,
      _contract: PhantomData,
    }
  }

  pub const fn name(&self) -> &'static str {
    self.name
  }
}

impl<T: ?Sized + 'static> Clone for Key<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T: ?Sized + 'static> Copy for Key<T> {}

impl<T: ?Sized + 'static> fmt::Debug for Key<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Key({}: {})", self.name, std::any::type_name::<T>())
  }
}
