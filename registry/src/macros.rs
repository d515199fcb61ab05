//! Public macros for ergonomic component resolution.

/// Resolves a component from a registry, panicking if it cannot be resolved.
///
/// Use it where a missing component can only mean broken startup wiring.
/// For the fallible form, call [`Registry::resolve`](crate::Registry::resolve)
/// or use [`maybe_resolve!`].
///
/// # Panics
///
/// Panics with the resolution error if the registry is not bootstrapped, the
/// name is unknown or not yet built, or it was registered under another type.
///
/// # Examples
///
/// ```
/// use fibre_registry::{resolve, Key, Registry};
/// use std::rc::Rc;
///
/// const GREETING: Key<String> = Key::new("greeting");
///
/// let registry = Registry::isolated();
/// registry.register(GREETING, (), |()| Rc::new(String::from("hello"))).unwrap();
/// registry.bootstrap(&["greeting"]).unwrap();
///
/// let message = resolve!(registry, GREETING);
/// assert_eq!(*message, "hello");
/// ```
#[macro_export]
macro_rules! resolve {
  ($registry:expr, $key:expr) => {{
    let key = $key;
    match $registry.resolve(key) {
      Ok(instance) => instance,
      Err(error) => panic!(
        "Failed to resolve required component '{}': {}",
        key.name(),
        error
      ),
    }
  }};
}

/// Resolves a component from a registry, returning `None` on any failure.
///
/// ```
/// use fibre_registry::{maybe_resolve, Key, Registry};
///
/// const MISSING: Key<u32> = Key::new("missing");
///
/// let registry = Registry::isolated();
/// assert!(maybe_resolve!(registry, MISSING).is_none());
/// ```
#[macro_export]
macro_rules! maybe_resolve {
  ($registry:expr, $key:expr) => {
    $registry.resolve($key).ok()
  };
}
