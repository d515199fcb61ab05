//! The process-wide slot is shared by every test in a binary, so this file
//! holds a single test.

use fibre_registry::{is_claimed, Error, Key, Registry};
use std::rc::Rc;

#[test]
fn test_only_one_process_wide_registry() {
  const VALUE: Key<u32> = Key::new("value");

  // Isolated registries never touch the slot.
  let _isolated = Registry::isolated();
  assert!(!is_claimed());

  // Arrange
  let registry = Registry::new().unwrap();
  assert!(is_claimed());

  // Act
  let second = Registry::new();

  // Assert
  assert_eq!(second.err(), Some(Error::DuplicateSingleton));

  // The first registry keeps working.
  registry.register(VALUE, (), |()| Rc::new(42)).unwrap();
  registry.bootstrap(&["value"]).unwrap();
  assert_eq!(*registry.resolve(VALUE).unwrap(), 42);

  // Dropping it does not free the slot.
  drop(registry);
  assert!(matches!(Registry::new(), Err(Error::DuplicateSingleton)));
}
