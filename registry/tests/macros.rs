//! Tests for the resolution macros:
//! - `resolve!`
//! - `maybe_resolve!`

use fibre_registry::{maybe_resolve, resolve, Key, Registry};
use std::rc::Rc;

// --- Test Fixtures ---

trait MacroTestTrait {
  fn value(&self) -> i32;
}

struct MacroTestService {
  value: i32,
}
impl MacroTestTrait for MacroTestService {
  fn value(&self) -> i32 {
    self.value
  }
}

const SERVICE: Key<dyn MacroTestTrait> = Key::new("IMacroTest");
const UNREGISTERED: Key<dyn MacroTestTrait> = Key::new("IUnregistered");

fn bootstrapped() -> Registry {
  let registry = Registry::isolated();
  registry
    .register(SERVICE, (), |()| Rc::new(MacroTestService { value: 42 }))
    .unwrap();
  registry.bootstrap(&["IMacroTest"]).unwrap();
  registry
}

// --- Macro Tests ---

#[test]
fn test_resolve_returns_instance() {
  let registry = bootstrapped();

  let service = resolve!(registry, SERVICE);

  assert_eq!(service.value(), 42);
  assert!(Rc::ptr_eq(&service, &resolve!(&registry, SERVICE)));
}

#[test]
fn test_maybe_resolve() {
  let registry = bootstrapped();

  assert_eq!(maybe_resolve!(registry, SERVICE).unwrap().value(), 42);
  assert!(maybe_resolve!(registry, UNREGISTERED).is_none());
}

#[test]
fn test_maybe_resolve_before_bootstrap_is_none() {
  let registry = Registry::isolated();
  registry
    .register(SERVICE, (), |()| Rc::new(MacroTestService { value: 1 }))
    .unwrap();

  assert!(maybe_resolve!(registry, SERVICE).is_none());
}

#[test]
#[should_panic(expected = "Failed to resolve required component 'IUnregistered'")]
fn test_resolve_panics_on_missing_component() {
  let registry = bootstrapped();
  resolve!(registry, UNREGISTERED);
}

#[test]
#[should_panic(expected = "No modules defined.")]
fn test_resolve_panics_before_bootstrap() {
  let registry = Registry::isolated();
  resolve!(registry, SERVICE);
}
