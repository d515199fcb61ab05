//! The `Registry` struct and its lifecycle.

use crate::component::Component;
use crate::core::{Entry, Pending, Recipe};
use crate::dependencies::Dependencies;
use crate::error::{Error, Result};
use crate::global;
use crate::key::Key;
use std::any::{type_name, Any};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// The lifecycle state of a [`Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
  /// Registrations are buffered; nothing has been built.
  Uninitialized,
  /// `bootstrap` has run. This state is terminal.
  Active,
}

/// The Inversion of Control (IoC) registry.
///
/// A registry starts out buffering every [`register`](Registry::register)
/// call. [`bootstrap`](Registry::bootstrap) then activates it and builds the
/// buffered components in the order they were registered. From then on,
/// [`resolve`](Registry::resolve) hands out the singletons.
///
/// # Ordering
///
/// Bootstrap does not sort components by their dependencies. A component
/// whose dependency was registered *after* it fails with
/// [`Error::NotBootstrapped`], so register dependencies first.
///
/// # Threading
///
/// The registry is single-threaded: it is neither `Send` nor `Sync`, and
/// instances are shared as `Rc<T>`. Pass `&Registry` to the collaborators that
/// need it.
pub struct Registry {
  // `None` until bootstrap; its presence is the active flag.
  entries: RefCell<Option<HashMap<&'static str, Rc<Entry>>>>,
  pending: RefCell<Vec<Pending>>,
}

impl Registry {
  /// Creates the process-wide registry.
  ///
  /// Only one call per process succeeds; later calls fail with
  /// [`Error::DuplicateSingleton`].
  pub fn new() -> Result<Self> {
    global::claim()?;
    debug!("process-wide registry created");
    Ok(Self::isolated())
  }

  /// Creates a registry that does not claim the process-wide slot.
  ///
  /// It behaves exactly like the one returned by [`Registry::new`]; it is
  /// meant for tests and for sub-systems that wire their own components.
  pub fn isolated() -> Self {
    Self {
      entries: RefCell::new(None),
      pending: RefCell::new(Vec::new()),
    }
  }

  // --- Registration ---

  /// Registers a component under `key`.
  ///
  /// Before bootstrap the call is buffered and always succeeds. Once the
  /// registry is active:
  ///
  /// - an undeclared name fails with [`Error::NotBootstrapped`];
  /// - an already built name is a no-op;
  /// - otherwise the dependencies are resolved in order and `constructor` is
  ///   called with them. A failed dependency is returned unchanged and
  ///   nothing is stored, so the call may be retried later.
  pub fn register<T, D, F>(&self, key: Key<T>, dependencies: D, constructor: F) -> Result<()>
  where
    T: ?Sized + 'static,
    D: Dependencies,
    F: Fn(D::Resolved) -> Rc<T> + 'static,
  {
    let names = dependencies.names();
    let recipe: Recipe = Rc::new(move |registry: &Registry| {
      let resolved = dependencies.resolve_from(registry)?;
      Ok(Box::new(constructor(resolved)) as Box<dyn Any>)
    });

    self.register_pending(Pending {
      name: key.name(),
      dependencies: names,
      recipe,
    })
  }

  /// Registers a [`Component`] implementor.
  pub fn register_component<C: Component>(&self) -> Result<()> {
    self.register(C::KEY, C::DEPENDENCIES, C::construct)
  }

  fn register_pending(&self, pending: Pending) -> Result<()> {
    let entry = match self.entries.borrow().as_ref() {
      Some(entries) => entries.get(pending.name).cloned(),
      None => {
        debug!(
          name = pending.name,
          dependencies = ?pending.dependencies,
          "buffering registration until bootstrap"
        );
        self.pending.borrow_mut().push(pending);
        return Ok(());
      }
    };

    let Some(entry) = entry else {
      return Err(Error::NotBootstrapped(pending.name.to_owned()));
    };
    if entry.is_instantiated() {
      return Ok(());
    }

    let instance = (pending.recipe)(self)?;
    if entry.instance.set(instance).is_ok() {
      debug!(name = pending.name, "component instantiated");
    }
    Ok(())
  }

  // --- Lifecycle ---

  /// Activates the registry and builds every buffered component.
  ///
  /// `declared` is the set of names the caller expects to activate. Names in
  /// it that were never registered are reported as warnings; they do not
  /// fail the bootstrap.
  ///
  /// Every buffered name is declared before any component is built, then the
  /// components are built in registration order. The first construction
  /// failure is returned. The registry stays active in that case, keeping
  /// whatever was already built, and the buffer is emptied regardless.
  ///
  /// A second call fails with [`Error::AlreadyBootstrapped`].
  pub fn bootstrap(&self, declared: &[&str]) -> Result<()> {
    {
      let mut entries = self.entries.borrow_mut();
      if entries.is_some() {
        return Err(Error::AlreadyBootstrapped);
      }
      *entries = Some(HashMap::new());
    }
    let pending = std::mem::take(&mut *self.pending.borrow_mut());
    debug!(buffered = pending.len(), "bootstrapping registry");

    for name in declared {
      if !pending.iter().any(|p| p.name == *name) {
        warn!(name = *name, "declared component was never registered");
      }
    }

    // Assignment pass: every buffered name becomes a known entry.
    if let Some(entries) = self.entries.borrow_mut().as_mut() {
      for p in &pending {
        entries
          .entry(p.name)
          .or_insert_with(|| Rc::new(Entry::declared(p.dependencies.clone())));
      }
    }

    // Instantiation pass, in registration order.
    for p in pending {
      if let Err(error) = self.register_pending(p) {
        debug!(%error, "bootstrap aborted");
        return Err(error);
      }
    }

    debug!("registry bootstrapped");
    Ok(())
  }

  // --- Resolution ---

  /// Returns the singleton registered under `key`.
  ///
  /// Fails with [`Error::NoModulesDefined`] before bootstrap, with
  /// [`Error::NotBootstrapped`] when the name is unknown or not yet built,
  /// and with [`Error::TypeMismatch`] when the name was registered under a
  /// different contract.
  pub fn resolve<T: ?Sized + 'static>(&self, key: Key<T>) -> Result<Rc<T>> {
    let entries = self.entries.borrow();
    let entries = entries.as_ref().ok_or(Error::NoModulesDefined)?;

    let instance = entries
      .get(key.name())
      .and_then(|entry| entry.instance.get())
      .ok_or_else(|| Error::NotBootstrapped(key.name().to_owned()))?;

    trace!(name = key.name(), "resolving component");
    instance
      .downcast_ref::<Rc<T>>()
      .cloned()
      .ok_or_else(|| Error::TypeMismatch {
        name: key.name().to_owned(),
        expected: type_name::<T>(),
      })
  }

  // --- Inspection ---

  pub fn state(&self) -> RegistryState {
    if self.is_active() {
      RegistryState::Active
    } else {
      RegistryState::Uninitialized
    }
  }

  pub fn is_active(&self) -> bool {
    self.entries.borrow().is_some()
  }

  /// Number of registrations still waiting for bootstrap.
  pub fn pending_len(&self) -> usize {
    self.pending.borrow().len()
  }

  /// Returns `true` if `name` is a declared entry of an active registry.
  pub fn contains(&self, name: &str) -> bool {
    self
      .entries
      .borrow()
      .as_ref()
      .is_some_and(|entries| entries.contains_key(name))
  }

  pub fn is_instantiated(&self, name: &str) -> bool {
    self
      .entries
      .borrow()
      .as_ref()
      .and_then(|entries| entries.get(name))
      .is_some_and(|entry| entry.is_instantiated())
  }

  /// The dependency names recorded for `name`, in declaration order.
  pub fn dependencies_of(&self, name: &str) -> Option<Vec<&'static str>> {
    self
      .entries
      .borrow()
      .as_ref()
      .and_then(|entries| entries.get(name))
      .map(|entry| entry.dependencies.clone())
  }
}

impl fmt::Debug for Registry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Registry")
      .field("state", &self.state())
      .field("entries", &self.entries.borrow())
      .field("pending", &self.pending.borrow())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  trait Counter {
    fn value(&self) -> u32;
  }
  struct Fixed(u32);
  impl Counter for Fixed {
    fn value(&self) -> u32 {
      self.0
    }
  }

  const COUNTER: Key<dyn Counter> = Key::new("ICounter");

  #[test]
  fn test_registration_is_buffered_until_bootstrap() {
    let registry = Registry::isolated();
    registry.register(COUNTER, (), |()| Rc::new(Fixed(7))).unwrap();

    assert_eq!(registry.state(), RegistryState::Uninitialized);
    assert_eq!(registry.pending_len(), 1);
    assert!(!registry.contains("ICounter"));

    registry.bootstrap(&["ICounter"]).unwrap();

    assert_eq!(registry.state(), RegistryState::Active);
    assert_eq!(registry.pending_len(), 0);
    assert!(registry.is_instantiated("ICounter"));
    assert_eq!(registry.resolve(COUNTER).unwrap().value(), 7);
  }

  #[test]
  fn test_duplicate_buffered_name_keeps_first_registration() {
    let registry = Registry::isolated();
    registry.register(COUNTER, (), |()| Rc::new(Fixed(1))).unwrap();
    registry.register(COUNTER, (), |()| Rc::new(Fixed(2))).unwrap();
    registry.bootstrap(&["ICounter"]).unwrap();

    assert_eq!(registry.resolve(COUNTER).unwrap().value(), 1);
  }

  #[test]
  fn test_debug_output_reports_state() {
    let registry = Registry::isolated();
    registry.register(COUNTER, (), |()| Rc::new(Fixed(3))).unwrap();
    let rendered = format!("{:?}", registry);
    assert!(rendered.contains("Uninitialized"));
    assert!(rendered.contains("ICounter"));
  }
}
