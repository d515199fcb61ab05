//! Core, non-public data structures for the registry.

use crate::error::Result;
use crate::registry::Registry;
use once_cell::unsync::OnceCell;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// A type-erased constructor.
///
/// It resolves the component's dependencies through the registry it is handed,
/// calls the user constructor with them, and boxes the resulting `Rc<T>`.
pub(crate) type Recipe = Rc<dyn Fn(&Registry) -> Result<Box<dyn Any>>>;

/// One `register` call, as buffered before bootstrap.
#[derive(Clone)]
pub(crate) struct Pending {
  pub(crate) name: &'static str,
  pub(crate) dependencies: Vec<&'static str>,
  pub(crate) recipe: Recipe,
}

impl fmt::Debug for Pending {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Pending")
      .field("name", &self.name)
      .field("dependencies", &self.dependencies)
      .finish_non_exhaustive()
  }
}

/// The registry's record for a declared name.
///
/// `instance` holds a boxed `Rc<T>` and is written at most once.
pub(crate) struct Entry {
  pub(crate) dependencies: Vec<&'static str>,
  pub(crate) instance: OnceCell<Box<dyn Any>>,
}

impl Entry {
  pub(crate) fn declared(dependencies: Vec<&'static str>) -> Self {
    Self {
      dependencies,
      instance: OnceCell::new(),
    }
  }

  pub(crate) fn is_instantiated(&self) -> bool {
    self.instance.get().is_some()
  }
}

impl fmt::Debug for Entry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Entry")
      .field("dependencies", &self.dependencies)
      .field("instantiated", &self.is_instantiated())
      .finish()
  }
}
