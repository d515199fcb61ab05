//! Typed dependency lists.

use crate::error::Result;
use crate::key::Key;
use crate::registry::Registry;
use std::rc::Rc;

/// An ordered list of dependency keys.
///
/// Implemented for `()` and for tuples of [`Key`]s up to eight elements. The
/// resolved form is the matching tuple of `Rc`s, which is what a component
/// constructor receives:
///
/// ```
/// use fibre_registry::{Dependencies, Key};
///
/// trait Store {}
/// trait Clock {}
///
/// const STORE: Key<dyn Store> = Key::new("IStore");
/// const CLOCK: Key<dyn Clock> = Key::new("IClock");
///
/// assert_eq!((STORE, CLOCK).names(), vec!["IStore", "IClock"]);
/// assert!(().names().is_empty());
/// ```
pub trait Dependencies: 'static {
  /// The resolved instances, in declaration order.
  type Resolved;

  /// The dependency names, in declaration order.
  fn names(&self) -> Vec<&'static str>;

  /// Resolves every dependency in order, stopping at the first failure.
  fn resolve_from(&self, registry: &Registry) -> Result<Self::Resolved>;
}

impl Dependencies for () {
  type Resolved = ();

  fn names(&self) -> Vec<&'static str> {
    Vec::new()
  }

  fn resolve_from(&self, _registry: &Registry) -> Result<Self::Resolved> {
    Ok(())
  }
}

macro_rules! impl_dependencies {
  ($($contract:ident => $index:tt),+) => {
    impl<$($contract: ?Sized + 'static),+> Dependencies for ($(Key<$contract>,)+) {
      type Resolved = ($(Rc<$contract>,)+);

      fn names(&self) -> Vec<&'static str> {
        vec![$(self.$index.name()),+]
      }

      fn resolve_from(&self, registry: &Registry) -> Result<Self::Resolved> {
        // Tuple fields are evaluated left to right.
        Ok(($(registry.resolve(self.$index)?,)+))
      }
    }
  };
}

impl_dependencies!(A => 0);
impl_dependencies!(A => 0, B => 1);
impl_dependencies!(A => 0, B => 1, C => 2);
impl_dependencies!(A => 0, B => 1, C => 2, D => 3);
impl_dependencies!(A => 0, B => 1, C => 2, D => 3, E => 4);
impl_dependencies!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
impl_dependencies!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6);
impl_dependencies!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Error;

  trait First {}
  trait Second {}
  struct Unit;
  impl First for Unit {}
  impl Second for Unit {}

  const FIRST: Key<dyn First> = Key::new("IFirst");
  const SECOND: Key<dyn Second> = Key::new("ISecond");

  #[test]
  fn test_names_keep_declaration_order() {
    assert_eq!((SECOND, FIRST).names(), vec!["ISecond", "IFirst"]);
    assert_eq!((FIRST,).names(), vec!["IFirst"]);
  }

  #[test]
  fn test_resolve_stops_at_first_missing_dependency() {
    let registry = Registry::isolated();
    registry
      .register(SECOND, (), |()| Rc::new(Unit) as Rc<dyn Second>)
      .unwrap();
    registry.bootstrap(&["ISecond"]).unwrap();

    // `IFirst` was never declared, so it is reported before `ISecond` is looked at.
    let error = (FIRST, SECOND).resolve_from(&registry).err().unwrap();
    assert_eq!(error, Error::NotBootstrapped("IFirst".to_string()));

    let (second,) = (SECOND,).resolve_from(&registry).unwrap();
    assert!(Rc::ptr_eq(&second, &registry.resolve(SECOND).unwrap()));
  }
}
