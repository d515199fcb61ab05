//! The `Component` registration marker.

use crate::dependencies::Dependencies;
use crate::key::Key;
use std::rc::Rc;

/// A component definition that knows how to register itself.
///
/// Implementing this trait is the typed counterpart of tagging a type with a
/// registration annotation: it names the contract the component is resolved
/// as, the contracts it depends on, and how to build it from them. The
/// composing code then calls [`Registry::register_component`] once per
/// component, dependencies first.
///
/// [`Registry::register_component`]: crate::Registry::register_component
///
/// ```
/// use fibre_registry::{Component, Key, Registry};
/// use std::rc::Rc;
///
/// trait Greeter {
///   fn greet(&self) -> String;
/// }
///
/// struct English;
///
/// impl Greeter for English {
///   fn greet(&self) -> String {
///     "Hello!".to_string()
///   }
/// }
///
/// impl Component for English {
///   type Contract = dyn Greeter;
///   type Dependencies = ();
///   const KEY: Key<dyn Greeter> = Key::new("IGreeter");
///   const DEPENDENCIES: () = ();
///
///   fn construct(_: ()) -> Rc<dyn Greeter> {
///     Rc::new(English)
///   }
/// }
///
/// let registry = Registry::isolated();
/// registry.register_component::<English>().unwrap();
/// registry.bootstrap(&[English::KEY.name()]).unwrap();
///
/// assert_eq!(registry.resolve(English::KEY).unwrap().greet(), "Hello!");
/// ```
pub trait Component: 'static {
  /// The capability interface this component is resolved as.
  type Contract: ?Sized + 'static;

  /// The keys this component's constructor needs.
  type Dependencies: Dependencies;

  const KEY: Key<Self::Contract>;

  const DEPENDENCIES: Self::Dependencies;

  /// Builds the component from its resolved dependencies.
  fn construct(
    dependencies: <Self::Dependencies as Dependencies>::Resolved,
  ) -> Rc<Self::Contract>;
}
