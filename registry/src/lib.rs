//! # Fibre Registry
//!
//! A bootstrap-staged Inversion of Control (IoC) registry for Rust.
//!
//! Components are registered up front, each with a typed key, the keys it
//! depends on, and a constructor. Nothing is built until the registry is
//! bootstrapped; bootstrap then builds every component once, in registration
//! order, handing each constructor the singletons it asked for.
//!
//! ## Core Concepts
//!
//! - **Registry**: the container. One per process via `Registry::new()`, or any
//!   number of `Registry::isolated()` ones.
//! - **Key**: a component name tied to the capability type (usually a trait
//!   object) it resolves as.
//! - **Bootstrap**: the one-time switch from buffering to active. Dependencies
//!   must be registered before their dependents.
//! - **Component**: a trait for component definitions that register themselves.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_registry::{Key, Registry};
//! use std::rc::Rc;
//!
//! trait Greeter {
//!   fn greet(&self) -> String;
//! }
//!
//! trait Announcer {
//!   fn announce(&self) -> String;
//! }
//!
//! struct EnglishGreeter;
//!
//! impl Greeter for EnglishGreeter {
//!   fn greet(&self) -> String {
//!     "Hello, World!".to_string()
//!   }
//! }
//!
//! struct LoudAnnouncer {
//!   greeter: Rc<dyn Greeter>,
//! }
//!
//! impl Announcer for LoudAnnouncer {
//!   fn announce(&self) -> String {
//!     self.greeter.greet().to_uppercase()
//!   }
//! }
//!
//! const GREETER: Key<dyn Greeter> = Key::new("IGreeter");
//! const ANNOUNCER: Key<dyn Announcer> = Key::new("IAnnouncer");
//!
//! fn main() -> fibre_registry::Result<()> {
//!   let registry = Registry::new()?;
//!
//!   // Dependencies first.
//!   registry.register(GREETER, (), |()| Rc::new(EnglishGreeter))?;
//!   registry.register(ANNOUNCER, (GREETER,), |(greeter,)| {
//!     Rc::new(LoudAnnouncer { greeter })
//!   })?;
//!
//!   registry.bootstrap(&[GREETER.name(), ANNOUNCER.name()])?;
//!
//!   let announcer = registry.resolve(ANNOUNCER)?;
//!   assert_eq!(announcer.announce(), "HELLO, WORLD!");
//!   Ok(())
//! }
//! ```

mod component;
mod core;
mod dependencies;
mod error;
mod global;
mod key;
mod macros;
mod registry;

pub use component::Component;
pub use dependencies::Dependencies;
pub use error::{Error, Result};
pub use global::is_claimed;
pub use key::Key;
pub use registry::{Registry, RegistryState};
