use fibre_registry::{Component, Key, Registry};
use std::rc::Rc;
use tracing::info;
use tracing_subscriber::EnvFilter;

// --- Contracts ---
trait IServiceA {
  fn do_service_a(&self);
}

trait IServiceB {
  fn do_service_b(&self);
}

trait IDoThing {
  fn do_thing(&self);
}

const SERVICE_A: Key<dyn IServiceA> = Key::new("IServiceA");
const SERVICE_B: Key<dyn IServiceB> = Key::new("IServiceB");
const DO_THING: Key<dyn IDoThing> = Key::new("IDoThing");

// --- Services ---
struct ServiceA;

impl IServiceA for ServiceA {
  fn do_service_a(&self) {
    info!("Doing service A");
  }
}

impl Component for ServiceA {
  type Contract = dyn IServiceA;
  type Dependencies = ();
  const KEY: Key<dyn IServiceA> = SERVICE_A;
  const DEPENDENCIES: () = ();

  fn construct(_: ()) -> Rc<dyn IServiceA> {
    Rc::new(ServiceA)
  }
}

struct ServiceB {
  service_a: Rc<dyn IServiceA>,
}

impl IServiceB for ServiceB {
  fn do_service_b(&self) {
    self.service_a.do_service_a();
    info!("Doing service B");
  }
}

impl Component for ServiceB {
  type Contract = dyn IServiceB;
  type Dependencies = (Key<dyn IServiceA>,);
  const KEY: Key<dyn IServiceB> = SERVICE_B;
  const DEPENDENCIES: Self::Dependencies = (SERVICE_A,);

  fn construct((service_a,): (Rc<dyn IServiceA>,)) -> Rc<dyn IServiceB> {
    Rc::new(ServiceB { service_a })
  }
}

// --- Modules ---
struct DoThing {
  service_a: Rc<dyn IServiceA>,
  service_b: Rc<dyn IServiceB>,
}

impl IDoThing for DoThing {
  fn do_thing(&self) {
    self.service_a.do_service_a();
    self.service_b.do_service_b();
    info!("Doing thing");
  }
}

impl Component for DoThing {
  type Contract = dyn IDoThing;
  type Dependencies = (Key<dyn IServiceA>, Key<dyn IServiceB>);
  const KEY: Key<dyn IDoThing> = DO_THING;
  const DEPENDENCIES: Self::Dependencies = (SERVICE_A, SERVICE_B);

  fn construct(
    (service_a, service_b): (Rc<dyn IServiceA>, Rc<dyn IServiceB>),
  ) -> Rc<dyn IDoThing> {
    Rc::new(DoThing {
      service_a,
      service_b,
    })
  }
}

fn main() -> fibre_registry::Result<()> {
  // RUST_LOG=fibre_registry=debug shows the registry's own lifecycle events.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let registry = Registry::new()?;

  // --- Registration ---
  // Services first, then the modules built on top of them.
  registry.register_component::<ServiceA>()?;
  registry.register_component::<ServiceB>()?;
  registry.register_component::<DoThing>()?;

  // --- Bootstrap ---
  registry.bootstrap(&[SERVICE_A.name(), SERVICE_B.name(), DO_THING.name()])?;

  // --- Playground ---
  let do_thing = registry.resolve(DO_THING)?;
  do_thing.do_thing();

  Ok(())
}
