//! Application layer: bootstrap, route providers and scaffolding.

pub mod application;
pub mod scaffold;
pub mod welcome;

pub use application::{Application, RouteProvider, ServeError};
pub use scaffold::{new_project, ScaffoldError};
pub use welcome::WelcomeRoutes;
