//! HTTP request handlers.

pub mod breed_handler;
pub mod health_handler;
pub mod kitten_handler;

pub use breed_handler::breed_routes;
pub use health_handler::{health, root};
pub use kitten_handler::kitten_routes;
