//! Domain layer - Core business entities
//!
//! Plain data shapes for breeds and kittens, independent of the
//! storage representation. Inbound request schemas carry their own
//! validation rules; outbound entities serialize straight to JSON.

pub mod breed;
pub mod kitten;

pub use breed::{Breed, BreedCreate};
pub use kitten::{Kitten, KittenCreate};
