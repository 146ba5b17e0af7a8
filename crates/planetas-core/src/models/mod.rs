//! Data models for the planet catalogue.
//!
//! [`Planet`] is the only persisted entity. Its Display implementation lives
//! in [`crate::display::models`].

pub mod planet;


pub use planet::{Planet, NICKNAME_PLACEHOLDER};
