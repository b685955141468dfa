pub mod auth;
pub mod config;
mod error;
pub mod greeting;
mod profile;
pub mod routine;
mod session;

pub use error::{Error, Result};
pub use profile::{AgeGroup, SkinType, UserProfile};
pub use session::Session;

#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
