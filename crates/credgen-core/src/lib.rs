#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod commands;
pub mod constants;
pub mod errors;
pub mod input;
pub mod lifecycle;
pub mod lookup;
pub mod models;
pub mod services;

#[cfg(test)]
pub(crate) mod fake;

pub use crate::commands::*;
pub use crate::constants::*;
pub use crate::errors::*;
pub use crate::input::*;
pub use crate::lifecycle::*;
pub use crate::lookup::*;
pub use crate::models::*;
pub use crate::services::*;
