#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod attack;
mod command;
mod command_tactics;
mod common;
mod config;
mod engine;
mod fleet;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod random;
mod trial;

pub use attack::*;
pub use command::*;
pub use command_tactics::*;
pub use common::*;
pub use config::*;
pub use engine::*;
pub use fleet::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use random::*;
pub use trial::*;
