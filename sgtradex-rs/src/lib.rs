//! Client for the SGTradex pilotage API: one endpoint returning every
//! recorded lifecycle snapshot for a vessel, raw timestamps included.

#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod client;
mod error;
mod models;

pub use client::SgtradexClient;
pub use error::{Error, Result};
pub use models::*;
