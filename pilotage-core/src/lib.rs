#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod domain;
mod error;
mod imo;
mod ports;
mod timestamp;

pub use domain::*;
pub use error::*;
pub use imo::*;
pub use ports::*;
pub use timestamp::*;
