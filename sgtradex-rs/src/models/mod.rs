mod pilotage;

pub use pilotage::*;
