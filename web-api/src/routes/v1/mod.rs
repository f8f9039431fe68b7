pub mod pilotage;
