mod helper;
mod pilotage;
