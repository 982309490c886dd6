pub mod body;
pub mod config;
pub mod orbits;
pub mod simulation;
pub mod trail;
