pub mod config;
pub mod dsa;
pub mod genetic;
pub mod optical_network;
pub mod routing;
pub mod scientific_computing;
pub mod simulation;
