// baseline RWA strategies the genetic search is measured against:
// shortest path routing followed by first fit wavelength assignment

pub mod first_fit;
pub mod shortest_path;
pub mod strategy;

pub use strategy::{Router, RwaStrategy};
