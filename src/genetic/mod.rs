// genetic search for a route and a wavelength between a fixed source and destination
// an individual is one simple path, its fitness is the set of wavelengths free on every hop

pub mod builder;
pub mod chromosome;
pub mod driver;
pub mod operators;
pub mod population;
pub mod ranking;

pub use chromosome::Individual;
pub use driver::{GeneticAlgorithm, Lightpath, RwaError, RwaOutcome, rwa};
pub use population::Population;
