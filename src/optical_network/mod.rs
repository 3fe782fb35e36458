// a WDM optical network: fixed fiber topology plus per link, per wavelength occupancy
// a lightpath holds the same wavelength on every link it crosses (wavelength continuity)
// so a request is served only if one wavelength index is free end to end

pub mod arpa;
pub mod catalog;
pub mod clara;
pub mod italian;
pub mod janet;
pub mod nsf;
pub mod rnp;
pub mod state;
pub mod topology;

pub use catalog::TopologyKind;
pub use state::NetworkState;
pub use topology::{NetworkError, NetworkTopology};
