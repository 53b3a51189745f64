pub mod checkpoint;
pub mod net;

pub use net::TaggerNet;
