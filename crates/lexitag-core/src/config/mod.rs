pub mod dataset;
pub mod model;
pub mod params;

pub use dataset::DatasetParams;
pub use model::ModelConfig;
pub use params::Params;
