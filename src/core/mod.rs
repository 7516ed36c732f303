pub mod estimator;
pub mod normalize;
pub mod parser;
pub mod request;

pub use crate::domain::model::{Coordinates, YieldEstimate};
pub use crate::domain::ports::TextFetcher;
pub use crate::utils::error::Result;
