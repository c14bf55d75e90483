pub mod domain;
pub mod error;
pub mod metric;

pub use domain::*;
pub use error::{Error, Result};
pub use metric::MetricValue;
