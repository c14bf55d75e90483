pub mod evaluation;
pub mod ids;
pub mod negotiation;
pub mod report;
pub mod run;

pub use evaluation::*;
pub use ids::*;
pub use negotiation::*;
pub use report::*;
pub use run::*;
