
mod linalg;
mod centering_error;
mod centering;

pub use linalg::*;
pub use centering_error::*;
pub use centering::*;
