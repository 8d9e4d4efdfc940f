pub mod config;
pub mod errors;
pub mod methods;
pub mod report;
pub mod traits;
pub use methods::Method;
pub use traits::Interpolator;

pub mod hermite;
pub use hermite::{interpolate_points, HermiteCfg, HermiteSpline};
