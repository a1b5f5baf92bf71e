//! Special functions behind the test p-values
//!
//! - [`log_gamma`]: Lanczos approximation to ln Γ(x)
//! - [`incomplete_beta`]: regularised incomplete beta I_x(a, b)
//! - [`normal_cdf`]: standard normal cumulative probability
//! - [`chi_square_tail_probability`]: upper tail of the chi-square distribution
//! - [`f_distribution_tail_probability`]: upper tail of the F distribution
//!
//! The gamma and beta functions are generic over [`Numeric`](crate::numeric::Numeric)
//! so they follow the caller's precision mode. The normal and chi-square
//! approximations are polynomial fits whose accuracy is bounded by their
//! coefficients, so they run in `f64` only.

mod beta;
mod chi_square;
mod gamma;
mod normal;

pub use beta::{f_distribution_tail_probability, incomplete_beta};
pub(crate) use beta::{f_tail_in, incomplete_beta_in};
pub use chi_square::chi_square_tail_probability;
pub use gamma::log_gamma;
pub(crate) use gamma::log_gamma_in;
pub use normal::{normal_cdf, normal_cdf_complement, Z_MAX};
