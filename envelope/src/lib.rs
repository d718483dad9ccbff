#![cfg_attr(not(test), no_std)]

mod tools;
pub use tools::*;
mod fixed;
pub use fixed::*;
mod filter;
pub use filter::*;
mod derivative;
pub use derivative::*;
mod squared;
pub use squared::*;
mod tma;
pub use tma::*;
mod lowpass;
pub use lowpass::*;

/// Errors raised when constructing a filter stage with invalid parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The smoothing coefficient is outside `(0, 1]`.
    #[error("Invalid smoothing coefficient")]
    Coefficient,
}
