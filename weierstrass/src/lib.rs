#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod arithmetic;
pub mod curve;

pub use arithmetic::Point;
pub use curve::Curve;
pub use num_bigint::BigInt;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CurveError {
    #[error("singular curve {0}")]
    InvalidCurve(String),
    #[error("point ({x}, {y}) not on curve {curve}")]
    NotOnCurve { x: BigInt, y: BigInt, curve: String },
    #[error("must use the same curve, found {0} and {1}")]
    CurveMismatch(String, String),
}
