//! Elliptic curves over prime fields
//!
//! This module implements short Weierstrass curves `y² = x³ + ax + b` over
//! `F_p` for arbitrary domain parameters, with affine point arithmetic on
//! arbitrary-precision integers. A [`PrimeFieldCurve`] is an immutable value:
//! build it once (for instance with [`PrimeFieldCurve::sm2`]) and lend it to
//! every engine that works on that curve.
//!
//! The arithmetic runs on `num-bigint`, which is not constant-time. Both
//! [`PrimeFieldCurve::multiply`] and [`PrimeFieldCurve::multiply_ladder`]
//! therefore leak timing information about the scalar through the big-integer
//! operations, even though the ladder performs the same group operations for
//! every bit.

mod curve;
mod field;
mod point;

pub use curve::{in_scalar_range, PrimeFieldCurve};
pub use field::{fixed_bytes, natural_bytes};
pub use point::{CurvePoint, PointFormat};
