//! Points on a prime-field curve

use core::fmt;
use num_bigint::BigUint;

/// Format of a serialized elliptic curve point
///
/// The point at infinity always encodes as a single `0x00` byte, whatever
/// format is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointFormat {
    /// `0x04 || x || y`
    #[default]
    Uncompressed,
    /// `0x02 || x` for even y, `0x03 || x` for odd y
    Compressed,
    /// `0x06 || x || y` for even y, `0x07 || x || y` for odd y
    Hybrid,
}

/// A point in affine coordinates, or the point at infinity
///
/// Points are plain values compared by their coordinates. Construction does
/// not validate: use [`PrimeFieldCurve::check_point`](super::PrimeFieldCurve::check_point)
/// or [`PrimeFieldCurve::decode_point`](super::PrimeFieldCurve::decode_point)
/// for untrusted input.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurvePoint {
    /// The identity element
    #[default]
    Infinity,
    /// A finite point
    Affine {
        /// x coordinate
        x: BigUint,
        /// y coordinate
        y: BigUint,
    },
}

impl CurvePoint {
    /// Create a finite point from its coordinates
    pub fn new(x: BigUint, y: BigUint) -> Self {
        CurvePoint::Affine { x, y }
    }

    /// The point at infinity
    pub fn identity() -> Self {
        CurvePoint::Infinity
    }

    /// Check if this point is the point at infinity
    pub fn is_identity(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    /// Both coordinates of a finite point
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, y } => Some((x, y)),
        }
    }

    /// x coordinate of a finite point
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// y coordinate of a finite point
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl fmt::Debug for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurvePoint::Infinity => write!(f, "CurvePoint::Infinity"),
            CurvePoint::Affine { x, y } => write!(f, "CurvePoint({:x}, {:x})", x, y),
        }
    }
}
