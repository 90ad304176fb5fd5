//! Physical quantities: lengths, angles, areas, and volumes.
//!
//! Each quantity wraps a single float in a canonical base unit. Lengths are
//! stored in inches, areas in square inches, volumes in cubic inches, and
//! angles in radians. Geometry code only ever asks for the base value; unit
//! conversion lives here and nowhere else.

use std::f64::consts::{PI, TAU};
use std::ops::Mul;

use crate::Float;

const INCHES_PER_FOOT: Float = 12.0;
const MILLIMETERS_PER_INCH: Float = 25.4;

/// One-dimensional distance.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Length(Float);
impl_scalar_unit!(Length);

impl Length {
    /// Zero length.
    pub const ZERO: Self = Length(0.0);

    /// Constructs a length from a value in base units (inches).
    pub const fn from_base(base: Float) -> Self {
        Length(base)
    }
    /// Constructs a length in inches.
    pub const fn inches(n: Float) -> Self {
        Length(n)
    }
    /// Constructs a length in feet.
    pub fn feet(n: Float) -> Self {
        Length(n * INCHES_PER_FOOT)
    }
    /// Constructs a length in millimeters.
    pub fn millimeters(n: Float) -> Self {
        Length(n / MILLIMETERS_PER_INCH)
    }
    /// Constructs a length in centimeters.
    pub fn centimeters(n: Float) -> Self {
        Self::millimeters(n * 10.0)
    }
    /// Constructs a length in meters.
    pub fn meters(n: Float) -> Self {
        Self::millimeters(n * 1000.0)
    }

    /// Returns the length in base units.
    pub const fn base(self) -> Float {
        self.0
    }
    /// Returns the length in inches.
    pub const fn in_inches(self) -> Float {
        self.0
    }
    /// Returns the length in millimeters.
    pub fn in_millimeters(self) -> Float {
        self.0 * MILLIMETERS_PER_INCH
    }
    /// Returns the length in feet.
    pub fn in_feet(self) -> Float {
        self.0 / INCHES_PER_FOOT
    }

    /// Returns the absolute value of the length.
    #[must_use]
    pub fn abs(self) -> Self {
        Length(self.0.abs())
    }
}

impl Mul for Length {
    type Output = Area;

    fn mul(self, rhs: Length) -> Area {
        Area(self.0 * rhs.0)
    }
}

/// Two-dimensional measure.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Area(Float);
impl_scalar_unit!(Area);

impl Area {
    /// Zero area.
    pub const ZERO: Self = Area(0.0);

    /// Constructs an area from a value in base units (square inches).
    pub const fn from_base(base: Float) -> Self {
        Area(base)
    }
    /// Constructs an area in square inches.
    pub const fn square_inches(n: Float) -> Self {
        Area(n)
    }
    /// Returns the area in base units.
    pub const fn base(self) -> Float {
        self.0
    }
    /// Returns the absolute value of the area.
    #[must_use]
    pub fn abs(self) -> Self {
        Area(self.0.abs())
    }
}

impl Mul<Length> for Area {
    type Output = Volume;

    fn mul(self, rhs: Length) -> Volume {
        Volume(self.0 * rhs.0)
    }
}

/// Three-dimensional measure.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Volume(Float);
impl_scalar_unit!(Volume);

impl Volume {
    /// Zero volume.
    pub const ZERO: Self = Volume(0.0);

    /// Constructs a volume from a value in base units (cubic inches).
    pub const fn from_base(base: Float) -> Self {
        Volume(base)
    }
    /// Constructs a volume in cubic inches.
    pub const fn cubic_inches(n: Float) -> Self {
        Volume(n)
    }
    /// Returns the volume in base units.
    pub const fn base(self) -> Float {
        self.0
    }
    /// Returns the absolute value of the volume.
    #[must_use]
    pub fn abs(self) -> Self {
        Volume(self.0.abs())
    }
}

/// Planar angle.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Angle(Float);
impl_scalar_unit!(Angle);

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Angle(0.0);
    /// Right angle.
    pub const QUARTER_TURN: Self = Angle(PI / 2.0);
    /// Straight angle.
    pub const HALF_TURN: Self = Angle(PI);
    /// Full turn.
    pub const FULL_TURN: Self = Angle(TAU);

    /// Constructs an angle in radians.
    pub const fn from_radians(radians: Float) -> Self {
        Angle(radians)
    }
    /// Constructs an angle in degrees.
    pub fn from_degrees(degrees: Float) -> Self {
        Angle(degrees.to_radians())
    }

    /// Returns the angle in radians.
    pub const fn radians(self) -> Float {
        self.0
    }
    /// Returns the angle in degrees.
    pub fn degrees(self) -> Float {
        self.0.to_degrees()
    }

    /// Returns the sine of the angle.
    pub fn sin(self) -> Float {
        self.0.sin()
    }
    /// Returns the cosine of the angle.
    pub fn cos(self) -> Float {
        self.0.cos()
    }

    /// Returns the equivalent angle in the range `[0, 360)` degrees.
    #[must_use]
    pub fn normalized(self) -> Self {
        let r = self.0.rem_euclid(TAU);
        // `rem_euclid` may round up to exactly `TAU`
        if r >= TAU { Angle(0.0) } else { Angle(r) }
    }
}
