use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A length in fixed-point nanometers.
///
/// All coordinates in the data model are integer nanometers so that
/// equality comparisons (which drive change notifications) are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Length(i64);

impl Length {
    pub const ZERO: Length = Length(0);

    pub const fn from_nm(nm: i64) -> Self {
        Length(nm)
    }

    pub fn from_mm(mm: f64) -> Self {
        Length((mm * 1_000_000.0).round() as i64)
    }

    pub const fn to_nm(self) -> i64 {
        self.0
    }

    pub fn to_mm(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, rhs: Length) {
        self.0 -= rhs.0;
    }
}

impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length {
        Length(-self.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.to_mm())
    }
}

/// A strictly positive length (e.g. a text height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PositiveLength(Length);

impl PositiveLength {
    /// Returns `None` if the given length is zero or negative.
    pub fn new(length: Length) -> Option<Self> {
        if length.to_nm() > 0 {
            Some(PositiveLength(length))
        } else {
            None
        }
    }

    pub fn from_mm(mm: f64) -> Option<Self> {
        Self::new(Length::from_mm(mm))
    }

    pub const fn get(self) -> Length {
        self.0
    }
}

impl fmt::Display for PositiveLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An angle in fixed-point microdegrees, normalized to `[0, 360°)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Angle(i32);

impl Angle {
    pub const ZERO: Angle = Angle(0);
    const FULL_TURN: i64 = 360_000_000;

    pub fn from_microdeg(udeg: i64) -> Self {
        Angle(udeg.rem_euclid(Self::FULL_TURN) as i32)
    }

    pub fn from_deg(deg: f64) -> Self {
        Self::from_microdeg((deg * 1_000_000.0).round() as i64)
    }

    pub const fn to_microdeg(self) -> i32 {
        self.0
    }

    pub fn to_deg(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    pub fn to_rad(self) -> f64 {
        self.to_deg().to_radians()
    }

    /// Inverse rotation, normalized like every other angle.
    pub fn inverted(self) -> Self {
        Self::from_microdeg(-(self.0 as i64))
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle::from_microdeg(self.0 as i64 + rhs.0 as i64)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_microdeg(self.0 as i64 - rhs.0 as i64)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.to_deg())
    }
}

/// A point in the 2D plane, in nanometer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    pub const ORIGIN: Point = Point {
        x: Length::ZERO,
        y: Length::ZERO,
    };

    pub const fn new(x: Length, y: Length) -> Self {
        Point { x, y }
    }

    pub fn from_mm(x: f64, y: f64) -> Self {
        Point {
            x: Length::from_mm(x),
            y: Length::from_mm(y),
        }
    }

    pub fn translated(self, dx: Length, dy: Length) -> Self {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Rotates this point counterclockwise around `center`.
    ///
    /// The result is rounded back to the nanometer grid.
    pub fn rotated(self, angle: Angle, center: Point) -> Self {
        let (sin, cos) = angle.to_rad().sin_cos();
        let dx = (self.x - center.x).to_nm() as f64;
        let dy = (self.y - center.y).to_nm() as f64;
        Point {
            x: center.x + Length::from_nm((dx * cos - dy * sin).round() as i64),
            y: center.y + Length::from_nm((dx * sin + dy * cos).round() as i64),
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VAlign {
    Bottom,
    Center,
    Top,
}

/// Combined text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alignment {
    pub h: HAlign,
    pub v: VAlign,
}

impl Alignment {
    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Alignment { h, v }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::new(HAlign::Center, VAlign::Center)
    }
}
