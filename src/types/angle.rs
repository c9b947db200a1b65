//! Angle type with radian storage and degree conversion

use crate::error::{Result, SpatialError};
use crate::io::text::{format_number, parse_angle_parts, NumberFormat};
use crate::io::xml::{XmlElement, XmlSerializable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Unit an angle value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    /// Degrees, written with `°` or `deg`
    Degrees,
    /// Radians, written with `rad`
    Radians,
}

impl AngleUnit {
    /// Convert a value in this unit to radians
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value.to_radians(),
            AngleUnit::Radians => value,
        }
    }
}

/// A plane angle
///
/// Stored as radians. Ordering and equality compare the radian value
/// exactly; use [`Angle::equals_within`] for tolerant comparison.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// Zero angle
    pub const ZERO: Angle = Angle::from_radians(0.0);

    /// Create an angle from radians
    pub const fn from_radians(radians: f64) -> Self {
        Angle { radians }
    }

    /// Create an angle from degrees
    pub fn from_degrees(degrees: f64) -> Self {
        Angle::from_radians(degrees.to_radians())
    }

    /// Create an angle from a value in the given unit
    pub fn from_value(value: f64, unit: AngleUnit) -> Self {
        Angle::from_radians(unit.to_radians(value))
    }

    /// Value in radians
    pub const fn radians(&self) -> f64 {
        self.radians
    }

    /// Value in degrees
    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    /// Absolute value of the angle
    pub fn abs(&self) -> Angle {
        Angle::from_radians(self.radians.abs())
    }

    /// Compare with a tolerance; the bound is open
    ///
    /// Fails with `InvalidArgument` when `tolerance` is negative.
    pub fn equals_within(&self, other: &Angle, tolerance: Angle) -> Result<bool> {
        if tolerance.radians < 0.0 {
            return Err(SpatialError::InvalidArgument(format!(
                "Tolerance must not be negative, got {}",
                tolerance
            )));
        }
        Ok((self.radians - other.radians).abs() < tolerance.radians)
    }

    /// Parse strings such as `"90°"`, `"45 deg"` or `"1.5 rad"`
    pub fn parse(text: &str) -> Result<Angle> {
        Angle::parse_with(text, &NumberFormat::INVARIANT)
    }

    /// Parse with a specific number format
    pub fn parse_with(text: &str, format: &NumberFormat) -> Result<Angle> {
        let (value, unit) = parse_angle_parts(text, format)?;
        Ok(Angle::from_value(value, unit))
    }

    /// Render in degrees using the given number format, e.g. `"90°"`
    pub fn to_string_with(&self, format: &NumberFormat) -> String {
        format!("{}°", format_number(self.degrees(), format))
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, other: Angle) -> Angle {
        Angle::from_radians(self.radians + other.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, other: Angle) -> Angle {
        Angle::from_radians(self.radians - other.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, scalar: f64) -> Angle {
        Angle::from_radians(self.radians * scalar)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    fn mul(self, angle: Angle) -> Angle {
        angle * self
    }
}

impl Div<f64> for Angle {
    type Output = Angle;
    fn div(self, scalar: f64) -> Angle {
        Angle::from_radians(self.radians / scalar)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = NumberFormat {
            precision: f.precision(),
            ..NumberFormat::INVARIANT
        };
        f.write_str(&self.to_string_with(&format))
    }
}

impl FromStr for Angle {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self> {
        Angle::parse(s)
    }
}

impl XmlSerializable for Angle {
    const ELEMENT_NAME: &'static str = "Angle";

    fn to_xml_element(&self) -> XmlElement {
        XmlElement::new(Self::ELEMENT_NAME).with_number("Value", self.radians)
    }

    fn from_xml_element(element: &XmlElement) -> Result<Self> {
        Ok(Angle::from_radians(element.read_number("Value")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_angle_conversion() {
        let a = Angle::from_degrees(180.0);
        assert!((a.radians() - PI).abs() < 1e-15);
        assert!((Angle::from_radians(PI / 2.0).degrees() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_ordering() {
        let small = Angle::from_degrees(10.0);
        let large = Angle::from_degrees(20.0);
        assert!(small < large);
        assert!(large > small);
        assert!(-large < small);
    }

    #[test]
    fn test_angle_arithmetic() {
        let a = Angle::from_radians(1.0);
        let b = Angle::from_radians(0.5);
        assert_eq!(a + b, Angle::from_radians(1.5));
        assert_eq!(a - b, Angle::from_radians(0.5));
        assert_eq!(a * 2.0, Angle::from_radians(2.0));
        assert_eq!(2.0 * a, Angle::from_radians(2.0));
        assert_eq!(a / 4.0, Angle::from_radians(0.25));
        assert_eq!(-a, Angle::from_radians(-1.0));
        assert_eq!((-a).abs(), a);
    }

    #[test]
    fn test_equals_within() {
        let a = Angle::from_radians(1.0);
        let b = Angle::from_radians(1.0 + 1e-9);
        assert!(a.equals_within(&b, Angle::from_radians(1e-8)).unwrap());
        assert!(!a.equals_within(&b, Angle::from_radians(1e-10)).unwrap());
        assert!(matches!(
            a.equals_within(&b, Angle::from_radians(-1.0)),
            Err(SpatialError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse() {
        let a: Angle = "90°".parse().unwrap();
        assert!((a.radians() - PI / 2.0).abs() < 1e-15);

        let b = Angle::parse("1.5 rad").unwrap();
        assert_eq!(b.radians(), 1.5);

        let c = Angle::parse("-45 degrees").unwrap();
        assert!((c.degrees() + 45.0).abs() < 1e-12);

        assert!(matches!(Angle::parse("5 parsecs"), Err(SpatialError::OutOfRange(_))));
        assert!(matches!(Angle::parse("ninety°"), Err(SpatialError::Format(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Angle::from_radians(0.0).to_string(), "0°");
        assert_eq!(format!("{:.1}", Angle::from_degrees(45.0)), "45.0°");

        let a = Angle::from_degrees(-33.25);
        let back: Angle = a.to_string().parse().unwrap();
        assert!(a.equals_within(&back, Angle::from_radians(1e-12)).unwrap());
    }

    #[test]
    fn test_xml_roundtrip() {
        let a = Angle::from_radians(0.25);
        let xml = a.to_xml_string().unwrap();
        assert_eq!(xml, r#"<Angle Value="0.25"/>"#);
        assert_eq!(Angle::read_xml(&xml).unwrap(), a);
        assert_eq!(Angle::read_xml("<Angle><Value>0.25</Value></Angle>").unwrap(), a);
    }
}
