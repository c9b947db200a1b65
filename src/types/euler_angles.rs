//! Euler angle triple

use super::Angle;
use crate::error::{Result, SpatialError};
use crate::io::xml::{XmlElement, XmlSerializable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three successive rotation angles
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// First rotation
    pub alpha: Angle,
    /// Second rotation
    pub beta: Angle,
    /// Third rotation
    pub gamma: Angle,
}

impl EulerAngles {
    /// Create a new set of Euler angles
    pub const fn new(alpha: Angle, beta: Angle, gamma: Angle) -> Self {
        EulerAngles { alpha, beta, gamma }
    }

    /// True if all three angles are exactly zero
    pub fn is_empty(&self) -> bool {
        self.alpha == Angle::ZERO && self.beta == Angle::ZERO && self.gamma == Angle::ZERO
    }

    /// Compare each angle with an open tolerance
    ///
    /// Fails with `InvalidArgument` when `tolerance` is negative.
    pub fn equals_within(&self, other: &EulerAngles, tolerance: Angle) -> Result<bool> {
        Ok(self.alpha.equals_within(&other.alpha, tolerance)?
            && self.beta.equals_within(&other.beta, tolerance)?
            && self.gamma.equals_within(&other.gamma, tolerance)?)
    }
}

impl fmt::Display for EulerAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "α: {}, β: {}, γ: {}", self.alpha, self.beta, self.gamma)
    }
}

fn angle_child(name: &str, angle: Angle) -> XmlElement {
    XmlElement::new(name).with_number("Value", angle.radians())
}

fn read_angle_child(element: &XmlElement, name: &str) -> Result<Angle> {
    let child = element.child(name).ok_or_else(|| {
        SpatialError::Xml(format!("<{}> is missing <{}>", element.name, name))
    })?;
    Angle::from_xml_element(child)
}

impl XmlSerializable for EulerAngles {
    const ELEMENT_NAME: &'static str = "EulerAngles";

    fn to_xml_element(&self) -> XmlElement {
        XmlElement::new(Self::ELEMENT_NAME)
            .with_child(angle_child("Alpha", self.alpha))
            .with_child(angle_child("Beta", self.beta))
            .with_child(angle_child("Gamma", self.gamma))
    }

    fn from_xml_element(element: &XmlElement) -> Result<Self> {
        Ok(EulerAngles::new(
            read_angle_child(element, "Alpha")?,
            read_angle_child(element, "Beta")?,
            read_angle_child(element, "Gamma")?,
        ))
    }
}
