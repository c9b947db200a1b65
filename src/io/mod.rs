//! Text and XML codecs for the value types

pub mod text;
pub mod xml;

pub use text::NumberFormat;
pub use xml::{XmlElement, XmlSerializable};
