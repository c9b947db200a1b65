//! Text parsing and formatting for coordinate pairs and angles
//!
//! The pair grammar is `[(] number sep number [)]` with optional whitespace
//! between tokens. `sep` is `,` or `;`, except when the decimal separator is
//! itself `,`, in which case only `;` separates the two numbers.

use crate::error::{Result, SpatialError};
use crate::types::AngleUnit;
use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, multispace0, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{delimited, separated_pair, tuple},
    IResult,
};
use tracing::debug;

/// Number formatting options used when rendering and parsing text
///
/// `precision` of `None` renders the shortest string that round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Character separating integer and fractional digits
    pub decimal_separator: char,
    /// Fixed number of fractional digits
    pub precision: Option<usize>,
}

impl NumberFormat {
    /// Culture-independent format: `.` decimals, shortest round-trip digits
    pub const INVARIANT: NumberFormat = NumberFormat {
        decimal_separator: '.',
        precision: None,
    };

    /// Create the invariant format
    pub const fn new() -> Self {
        Self::INVARIANT
    }

    /// Use a fixed number of fractional digits
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Use a different decimal separator
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Separator placed between the two components of a pair
    pub fn pair_separator(&self) -> char {
        if self.decimal_separator == ',' {
            ';'
        } else {
            ','
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Recognized angle unit tokens, matched case-insensitively
const ANGLE_UNITS: &[(&str, AngleUnit)] = &[
    ("°", AngleUnit::Degrees),
    ("deg", AngleUnit::Degrees),
    ("degree", AngleUnit::Degrees),
    ("degrees", AngleUnit::Degrees),
    ("rad", AngleUnit::Radians),
    ("radian", AngleUnit::Radians),
    ("radians", AngleUnit::Radians),
];

/// Look up an angle unit by its textual token
pub fn lookup_angle_unit(token: &str) -> Result<AngleUnit> {
    ANGLE_UNITS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, unit)| *unit)
        .ok_or_else(|| SpatialError::OutOfRange(format!("Unrecognized angle unit '{}'", token)))
}

fn number_token(input: &str, decimal: char) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(tuple((digit1, opt(tuple((char(decimal), digit0)))))),
            recognize(tuple((char(decimal), digit1))),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

fn number(input: &str, decimal: char) -> IResult<&str, f64> {
    map_res(
        move |i| number_token(i, decimal),
        move |token: &str| token.replace(decimal, ".").parse::<f64>(),
    )(input)
}

fn pair_body<'a>(input: &'a str, format: &NumberFormat) -> IResult<&'a str, (f64, f64)> {
    let decimal = format.decimal_separator;
    let separators = if decimal == ',' { ";" } else { ",;" };
    separated_pair(
        delimited(multispace0, move |i| number(i, decimal), multispace0),
        one_of(separators),
        delimited(multispace0, move |i| number(i, decimal), multispace0),
    )(input)
}

fn pair<'a>(input: &'a str, format: &NumberFormat) -> IResult<&'a str, (f64, f64)> {
    delimited(
        multispace0,
        alt((
            delimited(char('('), move |i| pair_body(i, format), char(')')),
            move |i| pair_body(i, format),
        )),
        multispace0,
    )(input)
}

/// Parse two numbers separated by `,` or `;`, optionally parenthesized
pub fn parse_double_pair(text: &str, format: &NumberFormat) -> Result<(f64, f64)> {
    match all_consuming(move |i| pair(i, format))(text) {
        Ok((_, (x, y))) if x.is_finite() && y.is_finite() => Ok((x, y)),
        Ok(_) => {
            debug!(input = text, "number pair out of f64 range");
            Err(format!("Numbers in '{}' are not finite", text).into())
        }
        Err(err) => {
            debug!(input = text, error = %err, "rejected number pair");
            Err(format!("Expected a pair of numbers, got '{}'", text).into())
        }
    }
}

/// Parse a number followed by an angle unit, e.g. `"90°"` or `"1.5 rad"`
pub fn parse_angle_parts(text: &str, format: &NumberFormat) -> Result<(f64, AngleUnit)> {
    let decimal = format.decimal_separator;
    let (rest, value) = delimited(multispace0, move |i| number(i, decimal), multispace0)(text)
        .map_err(|err: nom::Err<nom::error::Error<&str>>| {
            debug!(input = text, error = %err, "rejected angle value");
            SpatialError::from(format!("Expected an angle, got '{}'", text))
        })?;
    if !value.is_finite() {
        debug!(input = text, "angle out of f64 range");
        return Err(format!("Angle '{}' is not finite", text).into());
    }

    let unit = rest.trim();
    if unit.is_empty() {
        debug!(input = text, "angle without unit");
        return Err(format!("Angle '{}' is missing a unit", text).into());
    }
    Ok((value, lookup_angle_unit(unit)?))
}

/// Render a single number
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    let text = match format.precision {
        Some(precision) => format!("{:.*}", precision, value),
        None => format!("{}", value),
    };
    if format.decimal_separator == '.' {
        text
    } else {
        text.replace('.', &format.decimal_separator.to_string())
    }
}

/// Render a pair as `"(x, y)"`, or `"(x; y)"` for comma decimals
pub fn format_pair(x: f64, y: f64, format: &NumberFormat) -> String {
    format!(
        "({}{} {})",
        format_number(x, format),
        format.pair_separator(),
        format_number(y, format)
    )
}
