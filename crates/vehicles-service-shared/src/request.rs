//! Request parameter types and validation for HTTP endpoints.
//!
//! Raw parameters arrive as strings from path segments or the query string.
//! Each `*Params` type converts them into typed values before the query
//! service is invoked; a conversion failure never reaches the service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vehicles_lib::SearchQuery;

use crate::problem::{from_validation_error, ProblemDetails};

/// A raw parameter that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Parameter is not a decimal integer.
    #[error("The '{field}' parameter must be an integer, got '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    /// Parameter is not a number.
    #[error("The '{field}' parameter must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

fn parse_integer(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    value
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    value
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Parse a color/year pair.
///
/// The color is passed through untouched, including the empty string.
pub fn parse_color_and_year(color: &str, year: &str) -> Result<(String, i64), ValidationError> {
    let year = parse_integer("year", year)?;
    Ok((color.to_string(), year))
}

/// Parse a brand and an inclusive year range.
///
/// `start_year` is checked before `end_year`.
pub fn parse_brand_and_year_range(
    brand: &str,
    start_year: &str,
    end_year: &str,
) -> Result<(String, i64, i64), ValidationError> {
    let start_year = parse_integer("start_year", start_year)?;
    let end_year = parse_integer("end_year", end_year)?;
    Ok((brand.to_string(), start_year, end_year))
}

/// Brand lookups take the brand verbatim; existence is the service's concern.
pub fn parse_brand(brand: &str) -> String {
    brand.to_string()
}

/// Parse weight bounds into a [`SearchQuery`].
///
/// `weight_min` is checked before `weight_max`. Ordering of the bounds is not
/// enforced.
pub fn parse_weight_range(weight_min: &str, weight_max: &str) -> Result<SearchQuery, ValidationError> {
    let weight_min = parse_number("weight_min", weight_min)?;
    let weight_max = parse_number("weight_max", weight_max)?;
    Ok(SearchQuery::new(weight_min, weight_max))
}

/// Validation trait for raw request parameters.
///
/// Implementations convert every field and return a `ProblemDetails` error
/// for malformed input.
pub trait Validate {
    /// Typed parameters produced on success.
    type Output;

    /// Validate and convert the parameters.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<Self::Output, Box<ProblemDetails>>;
}

fn to_problem(error: ValidationError, request_id: &str) -> Box<ProblemDetails> {
    Box::new(from_validation_error(&error, request_id))
}

/// Path parameters for the color/year lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorYearParams {
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub year: String,
}

impl Validate for ColorYearParams {
    type Output = (String, i64);

    fn validate(&self, request_id: &str) -> Result<Self::Output, Box<ProblemDetails>> {
        parse_color_and_year(&self.color, &self.year).map_err(|e| to_problem(e, request_id))
    }
}

/// Path parameters for the brand/year-range lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandYearRangeParams {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub start_year: String,
    #[serde(default)]
    pub end_year: String,
}

impl Validate for BrandYearRangeParams {
    type Output = (String, i64, i64);

    fn validate(&self, request_id: &str) -> Result<Self::Output, Box<ProblemDetails>> {
        parse_brand_and_year_range(&self.brand, &self.start_year, &self.end_year)
            .map_err(|e| to_problem(e, request_id))
    }
}

/// Path parameters for the per-brand averages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandParams {
    #[serde(default)]
    pub brand: String,
}

impl Validate for BrandParams {
    type Output = String;

    fn validate(&self, _request_id: &str) -> Result<Self::Output, Box<ProblemDetails>> {
        Ok(parse_brand(&self.brand))
    }
}

/// Query-string parameters for the weight-range search.
///
/// Absent parameters deserialize to the empty string and fail validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightRangeParams {
    #[serde(default)]
    pub weight_min: String,
    #[serde(default)]
    pub weight_max: String,
}

impl Validate for WeightRangeParams {
    type Output = SearchQuery;

    fn validate(&self, request_id: &str) -> Result<Self::Output, Box<ProblemDetails>> {
        parse_weight_range(&self.weight_min, &self.weight_max).map_err(|e| to_problem(e, request_id))
    }
}
