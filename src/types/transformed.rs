//! Transformation outcome

use serde_json::Value;

/// Result of a `to_*` conversion.
///
/// When error detection is on and the response carries a non-empty `errors`
/// field, conversions hand back the whole decoded document as `ApiError`
/// instead of mapping it.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformed<T> {
    Data(T),
    ApiError(Value),
}

impl<T> Transformed<T> {
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiError(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            Self::ApiError(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::ApiError(_) => None,
        }
    }

    pub fn api_error(&self) -> Option<&Value> {
        match self {
            Self::Data(_) => None,
            Self::ApiError(doc) => Some(doc),
        }
    }

    /// `Ok` for data, `Err` carrying the error document otherwise.
    pub fn into_result(self) -> std::result::Result<T, Value> {
        match self {
            Self::Data(data) => Ok(data),
            Self::ApiError(doc) => Err(doc),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Transformed<U> {
        match self {
            Self::Data(data) => Transformed::Data(f(data)),
            Self::ApiError(doc) => Transformed::ApiError(doc),
        }
    }
}
