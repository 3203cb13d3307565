//! Book model

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

pub const MIN_PUBLISHED_YEAR: i64 = 1000;
pub const MAX_PUBLISHED_YEAR: i64 = 2100;

/// Order in which field failures are reported; only the first is surfaced.
const FIELD_ORDER: [&str; 3] = ["title", "author", "published_year"];

/// Stored book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Server-assigned identifier
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Year of first publication (1000..=2100)
    pub published_year: i64,
}

/// Create / update book request
///
/// Missing and `null` fields decode to their empty value so that
/// validation, not decoding, reports them.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct BookPayload {
    /// Ignored: identifiers are assigned by the server
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank", message = "title is required"))]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank", message = "author is required"))]
    pub author: String,
    #[validate(range(
        min = 1000,
        max = 2100,
        message = "published year must be between 1000 and 2100"
    ))]
    #[serde(deserialize_with = "null_as_default")]
    pub published_year: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl BookPayload {
    /// Validate the payload, reporting title, author, then year.
    pub fn check(&self) -> AppResult<()> {
        self.validate()
            .map_err(|errors| AppError::from_validation(&errors, &FIELD_ORDER))
    }

    /// Candidate record for the store. The id is carried over as sent and
    /// overwritten by the store.
    pub fn into_book(self) -> Book {
        Book {
            id: self.id.unwrap_or_default(),
            title: self.title,
            author: self.author,
            published_year: self.published_year,
        }
    }
}
