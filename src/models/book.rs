//! Book catalog model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use validator::Validate;

/// Book category (string identifier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookType {
    Computer,
    Economy,
    Society,
    Language,
    Science,
}

impl BookType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookType::Computer => "COMPUTER",
            BookType::Economy => "ECONOMY",
            BookType::Society => "SOCIETY",
            BookType::Language => "LANGUAGE",
            BookType::Science => "SCIENCE",
        }
    }
}

impl std::fmt::Display for BookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "COMPUTER" => Ok(BookType::Computer),
            "ECONOMY" => Ok(BookType::Economy),
            "SOCIETY" => Ok(BookType::Society),
            "LANGUAGE" => Ok(BookType::Language),
            "SCIENCE" => Ok(BookType::Science),
            _ => Err(format!("Invalid book type: {}", s)),
        }
    }
}

// SQLx conversions for BookType. The symbolic name is the stored value, so
// reordering the variants never changes what is persisted.
impl sqlx::Type<Postgres> for BookType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for BookType {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for BookType {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub book_type: BookType,
    pub crea_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
impl Book {
    /// Test fixture with valid defaults
    pub(crate) fn fixture() -> Self {
        Book {
            id: 1,
            name: "Clean Code".to_string(),
            book_type: BookType::Computer,
            crea_date: None,
        }
    }
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Book name must not be blank"))]
    pub name: String,
    pub book_type: BookType,
}

/// Update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Book name must not be blank"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_type_round_trips_through_symbolic_name() {
        let all = [
            BookType::Computer,
            BookType::Economy,
            BookType::Society,
            BookType::Language,
            BookType::Science,
        ];
        for t in all {
            assert_eq!(t.as_str().parse::<BookType>().unwrap(), t);
        }
    }

    #[test]
    fn book_type_rejects_unknown_names() {
        assert!("POETRY".parse::<BookType>().is_err());
        assert!("".parse::<BookType>().is_err());
    }

    #[test]
    fn book_type_serializes_as_uppercase_name() {
        let json = serde_json::to_string(&BookType::Computer).unwrap();
        assert_eq!(json, "\"COMPUTER\"");

        let parsed: BookType = serde_json::from_str("\"SCIENCE\"").unwrap();
        assert_eq!(parsed, BookType::Science);
    }

    #[test]
    fn fixture_is_a_valid_book() {
        let book = Book::fixture();
        assert_eq!(book.book_type, BookType::Computer);
        assert!(crate::models::ensure_not_blank("Book name", &book.name).is_ok());
    }
}
