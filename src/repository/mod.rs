use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::{DbConnection, DbPool};
use crate::domain::person::{NewPerson, Person, UpdatePerson};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod person;

/// Columns search results may be ordered by. User input is parsed into
/// this enum before query construction; anything outside the list is
/// rejected up front, so no raw identifier ever reaches the query
/// builder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Id,
    FirstName,
    LastName,
    BirthDate,
    Gender,
    Email,
    Address,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort column: {0}")]
pub struct UnknownSortColumn(pub String);

impl FromStr for SortBy {
    type Err = UnknownSortColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            "birth_date" => Ok(Self::BirthDate),
            "gender" => Ok(Self::Gender),
            "email" => Ok(Self::Email),
            "address" => Ok(Self::Address),
            other => Err(UnknownSortColumn(other.to_string())),
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::BirthDate => "birth_date",
            Self::Gender => "gender",
            Self::Email => "email",
            Self::Address => "address",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The direction a sort link click switches to. Clicking an
    /// ascending column header sorts descending and vice versa.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "ASC"),
            Self::Desc => write!(f, "DESC"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Offset of the first row on the page; pages are one-based.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.per_page * (self.page.max(1) - 1)) as i64
    }
}

/// Parameters for the paginated person search.
#[derive(Debug, Clone)]
pub struct PersonSearchQuery {
    /// Name pattern matched whole against first or last name. An empty
    /// pattern matches nothing.
    pub pattern: String,
    pub sort_by: SortBy,
    pub direction: SortDirection,
    pub pagination: Option<Pagination>,
}

impl PersonSearchQuery {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            sort_by: SortBy::default(),
            direction: SortDirection::default(),
            pagination: None,
        }
    }

    pub fn order_by(mut self, sort_by: SortBy, direction: SortDirection) -> Self {
        self.sort_by = sort_by;
        self.direction = direction;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait PersonReader {
    fn get_person_by_id(&self, id: i32) -> RepositoryResult<Option<Person>>;
    fn list_people(&self) -> RepositoryResult<Vec<Person>>;
    fn search_people(&self, query: PersonSearchQuery) -> RepositoryResult<(usize, Vec<Person>)>;
}

pub trait PersonWriter {
    fn create_person(&self, new_person: &NewPerson) -> RepositoryResult<Person>;
    fn update_person(&self, person_id: i32, updates: &UpdatePerson) -> RepositoryResult<Person>;
    fn delete_person(&self, person_id: i32) -> RepositoryResult<()>;
}

/// Diesel implementation of the repository traits, shared across
/// handlers via `web::Data`.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
