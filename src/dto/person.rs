use serde::{Deserialize, Serialize};

use crate::domain::dates;
use crate::domain::person::Person;
use crate::pagination::Paginated;
use crate::repository::{SortBy, SortDirection, UnknownSortColumn};

/// Raw query parameters accepted by the search page. Parsed leniently
/// on purpose: the page links and sort headers echo these values back,
/// and a stale or hand-edited URL should degrade to defaults rather
/// than fail, except for the sort column which is strictly validated.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,
    pub order: Option<String>,
}

impl SearchParams {
    /// Requested page, defaulting to 1 on absent, non-numeric or
    /// sub-one values.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    /// Search pattern, empty when absent.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    /// Sort column, defaulting to `id`. Values outside the allow-list
    /// are an error, never passed through.
    pub fn sort_by(&self) -> Result<SortBy, UnknownSortColumn> {
        match self.order_by.as_deref() {
            None | Some("") => Ok(SortBy::default()),
            Some(column) => column.parse(),
        }
    }

    /// Effective sort direction. Sort links carry the direction they
    /// currently display, and a click flips it: an explicit `ASC`
    /// yields descending order, any other explicit value ascending.
    /// Absent means ascending.
    #[must_use]
    pub fn direction(&self) -> SortDirection {
        match self.order.as_deref() {
            None | Some("") => SortDirection::Asc,
            Some("ASC") => SortDirection::Asc.toggled(),
            Some(_) => SortDirection::Asc,
        }
    }
}

/// A person shaped for template rendering, with the birth date in
/// display form.
#[derive(Debug, Serialize)]
pub struct PersonRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub gender: String,
    pub email: String,
    pub address: String,
}

impl From<Person> for PersonRow {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            first_name: person.first_name,
            last_name: person.last_name,
            birth_date: dates::format_display(person.birth_date),
            gender: person.gender,
            email: person.email,
            address: person.address,
        }
    }
}

/// Data required to render the search results template.
#[derive(Serialize)]
pub struct SearchPageData {
    pub people: Paginated<PersonRow>,
    pub search: String,
    pub sort_by: SortBy,
    pub order: SortDirection,
}
