use chrono::NaiveDate;
use validator::Validate;

use crate::domain::dates;
use crate::domain::person::Person;
use crate::dto::person::{PersonRow, SearchPageData, SearchParams};
use crate::forms::person::{AddPersonForm, EditPersonForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{PersonReader, PersonSearchQuery, PersonWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads every person for the unpaginated list view.
pub fn list_people<R>(repo: &R) -> ServiceResult<Vec<PersonRow>>
where
    R: PersonReader + ?Sized,
{
    let people = repo.list_people().map_err(ServiceError::from)?;
    Ok(people.into_iter().map(Into::into).collect())
}

/// Fetches a person for the edit form. A missing record is reported
/// the same way as a malformed id.
pub fn load_person<R>(repo: &R, id: i32) -> ServiceResult<Person>
where
    R: PersonReader + ?Sized,
{
    repo.get_person_by_id(id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the add form and persists a new person record.
pub fn add_person<R>(repo: &R, form: &AddPersonForm, today: NaiveDate) -> ServiceResult<Person>
where
    R: PersonWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate add form: {err}");
        return Err(ServiceError::InvalidInput("Form validation failed".to_string()));
    }

    let new_person = form.to_new_person()?;
    if !dates::is_age_valid(new_person.birth_date, today) {
        return Err(ServiceError::AgeOutOfRange);
    }

    repo.create_person(&new_person).map_err(|err| {
        log::error!("Failed to add a person: {err}");
        ServiceError::from(err)
    })
}

/// Validates the edit form and applies the update.
pub fn update_person<R>(repo: &R, form: &EditPersonForm, today: NaiveDate) -> ServiceResult<Person>
where
    R: PersonWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate edit form: {err}");
        return Err(ServiceError::InvalidInput("Form validation failed".to_string()));
    }

    let updates = form.to_update_person()?;
    if !dates::is_age_valid(updates.birth_date, today) {
        return Err(ServiceError::AgeOutOfRange);
    }

    repo.update_person(form.id, &updates).map_err(|err| {
        log::error!("Failed to update person {}: {err}", form.id);
        ServiceError::from(err)
    })
}

/// Runs the paginated name search and shapes the results for the
/// template.
pub fn search_people<R>(repo: &R, params: &SearchParams) -> ServiceResult<SearchPageData>
where
    R: PersonReader + ?Sized,
{
    let sort_by = params.sort_by()?;
    let direction = params.direction();
    let page = params.page();
    let pattern = params.pattern().to_string();

    let query = PersonSearchQuery::new(pattern.clone())
        .order_by(sort_by, direction)
        .paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let (total, people) = repo.search_people(query).map_err(ServiceError::from)?;

    let rows: Vec<PersonRow> = people.into_iter().map(Into::into).collect();
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(SearchPageData {
        people: Paginated::new(rows, page, total_pages),
        search: pattern,
        sort_by,
        order: direction,
    })
}

/// Deletes a person. Deleting an id that no longer exists succeeds.
pub fn delete_person<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: PersonWriter + ?Sized,
{
    repo.delete_person(id).map_err(|err| {
        log::error!("Failed to delete person {id}: {err}");
        ServiceError::from(err)
    })
}
