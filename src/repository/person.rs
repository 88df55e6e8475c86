//! Diesel implementation of the person repository.

use diesel::prelude::*;

use crate::domain::person::{NewPerson, Person, UpdatePerson};
use crate::repository::{
    DieselRepository, PersonReader, PersonSearchQuery, PersonWriter, SortBy, SortDirection,
    errors::{RepositoryError, RepositoryResult},
};

impl PersonReader for DieselRepository {
    fn get_person_by_id(&self, id: i32) -> RepositoryResult<Option<Person>> {
        use crate::models::person::Person as DbPerson;
        use crate::schema::people;

        let mut conn = self.conn()?;
        let person = people::table
            .find(id)
            .first::<DbPerson>(&mut conn)
            .optional()?;

        Ok(person.map(Into::into))
    }

    fn list_people(&self) -> RepositoryResult<Vec<Person>> {
        use crate::models::person::Person as DbPerson;
        use crate::schema::people;

        let mut conn = self.conn()?;
        let items = people::table
            .order(people::id.asc())
            .load::<DbPerson>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn search_people(&self, query: PersonSearchQuery) -> RepositoryResult<(usize, Vec<Person>)> {
        use crate::models::person::Person as DbPerson;
        use crate::schema::people;

        let mut conn = self.conn()?;

        // The pattern is matched whole, so callers control wildcard
        // placement themselves. Values are bound, never spliced.
        let mut items_query = people::table
            .filter(
                people::first_name
                    .like(query.pattern.clone())
                    .or(people::last_name.like(query.pattern.clone())),
            )
            .into_boxed();

        items_query = match (query.sort_by, query.direction) {
            (SortBy::Id, SortDirection::Asc) => items_query.order(people::id.asc()),
            (SortBy::Id, SortDirection::Desc) => items_query.order(people::id.desc()),
            (SortBy::FirstName, SortDirection::Asc) => {
                items_query.order(people::first_name.asc())
            }
            (SortBy::FirstName, SortDirection::Desc) => {
                items_query.order(people::first_name.desc())
            }
            (SortBy::LastName, SortDirection::Asc) => items_query.order(people::last_name.asc()),
            (SortBy::LastName, SortDirection::Desc) => items_query.order(people::last_name.desc()),
            (SortBy::BirthDate, SortDirection::Asc) => {
                items_query.order(people::birth_date.asc())
            }
            (SortBy::BirthDate, SortDirection::Desc) => {
                items_query.order(people::birth_date.desc())
            }
            (SortBy::Gender, SortDirection::Asc) => items_query.order(people::gender.asc()),
            (SortBy::Gender, SortDirection::Desc) => items_query.order(people::gender.desc()),
            (SortBy::Email, SortDirection::Asc) => items_query.order(people::email.asc()),
            (SortBy::Email, SortDirection::Desc) => items_query.order(people::email.desc()),
            (SortBy::Address, SortDirection::Asc) => items_query.order(people::address.asc()),
            (SortBy::Address, SortDirection::Desc) => items_query.order(people::address.desc()),
        };

        if let Some(pagination) = &query.pagination {
            items_query = items_query
                .limit(pagination.per_page as i64)
                .offset(pagination.offset());
        }

        let items = items_query
            .load::<DbPerson>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Person>>();

        let total: i64 = people::table
            .filter(
                people::first_name
                    .like(query.pattern.clone())
                    .or(people::last_name.like(query.pattern)),
            )
            .count()
            .get_result(&mut conn)?;

        Ok((total as usize, items))
    }
}

impl PersonWriter for DieselRepository {
    fn create_person(&self, new_person: &NewPerson) -> RepositoryResult<Person> {
        use crate::models::person::{NewPerson as DbNewPerson, Person as DbPerson};
        use crate::schema::people;

        let mut conn = self.conn()?;
        let insertable: DbNewPerson = new_person.into();

        let created = diesel::insert_into(people::table)
            .values(&insertable)
            .get_result::<DbPerson>(&mut conn)?;

        Ok(created.into())
    }

    fn update_person(&self, person_id: i32, updates: &UpdatePerson) -> RepositoryResult<Person> {
        use crate::models::person::{Person as DbPerson, UpdatePerson as DbUpdatePerson};
        use crate::schema::people;

        let mut conn = self.conn()?;
        let db_updates: DbUpdatePerson = updates.into();

        let updated = conn
            .transaction::<DbPerson, diesel::result::Error, _>(|conn| {
                diesel::update(people::table.find(person_id))
                    .set(&db_updates)
                    .get_result::<DbPerson>(conn)
            })
            .map_err(RepositoryError::from)?;

        Ok(updated.into())
    }

    fn delete_person(&self, person_id: i32) -> RepositoryResult<()> {
        use crate::schema::people;

        let mut conn = self.conn()?;

        // Deleting an id that no longer exists is not an error.
        diesel::delete(people::table.find(person_id)).execute(&mut conn)?;
        Ok(())
    }
}
