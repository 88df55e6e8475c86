use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::person::{
    NewPerson as DomainNewPerson, Person as DomainPerson, UpdatePerson as DomainUpdatePerson,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::people)]
/// Diesel model for [`crate::domain::person::Person`].
pub struct Person {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub email: String,
    pub address: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::people)]
/// Insertable form of [`Person`].
pub struct NewPerson<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birth_date: NaiveDate,
    pub gender: &'a str,
    pub email: &'a str,
    pub address: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::people)]
/// Data used when updating a [`Person`] record.
pub struct UpdatePerson<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birth_date: NaiveDate,
    pub gender: &'a str,
    pub email: &'a str,
    pub address: &'a str,
}

impl From<Person> for DomainPerson {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            first_name: person.first_name,
            last_name: person.last_name,
            birth_date: person.birth_date,
            gender: person.gender,
            email: person.email,
            address: person.address,
        }
    }
}

impl<'a> From<&'a DomainNewPerson> for NewPerson<'a> {
    fn from(person: &'a DomainNewPerson) -> Self {
        Self {
            first_name: person.first_name.as_str(),
            last_name: person.last_name.as_str(),
            birth_date: person.birth_date,
            gender: person.gender.as_str(),
            email: person.email.as_str(),
            address: person.address.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdatePerson> for UpdatePerson<'a> {
    fn from(person: &'a DomainUpdatePerson) -> Self {
        Self {
            first_name: person.first_name.as_str(),
            last_name: person.last_name.as_str(),
            birth_date: person.birth_date,
            gender: person.gender.as_str(),
            email: person.email.as_str(),
            address: person.address.as_str(),
        }
    }
}
