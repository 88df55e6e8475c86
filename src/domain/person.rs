use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person record as seen by the rest of the application.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub email: String,
    pub address: String,
}

/// Data for inserting a person. The identifier is assigned by storage.
#[derive(Clone, Debug, Deserialize)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub email: String,
    pub address: String,
}

impl NewPerson {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        birth_date: NaiveDate,
        gender: String,
        email: String,
        address: String,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            birth_date,
            gender: gender.trim().to_string(),
            email: email.trim().to_lowercase(),
            address: address.trim().to_string(),
        }
    }
}

/// Data applied when updating an existing person.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdatePerson {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub email: String,
    pub address: String,
}

impl UpdatePerson {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        birth_date: NaiveDate,
        gender: String,
        email: String,
        address: String,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            birth_date,
            gender: gender.trim().to_string(),
            email: email.trim().to_lowercase(),
            address: address.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_person_normalizes_fields() {
        let person = NewPerson::new(
            " John ".to_string(),
            "Doe".to_string(),
            NaiveDate::from_ymd_opt(1990, 4, 1).unwrap(),
            "male".to_string(),
            "John.Doe@Example.COM ".to_string(),
            " Main st. 1 ".to_string(),
        );
        assert_eq!(person.first_name, "John");
        assert_eq!(person.email, "john.doe@example.com");
        assert_eq!(person.address, "Main st. 1");
    }
}
