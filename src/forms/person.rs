use serde::Deserialize;
use validator::Validate;

use crate::domain::dates::{self, DateError};
use crate::domain::person::{NewPerson, UpdatePerson};

#[derive(Deserialize, Validate)]
/// Form data for creating a person. The birth date arrives as three
/// separate select fields.
pub struct AddPersonForm {
    #[serde(rename = "firstName")]
    #[validate(length(min = 1))]
    pub first_name: String,
    #[serde(rename = "lastName")]
    #[validate(length(min = 1))]
    pub last_name: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub gender: String,
    #[validate(email)]
    pub email: String,
    pub address: String,
}

impl AddPersonForm {
    /// Assembles the day/month/year fields into a date.
    pub fn birth_date(&self) -> Result<chrono::NaiveDate, DateError> {
        dates::parse_storage(&format!("{}-{}-{}", self.year, self.month, self.day))
    }

    pub fn to_new_person(&self) -> Result<NewPerson, DateError> {
        Ok(NewPerson::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.birth_date()?,
            self.gender.clone(),
            self.email.clone(),
            self.address.clone(),
        ))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing person. Unlike the add form the
/// birth date is a single `DD.MM.YYYY` field.
pub struct EditPersonForm {
    pub id: i32,
    #[serde(rename = "firstName")]
    #[validate(length(min = 1))]
    pub first_name: String,
    #[serde(rename = "lastName")]
    #[validate(length(min = 1))]
    pub last_name: String,
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    pub gender: String,
    #[validate(email)]
    pub email: String,
    pub address: String,
}

impl EditPersonForm {
    pub fn birth_date(&self) -> Result<chrono::NaiveDate, DateError> {
        dates::parse_display(&self.birth_date)
    }

    pub fn to_update_person(&self) -> Result<UpdatePerson, DateError> {
        Ok(UpdatePerson::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.birth_date()?,
            self.gender.clone(),
            self.email.clone(),
            self.address.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn add_form() -> AddPersonForm {
        AddPersonForm {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            day: "1".to_string(),
            month: "4".to_string(),
            year: "1990".to_string(),
            gender: "male".to_string(),
            email: "john@example.com".to_string(),
            address: "Main st. 1".to_string(),
        }
    }

    #[test]
    fn add_form_assembles_birth_date_from_parts() {
        assert_eq!(
            add_form().birth_date(),
            Ok(NaiveDate::from_ymd_opt(1990, 4, 1).unwrap())
        );
    }

    #[test]
    fn add_form_rejects_bad_date_parts() {
        let mut form = add_form();
        form.month = "13".to_string();
        assert!(form.birth_date().is_err());
        form.month = "".to_string();
        assert!(form.to_new_person().is_err());
    }

    #[test]
    fn edit_form_parses_dotted_birth_date() {
        let form = EditPersonForm {
            id: 3,
            first_name: "Jane".to_string(),
            last_name: "Roe".to_string(),
            birth_date: "31.12.1985".to_string(),
            gender: "female".to_string(),
            email: "jane@example.com".to_string(),
            address: "Elsewhere 2".to_string(),
        };
        let updates = form.to_update_person().unwrap();
        assert_eq!(
            updates.birth_date,
            NaiveDate::from_ymd_opt(1985, 12, 31).unwrap()
        );
        assert_eq!(updates.first_name, "Jane");
    }
}
