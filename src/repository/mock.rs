//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::person::{NewPerson, Person, UpdatePerson};
use crate::repository::errors::RepositoryResult;
use crate::repository::{PersonReader, PersonSearchQuery, PersonWriter};

mock! {
    pub Repository {}

    impl PersonReader for Repository {
        fn get_person_by_id(&self, id: i32) -> RepositoryResult<Option<Person>>;
        fn list_people(&self) -> RepositoryResult<Vec<Person>>;
        fn search_people(
            &self,
            query: PersonSearchQuery,
        ) -> RepositoryResult<(usize, Vec<Person>)>;
    }

    impl PersonWriter for Repository {
        fn create_person(&self, new_person: &NewPerson) -> RepositoryResult<Person>;
        fn update_person(
            &self,
            person_id: i32,
            updates: &UpdatePerson,
        ) -> RepositoryResult<Person>;
        fn delete_person(&self, person_id: i32) -> RepositoryResult<()>;
    }
}
