use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{App, test, web};
use tera::Tera;

use person_registry::domain::person::NewPerson;
use person_registry::repository::{DieselRepository, PersonWriter};
use person_registry::routes::person::{
    add_person, delete_person, save_person, search_people, show_add_form, show_edit_form,
    show_index,
};

mod common;

macro_rules! test_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(
                    Tera::new("templates/**/*.html").expect("failed to load templates"),
                ))
                .app_data(web::Data::new($repo.clone()))
                .service(show_index)
                .service(show_add_form)
                .service(add_person)
                .service(show_edit_form)
                .service(save_person)
                .service(search_people)
                .service(delete_person),
        )
        .await
    };
}

fn seed_person(repo: &DieselRepository, first: &str, last: &str, email: &str) -> i32 {
    let person = repo
        .create_person(&NewPerson::new(
            first.to_string(),
            last.to_string(),
            chrono::NaiveDate::from_ymd_opt(1990, 4, 1).unwrap(),
            "male".to_string(),
            email.to_string(),
            "Main st. 1".to_string(),
        ))
        .unwrap();
    person.id
}

#[actix_web::test]
async fn test_index_lists_people() {
    let test_db = common::TestDb::new("test_index_lists_people.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed_person(&repo, "Alice", "Smith", "alice@example.com");
    let app = test_app!(repo);

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("Alice"));
    assert!(body.contains("01.04.1990"));
}

#[actix_web::test]
async fn test_add_person_redirects_on_success() {
    let test_db = common::TestDb::new("test_add_redirects.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/add")
        .set_form([
            ("firstName", "John"),
            ("lastName", "Doe"),
            ("day", "1"),
            ("month", "4"),
            ("year", "1990"),
            ("gender", "male"),
            ("email", "john@example.com"),
            ("address", "Main st. 1"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
}

#[actix_web::test]
async fn test_add_person_rejects_underage() {
    let test_db = common::TestDb::new("test_add_underage.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/add")
        .set_form([
            ("firstName", "Kid"),
            ("lastName", "Young"),
            ("day", "1"),
            ("month", "4"),
            ("year", "2015"),
            ("gender", "male"),
            ("email", "kid@example.com"),
            ("address", "Main st. 1"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_add_duplicate_email_is_client_error() {
    let test_db = common::TestDb::new("test_add_duplicate.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed_person(&repo, "John", "Doe", "john@example.com");
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/add")
        .set_form([
            ("firstName", "John"),
            ("lastName", "Doe"),
            ("day", "1"),
            ("month", "4"),
            ("year", "1990"),
            ("gender", "male"),
            ("email", "john@example.com"),
            ("address", "Main st. 1"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_edit_form_requires_valid_id() {
    let test_db = common::TestDb::new("test_edit_invalid_id.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let id = seed_person(&repo, "Alice", "Smith", "alice@example.com");
    let app = test_app!(repo);

    let req = test::TestRequest::get().uri("/edit?ID=abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/edit").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/edit?ID=999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/edit?ID={id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_save_person_updates_record() {
    let test_db = common::TestDb::new("test_save_person.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let id = seed_person(&repo, "Alice", "Smith", "alice@example.com");
    let app = test_app!(repo);

    let id = id.to_string();
    let req = test::TestRequest::post()
        .uri("/edit")
        .set_form([
            ("id", id.as_str()),
            ("firstName", "Alicia"),
            ("lastName", "Smith"),
            ("birthDate", "01.04.1990"),
            ("gender", "female"),
            ("email", "alice@example.com"),
            ("address", "New st. 2"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("Alicia"));
}

#[actix_web::test]
async fn test_search_rejects_unknown_order_column() {
    let test_db = common::TestDb::new("test_search_bad_order_by.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let app = test_app!(repo);

    let req = test::TestRequest::get()
        .uri("/search?q=%25&orderBy=hubris")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_search_toggles_direction() {
    let test_db = common::TestDb::new("test_search_toggle.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed_person(&repo, "Alice", "Smith", "alice@example.com");
    seed_person(&repo, "Bob", "Smith", "bob@example.com");
    let app = test_app!(repo);

    // order=ASC flips to descending: Bob before Alice.
    let req = test::TestRequest::get()
        .uri("/search?q=%25&orderBy=first_name&order=ASC")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    let bob = body.find("Bob").unwrap();
    let alice = body.find("Alice").unwrap();
    assert!(bob < alice);

    // order=DESC flips back to ascending.
    let req = test::TestRequest::get()
        .uri("/search?q=%25&orderBy=first_name&order=DESC")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    let bob = body.find("Bob").unwrap();
    let alice = body.find("Alice").unwrap();
    assert!(alice < bob);
}

#[actix_web::test]
async fn test_search_normalizes_page() {
    let test_db = common::TestDb::new("test_search_page_normalize.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed_person(&repo, "Alice", "Smith", "alice@example.com");
    let app = test_app!(repo);

    for uri in ["/search?q=%25&page=abc", "/search?q=%25&page=-2"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let body = test::call_and_read_body(&app, req).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Alice"), "page fallback failed for {uri}");
    }
}

#[actix_web::test]
async fn test_delete_person() {
    let test_db = common::TestDb::new("test_delete_person.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let id = seed_person(&repo, "Alice", "Smith", "alice@example.com");
    let app = test_app!(repo);

    let req = test::TestRequest::get()
        .uri(&format!("/delete?id={id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    // Deleting an id that is already gone still redirects.
    let req = test::TestRequest::get()
        .uri(&format!("/delete?id={id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::get().uri("/delete?id=abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
