use actix_web::{HttpResponse, get, post, route, web};
use chrono::Utc;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::dto::person::{PersonRow, SearchParams};
use crate::forms::person::{AddPersonForm, EditPersonForm};
use crate::repository::DieselRepository;
use crate::routes::{redirect, render_template};
use crate::services::person as person_service;
use crate::services::ServiceError;

#[derive(Deserialize)]
struct EditQueryParams {
    #[serde(rename = "ID")]
    id: Option<String>,
}

#[derive(Deserialize)]
struct DeleteQueryParams {
    id: Option<String>,
}

fn parse_id(raw: Option<&str>) -> Result<i32, ServiceError> {
    raw.unwrap_or_default()
        .parse::<i32>()
        .map_err(|_| ServiceError::InvalidInput("Invalid person id".to_string()))
}

#[get("/")]
pub async fn show_index(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, ServiceError> {
    let people = person_service::list_people(repo.get_ref())?;

    let mut context = Context::new();
    context.insert("people", &people);
    Ok(render_template(&tera, "person/index.html", &context))
}

#[get("/add")]
pub async fn show_add_form(tera: web::Data<Tera>) -> HttpResponse {
    render_template(&tera, "person/add.html", &Context::new())
}

#[post("/add")]
pub async fn add_person(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddPersonForm>,
) -> Result<HttpResponse, ServiceError> {
    person_service::add_person(repo.get_ref(), &form, Utc::now().date_naive())?;
    Ok(redirect("/"))
}

#[get("/edit")]
pub async fn show_edit_form(
    params: web::Query<EditQueryParams>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, ServiceError> {
    let id = parse_id(params.id.as_deref())?;
    let person = person_service::load_person(repo.get_ref(), id)?;

    let mut context = Context::new();
    context.insert("person", &PersonRow::from(person));
    Ok(render_template(&tera, "person/edit.html", &context))
}

#[post("/edit")]
pub async fn save_person(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<EditPersonForm>,
) -> Result<HttpResponse, ServiceError> {
    person_service::update_person(repo.get_ref(), &form, Utc::now().date_naive())?;
    Ok(redirect("/"))
}

#[get("/search")]
pub async fn search_people(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, ServiceError> {
    let data = person_service::search_people(repo.get_ref(), &params)?;

    let mut context = Context::new();
    context.insert("title", "Search results");
    context.insert("people", &data.people);
    context.insert("search", &data.search);
    context.insert("order_by", &data.sort_by);
    context.insert("order", &data.order);
    Ok(render_template(&tera, "person/search.html", &context))
}

#[route("/delete", method = "GET", method = "POST")]
pub async fn delete_person(
    params: web::Query<DeleteQueryParams>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let id = parse_id(params.id.as_deref())?;
    person_service::delete_person(repo.get_ref(), id)?;
    Ok(redirect("/"))
}
