//! Request builder and response parser for the to-do API.
//!
//! # Design
//! `ToDoClient` holds only a `base_url`. Every operation is a `build_*`
//! method producing an `HttpRequest` and a `parse_*` method consuming the
//! `HttpResponse`; the caller does the round-trip in between. Every route
//! answers 200 on success and 404 when the id is unknown.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{SaveToDo, ToDo};

const OK: u16 = 200;

#[derive(Debug, Clone)]
pub struct ToDoClient {
    base_url: String,
}

impl ToDoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Get, self.todos_url())
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Get, self.todo_url(id))
    }

    /// `POST /todos`; creates or updates depending on `input.id`.
    pub fn build_save_todo(&self, input: &SaveToDo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Post, self.todos_url(), body))
    }

    pub fn build_complete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Put, format!("{}/complete", self.todo_url(id)))
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Delete, self.todo_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<ToDo>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<ToDo, ApiError> {
        parse_json(response)
    }

    pub fn parse_save_todo(&self, response: HttpResponse) -> Result<ToDo, ApiError> {
        parse_json(response)
    }

    pub fn parse_complete_todo(&self, response: HttpResponse) -> Result<ToDo, ApiError> {
        parse_json(response)
    }

    /// Deleting an unknown id is not an error on the server side.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, OK)
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: i64) -> String {
        format!("{}/todos/{id}", self.base_url)
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response, OK)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
