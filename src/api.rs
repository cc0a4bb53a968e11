//! Remote Collection API
//!
//! Thin async wrappers over the todos endpoint, one per remote operation.
//! Callers only ever inspect success/failure; the error payload is carried
//! for console diagnostics.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use thiserror::Error;

use crate::models::Todo;

const BASE_URL: &str = "https://mate.academy/students-api";

/// Owner of every todo this client reads or writes. `0` means unconfigured
/// and keeps the app from mounting at all.
pub const USER_ID: u64 = 2125;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Create/update payload: a todo without its server-assigned id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

fn checked(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

pub async fn get_todos() -> Result<Vec<Todo>, ApiError> {
    let response = Request::get(&format!("{BASE_URL}/todos?userId={USER_ID}"))
        .send()
        .await?;
    Ok(checked(response)?.json().await?)
}

pub async fn add_todo(new_todo: &TodoPayload) -> Result<Todo, ApiError> {
    let response = Request::post(&format!("{BASE_URL}/todos"))
        .json(new_todo)?
        .send()
        .await?;
    Ok(checked(response)?.json().await?)
}

pub async fn update_todo(id: u64, todo: &TodoPayload) -> Result<Todo, ApiError> {
    let response = Request::patch(&format!("{BASE_URL}/todos/{id}"))
        .json(todo)?
        .send()
        .await?;
    Ok(checked(response)?.json().await?)
}

pub async fn delete_todo(id: u64) -> Result<(), ApiError> {
    let response = Request::delete(&format!("{BASE_URL}/todos/{id}"))
        .send()
        .await?;
    checked(response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_without_id() {
        let payload = TodoPayload {
            user_id: USER_ID,
            title: "buy milk".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["userId"], USER_ID);
        assert_eq!(json["completed"], false);
    }
}
