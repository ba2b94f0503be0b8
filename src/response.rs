//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessOne<T> {
    pub msg: String,
    pub data: T,
}

#[derive(Serialize)]
pub struct SuccessMany<T> {
    pub msg: String,
    pub data: Vec<T>,
    pub meta: MetaCount,
}

#[derive(Serialize)]
pub struct MetaCount {
    pub count: u64,
}

/// Body for responses that only confirm an action (e.g. delete).
#[derive(Serialize)]
pub struct MessageOnly {
    pub msg: String,
}

pub fn success_one<T: Serialize>(msg: impl Into<String>, data: T) -> (StatusCode, Json<SuccessOne<T>>) {
    (
        StatusCode::CREATED,
        Json(SuccessOne {
            msg: msg.into(),
            data,
        }),
    )
}

pub fn success_one_ok<T: Serialize>(msg: impl Into<String>, data: T) -> (StatusCode, Json<SuccessOne<T>>) {
    (
        StatusCode::OK,
        Json(SuccessOne {
            msg: msg.into(),
            data,
        }),
    )
}

pub fn success_many<T: Serialize>(msg: impl Into<String>, data: Vec<T>) -> (StatusCode, Json<SuccessMany<T>>) {
    let count = data.len() as u64;
    (
        StatusCode::OK,
        Json(SuccessMany {
            msg: msg.into(),
            data,
            meta: MetaCount { count },
        }),
    )
}

pub fn message_ok(msg: impl Into<String>) -> (StatusCode, Json<MessageOnly>) {
    (StatusCode::OK, Json(MessageOnly { msg: msg.into() }))
}
