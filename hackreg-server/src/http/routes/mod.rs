//! Route handlers organized by resource

pub mod hackathons;
pub mod health;
pub mod users;

use serde::Serialize;

/// Successful response carrying a payload under `data`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
