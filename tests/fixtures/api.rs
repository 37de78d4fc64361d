// Annotated input used by the generator integration tests.

use apigen::runtime::{ApiError, StatusCode};
use serde::Serialize;
use std::collections::HashMap;

pub struct MyApi {}

#[derive(Debug, Serialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub full_name: String,
    pub status: String,
}

#[derive(Debug, Default)]
pub struct ProfileParams {
    /// apivalidator:required
    pub login: String,
}

#[derive(Debug, Default)]
pub struct CreateParams {
    /// apivalidator:required,min=3,max=10
    pub login: String,
    /// apivalidator:"enum=user|moderator|admin,default=user"
    pub status: String,
    /// apivalidator:paramname=FullName
    pub full_name: String,
    pub age: u32,
}

#[derive(Debug, Default)]
pub struct InviteParams {
    /// apivalidator:"enum=user|moderator|admin,default=guest"
    pub status: String,
}

#[derive(Debug, Default)]
pub struct StatsParams {
    /// apivalidator:max=8
    pub day: String,
}

impl MyApi {
    /// apigen:api {"url": "/user/profile", "auth": false, "method": "GET"}
    pub fn profile(&self, params: ProfileParams) -> Result<User, ApiError> {
        if params.login == "bad_user" {
            return Err(ApiError::new(StatusCode::NOT_FOUND, "user not exist"));
        }
        Ok(User {
            id: 42,
            login: params.login,
            full_name: "Rob Pike".to_string(),
            status: "user".to_string(),
        })
    }

    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub fn create(&self, params: &CreateParams) -> Result<u64, anyhow::Error> {
        if params.login == "taken" {
            anyhow::bail!("user taken exist");
        }
        Ok(42)
    }

    /// apigen:api {"url": "/user/invite", "auth": false, "method": "POST"}
    pub fn invite(&self, params: InviteParams) -> Result<String, ApiError> {
        Ok(params.status)
    }

    /// apigen:api {"url": "/user/stats", "auth": false, "method": "GET"}
    pub fn stats(&self, params: StatsParams) -> Result<HashMap<(u8, u8), u32>, ApiError> {
        let mut visits = HashMap::new();
        visits.insert((1, 2), params.day.len() as u32);
        Ok(visits)
    }
}

pub struct OtherApi {}

#[derive(Debug, Serialize)]
pub struct OtherUser {
    pub id: u64,
    pub login: String,
    pub class: String,
}

#[derive(Debug, Default)]
pub struct OtherCreateParams {
    /// apivalidator:required,min=3
    pub username: String,
    /// apivalidator:enum=warrior|sorcerer|rouge,default=warrior
    pub class: String,
    /// apivalidator:max=0,colour=red
    pub title: String,
}

impl OtherApi {
    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub fn create(&self, params: OtherCreateParams) -> Result<OtherUser, ApiError> {
        Ok(OtherUser {
            id: 12,
            login: params.username,
            class: params.class,
        })
    }
}
