// Code generated by apigen from api.rs. DO NOT EDIT.

use super::*;
use apigen::runtime::{ApiError, Envelope, Request, ResponseWriter, StatusCode};

pub fn validate_profile_params(r: &Request) -> Result<ProfileParams, ApiError> {
    let login = r.query("login").to_string();
    if login.is_empty() {
        return Err(ApiError::bad_request("login must not be empty"));
    }
    Ok(ProfileParams { login })
}

pub fn validate_create_params(r: &Request) -> Result<CreateParams, ApiError> {
    let login = r.query("login").to_string();
    if login.is_empty() {
        return Err(ApiError::bad_request("login must not be empty"));
    }
    if !login.is_empty() && login.chars().count() > 10 {
        return Err(ApiError::bad_request("login must be <=10"));
    }
    if !login.is_empty() && login.chars().count() < 3 {
        return Err(ApiError::bad_request("login must be >=3"));
    }
    let mut status = r.query("status").to_string();
    if status.is_empty() {
        status = String::from("user");
    }
    if !["user", "moderator", "admin"].contains(&status.as_str()) {
        return Err(ApiError::bad_request(
            "status must be one of [user, moderator, admin]",
        ));
    }
    let full_name = r.query("FullName").to_string();
    Ok(CreateParams {
        login,
        status,
        full_name,
        ..Default::default()
    })
}

pub fn validate_invite_params(r: &Request) -> Result<InviteParams, ApiError> {
    let mut status = r.query("status").to_string();
    if status.is_empty() {
        status = String::from("guest");
    }
    if !["user", "moderator", "admin"].contains(&status.as_str()) {
        return Err(ApiError::bad_request(
            "status must be one of [user, moderator, admin]",
        ));
    }
    Ok(InviteParams { status })
}

pub fn validate_stats_params(r: &Request) -> Result<StatsParams, ApiError> {
    let day = r.query("day").to_string();
    if !day.is_empty() && day.chars().count() > 8 {
        return Err(ApiError::bad_request("day must be <=8"));
    }
    Ok(StatsParams { day })
}

pub fn validate_other_create_params(r: &Request) -> Result<OtherCreateParams, ApiError> {
    let username = r.query("username").to_string();
    if username.is_empty() {
        return Err(ApiError::bad_request("username must not be empty"));
    }
    if !username.is_empty() && username.chars().count() < 3 {
        return Err(ApiError::bad_request("username must be >=3"));
    }
    let mut class = r.query("class").to_string();
    if class.is_empty() {
        class = String::from("warrior");
    }
    if !["warrior", "sorcerer", "rouge"].contains(&class.as_str()) {
        return Err(ApiError::bad_request(
            "class must be one of [warrior, sorcerer, rouge]",
        ));
    }
    let title = r.query("title").to_string();
    Ok(OtherCreateParams {
        username,
        class,
        title,
    })
}

impl MyApi {
    pub fn user_profile(&self, w: &mut ResponseWriter, r: &Request) {
        let params = match validate_profile_params(r) {
            Ok(params) => params,
            Err(err) => {
                w.write_error(err.status, &err.message);
                return;
            }
        };
        let response = match self.profile(params) {
            Ok(response) => response,
            Err(err) => {
                let err = ApiError::from_business(err);
                w.write_error(err.status, &err.message);
                return;
            }
        };
        if let Err(err) = w.write_json(StatusCode::OK, &Envelope::ok(response)) {
            w.write_error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
        }
    }

    pub fn user_create(&self, w: &mut ResponseWriter, r: &Request) {
        if r.header("X-Auth") != Some("100500") {
            w.write_error(StatusCode::UNAUTHORIZED, "unauthorized");
            return;
        }
        let params = match validate_create_params(r) {
            Ok(params) => params,
            Err(err) => {
                w.write_error(err.status, &err.message);
                return;
            }
        };
        let response = match self.create(&params) {
            Ok(response) => response,
            Err(err) => {
                let err = ApiError::from_business(err);
                w.write_error(err.status, &err.message);
                return;
            }
        };
        if let Err(err) = w.write_json(StatusCode::OK, &Envelope::ok(response)) {
            w.write_error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
        }
    }

    pub fn user_invite(&self, w: &mut ResponseWriter, r: &Request) {
        let params = match validate_invite_params(r) {
            Ok(params) => params,
            Err(err) => {
                w.write_error(err.status, &err.message);
                return;
            }
        };
        let response = match self.invite(params) {
            Ok(response) => response,
            Err(err) => {
                let err = ApiError::from_business(err);
                w.write_error(err.status, &err.message);
                return;
            }
        };
        if let Err(err) = w.write_json(StatusCode::OK, &Envelope::ok(response)) {
            w.write_error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
        }
    }

    pub fn user_stats(&self, w: &mut ResponseWriter, r: &Request) {
        let params = match validate_stats_params(r) {
            Ok(params) => params,
            Err(err) => {
                w.write_error(err.status, &err.message);
                return;
            }
        };
        let response = match self.stats(params) {
            Ok(response) => response,
            Err(err) => {
                let err = ApiError::from_business(err);
                w.write_error(err.status, &err.message);
                return;
            }
        };
        if let Err(err) = w.write_json(StatusCode::OK, &Envelope::ok(response)) {
            w.write_error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
        }
    }

    pub fn serve_http(&self, w: &mut ResponseWriter, r: &Request) {
        match r.path() {
            "/user/profile" => self.user_profile(w, r),
            "/user/create" => self.user_create(w, r),
            "/user/invite" => self.user_invite(w, r),
            "/user/stats" => self.user_stats(w, r),
            _ => w.write_error(StatusCode::NOT_FOUND, "unknown method"),
        }
    }
}

impl OtherApi {
    pub fn user_create(&self, w: &mut ResponseWriter, r: &Request) {
        if r.header("X-Auth") != Some("100500") {
            w.write_error(StatusCode::UNAUTHORIZED, "unauthorized");
            return;
        }
        let params = match validate_other_create_params(r) {
            Ok(params) => params,
            Err(err) => {
                w.write_error(err.status, &err.message);
                return;
            }
        };
        let response = match self.create(params) {
            Ok(response) => response,
            Err(err) => {
                let err = ApiError::from_business(err);
                w.write_error(err.status, &err.message);
                return;
            }
        };
        if let Err(err) = w.write_json(StatusCode::OK, &Envelope::ok(response)) {
            w.write_error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
        }
    }

    pub fn serve_http(&self, w: &mut ResponseWriter, r: &Request) {
        match r.path() {
            "/user/create" => self.user_create(w, r),
            _ => w.write_error(StatusCode::NOT_FOUND, "unknown method"),
        }
    }
}
