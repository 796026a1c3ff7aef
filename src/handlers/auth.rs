// src/handlers/auth.rs
// DOCUMENTATION: Request authentication extractor
// PURPOSE: Check the API key and resolve the caller identity set by the gateway

use crate::config::Config;
use crate::errors::PhotosError;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

pub const API_KEY_HEADER: &str = "X-API-Key";
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Identity of the caller, extracted from request headers
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: i32,
}

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|h| h.to_str().ok())
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, PhotosError> {
    let config = req.app_data::<web::Data<Config>>().ok_or_else(|| {
        log::error!("Config missing from application data");
        PhotosError::InternalError
    })?;

    let api_key = header(req, API_KEY_HEADER).ok_or_else(|| {
        log::warn!("Request to {} without API key", req.path());
        PhotosError::Unauthorized
    })?;

    if api_key != config.api_key {
        log::warn!("Request to {} with invalid API key", req.path());
        return Err(PhotosError::Forbidden);
    }

    let user_id = header(req, USER_ID_HEADER)
        .and_then(|v| v.trim().parse::<i32>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            log::warn!("Request to {} without a valid user id", req.path());
            PhotosError::Unauthorized
        })?;

    Ok(AuthenticatedUser { user_id })
}

impl FromRequest for AuthenticatedUser {
    type Error = PhotosError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
