use serde::{Deserialize, Serialize};
use std::fmt;

use super::credentials::Credentials;

/// Body of `POST /auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for RegisterRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: &credentials.username,
            email: &credentials.email,
            password: &credentials.password,
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: &credentials.username,
            password: &credentials.password,
        }
    }
}

/// Response of both auth endpoints.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Which auth call produced the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    Registered,
    LoggedIn,
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMethod::Registered => write!(f, "registered"),
            AuthMethod::LoggedIn => write!(f, "logged in"),
        }
    }
}
