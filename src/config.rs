use std::env;

use crate::error::AppError;

#[derive(Debug)]
pub enum AuthMethod {
    Open,
    Secret,
}

impl AuthMethod {
    fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "OPEN" => Ok(AuthMethod::Open),
            "SECRET" => Ok(AuthMethod::Secret),
            other => Err(AppError::InvalidAuthMethod(other.to_string())),
        }
    }
}

pub struct Config {
    pub auth_method: AuthMethod,
    pub secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let auth_method =
            AuthMethod::parse(&env::var("AUTH_METHOD").unwrap_or_else(|_| "OPEN".to_string()))?;

        match auth_method {
            AuthMethod::Open => Ok(Config {
                auth_method,
                secret: None,
            }),
            AuthMethod::Secret => Ok(Config {
                auth_method,
                secret: Some(env::var("SECRET")?),
            }),
        }
    }
}
