use std::env;

use anyhow::Context;
use anyhow::Result;

/// Basic auth pair for the review API, read once at startup and handed to
/// the client at construction.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    pub user: String,
    pub password: String,
}

impl ApiCredentials {
    /// Reads `API_USER` and `API_PW` from the environment, loading a local
    /// `.env` file first if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let user = env::var("API_USER").context("API_USER is not set")?;
        let password = env::var("API_PW").context("API_PW is not set")?;

        Ok(Self { user, password })
    }
}
