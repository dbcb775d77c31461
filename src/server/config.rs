use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Lowest and highest work factors bcrypt accepts.
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(value) => parse_bcrypt_cost(&value)?,
            Err(_) => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            bcrypt_cost,
        })
    }
}

/// Parses a bcrypt work factor, rejecting values bcrypt itself would refuse.
fn parse_bcrypt_cost(value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "BCRYPT_COST".to_string(),
        value: value.to_string(),
        reason,
    };

    let cost = value.trim().parse::<u32>().map_err(|e| invalid(e.to_string()))?;

    if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        return Err(invalid(format!(
            "must be between {} and {}",
            MIN_BCRYPT_COST, MAX_BCRYPT_COST
        )));
    }

    Ok(cost)
}
