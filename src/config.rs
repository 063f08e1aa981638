use serde::Deserialize;
use url::Url;

use crate::errors::InspectError;

/// Table inspected when neither the command line nor the environment names one.
pub const DEFAULT_TABLE: &str = "user_profiles";

/// Log filter used when `RUST_LOG` is unset: the library and the binary target.
pub const DEFAULT_LOG_FILTER: &str = "schema_inspector=info,inspect_schema=info";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub table_name: String,
    pub table_schema: Option<String>, // None matches the table in any schema
    pub require_exists: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, InspectError> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        // Never log the raw URL, it carries the password
        tracing::debug!("Database URL: {}", redact_database_url(&config.database_url));
        tracing::debug!("Target table: {}", config.table_name);
        if let Some(ref schema) = config.table_schema {
            tracing::debug!("Schema filter: {}", schema);
        }

        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InspectError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DB_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .or_else(|| lookup("POSTGRES_URL"))
            .ok_or_else(|| {
                InspectError::Config(
                    "DB_URL, DATABASE_URL or POSTGRES_URL environment variable required"
                        .to_string(),
                )
            })
            .and_then(validate_database_url)?;

        let table_name = match lookup("INSPECT_TABLE") {
            Some(table) => validate_table_name(table)?,
            None => DEFAULT_TABLE.to_string(),
        };

        let table_schema = lookup("INSPECT_SCHEMA")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let require_exists = lookup("INSPECT_REQUIRE_EXISTS")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            table_name,
            table_schema,
            require_exists,
        })
    }

    /// Applies command-line values on top of the environment.
    pub fn with_overrides(
        mut self,
        table_name: Option<String>,
        table_schema: Option<String>,
        require_exists: bool,
    ) -> Result<Self, InspectError> {
        if let Some(table) = table_name {
            self.table_name = validate_table_name(table)?;
        }
        if let Some(schema) = table_schema.filter(|s| !s.trim().is_empty()) {
            self.table_schema = Some(schema.trim().to_string());
        }
        self.require_exists |= require_exists;
        Ok(self)
    }
}

fn validate_database_url(url: String) -> Result<String, InspectError> {
    let url = url.trim().to_string();
    if url.is_empty() {
        return Err(InspectError::Config("DB_URL cannot be empty".to_string()));
    }
    if !url.starts_with("postgresql://") && !url.starts_with("postgres://") {
        return Err(InspectError::Config(
            "DB_URL must start with postgresql:// or postgres://".to_string(),
        ));
    }
    Ok(url)
}

fn validate_table_name(table: String) -> Result<String, InspectError> {
    let table = table.trim().to_string();
    if table.is_empty() {
        return Err(InspectError::Config("table name cannot be empty".to_string()));
    }
    Ok(table)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

/// Masks the password of a connection URL so it can be logged.
///
/// Unparseable input is replaced wholesale rather than echoed back.
pub fn redact_database_url(database_url: &str) -> String {
    match Url::parse(database_url) {
        Ok(mut url) => {
            if url.password().is_some() && url.set_password(Some("****")).is_err() {
                return "<redacted>".to_string();
            }
            url.to_string()
        }
        Err(_) => "<redacted>".to_string(),
    }
}
