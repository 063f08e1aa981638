use std::fmt;

/// Errors raised while inspecting a table.
#[derive(Debug)]
pub enum InspectError {
    /// Missing or invalid configuration.
    Config(String),
    /// The database could not be reached or rejected the credentials.
    Connection(sqlx::Error),
    /// The catalog query could not be executed.
    Query(sqlx::Error),
    /// The table is absent (only reported when the existence check is enabled).
    TableNotFound(String),
    /// Error with context chain for better debugging.
    WithContext {
        /// The underlying source of the error.
        source: Box<InspectError>,
        /// Additional context message.
        context: String,
    },
}

impl InspectError {
    /// Returns the innermost error, skipping any context wrappers.
    pub fn root(&self) -> &InspectError {
        match self {
            InspectError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self.root(), InspectError::Connection(_))
    }

    pub fn is_query(&self) -> bool {
        matches!(self.root(), InspectError::Query(_))
    }
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectError::Config(msg) => write!(f, "Configuration error: {}", msg),
            InspectError::Connection(e) => write!(f, "Connection error: {}", e),
            InspectError::Query(e) => write!(f, "Query error: {}", e),
            InspectError::TableNotFound(table) => write!(f, "Table not found: {}", table),
            InspectError::WithContext { source, context } => {
                write!(f, "{}: {}", context, source)
            }
        }
    }
}

impl std::error::Error for InspectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InspectError::Connection(e) | InspectError::Query(e) => Some(e),
            InspectError::WithContext { source, .. } => Some(source.as_ref()),
            InspectError::Config(_) | InspectError::TableNotFound(_) => None,
        }
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `InspectError` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T, InspectError>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F>(self, f: F) -> Result<T, InspectError>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T, InspectError> {
    fn context(self, context: impl Into<String>) -> Result<T, InspectError> {
        self.map_err(|e| InspectError::WithContext {
            source: Box::new(e),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, InspectError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| InspectError::WithContext {
            source: Box::new(e),
            context: f(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_driver_text() {
        let err = InspectError::Query(sqlx::Error::Protocol("permission denied".to_string()));
        let rendered = err.to_string();
        assert!(rendered.starts_with("Query error:"));
        assert!(rendered.contains("permission denied"));
    }

    #[test]
    fn test_context_preserves_root_kind() {
        let err: Result<(), InspectError> = Err(InspectError::Connection(sqlx::Error::PoolClosed));
        let err = err.context("opening connection").unwrap_err();

        assert!(err.is_connection());
        assert!(!err.is_query());
        assert!(err.to_string().starts_with("opening connection: Connection error:"));
    }

    #[test]
    fn test_with_context_is_lazy_on_success() {
        let ok: Result<u8, InspectError> = Ok(7);
        let value = ok
            .with_context(|| panic!("context must not be evaluated"))
            .unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = InspectError::WithContext {
            source: Box::new(InspectError::TableNotFound("ghosts".to_string())),
            context: "inspecting".to_string(),
        };
        let source = err.source().expect("context has a source");
        assert_eq!(source.to_string(), "Table not found: ghosts");
        assert!(source.source().is_none());
    }
}
