#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error connecting to the database: {0}")]
    ConnectionSetup(sea_orm::DbErr),

    #[error("Error pinging the database: {0}")]
    Probe(sea_orm::DbErr),

    #[error("Listener error: {0}")]
    Listener(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::AppError;
    use sea_orm::DbErr;

    #[test]
    fn error_display_includes_driver_message() {
        let err = AppError::ConnectionSetup(DbErr::Custom("bad descriptor".to_string()));
        assert_eq!(
            err.to_string(),
            "Error connecting to the database: Custom Error: bad descriptor"
        );

        let err = AppError::Probe(DbErr::Custom("connection reset".to_string()));
        assert!(err.to_string().starts_with("Error pinging the database:"));
    }
}
