use crate::domain::errors::DomainError;

// SQLite extended result codes.
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";
const SQLITE_CONSTRAINT_CHECK: &str = "275";

/// Every storage failure is a persistence failure to the core; constraint
/// violations only get a more descriptive message.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                let reason = match code.as_ref() {
                    SQLITE_CONSTRAINT_FOREIGNKEY => Some("referenced record does not exist"),
                    SQLITE_CONSTRAINT_NOTNULL => Some("required column was null"),
                    SQLITE_CONSTRAINT_UNIQUE => Some("unique constraint violated"),
                    SQLITE_CONSTRAINT_CHECK => Some("check constraint violated"),
                    _ => None,
                };
                if let Some(reason) = reason {
                    return DomainError::Persistence(format!(
                        "database constraint violation: {reason}"
                    ));
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// A stored row that no longer satisfies the model's own rules.
pub fn corrupt_row(entity: &str, id: i64, err: DomainError) -> DomainError {
    DomainError::Persistence(format!("stored {entity} {id} is invalid: {err}"))
}
