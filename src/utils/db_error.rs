//! Classification of database errors raised by sqlx.

/// Constraint-level categories of a database error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbErrorKind {
    /// A row is still referenced, or references a missing row.
    ForeignKeyViolation { constraint: Option<String> },
    UniqueViolation { constraint: Option<String> },
    CheckViolation { constraint: Option<String> },
    Other,
}

pub fn classify(e: &sqlx::Error) -> DbErrorKind {
    let Some(db_err) = e.as_database_error() else {
        return DbErrorKind::Other;
    };

    let constraint = db_err.constraint().map(str::to_owned);

    if db_err.is_foreign_key_violation() {
        return DbErrorKind::ForeignKeyViolation { constraint };
    }

    if db_err.is_unique_violation() {
        return DbErrorKind::UniqueViolation { constraint };
    }

    if db_err.is_check_violation() {
        return DbErrorKind::CheckViolation { constraint };
    }

    DbErrorKind::Other
}
