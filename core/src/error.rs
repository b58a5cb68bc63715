use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid audit interval: {hours} hours")]
    InvalidInterval { hours: i64 },

    #[error("Audit schedule overflowed after {issued} timestamps")]
    ScheduleOverflow { issued: u64 },

    #[error("Chart rendering failed for '{chart}': {message}")]
    Chart { chart: String, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type AuditResult<T> = Result<T, AuditError>;
