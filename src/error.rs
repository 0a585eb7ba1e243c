//! Error types shared by the dataset accessor and the HTTP layer.

use thiserror::Error;

/// Errors produced while querying the climate dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// An input date string does not match `YYYY-MM-DD`.
    #[error("malformed date '{0}': expected YYYY-MM-DD")]
    MalformedDate(String),

    /// A max-date lookup ran against zero measurement rows.
    #[error("dataset contains no measurement rows")]
    EmptyDataset,

    /// The underlying connection or query failed.
    #[error("dataset unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

impl DatasetError {
    /// HTTP status code this error surfaces as.
    ///
    /// Malformed input is the caller's fault (400); an empty dataset has
    /// nothing to serve (404); everything else is a server-side fault (500).
    pub fn status(&self) -> u16 {
        match self {
            Self::MalformedDate(_) => 400,
            Self::EmptyDataset => 404,
            Self::Unavailable(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(DatasetError::MalformedDate("x".into()).status(), 400);
        assert_eq!(DatasetError::EmptyDataset.status(), 404);
        assert_eq!(
            DatasetError::Unavailable(sqlx::Error::PoolClosed).status(),
            500
        );
    }

    #[test]
    fn test_malformed_date_message_names_input() {
        let err = DatasetError::MalformedDate("2017-13-99".into());
        assert!(err.to_string().contains("2017-13-99"));
    }
}
