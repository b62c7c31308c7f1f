//! Erros específicos da análise acústica

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Band;

pub type AcousticResult<T> = Result<T, AcousticError>;

/// Erros da análise acústica
///
/// Material ausente do catálogo não é erro: o coeficiente vale zero.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum AcousticError {
    #[error("Total absorption is zero at {band}, Sabine RT is undefined")]
    DivisionUndefined { band: Band },

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Absorption catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid coefficients: {0}")]
    InvalidCoefficients(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AcousticError::DivisionUndefined { band: Band::Hz500 };
        assert_eq!(
            err.to_string(),
            "Total absorption is zero at 500 Hz, Sabine RT is undefined"
        );

        let err = AcousticError::CatalogUnavailable("missing file".into());
        assert!(err.to_string().contains("catalog unavailable"));
    }

    #[test]
    fn test_all_error_variants() {
        let errors = vec![
            AcousticError::DivisionUndefined { band: Band::Hz4000 },
            AcousticError::Domain("test".into()),
            AcousticError::CatalogUnavailable("test".into()),
            AcousticError::InvalidGeometry("test".into()),
            AcousticError::InvalidCoefficients("test".into()),
            AcousticError::Parse("test".into()),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
