//! Catálogo de coeficientes de absorção por material
//!
//! Consulta somente leitura por nome exato (sensível a maiúsculas). Um
//! material ausente não é erro: quem consulta usa coeficiente zero.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{AcousticError, AcousticResult};
use crate::types::{AbsorptionCoefficients, Band, PerBand};

/// Fonte de coeficientes de absorção
pub trait CoefficientSource {
    /// Linha do material, se existir
    fn lookup(&self, material: &str) -> Option<&AbsorptionCoefficients>;

    /// Coeficiente na banda, ou zero se o material não for conhecido
    fn coefficient_or_zero(&self, material: &str, band: Band) -> f64 {
        self.lookup(material).map_or(0.0, |row| row.at(band))
    }

    /// Verdadeiro se o material tem linha no catálogo
    fn contains(&self, material: &str) -> bool {
        self.lookup(material).is_some()
    }
}

/// Tabela embutida: (material, a125, a250, a500, a1000, a2000, a4000)
const BUILTIN_ROWS: &[(&str, [f64; Band::COUNT])] = &[
    ("Acoustic Ceiling Tile", [0.50, 0.70, 0.60, 0.70, 0.70, 0.50]),
    ("Brick", [0.03, 0.03, 0.03, 0.04, 0.05, 0.07]),
    ("Carpet", [0.08, 0.24, 0.30, 0.60, 0.65, 0.70]),
    ("Concrete", [0.01, 0.01, 0.02, 0.02, 0.02, 0.02]),
    ("Glass", [0.35, 0.25, 0.18, 0.12, 0.07, 0.04]),
    ("Gypsum", [0.05, 0.04, 0.06, 0.08, 0.06, 0.05]),
    ("Plaster", [0.01, 0.02, 0.02, 0.03, 0.04, 0.05]),
    ("Wood Flooring", [0.15, 0.11, 0.10, 0.07, 0.06, 0.07]),
    ("Wood Panel", [0.28, 0.22, 0.17, 0.09, 0.10, 0.11]),
];

/// Catálogo em memória, indexado pelo nome do material
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rows: BTreeMap<String, AbsorptionCoefficients>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "material", default)]
    materials: Vec<CatalogRow>,
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    name: String,
    coefficients: Vec<f64>,
}

impl Catalog {
    /// Cria catálogo a partir de linhas já validadas
    ///
    /// Nomes repetidos são rejeitados.
    pub fn new(rows: impl IntoIterator<Item = AbsorptionCoefficients>) -> AcousticResult<Self> {
        let mut map = BTreeMap::new();

        for row in rows {
            if map.contains_key(&row.material) {
                return Err(AcousticError::InvalidCoefficients(format!(
                    "Duplicate material '{}'",
                    row.material
                )));
            }
            map.insert(row.material.clone(), row);
        }

        Ok(Self { rows: map })
    }

    /// Catálogo embutido com acabamentos comuns
    pub fn builtin() -> Self {
        let rows = BUILTIN_ROWS
            .iter()
            .map(|(name, per_band)| {
                let row = AbsorptionCoefficients {
                    material: (*name).to_string(),
                    per_band: PerBand(*per_band),
                };
                ((*name).to_string(), row)
            })
            .collect();

        Self { rows }
    }

    /// Lê o catálogo de uma string TOML
    ///
    /// ```toml
    /// [[material]]
    /// name = "Gypsum"
    /// coefficients = [0.05, 0.04, 0.06, 0.08, 0.06, 0.05]
    /// ```
    pub fn from_toml_str(content: &str) -> AcousticResult<Self> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| AcousticError::CatalogUnavailable(format!("Failed to parse catalog: {}", e)))?;

        let mut rows = Vec::with_capacity(file.materials.len());
        for row in file.materials {
            let per_band: [f64; Band::COUNT] = row.coefficients.as_slice().try_into().map_err(|_| {
                AcousticError::CatalogUnavailable(format!(
                    "Material '{}' has {} coefficients, expected {}",
                    row.name,
                    row.coefficients.len(),
                    Band::COUNT
                ))
            })?;

            let coefficients = AbsorptionCoefficients::new(row.name, per_band)
                .map_err(|e| AcousticError::CatalogUnavailable(e.to_string()))?;
            rows.push(coefficients);
        }

        let catalog = Self::new(rows).map_err(|e| AcousticError::CatalogUnavailable(e.to_string()))?;
        debug!(materials = catalog.len(), "absorption catalog loaded");
        Ok(catalog)
    }

    /// Lê o catálogo de um arquivo TOML
    pub fn from_file(path: &Path) -> AcousticResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AcousticError::CatalogUnavailable(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Número de materiais
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Linhas em ordem alfabética de material
    pub fn rows(&self) -> impl Iterator<Item = &AbsorptionCoefficients> {
        self.rows.values()
    }
}

impl CoefficientSource for Catalog {
    fn lookup(&self, material: &str) -> Option<&AbsorptionCoefficients> {
        self.rows.get(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rows_are_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), BUILTIN_ROWS.len());

        for row in catalog.rows() {
            let checked = AbsorptionCoefficients::new(row.material.clone(), row.per_band.0);
            assert!(checked.is_ok(), "{} is out of range", row.material);
        }
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let catalog = Catalog::builtin();
        assert!(catalog.lookup("Gypsum").is_some());
        assert!(catalog.lookup("gypsum").is_none());
        assert!(catalog.lookup("Gypsum ").is_none());
    }

    #[test]
    fn test_coefficient_or_zero() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.coefficient_or_zero("Carpet", Band::Hz500), 0.30);
        assert_eq!(catalog.coefficient_or_zero("Unobtainium", Band::Hz500), 0.0);
        assert!(!catalog.contains("Unobtainium"));
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
            [[material]]
            name = "Gypsum"
            coefficients = [0.05, 0.04, 0.06, 0.08, 0.06, 0.05]

            [[material]]
            name = "Curtain"
            coefficients = [0.07, 0.31, 0.49, 0.75, 0.70, 0.60]
        "#;

        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.coefficient_or_zero("Curtain", Band::Hz1000), 0.75);
    }

    #[test]
    fn test_from_toml_wrong_width() {
        let toml = r#"
            [[material]]
            name = "Short"
            coefficients = [0.1, 0.2, 0.3]
        "#;

        let result = Catalog::from_toml_str(toml);
        assert!(matches!(result, Err(AcousticError::CatalogUnavailable(_))));
    }

    #[test]
    fn test_from_toml_duplicate() {
        let toml = r#"
            [[material]]
            name = "Glass"
            coefficients = [0.1, 0.1, 0.1, 0.1, 0.1, 0.1]

            [[material]]
            name = "Glass"
            coefficients = [0.2, 0.2, 0.2, 0.2, 0.2, 0.2]
        "#;

        let err = Catalog::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("Duplicate material"));
    }

    #[test]
    fn test_from_toml_malformed() {
        let result = Catalog::from_toml_str("[[material]\nname = ");
        assert!(matches!(result, Err(AcousticError::CatalogUnavailable(_))));
    }

    #[test]
    fn test_from_missing_file() {
        let result = Catalog::from_file(Path::new("/nonexistent/absorption_coeff.toml"));
        assert!(matches!(result, Err(AcousticError::CatalogUnavailable(_))));
    }
}
