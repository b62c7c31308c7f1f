//! Agregação de área exposta por material

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::SurfaceContribution;

/// Área total por material (m²), uma entrada por nome
///
/// A iteração é em ordem alfabética, o que torna as somas a jusante
/// reprodutíveis bit a bit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialAreas {
    areas: BTreeMap<String, f64>,
}

impl MaterialAreas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Soma `area` ao total do material
    pub fn add(&mut self, material: &str, area: f64) {
        match self.areas.get_mut(material) {
            Some(total) => *total += area,
            None => {
                self.areas.insert(material.to_string(), area);
            }
        }
    }

    /// Área total de um material
    pub fn get(&self, material: &str) -> Option<f64> {
        self.areas.get(material).copied()
    }

    /// Pares (material, área) em ordem alfabética
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.areas.iter().map(|(name, area)| (name.as_str(), *area))
    }

    /// Soma das áreas de todos os materiais
    pub fn total_area(&self) -> f64 {
        self.areas.values().sum()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl<'a> Extend<&'a SurfaceContribution> for MaterialAreas {
    fn extend<I: IntoIterator<Item = &'a SurfaceContribution>>(&mut self, iter: I) {
        for surface in iter {
            self.add(&surface.material, surface.area);
        }
    }
}

impl<'a> FromIterator<&'a SurfaceContribution> for MaterialAreas {
    fn from_iter<I: IntoIterator<Item = &'a SurfaceContribution>>(iter: I) -> Self {
        let mut areas = Self::new();
        areas.extend(iter);
        areas
    }
}

/// Acumula a área de cada contribuição no total do seu material
///
/// A área das paredes já deve vir descontada da espessura do acabamento.
pub fn aggregate<'a>(surfaces: impl IntoIterator<Item = &'a SurfaceContribution>) -> MaterialAreas {
    surfaces.into_iter().collect()
}
