//! Normalização dos elementos selecionados da sala
//!
//! Cada elemento (parede, piso, forro) vira uma [`SurfaceContribution`]
//! uniforme, e o conjunto define a [`RoomGeometry`]. Os cálculos acústicos
//! nunca olham para o tipo do elemento.
//!
//! - Parede: área `(comprimento - espessura do acabamento) × altura`; a
//!   altura da sala vem das paredes (a última prevalece).
//! - Piso: área da laje, comprimento e largura da planta; volume = laje × altura.
//! - Forro: apenas área.
//!
//! Conversão de unidades acontece somente aqui.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AcousticError, AcousticResult};
use crate::types::{RoomGeometry, SurfaceContribution};

/// Material atribuído a elementos sem material
pub const UNKNOWN_MATERIAL: &str = "N/A";

/// Pés para metros
pub const FEET_TO_METERS: f64 = 0.3048;

/// Pés quadrados para metros quadrados
pub const SQUARE_FEET_TO_SQUARE_METERS: f64 = 0.09290304;

/// Unidade das medidas de entrada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Meters,
    Feet,
}

impl LengthUnit {
    /// Fator de conversão de comprimento para metros
    pub fn length_factor(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Feet => FEET_TO_METERS,
        }
    }

    /// Fator de conversão de área para m²
    pub fn area_factor(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Feet => SQUARE_FEET_TO_SQUARE_METERS,
        }
    }
}

/// Elemento da envoltória da sala
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RoomElement {
    Wall {
        #[serde(default)]
        material: Option<String>,
        length: f64,
        height: f64,
        /// Espessura da camada de acabamento, descontada do comprimento
        #[serde(default)]
        layer_thickness: f64,
    },
    Floor {
        #[serde(default)]
        material: Option<String>,
        area: f64,
        /// Extensão da planta no eixo X
        length: f64,
        /// Extensão da planta no eixo Y
        width: f64,
    },
    Ceiling {
        #[serde(default)]
        material: Option<String>,
        area: f64,
    },
}

impl RoomElement {
    fn material(&self) -> &str {
        let material = match self {
            RoomElement::Wall { material, .. }
            | RoomElement::Floor { material, .. }
            | RoomElement::Ceiling { material, .. } => material,
        };
        material.as_deref().unwrap_or(UNKNOWN_MATERIAL)
    }
}

/// Descrição de uma sala: unidade e elementos selecionados
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomDescription {
    #[serde(default)]
    pub units: LengthUnit,
    #[serde(rename = "element", default)]
    pub elements: Vec<RoomElement>,
}

impl RoomDescription {
    pub fn new(units: LengthUnit, elements: Vec<RoomElement>) -> Self {
        Self { units, elements }
    }

    /// Lê a descrição de uma string TOML
    pub fn from_toml_str(content: &str) -> AcousticResult<Self> {
        toml::from_str(content)
            .map_err(|e| AcousticError::Parse(format!("Failed to parse room description: {}", e)))
    }
}

/// Superfícies e geometria prontas para a análise, em unidades métricas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestedRoom {
    pub surfaces: Vec<SurfaceContribution>,
    pub geometry: RoomGeometry,
}

fn measure(element: &str, name: &str, value: f64, factor: f64) -> AcousticResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AcousticError::InvalidGeometry(format!(
            "{} {} must be positive, got {}",
            element, name, value
        )));
    }
    Ok(value * factor)
}

/// Converte os elementos em superfícies e geometria
pub fn ingest(description: &RoomDescription) -> AcousticResult<IngestedRoom> {
    let length_factor = description.units.length_factor();
    let area_factor = description.units.area_factor();

    let mut surfaces = Vec::with_capacity(description.elements.len());
    let mut room_height: Option<f64> = None;
    let mut footprint: Option<(f64, f64, f64)> = None;

    for element in &description.elements {
        let area = match *element {
            RoomElement::Wall {
                length,
                height,
                layer_thickness,
                ..
            } => {
                let length = measure("Wall", "length", length, length_factor)?;
                let height = measure("Wall", "height", height, length_factor)?;

                if !layer_thickness.is_finite() || layer_thickness < 0.0 {
                    return Err(AcousticError::InvalidGeometry(format!(
                        "Wall layer thickness must be non-negative, got {}",
                        layer_thickness
                    )));
                }
                let thickness = layer_thickness * length_factor;
                if thickness >= length {
                    return Err(AcousticError::InvalidGeometry(format!(
                        "Wall layer thickness {:.3} m is not below its length {:.3} m",
                        thickness, length
                    )));
                }

                if let Some(previous) = room_height.filter(|h| *h != height) {
                    debug!(previous, height, "walls disagree on height, keeping the last one");
                }
                room_height = Some(height);

                (length - thickness) * height
            }
            RoomElement::Floor { area, length, width, .. } => {
                let area = measure("Floor", "area", area, area_factor)?;
                let length = measure("Floor", "length", length, length_factor)?;
                let width = measure("Floor", "width", width, length_factor)?;

                if footprint.is_some() {
                    debug!("more than one floor selected, keeping the last one");
                }
                footprint = Some((area, length, width));
                area
            }
            RoomElement::Ceiling { area, .. } => measure("Ceiling", "area", area, area_factor)?,
        };

        surfaces.push(SurfaceContribution::new(element.material(), area));
    }

    let height = room_height
        .ok_or_else(|| AcousticError::InvalidGeometry("No wall selected, room height unknown".into()))?;
    let (slab_area, length, width) = footprint
        .ok_or_else(|| AcousticError::InvalidGeometry("No floor selected, room footprint unknown".into()))?;

    let geometry = RoomGeometry::new(length, width, height, slab_area * height);
    geometry.validate()?;

    debug!(
        surfaces = surfaces.len(),
        height,
        slab_area,
        volume = geometry.volume,
        "room elements ingested"
    );

    Ok(IngestedRoom { surfaces, geometry })
}
