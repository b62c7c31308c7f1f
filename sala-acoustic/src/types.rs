//! Tipos de dados acústicos da sala

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::AcousticError;

/// Banda de oitava usada em toda a análise (125 Hz a 4 kHz)
///
/// A ordem das variantes é a ordem crescente de frequência; toda sequência
/// por banda segue essa ordem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Band {
    Hz125,
    Hz250,
    Hz500,
    Hz1000,
    Hz2000,
    Hz4000,
}

impl Band {
    /// Número de bandas
    pub const COUNT: usize = 6;

    /// Todas as bandas em ordem crescente
    pub const ALL: [Band; Band::COUNT] = [
        Band::Hz125,
        Band::Hz250,
        Band::Hz500,
        Band::Hz1000,
        Band::Hz2000,
        Band::Hz4000,
    ];

    /// Frequência central em Hz
    pub fn hz(self) -> u32 {
        match self {
            Band::Hz125 => 125,
            Band::Hz250 => 250,
            Band::Hz500 => 500,
            Band::Hz1000 => 1000,
            Band::Hz2000 => 2000,
            Band::Hz4000 => 4000,
        }
    }

    /// Posição da banda nas sequências por banda
    pub fn index(self) -> usize {
        self as usize
    }

    /// Banda a partir da frequência central
    pub fn from_hz(hz: u32) -> Option<Self> {
        Band::ALL.into_iter().find(|band| band.hz() == hz)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.hz())
    }
}

impl From<Band> for u32 {
    fn from(band: Band) -> Self {
        band.hz()
    }
}

impl TryFrom<u32> for Band {
    type Error = AcousticError;

    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        Band::from_hz(hz)
            .ok_or_else(|| AcousticError::Parse(format!("{} Hz is not an octave band", hz)))
    }
}

/// Um valor por banda, alinhado à ordem de [`Band::ALL`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerBand<T>(pub [T; Band::COUNT]);

impl<T> PerBand<T> {
    /// Constrói avaliando `f` uma vez por banda, em ordem crescente
    pub fn from_fn(mut f: impl FnMut(Band) -> T) -> Self {
        Self(Band::ALL.map(&mut f))
    }

    /// Pares (banda, valor) em ordem crescente
    pub fn iter(&self) -> impl Iterator<Item = (Band, &T)> {
        Band::ALL.into_iter().zip(self.0.iter())
    }

    pub fn into_array(self) -> [T; Band::COUNT] {
        self.0
    }
}

impl<T: Copy> PerBand<T> {
    /// Aplica `f` a cada valor preservando a ordem das bandas
    pub fn map<U>(self, mut f: impl FnMut(Band, T) -> U) -> PerBand<U> {
        PerBand::from_fn(|band| f(band, self[band]))
    }
}

impl<T> Index<Band> for PerBand<T> {
    type Output = T;

    fn index(&self, band: Band) -> &T {
        &self.0[band.index()]
    }
}

impl<T> IndexMut<Band> for PerBand<T> {
    fn index_mut(&mut self, band: Band) -> &mut T {
        &mut self.0[band.index()]
    }
}

/// Contribuição de uma superfície física (parede, piso, forro)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceContribution {
    /// Nome do material de acabamento
    pub material: String,
    /// Área exposta em m²
    pub area: f64,
}

impl SurfaceContribution {
    pub fn new(material: impl Into<String>, area: f64) -> Self {
        Self {
            material: material.into(),
            area,
        }
    }
}

/// Coeficientes de absorção de um material, um por banda, em [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsorptionCoefficients {
    pub material: String,
    pub per_band: PerBand<f64>,
}

impl AbsorptionCoefficients {
    /// Cria uma linha validando cada coeficiente
    pub fn new(material: impl Into<String>, per_band: [f64; Band::COUNT]) -> Result<Self, AcousticError> {
        let material = material.into();

        if material.is_empty() {
            return Err(AcousticError::InvalidCoefficients(
                "Material name must not be empty".into(),
            ));
        }

        if let Some((band, value)) = Band::ALL
            .into_iter()
            .zip(per_band)
            .find(|(_, value)| !(0.0..=1.0).contains(value))
        {
            return Err(AcousticError::InvalidCoefficients(format!(
                "{}: coefficient at {} must be in [0, 1], got {}",
                material, band, value
            )));
        }

        Ok(Self {
            material,
            per_band: PerBand(per_band),
        })
    }

    /// Coeficiente numa banda
    pub fn at(&self, band: Band) -> f64 {
        self.per_band[band]
    }
}

/// Geometria de uma sala retangular, em unidades métricas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomGeometry {
    /// Pé-direito (m)
    pub height: f64,
    /// Volume (m³)
    pub volume: f64,
    /// Comprimento da planta (m)
    pub length: f64,
    /// Largura da planta (m)
    pub width: f64,
}

impl RoomGeometry {
    pub fn new(length: f64, width: f64, height: f64, volume: f64) -> Self {
        Self {
            height,
            volume,
            length,
            width,
        }
    }

    /// Verifica que todas as dimensões são finitas e positivas
    pub fn validate(&self) -> Result<(), AcousticError> {
        let dimensions = [
            ("height", self.height),
            ("volume", self.volume),
            ("length", self.length),
            ("width", self.width),
        ];

        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(AcousticError::InvalidGeometry(format!(
                    "Room {} must be positive, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Área do piso, derivada do volume e do pé-direito
    pub fn slab_area(&self) -> f64 {
        self.volume / self.height
    }
}

/// Resultado de uma banda: valor em segundos ou o motivo da falha
pub type BandOutcome = Result<f64, AcousticError>;

/// Tempo de reverberação e envelope alvo numa banda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RtResult {
    pub band: Band,
    pub sabine_seconds: BandOutcome,
    pub eyring_seconds: BandOutcome,
    pub target_max_seconds: BandOutcome,
    pub target_min_seconds: BandOutcome,
}

impl RtResult {
    /// Verdadeiro se algum valor da banda falhou
    pub fn has_failure(&self) -> bool {
        self.sabine_seconds.is_err()
            || self.eyring_seconds.is_err()
            || self.target_max_seconds.is_err()
            || self.target_min_seconds.is_err()
    }
}

/// Frequência de Schroeder e modos fundamentais
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeResult {
    pub schroeder_hz: f64,
    pub axial_hz: f64,
    pub tangential_hz: f64,
    pub oblique_hz: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_order() {
        let hz: Vec<u32> = Band::ALL.iter().map(|b| b.hz()).collect();
        assert_eq!(hz, vec![125, 250, 500, 1000, 2000, 4000]);
        assert!(Band::Hz125 < Band::Hz4000);
    }

    #[test]
    fn test_band_from_hz() {
        assert_eq!(Band::from_hz(1000), Some(Band::Hz1000));
        assert_eq!(Band::from_hz(63), None);
        assert!(Band::try_from(8000u32).is_err());
    }

    #[test]
    fn test_per_band_index() {
        let mut values = PerBand::from_fn(|band| band.hz() as f64);
        assert_eq!(values[Band::Hz500], 500.0);

        values[Band::Hz500] = 1.0;
        assert_eq!(values.0[2], 1.0);
    }

    #[test]
    fn test_per_band_map_keeps_order() {
        let doubled = PerBand([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).map(|_, v| v * 2.0);
        assert_eq!(doubled.into_array(), [2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);

        let bands = PerBand([0u8; 6]).map(|band, _| band);
        assert_eq!(bands.0, Band::ALL);
    }

    #[test]
    fn test_coefficients_out_of_range() {
        let result = AbsorptionCoefficients::new("Foam", [0.1, 0.2, 1.2, 0.9, 0.9, 0.9]);
        assert!(matches!(result, Err(AcousticError::InvalidCoefficients(_))));

        let result = AbsorptionCoefficients::new("", [0.0; 6]);
        assert!(result.is_err());
    }

    #[test]
    fn test_geometry_validate() {
        assert!(RoomGeometry::new(5.0, 4.0, 3.0, 60.0).validate().is_ok());
        assert!(RoomGeometry::new(5.0, 0.0, 3.0, 60.0).validate().is_err());
        assert!(RoomGeometry::new(5.0, 4.0, 3.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_slab_area() {
        let geometry = RoomGeometry::new(5.0, 4.0, 3.0, 60.0);
        assert!((geometry.slab_area() - 20.0).abs() < 1e-12);
    }
}
