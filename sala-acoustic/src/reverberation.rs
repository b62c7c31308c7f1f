//! Absorção por banda e tempo de reverberação (Sabine e Eyring)
//!
//! Para cada banda:
//!
//! - absorção dos materiais: `Σ α(m, b) · S(m)`, com α = 0 para material fora do catálogo
//! - absorção do ar: `4 · V · m(b)`
//! - Sabine: `0.161 · V / A`
//! - Eyring: `0.161 · V / (-ln(1 - A/S) · S)`
//!
//! O envelope alvo é a média de Eyring em 250–2000 Hz, ±0.06666 s em 125 Hz
//! e ±0.05 s nas demais bandas.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::CoefficientSource;
use crate::error::AcousticError;
use crate::surfaces::MaterialAreas;
use crate::types::{Band, BandOutcome, PerBand, RtResult};

/// Constante de Sabine (s/m)
pub const SABINE_CONSTANT: f64 = 0.161;

/// Coeficiente de atenuação do ar por banda
pub const AIR_ABSORPTION: PerBand<f64> = PerBand([
    0.00005626909,
    0.00016419279,
    0.0003338321,
    0.0005694963,
    0.001228403,
    0.003734768,
]);

/// Bandas que entram na média do envelope alvo
pub const TARGET_BANDS: [Band; 4] = [Band::Hz250, Band::Hz500, Band::Hz1000, Band::Hz2000];

/// Tolerância do envelope em 125 Hz (s)
pub const TARGET_TOLERANCE_LOW: f64 = 0.06666;

/// Tolerância do envelope nas demais bandas (s)
pub const TARGET_TOLERANCE: f64 = 0.05;

/// Absorção equivalente numa banda (m² Sabine)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandAbsorption {
    pub band: Band,
    /// Soma dos materiais
    pub material: f64,
    /// Parcela do ar
    pub air: f64,
    /// material + ar
    pub total: f64,
}

/// Absorção do ar no volume da sala
pub fn air_absorption(volume: f64, band: Band) -> f64 {
    4.0 * volume * AIR_ABSORPTION[band]
}

/// Absorção equivalente de cada banda, em ordem crescente
pub fn absorption_by_band<C: CoefficientSource + ?Sized>(
    catalog: &C,
    areas: &MaterialAreas,
    volume: f64,
) -> PerBand<BandAbsorption> {
    PerBand::from_fn(|band| {
        let material: f64 = areas
            .iter()
            .map(|(name, area)| catalog.coefficient_or_zero(name, band) * area)
            .sum();
        let air = air_absorption(volume, band);

        BandAbsorption {
            band,
            material,
            air,
            total: material + air,
        }
    })
}

fn check_volume(volume: f64) -> Result<(), AcousticError> {
    if !volume.is_finite() || volume <= 0.0 {
        return Err(AcousticError::Domain(format!(
            "Room volume must be positive, got {}",
            volume
        )));
    }
    Ok(())
}

/// RT de Sabine numa banda
pub fn sabine(volume: f64, total_absorption: f64, band: Band) -> BandOutcome {
    check_volume(volume)?;

    if total_absorption == 0.0 {
        return Err(AcousticError::DivisionUndefined { band });
    }

    Ok(SABINE_CONSTANT * volume / total_absorption)
}

/// RT de Eyring numa banda
pub fn eyring(volume: f64, total_absorption: f64, total_area: f64, band: Band) -> BandOutcome {
    check_volume(volume)?;

    if total_area <= 0.0 {
        return Err(AcousticError::Domain(format!(
            "Total surface area must be positive at {}, got {}",
            band, total_area
        )));
    }

    let argument = 1.0 - total_absorption / total_area;
    if argument <= 0.0 {
        return Err(AcousticError::Domain(format!(
            "Absorption {:.3} reaches total area {:.3} at {}, Eyring logarithm undefined",
            total_absorption, total_area, band
        )));
    }

    let denominator = -argument.ln() * total_area;
    if denominator == 0.0 {
        return Err(AcousticError::DivisionUndefined { band });
    }

    Ok(SABINE_CONSTANT * volume / denominator)
}

/// Média de Eyring nas bandas centrais
///
/// Falha se qualquer uma das bandas de [`TARGET_BANDS`] falhou.
pub fn target_average(eyring: &PerBand<BandOutcome>) -> Result<f64, AcousticError> {
    let mut sum = 0.0;

    for band in TARGET_BANDS {
        match &eyring[band] {
            Ok(seconds) => sum += seconds,
            Err(err) => {
                return Err(AcousticError::Domain(format!(
                    "Target envelope needs Eyring RT at {}: {}",
                    band, err
                )));
            }
        }
    }

    Ok(sum / TARGET_BANDS.len() as f64)
}

/// Tolerância do envelope alvo na banda
pub fn target_tolerance(band: Band) -> f64 {
    match band {
        Band::Hz125 => TARGET_TOLERANCE_LOW,
        _ => TARGET_TOLERANCE,
    }
}

/// Tempo de reverberação a partir de absorções já somadas
pub fn rt_from_absorption(
    absorption: &PerBand<BandAbsorption>,
    total_area: f64,
    volume: f64,
) -> Vec<RtResult> {
    let sabine_rt = absorption.map(|band, a| sabine(volume, a.total, band));
    let eyring_rt = absorption.map(|band, a| eyring(volume, a.total, total_area, band));
    let average = target_average(&eyring_rt);

    Band::ALL
        .into_iter()
        .map(|band| {
            let tolerance = target_tolerance(band);
            let result = RtResult {
                band,
                sabine_seconds: sabine_rt[band].clone(),
                eyring_seconds: eyring_rt[band].clone(),
                target_max_seconds: average.clone().map(|avg| avg + tolerance),
                target_min_seconds: average.clone().map(|avg| avg - tolerance),
            };

            match (&result.sabine_seconds, &result.eyring_seconds) {
                (Ok(s), Ok(e)) => debug!(%band, sabine = s, eyring = e, "reverberation time"),
                (s, e) => warn!(
                    %band,
                    sabine = ?s.as_ref().err(),
                    eyring = ?e.as_ref().err(),
                    "reverberation time failed"
                ),
            }

            result
        })
        .collect()
}

/// Tempo de reverberação por banda, em ordem crescente de frequência
pub fn compute_rt<C: CoefficientSource + ?Sized>(
    catalog: &C,
    areas: &MaterialAreas,
    volume: f64,
) -> Vec<RtResult> {
    let absorption = absorption_by_band(catalog, areas, volume);
    rt_from_absorption(&absorption, areas.total_area(), volume)
}
