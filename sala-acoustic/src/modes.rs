//! Frequência de Schroeder e modos de sala retangular
//!
//! Os índices modais são fixos em n = m = p = 1: só o primeiro modo axial
//! (comprimento), tangencial (comprimento × largura) e oblíquo é calculado.

use crate::error::{AcousticError, AcousticResult};
use crate::types::{ModeResult, RoomGeometry};

/// Velocidade do som (m/s)
pub const SPEED_OF_SOUND: f64 = 343.0;

/// Constante da frequência de Schroeder
pub const SCHROEDER_CONSTANT: f64 = 1896.0;

/// Tempo de reverberação de referência usado na frequência de Schroeder (s)
pub const SCHROEDER_REFERENCE_RT: f64 = 0.2;

fn positive(name: &str, value: f64) -> AcousticResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AcousticError::Domain(format!(
            "Room {} must be positive, got {}",
            name, value
        )));
    }
    Ok(value)
}

/// Frequência de Schroeder (Hz)
pub fn schroeder_frequency(volume: f64) -> AcousticResult<f64> {
    let volume = positive("volume", volume)?;
    Ok(SCHROEDER_CONSTANT * (SCHROEDER_REFERENCE_RT / volume).sqrt())
}

/// Modos fundamentais e frequência de Schroeder
pub fn compute_modes(length: f64, width: f64, height: f64, volume: f64) -> AcousticResult<ModeResult> {
    let inv_length = 1.0 / positive("length", length)?;
    let inv_width = 1.0 / positive("width", width)?;
    let inv_height = 1.0 / positive("height", height)?;
    let half_c = SPEED_OF_SOUND / 2.0;

    Ok(ModeResult {
        schroeder_hz: schroeder_frequency(volume)?,
        axial_hz: half_c * inv_length,
        tangential_hz: half_c * (inv_length.powi(2) + inv_width.powi(2)).sqrt(),
        oblique_hz: half_c * (inv_length.powi(2) + inv_width.powi(2) + inv_height.powi(2)).sqrt(),
    })
}

/// Atalho para [`compute_modes`] a partir da geometria
pub fn modes_for(geometry: &RoomGeometry) -> AcousticResult<ModeResult> {
    compute_modes(geometry.length, geometry.width, geometry.height, geometry.volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schroeder() {
        let hz = schroeder_frequency(60.0).unwrap();
        assert!((hz - 109.46).abs() < 0.01);
    }

    #[test]
    fn test_axial() {
        let modes = compute_modes(5.0, 4.0, 3.0, 60.0).unwrap();
        assert!((modes.axial_hz - 34.3).abs() < 1e-9);
    }

    #[test]
    fn test_tangential_and_oblique() {
        let modes = compute_modes(5.0, 4.0, 3.0, 60.0).unwrap();
        let expected_tangential = 171.5 * (0.04_f64 + 0.0625).sqrt();
        assert!((modes.tangential_hz - expected_tangential).abs() < 1e-9);
        assert!(modes.oblique_hz > modes.tangential_hz);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(compute_modes(0.0, 4.0, 3.0, 60.0), Err(AcousticError::Domain(_))));
        assert!(matches!(compute_modes(5.0, -4.0, 3.0, 60.0), Err(AcousticError::Domain(_))));
        assert!(matches!(compute_modes(5.0, 4.0, 0.0, 60.0), Err(AcousticError::Domain(_))));
        assert!(matches!(compute_modes(5.0, 4.0, 3.0, 0.0), Err(AcousticError::Domain(_))));
        assert!(schroeder_frequency(f64::INFINITY).is_err());
    }
}
