//! Execução completa de uma análise de sala
//!
//! Agrega as superfícies, calcula a absorção e o RT por banda e os modos, e
//! devolve um único [`AnalysisReport`]. Falhas de uma banda ficam nessa banda;
//! só geometria inválida aborta a execução.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::CoefficientSource;
use crate::elements::IngestedRoom;
use crate::error::{AcousticError, AcousticResult};
use crate::modes::modes_for;
use crate::reverberation::{absorption_by_band, rt_from_absorption, BandAbsorption};
use crate::surfaces::{aggregate, MaterialAreas};
use crate::types::{Band, ModeResult, RoomGeometry, RtResult, SurfaceContribution};

/// Resumo dimensional da sala
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomSummary {
    /// Pé-direito (m)
    pub height: f64,
    /// Área do piso (m²)
    pub slab_area: f64,
    /// Volume (m³)
    pub volume: f64,
    /// Comprimento da planta (m)
    pub length: f64,
    /// Largura da planta (m)
    pub width: f64,
    /// Soma das áreas de todos os materiais (m²)
    pub total_area: f64,
}

/// Resultado de uma análise, pronto para apresentação
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub material_areas: MaterialAreas,
    pub summary: RoomSummary,
    pub absorption: Vec<BandAbsorption>,
    pub reverberation: Vec<RtResult>,
    pub modes: AcousticResult<ModeResult>,
    /// Materiais sem linha no catálogo (absorção zero)
    pub unmapped_materials: Vec<String>,
}

impl AnalysisReport {
    /// Bandas com algum valor que falhou
    pub fn failed_bands(&self) -> Vec<Band> {
        self.reverberation
            .iter()
            .filter(|rt| rt.has_failure())
            .map(|rt| rt.band)
            .collect()
    }

    /// Verdadeiro se todas as bandas e os modos foram calculados
    pub fn is_complete(&self) -> bool {
        self.modes.is_ok() && self.failed_bands().is_empty()
    }
}

/// Analisador de salas sobre uma fonte de coeficientes
#[derive(Debug)]
pub struct RoomAnalyzer<'a, C: CoefficientSource + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CoefficientSource + ?Sized> RoomAnalyzer<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Analisa superfícies e geometria já normalizadas
    pub fn run(&self, surfaces: &[SurfaceContribution], geometry: RoomGeometry) -> AcousticResult<AnalysisReport> {
        geometry.validate()?;

        if let Some(bad) = surfaces.iter().find(|s| !s.area.is_finite() || s.area < 0.0) {
            return Err(AcousticError::InvalidGeometry(format!(
                "Surface '{}' has invalid area {}",
                bad.material, bad.area
            )));
        }

        let material_areas = aggregate(surfaces);
        let unmapped_materials: Vec<String> = material_areas
            .iter()
            .filter(|(name, _)| !self.catalog.contains(name))
            .map(|(name, _)| name.to_string())
            .collect();

        for name in &unmapped_materials {
            debug!(material = %name, "material not in catalog, absorption counted as zero");
        }

        let total_area = material_areas.total_area();
        let absorption = absorption_by_band(self.catalog, &material_areas, geometry.volume);
        let reverberation = rt_from_absorption(&absorption, total_area, geometry.volume);
        let modes = modes_for(&geometry);

        let report = AnalysisReport {
            summary: RoomSummary {
                height: geometry.height,
                slab_area: geometry.slab_area(),
                volume: geometry.volume,
                length: geometry.length,
                width: geometry.width,
                total_area,
            },
            material_areas,
            absorption: absorption.into_array().to_vec(),
            reverberation,
            modes,
            unmapped_materials,
        };

        info!(
            materials = report.material_areas.len(),
            volume = report.summary.volume,
            failed_bands = report.failed_bands().len(),
            "room analysis complete"
        );

        Ok(report)
    }

    /// Analisa uma sala vinda de [`crate::elements::ingest`]
    pub fn run_ingested(&self, room: &IngestedRoom) -> AcousticResult<AnalysisReport> {
        self.run(&room.surfaces, room.geometry)
    }
}

/// Atalho para [`RoomAnalyzer::run`]
pub fn analyze<C: CoefficientSource + ?Sized>(
    catalog: &C,
    surfaces: &[SurfaceContribution],
    geometry: RoomGeometry,
) -> AcousticResult<AnalysisReport> {
    RoomAnalyzer::new(catalog).run(surfaces, geometry)
}
