//! # 🏛️ sala-acoustic — Acústica de Salas
//!
//! Estimativa acústica de uma sala retangular a partir das áreas de
//! acabamento por material, do volume e das dimensões da planta.
//!
//! ## Pipeline
//!
//! 1. [`elements`] normaliza paredes, pisos e forros em superfícies métricas
//! 2. [`surfaces`] soma a área exposta por material
//! 3. [`reverberation`] combina áreas, [`catalog`] e absorção do ar em
//!    absorção por banda, RT de Sabine e Eyring e o envelope alvo
//! 4. [`modes`] calcula a frequência de Schroeder e os modos fundamentais
//!
//! Bandas de oitava: 125, 250, 500, 1000, 2000 e 4000 Hz, sempre nessa ordem.
//!
//! ## Exemplo
//!
//! ```rust
//! use sala_acoustic::{analyze, Catalog, RoomGeometry, SurfaceContribution};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::builtin();
//! let surfaces = vec![
//!     SurfaceContribution::new("Gypsum", 54.0),
//!     SurfaceContribution::new("Carpet", 20.0),
//!     SurfaceContribution::new("Acoustic Ceiling Tile", 20.0),
//! ];
//! let geometry = RoomGeometry::new(5.0, 4.0, 3.0, 60.0);
//!
//! let report = analyze(&catalog, &surfaces, geometry)?;
//! assert_eq!(report.reverberation.len(), 6);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod catalog;
pub mod elements;
pub mod error;
pub mod modes;
pub mod reverberation;
pub mod surfaces;
pub mod types;

pub use analysis::{analyze, AnalysisReport, RoomAnalyzer, RoomSummary};
pub use catalog::{Catalog, CoefficientSource};
pub use elements::{ingest, IngestedRoom, LengthUnit, RoomDescription, RoomElement};
pub use error::{AcousticError, AcousticResult};
pub use modes::{compute_modes, schroeder_frequency};
pub use reverberation::{compute_rt, BandAbsorption};
pub use surfaces::{aggregate, MaterialAreas};
pub use types::{
    AbsorptionCoefficients, Band, BandOutcome, ModeResult, PerBand, RoomGeometry, RtResult,
    SurfaceContribution,
};
