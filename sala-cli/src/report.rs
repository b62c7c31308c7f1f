//! Plain-text rendering of an analysis report

use std::fmt;

use sala_acoustic::{AnalysisReport, BandOutcome, Catalog};

struct Seconds<'a>(&'a BandOutcome);

impl fmt::Display for Seconds<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Ok(value) => write!(f, "{:.3} seconds", value),
            Err(err) => write!(f, "n/a ({})", err),
        }
    }
}

/// Report laid out section by section, in the order an acoustician reads it
pub struct TextReport<'a>(pub &'a AnalysisReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "Areas by Material:")?;
        for (material, area) in report.material_areas.iter() {
            writeln!(f, "  {}: {:.2} sqm", material, area)?;
        }
        for material in &report.unmapped_materials {
            writeln!(f, "  warning: '{}' not in catalog, counted with zero absorption", material)?;
        }

        let summary = &report.summary;
        writeln!(f)?;
        writeln!(f, "Total Room Height: {:.2} meters", summary.height)?;
        writeln!(f, "Total Slab Area: {:.2} sqm", summary.slab_area)?;
        writeln!(f, "Total Room Volume: {:.2} cubic meters", summary.volume)?;

        writeln!(f)?;
        writeln!(f, "Sum of absorption area by frequency:")?;
        for absorption in &report.absorption {
            writeln!(
                f,
                "  {}: {:.3} (materials {:.3}, air {:.3})",
                absorption.band, absorption.total, absorption.material, absorption.air
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Reverberation Time using Sabine (RT):")?;
        for rt in &report.reverberation {
            writeln!(f, "  RT at {}: {}", rt.band, Seconds(&rt.sabine_seconds))?;
        }

        writeln!(f)?;
        writeln!(f, "Reverberation Time using Eyring (RT):")?;
        for rt in &report.reverberation {
            writeln!(f, "  RT at {}: {}", rt.band, Seconds(&rt.eyring_seconds))?;
        }

        writeln!(f)?;
        writeln!(f, "Target RT envelope:")?;
        for rt in &report.reverberation {
            writeln!(
                f,
                "  {}: min {} / max {}",
                rt.band,
                Seconds(&rt.target_min_seconds),
                Seconds(&rt.target_max_seconds)
            )?;
        }

        writeln!(f)?;
        match &report.modes {
            Ok(modes) => {
                writeln!(f, "Schroeder frequency: {:.3} Hertz", modes.schroeder_hz)?;
                writeln!(f)?;
                writeln!(f, "Standing waves frequencies")?;
                writeln!(
                    f,
                    "  Length x Width x Height: {:.3} x {:.3} x {:.3}",
                    summary.length, summary.width, summary.height
                )?;
                writeln!(f, "  Axial Modes frequencies: {:.3} Hertz", modes.axial_hz)?;
                writeln!(f, "  Tangential Modes frequencies: {:.3} Hertz", modes.tangential_hz)?;
                writeln!(f, "  Oblique Modes frequencies: {:.3} Hertz", modes.oblique_hz)?;
            }
            Err(err) => writeln!(f, "Room modes: n/a ({})", err)?,
        }

        let failed = report.failed_bands();
        if !failed.is_empty() {
            let bands: Vec<String> = failed.iter().map(|band| band.to_string()).collect();
            writeln!(f)?;
            writeln!(f, "Incomplete bands: {}", bands.join(", "))?;
        }

        Ok(())
    }
}

/// One line per catalog row with its six coefficients
pub struct CatalogTable<'a>(pub &'a Catalog);

impl fmt::Display for CatalogTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<28} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
            "material", "125", "250", "500", "1000", "2000", "4000"
        )?;

        for row in self.0.rows() {
            write!(f, "{:<28}", row.material)?;
            for (_, value) in row.per_band.iter() {
                write!(f, " {:>6.2}", value)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{} materials", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sala_acoustic::{analyze, CoefficientSource, RoomGeometry, SurfaceContribution};

    fn office() -> AnalysisReport {
        let catalog = Catalog::builtin();
        let surfaces = vec![
            SurfaceContribution::new("Gypsum", 54.0),
            SurfaceContribution::new("Carpet", 20.0),
            SurfaceContribution::new("Acoustic Ceiling Tile", 20.0),
        ];
        analyze(&catalog, &surfaces, RoomGeometry::new(5.0, 4.0, 3.0, 60.0)).unwrap()
    }

    #[test]
    fn test_render_sections() {
        let text = TextReport(&office()).to_string();

        assert!(text.contains("Areas by Material:"));
        assert!(text.contains("  Gypsum: 54.00 sqm"));
        assert!(text.contains("Total Room Volume: 60.00 cubic meters"));
        assert!(text.contains("Reverberation Time using Sabine (RT):"));
        assert!(text.contains("Reverberation Time using Eyring (RT):"));
        assert!(text.contains("Axial Modes frequencies: 34.300 Hertz"));
        assert!(text.contains("Length x Width x Height: 5.000 x 4.000 x 3.000"));
        assert!(!text.contains("Incomplete bands"));
    }

    #[test]
    fn test_render_failed_bands() {
        let catalog = Catalog::builtin();
        let report = analyze(&catalog, &[], RoomGeometry::new(5.0, 4.0, 3.0, 60.0)).unwrap();
        let text = TextReport(&report).to_string();

        assert!(text.contains("n/a (Domain error"));
        assert!(text.contains("Incomplete bands: 125 Hz, 250 Hz"));
    }

    #[test]
    fn test_render_unmapped_warning() {
        let catalog = Catalog::builtin();
        let surfaces = vec![SurfaceContribution::new("N/A", 10.0)];
        let report = analyze(&catalog, &surfaces, RoomGeometry::new(5.0, 4.0, 3.0, 60.0)).unwrap();

        assert!(TextReport(&report).to_string().contains("'N/A' not in catalog"));
    }

    #[test]
    fn test_render_catalog() {
        let catalog = Catalog::builtin();
        let text = CatalogTable(&catalog).to_string();
        assert!(text.contains("Gypsum"));
        assert!(text.ends_with(&format!("{} materials\n", catalog.len())));
        assert!(catalog.contains("Gypsum"));
    }

    struct Truncated(usize);

    impl fmt::Write for Truncated {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.0 = self.0.checked_sub(s.len()).ok_or(fmt::Error)?;
            Ok(())
        }
    }

    #[test]
    fn test_render_propagates_write_errors() {
        use std::fmt::Write;

        let report = office();
        assert!(write!(Truncated(64), "{}", TextReport(&report)).is_err());
        assert!(write!(Truncated(64), "{}", CatalogTable(&Catalog::builtin())).is_err());
        assert!(write!(Truncated(usize::MAX), "{}", TextReport(&report)).is_ok());
    }
}
