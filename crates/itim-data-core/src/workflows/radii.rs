use crate::core::catalog::entry::{DataFormat, DataType};
use crate::core::catalog::registry::{CatalogError, DatasetCatalog};
use crate::core::forcefield::gromacs::{self, ExtractError};
use crate::core::forcefield::radii::{LengthUnit, VdwRadiusTable};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RadiiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(
        "Dataset '{key}' is classified as {data_type}/{format}; radii can only be extracted from topol/GMX files"
    )]
    UnsupportedFormat {
        key: String,
        data_type: DataType,
        format: DataFormat,
    },

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Van-der-Waals radii for the topology registered under `key` (a label or a path).
///
/// # Errors
///
/// Fails if `key` is not registered, if the entry is not a GROMACS topology, or
/// if its file cannot be read.
pub fn vdw_radii(
    catalog: &DatasetCatalog,
    key: &str,
    unit: LengthUnit,
) -> Result<VdwRadiusTable, RadiiError> {
    let entry = catalog.lookup(key)?;
    if !entry.is_gromacs_topology() {
        return Err(RadiiError::UnsupportedFormat {
            key: key.to_string(),
            data_type: entry.data_type(),
            format: entry.format(),
        });
    }
    Ok(gromacs::extract_vdw_radii(Path::new(entry.path()), unit)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    const TOPOLOGY: &str = "\
[ atomtypes ]
;name  at.num   mass      charge  ptype       c6           c12
   OW    8     0.000      0.000     A  0.0026173456   2.6331e-06
   HW    1     0.000      0.000     A             0            0
[ nonbond_params ]
";

    fn catalog_with_topology() -> (TempDir, DatasetCatalog) {
        let dir = tempdir().unwrap();
        let top_path = dir.path().join("ffg43a1.nonbonded.itp");
        fs::write(&top_path, TOPOLOGY).unwrap();

        let mut catalog = DatasetCatalog::new();
        catalog
            .register(
                "G43A1_TOP",
                &top_path.to_string_lossy(),
                DataType::Topol,
                DataFormat::Gmx,
                "GROMOS 43A1 topology for GROMACS",
            )
            .unwrap();
        catalog
            .register(
                "WATER_GRO",
                &dir.path().join("water.gro").to_string_lossy(),
                DataType::Config,
                DataFormat::Gro,
                "SPC water/vapour interface",
            )
            .unwrap();
        (dir, catalog)
    }

    #[test]
    fn radii_are_extracted_by_label_and_by_path() {
        let (dir, catalog) = catalog_with_topology();
        let by_label = vdw_radii(&catalog, "G43A1_TOP", LengthUnit::Angstrom).unwrap();
        let path = dir.path().join("ffg43a1.nonbonded.itp");
        let by_path = vdw_radii(&catalog, &path.to_string_lossy(), LengthUnit::Angstrom).unwrap();

        assert_eq!(by_label, by_path);
        assert_eq!(by_label.len(), 2);
        let expected = 0.5 * (2.6331e-6_f64 / 0.0026173456).powf(1.0 / 6.0) * 10.0;
        assert!((by_label["OW"] - expected).abs() < 1e-12);
        assert_eq!(by_label["HW"], 0.0);
    }

    #[test]
    fn non_topology_entry_is_rejected_as_unsupported() {
        let (_dir, catalog) = catalog_with_topology();
        let result = vdw_radii(&catalog, "WATER_GRO", LengthUnit::Angstrom);
        match result {
            Err(RadiiError::UnsupportedFormat {
                key,
                data_type,
                format,
            }) => {
                assert_eq!(key, "WATER_GRO");
                assert_eq!(data_type, DataType::Config);
                assert_eq!(format, DataFormat::Gro);
            }
            other => panic!("expected unsupported format, got {:?}", other),
        }
    }

    #[test]
    fn topology_in_non_gromacs_format_is_rejected() {
        let mut catalog = DatasetCatalog::new();
        catalog
            .register("ODD_TOP", "odd.top", DataType::Topol, DataFormat::Gro, "")
            .unwrap();
        assert!(matches!(
            vdw_radii(&catalog, "ODD_TOP", LengthUnit::Angstrom),
            Err(RadiiError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn unknown_key_propagates_not_found() {
        let (_dir, catalog) = catalog_with_topology();
        assert!(matches!(
            vdw_radii(&catalog, "OPLS_TOP", LengthUnit::Angstrom),
            Err(RadiiError::Catalog(CatalogError::NotFound { .. }))
        ));
    }

    #[test]
    fn missing_topology_file_propagates_extract_error() {
        let mut catalog = DatasetCatalog::new();
        let dir = tempdir().unwrap();
        catalog
            .register(
                "GONE_TOP",
                &dir.path().join("gone.itp").to_string_lossy(),
                DataType::Topol,
                DataFormat::Gmx,
                "",
            )
            .unwrap();
        assert!(matches!(
            vdw_radii(&catalog, "GONE_TOP", LengthUnit::Angstrom),
            Err(RadiiError::Extract(ExtractError::Io { .. }))
        ));
    }
}
