use super::entry::{DataFormat, DataType};
use super::registry::{CatalogError, DatasetCatalog};
use phf::{OrderedMap, phf_ordered_map};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledDataset {
    pub file_name: &'static str,
    pub data_type: DataType,
    pub format: DataFormat,
    pub description: &'static str,
}

const fn bundled(
    file_name: &'static str,
    data_type: DataType,
    format: DataFormat,
    description: &'static str,
) -> BundledDataset {
    BundledDataset {
        file_name,
        data_type,
        format,
        description,
    }
}

/// Sample files shipped with the toolkit, keyed by label in registration order.
#[rustfmt::skip]
pub static BUNDLED_DATASETS: OrderedMap<&'static str, BundledDataset> = phf_ordered_map! {
    "WATER_GRO"             => bundled("water.gro", DataType::Config, DataFormat::Gro, "SPC water/vapour interface"),
    "MICELLE_PDB"           => bundled("micelle.pdb", DataType::Config, DataFormat::Gro, "DPC micelle"),
    "WATERSMALL_GRO"        => bundled("water-small.gro", DataType::Config, DataFormat::Gro, "small SPC water/vapour interface"),
    "METHANOL_GRO"          => bundled("methanol.gro", DataType::Config, DataFormat::Gro, "methanol/vapour interface"),
    "ILBENZENE_GRO"         => bundled("ilbenzene.gro", DataType::Config, DataFormat::Gro, "BMIM PF4 / benzene interface"),
    "WATER_XTC"             => bundled("water.xtc", DataType::Traj, DataFormat::Xtc, "SPC water/vapour interface trajectory"),
    "_TEST_ORIENTATION_GRO" => bundled("_test_orientation.gro", DataType::Config, DataFormat::Gro, "test file"),
    "_TEST_PROFILE_GRO"     => bundled("_test_profile.gro", DataType::Config, DataFormat::Gro, "test file"),
    "G43A1_TOP"             => bundled("ffg43a1.nonbonded.itp", DataType::Topol, DataFormat::Gmx, "GROMOS 43A1 topology for GROMACS"),
};

/// Registers every bundled sample file, resolving paths against `data_dir`.
///
/// Only joins paths; the files themselves are never touched.
pub fn register_bundled(catalog: &mut DatasetCatalog, data_dir: &Path) -> Result<(), CatalogError> {
    for (label, dataset) in BUNDLED_DATASETS.entries() {
        let path = data_dir.join(dataset.file_name);
        catalog.register(
            label,
            &path.to_string_lossy(),
            dataset.data_type,
            dataset.format,
            dataset.description,
        )?;
    }
    Ok(())
}
