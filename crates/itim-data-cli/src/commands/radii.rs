use crate::cli::RadiiArgs;
use crate::error::Result;
use itim_data::core::catalog::registry::DatasetCatalog;
use itim_data::core::forcefield::radii::LengthUnit;
use itim_data::workflows::radii::vdw_radii;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::{info, warn};

pub fn run(
    args: &RadiiArgs,
    catalog: &DatasetCatalog,
    unit: LengthUnit,
    out: &mut impl Write,
) -> Result<()> {
    let radii = vdw_radii(catalog, &args.key, unit)?;
    if radii.is_empty() {
        warn!("No usable [ atomtypes ] rows found for '{}'.", args.key);
    } else {
        info!("Extracted {} atom-type radii from '{}'.", radii.len(), args.key);
    }

    writeln!(out, "; {:<10} {:>10}", "atomtype", format!("radius/{}", unit.symbol()))?;
    let sorted: BTreeMap<_, _> = radii.into_iter().collect();
    for (name, radius) in sorted {
        writeln!(out, "  {:<10} {:>10.5}", name, radius)?;
    }
    Ok(())
}
