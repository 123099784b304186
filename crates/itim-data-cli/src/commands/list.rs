use crate::cli::ListArgs;
use crate::error::Result;
use itim_data::core::catalog::entry::CatalogEntry;
use itim_data::core::catalog::registry::DatasetCatalog;
use std::io::Write;
use tracing::debug;

pub fn run(args: &ListArgs, catalog: &DatasetCatalog, out: &mut impl Write) -> Result<()> {
    let mut labels: Vec<&str> = match (args.data_type, args.all) {
        (Some(data_type), false) => catalog.list_labels_of_type(data_type).into_iter().collect(),
        (Some(data_type), true) => catalog
            .entries()
            .filter(|e| e.data_type() == data_type)
            .map(CatalogEntry::label)
            .collect(),
        (None, false) => catalog.labels().collect(),
        (None, true) => catalog.all_labels().collect(),
    };
    labels.sort_unstable();
    debug!("Listing {} datasets.", labels.len());

    for label in labels {
        let entry = catalog.lookup(label)?;
        writeln!(
            out,
            "{:<24} {:<7} {:<4} {}",
            entry.label(),
            entry.data_type(),
            entry.format(),
            entry.description()
        )?;
    }
    Ok(())
}
