use crate::cli::ShowArgs;
use crate::error::Result;
use itim_data::core::catalog::entry::Visibility;
use itim_data::core::catalog::registry::DatasetCatalog;
use std::io::Write;

pub fn run(args: &ShowArgs, catalog: &DatasetCatalog, out: &mut impl Write) -> Result<()> {
    let entry = catalog.lookup(&args.key)?;
    let visibility = match entry.visibility() {
        Visibility::Public => "public",
        Visibility::Private => "private",
    };

    writeln!(out, "label:       {}", entry.label())?;
    writeln!(out, "path:        {}", entry.path())?;
    writeln!(out, "type:        {}", entry.data_type())?;
    writeln!(out, "format:      {}", entry.format())?;
    writeln!(out, "description: {}", entry.description())?;
    writeln!(out, "visibility:  {}", visibility)?;
    Ok(())
}
