use crate::cli::{DataArgs, DataCommands};
use crate::data::DataManager;
use crate::error::Result;
use std::io::Write;

pub fn run(args: &DataArgs, manager: &DataManager, out: &mut impl Write) -> Result<()> {
    match args.command {
        DataCommands::Path => handle_path(manager, out),
    }
}

fn handle_path(manager: &DataManager, out: &mut impl Write) -> Result<()> {
    let path = manager.get_data_path();
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    writeln!(out, "{}", absolute.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn path_prints_the_data_directory() {
        let manager = DataManager::with_custom_path(PathBuf::from("/opt/itim/data"));
        let args = DataArgs {
            command: DataCommands::Path,
        };
        let mut out = Vec::new();
        run(&args, &manager, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/opt/itim/data\n");
    }
}
