use super::radii::{LengthUnit, VdwRadiusTable, radius_from_lj};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

const ATOMTYPES_SECTION: &str = "atomtypes";
const COMMENT_CHAR: char = ';';

const NAME_FIELD: usize = 0;
const C6_FIELD: usize = 5;
const C12_FIELD: usize = 6;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingAtomtypes,
    InAtomtypes,
}

/// Reads the `[ atomtypes ]` section of a GROMACS topology file and returns the
/// van-der-Waals radius of every atom type it defines.
pub fn extract_vdw_radii(path: &Path, unit: LengthUnit) -> Result<VdwRadiusTable, ExtractError> {
    let to_error = |e: io::Error| ExtractError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    };
    let file = File::open(path).map_err(to_error)?;
    read_vdw_radii(&mut BufReader::new(file), unit).map_err(to_error)
}

/// Scans GROMACS topology text for the first `[ atomtypes ]` section.
///
/// Rows with fewer than seven fields, non-numeric C6/C12 columns, or
/// coefficients that yield no real radius are skipped.
/// The scan ends at the next section header, or at end of input. Input without
/// an `atomtypes` section yields an empty table.
pub fn read_vdw_radii(reader: &mut impl BufRead, unit: LengthUnit) -> io::Result<VdwRadiusTable> {
    let mut radii = VdwRadiusTable::new();
    let mut state = ScanState::SeekingAtomtypes;

    for line in reader.lines() {
        let line = line?;
        match state {
            ScanState::SeekingAtomtypes => {
                if is_atomtypes_header(&line) {
                    state = ScanState::InAtomtypes;
                }
            }
            ScanState::InAtomtypes => {
                if section_header(&line).is_some() {
                    break;
                }
                if let Some((name, radius)) = parse_atomtype_row(&line, unit) {
                    radii.insert(name.to_string(), radius);
                }
            }
        }
    }

    Ok(radii)
}

/// Returns whatever follows the opening bracket of a section header line.
fn section_header(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix('[')
}

fn is_atomtypes_header(line: &str) -> bool {
    section_header(line)
        .and_then(|rest| rest.trim_start().strip_prefix(ATOMTYPES_SECTION))
        .is_some_and(|rest| rest.trim_start().starts_with(']'))
}

fn parse_atomtype_row(line: &str, unit: LengthUnit) -> Option<(&str, f64)> {
    let data = line
        .split_once(COMMENT_CHAR)
        .map_or(line, |(data, _comment)| data);
    let fields: Vec<&str> = data.split_whitespace().collect();
    if fields.len() <= C12_FIELD {
        return None;
    }
    let c6 = fields[C6_FIELD].parse::<f64>().ok()?;
    let c12 = fields[C12_FIELD].parse::<f64>().ok()?;
    let radius = radius_from_lj(c6, c12, unit)?;
    Some((fields[NAME_FIELD], radius))
}
