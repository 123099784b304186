//! # Force Field Module
//!
//! Derives per-atom-type van-der-Waals radii from force-field parameter files.
//!
//! ## Overview
//!
//! Only GROMACS non-bonded topologies are understood. Their `[ atomtypes ]`
//! section lists Lennard-Jones C6/C12 coefficients per atom type, from which the
//! radius is taken as half of `sigma = (C12 / C6)^(1/6)`.
//!
//! ## Key Components
//!
//! - [`gromacs`] - Line-oriented `[ atomtypes ]` scanner
//! - [`radii`] - Radius table, length units and the sigma conversion
//!
//! ## Usage
//!
//! ```ignore
//! use itim_data::core::forcefield::{gromacs, radii::LengthUnit};
//!
//! let radii = gromacs::extract_vdw_radii(path, LengthUnit::Angstrom)?;
//! let ow = radii.get("OW");
//! ```

pub mod gromacs;
pub mod radii;
