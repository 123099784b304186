//! # itim-data
//!
//! Sample data catalog and van-der-Waals radius extraction for interfacial
//! molecular-dynamics analysis.
//!
//! ## Layout
//!
//! - **[`core`]: The Foundation.** The dual-keyed [`core::catalog::registry::DatasetCatalog`]
//!   of bundled sample files and the GROMACS `[ atomtypes ]` reader in
//!   [`core::forcefield`].
//!
//! - **[`workflows`]: The Public API.** Checks a catalog entry's classification
//!   before handing its file to the matching reader.
//!
//! The catalog is a plain value: the application builds it once at start-up and
//! passes it by reference to whatever needs it.

pub mod core;
pub mod workflows;
