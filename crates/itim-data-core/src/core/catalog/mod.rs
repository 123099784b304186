//! # Catalog Module
//!
//! This module keeps track of the sample data files shipped with the toolkit
//! (configurations, topologies and trajectories) together with their
//! classification metadata.
//!
//! ## Overview
//!
//! Every file is registered under a stable symbolic label (e.g. `WATER_GRO`) and
//! its resolved path. Both keys resolve to the same [`entry::CatalogEntry`], so a
//! caller holding only a path can still ask what kind of file it is.
//!
//! Labels starting with an underscore are private test fixtures: they can be
//! looked up directly but are left out of the per-type listings.
//!
//! ## Key Components
//!
//! - [`registry`] - The dual-keyed [`registry::DatasetCatalog`]
//! - [`entry`] - Entry data model and the type/format classifications
//! - [`bundled`] - The toolkit's own sample files
//! - [`manifest`] - Additional datasets declared in a TOML manifest
//!
//! ## Usage
//!
//! ```ignore
//! use itim_data::core::catalog::{bundled, registry::DatasetCatalog};
//!
//! let mut catalog = DatasetCatalog::new();
//! bundled::register_bundled(&mut catalog, data_dir)?;
//! for label in catalog.topologies() {
//!     println!("{}", catalog.lookup(label)?.path());
//! }
//! ```

pub mod bundled;
pub mod entry;
pub mod manifest;
pub mod registry;
