//! # Core Module
//!
//! Stateless building blocks: the sample dataset catalog and the force-field
//! readers that turn topology files into radius tables.
//!
//! - **Dataset Catalog** ([`catalog`]) - Registration and classification of sample files
//! - **Force Fields** ([`forcefield`]) - Van-der-Waals radii from GROMACS topologies

pub mod catalog;
pub mod forcefield;
