//! High-level procedures combining the catalog with the force-field readers.

pub mod radii;
