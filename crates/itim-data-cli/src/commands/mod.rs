pub mod data;
pub mod list;
pub mod radii;
pub mod show;
