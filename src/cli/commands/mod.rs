//! Subcommands of the `tiqtaq` binary

pub mod canon;
pub mod play;
pub mod report;
pub mod stat;
