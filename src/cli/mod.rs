//! Command-line interface support for `gmodel`.

pub mod commands;
