//! Command implementations behind the `gconn` binary.

pub mod commands;
