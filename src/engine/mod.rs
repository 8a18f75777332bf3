//! High-level operations — the connectivity checker.

pub mod connectivity;

pub use connectivity::{is_connected, ConnectivityChecker, ConnectivityResult};
