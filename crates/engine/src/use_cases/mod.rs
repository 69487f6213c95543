//! Use cases composed from the domain aggregate and the ports.

pub mod context;
pub mod narrative;
