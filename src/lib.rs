//! bomplan: manufacturing planning metrics from a bill of materials
//!
//! Computes total quantities per component, flags assembly steps whose
//! sub-components are not yet provided in-house, and sums the takt time of
//! the routing steps a BOM uses.

pub mod cli;
pub mod core;
pub mod document;
