//! Adapter layer - implementations of the ports.

pub mod generator;
pub mod storage;
