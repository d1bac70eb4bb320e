//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine for dilogarithm
//! evaluation. It distributes elementwise work across CPU cores.

// Parallel execution engine using CPU threads
pub mod executor;
