//! Simulation engine: the VM, its limits, and execution tracing.

mod error;
mod trace;
mod vm;

#[cfg(test)]
mod trace_tests;
#[cfg(test)]
mod vm_tests;

pub use error::RuntimeError;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::{FuelLimits, VM, VMBuilder};
