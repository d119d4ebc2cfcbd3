//! Benchmark scaffolding SDK
//!
//! `benchgen-sdk` generates skeleton C++ benchmark units for three
//! third-party micro-benchmarking frameworks (sltbench, Google Benchmark,
//! nonius) and renders externally measured benchmark results into json, csv,
//! or human-readable reports.
//!
//! # Quick Start
//!
//! Generate a unit:
//! ```
//! use benchgen_sdk::{Framework, Shape, codegen};
//!
//! let unit = codegen::generate(Framework::Sltbench, Shape::FixtureArgs, "0")?;
//! assert!(unit.contains("SLTBENCH_FUNCTION_WITH_FIXTURE_AND_ARGS"));
//! # Ok::<(), benchgen_sdk::CodegenError>(())
//! ```
//!
//! Render a report:
//! ```
//! use benchgen_sdk::report::{Measurement, ReportFormat, ReportOptions, render};
//!
//! let result = Measurement {
//!     bench_time: 1.5,
//!     mean_err: 0.2,
//!     max_err: 0.9,
//!     functions: vec![],
//! };
//! let options = ReportOptions::new(false, ReportFormat::Csv, None)?;
//! let blob = render(&result, &options)?;
//! assert!(blob.starts_with("bench_time_sec,1.5"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! The SDK consists of two independent components that never interact:
//!
//! - **Codegen**: one template per (framework, shape) pair; substitutes a
//!   caller-supplied uid into every generated symbol name
//! - **Report**: formats a completed measurement, prints it, and optionally
//!   persists it
//!
//! Generated units are handed to an external compile/run pipeline; measured
//! results come back from an external measurement pipeline. The SDK neither
//! executes benchmarks nor computes timing statistics.

// Public modules
pub mod codegen;
pub mod report;
pub mod types;

// Re-export key types for convenience
pub use report::{FunctionStat, Measurement, ReportFormat, ReportOptions};
pub use types::{CodegenError, Framework, ReportError, Shape};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
