//! Core types for benchgen-sdk.
//!
//! This module defines the fundamental types used throughout the SDK:
//!
//! - [`Framework`] - The third-party benchmarking API a unit is generated for
//! - [`Shape`] - The capability combination a generated benchmark exercises
//! - [`CodegenError`] - Error type for template registry lookups
//! - [`ReportError`] - Error type for report rendering and persistence

use std::fmt;

/// Target benchmarking framework for generated units.
///
/// Each framework supports a different subset of [`Shape`]s: sltbench covers
/// the whole matrix, Google Benchmark only `simple` and `fixture`, nonius
/// only `simple`.
///
/// # Example
///
/// ```
/// use benchgen_sdk::{Framework, Shape};
///
/// assert!(Framework::Sltbench.supports(Shape::FixtureLazyGenerator));
/// assert!(!Framework::Nonius.supports(Shape::Fixture));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    /// sltbench (fixtures, argument sets, eager and lazy generators).
    Sltbench,
    /// Google Benchmark (plain functions and manual pause/resume fixtures).
    Googlebench,
    /// nonius (plain lambda-registered functions).
    Nonius,
}

impl Framework {
    /// Returns the string representation of the framework.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Sltbench => "sltbench",
            Framework::Googlebench => "googlebench",
            Framework::Nonius => "nonius",
        }
    }

    /// Shapes this framework can generate units for, in registry order.
    pub fn supported_shapes(&self) -> &'static [Shape] {
        match self {
            Framework::Sltbench => &[
                Shape::Simple,
                Shape::Args,
                Shape::Fixture,
                Shape::FixtureArgs,
                Shape::Generator,
                Shape::LazyGenerator,
                Shape::FixtureGenerator,
                Shape::FixtureLazyGenerator,
                Shape::FixtureBuilder,
                Shape::FixtureBuilderArgs,
                Shape::FixtureBuilderGenerator,
                Shape::FixtureBuilderLazyGenerator,
            ],
            Framework::Googlebench => &[Shape::Simple, Shape::Fixture],
            Framework::Nonius => &[Shape::Simple],
        }
    }

    /// Whether a unit for `shape` can be generated for this framework.
    pub fn supports(&self, shape: Shape) -> bool {
        self.supported_shapes().contains(&shape)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The capability combination a generated benchmark exercises.
///
/// A shape decides both the helper scaffolding emitted in the unit (argument
/// structs, fixture classes, generators) and the registration macro that
/// wires the unit into the framework runner. The enum is closed: combinations
/// outside this set are unsupported by design, not merely unimplemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Plain function, no per-call input.
    Simple,
    /// Static list of argument values.
    Args,
    /// Mutable state set up before and torn down after each invocation.
    Fixture,
    /// Fixture combined with a static argument list.
    FixtureArgs,
    /// Function eagerly producing the full argument list.
    Generator,
    /// Function producing one argument at a time, signalling exhaustion.
    LazyGenerator,
    /// Fixture fed from an eager generator.
    FixtureGenerator,
    /// Fixture fed from a lazy generator.
    FixtureLazyGenerator,
    /// Free function constructing the fixture state itself.
    FixtureBuilder,
    /// Fixture builder combined with a static argument list.
    FixtureBuilderArgs,
    /// Fixture builder fed from an eager generator.
    FixtureBuilderGenerator,
    /// Fixture builder fed from a lazy generator.
    FixtureBuilderLazyGenerator,
}

impl Shape {
    /// Returns the string representation of the shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Simple => "simple",
            Shape::Args => "args",
            Shape::Fixture => "fixture",
            Shape::FixtureArgs => "fixture-args",
            Shape::Generator => "generator",
            Shape::LazyGenerator => "lazy-generator",
            Shape::FixtureGenerator => "fixture-generator",
            Shape::FixtureLazyGenerator => "fixture-lazy-generator",
            Shape::FixtureBuilder => "fixture-builder",
            Shape::FixtureBuilderArgs => "fixture-builder-args",
            Shape::FixtureBuilderGenerator => "fixture-builder-generator",
            Shape::FixtureBuilderLazyGenerator => "fixture-builder-lazy-generator",
        }
    }

    /// All shapes in the registry, in registry order.
    pub fn all() -> &'static [Shape] {
        Framework::Sltbench.supported_shapes()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for template registry lookups.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// The requested (framework, shape) pair is outside the support matrix.
    ///
    /// Lazy generators, for instance, are only meaningful for sltbench; the
    /// other frameworks never receive them.
    #[error("{framework} does not support the '{shape}' benchmark shape")]
    UnsupportedCombination {
        /// Framework the unit was requested for.
        framework: Framework,
        /// Shape that framework cannot express.
        shape: Shape,
    },
}

/// Error type for report rendering and persistence.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// An I/O error occurred while persisting the report.
    ///
    /// The report has already been printed to stdout by the time persistence
    /// runs, so shown output is never lost.
    #[error("I/O error: {0}. Check file paths and permissions")]
    Io(#[from] std::io::Error),

    /// JSON serialization of the measurement failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
