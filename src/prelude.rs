//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the alir crate. Import this
//! module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust
//! use alir::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let generator = Generator::new();
//! let diagram = generator.generate_from_text("1. Mulai shift\n2. Catat penjualan")?;
//! assert_eq!(diagram.nodes.len(), diagram.steps.len());
//! # Ok(())
//! # }
//! ```

// Generation pipeline
pub use crate::generator::{Generator, GeneratorBuilder};
pub use crate::segment::segment_lines;

// Canonical diagram model
pub use crate::diagram::{
    Diagram, EDGE_LABEL, Edge, Node, NodeShape, Step, StepCategory, canonicalize,
};

// Classification configuration
pub use crate::classify::KeywordTable;

// Write policy
pub use crate::policy::{DiagramChange, SuppliedDiagram, WriteOutcome};

// Error types
pub use crate::error::GenerateError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
