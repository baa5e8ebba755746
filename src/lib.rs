//! # Alir - Workflow Diagram Generation Engine
//!
//! **Alir** turns a free-text, multi-line description of a daily business
//! workflow into a structured flowchart: an ordered list of classified
//! steps, a node list, and an edge list, ready for rendering. It also
//! normalizes diagrams computed elsewhere (a browser preview, an older
//! client) into the same canonical shape, and decides on every write of the
//! owning record whether the stored diagram should be kept, replaced, or
//! cleared.
//!
//! ## Core Workflow
//!
//! 1.  **Segment**: raw text is split into candidate step lines, with list
//!     markers (`1.`, `-`, `*`) stripped.
//! 2.  **Classify**: each line is assigned a [`StepCategory`](diagram::StepCategory)
//!     by a priority-ordered keyword table.
//! 3.  **Build**: the classified steps become a diagram — nodes projected
//!     through a fixed category→shape lookup and edges chaining consecutive
//!     steps.
//!
//! Alternatively, an externally supplied diagram payload goes through
//! [`canonicalize`](diagram::canonicalize), which fills defaults instead of
//! rejecting malformed input. The regeneration policy
//! ([`Generator::decide_on_write`](generator::Generator)) sits above both
//! paths.
//!
//! ## Quick Start
//!
//! ```rust
//! use alir::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let generator = Generator::new();
//!
//!     let diagram =
//!         generator.generate_from_text("1. Buka toko\n2. Layani pelanggan\n3. Tutup toko")?;
//!
//!     assert_eq!(diagram.steps.len(), 3);
//!     assert_eq!(diagram.edges.len(), 2);
//!     assert_eq!(diagram.steps[1].category, StepCategory::Customer);
//!
//!     println!("{}", serde_json::to_string_pretty(&diagram)?);
//!     Ok(())
//! }
//! ```
//!
//! Custom vocabularies go through the builder:
//!
//! ```rust
//! use alir::prelude::*;
//!
//! let generator = Generator::builder()
//!     .with_keywords(StepCategory::Document, ["invoice", "faktur"])
//!     .build();
//!
//! let diagram = generator.generate_from_text("Kirim invoice ke pembeli").unwrap();
//! // "invoice" is checked after the built-in rules; "pembeli" wins here.
//! assert_eq!(diagram.steps[0].category, StepCategory::Customer);
//! ```

pub mod classify;
pub mod diagram;
pub mod error;
pub mod generator;
pub mod policy;
pub mod prelude;
pub mod segment;
