use chrono::Utc;
use itertools::Itertools;

use crate::classify::KeywordTable;
use crate::diagram::{Diagram, EDGE_LABEL, Edge, Node, Step, StepCategory};
use crate::error::GenerateError;
use crate::segment::segment_lines;

/// The workflow diagram generator.
///
/// Holds the classification keyword table and runs the full pipeline:
/// segmentation, classification, and graph construction. Construction goes
/// through [`Generator::builder`] when the default keyword table needs
/// adjusting.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    table: KeywordTable,
}

/// Configures a [`Generator`] before use.
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    table: KeywordTable,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the keyword table wholesale.
    pub fn with_table(mut self, table: KeywordTable) -> Self {
        self.table = table;
        self
    }

    /// Adds keywords for a category, at the lowest priority if the category
    /// is new to the table.
    pub fn with_keywords<I, S>(mut self, category: StepCategory, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table.add_rule(category, keywords);
        self
    }

    pub fn build(self) -> Generator {
        Generator { table: self.table }
    }
}

impl Generator {
    /// A generator with the default keyword table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Generates a diagram from raw workflow text.
    ///
    /// Runs segmentation, classification, and graph construction. Fails only
    /// when `text` trims to empty; text whose lines all carry nothing but
    /// markers yields a valid empty diagram instead.
    ///
    /// Generation is reproducible: the same text always yields the same
    /// steps, nodes, and edges (ids are derived from position), differing
    /// only in `generated_at`.
    pub fn generate_from_text(&self, text: &str) -> Result<Diagram, GenerateError> {
        if text.trim().is_empty() {
            return Err(GenerateError::EmptyInput);
        }
        Ok(self.build_diagram(segment_lines(text)))
    }

    /// Normalizes an externally supplied diagram payload; see
    /// [`crate::diagram::canonicalize`].
    pub fn canonicalize(&self, raw: &serde_json::Value) -> Diagram {
        crate::diagram::canonicalize(raw)
    }

    /// Builds the canonical diagram from segmented descriptions.
    ///
    /// Steps are numbered contiguously from 1 with ids `step_<number>`,
    /// nodes are the index-aligned projection of the steps, and edges chain
    /// each step to its successor.
    pub(crate) fn build_diagram(&self, descriptions: Vec<String>) -> Diagram {
        let steps: Vec<Step> = descriptions
            .into_iter()
            .enumerate()
            .map(|(index, description)| {
                let number = index as u32 + 1;
                Step {
                    id: format!("step_{number}"),
                    number,
                    category: self.table.classify(&description),
                    description,
                }
            })
            .collect();

        let nodes = steps.iter().map(Node::from_step).collect();

        let edges = steps
            .iter()
            .tuple_windows()
            .map(|(from, to)| Edge {
                from: from.id.clone(),
                to: to.id.clone(),
                label: EDGE_LABEL.to_string(),
            })
            .collect();

        Diagram {
            steps,
            nodes,
            edges,
            generated_at: Utc::now(),
        }
    }
}
