use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The constant label attached to every transition edge.
pub const EDGE_LABEL: &str = "Lanjut";

/// The closed set of categories a workflow step can be classified as.
///
/// The category is a classification hint for rendering; it never changes the
/// graph topology (a `Decision` step still has exactly one outgoing edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepCategory {
    Start,
    End,
    #[default]
    Process,
    Decision,
    Preparation,
    Customer,
    Document,
}

impl StepCategory {
    /// The flowchart shape a node of this category renders with.
    pub fn shape(self) -> NodeShape {
        match self {
            StepCategory::Start | StepCategory::End => NodeShape::Circle,
            StepCategory::Decision => NodeShape::Diamond,
            StepCategory::Preparation => NodeShape::RoundRect,
            StepCategory::Customer => NodeShape::Stadium,
            StepCategory::Document => NodeShape::Document,
            StepCategory::Process => NodeShape::Rect,
        }
    }

    /// The wire name of this category (`"process"`, `"round-rect"` style).
    pub fn as_str(self) -> &'static str {
        match self {
            StepCategory::Start => "start",
            StepCategory::End => "end",
            StepCategory::Process => "process",
            StepCategory::Decision => "decision",
            StepCategory::Preparation => "preparation",
            StepCategory::Customer => "customer",
            StepCategory::Document => "document",
        }
    }
}

impl std::fmt::Display for StepCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The flowchart shape assigned to a node, derived from its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeShape {
    Circle,
    Diamond,
    RoundRect,
    Stadium,
    Document,
    Rect,
}

impl std::fmt::Display for NodeShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeShape::Circle => "circle",
            NodeShape::Diamond => "diamond",
            NodeShape::RoundRect => "round-rect",
            NodeShape::Stadium => "stadium",
            NodeShape::Document => "document",
            NodeShape::Rect => "rect",
        };
        f.write_str(name)
    }
}

/// One parsed unit of the workflow description.
///
/// `number` is the 1-based position in the diagram and is strictly increasing
/// and contiguous. `id` is derived from the position (`step_<number>`), so it
/// is stable across regenerations of identical text but not across edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub number: u32,
    pub description: String,
    #[serde(rename = "type", alias = "category")]
    pub category: StepCategory,
}

/// The render-facing projection of a [`Step`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(rename = "type", alias = "category")]
    pub category: StepCategory,
    pub shape: NodeShape,
}

impl Node {
    /// Projects a step into its node, deriving the shape from the category.
    pub fn from_step(step: &Step) -> Self {
        Node {
            id: step.id.clone(),
            label: step.description.clone(),
            category: step.category,
            shape: step.category.shape(),
        }
    }
}

/// A directed transition between two consecutive steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// The aggregate diagram artifact persisted on the owning record.
///
/// Invariants: `nodes.len() == steps.len()`, index-aligned;
/// `edges.len() == steps.len().saturating_sub(1)`, forming one linear chain.
/// A diagram with zero steps is a valid "empty" diagram, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    pub steps: Vec<Step>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(with = "rfc3339_millis")]
    pub generated_at: DateTime<Utc>,
}

impl Diagram {
    /// An empty diagram stamped with the current time.
    pub fn empty() -> Self {
        Diagram {
            steps: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Structural equality, ignoring `generated_at`.
    ///
    /// Two generations from the same source text compare equal under this,
    /// even though their timestamps differ.
    pub fn same_structure(&self, other: &Diagram) -> bool {
        self.steps == other.steps && self.nodes == other.nodes && self.edges == other.edges
    }
}

/// RFC 3339 timestamps with fixed millisecond precision
/// (`2024-01-01T00:00:00.000Z`), matching the stored wire format.
pub(crate) mod rfc3339_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
