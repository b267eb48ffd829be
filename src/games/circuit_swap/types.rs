//! Core domain types for Circuit Swap.

use crate::games::PlayerSlot;
use serde::{Deserialize, Serialize};

/// The five fixed nodes of the circuit board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum CircuitNode {
    /// Power cell feeding the board.
    PowerCell,
    /// Relay between power and logic.
    Relay,
    /// Logic core.
    LogicCore,
    /// Memory bank.
    MemoryBank,
    /// Output display.
    Display,
}

impl CircuitNode {
    /// Display label for this node.
    pub fn label(self) -> &'static str {
        match self {
            CircuitNode::PowerCell => "Power Cell",
            CircuitNode::Relay => "Relay",
            CircuitNode::LogicCore => "Logic Core",
            CircuitNode::MemoryBank => "Memory Bank",
            CircuitNode::Display => "Display",
        }
    }
}

/// Edge type on the schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Power line.
    Power,
    /// Data line.
    Data,
    /// Control line.
    Control,
    /// Ground line.
    Ground,
}

/// Which player slots can see a schematic edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Visibility {
    /// Visible to slot A (the schematic keeper).
    pub a: bool,
    /// Visible to slot B (the circuit tech).
    pub b: bool,
}

impl Visibility {
    /// True if the edge is visible to the given slot.
    pub fn visible_to(self, slot: PlayerSlot) -> bool {
        match slot {
            PlayerSlot::A => self.a,
            PlayerSlot::B => self.b,
        }
    }
}

/// One typed edge of the schematic, with its required switch setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitEdge {
    /// Source node.
    pub from: CircuitNode,
    /// Target node.
    pub to: CircuitNode,
    /// Edge type.
    pub kind: EdgeKind,
    /// Per-slot visibility flags.
    pub visibility: Visibility,
    /// Switch setting this section needs to go live.
    pub requires_switch_on: bool,
}

/// The immutable circuit target: nodes plus typed edges.
///
/// One schematic edge corresponds to one section of the circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitSchematic {
    nodes: Vec<CircuitNode>,
    edges: Vec<CircuitEdge>,
}

impl CircuitSchematic {
    /// Creates a schematic from its parts.
    pub fn new(nodes: Vec<CircuitNode>, edges: Vec<CircuitEdge>) -> Self {
        Self { nodes, edges }
    }

    /// All board nodes.
    pub fn nodes(&self) -> &[CircuitNode] {
        &self.nodes
    }

    /// All schematic edges.
    pub fn edges(&self) -> &[CircuitEdge] {
        &self.edges
    }

    /// Number of circuit sections.
    pub fn section_count(&self) -> usize {
        self.edges.len()
    }
}

/// Live view of one section: the schematic edge plus current progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitSection {
    /// Section index.
    pub index: usize,
    /// The schematic edge backing this section.
    pub edge: CircuitEdge,
    /// Whether the wire is currently connected.
    pub wire_connected: bool,
    /// Whether the switch is currently on.
    pub switch_on: bool,
}

impl CircuitSection {
    /// True when the wire is connected and the switch matches the target.
    pub fn is_complete(&self) -> bool {
        self.wire_connected && self.switch_on == self.edge.requires_switch_on
    }
}
