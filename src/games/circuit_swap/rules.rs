//! Topology and scoring rules for Circuit Swap.

use super::game::CircuitSwap;
use super::types::{CircuitEdge, CircuitNode, CircuitSchematic, EdgeKind, Visibility};
use crate::session::{Invariant, InvariantViolation};

/// Score weight on remaining seconds.
const TIME_WEIGHT: u32 = 2;
/// Score awarded per live section.
const SECTION_BONUS: u32 = 100;
/// Flat bonus for a fully live board.
const COMPLETION_BONUS: u32 = 200;
/// Sections on the standard board.
pub const SECTION_COUNT: usize = 4;

/// Switch positions a fresh board starts with.
///
/// Two of the four start opposite their required setting, so the tech
/// has real work on every section.
pub const INITIAL_SWITCHES: [bool; SECTION_COUNT] = [false, false, true, true];

/// The fixed five-node, four-edge board used by every session.
///
/// The schematic keeper (slot A) sees every edge; the circuit tech
/// (slot B) only the two physically exposed lines.
pub fn standard_schematic() -> CircuitSchematic {
    let nodes = vec![
        CircuitNode::PowerCell,
        CircuitNode::Relay,
        CircuitNode::LogicCore,
        CircuitNode::MemoryBank,
        CircuitNode::Display,
    ];
    let edges = vec![
        CircuitEdge {
            from: CircuitNode::PowerCell,
            to: CircuitNode::Relay,
            kind: EdgeKind::Power,
            visibility: Visibility::new(true, true),
            requires_switch_on: true,
        },
        CircuitEdge {
            from: CircuitNode::Relay,
            to: CircuitNode::LogicCore,
            kind: EdgeKind::Data,
            visibility: Visibility::new(true, false),
            requires_switch_on: false,
        },
        CircuitEdge {
            from: CircuitNode::LogicCore,
            to: CircuitNode::MemoryBank,
            kind: EdgeKind::Control,
            visibility: Visibility::new(true, false),
            requires_switch_on: true,
        },
        CircuitEdge {
            from: CircuitNode::MemoryBank,
            to: CircuitNode::Display,
            kind: EdgeKind::Ground,
            visibility: Visibility::new(true, true),
            requires_switch_on: false,
        },
    ];
    CircuitSchematic::new(nodes, edges)
}

/// Weighted final score.
///
/// `time_remaining * 2 + completed * 100`, plus a flat 200 when all four
/// sections are live.
pub fn score(time_remaining: u32, completed: usize) -> u32 {
    let completion = if completed == SECTION_COUNT {
        COMPLETION_BONUS
    } else {
        0
    };
    time_remaining * TIME_WEIGHT + completed as u32 * SECTION_BONUS + completion
}

/// Invariant: progress vectors stay aligned with the schematic.
pub struct SectionsAligned;

impl Invariant<CircuitSwap> for SectionsAligned {
    fn holds(board: &CircuitSwap) -> bool {
        let sections = board.schematic().section_count();
        board.wires_connected().len() == sections && board.switches_on().len() == sections
    }

    fn description() -> &'static str {
        "Wire and switch vectors match the schematic's section count"
    }
}

/// Asserts board invariants after a mutation (debug builds).
pub fn assert_invariants(board: &CircuitSwap) {
    debug_assert!(
        SectionsAligned::holds(board),
        "{}",
        InvariantViolation::new(SectionsAligned::description())
    );
}
