//! Session-facing state and mutations for Circuit Swap.

use super::rules;
use super::types::{CircuitEdge, CircuitSchematic, CircuitSection};
use crate::config::SessionConfig;
use crate::games::{Applied, GameKind, MiniGame, PlayerSlot};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A user gesture on the circuit board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "section", rename_all = "snake_case")]
pub enum CircuitAction {
    /// Connect or disconnect the wire of one section.
    ToggleWire(usize),
    /// Flip the switch of one section.
    ToggleSwitch(usize),
}

/// Circuit Swap puzzle and progress.
///
/// The schematic is the immutable target; wires and switches are the
/// progress, indexed by section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitSwap {
    schematic: CircuitSchematic,
    wires_connected: Vec<bool>,
    switches_on: Vec<bool>,
}

impl CircuitSwap {
    /// Schematic edges visible to the given slot.
    ///
    /// Edge visibility is asymmetric: the schematic keeper sees every
    /// edge, the circuit tech only the physically exposed ones.
    pub fn visible_edges(&self, slot: PlayerSlot) -> Vec<CircuitEdge> {
        self.schematic
            .edges()
            .iter()
            .filter(|edge| edge.visibility.visible_to(slot))
            .copied()
            .collect()
    }

    /// The full schematic, visible only to the keeper (slot A).
    pub fn schematic_for(&self, slot: PlayerSlot) -> Option<&CircuitSchematic> {
        match slot {
            PlayerSlot::A => Some(&self.schematic),
            PlayerSlot::B => None,
        }
    }

    /// Live section views (visible to both players).
    pub fn sections(&self) -> Vec<CircuitSection> {
        self.schematic
            .edges()
            .iter()
            .enumerate()
            .map(|(index, edge)| CircuitSection {
                index,
                edge: *edge,
                wire_connected: self.wires_connected[index],
                switch_on: self.switches_on[index],
            })
            .collect()
    }

    /// Indices of sections currently complete.
    pub fn completed_sections(&self) -> Vec<usize> {
        self.sections()
            .iter()
            .filter(|s| s.is_complete())
            .map(|s| s.index)
            .collect()
    }

    /// Total number of sections.
    pub fn section_count(&self) -> usize {
        self.schematic.section_count()
    }

    pub(crate) fn schematic(&self) -> &CircuitSchematic {
        &self.schematic
    }

    pub(crate) fn wires_connected(&self) -> &[bool] {
        &self.wires_connected
    }

    pub(crate) fn switches_on(&self) -> &[bool] {
        &self.switches_on
    }
}

impl MiniGame for CircuitSwap {
    type Action = CircuitAction;

    // The topology is static in the current design; `rng` stays threaded
    // so a randomized generator slots in without an interface change.
    #[instrument(skip(config, _rng))]
    fn generate<R: Rng + ?Sized>(config: &SessionConfig, _rng: &mut R) -> Self {
        let schematic = rules::standard_schematic();
        let sections = schematic.section_count();
        debug!(
            sections,
            time_limit = *config.circuit_swap().time_limit(),
            "Laying out circuit board"
        );
        Self {
            schematic,
            wires_connected: vec![false; sections],
            switches_on: rules::INITIAL_SWITCHES.to_vec(),
        }
    }

    fn initial_time(config: &SessionConfig) -> u32 {
        *config.circuit_swap().time_limit()
    }

    fn kind(&self) -> GameKind {
        GameKind::CircuitSwap
    }

    #[instrument(skip(self))]
    fn apply(&mut self, action: &CircuitAction) -> Applied {
        let applied = match *action {
            CircuitAction::ToggleWire(index) => match self.wires_connected.get_mut(index) {
                Some(wire) => {
                    *wire = !*wire;
                    Applied::Committed
                }
                None => Applied::Rejected,
            },
            CircuitAction::ToggleSwitch(index) => match self.switches_on.get_mut(index) {
                Some(switch) => {
                    *switch = !*switch;
                    Applied::Committed
                }
                None => Applied::Rejected,
            },
        };
        rules::assert_invariants(self);
        applied
    }

    fn take_hint(&mut self) -> Applied {
        // No hint budget on the circuit board.
        Applied::Rejected
    }

    fn is_solved(&self) -> bool {
        self.completed_sections().len() == self.section_count()
    }

    fn is_exhausted(&self) -> bool {
        // Only the countdown can fail a circuit session.
        false
    }

    fn score(&self, time_remaining: u32) -> u32 {
        rules::score(time_remaining, self.completed_sections().len())
    }

    fn describe_progress(&self) -> String {
        format!(
            "{}/{} sections live",
            self.completed_sections().len(),
            self.section_count()
        )
    }
}
