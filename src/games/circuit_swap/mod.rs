//! Circuit Swap: one player holds the schematic, the other reroutes wires
//! and switches until every section of the circuit is live.

mod game;
mod rules;
mod types;

pub use game::{CircuitAction, CircuitSwap};
pub use types::{
    CircuitEdge, CircuitNode, CircuitSchematic, CircuitSection, EdgeKind, Visibility,
};
