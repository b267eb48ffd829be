//! Placeholder bridge to engine-rendered games.
//!
//! Bridge Builders and Echoes of Sound are rendered by an external game
//! engine. This module only simulates the asynchronous load and forwards
//! opaque message envelopes; the real integration protocol is out of
//! scope.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Games rendered by the external engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum ExternalGame {
    /// Cooperative bridge construction.
    BridgeBuilders,
    /// Sound-pattern matching.
    EchoesOfSound,
}

impl ExternalGame {
    /// Display label for this game.
    pub fn label(self) -> &'static str {
        match self {
            ExternalGame::BridgeBuilders => "Bridge Builders",
            ExternalGame::EchoesOfSound => "Echoes of Sound",
        }
    }
}

/// Load state of the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeStatus {
    /// Engine still loading; envelopes are rejected.
    Loading,
    /// Engine ready; envelopes are forwarded.
    Ready,
}

/// Errors raised by the bridge.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BridgeError {
    /// The engine has not finished loading.
    #[display("Engine is still loading")]
    NotReady,
}

/// Stub bridge to the external engine.
///
/// Simulated load delay, then envelope pass-through with local logging
/// only.
#[derive(Debug)]
pub struct EngineBridge {
    game: ExternalGame,
    status: BridgeStatus,
    forwarded: u64,
}

impl EngineBridge {
    /// Simulated engine startup latency.
    const LOAD_DELAY: Duration = Duration::from_millis(750);

    /// Creates a bridge in the loading state.
    #[instrument]
    pub fn new(game: ExternalGame) -> Self {
        info!(game = game.label(), "Opening engine bridge");
        Self {
            game,
            status: BridgeStatus::Loading,
            forwarded: 0,
        }
    }

    /// Simulates the asynchronous engine load.
    #[instrument(skip(self), fields(game = self.game.label()))]
    pub async fn load(&mut self) {
        if self.status == BridgeStatus::Ready {
            return;
        }
        tokio::time::sleep(Self::LOAD_DELAY).await;
        self.status = BridgeStatus::Ready;
        info!(game = self.game.label(), "Engine ready");
    }

    /// Forwards one opaque envelope to the engine.
    ///
    /// The payload is not interpreted here; it belongs to the engine
    /// protocol.
    #[instrument(skip(self, envelope))]
    pub fn post(&mut self, envelope: serde_json::Value) -> Result<(), BridgeError> {
        if self.status != BridgeStatus::Ready {
            return Err(BridgeError::NotReady);
        }
        self.forwarded += 1;
        debug!(game = self.game.label(), %envelope, "Envelope forwarded");
        Ok(())
    }

    /// Which game this bridge hosts.
    pub fn game(&self) -> ExternalGame {
        self.game
    }

    /// Current load state.
    pub fn status(&self) -> BridgeStatus {
        self.status
    }

    /// Envelopes forwarded so far.
    pub fn forwarded(&self) -> u64 {
        self.forwarded
    }
}
