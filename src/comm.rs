//! Communication panel boundary: message envelopes and the local sink.
//!
//! Delivery is out of scope - the sink is where a transport would plug
//! in. The default implementation only logs, matching the app's current
//! local-only behavior.

use crate::games::{GameKind, PlayerSlot};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Canned messages offered by the quick-send panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum QuickMessage {
    /// "Yes"
    Yes,
    /// "No"
    No,
    /// "Wait"
    Wait,
    /// "Ready"
    Ready,
    /// "Try again"
    TryAgain,
    /// "Next color" (lock sessions)
    NextColor,
    /// "Go back" (maze sessions)
    GoBack,
    /// "Other way" (maze sessions)
    OtherWay,
    /// "Swap that wire" (circuit sessions)
    SwapWire,
    /// "Flip the switch" (circuit sessions)
    FlipSwitch,
}

impl QuickMessage {
    /// Display text for this message.
    pub fn text(self) -> &'static str {
        match self {
            QuickMessage::Yes => "Yes",
            QuickMessage::No => "No",
            QuickMessage::Wait => "Wait",
            QuickMessage::Ready => "Ready",
            QuickMessage::TryAgain => "Try again",
            QuickMessage::NextColor => "Next color",
            QuickMessage::GoBack => "Go back",
            QuickMessage::OtherWay => "Other way",
            QuickMessage::SwapWire => "Swap that wire",
            QuickMessage::FlipSwitch => "Flip the switch",
        }
    }

    /// The quick-send catalog shown during a session of the given kind.
    pub fn catalog(kind: GameKind) -> &'static [QuickMessage] {
        match kind {
            GameKind::ColorCodeLock => &[
                QuickMessage::Yes,
                QuickMessage::No,
                QuickMessage::Wait,
                QuickMessage::Ready,
                QuickMessage::TryAgain,
                QuickMessage::NextColor,
            ],
            GameKind::MirrorMaze => &[
                QuickMessage::Yes,
                QuickMessage::No,
                QuickMessage::Wait,
                QuickMessage::Ready,
                QuickMessage::TryAgain,
                QuickMessage::GoBack,
                QuickMessage::OtherWay,
            ],
            GameKind::CircuitSwap => &[
                QuickMessage::Yes,
                QuickMessage::No,
                QuickMessage::Wait,
                QuickMessage::Ready,
                QuickMessage::TryAgain,
                QuickMessage::SwapWire,
                QuickMessage::FlipSwitch,
            ],
        }
    }
}

/// Body of a panel message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "body", rename_all = "snake_case")]
pub enum MessageBody {
    /// Free text typed by the player.
    Text(String),
    /// One of the canned quick messages.
    Quick(QuickMessage),
}

/// A message sent from one player's panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ChatMessage {
    /// The sending slot.
    pub sender: PlayerSlot,
    /// Message content.
    pub body: MessageBody,
}

impl ChatMessage {
    /// Display text of the message body.
    pub fn text(&self) -> &str {
        match &self.body {
            MessageBody::Text(text) => text,
            MessageBody::Quick(quick) => quick.text(),
        }
    }
}

/// Where panel messages go.
#[async_trait]
pub trait CommSink: Send + Sync {
    /// Accepts one message from a player's panel.
    async fn send(&self, message: ChatMessage);
}

/// Local-only sink: messages are logged and dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl CommSink for LogSink {
    #[instrument(skip(self))]
    async fn send(&self, message: ChatMessage) {
        info!(sender = ?message.sender, text = message.text(), "Panel message");
    }
}
