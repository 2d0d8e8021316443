//! Bus channel catalogue
//!
//! | Channel        | Payload        | Direction    |
//! |----------------|----------------|--------------|
//! | `ready`        | none           | Game → Host  |
//! | `umi`          | wallet handle  | Host → Game  |
//! | `selectedZone` | zone id        | Host → Game  |
//!
//! Scenes may use any other name for their own traffic; the bus does not
//! restrict names to this catalogue.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the bridge emits on a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    GameToHost,
    HostToGame,
}

/// Payload shape a channel is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    Empty,
    Wallet,
    Zone,
}

/// Well-known channels of the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusChannel {
    /// A scene finished its startup work (assets loaded)
    #[serde(rename = "ready")]
    Ready,
    /// Connected wallet session, sent once the game is ready
    #[serde(rename = "umi")]
    Umi,
    /// Zone chosen by the host, sent once right before the game is built
    #[serde(rename = "selectedZone")]
    SelectedZone,
}

impl BusChannel {
    pub const ALL: [BusChannel; 3] = [BusChannel::Ready, BusChannel::Umi, BusChannel::SelectedZone];

    pub fn as_str(self) -> &'static str {
        match self {
            BusChannel::Ready => "ready",
            BusChannel::Umi => "umi",
            BusChannel::SelectedZone => "selectedZone",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            BusChannel::Ready => Direction::GameToHost,
            BusChannel::Umi | BusChannel::SelectedZone => Direction::HostToGame,
        }
    }

    pub fn payload_kind(self) -> PayloadKind {
        match self {
            BusChannel::Ready => PayloadKind::Empty,
            BusChannel::Umi => PayloadKind::Wallet,
            BusChannel::SelectedZone => PayloadKind::Zone,
        }
    }

    /// Look up a catalogue entry by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|channel| channel.as_str() == name)
    }
}

impl fmt::Display for BusChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name handlers are registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventName(Cow<'static, str>);

impl EventName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Catalogue entry for this name, if it is one of the bridge channels.
    pub fn channel(&self) -> Option<BusChannel> {
        BusChannel::from_name(&self.0)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BusChannel> for EventName {
    fn from(channel: BusChannel) -> Self {
        Self(Cow::Borrowed(channel.as_str()))
    }
}

impl From<&'static str> for EventName {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names_match_catalogue() {
        assert_eq!(BusChannel::Ready.as_str(), "ready");
        assert_eq!(BusChannel::Umi.as_str(), "umi");
        assert_eq!(BusChannel::SelectedZone.as_str(), "selectedZone");
    }

    #[test]
    fn directions() {
        assert_eq!(BusChannel::Ready.direction(), Direction::GameToHost);
        assert_eq!(BusChannel::Umi.direction(), Direction::HostToGame);
        assert_eq!(BusChannel::SelectedZone.direction(), Direction::HostToGame);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&BusChannel::SelectedZone).expect("serialize");
        assert_eq!(json, "\"selectedZone\"");
        let back: BusChannel = serde_json::from_str("\"umi\"").expect("deserialize");
        assert_eq!(back, BusChannel::Umi);
    }

    #[test]
    fn event_names_from_any_source_compare_equal() {
        let from_channel = EventName::from(BusChannel::Ready);
        let from_static = EventName::from("ready");
        let from_owned = EventName::from(String::from("ready"));

        assert_eq!(from_channel, from_static);
        assert_eq!(from_static, from_owned);
        assert_eq!(from_owned.channel(), Some(BusChannel::Ready));
        assert_eq!(EventName::from("score").channel(), None);
    }
}
