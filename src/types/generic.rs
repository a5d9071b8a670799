//! Polymorphic response items keyed by `response_type`.
//!
//! [`DialogNodeOutputGeneric`] is what a dialog node is configured to return;
//! [`RuntimeResponseGeneric`] is what a `message` call actually returns. Both
//! read the `response_type` discriminator first and then parse only the fields of
//! that kind. A discriminator this crate does not know (or a missing one) becomes
//! the `Unknown` variant, which keeps the raw fields so the item survives a
//! round trip unchanged.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::common::JsonMap;
use super::message::{MessageInput, RuntimeEntity, RuntimeIntent};

/// Documented `response_type` discriminators.
pub mod response_type {
    pub const TEXT: &str = "text";
    pub const PAUSE: &str = "pause";
    pub const IMAGE: &str = "image";
    pub const OPTION: &str = "option";
    pub const CONNECT_TO_AGENT: &str = "connect_to_agent";
    pub const SEARCH_SKILL: &str = "search_skill";
    pub const SUGGESTION: &str = "suggestion";
    pub const CHANNEL_TRANSFER: &str = "channel_transfer";
}

const TAG: &str = "response_type";

/// Channel a response item is restricted to (e.g. `chat`, `slack`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseGenericChannel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Documented values of [`DialogText::selection_policy`].
pub mod selection_policy {
    pub const SEQUENTIAL: &str = "sequential";
    pub const RANDOM: &str = "random";
    pub const MULTILINE: &str = "multiline";
}

/// Text variations configured on a dialog node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogText {
    #[serde(default)]
    pub values: Vec<TextValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Text returned by a message call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pause {
    /// Milliseconds.
    pub time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Documented values of [`OptionList::preference`].
pub mod option_preference {
    pub const DROPDOWN: &str = "dropdown";
    pub const BUTTON: &str = "button";
}

/// A list of choices; selecting one sends its `value.input` back as the next message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionList {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
    #[serde(default)]
    pub options: Vec<OptionElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionElement {
    pub label: String,
    pub value: OptionValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAvailabilityMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Hand-off to a human agent as configured on a dialog node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogConnectToAgent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_to_human_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_available: Option<AgentAvailabilityMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_unavailable: Option<AgentAvailabilityMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_info: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Hand-off to a human agent as returned at runtime; adds the triggering topic and node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConnectToAgent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_to_human_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_available: Option<AgentAvailabilityMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_unavailable: Option<AgentAvailabilityMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_info: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Documented values of [`SearchSkill::query_type`].
pub mod search_query_type {
    pub const NATURAL_LANGUAGE: &str = "natural_language";
    pub const DISCOVERY_QUERY_LANGUAGE: &str = "discovery_query_language";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSkill {
    pub query: String,
    pub query_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Disambiguation choices offered when several nodes could answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionList {
    pub title: String,
    #[serde(default)]
    pub suggestions: Vec<DialogSuggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogSuggestion {
    pub label: String,
    #[serde(default)]
    pub value: OptionValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelTransfer {
    pub message_to_user: String,
    #[serde(default)]
    pub transfer_info: JsonMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Base shape for a `response_type` this crate does not model.
///
/// `fields` holds every other key. A `response_type` that is not a string, or a
/// `channels` value that is not a channel list, stays in `fields` as raw JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnknownGeneric {
    pub response_type: Option<String>,
    pub channels: Option<Vec<ResponseGenericChannel>>,
    pub fields: JsonMap,
}

impl UnknownGeneric {
    fn from_map(mut map: JsonMap) -> Self {
        let response_type = match map.remove(TAG) {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(other) => {
                map.insert(TAG.to_string(), other);
                None
            }
            None => None,
        };
        // Channels are lifted out only when they convert back to the same JSON.
        let channels = map.get("channels").and_then(|raw| {
            let parsed: Vec<ResponseGenericChannel> = serde_json::from_value(raw.clone()).ok()?;
            (serde_json::to_value(&parsed).ok()? == *raw).then_some(parsed)
        });
        if channels.is_some() {
            map.remove("channels");
        }
        Self {
            response_type,
            channels,
            fields: map,
        }
    }

    fn to_map(&self) -> Result<JsonMap, serde_json::Error> {
        let mut map = self.fields.clone();
        if let Some(channels) = &self.channels {
            map.insert("channels".to_string(), serde_json::to_value(channels)?);
        }
        if let Some(kind) = &self.response_type {
            map.insert(TAG.to_string(), serde_json::Value::String(kind.clone()));
        }
        Ok(map)
    }
}

/// Response item configured on a dialog node.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogNodeOutputGeneric {
    Text(DialogText),
    Pause(Pause),
    Image(Image),
    Option(OptionList),
    ConnectToAgent(DialogConnectToAgent),
    SearchSkill(SearchSkill),
    ChannelTransfer(ChannelTransfer),
    Unknown(UnknownGeneric),
}

impl DialogNodeOutputGeneric {
    pub fn text<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DialogNodeOutputGeneric::Text(DialogText {
            values: values
                .into_iter()
                .map(|s| TextValue {
                    text: Some(s.into()),
                })
                .collect(),
            selection_policy: None,
            delimiter: None,
            channels: None,
        })
    }

    pub fn response_type(&self) -> &str {
        match self {
            Self::Text(_) => response_type::TEXT,
            Self::Pause(_) => response_type::PAUSE,
            Self::Image(_) => response_type::IMAGE,
            Self::Option(_) => response_type::OPTION,
            Self::ConnectToAgent(_) => response_type::CONNECT_TO_AGENT,
            Self::SearchSkill(_) => response_type::SEARCH_SKILL,
            Self::ChannelTransfer(_) => response_type::CHANNEL_TRANSFER,
            Self::Unknown(u) => u.response_type.as_deref().unwrap_or_default(),
        }
    }

    pub fn channels(&self) -> Option<&[ResponseGenericChannel]> {
        match self {
            Self::Text(v) => v.channels.as_deref(),
            Self::Pause(v) => v.channels.as_deref(),
            Self::Image(v) => v.channels.as_deref(),
            Self::Option(v) => v.channels.as_deref(),
            Self::ConnectToAgent(v) => v.channels.as_deref(),
            Self::SearchSkill(v) => v.channels.as_deref(),
            Self::ChannelTransfer(v) => v.channels.as_deref(),
            Self::Unknown(v) => v.channels.as_deref(),
        }
    }
}

impl Serialize for DialogNodeOutputGeneric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map = match self {
            Self::Text(v) => tagged(response_type::TEXT, v),
            Self::Pause(v) => tagged(response_type::PAUSE, v),
            Self::Image(v) => tagged(response_type::IMAGE, v),
            Self::Option(v) => tagged(response_type::OPTION, v),
            Self::ConnectToAgent(v) => tagged(response_type::CONNECT_TO_AGENT, v),
            Self::SearchSkill(v) => tagged(response_type::SEARCH_SKILL, v),
            Self::ChannelTransfer(v) => tagged(response_type::CHANNEL_TRANSFER, v),
            Self::Unknown(v) => v.to_map(),
        }
        .map_err(S::Error::custom)?;
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DialogNodeOutputGeneric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = JsonMap::deserialize(deserializer)?;
        let kind = discriminator(&map);
        let parsed = match kind.as_deref() {
            Some(response_type::TEXT) => untagged(map).map(Self::Text),
            Some(response_type::PAUSE) => untagged(map).map(Self::Pause),
            Some(response_type::IMAGE) => untagged(map).map(Self::Image),
            Some(response_type::OPTION) => untagged(map).map(Self::Option),
            Some(response_type::CONNECT_TO_AGENT) => untagged(map).map(Self::ConnectToAgent),
            Some(response_type::SEARCH_SKILL) => untagged(map).map(Self::SearchSkill),
            Some(response_type::CHANNEL_TRANSFER) => untagged(map).map(Self::ChannelTransfer),
            _ => Ok(Self::Unknown(UnknownGeneric::from_map(map))),
        };
        parsed.map_err(D::Error::custom)
    }
}

/// Response item returned by a `message` call.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeResponseGeneric {
    Text(RuntimeText),
    Pause(Pause),
    Image(Image),
    Option(OptionList),
    ConnectToAgent(RuntimeConnectToAgent),
    Suggestion(SuggestionList),
    ChannelTransfer(ChannelTransfer),
    Unknown(UnknownGeneric),
}

impl RuntimeResponseGeneric {
    pub fn response_type(&self) -> &str {
        match self {
            Self::Text(_) => response_type::TEXT,
            Self::Pause(_) => response_type::PAUSE,
            Self::Image(_) => response_type::IMAGE,
            Self::Option(_) => response_type::OPTION,
            Self::ConnectToAgent(_) => response_type::CONNECT_TO_AGENT,
            Self::Suggestion(_) => response_type::SUGGESTION,
            Self::ChannelTransfer(_) => response_type::CHANNEL_TRANSFER,
            Self::Unknown(u) => u.response_type.as_deref().unwrap_or_default(),
        }
    }

    pub fn channels(&self) -> Option<&[ResponseGenericChannel]> {
        match self {
            Self::Text(v) => v.channels.as_deref(),
            Self::Pause(v) => v.channels.as_deref(),
            Self::Image(v) => v.channels.as_deref(),
            Self::Option(v) => v.channels.as_deref(),
            Self::ConnectToAgent(v) => v.channels.as_deref(),
            Self::Suggestion(v) => v.channels.as_deref(),
            Self::ChannelTransfer(v) => v.channels.as_deref(),
            Self::Unknown(v) => v.channels.as_deref(),
        }
    }

    /// The text of a `text` item.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.text.as_str()),
            _ => None,
        }
    }
}

impl Serialize for RuntimeResponseGeneric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map = match self {
            Self::Text(v) => tagged(response_type::TEXT, v),
            Self::Pause(v) => tagged(response_type::PAUSE, v),
            Self::Image(v) => tagged(response_type::IMAGE, v),
            Self::Option(v) => tagged(response_type::OPTION, v),
            Self::ConnectToAgent(v) => tagged(response_type::CONNECT_TO_AGENT, v),
            Self::Suggestion(v) => tagged(response_type::SUGGESTION, v),
            Self::ChannelTransfer(v) => tagged(response_type::CHANNEL_TRANSFER, v),
            Self::Unknown(v) => v.to_map(),
        }
        .map_err(S::Error::custom)?;
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RuntimeResponseGeneric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = JsonMap::deserialize(deserializer)?;
        let kind = discriminator(&map);
        let parsed = match kind.as_deref() {
            Some(response_type::TEXT) => untagged(map).map(Self::Text),
            Some(response_type::PAUSE) => untagged(map).map(Self::Pause),
            Some(response_type::IMAGE) => untagged(map).map(Self::Image),
            Some(response_type::OPTION) => untagged(map).map(Self::Option),
            Some(response_type::CONNECT_TO_AGENT) => untagged(map).map(Self::ConnectToAgent),
            Some(response_type::SUGGESTION) => untagged(map).map(Self::Suggestion),
            Some(response_type::CHANNEL_TRANSFER) => untagged(map).map(Self::ChannelTransfer),
            _ => Ok(Self::Unknown(UnknownGeneric::from_map(map))),
        };
        parsed.map_err(D::Error::custom)
    }
}

fn discriminator(map: &JsonMap) -> Option<String> {
    map.get(TAG)
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

fn untagged<T: serde::de::DeserializeOwned>(mut map: JsonMap) -> Result<T, serde_json::Error> {
    map.remove(TAG);
    serde_json::from_value(serde_json::Value::Object(map))
}

fn tagged<T: Serialize>(kind: &str, inner: &T) -> Result<JsonMap, serde_json::Error> {
    let mut map = match serde_json::to_value(inner)? {
        serde_json::Value::Object(map) => map,
        other => {
            return Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                "{} item serialized to a non-object: {}",
                kind, other
            )))
        }
    };
    map.insert(TAG.to_string(), serde_json::Value::String(kind.to_string()));
    Ok(map)
}
