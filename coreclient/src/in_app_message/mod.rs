// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{collections::BTreeMap, fmt, time::Duration};

use chrono::{DateTime, Utc};
use heraldcommon::{Color, Payload, TimeStamp};

use crate::button_groups::{ButtonActionBinding, ButtonGroups};

mod payload;

/// Number of days after construction at which a message expires unless the
/// payload says otherwise.
pub const DEFAULT_EXPIRY_DAYS: i64 = 30;

/// Time after which a displayed message dismisses itself unless the payload
/// says otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(15);

/// Screen edge at which a message is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Position {
    Top,
    #[default]
    Bottom,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// Anything other than `top` reads as the default position.
    pub fn from_payload_value(value: Option<&str>) -> Self {
        match value {
            Some("top") => Self::Top,
            _ => Self::Bottom,
        }
    }
}

/// How a message is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayType {
    /// Missing or unsupported display type. Such messages are never presented.
    Unknown,
    Banner,
}

impl DisplayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Banner => "banner",
        }
    }

    pub fn from_payload_value(value: Option<&str>) -> Self {
        match value {
            Some("banner") => Self::Banner,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An in-app message as delivered in the in-app section of a push payload.
///
/// Messages compare by value across every field, so two messages built from
/// equal payloads are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InAppMessage {
    /// The send ID of the push that carried the message.
    pub identifier: Option<String>,
    pub expiry: TimeStamp,
    /// Opaque key value extras.
    pub extra: Payload,

    pub display_type: DisplayType,
    pub alert: Option<String>,
    pub position: Position,
    /// Time to wait before dismissing the message automatically.
    pub duration: Duration,
    pub primary_color: Option<Color>,
    pub secondary_color: Option<Color>,

    /// Selects which buttons are shown and their localized titles.
    pub button_group: Option<String>,
    /// Button identifier to a dictionary of action name to action argument.
    pub button_actions: BTreeMap<String, Payload>,
    /// Action name to action argument, run when the message itself is tapped.
    pub on_click: Payload,
}

impl Default for InAppMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl InAppMessage {
    /// An unconfigured banner message at the bottom of the screen expiring in
    /// [`DEFAULT_EXPIRY_DAYS`] days.
    pub fn new() -> Self {
        Self {
            identifier: None,
            expiry: TimeStamp::in_days(DEFAULT_EXPIRY_DAYS),
            extra: Payload::new(),
            display_type: DisplayType::Banner,
            alert: None,
            position: Position::default(),
            duration: DEFAULT_DURATION,
            primary_color: None,
            secondary_color: None,
            button_group: None,
            button_actions: BTreeMap::new(),
            on_click: Payload::new(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry.has_passed_at(now)
    }

    pub fn is_displayable_at(&self, now: DateTime<Utc>) -> bool {
        self.display_type == DisplayType::Banner && !self.is_expired_at(now)
    }

    /// The bindings of the message buttons to their actions, in the left to
    /// right order of the buttons in the selected button group.
    ///
    /// Empty if the message has no button group or the group is not known.
    pub fn button_action_bindings(&self, groups: &ButtonGroups) -> Vec<ButtonActionBinding> {
        let Some(group) = self
            .button_group
            .as_deref()
            .and_then(|identifier| groups.get(identifier))
        else {
            return Vec::new();
        };
        group
            .buttons
            .iter()
            .map(|button| ButtonActionBinding {
                identifier: button.identifier.clone(),
                title: button.title.clone(),
                activation: button.activation,
                actions: self
                    .button_actions
                    .get(&button.identifier)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect()
    }
}
