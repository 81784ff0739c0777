// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Conversion between [`InAppMessage`] and its payload dictionary.
//!
//! Parsing is lenient: every field that is missing or malformed falls back to
//! its default on its own, and parsing never fails.

use std::time::Duration;

use heraldcommon::{Color, Payload, PayloadExt, TimeStamp, payload::seconds_to_value};
use serde_json::Value;
use tracing::debug;

use super::{DEFAULT_DURATION, DEFAULT_EXPIRY_DAYS, DisplayType, InAppMessage, Position};

const IDENTIFIER: &str = "identifier";
const EXPIRY: &str = "expiry";
const EXTRA: &str = "extra";

const DISPLAY: &str = "display";
const DISPLAY_TYPE: &str = "type";
const ALERT: &str = "alert";
const POSITION: &str = "position";
const DURATION: &str = "duration";
const PRIMARY_COLOR: &str = "primary_color";
const SECONDARY_COLOR: &str = "secondary_color";

const ACTIONS: &str = "actions";
const BUTTON_GROUP: &str = "button_group";
const BUTTON_ACTIONS: &str = "button_actions";
const ON_CLICK: &str = "on_click";

impl InAppMessage {
    /// Builds a message from the in-app section of a push payload.
    ///
    /// A missing or unrecognized display type yields [`DisplayType::Unknown`].
    ///
    /// Without an `expiry` the message expires [`DEFAULT_EXPIRY_DAYS`] after
    /// the parse, so two parses of such a payload may differ in `expiry`.
    pub fn from_payload(payload: &Payload) -> Self {
        let empty = Payload::new();
        let display = payload.object(DISPLAY).unwrap_or(&empty);
        let actions = payload.object(ACTIONS).unwrap_or(&empty);

        let expiry = payload
            .string(EXPIRY)
            .and_then(TimeStamp::parse)
            .unwrap_or_else(|| TimeStamp::in_days(DEFAULT_EXPIRY_DAYS));

        let button_actions = actions
            .object(BUTTON_ACTIONS)
            .map(|button_actions| {
                button_actions
                    .iter()
                    .filter_map(|(button, actions)| {
                        Some((button.clone(), actions.as_object()?.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let message = Self {
            identifier: payload.string(IDENTIFIER).map(ToOwned::to_owned),
            expiry,
            extra: payload.object(EXTRA).cloned().unwrap_or_default(),
            display_type: DisplayType::from_payload_value(display.string(DISPLAY_TYPE)),
            alert: display.string(ALERT).map(ToOwned::to_owned),
            position: Position::from_payload_value(display.string(POSITION)),
            duration: display
                .number(DURATION)
                .and_then(parse_duration)
                .unwrap_or(DEFAULT_DURATION),
            primary_color: parse_color(display, PRIMARY_COLOR),
            secondary_color: parse_color(display, SECONDARY_COLOR),
            button_group: actions.string(BUTTON_GROUP).map(ToOwned::to_owned),
            button_actions,
            on_click: actions.object(ON_CLICK).cloned().unwrap_or_default(),
        };

        if message.display_type == DisplayType::Unknown {
            debug!(
                identifier = message.identifier.as_deref(),
                "in-app message has a missing or unsupported display type"
            );
        }

        message
    }

    /// The payload representation of this message.
    ///
    /// Parsing the returned payload yields a message equal to this one.
    pub fn payload(&self) -> Payload {
        let mut display = Payload::new();
        if self.display_type != DisplayType::Unknown {
            display.insert(DISPLAY_TYPE.into(), self.display_type.as_str().into());
        }
        if let Some(alert) = &self.alert {
            display.insert(ALERT.into(), alert.as_str().into());
        }
        display.insert(POSITION.into(), self.position.as_str().into());
        display.insert(
            DURATION.into(),
            seconds_to_value(self.duration.as_secs_f64()),
        );
        if let Some(color) = self.primary_color {
            display.insert(PRIMARY_COLOR.into(), color.to_hex_string().into());
        }
        if let Some(color) = self.secondary_color {
            display.insert(SECONDARY_COLOR.into(), color.to_hex_string().into());
        }

        let mut actions = Payload::new();
        if let Some(button_group) = &self.button_group {
            actions.insert(BUTTON_GROUP.into(), button_group.as_str().into());
        }
        if !self.button_actions.is_empty() {
            let button_actions: Payload = self
                .button_actions
                .iter()
                .map(|(button, actions)| (button.clone(), Value::Object(actions.clone())))
                .collect();
            actions.insert(BUTTON_ACTIONS.into(), button_actions.into());
        }
        if !self.on_click.is_empty() {
            actions.insert(ON_CLICK.into(), self.on_click.clone().into());
        }

        let mut payload = Payload::new();
        if let Some(identifier) = &self.identifier {
            payload.insert(IDENTIFIER.into(), identifier.as_str().into());
        }
        payload.insert(EXPIRY.into(), self.expiry.to_payload_string().into());
        if !self.extra.is_empty() {
            payload.insert(EXTRA.into(), self.extra.clone().into());
        }
        payload.insert(DISPLAY.into(), display.into());
        if !actions.is_empty() {
            payload.insert(ACTIONS.into(), actions.into());
        }
        payload
    }
}

/// Only finite durations of at least one nanosecond are accepted.
fn parse_duration(seconds: f64) -> Option<Duration> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(seconds)
        .ok()
        .filter(|duration| !duration.is_zero())
}

fn parse_color(display: &Payload, key: &str) -> Option<Color> {
    let value = display.string(key)?;
    match value.parse() {
        Ok(color) => Some(color),
        Err(error) => {
            debug!(%error, key, value, "ignoring malformed color");
            None
        }
    }
}

impl From<&Payload> for InAppMessage {
    fn from(payload: &Payload) -> Self {
        Self::from_payload(payload)
    }
}
