// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Named sets of message buttons.
//!
//! A message selects a button group by identifier; the group decides which
//! buttons are shown, in which order, and with which titles. The message then
//! binds actions to the buttons by button identifier.

use std::collections::BTreeMap;

use heraldcommon::Payload;

/// Whether tapping a button brings the application to the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonActivation {
    Foreground,
    Background,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub identifier: String,
    pub title: String,
    pub activation: ButtonActivation,
}

impl Button {
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        activation: ButtonActivation,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            activation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonGroup {
    pub identifier: String,
    /// Buttons in left to right order.
    pub buttons: Vec<Button>,
}

impl ButtonGroup {
    pub fn new(identifier: impl Into<String>, buttons: Vec<Button>) -> Self {
        Self {
            identifier: identifier.into(),
            buttons,
        }
    }
}

/// A button of a message together with the actions it runs when tapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonActionBinding {
    pub identifier: String,
    pub title: String,
    pub activation: ButtonActivation,
    /// Action name to action argument.
    pub actions: Payload,
}

/// Registry of the button groups known to the client.
///
/// The default registry holds the built-in groups of the platform.
#[derive(Debug, Clone)]
pub struct ButtonGroups {
    groups: BTreeMap<String, ButtonGroup>,
}

impl ButtonGroups {
    /// A registry without any groups.
    pub fn empty() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Adds a group, replacing any group with the same identifier.
    pub fn register(&mut self, group: ButtonGroup) -> Option<ButtonGroup> {
        self.groups.insert(group.identifier.clone(), group)
    }

    pub fn get(&self, identifier: &str) -> Option<&ButtonGroup> {
        self.groups.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ButtonGroup> {
        self.groups.values()
    }
}

impl Default for ButtonGroups {
    fn default() -> Self {
        let mut groups = Self::empty();
        for (identifier, buttons) in BUILT_IN_GROUPS {
            let buttons = buttons
                .iter()
                .map(|(id, title, activation)| Button::new(*id, *title, *activation))
                .collect();
            groups.register(ButtonGroup::new(*identifier, buttons));
        }
        groups
    }
}

type BuiltInButton = (&'static str, &'static str, ButtonActivation);

use ButtonActivation::{Background as Bg, Foreground as Fg};

const YES_FG: BuiltInButton = ("yes", "Yes", Fg);
const YES_BG: BuiltInButton = ("yes", "Yes", Bg);
const NO: BuiltInButton = ("no", "No", Bg);
const ACCEPT_FG: BuiltInButton = ("accept", "Accept", Fg);
const ACCEPT_BG: BuiltInButton = ("accept", "Accept", Bg);
const DECLINE: BuiltInButton = ("decline", "Decline", Bg);
const SHOP_NOW: BuiltInButton = ("shop_now", "Shop Now", Fg);
const BUY_NOW: BuiltInButton = ("buy_now", "Buy Now", Fg);
const FOLLOW: BuiltInButton = ("follow", "Follow", Bg);
const UNFOLLOW: BuiltInButton = ("unfollow", "Unfollow", Bg);
const OPT_IN: BuiltInButton = ("opt_in", "Opt-in", Bg);
const OPT_OUT: BuiltInButton = ("opt_out", "Opt-out", Bg);
const REMIND: BuiltInButton = ("remind", "Remind Me Later", Bg);
const SHARE: BuiltInButton = ("share", "Share", Fg);
const DOWNLOAD: BuiltInButton = ("download", "Download", Fg);
const LIKE: BuiltInButton = ("like", "Like", Bg);
const DISLIKE: BuiltInButton = ("dislike", "Dislike", Bg);
const MORE_LIKE: BuiltInButton = ("more_like", "More Like This", Bg);
const LESS_LIKE: BuiltInButton = ("less_like", "Less Like This", Bg);

const BUILT_IN_GROUPS: &[(&str, &[BuiltInButton])] = &[
    ("ua_yes_no_foreground", &[YES_FG, NO]),
    ("ua_yes_no_background", &[YES_BG, NO]),
    ("ua_accept_decline_foreground", &[ACCEPT_FG, DECLINE]),
    ("ua_accept_decline_background", &[ACCEPT_BG, DECLINE]),
    ("ua_shop_now", &[SHOP_NOW]),
    ("ua_shop_now_share", &[SHOP_NOW, SHARE]),
    ("ua_buy_now", &[BUY_NOW]),
    ("ua_buy_now_share", &[BUY_NOW, SHARE]),
    ("ua_follow", &[FOLLOW]),
    ("ua_follow_share", &[FOLLOW, SHARE]),
    ("ua_unfollow", &[UNFOLLOW]),
    ("ua_opt_in", &[OPT_IN]),
    ("ua_opt_in_share", &[OPT_IN, SHARE]),
    ("ua_opt_out", &[OPT_OUT]),
    ("ua_opt_out_share", &[OPT_OUT, SHARE]),
    ("ua_remind_me_later", &[REMIND]),
    ("ua_remind_share", &[REMIND, SHARE]),
    ("ua_share", &[SHARE]),
    ("ua_download", &[DOWNLOAD]),
    ("ua_download_share", &[DOWNLOAD, SHARE]),
    ("ua_like", &[LIKE]),
    ("ua_like_share", &[LIKE, SHARE]),
    ("ua_like_dislike", &[LIKE, DISLIKE]),
    ("ua_more_like_less_like", &[MORE_LIKE, LESS_LIKE]),
    ("ua_more_like_less_like_share", &[MORE_LIKE, LESS_LIKE, SHARE]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_groups_are_registered() {
        let groups = ButtonGroups::default();
        assert_eq!(groups.len(), BUILT_IN_GROUPS.len());

        let group = groups.get("ua_more_like_less_like_share").unwrap();
        let titles: Vec<_> = group.buttons.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["More Like This", "Less Like This", "Share"]);

        let group = groups.get("ua_yes_no_background").unwrap();
        assert!(
            group
                .buttons
                .iter()
                .all(|b| b.activation == ButtonActivation::Background)
        );
    }

    #[test]
    fn register_replaces_existing_group() {
        let mut groups = ButtonGroups::empty();
        assert!(groups.is_empty());

        let first = ButtonGroup::new("custom", vec![Button::new("a", "A", Fg)]);
        assert_eq!(groups.register(first.clone()), None);

        let second = ButtonGroup::new("custom", vec![Button::new("b", "B", Bg)]);
        assert_eq!(groups.register(second.clone()), Some(first));
        assert_eq!(groups.get("custom"), Some(&second));
        assert_eq!(groups.iter().count(), 1);
    }
}
