// SPDX-FileCopyrightText: 2023 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Primitives shared by the herald client crates.

pub mod color;
pub mod payload;
pub mod time;

pub use color::{Color, ColorParseError};
pub use payload::{Payload, PayloadExt};
pub use time::TimeStamp;
