// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Stoic Calendar project*
//!
//! This crate defines the basic datatypes and date calculations used across
//! the Stoic Calendar project (renderer, command line tool, widgets).
//!
//! Every calculation here is a pure function of its inputs.  "Today" is
//! always passed in by the caller and is never read from the host clock, so
//! that the same inputs always produce the same [`TimelineStats`].
//!
//! A "day" is a local wall-clock calendar day ([`chrono::NaiveDate`]).  Day
//! counting is done on calendar days, never by dividing elapsed
//! milliseconds, so daylight-saving transitions can't introduce off-by-one
//! errors.
//!

mod date;
mod date_range;
mod id;
mod name;
mod stats;
mod timeline;

pub use date::*;
pub use date_range::*;
pub use id::*;
pub use name::*;
pub use stats::*;
pub use timeline::*;

/// Mark that a type has both a [`TimelineId`] and a [`Name`], and setup
/// getters and setters for both
pub trait HasIdAndName {
    /// Get the ID
    fn id(&self) -> TimelineId;

    /// Set the ID
    fn set_id(&mut self, id: TimelineId);

    /// Get the name
    fn name(&self) -> &Name;

    /// Set the name - the [`Name`] passed in must have been initialised, and
    /// therefore is guaranteed to be valid
    fn set_name(&mut self, name: Name);
}
