// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Stoic Calendar project*
//!
//! This crate lays out a timeline as a grid of dots, one dot per day.  Given
//! the number of dots and the size of the container they're drawn in, the
//! engine picks a column count, then the largest dot size and spacing that
//! let the whole grid fit without overflowing or scrolling.
//!
//! The engine doesn't draw anything.  Frontends take a [`GridLayout`], the
//! per-dot positions and the per-dot [`DotState`]s and render them however
//! they like (native view, widget, exported image).
//!

pub mod engine;

pub use engine::*;
