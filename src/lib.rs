//! Layout and draw-plan geometry for progress indicators.
//!
//! Two visual forms share one style model: a horizontal bar with an inline
//! percentage label, and a circular ring with a centered percentage label.
//! Given a parent [`Constraint`] and a [`ProgressStyle`] snapshot, the
//! engines deterministically resolve the allocated size and the exact
//! positions, lengths, and angles of a single frame, then replay them on a
//! [`Renderer`] the host backs with its 2D drawing surface.
//!
//! The crate draws nothing itself and shapes no text: rasterization and
//! font metrics stay on the host side, behind the [`Renderer`] and
//! [`FontMetrics`] traits.
//!
//! # Example
//!
//! ```
//! use arcline::{
//!     ApproxFontMetrics, CommandRecorder, Constraint, Progress, ProgressIndicator,
//!     ProgressStyleArgs, Px,
//! };
//!
//! let metrics = ApproxFontMetrics::default();
//! let mut widget = ProgressIndicator::bar(&ProgressStyleArgs::default())?;
//! widget.set_progress(Progress::new(40, 100)?);
//!
//! let size = widget.measure(&Constraint::exact(Px(300), Px(20)), &metrics);
//! assert_eq!(size.width, Px(300));
//!
//! let mut recorder = CommandRecorder::new();
//! widget.render(&mut recorder, &metrics);
//! assert!(!recorder.commands.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod circular;
pub mod color;
pub mod constraint;
pub mod dp;
pub mod font;
pub mod linear;
pub mod progress;
pub mod px;
pub mod render;
pub mod style;
pub mod widget;

pub use circular::{CircularEngine, CircularPlan};
pub use color::Color;
pub use constraint::{Constraint, DimensionValue};
pub use dp::{Dp, set_scale_factor};
pub use font::{ApproxFontMetrics, FontMetrics};
pub use linear::{LinearEngine, LinearPlan};
pub use progress::{Progress, ProgressError};
pub use px::{Px, PxSize};
pub use render::{ArcCap, CommandRecorder, DrawCommand, Rect, Renderer};
pub use style::{EdgeInsets, ProgressStyle, ProgressStyleArgs, StyleDefaults, StyleError};
pub use widget::{LayoutEngine, ProgressIndicator};
