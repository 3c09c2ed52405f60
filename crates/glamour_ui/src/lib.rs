//! # Glamour UI Primitives
//!
//! Drawing building blocks shared by every Glamour window:
//! - Render-space geometry (`Rect`, `Vec2`)
//! - Colors and the popup/banner palettes
//! - The `DrawSurface` seam standing in for the host's draw list
//! - Eased transitions for window chrome
//! - Per-frame mouse/keyboard state
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                    WINDOW FRAME                         │
//! ├────────────────────────────────────────────────────────┤
//! │  InputState → Window logic → DrawSurface → Host draw   │
//! │       ↓             ↓              ↓           ↓       │
//! │  Hit testing   Layout (Rect)  UIRenderer   UIVertex    │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Windows never talk to the host renderer directly. They draw filled
//! rectangles, filled discs and text through [`DrawSurface`]; the host
//! adapter (or [`UIRenderer`] in tests and the preview tool) decides what
//! that means.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod transition;

pub use input::{InputState, Key, MouseButton};
pub use layout::{Rect, Vec2};
pub use render::{DrawSurface, RenderCommand, UIRenderer, UIVertex};
pub use style::{Color, Theme};
pub use transition::Transition;
