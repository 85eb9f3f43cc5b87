//! A vertical slider for iced that only owns geometry and drag handling.
//!
//! The track is split into a filled bottom bar and an unfilled top bar that meet at the
//! knob's center. The caller draws all three regions; [`geometry`] decides where they go and
//! [`drag`] turns pointer movement back into values.

pub mod drag;
pub mod geometry;
pub mod mapper;
pub mod pointer;
pub mod widget;

pub use drag::{value_for_drag, DragEvent, DragState};
pub use geometry::{layout, SliderLayout};
pub use mapper::{convert, ValueRange};
pub use widget::{vertical_slider, Parts, VerticalSlider};
