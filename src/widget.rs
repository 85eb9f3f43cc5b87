//! The vertical slider as an iced widget.
//!
//! The widget owns geometry and drag handling only. What the bars and the knob look like is
//! up to the caller, who hands in one element per region; each element is laid out with exact
//! limits matching the rectangle computed for it.

use iced::{
    advanced::{
        layout::{self, Layout},
        renderer,
        widget::{tree, Tree, Widget},
        Clipboard, Shell,
    },
    event, mouse, Element, Event, Length, Point, Rectangle, Size,
};
use tracing::{debug, trace};

use crate::{
    drag::{value_for_drag, DragState},
    geometry,
    mapper::ValueRange,
    pointer::{pointer_input, PointerInput},
};

/// Default thickness of the slider.
pub const DEFAULT_WIDTH: f32 = 20.0;

/// Caller-supplied elements for the three regions of the slider.
pub struct Parts<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    /// Filled part of the track, below the knob's center.
    pub bottom_bar: Element<'a, Message, Theme, Renderer>,
    /// Unfilled part of the track, above the knob's center.
    pub top_bar: Element<'a, Message, Theme, Renderer>,
    pub knob: Element<'a, Message, Theme, Renderer>,
}

impl<'a, Message, Theme, Renderer> Parts<'a, Message, Theme, Renderer> {
    pub fn new(
        bottom_bar: impl Into<Element<'a, Message, Theme, Renderer>>,
        top_bar: impl Into<Element<'a, Message, Theme, Renderer>>,
        knob: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        Self {
            bottom_bar: bottom_bar.into(),
            top_bar: top_bar.into(),
            knob: knob.into(),
        }
    }
}

/// A slider that fills from the bottom up.
///
/// The value is not stored by the widget: the current value is passed in on every view and
/// new values are reported through `on_change`.
pub struct VerticalSlider<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    range: ValueRange,
    value: f32,
    knob_extent: Option<f32>,
    width: Length,
    height: Length,
    on_change: Box<dyn Fn(f32) -> Message + 'a>,
    on_release: Option<Message>,
    // bottom bar, top bar, knob
    children: Vec<Element<'a, Message, Theme, Renderer>>,
}

impl<'a, Message, Theme, Renderer> VerticalSlider<'a, Message, Theme, Renderer> {
    pub fn new<F>(
        range: impl Into<ValueRange>,
        value: f32,
        on_change: F,
        parts: Parts<'a, Message, Theme, Renderer>,
    ) -> Self
    where
        F: Fn(f32) -> Message + 'a,
    {
        let Parts {
            bottom_bar,
            top_bar,
            knob,
        } = parts;

        Self {
            range: range.into(),
            value,
            knob_extent: None,
            width: Length::Fixed(DEFAULT_WIDTH),
            height: Length::Fill,
            on_change: Box::new(on_change),
            on_release: None,
            children: vec![bottom_bar, top_bar, knob],
        }
    }

    /// Fixes the knob's length along the track. Defaults to the slider's width.
    pub fn knob_extent(mut self, knob_extent: f32) -> Self {
        self.knob_extent = Some(knob_extent);
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Message published when a drag ends.
    pub fn on_release(mut self, message: Message) -> Self {
        self.on_release = Some(message);
        self
    }

    fn publish(
        &mut self,
        frame: Size,
        position: Point,
        drag: &DragState,
        shell: &mut Shell<'_, Message>,
    ) {
        let Some(event) = drag.event_at(position) else {
            return;
        };

        let value = value_for_drag(frame, &event, self.range, self.knob_extent);
        trace!(?event, value, "slider drag");

        if value != self.value {
            self.value = value;
            shell.publish((self.on_change)(value));
        }
    }
}

#[derive(Debug, Default)]
struct State {
    drag: DragState,
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for VerticalSlider<'a, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.children);
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let frame = limits.width(self.width).height(self.height).max();
        let regions = geometry::layout(frame, self.value, self.range, self.knob_extent);

        if self.range.is_degenerate() {
            trace!(range = ?self.range, "degenerate slider range");
        } else if !self.range.contains(self.value) {
            trace!(range = ?self.range, value = self.value, "slider value outside its range");
        }
        trace!(?frame, ?regions, "slider layout");

        let children = self
            .children
            .iter()
            .zip(tree.children.iter_mut())
            .zip([regions.bottom_bar, regions.top_bar, regions.knob])
            .map(|((child, state), region)| {
                // regions can be negative when the frame is shorter than the knob
                let size = Size::new(region.width.max(0.0), region.height.max(0.0));

                child
                    .as_widget()
                    .layout(state, renderer, &layout::Limits::new(size, size))
                    .move_to(Point::new(region.x, region.y))
            })
            .collect();

        layout::Node::with_children(frame, children)
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> event::Status {
        let Some(input) = pointer_input(&event, cursor) else {
            return event::Status::Ignored;
        };

        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();
        let local = |position: Point| Point::new(position.x - bounds.x, position.y - bounds.y);

        match input {
            PointerInput::Pressed(position) if bounds.contains(position) => {
                state.drag.press(local(position));
                debug!(value = self.value, "slider drag started");

                self.publish(bounds.size(), local(position), &state.drag, shell);
                event::Status::Captured
            }
            PointerInput::Moved(position) if state.drag.is_dragging() => {
                self.publish(bounds.size(), local(position), &state.drag, shell);
                event::Status::Captured
            }
            PointerInput::Released | PointerInput::Lost => {
                if !state.drag.release() {
                    return event::Status::Ignored;
                }
                debug!(value = self.value, "slider drag ended");

                if let Some(message) = self.on_release.clone() {
                    shell.publish(message);
                }
                event::Status::Captured
            }
            PointerInput::Pressed(_) | PointerInput::Moved(_) => event::Status::Ignored,
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let knob = geometry::layout(bounds.size(), self.value, self.range, self.knob_extent)
            .translate(bounds.position())
            .knob;
        let over_knob = cursor.is_over(knob);

        if state.drag.is_dragging() {
            mouse::Interaction::Grabbing
        } else if over_knob {
            mouse::Interaction::Grab
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::Idle
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        for ((child, state), layout) in self
            .children
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
        {
            child
                .as_widget()
                .draw(state, renderer, theme, style, layout, cursor, viewport);
        }
    }
}

impl<'a, Message, Theme, Renderer> From<VerticalSlider<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slider: VerticalSlider<'a, Message, Theme, Renderer>) -> Self {
        Element::new(slider)
    }
}

/// Shorthand for [`VerticalSlider::new`].
pub fn vertical_slider<'a, Message, Theme, Renderer>(
    range: impl Into<ValueRange>,
    value: f32,
    on_change: impl Fn(f32) -> Message + 'a,
    parts: Parts<'a, Message, Theme, Renderer>,
) -> VerticalSlider<'a, Message, Theme, Renderer> {
    VerticalSlider::new(range, value, on_change, parts)
}
