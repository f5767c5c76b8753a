//! The drag slider widget.
//!
//! Two ways to embed the control:
//! - [`DragSliderUi`] binds a configuration and a position owned by the
//!   host. The slider state lives in egui memory between frames.
//! - [`DragSliderControl`] drives a [`DragSlider`] the host owns, whose
//!   registered listener receives the notifications.

use std::hash::Hash;

use dragslider_core::{
    dispatch, CursorAffordance, DragSlider, DragSliderListener, EventOutcome, NudgeDirection,
    SliderConfig, SliderEvent, SliderMapping, SliderNotification, SliderState, VerticalAxis,
};
use dragslider_render::{draw_slider, Appearance, SliderFrame};
use egui::{
    vec2, CursorIcon, EventFilter, Id, Response, Sense, Ui, Vec2, WidgetInfo, WidgetType,
};
use kurbo::{Point, Rect};

use crate::input::{DragTracker, FrameInput};
use crate::painter::EguiPainter;
use crate::sizing;

/// Accessible label reported for the control.
pub const ACCESSIBLE_LABEL: &str = "Drag slider";

/// Something that owns a slider state and handles its events.
trait SliderHost {
    fn state(&self) -> &SliderState;

    fn handle(&mut self, event: SliderEvent) -> EventOutcome;
}

impl SliderHost for DragSlider {
    fn state(&self) -> &SliderState {
        DragSlider::state(self)
    }

    fn handle(&mut self, event: SliderEvent) -> EventOutcome {
        self.handle_event(event)
    }
}

/// A state borrowed from egui memory, notifying a short-lived listener.
struct BoundState<'s, 'l> {
    state: &'s mut SliderState,
    listener: &'l mut dyn DragSliderListener,
}

impl SliderHost for BoundState<'_, '_> {
    fn state(&self) -> &SliderState {
        self.state
    }

    fn handle(&mut self, event: SliderEvent) -> EventOutcome {
        let outcome = self.state.apply(event);
        dispatch(self.listener, outcome);
        outcome
    }
}

/// Forwards notifications to the closures given to [`DragSliderUi`].
struct HookListener<'h, 'a> {
    on_change: Option<&'h mut (dyn FnMut(Point) + 'a)>,
    on_drag_end: Option<&'h mut (dyn FnMut(Point) + 'a)>,
}

impl DragSliderListener for HookListener<'_, '_> {
    fn position_changed(&mut self, position: Point) {
        if let Some(hook) = self.on_change.as_mut() {
            hook(position);
        }
    }

    fn drag_cancelled(&mut self, position: Point) {
        log::debug!("Drag cancelled, position restored to {:?}", position);
        if let Some(hook) = self.on_change.as_mut() {
            hook(position);
        }
    }

    fn drag_ended(&mut self, position: Point) {
        if let Some(hook) = self.on_drag_end.as_mut() {
            hook(position);
        }
    }

    fn nudge_rejected(&mut self, direction: NudgeDirection) {
        log::info!("Slider cannot move {:?}", direction);
    }
}

/// Per-widget state kept in egui memory.
#[derive(Debug, Clone, Default)]
struct BindingMemory {
    state: SliderState,
    drag: DragTracker,
}

/// Push the host's configuration, then its position, into the state.
///
/// An out-of-range position is clamped here and written back to the host
/// by [`sync_to_binding`].
pub fn sync_from_binding(
    state: &mut SliderState,
    config: SliderConfig,
    position: Point,
    enabled: bool,
) {
    state.set_enabled(enabled);
    if state.config() != config {
        state.apply_config(config);
    }
    if state.position() != position {
        state.set_position(position);
    }
}

/// Write the state's position back to the host. Returns whether it changed.
pub fn sync_to_binding(state: &SliderState, position: &mut Point) -> bool {
    if *position == state.position() {
        return false;
    }
    *position = state.position();
    true
}

/// Look options shared by both widget flavours.
#[derive(Debug, Clone, Copy)]
struct Options {
    size: Vec2,
    appearance: Option<Appearance>,
    vertical: VerticalAxis,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            size: vec2(sizing::SLIDER, sizing::SLIDER),
            appearance: None,
            vertical: VerticalAxis::Up,
        }
    }
}

fn to_kurbo(rect: egui::Rect) -> Rect {
    Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}

fn cursor_icon(cursor: CursorAffordance) -> CursorIcon {
    match cursor {
        CursorAffordance::Default => CursorIcon::Default,
        CursorAffordance::OpenHand => CursorIcon::Grab,
        CursorAffordance::ClosedHand => CursorIcon::Grabbing,
    }
}

/// Allocate, route input through `host`, paint and describe the control.
fn show_slider(
    ui: &mut Ui,
    id: Option<Id>,
    options: Options,
    tracker: &mut DragTracker,
    host: &mut dyn SliderHost,
) -> Response {
    let enabled = host.state().is_enabled();
    let accepts_focus = host.state().accepts_focus();
    let (auto_id, rect) = ui.allocate_space(options.size);
    let id = id.unwrap_or(auto_id);
    let sense = if enabled {
        Sense::click_and_drag()
    } else {
        Sense::hover()
    };
    let mut response = ui.interact(rect, id, sense);

    let mut input = FrameInput::collect(ui, &response);
    if accepts_focus && input.pressed {
        response.request_focus();
    }
    let focused = accepts_focus && response.has_focus();
    if focused {
        ui.memory_mut(|m| {
            m.set_focus_lock_filter(
                id,
                EventFilter {
                    tab: false,
                    horizontal_arrows: true,
                    vertical_arrows: true,
                    escape: true,
                },
            )
        });
    } else {
        input.nudges.clear();
        if !host.state().is_panning() {
            input.escape = false;
        }
    }

    let mapping = SliderMapping::new(to_kurbo(rect), host.state().range())
        .with_vertical_axis(options.vertical);
    let events = input.to_events(host.state().is_hovered(), tracker, &mapping);

    let mut redraw = false;
    for event in events {
        let outcome = host.handle(event);
        redraw |= outcome.needs_redraw();
        if matches!(
            outcome.notification(),
            Some(SliderNotification::PositionChanged(_) | SliderNotification::DragCancelled(_))
        ) {
            response.mark_changed();
        }
    }
    if redraw {
        ui.ctx().request_repaint();
    }

    let state = host.state();
    if response.hovered() || state.is_panning() {
        ui.ctx().set_cursor_icon(cursor_icon(state.cursor()));
    }

    if ui.is_rect_visible(rect) {
        let appearance = options.appearance.unwrap_or(Appearance {
            dark_mode: ui.visuals().dark_mode,
            increase_contrast: false,
        });
        let frame = SliderFrame::from_state(state, to_kurbo(rect))
            .with_appearance(appearance)
            .with_focus(focused)
            .with_vertical_axis(options.vertical);
        if let Err(err) = draw_slider(&mut EguiPainter::new(ui.painter()), &frame) {
            log::warn!("Failed to draw slider: {}", err);
        }
    }

    let position = state.position();
    response.widget_info(|| {
        let mut info = WidgetInfo::labeled(WidgetType::Slider, enabled, ACCESSIBLE_LABEL);
        info.value = Some(position.x);
        info.current_text_value = Some(format!("{:.2}, {:.2}", position.x, position.y));
        info
    });

    response
}

/// A drag slider bound to a host-owned configuration and position.
pub struct DragSliderUi<'a> {
    config: &'a mut SliderConfig,
    position: &'a mut Point,
    enabled: bool,
    id_salt: Option<Id>,
    options: Options,
    on_change: Option<Box<dyn FnMut(Point) + 'a>>,
    on_drag_end: Option<Box<dyn FnMut(Point) + 'a>>,
}

impl<'a> DragSliderUi<'a> {
    /// Create a slider bound to `config` and `position`.
    pub fn new(config: &'a mut SliderConfig, position: &'a mut Point) -> Self {
        Self {
            config,
            position,
            enabled: true,
            id_salt: None,
            options: Options::default(),
            on_change: None,
            on_drag_end: None,
        }
    }

    /// Disable the slider.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.enabled = !disabled;
        self
    }

    /// Set the widget size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.options.size = size;
        self
    }

    /// Override the appearance derived from the egui visuals.
    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.options.appearance = Some(appearance);
        self
    }

    /// Set the direction increasing y values are drawn in.
    pub fn vertical_axis(mut self, vertical: VerticalAxis) -> Self {
        self.options.vertical = vertical;
        self
    }

    /// Stable id source, for sliders whose layout position may change.
    pub fn id_salt(mut self, salt: impl Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    /// Called with the new position after every user-driven change.
    pub fn on_change(mut self, hook: impl FnMut(Point) + 'a) -> Self {
        self.on_change = Some(Box::new(hook));
        self
    }

    /// Called with the final position when a drag completes.
    pub fn on_drag_end(mut self, hook: impl FnMut(Point) + 'a) -> Self {
        self.on_drag_end = Some(Box::new(hook));
        self
    }

    /// Show the slider.
    pub fn show(mut self, ui: &mut Ui) -> Response {
        let id = self.id_salt.map(|salt| ui.make_persistent_id(salt));
        let memory_id = id.unwrap_or_else(|| ui.next_auto_id());
        let mut memory: BindingMemory = ui.data(|d| d.get_temp(memory_id)).unwrap_or_default();

        sync_from_binding(
            &mut memory.state,
            *self.config,
            *self.position,
            self.enabled && ui.is_enabled(),
        );

        let mut listener = HookListener {
            on_change: self.on_change.as_deref_mut(),
            on_drag_end: self.on_drag_end.as_deref_mut(),
        };
        let mut host = BoundState {
            state: &mut memory.state,
            listener: &mut listener,
        };
        let mut response = show_slider(ui, id, self.options, &mut memory.drag, &mut host);

        if sync_to_binding(&memory.state, self.position) {
            response.mark_changed();
        }
        ui.data_mut(|d| d.insert_temp(response.id, memory));
        response
    }
}

/// A widget driving a host-owned [`DragSlider`].
pub struct DragSliderControl<'a> {
    slider: &'a mut DragSlider,
    id_salt: Option<Id>,
    options: Options,
}

impl<'a> DragSliderControl<'a> {
    pub fn new(slider: &'a mut DragSlider) -> Self {
        Self {
            slider,
            id_salt: None,
            options: Options::default(),
        }
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.options.size = size;
        self
    }

    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.options.appearance = Some(appearance);
        self
    }

    pub fn vertical_axis(mut self, vertical: VerticalAxis) -> Self {
        self.options.vertical = vertical;
        self
    }

    pub fn id_salt(mut self, salt: impl Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    /// Show the slider. Notifications go to the slider's listener.
    pub fn show(self, ui: &mut Ui) -> Response {
        let id = self.id_salt.map(|salt| ui.make_persistent_id(salt));
        let memory_id = id.unwrap_or_else(|| ui.next_auto_id());
        let mut tracker: DragTracker = ui.data(|d| d.get_temp(memory_id)).unwrap_or_default();

        let response = show_slider(ui, id, self.options, &mut tracker, self.slider);

        ui.data_mut(|d| d.insert_temp(response.id, tracker));
        response
    }
}
