//! Demo state and UI using egui.

use std::cell::RefCell;
use std::rc::Rc;

use dragslider_core::{
    DragSlider, DragSliderListener, NamedConfig, PresetList, SliderConfig, SliderState,
};
use dragslider_widgets::{
    panel_frame, position_readout, section_label, sizing, theme, value_field, DragSliderControl,
    DragSliderUi,
};
use egui::{Align2, Context, RichText, Vec2};
use kurbo::{Point, Rect};

/// Built-in presets for the main slider.
pub fn default_presets() -> PresetList {
    PresetList::single(NamedConfig::new(
        "Wide",
        SliderConfig::from_origin_size(Point::new(-1000.0, -1000.0), 2000.0, 2000.0, 1.0, 1.0),
    ))
    .with(NamedConfig::new(
        "Small",
        SliderConfig::from_origin_size(Point::ZERO, 100.0, 100.0, 0.5, 0.5),
    ))
}

/// Configuration of the compact slider.
pub fn small_config() -> SliderConfig {
    SliderConfig::from_rect(Rect::new(0.0, 0.0, 512.0, 512.0), 1.0, 1.0)
}

/// Initial position of the compact slider.
pub const SMALL_START: Point = Point::new(200.0, 350.0);

fn format_field(value: f64) -> String {
    format!("{:.2}", value)
}

/// Text fields mirroring the compact slider's position.
#[derive(Debug, Clone, Default)]
pub struct ValueFields {
    pub x: String,
    pub y: String,
}

impl ValueFields {
    pub fn show(&mut self, position: Point) {
        self.x = format_field(position.x);
        self.y = format_field(position.y);
    }
}

impl DragSliderListener for ValueFields {
    fn drag_started(&mut self, position: Point) {
        log::info!("Start drag ({:.2}, {:.2})", position.x, position.y);
    }

    fn position_changed(&mut self, position: Point) {
        self.show(position);
    }

    fn drag_cancelled(&mut self, position: Point) {
        log::info!("Drag cancelled ({:.2}, {:.2})", position.x, position.y);
        self.show(position);
    }

    fn drag_ended(&mut self, position: Point) {
        log::info!("Drag ended ({:.2}, {:.2})", position.x, position.y);
    }
}

/// Action triggered by the demo UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoAction {
    /// Move the main slider back to the origin.
    Reset,
    /// Switch the main slider to the next preset.
    Change,
    /// Enable or disable the main slider.
    SetEnabled(bool),
    /// Commit the compact slider's x field.
    SetSmallX(f64),
    /// Commit the compact slider's y field.
    SetSmallY(f64),
}

/// State of the demo window.
pub struct DemoState {
    presets: PresetList,
    preset_index: usize,
    /// Main slider configuration, bound to the widget.
    pub config: SliderConfig,
    /// Main slider position, bound to the widget.
    pub position: Point,
    pub enabled: bool,
    /// Where the last main slider drag finished.
    pub last_drag_end: Option<Point>,
    small: DragSlider,
    fields: Rc<RefCell<ValueFields>>,
}

impl Default for DemoState {
    fn default() -> Self {
        Self::new(default_presets())
    }
}

impl DemoState {
    pub fn new(presets: PresetList) -> Self {
        let config = presets.get(0).config;

        let mut small = DragSlider::with_config(small_config());
        small.set_position(SMALL_START);
        let fields = Rc::new(RefCell::new(ValueFields::default()));
        fields.borrow_mut().show(small.position());
        small.set_listener(&fields);

        Self {
            presets,
            preset_index: 0,
            config,
            position: Point::ZERO,
            enabled: true,
            last_drag_end: None,
            small,
            fields,
        }
    }

    /// Name of the active preset.
    pub fn preset_name(&self) -> &str {
        &self.presets.get(self.preset_index).name
    }

    pub fn small(&self) -> &DragSlider {
        &self.small
    }

    pub fn fields(&self) -> ValueFields {
        self.fields.borrow().clone()
    }

    /// Snapshot of the main slider for drawing outside egui.
    pub fn preview_state(&self) -> SliderState {
        let mut state = SliderState::with_config(self.config);
        state.set_position(self.position);
        state.set_enabled(self.enabled);
        state
    }

    pub fn apply(&mut self, action: DemoAction) {
        match action {
            DemoAction::Reset => {
                self.position = Point::ZERO;
            }
            DemoAction::Change => {
                self.preset_index = self.presets.next_index(self.preset_index);
                self.config = self.presets.get(self.preset_index).config;
                self.position = Point::ZERO;
                log::info!("Switched to preset '{}'", self.preset_name());
            }
            DemoAction::SetEnabled(enabled) => {
                self.enabled = enabled;
            }
            DemoAction::SetSmallX(x) => {
                self.small.set_x(x);
                self.fields.borrow_mut().show(self.small.position());
            }
            DemoAction::SetSmallY(y) => {
                self.small.set_y(y);
                self.fields.borrow_mut().show(self.small.position());
            }
        }
    }
}

/// Render the demo panel and return any triggered action.
pub fn render_demo_ui(ctx: &Context, demo: &mut DemoState) -> Option<DemoAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("demo_panel"))
        .anchor(Align2::LEFT_TOP, Vec2::new(12.0, 12.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.vertical(|ui| {
                    section_label(ui, "Main slider");

                    let mut ended = None;
                    DragSliderUi::new(&mut demo.config, &mut demo.position)
                        .disabled(!demo.enabled)
                        .id_salt("main_slider")
                        .on_change(|point| log::debug!("changed point = {:?}", point))
                        .on_drag_end(|point| ended = Some(point))
                        .show(ui);
                    if let Some(point) = ended {
                        log::info!("ended point = {:?}", point);
                        demo.last_drag_end = Some(point);
                    }

                    position_readout(ui, demo.position);

                    ui.horizontal(|ui| {
                        if ui.button("Reset").clicked() {
                            action = Some(DemoAction::Reset);
                        }
                        if ui.button("Change").clicked() {
                            action = Some(DemoAction::Change);
                        }
                        let mut enabled = demo.enabled;
                        if ui.checkbox(&mut enabled, "Enabled").changed() {
                            action = Some(DemoAction::SetEnabled(enabled));
                        }
                    });

                    ui.label(RichText::new(demo.preset_name()).small().color(theme::ACCENT));
                    if let Some(point) = demo.last_drag_end {
                        let text = format!("Last drag ended at ({:.2}, {:.2})", point.x, point.y);
                        ui.label(RichText::new(text).small().color(theme::TEXT_MUTED));
                    }

                    ui.add_space(12.0);
                    section_label(ui, "Compact slider");

                    ui.horizontal(|ui| {
                        DragSliderControl::new(&mut demo.small)
                            .size(Vec2::splat(sizing::SLIDER_SMALL))
                            .id_salt("small_slider")
                            .show(ui);

                        ui.vertical(|ui| {
                            let mut fields = demo.fields.borrow_mut();
                            if let Some(x) = value_field(ui, "X Value", &mut fields.x) {
                                action = Some(DemoAction::SetSmallX(x));
                            }
                            if let Some(y) = value_field(ui, "Y Value", &mut fields.y) {
                                action = Some(DemoAction::SetSmallY(y));
                            }
                        });
                    });
                });
            });
        });

    action
}
