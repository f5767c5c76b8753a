//! Main application: window, GPU surface and frame loop.

use std::path::PathBuf;
use std::sync::Arc;

use dragslider_core::PresetList;
use dragslider_render::{Appearance, SliderFrame, VelloSliderRenderer};
use kurbo::{Affine, Rect};
use peniko::Color;
use thiserror::Error;
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu::PresentMode;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::compositor::{Compositor, UiFrame};
use crate::demo::{default_presets, render_demo_ui, DemoState};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Renderer error: {0}")]
    Render(#[from] vello::Error),
    #[error("Surface error: {0}")]
    Surface(#[from] vello::wgpu::SurfaceError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Bounds of the GPU-drawn preview of the main slider, in logical pixels.
const PREVIEW_BOUNDS: Rect = Rect::new(440.0, 40.0, 680.0, 280.0);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    /// JSON preset file for the main slider.
    pub presets_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "DragSlider Demo".to_string(),
            width: 720,
            height: 480,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            presets_path: None,
        }
    }
}

impl AppConfig {
    /// Build a configuration from command line arguments (program name
    /// excluded). The first argument, if any, is the preset file.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        Self {
            presets_path: args.into_iter().next().map(PathBuf::from),
            ..Self::default()
        }
    }

    /// Presets for the main slider, falling back to the built-in ones.
    pub fn load_presets(&self) -> PresetList {
        let Some(path) = &self.presets_path else {
            return default_presets();
        };
        match PresetList::load(path) {
            Ok(presets) => presets,
            Err(e) => {
                log::error!("Failed to load presets from {}: {}", path.display(), e);
                default_presets()
            }
        }
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    compositor: Compositor,
    preview: VelloSliderRenderer,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,

    demo: DemoState,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<RenderContext>,
    /// Fatal error that stopped the event loop.
    error: Option<AppError>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            error: None,
        }
    }

    /// Run the application until the window closes.
    pub async fn run(config: AppConfig) -> AppResult<()> {
        let event_loop = EventLoop::new()?;
        let mut app = App::with_config(config);
        event_loop.run_app(&mut app)?;
        app.error.take().map_or(Ok(()), Err)
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> AppResult<()> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        let render_cx = self.render_cx.get_or_insert_with(RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let compositor = Compositor::new(device, surface.config.format)?;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        log::info!(
            "DragSlider demo initialized - {}x{}",
            surface.config.width,
            surface.config.height
        );

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            compositor,
            preview: VelloSliderRenderer::new(),
            egui_ctx,
            egui_state,
            demo: DemoState::new(self.config.load_presets()),
        });

        window.request_redraw();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self) {
        let Some(state) = &mut self.state else {
            return;
        };
        let Some(render_cx) = self.render_cx.as_ref() else {
            return;
        };

        let egui_input = state.egui_state.take_egui_input(&state.window);
        let mut action = None;
        let mut egui_output = state.egui_ctx.run(egui_input, |ctx| {
            action = render_demo_ui(ctx, &mut state.demo);
        });
        if let Some(action) = action {
            state.demo.apply(action);
        }

        let platform_output = std::mem::take(&mut egui_output.platform_output);
        state
            .egui_state
            .handle_platform_output(&state.window, platform_output);
        let ui = UiFrame::tessellate(&state.egui_ctx, egui_output);

        // Preview of the main slider, drawn by Vello underneath egui
        let appearance = Appearance {
            dark_mode: state.egui_ctx.style().visuals.dark_mode,
            increase_contrast: false,
        };
        let frame = SliderFrame::from_state(&state.demo.preview_state(), PREVIEW_BOUNDS)
            .with_appearance(appearance);
        state
            .preview
            .set_transform(Affine::scale(state.window.scale_factor()));
        if let Err(e) = state.preview.render(&frame) {
            log::warn!("Failed to build preview: {}", e);
        }

        if let Err(e) = state.compositor.present(
            &render_cx.devices[state.surface.dev_id],
            &state.surface,
            state.preview.scene(),
            self.config.background_color,
            ui,
        ) {
            log::warn!("Failed to draw frame: {}", e);
        }

        if state.egui_ctx.has_requested_repaint() {
            state.window.request_redraw();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        log::info!("Creating window...");
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_args() {
        let config = AppConfig::from_args(Vec::<String>::new());
        assert!(config.presets_path.is_none());
        assert_eq!(config.title, "DragSlider Demo");

        let config = AppConfig::from_args(vec!["presets.json".to_string()]);
        assert_eq!(config.presets_path, Some(PathBuf::from("presets.json")));
    }

    #[test]
    fn test_missing_preset_file_falls_back() {
        let config = AppConfig::from_args(vec!["/nonexistent/presets.json".to_string()]);
        let presets = config.load_presets();
        assert_eq!(presets.len(), 2);
        assert_eq!(presets.get(0).name, "Wide");
    }

    #[test]
    fn test_preview_fits_default_window() {
        let config = AppConfig::default();
        assert!(PREVIEW_BOUNDS.x1 <= config.width as f64);
        assert!(PREVIEW_BOUNDS.y1 <= config.height as f64);
    }
}
