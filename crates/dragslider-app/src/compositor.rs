//! Frame composition: the Vello scene underneath, egui on top.

use peniko::Color;
use vello::util::{DeviceHandle, RenderSurface};
use vello::wgpu::util::TextureBlitter;
use vello::wgpu::{
    CommandEncoder, CommandEncoderDescriptor, Device, Extent3d, LoadOp, Operations,
    RenderPassColorAttachment, RenderPassDescriptor, StoreOp, Texture, TextureDescriptor,
    TextureDimension, TextureFormat, TextureUsages, TextureView, TextureViewDescriptor,
};
use vello::{AaConfig, RenderParams, RendererOptions, Scene};

use crate::app::AppResult;

/// Tessellated egui output for one frame.
pub struct UiFrame {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

impl UiFrame {
    /// Tessellate the output of an egui pass.
    pub fn tessellate(ctx: &egui::Context, output: egui::FullOutput) -> Self {
        Self {
            primitives: ctx.tessellate(output.shapes, output.pixels_per_point),
            textures: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        }
    }
}

/// Offscreen target Vello renders into. Vello writes through a storage
/// binding, which surface formats generally lack.
struct SceneTarget {
    _texture: Texture,
    view: TextureView,
    width: u32,
    height: u32,
}

impl SceneTarget {
    fn new(device: &Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&TextureDescriptor {
            label: Some("scene target"),
            size: Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: TextureFormat::Rgba8Unorm,
            usage: TextureUsages::STORAGE_BINDING
                | TextureUsages::COPY_SRC
                | TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&TextureViewDescriptor::default());
        Self {
            _texture: texture,
            view,
            width,
            height,
        }
    }
}

/// Owns the GPU renderers and draws complete frames onto a surface.
pub struct Compositor {
    vello: vello::Renderer,
    blitter: TextureBlitter,
    egui: egui_wgpu::Renderer,
    target: Option<SceneTarget>,
}

impl Compositor {
    pub fn new(device: &Device, surface_format: TextureFormat) -> AppResult<Self> {
        Ok(Self {
            vello: vello::Renderer::new(device, RendererOptions::default())?,
            blitter: TextureBlitter::new(device, surface_format),
            egui: egui_wgpu::Renderer::new(
                device,
                surface_format,
                egui_wgpu::RendererOptions::default(),
            ),
            target: None,
        })
    }

    /// The scene target, recreated when the surface size changes.
    fn target(&mut self, device: &Device, width: u32, height: u32) -> TextureView {
        match &self.target {
            Some(target) if target.width == width && target.height == height => {
                target.view.clone()
            }
            _ => {
                log::debug!("Allocating {}x{} scene target", width, height);
                let target = SceneTarget::new(device, width, height);
                let view = target.view.clone();
                self.target = Some(target);
                view
            }
        }
    }

    /// Render `scene` over `background`, then `ui` on top, and present.
    pub fn present(
        &mut self,
        handle: &DeviceHandle,
        surface: &RenderSurface<'_>,
        scene: &Scene,
        background: Color,
        ui: UiFrame,
    ) -> AppResult<()> {
        let device = &handle.device;
        let queue = &handle.queue;
        let width = surface.config.width;
        let height = surface.config.height;

        let surface_texture = surface.surface.get_current_texture()?;
        let surface_view = surface_texture
            .texture
            .create_view(&TextureViewDescriptor::default());

        let params = RenderParams {
            base_color: background,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };
        let target = self.target(device, width, height);
        self.vello
            .render_to_texture(device, queue, scene, &target, &params)?;

        for (id, delta) in &ui.textures.set {
            self.egui.update_texture(device, queue, *id, delta);
        }
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: ui.pixels_per_point,
        };

        let mut encoder = device.create_command_encoder(&CommandEncoderDescriptor {
            label: Some("frame encoder"),
        });
        self.blitter.copy(device, &mut encoder, &target, &surface_view);
        let callbacks = self
            .egui
            .update_buffers(device, queue, &mut encoder, &ui.primitives, &screen);
        self.draw_ui(&mut encoder, &surface_view, &ui.primitives, &screen);
        queue.submit(callbacks.into_iter().chain(std::iter::once(encoder.finish())));

        for id in &ui.textures.free {
            self.egui.free_texture(id);
        }
        surface_texture.present();
        Ok(())
    }

    fn draw_ui(
        &mut self,
        encoder: &mut CommandEncoder,
        view: &TextureView,
        primitives: &[egui::ClippedPrimitive],
        screen: &egui_wgpu::ScreenDescriptor,
    ) {
        let pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("ui pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: Operations {
                    // Keep the blitted scene
                    load: LoadOp::Load,
                    store: StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        self.egui
            .render(&mut pass.forget_lifetime(), primitives, screen);
    }
}
