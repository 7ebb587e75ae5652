//! egui-on-wgpu frame pipeline for a winit window.

use egui::{Context as EguiContext, viewport::ViewportId};
use egui_wgpu::{
    Renderer as EguiWgpuRenderer, ScreenDescriptor,
    wgpu::{
        Adapter, Color, CommandEncoderDescriptor, Device, DeviceDescriptor, Features, Instance,
        InstanceDescriptor, Limits, LoadOp, MemoryHints, Operations, PowerPreference, PresentMode,
        Queue, RenderPassColorAttachment, RenderPassDescriptor, RequestAdapterOptions, StoreOp,
        Surface, SurfaceConfiguration, SurfaceError, SurfaceTexture, TextureFormat, TextureUsages,
        TextureViewDescriptor, Trace,
    },
};
use egui_winit::State as EguiWinitState;
use std::mem;
use winit::{dpi::PhysicalSize, event::WindowEvent, window::Window};

/// Owns the GPU surface and the egui integration state for one window.
///
/// `render` runs one full egui pass: the `build_ui` closure declares the
/// frame, then everything is tessellated, uploaded and presented.
pub struct Renderer {
    egui_context: EguiContext,
    egui_state: EguiWinitState,
    egui_renderer: EguiWgpuRenderer,
    gpu: Gpu,
}

/// The wgpu side of one window: swapchain surface, device, queue.
struct Gpu {
    surface: Surface<'static>,
    device: Device,
    queue: Queue,
    config: SurfaceConfiguration,
}

impl Renderer {
    /// One-time bring-up. The window has no caller to propagate GPU setup
    /// failures to, so this panics if no adapter or device is available.
    pub fn new(window: &Window) -> Self {
        let egui_context = EguiContext::default();

        let egui_state = EguiWinitState::new(
            egui_context.clone(),
            ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let gpu = Gpu::bring_up(window);
        let egui_renderer = EguiWgpuRenderer::new(&gpu.device, gpu.config.format, None, 1, true);

        Self {
            egui_context,
            egui_state,
            egui_renderer,
            gpu,
        }
    }

    /// Let egui see every window event so it can track input and scale.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let _ = self.egui_state.on_window_event(window, event);
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.config.width = new_size.width.max(1);
        self.gpu.config.height = new_size.height.max(1);
        self.gpu.surface.configure(&self.gpu.device, &self.gpu.config);
    }

    pub fn render<F: FnOnce(&EguiContext)>(&mut self, window: &Window, build_ui: F) {
        let Some(frame) = self.gpu.acquire_frame() else {
            return;
        };
        let view = frame.texture.create_view(&TextureViewDescriptor::default());

        let raw_input = self.egui_state.take_egui_input(window);
        self.egui_context.begin_pass(raw_input);

        build_ui(&self.egui_context);

        let full_output = self.egui_context.end_pass();
        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let pixels_per_point = self.egui_context.pixels_per_point();
        let clipped = self.egui_context.tessellate(full_output.shapes, pixels_per_point);
        let screen = ScreenDescriptor {
            size_in_pixels: [self.gpu.config.width, self.gpu.config.height],
            pixels_per_point,
        };

        for (id, delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.gpu.device, &self.gpu.queue, *id, delta);
        }

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });

        self.egui_renderer.update_buffers(
            &self.gpu.device,
            &self.gpu.queue,
            &mut encoder,
            &clipped,
            &screen,
        );

        {
            let render_pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("frame render_pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(Color::BLACK),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer
                .render(&mut render_pass.forget_lifetime(), &clipped, &screen);
        }

        for id in full_output.textures_delta.free {
            self.egui_renderer.free_texture(&id);
        }

        self.gpu.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}

impl Gpu {
    fn bring_up(window: &Window) -> Self {
        let instance = Instance::new(&InstanceDescriptor::default());

        // The surface never outlives the window; the App drops the renderer
        // before the window it was created from.
        let surface = instance.create_surface(window).expect("surface");
        let surface: Surface<'static> =
            unsafe { mem::transmute::<Surface<'_>, Surface<'static>>(surface) };

        let adapter = pollster::block_on(instance.request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .expect("no suitable adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(&DeviceDescriptor {
            label: Some("textbox device"),
            required_features: Features::empty(),
            required_limits: Limits::default(),
            memory_hints: MemoryHints::Performance,
            trace: Trace::default(),
        }))
        .expect("device");

        let config = Self::pick_config(&surface, &adapter, window.inner_size());
        surface.configure(&device, &config);

        log::debug!(
            target: "app.renderer",
            "surface up: {}x{} {:?}",
            config.width,
            config.height,
            config.format
        );

        Self {
            surface,
            device,
            queue,
            config,
        }
    }

    /// Surface configuration preferring an sRGB format.
    fn pick_config(
        surface: &Surface<'_>,
        adapter: &Adapter,
        size: PhysicalSize<u32>,
    ) -> SurfaceConfiguration {
        let caps = surface.get_capabilities(adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(TextureFormat::is_srgb)
            .unwrap_or(caps.formats[0]);

        SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 0,
        }
    }

    /// Next swapchain texture, or `None` when this frame should be skipped.
    fn acquire_frame(&self) -> Option<SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Some(frame),
            Err(SurfaceError::Lost) => {
                // Common after display changes; reconfigure and skip a frame.
                log::warn!(target: "app.renderer", "surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                None
            }
            Err(SurfaceError::Outdated) => None, // minimized / moved
            Err(e) => {
                log::warn!(target: "app.renderer", "surface error: {e:?}");
                None
            }
        }
    }
}
