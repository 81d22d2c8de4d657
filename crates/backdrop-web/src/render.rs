use backdrop_core::{
    RenderSurface, SceneState, Viewport, CLEAR_COLOR, FOG_COLOR, FOG_FAR, FOG_NEAR, PARTICLE_SIZE,
};
use web_sys as web;

mod helpers;
mod points;
mod wire;

use points::PointSprites;
use wire::WireMesh;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    fog_color: [f32; 4],
    params: [f32; 4], // fog near, fog far, aspect, particle size
}

/// wgpu-backed render surface drawing into the page's canvas.
pub struct GpuState {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    wire_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,
    grid: WireMesh,
    shapes: WireMesh,
    particles: PointSprites,
    css_width: u32,
    css_height: u32,
    pixel_ratio: f64,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: web::HtmlCanvasElement, scene: &SceneState) -> anyhow::Result<Self> {
        let viewport = scene.viewport();
        let (width, height) = viewport.physical_size();
        canvas.set_width(width);
        canvas.set_height(height);

        // Drops the WebGPU backend when the browser exposes the API but has no
        // adapter, so WebGL2 is tried instead.
        let instance =
            wgpu::util::new_instance_with_webgpu_detection(&wgpu::InstanceDescriptor::default())
                .await;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU/WebGL adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // WebGL2 limits keep the fallback backend usable
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Colours are authored as display values, so skip the sRGB encode.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("backdrop_shader"),
            source: wgpu::ShaderSource::Wgsl(backdrop_core::BACKDROP_WGSL.into()),
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("backdrop_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });
        let wire_pipeline = helpers::make_pipeline(
            &device,
            "wire_pipeline",
            &layout,
            &shader,
            "vs_wire",
            &wire::vertex_layouts(),
            wgpu::PrimitiveTopology::LineList,
            format,
        );
        let particle_pipeline = helpers::make_pipeline(
            &device,
            "particle_pipeline",
            &layout,
            &shader,
            "vs_particle",
            &points::vertex_layouts(),
            wgpu::PrimitiveTopology::TriangleList,
            format,
        );

        let grid = wire::create_grid_mesh(&device, &scene.grid);
        let shapes = wire::create_shape_mesh(&device, scene.shapes.len());
        let particles = PointSprites::new(&device, scene.particles.len());

        log::info!(
            "[gpu] surface {}x{} format={:?} backend={:?}",
            width,
            height,
            format,
            adapter.get_info().backend
        );

        Ok(Self {
            canvas,
            surface,
            device,
            queue,
            config,
            globals_buffer,
            globals_bind_group,
            wire_pipeline,
            particle_pipeline,
            grid,
            shapes,
            particles,
            css_width: viewport.width,
            css_height: viewport.height,
            pixel_ratio: viewport.pixel_ratio,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0] as f64,
                g: CLEAR_COLOR[1] as f64,
                b: CLEAR_COLOR[2] as f64,
                a: 1.0,
            },
        })
    }

    /// Resize the canvas backing store and swapchain to the current CSS size
    /// times pixel ratio.
    fn reconfigure(&mut self) {
        let viewport = Viewport {
            width: self.css_width,
            height: self.css_height,
            pixel_ratio: self.pixel_ratio,
        };
        if viewport.is_empty() {
            return;
        }
        let max = self.device.limits().max_texture_dimension_2d;
        let (w, h) = viewport.physical_size();
        let (w, h) = (w.min(max), h.min(max));
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", self.css_width));
        let _ = style.set_property("height", &format!("{}px", self.css_height));
        if w == self.config.width && h == self.config.height {
            return;
        }
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.config.width = w;
        self.config.height = h;
        self.surface.configure(&self.device, &self.config);
    }

    fn write_globals(&self, scene: &SceneState) {
        let g = Globals {
            view_proj: scene.camera.view_projection().to_cols_array_2d(),
            fog_color: [FOG_COLOR[0], FOG_COLOR[1], FOG_COLOR[2], 1.0],
            params: [FOG_NEAR, FOG_FAR, scene.camera.aspect, PARTICLE_SIZE],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&g));
    }

    fn upload_dirty(&self, scene: &mut SceneState) {
        if scene.grid.is_dirty() {
            self.queue.write_buffer(
                &self.grid.vertices,
                0,
                bytemuck::cast_slice(scene.grid.positions()),
            );
            scene.grid.clear_dirty();
        }
        // Rotations change every tick, so shape instances are always rewritten.
        let shapes = wire::shape_instances(&scene.shapes);
        if !shapes.is_empty() {
            self.queue
                .write_buffer(&self.shapes.instances, 0, bytemuck::cast_slice(&shapes));
        }
        if scene.particles.is_dirty() {
            let particles = points::particle_instances(&scene.particles);
            if !particles.is_empty() {
                self.queue.write_buffer(
                    &self.particles.instances,
                    0,
                    bytemuck::cast_slice(&particles),
                );
            }
            scene.particles.clear_dirty();
        }
    }
}

impl RenderSurface for GpuState {
    type Error = wgpu::SurfaceError;

    fn draw(&mut self, scene: &mut SceneState) -> Result<(), wgpu::SurfaceError> {
        self.write_globals(scene);
        self.upload_dirty(scene);

        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.surface.configure(&self.device, &self.config);
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            rpass.set_pipeline(&self.wire_pipeline);
            self.grid.draw(&mut rpass);
            self.shapes.draw(&mut rpass);
            rpass.set_pipeline(&self.particle_pipeline);
            self.particles.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.css_width = width;
        self.css_height = height;
        self.reconfigure();
    }

    fn set_pixel_density(&mut self, ratio: f64) {
        self.pixel_ratio = ratio;
        self.reconfigure();
    }
}
