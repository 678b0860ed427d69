pub mod shape_pipeline;

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use shape_pipeline::{ShapePipelines, ShapeVertex, create_shape_pipelines};

use crate::camera::CameraUniform;
use crate::engine::Color;
use crate::ui::{Blend, DrawList};

const CLEAR_COLOR: Color = Color::BLACK;

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported texture format")]
    NoSurfaceFormat,
}

/// Draws a [`DrawList`] to the window.
///
/// Geometry is in logical coordinates; the projection maps the logical
/// screen onto the whole surface, so the picture stretches with the window
/// exactly as touches are scaled back through `WindowConfig::to_logical`.
pub struct Renderer {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipelines: ShapePipelines,
    projection_bind_group: wgpu::BindGroup,
}

impl Renderer {
    pub async fn new(
        window: Arc<Window>,
        logical_width: f32,
        logical_height: f32,
    ) -> Result<Self, RendererError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(Arc::clone(&window))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(RendererError::NoSurfaceFormat)?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipelines = create_shape_pipelines(&device, format);

        let projection = CameraUniform::ortho(logical_width, logical_height);
        let projection_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("projection_buffer"),
            contents: bytemuck::cast_slice(&[projection]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let projection_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("projection_bg"),
            layout: &pipelines.projection_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_buffer.as_entire_binding(),
            }],
        });

        info!(
            width = config.width,
            height = config.height,
            format = ?format,
            "renderer initialised"
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipelines,
            projection_bind_group,
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Render one frame: every batch of `list`, in order, each with the
    /// pipeline for its blend mode.
    pub fn render(&mut self, list: &DrawList) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let vertices: Vec<ShapeVertex> = list
            .batches()
            .iter()
            .flat_map(|b| b.vertices.iter().copied())
            .collect();

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        {
            let [r, g, b, a] = CLEAR_COLOR.0;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shape_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if !vertices.is_empty() {
                let vbuf = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("shape_vertex_buffer"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                pass.set_bind_group(0, &self.projection_bind_group, &[]);
                pass.set_vertex_buffer(0, vbuf.slice(..));

                let mut start = 0u32;
                for batch in list.batches() {
                    let count = batch.vertices.len() as u32;
                    if count == 0 {
                        continue;
                    }
                    let pipeline = match batch.blend {
                        Blend::Alpha => &self.pipelines.alpha,
                        Blend::Additive => &self.pipelines.additive,
                        Blend::Multiply => &self.pipelines.multiply,
                    };
                    pass.set_pipeline(pipeline);
                    pass.draw(start..start + count, 0..1);
                    start += count;
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Reconfigure after the surface was lost or became outdated.
    pub fn recover_surface(&mut self) {
        warn!("surface lost, reconfiguring");
        let size = self.window.inner_size();
        self.resize(size);
    }
}
