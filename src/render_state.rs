use failure::{format_err, Error};
use glam::Mat4;
use log::{debug, info};
use wgpu::{
    BindGroup, BindGroupLayout, Buffer, Device, Instance, Queue, Surface, SurfaceConfiguration,
    TextureFormat,
};
use winit::window::Window;

pub struct RenderState {
    pub instance: Instance,
    pub surface: Surface,
    pub config: SurfaceConfiguration,
    pub swapchain_format: TextureFormat,
    pub queue: Queue,
    pub device: Device,
    pub general_bind_group_layout: BindGroupLayout,
    pub general_bind_group: BindGroup,
    pub projection_buffer: Buffer,
}

impl RenderState {
    pub async fn new(window: &Window) -> Result<Self, Error> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::Backends::all());
        let surface = unsafe { instance.create_surface(&window) };
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                // Request an adapter which can render to our surface
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or_else(|| format_err!("Failed to find an appropriate adapter"))?;

        info!("Using adapter {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    features: wgpu::Features::empty(),
                    limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
                },
                None,
            )
            .await?;

        let swapchain_format = *surface
            .get_supported_formats(&adapter)
            .first()
            .ok_or_else(|| format_err!("Surface is incompatible with the adapter"))?;

        debug!("Swapchain format: {:?}", swapchain_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: swapchain_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
        };

        surface.configure(&device, &config);

        let general_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: None,
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(64),
                    },
                    count: None,
                }],
            });

        let projection_buffer = crate::util::mat4_identity(&device);

        let general_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &general_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_buffer.as_entire_binding(),
            }],
            label: None,
        });

        Ok(RenderState {
            instance,
            surface,
            swapchain_format,
            config,
            queue,
            device,
            general_bind_group_layout,
            general_bind_group,
            projection_buffer,
        })
    }

    pub fn set_projection(&self, projection_matrix: Mat4) {
        self.queue.write_buffer(
            &self.projection_buffer,
            0,
            bytemuck::cast_slice(projection_matrix.as_ref()),
        );
    }

    pub fn reconfigure(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        debug!("Reconfiguring surface to {}x{}", width, height);
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Re-applies the current configuration after a lost or outdated surface.
    pub fn restore(&mut self) {
        let (width, height) = (self.config.width, self.config.height);
        self.reconfigure(width, height);
    }
}
