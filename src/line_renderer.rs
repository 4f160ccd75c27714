use log::debug;
use std::borrow::Cow;
use std::mem;

use bytemuck::{Pod, Zeroable};
use wgpu::{
    util::DeviceExt, BindGroupLayout, Buffer, Device, PrimitiveTopology, RenderPass,
    RenderPipeline, ShaderModule, TextureFormat, VertexAttribute, VertexBufferLayout,
};

use crate::frame::{Color, Frame};

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct LineVertex {
    pub _pos: [f32; 2],
    pub _color: [f32; 4],
}

impl LineVertex {
    pub fn new(x: f64, y: f64, color: Color) -> Self {
        Self {
            _pos: [x as f32, y as f32],
            _color: color,
        }
    }

    fn desc<'a>() -> VertexBufferLayout<'a> {
        const ATTRS: [VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];
        VertexBufferLayout {
            array_stride: mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRS,
        }
    }
}

/// Flattens a frame into line list and point list vertices.
pub fn frame_vertices(frame: &Frame) -> (Vec<LineVertex>, Vec<LineVertex>) {
    let lines = frame
        .lines
        .iter()
        .flat_map(|line| {
            [
                LineVertex::new(line.from.x, line.from.y, line.color),
                LineVertex::new(line.to.x, line.to.y, line.color),
            ]
        })
        .collect();
    let points = frame
        .points
        .iter()
        .map(|point| LineVertex::new(point.pos.x, point.pos.y, point.color))
        .collect();
    (lines, points)
}

struct Batch {
    buffer: Buffer,
    count: u32,
}

impl Batch {
    fn upload(device: &Device, label: &str, vertices: &[LineVertex]) -> Option<Self> {
        if vertices.is_empty() {
            return None;
        }
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Some(Self {
            buffer,
            count: vertices.len() as u32,
        })
    }
}

pub struct LineRenderer {
    line_pipeline: RenderPipeline,
    point_pipeline: RenderPipeline,
    lines: Option<Batch>,
    points: Option<Batch>,
}

impl LineRenderer {
    pub fn new(
        device: &Device,
        bind_group_layout: &BindGroupLayout,
        swapchain_format: TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: None,
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!("../shaders/lines.wgsl"))),
        });

        debug!("Vertex buffer stride: {:?}", mem::size_of::<LineVertex>());

        Self {
            line_pipeline: Self::pipeline(
                device,
                &shader,
                bind_group_layout,
                swapchain_format,
                PrimitiveTopology::LineList,
            ),
            point_pipeline: Self::pipeline(
                device,
                &shader,
                bind_group_layout,
                swapchain_format,
                PrimitiveTopology::PointList,
            ),
            lines: None,
            points: None,
        }
    }

    fn pipeline(
        device: &Device,
        shader: &ShaderModule,
        bind_group_layout: &BindGroupLayout,
        swapchain_format: TextureFormat,
        topology: PrimitiveTopology,
    ) -> RenderPipeline {
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: None,
            bind_group_layouts: &[bind_group_layout],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: None,
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: "vs_main",
                buffers: &[LineVertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: "fs_main",
                targets: &[Some(swapchain_format.into())],
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        })
    }

    /// Replaces the vertex buffers with the contents of `frame`.
    pub fn prepare(&mut self, device: &Device, frame: &Frame) {
        let (lines, points) = frame_vertices(frame);
        self.lines = Batch::upload(device, "Frame Lines", &lines);
        self.points = Batch::upload(device, "Frame Points", &points);
    }

    pub fn draw<'pass>(&'pass self, pass: &mut RenderPass<'pass>) {
        if let Some(lines) = &self.lines {
            pass.set_pipeline(&self.line_pipeline);
            pass.set_vertex_buffer(0, lines.buffer.slice(..));
            pass.draw(0..lines.count, 0..1);
        }
        if let Some(points) = &self.points {
            pass.set_pipeline(&self.point_pipeline);
            pass.set_vertex_buffer(0, points.buffer.slice(..));
            pass.draw(0..points.count, 0..1);
        }
    }
}
