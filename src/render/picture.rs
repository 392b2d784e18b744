use crate::core::geometry::{plane_geometry, PlaneVertex};
use crate::core::ClickableSurface;
use glam::Mat4;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PictureUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) frequency: f32,
    pub(crate) time: f32,
    pub(crate) oscillation_frequency: f32,
    pub(crate) amplitude: f32,
}

impl PictureUniforms {
    pub(crate) fn for_surface(surface: &ClickableSurface, view_proj: Mat4) -> Self {
        let p = &surface.params;
        Self {
            model: surface.model_matrix().to_cols_array_2d(),
            view_proj: view_proj.to_cols_array_2d(),
            color: [p.color[0], p.color[1], p.color[2], 1.0],
            frequency: p.frequency,
            time: p.time,
            oscillation_frequency: p.oscillation_frequency,
            amplitude: p.amplitude,
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

/// Pipeline and bind group layouts shared by every picture plane.
pub(crate) struct PictureResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_bgl: wgpu::BindGroupLayout,
    pub(crate) texture_bgl: wgpu::BindGroupLayout,
}

/// GPU buffers for one clickable surface.
pub(crate) struct PictureMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) uniform_bg: wgpu::BindGroup,
}

pub(crate) fn create_picture_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
) -> PictureResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("picture_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PICTURE_WGSL.into()),
    });
    let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("picture_uniform_bgl"),
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
    let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("picture_texture_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("picture_pl"),
        bind_group_layouts: &[&uniform_bgl, &texture_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("picture_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_picture"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PlaneVertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // Double-sided: no culling
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: depth_format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_picture"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    PictureResources {
        pipeline,
        uniform_bgl,
        texture_bgl,
    }
}

pub(crate) fn create_picture_mesh(
    device: &wgpu::Device,
    resources: &PictureResources,
    surface: &ClickableSurface,
) -> PictureMesh {
    let geometry = plane_geometry(surface.size, surface.segments);
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(surface.name),
        contents: bytemuck::cast_slice(&geometry.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(surface.name),
        contents: bytemuck::cast_slice(&geometry.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("picture_uniforms"),
        size: std::mem::size_of::<PictureUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let uniform_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("picture_uniform_bg"),
        layout: &resources.uniform_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    PictureMesh {
        vertex_buffer,
        index_buffer,
        index_count: geometry.indices.len() as u32,
        uniform_buffer,
        uniform_bg,
    }
}
