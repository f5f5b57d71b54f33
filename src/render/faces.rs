use glam::Mat4;
use wgpu::util::DeviceExt;

use super::helpers;
use crate::core::{CubeFace, DecodedImage, FaceLayout, FaceShading};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct QuadVertex {
    position: [f32; 2],
    uv: [f32; 2],
}

// Unit quad facing +Z, counter-clockwise; uv origin bottom-left.
const QUAD: [QuadVertex; 6] = [
    QuadVertex { position: [-0.5, -0.5], uv: [0.0, 0.0] },
    QuadVertex { position: [0.5, -0.5], uv: [1.0, 0.0] },
    QuadVertex { position: [0.5, 0.5], uv: [1.0, 1.0] },
    QuadVertex { position: [-0.5, -0.5], uv: [0.0, 0.0] },
    QuadVertex { position: [0.5, 0.5], uv: [1.0, 1.0] },
    QuadVertex { position: [-0.5, 0.5], uv: [0.0, 1.0] },
];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FaceUniforms {
    mvp: [[f32; 4]; 4],
    opacity: f32,
    radius: f32,
    saturation: f32,
    brightness: f32,
    contrast: f32,
    max_opacity: f32,
    tex_rotation: f32,
    _pad: f32,
}

impl FaceUniforms {
    fn pack(mvp: Mat4, shading: &FaceShading) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            opacity: shading.opacity,
            radius: shading.radius,
            saturation: shading.saturation,
            brightness: shading.brightness,
            contrast: shading.contrast,
            max_opacity: shading.max_opacity,
            tex_rotation: shading.texture_rotation,
            _pad: 0.0,
        }
    }
}

/// GPU objects for one panel.
struct FacePanel {
    layout: FaceLayout,
    shading: FaceShading,
    uniform_buffer: wgpu::Buffer,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// Pipeline and per-panel resources for the six cube faces.
pub(crate) struct FaceResources {
    pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    vertex_buffer: wgpu::Buffer,
    panels: Vec<FacePanel>,
}

impl FaceResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
        layouts: &[FaceLayout],
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cube_face_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::CUBE_FACE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("face_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("face_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("face_pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_face"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<QuadVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: sample_count,
                ..Default::default()
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_face"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("face_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("face_quad"),
            contents: bytemuck::cast_slice(&QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let placeholder = DecodedImage::transparent_pixel();
        let panels = layouts
            .iter()
            .map(|layout| {
                let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("face_uniforms"),
                    size: std::mem::size_of::<FaceUniforms>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let (texture, view) =
                    helpers::upload_rgba_texture(device, queue, layout.face.name(), &placeholder);
                let bind_group =
                    Self::bind_group(device, &bgl, &uniform_buffer, &view, &sampler);
                FacePanel {
                    layout: *layout,
                    shading: FaceShading::new(layout.face, layout.size),
                    uniform_buffer,
                    texture,
                    bind_group,
                }
            })
            .collect();

        Self {
            pipeline,
            bgl,
            sampler,
            vertex_buffer,
            panels,
        }
    }

    fn bind_group(
        device: &wgpu::Device,
        bgl: &wgpu::BindGroupLayout,
        uniform_buffer: &wgpu::Buffer,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("face_bg"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    /// Replace a panel's placeholder with its decoded image.
    pub(crate) fn set_image(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        face: CubeFace,
        image: &DecodedImage,
    ) {
        let Some(panel) = self.panels.iter_mut().find(|p| p.layout.face == face) else {
            return;
        };
        let (texture, view) = helpers::upload_rgba_texture(device, queue, face.name(), image);
        panel.bind_group =
            Self::bind_group(device, &self.bgl, &panel.uniform_buffer, &view, &self.sampler);
        panel.texture.destroy();
        panel.texture = texture;
    }

    /// Write uniforms for every panel given the cube transform and opacity.
    pub(crate) fn update(
        &mut self,
        queue: &wgpu::Queue,
        view_proj: Mat4,
        cube_model: Mat4,
        opacity: f32,
    ) {
        for panel in &mut self.panels {
            panel.shading.opacity = opacity;
            let mvp = view_proj * cube_model * panel.layout.model_matrix();
            let u = FaceUniforms::pack(mvp, &panel.shading);
            queue.write_buffer(&panel.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        for panel in &self.panels {
            rpass.set_bind_group(0, &panel.bind_group, &[]);
            rpass.draw(0..QUAD.len() as u32, 0..1);
        }
    }
}
