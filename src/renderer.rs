use crate::config::LaserFlowConfig;
use crate::error::{Result, ShaderStage};
use crate::frame::{FrameClock, SurfaceSize};
use crate::gpu::{GpuBackend, Surface};
use crate::shaders;

/// What a single frame did, mostly for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    pub elapsed: f32,
    pub size: SurfaceSize,
    pub resized: bool,
}

/// Owns the linked program, its two stages and the quad buffer for one
/// canvas. Built by [`Renderer::new`], released by [`Renderer::destroy`].
pub struct Renderer<G: GpuBackend> {
    gpu: G,
    program: G::Program,
    vertex: G::Shader,
    fragment: G::Shader,
    quad: G::Buffer,
    u_time: Option<G::Uniform>,
    u_resolution: Option<G::Uniform>,
    clock: FrameClock,
}

impl<G: GpuBackend> Renderer<G> {
    /// Compile, link, upload the quad and set the static uniforms.
    ///
    /// On error nothing created here is left alive.
    pub fn new(gpu: G, config: &LaserFlowConfig) -> Result<Self> {
        let vertex = gpu.compile_shader(ShaderStage::Vertex, shaders::VERTEX_SHADER)?;
        let fragment = match gpu.compile_shader(ShaderStage::Fragment, shaders::FRAGMENT_SHADER) {
            Ok(shader) => shader,
            Err(e) => {
                gpu.delete_shader(&vertex);
                return Err(e);
            }
        };
        let program = match gpu.link_program(&vertex, &fragment) {
            Ok(program) => program,
            Err(e) => {
                gpu.delete_shader(&vertex);
                gpu.delete_shader(&fragment);
                return Err(e);
            }
        };
        gpu.use_program(&program);

        let quad = match gpu.upload_vertices(
            &program,
            shaders::POSITION_ATTRIBUTE,
            &shaders::QUAD_VERTICES,
        ) {
            Ok(buffer) => buffer,
            Err(e) => {
                gpu.delete_program(&program);
                gpu.delete_shader(&vertex);
                gpu.delete_shader(&fragment);
                return Err(e);
            }
        };

        let u_time = gpu.uniform_location(&program, shaders::U_TIME);
        let u_resolution = gpu.uniform_location(&program, shaders::U_RESOLUTION);

        let [r, g, b] = config.color.to_array();
        let u_color = gpu.uniform_location(&program, shaders::U_COLOR);
        gpu.uniform3f(u_color.as_ref(), r, g, b);
        for (name, value) in config.scalar_uniforms() {
            let location = gpu.uniform_location(&program, name);
            if location.is_none() {
                log::debug!("uniform {name} is inactive in the linked program");
            }
            gpu.uniform1f(location.as_ref(), value);
        }

        Ok(Self {
            gpu,
            program,
            vertex,
            fragment,
            quad,
            u_time,
            u_resolution,
            clock: FrameClock::new(),
        })
    }

    /// Resize if needed, push time and resolution, draw the quad.
    pub fn render_frame<S: Surface>(&mut self, surface: &S, now_ms: f64) -> FrameStats {
        let (css_w, css_h) = surface.layout_size();
        let size = SurfaceSize::from_layout(css_w, css_h, surface.device_pixel_ratio());
        let resized = size != surface.backing_size();
        if resized {
            log::debug!("resizing backing store to {}x{}", size.width, size.height);
            surface.set_backing_size(size);
        }

        self.gpu.viewport(size);
        let elapsed = self.clock.tick(now_ms);
        let (w, h) = size.as_f32();
        self.gpu.uniform1f(self.u_time.as_ref(), elapsed);
        self.gpu.uniform2f(self.u_resolution.as_ref(), w, h);
        self.gpu.draw_triangles(shaders::QUAD_VERTEX_COUNT);

        FrameStats {
            elapsed,
            size,
            resized,
        }
    }

    /// Release the program, both stages and the quad buffer.
    pub fn destroy(self) {
        self.gpu.delete_program(&self.program);
        self.gpu.delete_shader(&self.vertex);
        self.gpu.delete_shader(&self.fragment);
        self.gpu.delete_buffer(&self.quad);
    }
}
