use js_sys::Float32Array;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlContextAttributes,
    WebGlProgram, WebGlShader, WebGlUniformLocation,
};

use crate::error::{LaserFlowError, Result, ShaderStage};
use crate::frame::SurfaceSize;
use crate::gpu::{GpuBackend, Surface};

/// `GpuBackend` over a canvas' WebGL2 context.
pub struct WebGl {
    gl: GL,
}

impl WebGl {
    /// Ask the canvas for an opaque, non-antialiased WebGL2 context.
    pub fn acquire(canvas: &HtmlCanvasElement) -> Result<Self> {
        let attrs = WebGlContextAttributes::new();
        attrs.set_alpha(false);
        attrs.set_antialias(false);
        let gl = canvas
            .get_context_with_context_options("webgl2", &attrs)
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<GL>().ok())
            .ok_or(LaserFlowError::ContextUnavailable)?;
        Ok(Self { gl })
    }
}

impl GpuBackend for WebGl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type Uniform = WebGlUniformLocation;

    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<WebGlShader> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        let shader = self
            .gl
            .create_shader(kind)
            .ok_or(LaserFlowError::ResourceAllocation("shader"))?;
        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);
        if self
            .gl
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            Ok(shader)
        } else {
            let log = self
                .gl
                .get_shader_info_log(&shader)
                .unwrap_or_else(|| "unknown shader error".to_string());
            self.gl.delete_shader(Some(&shader));
            Err(LaserFlowError::ShaderCompile { stage, log })
        }
    }

    fn link_program(&self, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram> {
        let program = self
            .gl
            .create_program()
            .ok_or(LaserFlowError::ResourceAllocation("program"))?;
        self.gl.attach_shader(&program, vertex);
        self.gl.attach_shader(&program, fragment);
        self.gl.link_program(&program);
        if self
            .gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            Ok(program)
        } else {
            let log = self
                .gl
                .get_program_info_log(&program)
                .unwrap_or_else(|| "unknown program error".to_string());
            self.gl.delete_program(Some(&program));
            Err(LaserFlowError::ProgramLink(log))
        }
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn upload_vertices(
        &self,
        program: &WebGlProgram,
        attribute: &str,
        vertices: &[f32],
    ) -> Result<WebGlBuffer> {
        let buffer = self
            .gl
            .create_buffer()
            .ok_or(LaserFlowError::ResourceAllocation("vertex buffer"))?;
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let data = Float32Array::from(vertices);
        self.gl
            .buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::STATIC_DRAW);

        // -1 when the attribute was optimized out; nothing to bind then
        let location = self.gl.get_attrib_location(program, attribute);
        if location >= 0 {
            let location = location as u32;
            self.gl.enable_vertex_attrib_array(location);
            self.gl
                .vertex_attrib_pointer_with_i32(location, 2, GL::FLOAT, false, 0, 0);
        }
        Ok(buffer)
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn uniform1f(&self, location: Option<&WebGlUniformLocation>, x: f32) {
        self.gl.uniform1f(location, x);
    }

    fn uniform2f(&self, location: Option<&WebGlUniformLocation>, x: f32, y: f32) {
        self.gl.uniform2f(location, x, y);
    }

    fn uniform3f(&self, location: Option<&WebGlUniformLocation>, x: f32, y: f32, z: f32) {
        self.gl.uniform3f(location, x, y, z);
    }

    fn viewport(&self, size: SurfaceSize) {
        self.gl.viewport(0, 0, size.width as i32, size.height as i32);
    }

    fn draw_triangles(&self, vertex_count: i32) {
        self.gl.draw_arrays(GL::TRIANGLES, 0, vertex_count);
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        self.gl.delete_shader(Some(shader));
    }

    fn delete_program(&self, program: &WebGlProgram) {
        self.gl.delete_program(Some(program));
    }

    fn delete_buffer(&self, buffer: &WebGlBuffer) {
        self.gl.delete_buffer(Some(buffer));
    }
}

/// The canvas seen as a `Surface`: `clientWidth`/`clientHeight` for layout,
/// `width`/`height` for the backing store.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl Surface for CanvasSurface {
    fn layout_size(&self) -> (f64, f64) {
        (
            self.canvas.client_width() as f64,
            self.canvas.client_height() as f64,
        )
    }

    fn device_pixel_ratio(&self) -> f64 {
        web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
    }

    fn backing_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width(), self.canvas.height())
    }

    fn set_backing_size(&self, size: SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }
}
