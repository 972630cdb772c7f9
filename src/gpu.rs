//! The narrow slice of a GPU API the renderer needs.
//!
//! In the browser this is implemented over `WebGl2RenderingContext`; tests
//! plug in a recording backend so the setup/frame/teardown rules can be
//! checked without a graphics context.

use crate::error::{Result, ShaderStage};
use crate::frame::SurfaceSize;

pub trait GpuBackend {
    type Shader;
    type Program;
    type Buffer;
    type Uniform;

    /// Compile one stage. On failure the shader object is already deleted
    /// and the error carries the compiler log.
    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<Self::Shader>;

    /// Link two compiled stages. On failure the program object is already
    /// deleted; the stages are left to the caller.
    fn link_program(&self, vertex: &Self::Shader, fragment: &Self::Shader)
        -> Result<Self::Program>;

    fn use_program(&self, program: &Self::Program);

    /// Upload `vertices` as a static buffer and bind it to the named 2D
    /// attribute of `program`.
    fn upload_vertices(
        &self,
        program: &Self::Program,
        attribute: &str,
        vertices: &[f32],
    ) -> Result<Self::Buffer>;

    fn uniform_location(&self, program: &Self::Program, name: &str) -> Option<Self::Uniform>;

    fn uniform1f(&self, location: Option<&Self::Uniform>, x: f32);
    fn uniform2f(&self, location: Option<&Self::Uniform>, x: f32, y: f32);
    fn uniform3f(&self, location: Option<&Self::Uniform>, x: f32, y: f32, z: f32);

    fn viewport(&self, size: SurfaceSize);
    fn draw_triangles(&self, vertex_count: i32);

    fn delete_shader(&self, shader: &Self::Shader);
    fn delete_program(&self, program: &Self::Program);
    fn delete_buffer(&self, buffer: &Self::Buffer);
}

/// A drawable element: layout size in CSS pixels plus a resizable backing
/// store in device pixels.
pub trait Surface {
    fn layout_size(&self) -> (f64, f64);
    fn device_pixel_ratio(&self) -> f64;
    fn backing_size(&self) -> SurfaceSize;
    fn set_backing_size(&self, size: SurfaceSize);
}
