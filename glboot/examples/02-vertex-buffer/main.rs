use glboot::glow::Context;
use glboot::logging::init_logging;
use glboot::triangle::TRIANGLE;
use glboot::{BootstrapError, GlProfile, Scene, SceneError, VertexBuffer};

/// The triangle from a vertex buffer with no program bound. Only a
/// compatibility context draws anything this way (fixed-function white).
struct VertexBufferTriangle {
    vertices: VertexBuffer,
}

impl Scene for VertexBufferTriangle {
    fn init(gl: &Context) -> Result<Self, SceneError> {
        let vertices = VertexBuffer::upload(gl, &TRIANGLE)?;
        log::info!("uploaded {} vertices", vertices.vertex_count());
        Ok(VertexBufferTriangle { vertices })
    }

    fn display(&mut self, gl: &Context) {
        self.vertices.draw(gl);
    }
}

fn main() -> Result<(), BootstrapError> {
    init_logging(None);
    VertexBufferTriangle::sdl2_window("Hello World")
        .profile(GlProfile::Compatibility)
        .start()
}
