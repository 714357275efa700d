use std::slice;

use glam::Vec2;
use glow::{
    Context, HasContext as _, NativeBuffer, NativeVertexArray, ARRAY_BUFFER, FLOAT, MAP_READ_BIT,
    STATIC_DRAW, TRIANGLES,
};

use crate::{check_error, clear_stale_errors, SceneError};

/// Attribute location the `position` input is bound to in the shaders.
pub const POSITION_LOCATION: u32 = 0;

/// 2D positions uploaded once into an array buffer, plus the vertex array
/// describing them.
#[derive(Debug)]
pub struct VertexBuffer {
    vao: NativeVertexArray,
    vbo: NativeBuffer,
    vertex_count: i32,
}

/// GL takes vertex counts and byte sizes as `i32`.
fn gl_sizes(vertex_count: usize) -> Result<(i32, i32), SceneError> {
    let too_large = || SceneError::Resource {
        what: "vertex buffer",
        reason: format!("{vertex_count} vertices do not fit a GL size"),
    };
    let count = i32::try_from(vertex_count).map_err(|_| too_large())?;
    let bytes = vertex_count
        .checked_mul(size_of::<Vec2>())
        .and_then(|bytes| i32::try_from(bytes).ok())
        .ok_or_else(too_large)?;
    Ok((count, bytes))
}

impl VertexBuffer {
    pub fn upload(gl: &Context, vertices: &[Vec2]) -> Result<Self, SceneError> {
        let (vertex_count, _) = gl_sizes(vertices.len())?;
        clear_stale_errors(gl, "vertex upload");
        unsafe {
            let vao = gl.create_vertex_array().map_err(|reason| SceneError::Resource {
                what: "vertex array",
                reason,
            })?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(reason) => {
                    gl.delete_vertex_array(vao);
                    return Err(SceneError::Resource {
                        what: "vertex buffer",
                        reason,
                    });
                }
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(ARRAY_BUFFER, bytemuck::cast_slice(vertices), STATIC_DRAW);
            gl.vertex_attrib_pointer_f32(POSITION_LOCATION, 2, FLOAT, false, 0, 0);
            gl.enable_vertex_attrib_array(POSITION_LOCATION);

            if let Err(e) = check_error(gl, "upload vertex buffer") {
                gl.bind_vertex_array(None);
                gl.delete_buffer(vbo);
                gl.delete_vertex_array(vao);
                return Err(e.into());
            }

            log::debug!(
                "uploaded {} vertices ({} bytes)",
                vertices.len(),
                size_of_val(vertices)
            );

            Ok(VertexBuffer {
                vao,
                vbo,
                vertex_count,
            })
        }
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    /// Draws the whole buffer as triangles with whatever program is bound.
    pub fn draw(&self, gl: &Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(TRIANGLES, 0, self.vertex_count);
        }
    }

    /// Maps the buffer for reading and copies its contents out. The buffer is
    /// always unmapped again before this returns.
    pub fn read_back(&self, gl: &Context) -> Result<Vec<u8>, SceneError> {
        let (_, len) = gl_sizes(self.vertex_count as usize)?;
        clear_stale_errors(gl, "vertex read-back");
        unsafe {
            gl.bind_buffer(ARRAY_BUFFER, Some(self.vbo));
            let ptr = gl.map_buffer_range(ARRAY_BUFFER, 0, len, MAP_READ_BIT) as *const u8;
            if ptr.is_null() {
                check_error(gl, "map vertex buffer")?;
                return Err(SceneError::Resource {
                    what: "buffer mapping",
                    reason: "driver returned a null pointer".into(),
                });
            }
            let bytes = slice::from_raw_parts(ptr, len as usize).to_vec();
            gl.unmap_buffer(ARRAY_BUFFER);
            check_error(gl, "read back vertex buffer")?;
            Ok(bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_for_the_triangle() {
        assert_eq!(gl_sizes(3).unwrap(), (3, 24));
        assert_eq!(gl_sizes(0).unwrap(), (0, 0));
    }

    #[test]
    fn oversized_vertex_counts_are_rejected() {
        for count in [usize::MAX, i32::MAX as usize + 1, i32::MAX as usize / 4] {
            let error = gl_sizes(count).unwrap_err();
            assert!(
                matches!(error, SceneError::Resource { what: "vertex buffer", .. }),
                "{count}: {error}"
            );
        }
    }
}
