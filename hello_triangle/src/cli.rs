use clap::Parser;
use glboot::{GlProfile, GlVersion, WindowConfig};

#[derive(Parser, Debug)]
#[command(
    name = "hello_triangle",
    version,
    about = "Draws a red triangle with OpenGL. Press Escape to quit."
)]
pub struct Cli {
    /// Window title.
    #[arg(long, default_value = "Hello World", env = "HELLO_TRIANGLE_TITLE")]
    pub title: String,

    /// Window width in pixels.
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Window height in pixels.
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// OpenGL context version to request.
    #[arg(long, value_name = "MAJOR.MINOR", default_value = "3.3")]
    pub gl_version: GlVersion,

    /// Request a compatibility profile instead of core.
    #[arg(long)]
    pub compat: bool,

    /// Sync buffer swaps to the display refresh rate.
    #[arg(long)]
    pub vsync: bool,

    /// Forward GL debug output to the log (needs GL 4.3 or KHR_debug).
    #[arg(long)]
    pub debug_gl: bool,

    /// Log filter in `env_logger` syntax; falls back to `RUST_LOG`, then `info`.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Cli {
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            gl_version: self.gl_version,
            profile: if self.compat {
                GlProfile::Compatibility
            } else {
                GlProfile::Core
            },
            vsync: self.vsync,
            hidden: false,
        }
    }
}
