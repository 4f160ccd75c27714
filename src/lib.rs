mod app;
mod config;
mod frame;
mod input;
mod line_renderer;
pub mod polar;
pub mod polygon;
mod render_state;
mod scene;
mod starfield;
pub mod util;

pub use app::*;
pub use config::*;
pub use frame::*;
pub use input::*;
pub use line_renderer::*;
pub use render_state::*;
pub use scene::*;
pub use starfield::*;
