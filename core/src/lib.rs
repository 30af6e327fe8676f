// voxels renders first-person views of a heightfield, Comanche style:
// depth slices are swept far to near and every screen column is filled
// from its projected terrain row down, so near terrain paints over far terrain.
pub mod camera;
pub mod config;
pub mod error;
pub mod field;
pub mod framebuffer;
pub mod preprocess;
pub mod renderer;
pub mod sky;

pub use camera::Camera;
pub use config::{EdgePolicy, HeightMode, RenderConfig, SKY_BLUE};
pub use error::{Result, VoxelError};
pub use field::{SampleField, Terrain};
pub use framebuffer::Framebuffer;
pub use renderer::VoxelRenderer;
