pub mod coord;
pub mod presets;
pub mod registry;

pub use coord::Coord;
pub use presets::BUILTIN;
pub use registry::{Viewpoint, ViewpointRegistry, RegistryError};
