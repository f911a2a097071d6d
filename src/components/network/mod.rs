mod background;
mod component;
mod host;
mod interactive;
mod random;
mod render;
mod types;

pub use background::BackgroundField;
pub use component::{NetworkHandle, attach_background, attach_network};
pub use host::CanvasHost;
