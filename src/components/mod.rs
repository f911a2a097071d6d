pub mod counter;
pub mod dom;
mod effects;
pub mod menu;
pub mod network;
pub mod observer;
pub mod scroll;

pub use effects::PageEffects;
