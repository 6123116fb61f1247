pub mod components;

pub use components::{components, ComponentsArgs};
