pub mod empty;
pub mod error;
pub mod fetch_render;
pub mod loading;
