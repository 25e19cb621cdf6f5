pub mod renderer;

pub use renderer::{cell_rect, Renderer, CELL_WIDTH};
