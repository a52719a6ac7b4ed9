pub mod renderer;

pub use renderer::{cell_glyph, CellGlyph, Renderer};
