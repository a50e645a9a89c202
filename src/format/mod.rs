//! Text export of graphs.

pub mod tgf;

pub use tgf::TgfWriter;
