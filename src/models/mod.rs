pub mod input;
pub mod plan;
pub mod vocabulary;

pub use input::*;
pub use plan::*;
