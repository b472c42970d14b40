pub mod groq;
pub mod interface;

pub use groq::*;
pub use interface::*;
