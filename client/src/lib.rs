pub mod chain;
pub mod node;
pub mod utils;

pub use chain::*;
pub use node::*;
pub use utils::*;
