pub mod consts;
pub mod entry;
pub mod error;
pub mod sentinel;

pub use crate::consts::*;

pub mod prelude {
    pub use crate::consts::*;
    pub use crate::entry::*;
    pub use crate::error::*;
    pub use crate::sentinel::*;
}
