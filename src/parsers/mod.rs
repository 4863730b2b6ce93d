pub mod mbank;
pub mod traits;

pub mod prelude {
    pub use super::mbank::prelude::*;
    pub use super::traits::Parser;
}
