pub mod greeting;

pub use greeting::{DEFAULT_NAME, hello};
