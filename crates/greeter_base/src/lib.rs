/* 📖 # Why have greeter_base as a separate crate?
greeter_base holds the error type and tracing setup shared by the engine and the CLI.
Keeping them here lets both depend on it without depending on each other.
*/

pub mod error;
pub mod tracing;

pub use error::{ErrorKind, GreeterError, GreeterResult, ResultExt};
