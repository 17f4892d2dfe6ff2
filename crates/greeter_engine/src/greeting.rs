/// Name the `greeter` binary greets.
pub const DEFAULT_NAME: &str = "World";

/// Formats the greeting for `name` as `Hello, <name>!`.
///
/// Total over all inputs: the name is inserted verbatim, empty or not.
///
/// ```
/// assert_eq!(greeter_engine::hello("Alice"), "Hello, Alice!");
/// ```
pub fn hello(name: &str) -> String {
    format!("Hello, {name}!")
}
