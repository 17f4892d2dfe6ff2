/* 📖 # Why is the CLI minimal and hardcoded?

The greeter takes no arguments, reads no environment variables and no files.
It always prints `Hello, World!`.

Exit codes:
- 0: Greeting printed
- 1: Tracing could not be initialized
*/

use std::process;

use greeter_base::tracing::init_tracing;
use greeter_engine::{DEFAULT_NAME, hello};

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Error: {:?}", e);
        process::exit(1);
    }

    println!("{}", hello(DEFAULT_NAME));
}
