pub mod commands;
pub mod console;
pub mod replies;
pub mod scheduler;
pub mod transport;

pub use commands::{handle_inbound, Command};
pub use console::{ConsoleDirectory, ConsoleTransport};
pub use scheduler::{run_cycles, CycleContext};
pub use transport::{ConnectError, Inbound, LookupError, NameDirectory, Outbound};
