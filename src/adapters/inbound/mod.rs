/// Inbound adapters - drive the application from user input
mod shell;

pub use shell::InteractiveShell;
