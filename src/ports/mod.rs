/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the interfaces the application core uses to reach
/// the catalog source, the console, and the output destination.
pub mod outbound;
