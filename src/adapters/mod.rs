/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with external systems.
pub mod inbound;
pub mod outbound;
