/// Build planning domain layer
///
/// Pure business logic: the catalog, the per-slot build, price totals,
/// and free-text catalog filtering. Nothing in here performs I/O.
pub mod domain;
pub mod services;
