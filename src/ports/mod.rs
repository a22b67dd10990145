/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the seams between the application core and the
/// provider API, randomness, time and output destinations.
pub mod outbound;
