/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the seams between the application core and the
/// file system, the remote SCA service and the console.
pub mod outbound;
