/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports - infrastructure
/// interfaces) through which the application core reaches the file system
/// and the console.
pub mod outbound;
