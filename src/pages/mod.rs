//! Page components for Infinitum.

mod profile;

pub use profile::ProfileScreen;
