//! Page components: the canvas background plus the reference and contact
//! sections layered above it.

pub mod contact;
pub mod network;
pub mod references;
