// ABOUTME: Printer module for streaming styled segments to a network device
// ABOUTME: Exports the client, connection traits, wrapping, and control sequences

pub mod client;
pub mod device;
pub mod error;
pub mod escpos;
pub mod wrap;

pub use client::{CancelToken, PrinterClient};
pub use device::{DeviceConnection, DeviceConnector, TcpConnector};
pub use error::{PrintError, Result};
pub use wrap::wrap_text;
