// ABOUTME: Device connection traits and the TCP transport for network printers
// ABOUTME: Handles address resolution, connect and write timeouts, and shutdown

use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use super::error::{PrintError, Result};

/// Default port for raw-socket printing.
const DEFAULT_PORT: u16 = 9100;

/// An open, writable connection to a print device.
///
/// The client closes every connection it opens exactly once, on every exit
/// path; `close` must tolerate being the last operation after a failed write.
pub trait DeviceConnection {
    fn send(&mut self, bytes: &[u8]) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}

/// Opens device connections. One connection is opened per print request;
/// connections are never pooled or reused.
pub trait DeviceConnector {
    fn connect(&self) -> Result<Box<dyn DeviceConnection>>;
}

/// Connects to a printer over TCP with connect and write timeouts.
pub struct TcpConnector {
    address: String,
    timeout: Duration,
}

impl TcpConnector {
    pub fn new(address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            address: address.into(),
            timeout,
        }
    }

    fn resolve(&self) -> Result<SocketAddr> {
        let target = if self.address.contains(':') {
            self.address.clone()
        } else {
            format!("{}:{DEFAULT_PORT}", self.address)
        };
        target
            .to_socket_addrs()
            .map_err(|source| PrintError::Connection {
                address: self.address.clone(),
                source,
            })?
            .next()
            .ok_or_else(|| PrintError::InvalidAddress {
                address: self.address.clone(),
            })
    }
}

impl DeviceConnector for TcpConnector {
    fn connect(&self) -> Result<Box<dyn DeviceConnection>> {
        let addr = self.resolve()?;
        debug!("Connecting to printer at {}", addr);
        let stream =
            TcpStream::connect_timeout(&addr, self.timeout).map_err(|source| {
                PrintError::Connection {
                    address: self.address.clone(),
                    source,
                }
            })?;
        stream.set_write_timeout(Some(self.timeout))?;
        Ok(Box::new(TcpConnection { stream }))
    }
}

struct TcpConnection {
    stream: TcpStream,
}

impl DeviceConnection for TcpConnection {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        use std::io::Write;
        self.stream.write_all(bytes)?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        use std::io::Write;
        self.stream.flush()?;
        self.stream.shutdown(Shutdown::Both)?;
        Ok(())
    }
}
