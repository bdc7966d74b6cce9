// ABOUTME: Printer client that streams styled segments to a device connection
// ABOUTME: Applies style sequences, word wrapping, cancellation, and guaranteed close

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::device::{DeviceConnection, DeviceConnector, TcpConnector};
use super::error::{PrintError, Result};
use super::escpos;
use super::wrap::wrap_text;
use crate::renderer::StyledSegment;

/// Lines fed before the cut so the printed text clears the tear bar.
const FEED_BEFORE_CUT: u8 = 5;

/// Cooperative cancellation flag, checked between segment writes.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Sends rendered segments to a print device.
///
/// One connection is opened per print call and closed exactly once on every
/// exit path; a close failure never masks the error that ended the write.
pub struct PrinterClient {
    connector: Box<dyn DeviceConnector>,
    width: usize,
}

impl PrinterClient {
    pub fn new(connector: Box<dyn DeviceConnector>, width: usize) -> Self {
        Self { connector, width }
    }

    /// Client talking to a network printer at `address` (port 9100 unless the
    /// address carries one).
    pub fn network(address: &str, width: usize, timeout: Duration) -> Self {
        Self::new(Box::new(TcpConnector::new(address, timeout)), width)
    }

    pub fn print(&self, segments: &[StyledSegment]) -> Result<()> {
        self.print_with_cancel(segments, &CancelToken::new())
    }

    /// Print `segments`, honouring `cancel` between segment writes.
    pub fn print_with_cancel(&self, segments: &[StyledSegment], cancel: &CancelToken) -> Result<()> {
        let mut connection = self.connector.connect()?;
        let outcome = self.write_segments(connection.as_mut(), segments, cancel);
        let close_outcome = connection.close();

        match outcome {
            Ok(()) => close_outcome,
            Err(err) => {
                if let Err(close_err) = close_outcome {
                    warn!("Failed to close printer connection: {}", close_err);
                }
                Err(err)
            }
        }
    }

    fn write_segments(
        &self,
        connection: &mut dyn DeviceConnection,
        segments: &[StyledSegment],
        cancel: &CancelToken,
    ) -> Result<()> {
        connection.send(&escpos::INIT)?;
        for segment in segments {
            if cancel.is_cancelled() {
                return Err(PrintError::Cancelled);
            }
            connection.send(&self.segment_bytes(segment))?;
        }
        connection.send(&escpos::feed(FEED_BEFORE_CUT))?;
        connection.send(&escpos::CUT)?;
        debug!("Printed {} segments", segments.len());
        Ok(())
    }

    /// Style prelude plus wrapped text for one segment, as a single write.
    fn segment_bytes(&self, segment: &StyledSegment) -> Vec<u8> {
        let styles = segment.styles;
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&escpos::align(styles.align));
        bytes.extend_from_slice(&escpos::bold(styles.bold));
        bytes.extend_from_slice(&escpos::italic(styles.italic));
        bytes.extend_from_slice(&escpos::char_size(styles.double_width, styles.double_height));
        bytes.extend_from_slice(wrap_text(&segment.text, self.width).as_bytes());
        bytes
    }
}
