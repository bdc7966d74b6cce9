// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides template fixtures and a mock print device connector

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use thermprint::printer::{DeviceConnection, DeviceConnector, PrintError};

/// The spec's reference template: one required variable, one markdown segment.
pub const TEST_TEMPLATE_YAML: &str = r#"
name: Test Template
description: A test template
variables:
  - name: name
    description: Name
    required: true
    markdown: false
segments:
  - text: "**Hello there**, {{ name }}!\nNice to meet you."
    markdown: true
    styles: {}
"#;

pub fn write_template(dir: &Path, filename: &str, yaml: &str) {
    std::fs::write(dir.join(filename), yaml).unwrap();
}

/// Temporary template directory containing the reference template.
pub fn test_template_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_template(dir.path(), "test_template.yaml", TEST_TEMPLATE_YAML);
    dir
}

#[derive(Debug, Default)]
pub struct MockDeviceState {
    pub connects: usize,
    pub closes: usize,
    pub sends: Vec<Vec<u8>>,
    /// Fail the send with this zero-based index, if set.
    pub fail_on_send: Option<usize>,
}

impl MockDeviceState {
    /// All bytes sent, concatenated.
    pub fn sent_bytes(&self) -> Vec<u8> {
        self.sends.iter().flatten().copied().collect()
    }
}

/// Connector handing out in-memory connections backed by shared state, so
/// tests can assert on lifecycle and on the exact bytes written.
#[derive(Clone, Default)]
pub struct MockConnector {
    pub state: Arc<Mutex<MockDeviceState>>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on_send(index: usize) -> Self {
        let connector = Self::new();
        connector.state.lock().unwrap().fail_on_send = Some(index);
        connector
    }
}

impl DeviceConnector for MockConnector {
    fn connect(&self) -> Result<Box<dyn DeviceConnection>, PrintError> {
        self.state.lock().unwrap().connects += 1;
        Ok(Box::new(MockConnection {
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockConnection {
    state: Arc<Mutex<MockDeviceState>>,
}

impl DeviceConnection for MockConnection {
    fn send(&mut self, bytes: &[u8]) -> Result<(), PrintError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_on_send == Some(state.sends.len()) {
            return Err(PrintError::Write(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "device unreachable",
            )));
        }
        state.sends.push(bytes.to_vec());
        Ok(())
    }

    fn close(&mut self) -> Result<(), PrintError> {
        self.state.lock().unwrap().closes += 1;
        Ok(())
    }
}
