//! Process runners for post-emit hooks.

use std::{
    process::{Command, Stdio},
    sync::{Arc, Mutex},
};

use modgen_core::application::ports::{PortError, ProcessRunner};
use tracing::debug;

/// Spawns hook commands detached from the generator process. The generator
/// never waits for an editor or a build tool to finish.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedRunner;

impl DetachedRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for DetachedRunner {
    fn spawn(&self, command: &str, args: &[String]) -> Result<(), PortError> {
        debug!(command, ?args, "spawning hook");
        Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|e| PortError::Failed(format!("{command}: {e}")))
    }
}

/// Records spawn requests instead of executing them, for tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded `(command, args)` pairs, in call order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn spawn(&self, command: &str, args: &[String]) -> Result<(), PortError> {
        let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
        calls.push((command.to_string(), args.to_vec()));
        Ok(())
    }
}
