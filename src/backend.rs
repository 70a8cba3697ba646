//! External analysis backend boundary.
//!
//! The four external estimators share one invocation: a single request
//! carrying the secret, one structured JSON response with a slot per
//! estimator. The transport is pluggable; the bundled [`CommandBackend`]
//! runs a local helper process with a bounded wait and no retry.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Default deadline for one backend invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Combined response of the external analysis helper.
///
/// Every slot is optional: a missing slot degrades to a failure for that
/// estimator only.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BackendPayload {
    #[serde(default)]
    pub crackability: Option<Value>,
    #[serde(default)]
    pub checklist: Option<Value>,
    #[serde(default)]
    pub classifier: Option<Value>,
    #[serde(default)]
    pub entropy: Option<Value>,
}

/// Failure modes of one backend invocation.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to run analysis helper: {0}")]
    Io(#[from] std::io::Error),

    #[error("timeout after {0:?}")]
    Timeout(Duration),

    #[error("analysis helper produced no output")]
    EmptyOutput,

    #[error("analysis helper exited with status {0:?}")]
    NonZeroExit(Option<i32>),

    #[error("failed to parse analysis helper output: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One request in, one structured response out.
pub trait AnalysisBackend: Send + Sync {
    fn analyze(&self, secret: &SecretString) -> Result<BackendPayload, BackendError>;
}

impl<F> AnalysisBackend for F
where
    F: Fn(&SecretString) -> Result<BackendPayload, BackendError> + Send + Sync,
{
    fn analyze(&self, secret: &SecretString) -> Result<BackendPayload, BackendError> {
        self(secret)
    }
}

/// Backend that invokes a local helper program.
///
/// The secret is passed as the final argument and the helper is expected to
/// print the combined JSON payload on stdout. A single attempt is made; the
/// wait is bounded by `timeout`.
pub struct CommandBackend {
    program: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandBackend {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Arguments placed before the secret.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl AnalysisBackend for CommandBackend {
    fn analyze(&self, secret: &SecretString) -> Result<BackendPayload, BackendError> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(secret.expose_secret())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // Bound the wait, not the process: on timeout the helper is left to
        // finish on its own in the waiter thread.
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(child.wait_with_output());
        });

        let output = match rx.recv_timeout(self.timeout) {
            Ok(result) => result?,
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::error!(
                    "analysis helper {:?} exceeded deadline {:?}",
                    self.program,
                    self.timeout
                );
                return Err(BackendError::Timeout(self.timeout));
            }
        };

        if !output.status.success() {
            return Err(BackendError::NonZeroExit(output.status.code()));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            return Err(BackendError::EmptyOutput);
        }
        Ok(serde_json::from_str(stdout.trim())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    // Written via fs::write and closed before spawning, otherwise exec
    // fails with ETXTBSY.
    fn helper_script(body: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("helper.sh");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write");
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        (dir, path)
    }

    #[test]
    fn test_command_backend_parses_payload() {
        let (_dir, script) = helper_script(
            r#"echo '{"crackability":{"score":2},"entropy":{"shannonEntropyBits":51.0}}'"#,
        );
        let backend = CommandBackend::new(&script);
        let payload = backend.analyze(&secret("hunter2")).unwrap();
        assert!(payload.crackability.is_some());
        assert!(payload.checklist.is_none());
        assert!(payload.entropy.is_some());
    }

    #[test]
    fn test_command_backend_empty_output() {
        let (_dir, script) = helper_script("true");
        let backend = CommandBackend::new(&script);
        assert!(matches!(
            backend.analyze(&secret("hunter2")),
            Err(BackendError::EmptyOutput)
        ));
    }

    #[test]
    fn test_command_backend_non_zero_exit() {
        let (_dir, script) = helper_script("exit 3");
        let backend = CommandBackend::new(&script);
        assert!(matches!(
            backend.analyze(&secret("hunter2")),
            Err(BackendError::NonZeroExit(Some(3)))
        ));
    }

    #[test]
    fn test_command_backend_malformed_json() {
        let (_dir, script) = helper_script("echo not-json");
        let backend = CommandBackend::new(&script);
        assert!(matches!(
            backend.analyze(&secret("hunter2")),
            Err(BackendError::Parse(_))
        ));
    }

    #[test]
    fn test_command_backend_timeout() {
        let (_dir, script) = helper_script("sleep 5\necho '{}'");
        let backend = CommandBackend::new(&script).with_timeout(Duration::from_millis(100));
        let started = std::time::Instant::now();
        let result = backend.analyze(&secret("hunter2"));
        assert!(matches!(result, Err(BackendError::Timeout(_))));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_command_backend_missing_program() {
        let backend = CommandBackend::new("/nonexistent/helper");
        assert!(matches!(
            backend.analyze(&secret("hunter2")),
            Err(BackendError::Io(_))
        ));
    }

    #[test]
    fn test_closure_backend() {
        let backend =
            |_: &SecretString| -> Result<BackendPayload, BackendError> { Ok(BackendPayload::default()) };
        let payload = backend.analyze(&secret("hunter2")).unwrap();
        assert!(payload.crackability.is_none());
    }
}
