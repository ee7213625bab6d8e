use std::ffi::OsStr;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};
use wait_timeout::ChildExt;

use crate::cancel::CancelToken;
use crate::error::{Result, RunError};

/// How often a cancellable run checks its token.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs one external program with varying arguments.
///
/// stdout and stderr are captured separately and stdin is closed.
///
/// ```no_run
/// use cmd_runner::Runner;
/// use std::time::Duration;
///
/// let runner = Runner::new("/sbin/lvm").with_timeout(Duration::from_secs(30));
/// let report = runner.run(["vgs", "--reportformat=json"])?;
/// # Ok::<(), cmd_runner::RunError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Runner {
    program: PathBuf,
    timeout: Option<Duration>,
    cancel: Option<CancelToken>,
}

impl Runner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
            cancel: None,
        }
    }

    /// Kill the command if it runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Kill the command once `token` is cancelled.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Run the program with `args` and return its standard output.
    ///
    /// # Errors
    ///
    /// - [`RunError::Spawn`] if the program cannot be started
    /// - [`RunError::Failed`] on a non-zero exit, carrying the captured stderr
    /// - [`RunError::Timeout`] / [`RunError::Cancelled`] if the run was cut short
    pub fn run<I, S>(&self, args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let program = self.program.display().to_string();

        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(program = %program, args = ?cmd.get_args().collect::<Vec<_>>(), "running command");

        let mut child = cmd.spawn().map_err(|source| RunError::Spawn {
            program: program.clone(),
            source,
        })?;

        // Drain both pipes while waiting so a chatty child cannot block on a
        // full pipe buffer.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match self.wait(&mut child) {
            Ok(status) => status,
            Err(err) => {
                let _ = child.kill();
                let _ = child.wait();
                // Partial output is discarded. The readers are detached since
                // a surviving grandchild may still hold the pipes open.
                drop((stdout, stderr));
                warn!(program = %program, error = %err, "command did not complete");
                return Err(err.into_run_error(program));
            }
        };

        let stdout = join(stdout, &program)?;
        let stderr = join(stderr, &program)?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr).trim().to_string();
            warn!(program = %program, %status, stderr = %stderr, "command failed");
            return Err(RunError::Failed {
                program,
                status,
                stderr,
            });
        }

        debug!(program = %program, bytes = stdout.len(), "command succeeded");
        Ok(stdout)
    }

    fn wait(&self, child: &mut Child) -> std::result::Result<ExitStatus, Interrupted> {
        if self.timeout.is_none() && self.cancel.is_none() {
            return child.wait().map_err(Interrupted::Io);
        }

        let started = Instant::now();
        loop {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                return Err(Interrupted::Cancelled);
            }

            let mut slice = POLL_INTERVAL;
            if let Some(timeout) = self.timeout {
                let elapsed = started.elapsed();
                if elapsed >= timeout {
                    return Err(Interrupted::TimedOut(timeout));
                }
                slice = slice.min(timeout - elapsed);
            }
            if self.cancel.is_none() {
                // Nothing to poll for, wait out the remaining time in one go.
                slice = self.timeout.map_or(slice, |t| t.saturating_sub(started.elapsed()));
            }

            if let Some(status) = child.wait_timeout(slice).map_err(Interrupted::Io)? {
                return Ok(status);
            }
        }
    }
}

/// Why waiting for a child stopped early.
enum Interrupted {
    Io(std::io::Error),
    TimedOut(Duration),
    Cancelled,
}

impl Interrupted {
    fn into_run_error(self, program: String) -> RunError {
        match self {
            Interrupted::Io(source) => RunError::Io { program, source },
            Interrupted::TimedOut(timeout) => RunError::Timeout { program, timeout },
            Interrupted::Cancelled => RunError::Cancelled { program },
        }
    }
}

impl std::fmt::Display for Interrupted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interrupted::Io(err) => write!(f, "{}", err),
            Interrupted::TimedOut(timeout) => write!(f, "timed out after {:?}", timeout),
            Interrupted::Cancelled => f.write_str("cancelled"),
        }
    }
}

type Reader = Option<JoinHandle<std::io::Result<Vec<u8>>>>;

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Reader {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            pipe.read_to_end(&mut buf)?;
            Ok(buf)
        })
    })
}

fn join(reader: Reader, program: &str) -> Result<Vec<u8>> {
    let Some(handle) = reader else {
        return Ok(Vec::new());
    };
    handle
        .join()
        .unwrap_or_else(|_| Err(std::io::Error::other("output reader thread panicked")))
        .map_err(|source| RunError::Io {
            program: program.to_string(),
            source,
        })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> (Runner, [String; 2]) {
        (Runner::new("sh"), ["-c".to_string(), script.to_string()])
    }

    #[test]
    fn test_captures_stdout() {
        let (runner, args) = sh("echo hello");
        let output = runner.run(args).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().trim(), "hello");
    }

    #[test]
    fn test_passes_arguments_verbatim() {
        let output = Runner::new("printf")
            .run(["%s|", "--flag=a b", "positional"])
            .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "--flag=a b|positional|");
    }

    #[test]
    fn test_failure_embeds_stderr() {
        let (runner, args) = sh("echo partial; echo 'Volume group not found' >&2; exit 5");
        let err = runner.run(args).unwrap_err();

        assert_eq!(err.stderr(), Some("Volume group not found"));
        match &err {
            RunError::Failed { program, status, .. } => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(5));
            }
            other => panic!("Expected Failed error, got {:?}", other),
        }
        assert!(err.to_string().contains("Volume group not found"));
    }

    #[test]
    fn test_missing_program() {
        let err = Runner::new("/nonexistent/definitely-not-here")
            .run(Vec::<String>::new())
            .unwrap_err();
        assert!(matches!(err, RunError::Spawn { .. }));
    }

    #[test]
    fn test_timeout_kills_command() {
        let (runner, args) = sh("sleep 5");
        let start = Instant::now();
        let err = runner
            .with_timeout(Duration::from_millis(200))
            .run(args)
            .unwrap_err();
        assert!(matches!(err, RunError::Timeout { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_cancel_kills_command() {
        let token = CancelToken::new();
        let (runner, args) = sh("sleep 5");
        let runner = runner.with_cancel_token(token.clone());

        let canceller = thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            token.cancel();
        });

        let start = Instant::now();
        let err = runner.run(args).unwrap_err();
        canceller.join().unwrap();

        assert!(matches!(err, RunError::Cancelled { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_already_cancelled_token() {
        let token = CancelToken::new();
        token.cancel();
        let (runner, args) = sh("echo never");
        let err = runner.with_cancel_token(token).run(args).unwrap_err();
        assert!(matches!(err, RunError::Cancelled { .. }));
    }

    #[test]
    fn test_large_output_does_not_block() {
        let (runner, args) = sh("head -c 300000 /dev/zero; head -c 300000 /dev/zero >&2");
        let output = runner
            .with_timeout(Duration::from_secs(10))
            .run(args)
            .unwrap();
        assert_eq!(output.len(), 300000);
    }

    #[test]
    fn test_reader_failure_names_program() {
        let reader: Reader = Some(thread::spawn(|| {
            Err(std::io::Error::other("broken pipe"))
        }));
        let err = join(reader, "lvm").unwrap_err();

        match &err {
            RunError::Io { program, .. } => assert_eq!(program, "lvm"),
            other => panic!("Expected Io error, got {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "I/O error while running `lvm`: broken pipe"
        );
    }

    #[test]
    fn test_wait_failure_names_program() {
        let err = Interrupted::Io(std::io::Error::other("no child"))
            .into_run_error("lvm".to_string());
        assert!(matches!(err, RunError::Io { ref program, .. } if program == "lvm"));
    }
}
