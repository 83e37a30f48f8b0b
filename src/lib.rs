use std::{
    env, error,
    ffi::OsString,
    fmt::Display,
    io::{self, Read, Write},
    process::ExitCode,
};

use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod runner;

pub use cli::{parse_args, ArgValues, CLIArgs, Part, PartError};
pub use runner::{read_input, run, RunOutcome};

#[derive(Debug)]
pub enum Error {
    InvalidArgs(clap::Error),
    ReadInput(io::Error),
    Solver(anyhow::Error),
    WriteOutput(io::Error),
}

impl Error {
    /// Exit status reported to the shell for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidArgs(e) => u8::try_from(e.exit_code()).unwrap_or(2),
            Error::ReadInput(_) | Error::Solver(_) | Error::WriteOutput(_) => 1,
        }
    }

    /// Help and version requests come back from clap as errors, but they
    /// aren't failures.
    pub fn is_informational(&self) -> bool {
        matches!(self, Error::InvalidArgs(e) if !e.use_stderr())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgs(e) if !e.use_stderr() => write!(f, "{}", e.to_string().trim_end()),
            Error::InvalidArgs(e) => write!(f, "Invalid arguments.\n{}", e.to_string().trim_end()),
            Error::ReadInput(e) => write!(f, "Error reading input: {}", e),
            Error::Solver(e) => write!(f, "Solution failed: {:#}", e),
            Error::WriteOutput(e) => write!(f, "Error writing answer: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidArgs(e) => Some(e),
            Error::ReadInput(e) | Error::WriteOutput(e) => Some(e),
            Error::Solver(e) => Some(&**e),
        }
    }
}

/// Parse arguments, read the whole input, then run and time the selected
/// part. On success the answer and the running time are written to `stdout`,
/// otherwise a single message goes to `stderr`, as does the usage text for
/// `--help`. Returns the exit status.
pub fn run_with<I, S, R, W, E, T, F1, F2>(
    cmd_args: I,
    stdin: R,
    mut stdout: W,
    mut stderr: E,
    solve_pt1: F1,
    solve_pt2: F2,
) -> u8
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    R: Read,
    W: Write,
    E: Write,
    T: Display,
    F1: FnOnce(&str, &[String]) -> anyhow::Result<T>,
    F2: FnOnce(&str, &[String]) -> anyhow::Result<T>,
{
    match solve(cmd_args, stdin, &mut stdout, solve_pt1, solve_pt2) {
        Ok(()) => 0,
        Err(e) => {
            if !e.is_informational() {
                debug!(code = e.exit_code(), "run failed");
            }
            let _ = writeln!(stderr, "{}", e);
            e.exit_code()
        }
    }
}

fn solve<I, S, R, W, T, F1, F2>(
    cmd_args: I,
    stdin: R,
    stdout: &mut W,
    solve_pt1: F1,
    solve_pt2: F2,
) -> Result<(), Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    R: Read,
    W: Write,
    T: Display,
    F1: FnOnce(&str, &[String]) -> anyhow::Result<T>,
    F2: FnOnce(&str, &[String]) -> anyhow::Result<T>,
{
    let (part, args) = parse_args(cmd_args)?;
    let input = read_input(stdin)?;
    let outcome = run(solve_pt1, solve_pt2, &input, &args, part)?;

    // Answer and running time in a single write.
    let report = format!(
        "{}\nRT {} ns\n",
        outcome.answer,
        outcome.elapsed.as_nanos()
    );
    stdout
        .write_all(report.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(Error::WriteOutput)
}

/// Run given solutions against the process arguments and standard streams.
///
/// ```no_run
/// fn solve_pt1(input: &str, _args: &[String]) -> anyhow::Result<usize> {
///     Ok(input.lines().count())
/// }
///
/// fn solve_pt2(input: &str, _args: &[String]) -> anyhow::Result<usize> {
///     Ok(input.len())
/// }
///
/// fn main() -> std::process::ExitCode {
///     fireplace::v1_run(solve_pt1, solve_pt2)
/// }
/// ```
pub fn v1_run<T, F1, F2>(solve_pt1: F1, solve_pt2: F2) -> ExitCode
where
    T: Display,
    F1: FnOnce(&str, &[String]) -> anyhow::Result<T>,
    F2: FnOnce(&str, &[String]) -> anyhow::Result<T>,
{
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();

    let code = run_with(
        env::args_os().skip(1),
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr(),
        solve_pt1,
        solve_pt2,
    );
    ExitCode::from(code)
}
