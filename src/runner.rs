use std::{
    io::Read,
    time::{Duration, Instant},
};

use tracing::debug;

use crate::{Error, Part};

#[derive(Debug, Clone)]
pub struct RunOutcome<T> {
    pub answer: T,
    pub elapsed: Duration,
}

/// Read everything from given reader, blocking until the end of stream.
pub fn read_input<R: Read>(mut reader: R) -> Result<String, Error> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(Error::ReadInput)?;
    debug!(bytes = input.len(), "read puzzle input");

    Ok(input)
}

/// Run the solution of given part, timing only the solution call itself.
pub fn run<T, F1, F2>(
    solve_pt1: F1,
    solve_pt2: F2,
    input: &str,
    args: &[String],
    part: Part,
) -> Result<RunOutcome<T>, Error>
where
    F1: FnOnce(&str, &[String]) -> anyhow::Result<T>,
    F2: FnOnce(&str, &[String]) -> anyhow::Result<T>,
{
    debug!(%part, args = args.len(), "running solution");
    let start = Instant::now();
    let res = match part {
        Part::One => solve_pt1(input, args),
        Part::Two => solve_pt2(input, args),
    };
    let elapsed = start.elapsed();
    debug!(?elapsed, ok = res.is_ok(), "solution returned");

    res.map(|answer| RunOutcome { answer, elapsed })
        .map_err(Error::Solver)
}
