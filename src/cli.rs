use std::{error, ffi::OsString, fmt::Display, num::ParseIntError, str::FromStr};

use clap::Parser;
use csv::ReaderBuilder;

use crate::Error;

#[derive(Debug)]
pub enum PartError {
    NotANumber(String, ParseIntError),
    OutOfRange(i64),
}

impl Display for PartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartError::NotANumber(s, e) => write!(f, "Given part({}) isn't a number, {}.", s, e),
            PartError::OutOfRange(n) => write!(
                f,
                "Invalid part({}), please use 1 or 2 as argument for --part flag.",
                n
            ),
        }
    }
}

impl error::Error for PartError {}

/// Which half of a puzzle to solve. An unset or invalid selector never
/// becomes a `Part`, so only these two values ever reach the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl TryFrom<i64> for Part {
    type Error = PartError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            n => Err(PartError::OutOfRange(n)),
        }
    }
}

impl FromStr for Part {
    type Err = PartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<i64>()
            .map_err(|e| PartError::NotANumber(s.to_string(), e))?;
        Part::try_from(n)
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Part::One => write!(f, "1"),
            Part::Two => write!(f, "2"),
        }
    }
}

/// Values of one `--args` occurrence, split as a single CSV record so quoted
/// values may contain commas. An empty value yields no values at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgValues(pub Vec<String>);

impl FromStr for ArgValues {
    type Err = csv::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .from_reader(s.as_bytes());
        let values = match reader.records().next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => Vec::new(),
        };

        Ok(ArgValues(values))
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fireplace",
    version,
    about = "Elf Script Brigade Rust solution runner",
    no_binary_name = true
)]
pub struct CLIArgs {
    /// Run solution part 1 or part 2
    #[arg(short, long, allow_negative_numbers = true, overrides_with = "part")]
    pub part: Part,
    /// Additional arguments for running the solutions
    #[arg(short, long)]
    pub args: Vec<ArgValues>,
    /// Appended to the solution arguments after those given by --args
    #[arg(value_name = "ARG")]
    pub rest: Vec<String>,
}

impl CLIArgs {
    pub fn into_part_and_args(self) -> (Part, Vec<String>) {
        let mut args = self
            .args
            .into_iter()
            .flat_map(|values| values.0)
            .collect::<Vec<_>>();
        args.extend(self.rest);
        (self.part, args)
    }
}

/// Parse command line arguments (without the program name) into the selected
/// part and the arguments handed to the solution.
pub fn parse_args<I, T>(cmd_args: I) -> Result<(Part, Vec<String>), Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli_args = CLIArgs::try_parse_from(cmd_args).map_err(Error::InvalidArgs)?;
    Ok(cli_args.into_part_and_args())
}
