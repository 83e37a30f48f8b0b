use std::process::ExitCode;

use anyhow::Result;

fn solve_pt1(input: &str, _args: &[String]) -> Result<String> {
    Ok(input.to_string())
}

fn solve_pt2(_input: &str, args: &[String]) -> Result<String> {
    if args.is_empty() {
        Ok("christmas gopher".to_string())
    } else {
        Ok(args.join(" "))
    }
}

fn main() -> ExitCode {
    fireplace::v1_run(solve_pt1, solve_pt2)
}
