//! Command-line argument parsing.

use std::str::FromStr;

use crate::config::{LogFormat, OutputFormat, RunConfig, SearchStrategy};
use crate::error::{HeronError, Result};

pub const USAGE: &str = "\
Usage: heronian [MAX_SIDE] [OPTIONS]

List primitive Heronian triangles with every side at most MAX_SIDE
(default 200), ordered by area, then perimeter, then side lengths.

Options:
  --limit N       number of triangles to list (default 10)
  --area A        also list every triangle with area A
  --json          print the report as JSON
  --sequential    do not split the search across threads
  --cartesian     search the full side cube (slow, for cross-checking)
  --log-json      write diagnostics on stderr as JSON lines
  -h, --help      print this help

Set RUST_LOG (e.g. RUST_LOG=info) for diagnostics on stderr.
";

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunConfig),
    Help,
}

/// Parses arguments (without the program name).
///
/// All validation happens here, so a returned [`Command::Run`] carries a
/// configuration that enumeration accepts.
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cfg = RunConfig::default();
    let mut max_side_seen = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        let (flag, inline) = match arg.split_once('=') {
            Some((f, v)) if f.starts_with("--") => (f, Some(v.to_string())),
            _ => (arg, None),
        };
        let mut value = |name: &str| -> Result<String> {
            inline
                .clone()
                .or_else(|| args.next().map(|s| s.as_ref().to_string()))
                .ok_or_else(|| HeronError::invalid(format!("{} requires a value", name)))
        };

        match flag {
            "-h" | "--help" => return Ok(Command::Help),
            "--limit" => cfg.report.limit = parse_number("--limit", &value("--limit")?)?,
            "--area" => cfg.report.area = Some(parse_number("--area", &value("--area")?)?),
            "--json" => cfg.format = OutputFormat::Json,
            "--sequential" => cfg.enumeration.parallel = false,
            "--cartesian" => cfg.enumeration.strategy = SearchStrategy::CartesianProduct,
            "--log-json" => cfg.log_format = LogFormat::Json,
            f if f.starts_with("--") => {
                return Err(HeronError::invalid(format!("unknown option '{}'", f)));
            }
            positional => {
                if max_side_seen {
                    return Err(HeronError::invalid(format!(
                        "unexpected extra argument '{}'",
                        positional
                    )));
                }
                cfg.enumeration.max_side = parse_number("max side", positional)?;
                max_side_seen = true;
            }
        }
    }

    cfg.enumeration.validate()?;
    Ok(Command::Run(cfg))
}

fn parse_number<T: FromStr>(what: &str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| {
        HeronError::invalid(format!(
            "invalid {} '{}': expected a non-negative integer",
            what, raw
        ))
    })
}
