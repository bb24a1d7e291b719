use anyhow::{Context, Result};
use heronian::cli::{parse_args, Command, USAGE};
use heronian::logging::{init_tracing, init_with};
use heronian::{generate_report, log_error};

fn main() -> Result<()> {
    let cfg = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            print!("{}", USAGE);
            return Ok(());
        }
        Ok(Command::Run(cfg)) => cfg,
        Err(e) => {
            init_tracing();
            return Err(log_error!(e).into());
        }
    };
    init_with(cfg.log_format);

    let report = generate_report(&cfg.enumeration, &cfg.report)
        .with_context(|| format!("enumerating up to {}", cfg.enumeration.max_side))?;
    report
        .write_to(&mut std::io::stdout().lock(), cfg.format)
        .context("writing report")?;
    Ok(())
}
