//! Argument handling and orchestration for the `dues_report` binary.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use chrono::NaiveDate;
use dues_config::{default_base_dir, Config, ConfigManager};
use dues_core::{
    format::AmountFormat,
    time::{parse_date, Clock, FixedClock, SystemClock},
    CoreError, ReconciliationService,
};
use dues_storage_json::JsonDuesStorage;

use crate::{
    errors::ReportError,
    report::{self, JsonReport},
};

pub const USAGE: &str = "\
Usage: dues_report [OPTIONS]

Options:
  --data-dir <DIR>      Directory holding lots/contributions/expenses/quotas JSON
  --as-of <YYYY-MM-DD>  Evaluate quotas due on or before this date (default: today)
  --lot <NUMBER>        Show the per-fund debt detail of one lot
  --json                Print machine-readable JSON instead of tables
  --plain               Disable colored output
  -h, --help            Print this help
";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportArgs {
    pub data_dir: Option<PathBuf>,
    pub as_of: Option<NaiveDate>,
    pub lot: Option<String>,
    pub json: bool,
    pub plain: bool,
    pub help: bool,
}

impl ReportArgs {
    pub fn parse<I>(args: I) -> Result<Self, ReportError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = ReportArgs::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-dir" => parsed.data_dir = Some(PathBuf::from(value_for(&arg, &mut args)?)),
                "--as-of" => parsed.as_of = Some(parse_date(&value_for(&arg, &mut args)?)?),
                "--lot" => parsed.lot = Some(value_for(&arg, &mut args)?),
                "--json" => parsed.json = true,
                "--plain" => parsed.plain = true,
                "-h" | "--help" => parsed.help = true,
                other => {
                    return Err(ReportError::Usage(format!(
                        "unknown argument `{other}`\n\n{USAGE}"
                    )))
                }
            }
        }
        Ok(parsed)
    }
}

fn value_for(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String, ReportError> {
    args.next()
        .filter(|value| !value.starts_with("--"))
        .ok_or_else(|| ReportError::Usage(format!("`{flag}` expects a value\n\n{USAGE}")))
}

/// Entry point used by the binary: reads process args and the persisted config.
pub fn run_cli() -> Result<(), ReportError> {
    let args = ReportArgs::parse(std::env::args().skip(1))?;
    let config = ConfigManager::with_base_dir(default_base_dir())?.load()?;
    crate::init_with_filter(config.log_filter.as_deref());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&args, &config, &mut out)
}

/// Runs one report invocation, writing everything to `out`.
pub fn run_with<W: Write>(
    args: &ReportArgs,
    config: &Config,
    out: &mut W,
) -> Result<(), ReportError> {
    if args.help {
        out.write_all(USAGE.as_bytes())?;
        return Ok(());
    }
    if args.plain || args.json {
        colored::control::set_override(false);
    }

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| config.resolve_data_dir());
    tracing::debug!(data_dir = %data_dir.display(), "opening dues storage");
    let storage = JsonDuesStorage::new(data_dir)?;
    let clock: Box<dyn Clock> = match args.as_of {
        Some(date) => Box::new(FixedClock::on(date)),
        None => Box::new(SystemClock),
    };
    let service = ReconciliationService::with_clock(Box::new(storage), clock);
    let format = AmountFormat::for_locale(
        &config.locale,
        &config.currency,
        config.currency_precision,
    );

    match &args.lot {
        Some(number) => write_detail(&service, number, &format, args.json, out),
        None => {
            let report = service.report_at(service.now());
            if args.json {
                serde_json::to_writer_pretty(&mut *out, &JsonReport::from(&report))?;
                writeln!(out)?;
            } else {
                out.write_all(report::render_report(&report, &format).as_bytes())?;
            }
            Ok(())
        }
    }
}

fn write_detail<W: Write>(
    service: &ReconciliationService,
    number: &str,
    format: &AmountFormat,
    json: bool,
    out: &mut W,
) -> Result<(), ReportError> {
    let lookup = service
        .find_lot_by_number(number)
        .and_then(|lot| service.try_lot_debt_detail_at(lot.id, service.now()));
    let detail = match lookup {
        Ok(detail) => detail,
        Err(CoreError::LotNotFound(_)) => None,
        Err(err) => {
            tracing::error!(error = %err, lot = number, "failed to load lot debt detail");
            if json {
                serde_json::to_writer_pretty(&mut *out, &serde_json::json!({ "degraded": true }))?;
                writeln!(out)?;
            } else {
                out.write_all(report::render_load_failure().as_bytes())?;
            }
            return Ok(());
        }
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &detail)?;
        writeln!(out)?;
        return Ok(());
    }
    let text = match &detail {
        Some(detail) => report::render_detail(detail, format),
        None => report::render_no_detail(number),
    };
    out.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Result<ReportArgs, ReportError> {
        ReportArgs::parse(raw.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_all_flags() {
        let parsed = args(&["--data-dir", "/tmp/d", "--as-of", "2024-06-30", "--lot", "A-1", "--json"])
            .expect("valid args");
        assert_eq!(parsed.data_dir, Some(PathBuf::from("/tmp/d")));
        assert_eq!(parsed.as_of, NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(parsed.lot.as_deref(), Some("A-1"));
        assert!(parsed.json);
        assert!(!parsed.plain);
    }

    #[test]
    fn missing_value_is_a_usage_error() {
        let err = args(&["--lot"]).expect_err("missing value");
        assert!(matches!(err, ReportError::Usage(_)));
        let err = args(&["--data-dir", "--json"]).expect_err("flag is not a value");
        assert!(err.to_string().contains("--data-dir"));
    }

    #[test]
    fn invalid_date_is_rejected() {
        let err = args(&["--as-of", "yesterday"]).expect_err("bad date");
        assert!(matches!(err, ReportError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(matches!(args(&["--verbose"]), Err(ReportError::Usage(_))));
    }
}
