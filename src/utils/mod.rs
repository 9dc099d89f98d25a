use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVES: [&str; 2] = ["dues_engine=info", "dues_core=info"];

/// Installs the global subscriber. Logs go to stderr so report output on
/// stdout stays machine-readable.
pub fn init_tracing(directive: Option<&str>) {
    let mut filter = EnvFilter::from_default_env();
    for raw in DEFAULT_DIRECTIVES.into_iter().chain(directive) {
        match raw.parse() {
            Ok(parsed) => filter = filter.add_directive(parsed),
            Err(err) => eprintln!("ignoring invalid log filter `{raw}`: {err}"),
        }
    }

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
