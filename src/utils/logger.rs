use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `calc` is the binary's own target, `small_calc` the library's.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "small_calc=debug,calc=debug,info"
    } else {
        "small_calc=info,calc=info"
    }
}

/// Logs go to stderr; stdout is reserved for results.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_binary_target() {
        let quiet = default_directives(false);
        assert!(quiet.split(',').any(|d| d == "calc=info"));
        assert!(quiet.split(',').any(|d| d == "small_calc=info"));

        let verbose = default_directives(true);
        assert!(verbose.split(',').any(|d| d == "calc=debug"));
        assert!(verbose.split(',').any(|d| d == "small_calc=debug"));
    }

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directives(verbose)).is_ok());
        }
    }
}
