use super::error::AthenaViewsError;
use super::output::{AthenaViewsOutput, AthenaViewsStatus};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::ChronoLocal;


pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";


/// Logs always go to stderr, so they never mix with the `--json` document on stdout.
pub fn setup_logging(verbose: u8, quiet: bool) -> Result<(), AthenaViewsError> {
    tracing::subscriber::set_global_default(build_subscriber(verbose, quiet, std::io::stderr))?;
    Ok(())
}

fn log_level(verbose: u8, quiet: bool) -> tracing::Level {
    if quiet {
        tracing::Level::ERROR
    } else { match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }}
}

fn build_subscriber<W>(verbose: u8, quiet: bool, writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(log_level(verbose, quiet))
        .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
        .with_ansi(false)
        .with_writer(writer)
        .finish()
}


pub fn render_human_output(output: &AthenaViewsOutput) {
    if let Some(summary) = &output.data {
        tracing::info!(
            "{} of {} queries succeeded",
            summary.succeeded(),
            summary.items().len(),
        );
    }

    match (&output.status, &output.error) {
        (AthenaViewsStatus::Error, Some(error)) => tracing::error!("{}", error.message()),
        _ => tracing::info!("Done"),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'w> MakeWriter<'w> for Captured {
        type Writer = Captured;

        fn make_writer(&'w self) -> Self::Writer {
            self.clone()
        }
    }

    fn captured_lines(verbose: u8, quiet: bool) -> String {
        let sink = Captured::default();
        let subscriber = build_subscriber(verbose, quiet, sink.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Found 3 SQL files");
            tracing::debug!("  > loaded a.sql (8 bytes)");
            tracing::error!("  > b.sql: FAILED: syntax error");
        });

        let bytes = sink.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn audit_trail_is_written_at_default_level() {
        let logs = captured_lines(0, false);

        assert!(logs.contains("Found 3 SQL files"));
        assert!(logs.contains("b.sql: FAILED: syntax error"));
        assert!(!logs.contains("loaded a.sql"));
    }

    #[test]
    fn quiet_keeps_only_errors() {
        let logs = captured_lines(3, true);

        assert!(!logs.contains("Found 3 SQL files"));
        assert!(logs.contains("b.sql: FAILED: syntax error"));
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0, false), tracing::Level::INFO);
        assert_eq!(log_level(1, false), tracing::Level::DEBUG);
        assert_eq!(log_level(2, false), tracing::Level::TRACE);
        assert_eq!(log_level(2, true), tracing::Level::ERROR);
    }
}
