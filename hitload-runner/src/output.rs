use hitload_common::{is_error_code, TRANSPORT_ERROR_CODE};
use hitload_stats::Report;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;
use std::time::Duration;

/// Fraction of requests that ended in a 5xx or a transport failure.
pub fn error_rate(report: &Report) -> f64 {
    if report.requests == 0 {
        return 0.0;
    }
    let errors: u64 = report
        .codes
        .iter()
        .filter(|(&code, _)| is_error_code(code))
        .map(|(_, &n)| n)
        .sum();
    errors as f64 / report.requests as f64
}

/// 95th percentile latency.
pub fn p95(report: &Report) -> Duration {
    report.percentile(95).unwrap_or(report.slowest)
}

/// Process exit code for a finished run: 0 pass, 1 error rate above
/// `max_error_rate`, 2 p95 latency above `max_p95`. Unset thresholds never fail.
pub fn verdict(report: &Report, max_error_rate: Option<f64>, max_p95: Option<Duration>) -> i32 {
    if max_error_rate.is_some_and(|max| error_rate(report) > max) {
        1
    } else if max_p95.is_some_and(|max| p95(report) > max) {
        2
    } else {
        0
    }
}

/// Human-readable summary printed at the end of a run.
pub fn render_report(report: &Report) -> String {
    Summary(report).to_string()
}

/// Write `report` to `path` as pretty-printed JSON, replacing any existing file.
pub fn write_json(report: &Report, path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|e| format!("Failed to write report JSON: {e}"))?;
    writer.flush().map_err(|e| format!("Failed to write report JSON: {e}"))
}

struct Summary<'a>(&'a Report);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "Summary")?;
        writeln!(f, "=======")?;
        writeln!(f, "Requests:              {}", report.requests)?;
        writeln!(f, "Fastest:               {}", format_ms(report.fastest))?;
        writeln!(f, "Slowest:               {}", format_ms(report.slowest))?;
        writeln!(f, "Average:               {}", format_ms(report.average))?;
        writeln!(f, "Requests/sec:          {:.1}", report.requests_per_sec)?;
        writeln!(f, "Error rate:            {:.3}%", error_rate(report) * 100.0)?;
        writeln!(f)?;

        writeln!(f, "Latency distribution:")?;
        for p in &report.percentiles {
            writeln!(f, "  {:>3}% in {}", p.rank, format_ms(p.value))?;
        }
        writeln!(f)?;

        writeln!(f, "Status codes:")?;
        for (&code, &count) in &report.codes {
            if code == TRANSPORT_ERROR_CODE {
                writeln!(f, "  [transport error]  {count} requests")?;
            } else {
                writeln!(f, "  [{code}]  {count} responses")?;
            }
        }
        Ok(())
    }
}

fn format_ms(d: Duration) -> String {
    format!("{:.3} ms", d.as_secs_f64() * 1_000.0)
}
