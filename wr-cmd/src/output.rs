//! Plain-text rendering of reports and comparisons.

use std::io::Write;
use wr_core::datetime::format_utc;
use wr_core::report::{ComparisonResult, Metric, WeatherReport};

pub fn write_report<W: Write>(out: &mut W, report: &WeatherReport) -> std::io::Result<()> {
    let sky = report.sky();
    writeln!(out, "Report {}", report.id)?;
    writeln!(out, "  Time:        {}", format_utc(&report.timestamp))?;
    for metric in Metric::ALL {
        writeln!(
            out,
            "  {:<12} {:.1} {}",
            format!("{}:", metric.name()),
            report.metric(metric),
            metric.unit()
        )?;
    }
    writeln!(out, "  Sky:         {} {}", sky.icon(), sky.label())?;
    writeln!(out, "  Created:     {}", format_utc(&report.created_at))
}

/// One line per report under a header row.
pub fn write_table<W: Write>(out: &mut W, reports: &[WeatherReport]) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<38} {:<24} {:>8} {:>9} {:>9} {:>12}",
        "ID", "Time", "Temp °C", "Pres hPa", "Humid %", "Cloud %"
    )?;
    for report in reports {
        writeln!(
            out,
            "{:<38} {:<24} {:>8.1} {:>9.1} {:>9.1} {:>12.1}",
            report.id,
            format_utc(&report.timestamp),
            report.temperature,
            report.pressure,
            report.humidity,
            report.cloud_cover
        )?;
    }
    Ok(())
}

pub fn write_comparison<W: Write>(out: &mut W, result: &ComparisonResult) -> std::io::Result<()> {
    writeln!(
        out,
        "Report 1: {} ({})",
        result.report1.id,
        format_utc(&result.report1.timestamp)
    )?;
    writeln!(
        out,
        "Report 2: {} ({})",
        result.report2.id,
        format_utc(&result.report2.timestamp)
    )?;
    writeln!(
        out,
        "{:<20} {:>10} {:>10}  {}",
        "Metric", "Report 1", "Report 2", "Deviation"
    )?;
    for row in result.rows() {
        writeln!(
            out,
            "{:<20} {:>10.1} {:>10.1}  {} {}",
            row.metric.label(),
            row.report1,
            row.report2,
            row.trend.symbol(),
            row.magnitude
        )?;
    }
    Ok(())
}
