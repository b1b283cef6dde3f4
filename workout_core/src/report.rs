//! Rendering a batch of workout summaries.

use crate::{Error, InfoMessage, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format for a report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One summary line per workout
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
    /// Header row plus one row per workout
    Csv,
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(Error::Config(format!("Unknown report format: {}", other))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// A row in the CSV output; numbers carry the same three decimals as the text line
#[derive(Debug, Serialize)]
struct CsvRow {
    workout_label: String,
    duration_hours: String,
    distance_km: String,
    mean_speed_kmh: String,
    calories: String,
}

impl From<&InfoMessage> for CsvRow {
    fn from(info: &InfoMessage) -> Self {
        CsvRow {
            workout_label: info.workout_label.clone(),
            duration_hours: format!("{:.3}", info.duration_hours),
            distance_km: format!("{:.3}", info.distance_km),
            mean_speed_kmh: format!("{:.3}", info.mean_speed_kmh),
            calories: format!("{:.3}", info.calories),
        }
    }
}

/// Write `messages` to `writer` in the requested format, in input order
pub fn render<W: Write>(messages: &[InfoMessage], format: ReportFormat, mut writer: W) -> Result<()> {
    match format {
        ReportFormat::Text => {
            for info in messages {
                writeln!(writer, "{}", info.get_message())?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, messages)?;
            writeln!(writer)?;
        }
        ReportFormat::Csv => {
            // Header comes from the first serialized row, so an empty
            // report would have none.
            let mut csv_writer = csv::Writer::from_writer(&mut writer);
            if messages.is_empty() {
                csv_writer.write_record([
                    "workout_label",
                    "duration_hours",
                    "distance_km",
                    "mean_speed_kmh",
                    "calories",
                ])?;
            }
            for info in messages {
                csv_writer.serialize(CsvRow::from(info))?;
            }
            csv_writer.flush()?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
fn render_to_string(messages: &[InfoMessage], format: ReportFormat) -> Result<String> {
    let mut buf = Vec::new();
    render(messages, format, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::Config(format!("Report is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<InfoMessage> {
        vec![
            InfoMessage {
                workout_label: "Swimming".into(),
                duration_hours: 1.0,
                distance_km: 0.9936,
                mean_speed_kmh: 1.0,
                calories: 336.0,
            },
            InfoMessage {
                workout_label: "Running".into(),
                duration_hours: 1.0,
                distance_km: 9.75,
                mean_speed_kmh: 9.75,
                calories: 699.75,
            },
        ]
    }

    #[test]
    fn test_text_one_line_per_workout() {
        let out = render_to_string(&sample(), ReportFormat::Text).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
        assert!(lines[1].ends_with("Потрачено ккал: 699.750."));
    }

    #[test]
    fn test_json_array() {
        let out = render_to_string(&sample(), ReportFormat::Json).unwrap();
        let parsed: Vec<InfoMessage> = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_csv_rows() {
        let out = render_to_string(&sample(), ReportFormat::Csv).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(
            lines[0],
            "workout_label,duration_hours,distance_km,mean_speed_kmh,calories"
        );
        assert_eq!(lines[1], "Swimming,1.000,0.994,1.000,336.000");
        assert_eq!(lines[2], "Running,1.000,9.750,9.750,699.750");
    }

    #[test]
    fn test_csv_empty_report_has_header() {
        let out = render_to_string(&[], ReportFormat::Csv).unwrap();
        assert_eq!(
            out.trim_end(),
            "workout_label,duration_hours,distance_km,mean_speed_kmh,calories"
        );
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
