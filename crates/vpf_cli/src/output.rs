//! Result formatting: table, CSV and JSON.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use vpf_kernel::mc::VoidEstimate;

use crate::Result;

/// Output format for estimation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// One CSV row per radius.
    Csv,
    /// JSON report with run metadata.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "Unknown format: {}. Supported: table, csv, json",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// One estimation run, ready to be written out.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Seed of the run's generator.
    pub seed: u64,
    /// Number of galaxies in the catalogue.
    pub n_galaxies: usize,
    /// Per-radius estimates.
    pub estimates: Vec<VoidEstimate>,
    /// Poisson prediction per radius, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poisson: Option<Vec<f64>>,
}

/// Flat CSV row.
#[derive(Debug, Serialize)]
struct CsvRow {
    radius: f64,
    probability: f64,
    std_error: f64,
    empty_count: usize,
    n_trials: usize,
    poisson: Option<f64>,
}

impl Report {
    fn poisson_at(&self, index: usize) -> Option<f64> {
        self.poisson.as_ref().and_then(|p| p.get(index).copied())
    }

    /// Writes the report in `format`.
    pub fn write<W: Write>(&self, format: OutputFormat, writer: W) -> Result<()> {
        match format {
            OutputFormat::Table => self.write_table(writer),
            OutputFormat::Csv => self.write_csv(writer),
            OutputFormat::Json => {
                let mut writer = writer;
                serde_json::to_writer_pretty(&mut writer, self)?;
                writeln!(writer)?;
                Ok(())
            }
        }
    }

    fn write_table<W: Write>(&self, mut writer: W) -> Result<()> {
        let with_poisson = self.poisson.is_some();

        writeln!(
            writer,
            "seed: {}  galaxies: {}  radii: {}",
            self.seed,
            self.n_galaxies,
            self.estimates.len()
        )?;
        write!(writer, "{:>10}  {:>10}  {:>10}  {:>8}", "radius", "P0", "std_err", "empty")?;
        if with_poisson {
            write!(writer, "  {:>10}", "poisson")?;
        }
        writeln!(writer)?;

        for (index, estimate) in self.estimates.iter().enumerate() {
            write!(
                writer,
                "{:>10.5}  {:>10.5}  {:>10.5}  {:>8}",
                estimate.radius,
                estimate.probability,
                estimate.std_error(),
                estimate.empty_count
            )?;
            if let Some(p) = self.poisson_at(index) {
                write!(writer, "  {:>10.5}", p)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (index, estimate) in self.estimates.iter().enumerate() {
            csv_writer.serialize(CsvRow {
                radius: estimate.radius,
                probability: estimate.probability,
                std_error: estimate.std_error(),
                empty_count: estimate.empty_count,
                n_trials: estimate.n_trials,
                poisson: self.poisson_at(index),
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(poisson: Option<Vec<f64>>) -> Report {
        Report {
            seed: 42,
            n_galaxies: 2,
            estimates: vec![
                VoidEstimate::from_counts(0.05, 90, 100),
                VoidEstimate::from_counts(0.1, 40, 100),
            ],
            poisson,
        }
    }

    fn render(report: &Report, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        report.write(format, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_csv_output() {
        let text = render(&report(None), OutputFormat::Csv);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "radius,probability,std_error,empty_count,n_trials,poisson"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0.05,0.9,"));
        assert!(lines[2].ends_with(",40,100,"));
    }

    #[test]
    fn test_json_output() {
        let text = render(&report(Some(vec![0.88, 0.35])), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["seed"], 42);
        assert_eq!(value["estimates"][1]["empty_count"], 40);
        assert_eq!(value["poisson"][0], 0.88);
    }

    #[test]
    fn test_json_omits_missing_poisson() {
        let text = render(&report(None), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.get("poisson").is_none());
    }

    #[test]
    fn test_table_output() {
        let text = render(&report(Some(vec![0.88, 0.35])), OutputFormat::Table);

        assert!(text.starts_with("seed: 42"));
        assert!(text.contains("poisson"));
        assert!(text.contains("0.40000"));
        assert_eq!(text.lines().count(), 4);
    }
}
