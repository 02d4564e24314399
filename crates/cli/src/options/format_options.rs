use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// How command reports are printed
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatOptions {
    /// Pretty JSON, for build scripts and CI
    #[value(name = "json")]
    Json,
    /// Colored terminal output
    #[value(name = "stdout")]
    Stdout,
}

impl FormatOptions {
    /// Print `message` on a terminal, or `report` as pretty JSON
    pub fn report<T: Serialize + ?Sized>(self, message: &str, report: &T) -> Result<()> {
        match self {
            Self::Stdout => println!("{message}"),
            Self::Json => println!("{}", serde_json::to_string_pretty(report)?),
        }
        Ok(())
    }

    /// Progress line, dropped in JSON mode so the output stays parseable
    pub fn note(self, message: &str) {
        if let Self::Stdout = self {
            println!("{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_report_serializes_in_json_mode() {
        let report = BTreeMap::from([("events", "skip")]);
        assert!(FormatOptions::Json.report("ignored", &report).is_ok());
        assert!(FormatOptions::Stdout.report("events: skip", &report).is_ok());
    }
}
