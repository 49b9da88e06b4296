//! Reporting results to the workflow runner.
//!
//! The decision is written as one output value, either to the file named by
//! `GITHUB_OUTPUT` or, on older runners, as a `::set-output` command on
//! stdout. A failed run is reported with an `::error::` command.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::check::Outcome;
use crate::{Error, Result};

/// Name of the output the decision is written to.
pub const OUTPUT_NAME: &str = "has-permission";

/// How the decision is encoded in the output value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// `"1"` when sufficient, empty string otherwise.
    #[default]
    Flag,
    /// `"true"` / `"false"`.
    Boolean,
}

impl Encoding {
    pub fn encode(self, outcome: &Outcome) -> &'static str {
        match (self, outcome.is_sufficient()) {
            (Encoding::Flag, true) => "1",
            (Encoding::Flag, false) => "",
            (Encoding::Boolean, true) => "true",
            (Encoding::Boolean, false) => "false",
        }
    }

    /// The value written when no check could run at all.
    pub fn negative(self) -> &'static str {
        match self {
            Encoding::Flag => "",
            Encoding::Boolean => "false",
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "flag" => Ok(Encoding::Flag),
            "boolean" => Ok(Encoding::Boolean),
            other => Err(Error::Config(format!(
                "output encoding must be one of: flag,boolean (got {other:?})"
            ))),
        }
    }
}

/// Escape a workflow command message.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Destination for outputs and workflow commands.
pub struct Sink<W: Write> {
    output_file: Option<PathBuf>,
    commands: W,
}

impl Sink<std::io::Stdout> {
    /// Write commands to stdout, outputs to `output_file` when given.
    pub fn stdout(output_file: Option<PathBuf>) -> Self {
        Self::new(output_file, std::io::stdout())
    }
}

impl<W: Write> Sink<W> {
    pub fn new(output_file: Option<PathBuf>, commands: W) -> Self {
        Self {
            output_file,
            commands,
        }
    }

    /// Set a step output.
    pub fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{name}={value}")?;
            }
            None => {
                writeln!(
                    self.commands,
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                )?;
            }
        }
        Ok(())
    }

    /// Mark the run as failed with a message.
    pub fn fail(&mut self, message: &str) -> Result<()> {
        writeln!(self.commands, "::error::{}", escape_data(message))?;
        self.commands.flush()?;
        Ok(())
    }

    /// Consume the sink, returning the command writer.
    pub fn into_inner(self) -> W {
        self.commands
    }
}
