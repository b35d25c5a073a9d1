pub(crate) mod assert;
pub(crate) mod error;
pub(crate) mod parser;
pub(crate) mod record;
pub(crate) mod summary;

use crate::app::assert::Assertable;
use crate::app::error::Error;
use crate::app::summary::Report;
use crate::configuration::manifest::{ExpectEntry, Manifest};
use crate::reporter;
use std::path::Path;

pub struct App {
    name: String,
    expectations: Vec<ExpectEntry>,
}

impl App {
    pub fn new(manifest: Option<Manifest>) -> Self {
        match manifest {
            Some(manifest) => App {
                name: manifest.name,
                expectations: manifest.expect,
            },
            None => App {
                name: env!("CARGO_PKG_NAME").to_owned(),
                expectations: Vec::new(),
            },
        }
    }

    pub fn run(&self, log_file: &Path) -> Result<(), Error> {
        info!("Starting report '{}'", self.name);
        let logs = parser::parse_file(log_file)?;
        info!("Parsed {} log entries", logs.len());

        let report = Report::from_records(&logs);
        reporter::print(&report);

        info!("Checking {} expectations", self.expectations.len());
        for expectation in &self.expectations {
            expectation.assert(&report)?;
        }
        Ok(())
    }
}
