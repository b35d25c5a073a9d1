use crate::app::error::Error;
use crate::app::summary::Report;
use crate::configuration::manifest::ExpectEntry;

pub trait Assertable<T> {
    fn assert(&self, data: &T) -> Result<(), Error>;
}

impl Assertable<Report> for ExpectEntry {
    fn assert(&self, report: &Report) -> Result<(), Error> {
        trace!("Checking expectation {:?}", self);
        let counts = report.counts_for(&self.suite);

        if self.absent {
            return match counts {
                Some(_) => Err(Error::Expectation(format!(
                    "suite \"{}\" must be absent from the log",
                    self.suite
                ))),
                None => Ok(()),
            };
        }

        let counts = match counts {
            Some(counts) => counts,
            None => {
                return Err(Error::Expectation(format!(
                    "suite \"{}\" not found in the log",
                    self.suite
                )))
            }
        };

        if let Some(min_pass) = self.min_pass {
            if counts.pass < min_pass {
                return Err(Error::Expectation(format!(
                    "suite \"{}\" passed {} tests, expected at least {}",
                    self.suite, counts.pass, min_pass
                )));
            }
        }

        if let Some(max_fail) = self.max_fail {
            if counts.fail > max_fail {
                return Err(Error::Expectation(format!(
                    "suite \"{}\" failed {} tests, at most {} allowed",
                    self.suite, counts.fail, max_fail
                )));
            }
        }

        Ok(())
    }
}
