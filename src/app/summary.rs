use crate::app::record::MintLog;

pub const STATUS_PASS: &str = "PASS";
pub const STATUS_FAIL: &str = "FAIL";
pub const STATUS_NA: &str = "NA";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SuiteCounts {
    pub pass: u64,
    pub fail: u64,
    pub na: u64,
}

#[derive(Debug)]
pub struct SuiteSummary {
    pub name: String,
    pub counts: SuiteCounts,
}

/// Per-suite counts in first-occurrence order, plus the grand total.
#[derive(Debug)]
pub struct Report {
    pub suites: Vec<SuiteSummary>,
}

impl SuiteCounts {
    fn count(&mut self, status: &str) {
        // Exact match; any other status string lands in no bucket.
        match status {
            STATUS_PASS => self.pass += 1,
            STATUS_FAIL => self.fail += 1,
            STATUS_NA => self.na += 1,
            _ => {}
        }
    }

    fn add(&mut self, other: &SuiteCounts) {
        self.pass += other.pass;
        self.fail += other.fail;
        self.na += other.na;
    }
}

impl Report {
    /// Groups records by suite name. All records of a suite are merged into
    /// one group even when they are not contiguous in the log.
    pub fn from_records(records: &[MintLog]) -> Self {
        let mut suites: Vec<SuiteSummary> = Vec::new();
        for record in records {
            let position = match suites.iter().position(|s| s.name == record.name) {
                Some(position) => position,
                None => {
                    suites.push(SuiteSummary {
                        name: record.name.clone(),
                        counts: SuiteCounts::default(),
                    });
                    suites.len() - 1
                }
            };
            suites[position].counts.count(&record.status);
        }
        Report { suites }
    }

    pub fn counts_for(&self, suite: &str) -> Option<&SuiteCounts> {
        self.suites
            .iter()
            .find(|s| s.name == suite)
            .map(|s| &s.counts)
    }

    pub fn total(&self) -> SuiteCounts {
        let mut total = SuiteCounts::default();
        for suite in &self.suites {
            total.add(&suite.counts);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, status: &str) -> MintLog {
        MintLog {
            name: name.to_owned(),
            function: None,
            args: None,
            duration: 1,
            status: status.to_owned(),
            alert: None,
            message: None,
            error: None,
        }
    }

    #[test]
    fn test_counting_statuses_per_suite() {
        let records = vec![
            record("mc", "PASS"),
            record("mc", "PASS"),
            record("mc", "FAIL"),
            record("s3cmd", "NA"),
        ];
        let report = Report::from_records(&records);

        assert_eq!(report.suites.len(), 2);
        assert_eq!(
            report.counts_for("mc"),
            Some(&SuiteCounts {
                pass: 2,
                fail: 1,
                na: 0
            })
        );
        assert_eq!(
            report.counts_for("s3cmd"),
            Some(&SuiteCounts {
                pass: 0,
                fail: 0,
                na: 1
            })
        );
    }

    #[test]
    fn test_suites_keep_first_occurrence_order() {
        let records = vec![
            record("minio-go", "PASS"),
            record("awscli", "PASS"),
            record("mc", "PASS"),
        ];
        let report = Report::from_records(&records);

        let names: Vec<&str> = report.suites.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["minio-go", "awscli", "mc"]);
    }

    #[test]
    fn test_interleaved_suites_are_merged_into_one_group() {
        let records = vec![
            record("mc", "PASS"),
            record("s3cmd", "PASS"),
            record("mc", "FAIL"),
        ];
        let report = Report::from_records(&records);

        assert_eq!(report.suites.len(), 2);
        assert_eq!(
            report.counts_for("mc"),
            Some(&SuiteCounts {
                pass: 1,
                fail: 1,
                na: 0
            })
        );
    }

    #[test]
    fn test_unknown_status_lands_in_no_bucket() {
        let records = vec![record("mc", "Pass"), record("mc", "skipped")];
        let report = Report::from_records(&records);

        assert_eq!(
            report.counts_for("mc"),
            Some(&SuiteCounts {
                pass: 0,
                fail: 0,
                na: 0
            })
        );
    }

    #[test]
    fn test_total_sums_all_suites() {
        let records = vec![
            record("a", "PASS"),
            record("a", "PASS"),
            record("b", "FAIL"),
            record("c", "NA"),
        ];
        let report = Report::from_records(&records);

        assert_eq!(
            report.total(),
            SuiteCounts {
                pass: 2,
                fail: 1,
                na: 1
            }
        );
    }

    #[test]
    fn test_empty_input_produces_empty_report() {
        let report = Report::from_records(&[]);

        assert!(report.suites.is_empty());
        assert_eq!(report.total(), SuiteCounts::default());
    }
}
