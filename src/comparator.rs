use std::fmt;
use tracing::{info, warn};

/// Outcome of an exact-equality check between two sorted frequency tables.
/// A failure names the first differing surface form and both counts;
/// `None` marks the side where the form is missing entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail {
        form: String,
        expected: Option<u64>,
        actual: Option<u64>,
    },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail {
                form,
                expected,
                actual,
            } => {
                let fmt_count = |c: &Option<u64>| match c {
                    Some(n) => n.to_string(),
                    None => "<missing>".to_string(),
                };
                write!(
                    f,
                    "FAIL at '{}': expected {}, got {}",
                    form,
                    fmt_count(expected),
                    fmt_count(actual)
                )
            }
        }
    }
}

/// Walks two lexicographically sorted `(form, count)` sequences and demands
/// identical cardinality, forms and counts. Any mismatch fails with no
/// partial credit; the first divergence is reported for debugging.
pub fn compare(expected: &[(String, u64)], actual: &[(String, u64)]) -> Verdict {
    let mut ei = expected.iter();
    let mut ai = actual.iter();
    let mut e = ei.next();
    let mut a = ai.next();

    loop {
        let verdict = match (e, a) {
            (None, None) => {
                info!("Tables match: {} entries", expected.len());
                return Verdict::Pass;
            }
            (Some((ef, ec)), Some((af, ac))) => {
                if ef == af {
                    if ec == ac {
                        e = ei.next();
                        a = ai.next();
                        continue;
                    }
                    Verdict::Fail {
                        form: ef.clone(),
                        expected: Some(*ec),
                        actual: Some(*ac),
                    }
                } else if ef < af {
                    // Form present in ground truth only.
                    Verdict::Fail {
                        form: ef.clone(),
                        expected: Some(*ec),
                        actual: None,
                    }
                } else {
                    // Extra form on the candidate side.
                    Verdict::Fail {
                        form: af.clone(),
                        expected: None,
                        actual: Some(*ac),
                    }
                }
            }
            (Some((ef, ec)), None) => Verdict::Fail {
                form: ef.clone(),
                expected: Some(*ec),
                actual: None,
            },
            (None, Some((af, ac))) => Verdict::Fail {
                form: af.clone(),
                expected: None,
                actual: Some(*ac),
            },
        };

        warn!("Table mismatch: {}", verdict);
        return verdict;
    }
}
