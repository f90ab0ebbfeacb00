use crate::sbom_pipeline::domain::{ProjectIdentity, ProjectRecord};

/// ResolutionPolicy for picking one tracker project out of a lookup result
///
/// The tracker's `GET /api/v1/project?name=&version=` returns a list. The
/// pipeline needs exactly one UUID, so this policy states what happens when
/// the list does not hold exactly one record:
///
/// * `FirstMatch` (default): take the first record in response order. The
///   result then depends on the tracker's ordering.
/// * `Unique`: more than one record is an error.
/// * `Exact`: drop records whose name/version differ from the identity,
///   then require exactly one.
///
/// An empty list is always `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPolicy {
    #[default]
    FirstMatch,
    Unique,
    Exact,
}

/// Result of applying a [`ResolutionPolicy`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Selected {
        record: ProjectRecord,
        /// Number of candidate records the selection was made from
        candidates: usize,
    },
    NotFound,
    Ambiguous {
        count: usize,
    },
}

impl ResolutionPolicy {
    /// Applies the policy to records in the order the tracker returned them
    pub fn select(self, identity: &ProjectIdentity, records: Vec<ProjectRecord>) -> Resolution {
        let candidates: Vec<ProjectRecord> = match self {
            ResolutionPolicy::FirstMatch | ResolutionPolicy::Unique => records,
            ResolutionPolicy::Exact => records
                .into_iter()
                .filter(|record| record.matches(identity))
                .collect(),
        };

        let count = candidates.len();
        match (self, count) {
            (_, 0) => Resolution::NotFound,
            (ResolutionPolicy::Unique | ResolutionPolicy::Exact, n) if n > 1 => {
                Resolution::Ambiguous { count: n }
            }
            _ => match candidates.into_iter().next() {
                Some(record) => Resolution::Selected {
                    record,
                    candidates: count,
                },
                None => Resolution::NotFound,
            },
        }
    }
}

impl std::str::FromStr for ResolutionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "first-match" | "first" => Ok(ResolutionPolicy::FirstMatch),
            "unique" => Ok(ResolutionPolicy::Unique),
            "exact" => Ok(ResolutionPolicy::Exact),
            _ => Err(format!(
                "Invalid resolution policy: {}. Please specify 'first-match', 'unique' or 'exact'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionPolicy::FirstMatch => write!(f, "first-match"),
            ResolutionPolicy::Unique => write!(f, "unique"),
            ResolutionPolicy::Exact => write!(f, "exact"),
        }
    }
}
