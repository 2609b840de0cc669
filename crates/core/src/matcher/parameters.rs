use defscope_api::{CandidateFunction, PrintingPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterMatch {
    Matched,
    Mismatch {
        index: usize,
        expected: String,
        found: String,
    },
    /// The candidate ran out of parameter types before `index` even though
    /// its count said otherwise.
    Truncated { index: usize },
}

impl ParameterMatch {
    pub fn is_match(&self) -> bool {
        matches!(self, ParameterMatch::Matched)
    }
}

/// Compare the candidate's canonical parameter types against `expected`,
/// position by position.
///
/// The caller must have checked that the parameter counts agree; only
/// `expected.len()` positions are compared.
pub fn match_parameters(
    expected: &[String],
    candidate: &dyn CandidateFunction,
    policy: &PrintingPolicy,
) -> ParameterMatch {
    let mut found = candidate.canonical_parameter_types(policy);
    for (index, expected_type) in expected.iter().enumerate() {
        let Some(found_type) = found.next() else {
            return ParameterMatch::Truncated { index };
        };
        if *expected_type != found_type {
            return ParameterMatch::Mismatch {
                index,
                expected: expected_type.clone(),
                found: found_type,
            };
        }
    }
    ParameterMatch::Matched
}
