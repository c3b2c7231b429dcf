use serde::Serialize;
use uuid::Uuid;

/// Read model the matcher scans: one row per verified channel with the
/// owning company's display name already joined in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedChannel {
    pub channel_id: Uuid,
    pub company_id: Uuid,
    pub company_name: String,
    pub value: String,
}

/// How a candidate matched the submitted value.
///
/// Containment hits are deliberately kept for compatibility with the lenient
/// matching policy, but callers get to see that the hit was not exact and can
/// apply a stricter policy downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    Exact,
    Containment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchHit<'a> {
    pub channel: &'a VerifiedChannel,
    pub confidence: MatchConfidence,
}

/// Resolve a free-text input against the verified channels.
///
/// Both sides are lower-cased; per candidate the checks are, in order:
/// exact equality, registered value contained in the input, input contained
/// in the registered value. The first candidate (registry insertion order)
/// satisfying any check wins.
pub fn match_input<'a>(input: &str, candidates: &'a [VerifiedChannel]) -> Option<MatchHit<'a>> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        // An empty needle is a substring of everything; matching it would
        // hand out the first verified channel to any blank query.
        return None;
    }

    for candidate in candidates {
        let registered = candidate.value.trim().to_lowercase();
        if registered.is_empty() {
            continue;
        }
        if registered == needle {
            return Some(MatchHit {
                channel: candidate,
                confidence: MatchConfidence::Exact,
            });
        }
        if needle.contains(&registered) || registered.contains(&needle) {
            return Some(MatchHit {
                channel: candidate,
                confidence: MatchConfidence::Containment,
            });
        }
    }

    None
}
