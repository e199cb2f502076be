//! Binary search tracer.
//!
//! Sortedness is a precondition binary search enforces rather than
//! assumes: the tracer sorts its own working copy first (`presort`
//! step) and searches that. An iteration cap bounds the halving loop
//! so a malformed working copy can never spin; hitting the cap still
//! terminates the trace through `not_found`.

use stepviz_core::{Snapshot, StepEvent, Trace, Value};

/// Trace binary search over a sorted working copy of `values`.
///
/// `cap_multiplier` scales the iteration cap:
/// `cap = cap_multiplier * (floor(log2(n)) + 1)`.
pub fn trace(values: &[Value], target: Option<Value>, cap_multiplier: usize) -> Trace {
    let mut trace = Trace::new();
    trace.record(
        StepEvent::Initial,
        Snapshot::Array(values.to_vec()),
        "Initial array",
    );

    let mut arr = values.to_vec();
    arr.sort_unstable();
    let n = arr.len();

    if n > 0 {
        trace.record(
            StepEvent::Presort,
            Snapshot::Array(arr.clone()),
            "Sorted the working copy, binary search requires sorted input",
        );
    }

    let target = target.or_else(|| if n == 0 { None } else { Some(arr[n / 2]) });

    let mut found_index = None;
    let mut capped = false;
    if let Some(t) = target {
        let cap = iteration_cap(n, cap_multiplier);
        let (mut left, mut right) = (0i64, n as i64 - 1);
        let mut iterations = 0usize;

        while left <= right {
            iterations += 1;
            if iterations > cap {
                capped = true;
                break;
            }
            let mid = (left + right) / 2;
            trace.record(
                StepEvent::SearchRange { left, right, mid },
                Snapshot::Array(arr.clone()),
                format!("Searching range [{left}, {right}] with midpoint {mid}"),
            );
            let v = arr[mid as usize];
            trace.record(
                StepEvent::Checking { index: mid as usize },
                Snapshot::Array(arr.clone()),
                format!("Checking index {mid} with value {v}"),
            );
            if v == t {
                trace.record(
                    StepEvent::Found { index: mid as usize },
                    Snapshot::Array(arr.clone()),
                    format!("Found {t} at index {mid}"),
                );
                found_index = Some(mid as usize);
                break;
            } else if v < t {
                trace.record(
                    StepEvent::MoveRight { left: mid + 1 },
                    Snapshot::Array(arr.clone()),
                    format!("{v} is less than {t}, moving the left bound to {}", mid + 1),
                );
                left = mid + 1;
            } else {
                trace.record(
                    StepEvent::MoveLeft { right: mid - 1 },
                    Snapshot::Array(arr.clone()),
                    format!("{v} is greater than {t}, moving the right bound to {}", mid - 1),
                );
                right = mid - 1;
            }
        }
    }

    if found_index.is_none() {
        let missing = match (target, capped) {
            (Some(t), true) => format!("Stopped at the iteration cap without finding {t}"),
            (Some(t), false) => format!("{t} is not in the array"),
            (None, _) => "The array is empty, nothing to search".to_string(),
        };
        trace.record(StepEvent::NotFound { target }, Snapshot::Array(arr.clone()), missing);
    }

    let closing = match found_index {
        Some(i) => format!("Search finished at index {i}"),
        None => "Search finished without a match".to_string(),
    };
    trace.record(
        StepEvent::SearchFinal {
            found: found_index.is_some(),
            index: found_index,
            target,
        },
        Snapshot::Array(arr),
        closing,
    );
    trace
}

/// `floor(log2(n)) + 1` scaled by the configured multiplier; a correct
/// search on sorted input never comes close to this bound.
fn iteration_cap(n: usize, multiplier: usize) -> usize {
    let bit_length = (usize::BITS - n.leading_zeros()) as usize;
    multiplier.max(1) * bit_length.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presorts_before_searching() {
        let trace = trace(&[5, 3, 1, 4, 2], Some(3), 2);
        let steps = trace.steps();
        assert_eq!(steps[0].kind(), "initial");
        assert_eq!(steps[0].state.as_array(), Some(&[5, 3, 1, 4, 2][..]));
        assert_eq!(steps[1].kind(), "presort");
        assert_eq!(steps[1].state.as_array(), Some(&[1, 2, 3, 4, 5][..]));
        // 3 sits at index 2 of the sorted copy and is hit on the first probe.
        assert!(matches!(
            trace.last().unwrap().event,
            StepEvent::SearchFinal { found: true, index: Some(2), .. }
        ));
    }

    #[test]
    fn test_miss_narrows_to_empty_range() {
        let trace = trace(&[1, 3, 5, 7], Some(4), 2);
        assert_eq!(trace.kind_count("not_found"), 1);
        assert_eq!(trace.kind_count("found"), 0);
        assert!(trace.kind_count("search_range") >= 1);
    }

    #[test]
    fn test_default_target_is_the_middle_of_the_sorted_copy() {
        let trace = trace(&[9, 1, 5], None, 2);
        // Sorted copy [1, 5, 9]; default target 5 is found immediately.
        assert!(matches!(
            trace.last().unwrap().event,
            StepEvent::SearchFinal { found: true, index: Some(1), target: Some(5) }
        ));
    }

    #[test]
    fn test_bounds_move_by_halving() {
        let trace = trace(&[1, 2, 3, 4, 5, 6, 7, 8], Some(1), 2);
        let moves: Vec<&str> = trace
            .steps()
            .iter()
            .map(|s| s.kind())
            .filter(|k| *k == "move_left" || *k == "move_right")
            .collect();
        // Probes land on 4, then 2, then hit 1.
        assert_eq!(moves, vec!["move_left", "move_left"]);
    }

    #[test]
    fn test_tightest_cap_never_cuts_off_a_real_search() {
        // A multiplier of 1 equals the worst-case probe count, so even
        // the deepest miss exits through left > right, not the cap.
        let trace = trace(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16], Some(0), 1);
        assert_eq!(trace.kind_count("found"), 0);
        assert_eq!(trace.kind_count("not_found"), 1);
        assert_eq!(trace.last().unwrap().kind(), "final");
    }

    #[test]
    fn test_empty_input_is_a_miss() {
        let trace = trace(&[], None, 2);
        assert_eq!(trace.kind_count("presort"), 0);
        assert_eq!(trace.kind_count("not_found"), 1);
        assert_eq!(trace.last().unwrap().kind(), "final");
    }
}
