//! Merge sort tracer.
//!
//! The working array, the trace, and the recursion depth are threaded
//! explicitly through the recursive calls; depth is reported in the
//! trace, never inferred from the call stack.

use stepviz_core::{Snapshot, StepEvent, Trace, Value};

/// Trace merge sort over `values`.
pub fn trace(values: &[Value]) -> Trace {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut trace = Trace::new();

    trace.record(StepEvent::Initial, Snapshot::Array(arr.clone()), "Initial array");

    if n < 2 {
        trace.record(
            StepEvent::SortFinal { sorted_indices: (0..n).collect() },
            Snapshot::Array(arr),
            "Array is sorted",
        );
        return trace;
    }

    sort_range(&mut arr, 0, n - 1, 0, &mut trace);

    trace.record(
        StepEvent::SortFinal { sorted_indices: (0..n).collect() },
        Snapshot::Array(arr),
        "Array is sorted",
    );
    trace
}

/// Sort `arr[low..=high]`, announcing each split with a `divide` step.
fn sort_range(arr: &mut [Value], low: usize, high: usize, depth: usize, trace: &mut Trace) {
    if low >= high {
        return;
    }
    let mid = (low + high) / 2;

    trace.record(
        StepEvent::Divide {
            left_range: [low, mid],
            right_range: [mid + 1, high],
            depth,
        },
        Snapshot::Array(arr.to_vec()),
        format!(
            "Dividing range [{low}, {high}] into [{low}, {mid}] and [{}, {high}]",
            mid + 1
        ),
    );

    sort_range(arr, low, mid, depth + 1, trace);
    sort_range(arr, mid + 1, high, depth + 1, trace);
    merge(arr, low, mid, high, depth, trace);
}

/// Merge the two sorted halves of `arr[low..=high]` back in place.
fn merge(arr: &mut [Value], low: usize, mid: usize, high: usize, depth: usize, trace: &mut Trace) {
    let left = arr[low..=mid].to_vec();
    let right = arr[mid + 1..=high].to_vec();

    let (mut i, mut j, mut k) = (0, 0, low);
    while i < left.len() && j < right.len() {
        trace.record(
            StepEvent::MergeComparison {
                comparing: [low + i, mid + 1 + j],
                values: [left[i], right[j]],
            },
            Snapshot::Array(arr.to_vec()),
            format!("Comparing {} and {}", left[i], right[j]),
        );
        // Ties take the left half, keeping the sort stable.
        let value = if left[i] <= right[j] {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        arr[k] = value;
        trace.record(
            StepEvent::Place { index: k, value, depth },
            Snapshot::Array(arr.to_vec()),
            format!("Placing {value} at index {k}"),
        );
        k += 1;
    }

    while i < left.len() {
        let value = left[i];
        arr[k] = value;
        trace.record(
            StepEvent::Place { index: k, value, depth },
            Snapshot::Array(arr.to_vec()),
            format!("Placing {value} at index {k}"),
        );
        i += 1;
        k += 1;
    }
    while j < right.len() {
        let value = right[j];
        arr[k] = value;
        trace.record(
            StepEvent::Place { index: k, value, depth },
            Snapshot::Array(arr.to_vec()),
            format!("Placing {value} at index {k}"),
        );
        j += 1;
        k += 1;
    }

    trace.record(
        StepEvent::Merged { range: [low, high], depth },
        Snapshot::Array(arr.to_vec()),
        format!("Merged range [{low}, {high}]"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_state_is_sorted() {
        let trace = trace(&[38, 27, 43, 3, 9, 82, 10]);
        assert_eq!(
            trace.last().unwrap().state.as_array(),
            Some(&[3, 9, 10, 27, 38, 43, 82][..])
        );
    }

    #[test]
    fn test_divide_and_merged_counts_match() {
        let trace = trace(&[4, 3, 2, 1]);
        assert_eq!(trace.kind_count("divide"), trace.kind_count("merged"));
        assert_eq!(trace.kind_count("divide"), 3);
    }

    #[test]
    fn test_depth_is_tracked_explicitly() {
        let trace = trace(&[4, 3, 2, 1]);
        let depths: Vec<usize> = trace
            .steps()
            .iter()
            .filter_map(|s| match s.event {
                StepEvent::Divide { depth, .. } => Some(depth),
                _ => None,
            })
            .collect();
        // Top split at depth 0, both halves split at depth 1.
        assert_eq!(depths, vec![0, 1, 1]);
    }

    #[test]
    fn test_comparison_payloads_survive_overwritten_cells() {
        // Merging [3, 4] with [1, 2]: placing 1 overwrites index 0
        // before 3 is compared again, so the values must come from the
        // payload, not the live cells the indices point at.
        let trace = trace(&[3, 4, 1, 2]);
        let compared: Vec<[Value; 2]> = trace
            .steps()
            .iter()
            .filter_map(|s| match s.event {
                StepEvent::MergeComparison { values, .. } => Some(values),
                _ => None,
            })
            .collect();
        assert_eq!(compared, vec![[3, 4], [1, 2], [3, 1], [3, 2]]);
    }

    #[test]
    fn test_each_merge_comparison_is_followed_by_a_place() {
        let trace = trace(&[2, 1, 4, 3]);
        let steps = trace.steps();
        for (idx, step) in steps.iter().enumerate() {
            if step.kind() == "comparison" {
                assert_eq!(steps[idx + 1].kind(), "place");
            }
        }
    }
}
