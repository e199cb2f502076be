//! Quick sort tracer (Lomuto partition, last element as pivot).
//!
//! The pivot is fixed, never randomized, so the step sequence is fully
//! deterministic. Recursion only enters partitions of two or more
//! elements: the guards are strict (`pi > low + 1`, `pi + 1 < high`),
//! so boundary single-element partitions get no `recursive_call` step.

use stepviz_core::{Snapshot, StepEvent, Trace, Value};

/// Trace quick sort over `values`.
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

fn sort_range(arr: &mut [Value], low: usize, high: usize, depth: usize, trace: &mut Trace) {
    let pi = partition(arr, low, high, depth, trace);

    if pi > low + 1 {
        trace.record(
            StepEvent::RecursiveCall { range: [low, pi - 1], depth: depth + 1 },
            Snapshot::Array(arr.to_vec()),
            format!("Recursing into left partition [{low}, {}]", pi - 1),
        );
        sort_range(arr, low, pi - 1, depth + 1, trace);
    }
    if pi + 1 < high {
        trace.record(
            StepEvent::RecursiveCall { range: [pi + 1, high], depth: depth + 1 },
            Snapshot::Array(arr.to_vec()),
            format!("Recursing into right partition [{}, {high}]", pi + 1),
        );
        sort_range(arr, pi + 1, high, depth + 1, trace);
    }
}

/// Lomuto partition of `arr[low..=high]` around `arr[high]`.
fn partition(arr: &mut [Value], low: usize, high: usize, depth: usize, trace: &mut Trace) -> usize {
    let pivot = arr[high];
    trace.record(
        StepEvent::Pivot { pivot_index: high, depth },
        Snapshot::Array(arr.to_vec()),
        format!("Choosing {pivot} at index {high} as the pivot"),
    );

    let mut i = low;
    for j in low..high {
        trace.record(
            StepEvent::Comparison { comparing: [j, high] },
            Snapshot::Array(arr.to_vec()),
            format!("Comparing {} with pivot {pivot}", arr[j]),
        );
        if arr[j] < pivot {
            if i != j {
                let (a, b) = (arr[i], arr[j]);
                trace.record(
                    StepEvent::BeforeSwap { swapping: [i, j] },
                    Snapshot::Array(arr.to_vec()),
                    format!("Swapping {a} with {b}"),
                );
                arr.swap(i, j);
                trace.record(
                    StepEvent::AfterSwap { swapped: [i, j] },
                    Snapshot::Array(arr.to_vec()),
                    format!("Swapped {a} with {b}"),
                );
            } else {
                trace.record(
                    StepEvent::NoSwapNeeded { index: j },
                    Snapshot::Array(arr.to_vec()),
                    format!("Element {} is already in the left partition", arr[j]),
                );
            }
            i += 1;
        }
    }

    if i != high {
        let displaced = arr[i];
        trace.record(
            StepEvent::BeforeSwap { swapping: [i, high] },
            Snapshot::Array(arr.to_vec()),
            format!("Swapping {displaced} with pivot {pivot}"),
        );
        arr.swap(i, high);
        trace.record(
            StepEvent::AfterSwap { swapped: [i, high] },
            Snapshot::Array(arr.to_vec()),
            format!("Moved pivot {pivot} to index {i}"),
        );
    } else {
        trace.record(
            StepEvent::NoSwapNeeded { index: high },
            Snapshot::Array(arr.to_vec()),
            format!("Pivot {pivot} is already at index {high}"),
        );
    }

    let left_range = if i > low { Some([low, i - 1]) } else { None };
    let right_range = if i < high { Some([i + 1, high]) } else { None };
    trace.record(
        StepEvent::Partition { left_range, right_range, depth },
        Snapshot::Array(arr.to_vec()),
        format!("Partitioned range [{low}, {high}] around index {i}"),
    );
    i
}
