//! Bubble sort tracer with visible early termination.

use stepviz_core::{Snapshot, StepEvent, Trace, Value};

/// Trace bubble sort over `values`.
///
/// A pass that performs zero swaps ends the sort with an
/// `early_termination` step; the optimization is demonstrated in the
/// trace, never applied silently.
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

    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            trace.record(
                StepEvent::Comparison { comparing: [j, j + 1] },
                Snapshot::Array(arr.clone()),
                format!("Comparing {} and {}", arr[j], arr[j + 1]),
            );
            if arr[j] > arr[j + 1] {
                let (a, b) = (arr[j], arr[j + 1]);
                arr.swap(j, j + 1);
                swapped = true;
                trace.record(
                    StepEvent::Swap { swapped: [j, j + 1] },
                    Snapshot::Array(arr.clone()),
                    format!("Swapped {a} and {b}"),
                );
            }
        }
        trace.record(
            StepEvent::Sorted { sorted_indices: (n - i - 1..n).collect() },
            Snapshot::Array(arr.clone()),
            format!("Element at index {} is now in its sorted position", n - i - 1),
        );
        if !swapped {
            trace.record(
                StepEvent::EarlyTermination { pass: i },
                Snapshot::Array(arr.clone()),
                format!("Pass {i} made no swaps, the array is already sorted"),
            );
            break;
        }
    }

    trace.record(
        StepEvent::SortFinal { sorted_indices: (0..n).collect() },
        Snapshot::Array(arr),
        "Array is sorted",
    );
    trace
}
