//! Selection sort tracer.

use stepviz_core::{Snapshot, StepEvent, Trace, Value};

/// Trace selection sort over `values`.
///
/// Each outer position opens with `min_selected`, records `new_min` on
/// every strict improvement while scanning the unsorted remainder, then
/// either a `before_swap`/`after_swap` pair or a `no_swap_needed` step
/// when the minimum is already in place.
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
        let mut min_idx = i;
        trace.record(
            StepEvent::MinSelected { min_index: min_idx },
            Snapshot::Array(arr.clone()),
            format!("Assuming {} at index {min_idx} is the minimum", arr[min_idx]),
        );

        for j in i + 1..n {
            trace.record(
                StepEvent::Comparison { comparing: [j, min_idx] },
                Snapshot::Array(arr.clone()),
                format!("Comparing {} with current minimum {}", arr[j], arr[min_idx]),
            );
            if arr[j] < arr[min_idx] {
                min_idx = j;
                trace.record(
                    StepEvent::NewMin { min_index: min_idx },
                    Snapshot::Array(arr.clone()),
                    format!("New minimum {} found at index {min_idx}", arr[min_idx]),
                );
            }
        }

        if min_idx != i {
            let (a, b) = (arr[i], arr[min_idx]);
            trace.record(
                StepEvent::BeforeSwap { swapping: [i, min_idx] },
                Snapshot::Array(arr.clone()),
                format!("Swapping {a} with {b}"),
            );
            arr.swap(i, min_idx);
            trace.record(
                StepEvent::AfterSwap { swapped: [i, min_idx] },
                Snapshot::Array(arr.clone()),
                format!("Swapped {a} with {b}"),
            );
        } else {
            trace.record(
                StepEvent::NoSwapNeeded { index: i },
                Snapshot::Array(arr.clone()),
                format!("Minimum {} is already at index {i}", arr[i]),
            );
        }

        trace.record(
            StepEvent::Sorted { sorted_indices: (0..=i).collect() },
            Snapshot::Array(arr.clone()),
            format!("Element {} is now in its sorted position", arr[i]),
        );
    }

    trace.record(
        StepEvent::SortFinal { sorted_indices: (0..n).collect() },
        Snapshot::Array(arr),
        "Array is sorted",
    );
    trace
}
