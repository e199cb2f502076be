//! Insertion sort tracer.

use stepviz_core::{Snapshot, StepEvent, Trace, Value};

/// Trace insertion sort over `values`.
///
/// For each key, the sorted prefix is scanned right to left: every
/// evaluated pair gets a `comparison` step (including the final failing
/// one), every displacement a `shift` step, and the key lands with an
/// `insert` step, or `already_positioned` when it never moved.
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

    for i in 1..n {
        let key = arr[i];
        let mut j = i;

        while j > 0 {
            trace.record(
                StepEvent::Comparison { comparing: [j - 1, j] },
                Snapshot::Array(arr.clone()),
                format!("Comparing {} with key {key}", arr[j - 1]),
            );
            if arr[j - 1] <= key {
                break;
            }
            arr[j] = arr[j - 1];
            trace.record(
                StepEvent::Shift { from: j - 1, to: j },
                Snapshot::Array(arr.clone()),
                format!("Shifting {} right to index {j}", arr[j]),
            );
            j -= 1;
        }
        arr[j] = key;

        if j == i {
            trace.record(
                StepEvent::AlreadyPositioned { index: i },
                Snapshot::Array(arr.clone()),
                format!("Key {key} is already in position at index {i}"),
            );
        } else {
            trace.record(
                StepEvent::Insert { index: j, key },
                Snapshot::Array(arr.clone()),
                format!("Inserting {key} at index {j}"),
            );
        }

        trace.record(
            StepEvent::Sorted { sorted_indices: (0..=i).collect() },
            Snapshot::Array(arr.clone()),
            format!("First {} elements are now in sorted order", i + 1),
        );
    }

    trace.record(
        StepEvent::SortFinal { sorted_indices: (0..n).collect() },
        Snapshot::Array(arr),
        "Array is sorted",
    );
    trace
}
