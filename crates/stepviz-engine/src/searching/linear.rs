//! Linear search tracer.

use stepviz_core::{Snapshot, StepEvent, Trace, Value};

/// Trace a left-to-right scan of `values` for `target`.
///
/// Emits one `checking` step per examined index and breaks immediately
/// on a match; no further indices are scanned after `found`.
pub fn trace(values: &[Value], target: Option<Value>) -> Trace {
    let arr = values.to_vec();
    let target = target.or_else(|| arr.last().copied());
    let mut trace = Trace::new();

    let opening = match target {
        Some(t) => format!("Searching for {t} in the array"),
        None => "Initial array".to_string(),
    };
    trace.record(StepEvent::Initial, Snapshot::Array(arr.clone()), opening);

    let mut found_index = None;
    if let Some(t) = target {
        for (i, &v) in arr.iter().enumerate() {
            trace.record(
                StepEvent::Checking { index: i },
                Snapshot::Array(arr.clone()),
                format!("Checking index {i} with value {v}"),
            );
            if v == t {
                trace.record(
                    StepEvent::Found { index: i },
                    Snapshot::Array(arr.clone()),
                    format!("Found {t} at index {i}"),
                );
                found_index = Some(i);
                break;
            }
        }
    }

    if found_index.is_none() {
        let missing = match target {
            Some(t) => format!("{t} is not in the array"),
            None => "The array is empty, nothing to search".to_string(),
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
