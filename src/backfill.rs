// Copyright (c) 2025 - Cowboy AI, Inc.
//! End-Date Backfill
//!
//! Second pass over a [`TransitionStream`]. Every transition ends when the
//! next transition of the same service starts:
//!
//! ```text
//! entitlement buffer:  [t0]──────[t2]──────[t3]
//!                       end=t2    end=t3    end=None
//! billing buffer:      [t1]
//!                       end=None
//! ```
//!
//! One cursor per service walks that service's buffer. The cursor starts at
//! the buffer's second entry and advances each time the global scan visits a
//! transition of that service. Since the global order keeps each service's
//! relative order, the k-th visit of a service reads entry k+1 of its buffer.
//! The last transition of each service keeps no end date.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::ServiceName;
use crate::stream::TransitionStream;

/// Set every transition's end date from its service successor's start date
pub fn backfill_end_dates(stream: &mut TransitionStream) {
    let TransitionStream {
        transitions,
        per_service,
    } = stream;

    let mut cursors: HashMap<ServiceName, usize> = HashMap::new();

    for position in 0..transitions.len() {
        let service = transitions[position].next_service();
        let Some(buffer) = per_service.get(service) else {
            continue;
        };

        let cursor = cursors.entry(service.clone()).or_insert(1);
        if let Some(&successor) = buffer.get(*cursor) {
            *cursor += 1;
            let end = transitions[successor].next_start_date();
            trace!("Transition {} of {} ends at {}", position, service, end);
            transitions[position].set_next_end_date(end);
        }
    }
}
