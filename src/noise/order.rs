// Row ordering inside group runs
//
// Sorting never moves a row across a group boundary, and the geomean row
// stays at the end of its run.

use crate::config::{SortKey, SortOrder};
use crate::table::{MetricTable, Row};
use std::cmp::Ordering;

fn compare(a: &Row, b: &Row, order: SortOrder) -> Ordering {
    match (a.is_geomean(), b.is_geomean()) {
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        _ => {}
    }

    let ord = match order.key {
        SortKey::None => Ordering::Equal,
        SortKey::Name => a.benchmark.cmp(&b.benchmark),
        SortKey::Delta => a.pct_delta.abs().total_cmp(&b.pct_delta.abs()),
    };
    if order.reverse {
        ord.reverse()
    } else {
        ord
    }
}

/// Stable sort of a table's rows within each contiguous group
pub fn sort_rows(table: &mut MetricTable, order: SortOrder) {
    if order.key == SortKey::None {
        return;
    }
    for run in table.rows.chunk_by_mut(|a, b| a.group == b.group) {
        run.sort_by(|a, b| compare(a, b, order));
    }
}

pub fn sort_tables(tables: &mut [MetricTable], order: SortOrder) {
    for table in tables.iter_mut() {
        sort_rows(table, order);
    }
}
