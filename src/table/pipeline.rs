//! The filter, sort and page projection behind every render.
//!
//! Works on indices into the caller's record slice, which is never
//! reordered or copied.

use crate::filter::ActiveFilters;
use crate::paginator;
use crate::record::Record;
use crate::search;
use crate::sort::SortState;

/// Inputs of a projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<'a> {
    /// Search text; ignored when blank.
    pub search: Option<&'a str>,
    /// Fields the search text is matched against.
    pub search_keys: &'a [String],
    /// Active filters, when filtering is enabled.
    pub filters: Option<&'a ActiveFilters>,
    /// Sort order, when sorting is enabled.
    pub sort: Option<&'a SortState>,
}

/// Result of a projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    /// Indices of the records on the current page, in display order.
    pub rows: Vec<usize>,
    /// Number of records left after search and filtering, across all pages.
    pub filtered_total: usize,
}

/// Searches, filters, sorts and pages `records`.
///
/// The sort is stable: records comparing equal keep their input order in
/// both directions. Server-side paging returns every surviving record.
pub fn project<R: Record>(
    records: &[R],
    query: &Query<'_>,
    pager: &paginator::Model,
) -> Projection {
    let needle = query
        .search
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    let mut rows: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            needle
                .as_deref()
                .map_or(true, |n| search::matches_lowered(*r, query.search_keys, n))
        })
        .filter(|(_, r)| query.filters.map_or(true, |f| f.accepts(*r)))
        .map(|(i, _)| i)
        .collect();

    if let Some(sort) = query.sort {
        rows.sort_by(|&a, &b| sort.compare(&records[a], &records[b]));
    }

    let filtered_total = rows.len();
    let (start, end) = pager.slice_bounds(filtered_total);
    rows.truncate(end);
    rows.drain(..start);

    Projection {
        rows,
        filtered_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterSelection;
    use crate::paginator::PaginationMode;
    use serde_json::{json, Value as Json};

    fn jobs() -> Vec<Json> {
        vec![
            json!({"title": "Backend Engineer", "status": "open", "salary": 90}),
            json!({"title": "Data Analyst", "status": "closed", "salary": 70}),
            json!({"title": "Frontend Engineer", "status": "open", "salary": 80}),
            json!({"title": "QA Engineer", "status": "open", "salary": 70}),
        ]
    }

    fn keys() -> Vec<String> {
        vec!["title".to_string()]
    }

    #[test]
    fn test_no_query_keeps_input_order() {
        let p = project(&jobs(), &Query::default(), &paginator::Model::disabled());
        assert_eq!(p.rows, vec![0, 1, 2, 3]);
        assert_eq!(p.filtered_total, 4);
    }

    #[test]
    fn test_search_then_filter() {
        let records = jobs();
        let keys = keys();
        let mut filters = ActiveFilters::new();
        filters.set("status", FilterSelection::Only("open".into()));
        let q = Query {
            search: Some(" engineer "),
            search_keys: &keys,
            filters: Some(&filters),
            sort: None,
        };
        let p = project(&records, &q, &paginator::Model::disabled());
        assert_eq!(p.rows, vec![0, 2, 3]);

        let mut closed = ActiveFilters::new();
        closed.set("status", FilterSelection::Only("closed".into()));
        let q = Query {
            filters: Some(&closed),
            ..q
        };
        assert!(project(&records, &q, &paginator::Model::disabled()).rows.is_empty());
    }

    #[test]
    fn test_disabled_filtering_ignores_selections() {
        let records = jobs();
        let q = Query {
            filters: None,
            ..Query::default()
        };
        assert_eq!(project(&records, &q, &paginator::Model::disabled()).rows.len(), 4);
    }

    #[test]
    fn test_sort_is_stable_both_ways() {
        let records = jobs();
        let asc = SortState::asc("salary");
        let q = Query {
            sort: Some(&asc),
            ..Query::default()
        };
        assert_eq!(project(&records, &q, &paginator::Model::disabled()).rows, vec![1, 3, 2, 0]);

        let desc = SortState::desc("salary");
        let q = Query {
            sort: Some(&desc),
            ..Query::default()
        };
        assert_eq!(project(&records, &q, &paginator::Model::disabled()).rows, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_client_paging_slices_sorted_rows() {
        let records = jobs();
        let asc = SortState::asc("salary");
        let q = Query {
            sort: Some(&asc),
            ..Query::default()
        };
        let mut pager = paginator::Model::new(3);
        pager.set_page(2);
        let p = project(&records, &q, &pager);
        assert_eq!(p.rows, vec![0]);
        assert_eq!(p.filtered_total, 4);
    }

    #[test]
    fn test_server_paging_keeps_all_rows() {
        let records = jobs();
        let mut pager =
            paginator::Model::new(2).with_mode(PaginationMode::Server { total_count: 40 });
        pager.set_page(5);
        let p = project(&records, &Query::default(), &pager);
        assert_eq!(p.rows.len(), 4);
    }
}
