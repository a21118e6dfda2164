//! Response normalisation: raw passthrough, flat item list, paginated envelope.
//!
//! The backend's response shape is `{"result": {"items": [...], "total": N,
//! "num": N, ...}}`. The normaliser treats an absent or malformed shape as
//! "no results", never as an error — callers that need to distinguish can
//! use the raw passthrough mode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One item record as returned by the backend: field name → JSON value.
///
/// The field set is application-defined (and narrowed by fetch-field
/// selection), so records stay generic maps rather than fixed structs.
pub type Record = Map<String, Value>;

/// Paginated response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Ordered item records for this page.
    pub items: Vec<Record>,
    /// Heuristic "more pages" signal: `true` only when the backend-reported
    /// returned-count equals the requested page size and the total count is
    /// positive. The backend returns no next-page cursor, so this can be a
    /// false negative exactly at the last page boundary.
    pub has_more: bool,
}

/// Extract the `result.items` records from a backend response.
///
/// An absent or malformed shape yields an empty sequence. Array entries
/// that are not objects are skipped.
pub fn items(response: &Value) -> Vec<Record> {
    response
        .get("result")
        .and_then(|result| result.get("items"))
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_object).cloned().collect())
        .unwrap_or_default()
}

/// Normalise a backend response into a paginated envelope.
///
/// `requested_hits` is the page size the request asked for; `has_more`
/// compares it against the backend-reported returned-count (`result.num`)
/// and is forced `false` whenever `result.total` is below 1.
pub fn page(response: &Value, requested_hits: u32) -> Page {
    let Some(result) = response.get("result") else {
        return Page::default();
    };
    if result.get("items").and_then(Value::as_array).is_none() {
        return Page::default();
    }

    let total = result.get("total").and_then(Value::as_i64).unwrap_or(0);
    let num = result.get("num").and_then(Value::as_u64);
    let has_more = total >= 1 && num == Some(u64::from(requested_hits));

    Page {
        items: items(response),
        has_more,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(total: i64, num: u64, item_count: usize) -> Value {
        let items: Vec<Value> = (0..item_count)
            .map(|i| json!({"id": i, "title": format!("Item {i}")}))
            .collect();
        json!({"status": "OK", "result": {"total": total, "num": num, "items": items}})
    }

    #[test]
    fn full_page_has_more() {
        let page = page(&response(250, 100, 100), 100);
        assert_eq!(page.items.len(), 100);
        assert!(page.has_more);
    }

    #[test]
    fn short_page_has_no_more() {
        let page = page(&response(250, 50, 50), 100);
        assert_eq!(page.items.len(), 50);
        assert!(!page.has_more);
    }

    #[test]
    fn zero_total_never_has_more() {
        // Even with num == requested hits, total below 1 forces false.
        let page = page(&response(0, 100, 100), 100);
        assert!(!page.has_more);
    }

    #[test]
    fn negative_total_never_has_more() {
        let page = page(&response(-1, 100, 100), 100);
        assert!(!page.has_more);
    }

    #[test]
    fn exact_last_page_false_positive_documented() {
        // 200 total, page size 100, second page: num == hits, so the
        // heuristic still says "more" even though page 2 was the last.
        let page = page(&response(200, 100, 100), 100);
        assert!(page.has_more);
    }

    #[test]
    fn missing_result_yields_empty_page() {
        let page = page(&json!({"status": "OK"}), 100);
        assert_eq!(page, Page::default());
    }

    #[test]
    fn missing_items_yields_empty_page() {
        let page = page(&json!({"result": {"total": 10, "num": 10}}), 10);
        assert_eq!(page, Page::default());
    }

    #[test]
    fn non_array_items_yields_empty_page() {
        let page = page(&json!({"result": {"items": "oops", "total": 1, "num": 1}}), 1);
        assert_eq!(page, Page::default());
    }

    #[test]
    fn missing_num_yields_no_more() {
        let value = json!({"result": {"items": [{"id": 1}], "total": 100}});
        let page = page(&value, 1);
        assert_eq!(page.items.len(), 1);
        assert!(!page.has_more);
    }

    #[test]
    fn items_extracts_records() {
        let records = items(&response(3, 3, 3));
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].get("id"), Some(&json!(0)));
        assert_eq!(records[2].get("title"), Some(&json!("Item 2")));
    }

    #[test]
    fn items_missing_shape_yields_empty() {
        assert!(items(&json!({})).is_empty());
        assert!(items(&json!({"result": {}})).is_empty());
        assert!(items(&json!({"result": {"items": 7}})).is_empty());
    }

    #[test]
    fn items_skips_non_object_entries() {
        let value = json!({"result": {"items": [{"id": 1}, "stray", 42, {"id": 2}]}});
        let records = items(&value);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn page_serde_round_trip() {
        let page = Page {
            items: items(&response(2, 2, 2)),
            has_more: true,
        };
        let encoded = serde_json::to_string(&page).expect("serialize");
        let decoded: Page = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, page);
    }

    #[test]
    fn default_page_is_empty_and_closed() {
        let page = Page::default();
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }
}
