/// Returns `true` when any of the configured out-of-stock labels occurs in
/// the page text.
///
/// Matching is case-sensitive literal substring containment — no word
/// boundaries, no regex. A label like "out" also matches "about"; vendors'
/// labels are long enough in practice that this has not been a problem.
///
/// `None` page text (extraction produced nothing) means no label can match,
/// so the page is reported as in stock. An empty label set likewise never
/// matches.
pub fn is_out_of_stock(page_text: Option<&str>, labels: &[String]) -> bool {
    let Some(text) = page_text else {
        return false;
    };
    labels.iter().any(|label| text.contains(label.as_str()))
}
