//! TF-IDF arithmetic
//!
//! Pure functions only; every guard against division by zero lives here.

/// Share of a document's terms taken by one term
///
/// Returns 0.0 for an empty document.
pub fn term_frequency(occurrences: u64, total_terms: usize) -> f64 {
    if total_terms == 0 {
        return 0.0;
    }
    occurrences as f64 / total_terms as f64
}

/// Inverse document frequency as `documents / occurrences`
///
/// Both counts describe the corpus before the current document is added. A zero
/// in either position is read as 1, so the first document and unseen terms get
/// an IDF of at least 1.
pub fn reference_idf(document_count: u64, occurrence_frequency: u64) -> f64 {
    let documents = document_count.max(1) as f64;
    let occurrences = occurrence_frequency.max(1) as f64;
    documents / occurrences
}

/// Inverse document frequency as `log10(N / df)`
///
/// `N` and `df` already include the current document. Returns 0.0 when either
/// count is zero.
pub fn standard_idf(document_count: u64, document_frequency: u64) -> f64 {
    if document_count == 0 || document_frequency == 0 {
        return 0.0;
    }
    (document_count as f64 / document_frequency as f64).log10()
}
