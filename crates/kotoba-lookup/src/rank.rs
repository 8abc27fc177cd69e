use crate::types::RemoteWord;

/// Order results so exact word/reading matches on `keyword` come first.
///
/// Stable within both groups. A blank keyword keeps the API's order.
pub fn rank_exact_first<'a>(keyword: &str, results: &'a [RemoteWord]) -> Vec<&'a RemoteWord> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return results.iter().collect();
    }

    let (mut exact, rest): (Vec<_>, Vec<_>) =
        results.iter().partition(|word| word.matches_exactly(keyword));
    exact.extend(rest);
    exact
}
