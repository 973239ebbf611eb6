//! Helpers shared by the list command handlers

use log::debug;

/// Truncate to `limit` items. Zero means no limit.
pub fn apply_limit<T>(items: &mut Vec<T>, limit: usize) {
    if limit > 0 && items.len() > limit {
        debug!("Limiting {} results to {}", items.len(), limit);
        items.truncate(limit);
    }
}

/// Keep items whose key equals `wanted` ignoring case. `None` keeps everything.
pub fn retain_matching<T, F>(items: &mut Vec<T>, wanted: Option<&str>, key: F)
where
    F: Fn(&T) -> &str,
{
    if let Some(wanted) = wanted {
        items.retain(|item| key(item).eq_ignore_ascii_case(wanted));
        debug!("Filtered to {} results matching '{}'", items.len(), wanted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_limit() {
        let mut items = vec![1, 2, 3, 4];
        apply_limit(&mut items, 2);
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn test_apply_limit_zero_keeps_all() {
        let mut items = vec![1, 2, 3];
        apply_limit(&mut items, 0);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_apply_limit_larger_than_len() {
        let mut items = vec![1];
        apply_limit(&mut items, 10);
        assert_eq!(items, vec![1]);
    }

    #[test]
    fn test_retain_matching_ignores_case() {
        let mut items = vec!["ADMIN", "member", "Admin"];
        retain_matching(&mut items, Some("admin"), |s| s);
        assert_eq!(items, vec!["ADMIN", "Admin"]);
    }

    #[test]
    fn test_retain_matching_none_keeps_all() {
        let mut items = vec!["a", "b"];
        retain_matching(&mut items, None, |s| s);
        assert_eq!(items.len(), 2);
    }
}
