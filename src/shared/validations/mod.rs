/// Clamp pagination parameters to sane bounds (page ≥ 1, 1 ≤ page_size ≤ 100).
pub fn validate_pagination(page: Option<u64>, page_size: Option<u64>) -> (u64, u64) {
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size.unwrap_or(20).clamp(1, 100);
    (page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_missing() {
        assert_eq!(validate_pagination(None, None), (1, 20));
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(validate_pagination(Some(0), Some(0)), (1, 1));
        assert_eq!(validate_pagination(Some(3), Some(500)), (3, 100));
    }
}
