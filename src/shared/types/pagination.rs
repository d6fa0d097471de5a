/// Paginated response wrapper
#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, page_size: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };
        Self {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_of_two_pages() {
        let result = PaginatedResult::new(vec![0u8; 10], 15, 1, 10);
        assert_eq!(result.total_pages, 2);
        assert!(result.has_next_page());
        assert!(!result.has_previous_page());
    }

    #[test]
    fn last_page_is_short() {
        let result = PaginatedResult::new(vec![0u8; 5], 15, 2, 10);
        assert_eq!(result.items.len(), 5);
        assert!(!result.has_next_page());
        assert!(result.has_previous_page());
    }

    #[test]
    fn empty_result_has_no_pages() {
        let result: PaginatedResult<u8> = PaginatedResult::new(vec![], 0, 1, 20);
        assert_eq!(result.total_pages, 0);
        assert!(!result.has_next_page());
        assert!(!result.has_previous_page());
    }
}
