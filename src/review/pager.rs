/// Fixed-size paging over the sorted image list. The offset always points at
/// the first image of the page currently on display.
#[derive(Debug, Clone)]
pub struct Pager {
    paths: Vec<String>,
    per_page: usize,
    offset: usize,
}

impl Pager {
    pub fn new(paths: Vec<String>, per_page: usize, start_offset: usize) -> Self {
        let per_page = per_page.max(1);
        let offset = start_offset.min(paths.len());
        Self {
            paths,
            per_page,
            offset,
        }
    }

    pub fn current_page(&self) -> &[String] {
        let end = (self.offset + self.per_page).min(self.paths.len());
        &self.paths[self.offset..end]
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn advance(&mut self) {
        self.offset = (self.offset + self.per_page).min(self.paths.len());
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.paths.len()
    }

    pub fn page_number(&self) -> usize {
        self.offset / self.per_page + 1
    }

    pub fn total_pages(&self) -> usize {
        self.paths.len().div_ceil(self.per_page).max(1)
    }

    pub fn total_images(&self) -> usize {
        self.paths.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_paths(count: usize) -> Vec<String> {
        (0..count).map(|index| format!("img_{index:03}.jpg")).collect()
    }

    #[test]
    fn pages_slice_in_order_and_the_last_page_is_short() {
        let mut pager = Pager::new(fake_paths(70), 32, 0);

        assert_eq!(pager.current_page().len(), 32);
        assert_eq!(pager.current_page()[0], "img_000.jpg");
        assert_eq!(pager.total_pages(), 3);

        pager.advance();
        assert_eq!(pager.current_page()[0], "img_032.jpg");
        assert_eq!(pager.page_number(), 2);

        pager.advance();
        assert_eq!(pager.current_page().len(), 6);

        pager.advance();
        assert!(pager.current_page().is_empty());
        assert!(pager.is_exhausted());
    }

    #[test]
    fn advancing_past_the_end_does_not_regress_or_panic() {
        let mut pager = Pager::new(fake_paths(5), 32, 0);
        pager.advance();
        pager.advance();

        assert_eq!(pager.offset(), 5);
        assert!(pager.current_page().is_empty());
    }

    #[test]
    fn resumed_offset_beyond_a_shrunk_dataset_saturates() {
        let pager = Pager::new(fake_paths(10), 32, 500);

        assert_eq!(pager.offset(), 10);
        assert!(pager.current_page().is_empty());
        assert!(pager.is_exhausted());
    }

    #[test]
    fn resume_reopens_the_same_page() {
        let mut first = Pager::new(fake_paths(100), 32, 0);
        first.advance();
        let resumed = Pager::new(fake_paths(100), 32, first.offset());

        assert_eq!(resumed.current_page(), first.current_page());
        assert_eq!(resumed.page_number(), 2);
    }
}
