use std::path::Path;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::cache::session::SessionCache;
use crate::catalog::scan::scan_images;
use crate::infra::config::AppConfig;
use crate::review::output::OutputSink;
use crate::review::pager::Pager;

pub struct ReviewController {
    dataset_name: String,
    state: AppState,
    pager: Pager,
    cache: SessionCache,
    sink: OutputSink,
}

impl ReviewController {
    pub fn bootstrap(
        config: &AppConfig,
        target_dir: &str,
        dataset_name: &str,
    ) -> Result<Self, String> {
        let report = scan_images(target_dir)?;
        let work_dir = Path::new(&config.work_dir);
        let mut cache = SessionCache::open(work_dir, dataset_name)?;
        let sink = OutputSink::open(&work_dir.join(format!("{dataset_name}.txt")))?;

        let pager = Pager::new(report.paths, config.images_per_page, cache.last_index());
        // The cache always names the page currently on display, the first
        // page included.
        cache.store_last_index(pager.offset())?;

        println!(
            "img-sift initialized (dataset: {dataset_name}, images: {} of {} scanned files, resume offset: {})",
            report.supported_files,
            report.scanned_files,
            pager.offset()
        );

        Ok(Self {
            dataset_name: dataset_name.to_string(),
            state: AppState {
                session_loaded: true,
                ..AppState::default()
            },
            pager,
            cache,
            sink,
        })
    }

    pub fn dataset_name(&self) -> &str {
        &self.dataset_name
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current_page(&self) -> &[String] {
        self.pager.current_page()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pager.is_exhausted()
    }

    pub fn page_number(&self) -> usize {
        self.pager.page_number()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages()
    }

    pub fn total_images(&self) -> usize {
        self.pager.total_images()
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmitPage(selected) => match self.submit_page(&selected) {
                Ok(appended) => {
                    println!(
                        "submitted page: {appended} image(s) appended to {}",
                        self.sink.path().display()
                    );
                }
                Err(error) => {
                    eprintln!("submit failed: {error}");
                }
            },
            AppEvent::Quit => {
                println!(
                    "session closed (dataset: {}, pages submitted: {}, images appended: {})",
                    self.dataset_name, self.state.pages_submitted, self.state.images_appended
                );
            }
        }
    }

    fn submit_page(&mut self, selected: &[String]) -> Result<usize, String> {
        let appended = self.sink.append_paths(selected)?;
        self.pager.advance();
        self.cache.store_last_index(self.pager.offset())?;
        self.state.pages_submitted += 1;
        self.state.images_appended += appended;
        Ok(appended)
    }
}
