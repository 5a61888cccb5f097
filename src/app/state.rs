#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session_loaded: bool,
    pub pages_submitted: usize,
    pub images_appended: usize,
}
