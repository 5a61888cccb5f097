#[derive(Debug, Clone)]
pub enum AppEvent {
    SubmitPage(Vec<String>),
    Quit,
}
