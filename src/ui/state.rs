/// UI state that outlives any single view.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub search_query: String,
    pub has_focus: bool,
    pub should_quit: bool,
}
