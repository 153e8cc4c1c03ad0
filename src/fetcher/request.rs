use crate::types::query_window::QueryWindow;

/// Query parameters for one attempt: the shared base parameters plus a
/// year's date bounds. Built fresh per attempt and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    params: Vec<(&'static str, String)>,
}

impl FetchRequest {
    pub fn for_window(base: &[(&'static str, String)], window: &QueryWindow) -> Self {
        let mut params = base.to_vec();
        params.push(("startdate", window.start_param()));
        params.push(("enddate", window.end_param()));
        Self { params }
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}
