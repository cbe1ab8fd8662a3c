/// Operator-facing UI state.
#[derive(Default)]
pub struct UIState {
    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
