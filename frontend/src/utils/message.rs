/// Success or error banner state for a form or list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_error_replace_each_other() {
        let mut state = MessageState::default();
        state.set_error("Booking failed");
        assert_eq!(state.error.as_deref(), Some("Booking failed"));
        state.set_success("Booking created successfully!");
        assert!(state.error.is_none());
        state.clear();
        assert_eq!(state, MessageState::default());
    }
}
