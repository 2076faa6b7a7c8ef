use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinnieState {
    pub home: bool,
}

impl Default for WinnieState {
    fn default() -> Self {
        Self { home: true }
    }
}
