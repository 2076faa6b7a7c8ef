use super::pond::Food;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlfredState {
    pub belly: Vec<Food>,
    pub happy: bool,
}

impl Default for AlfredState {
    fn default() -> Self {
        Self {
            belly: Vec::new(),
            happy: true,
        }
    }
}
