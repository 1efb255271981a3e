pub mod bs;
pub mod normal;

/// Option leg selector used by the session and report layers.
pub mod types {
    use serde::{Deserialize, Serialize};

    /// Which legs to display.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum PlotType {
        Call,
        Put,
        #[default]
        Both,
    }

    impl PlotType {
        pub fn shows_call(self) -> bool {
            matches!(self, PlotType::Call | PlotType::Both)
        }

        pub fn shows_put(self) -> bool {
            matches!(self, PlotType::Put | PlotType::Both)
        }
    }
}
