use std::fmt;

use serde::{Deserialize, Serialize};

/// A single handful of candy, e.g. "2 expired, fun-size Snickers".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treat {
    pub quantity: u32,
    #[serde(alias = "state")]
    pub condition: String,
    pub size: String,
    pub name: String,
}

impl Treat {
    pub fn new(
        quantity: u32,
        size: impl Into<String>,
        condition: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            quantity,
            condition: condition.into(),
            size: size.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Treat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}-size {}",
            self.quantity, self.condition, self.size, self.name
        )
    }
}
