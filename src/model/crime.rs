use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CrimeSeverity {
    Minor,
    Lesser,
    Serious,
    Severe,
}

string_enum!(CrimeSeverity {
    Minor => "Minor",
    Lesser => "Lesser",
    Serious => "Serious",
    Severe => "Severe",
});

impl CrimeSeverity {
    /// Position in the severity scale, 0 for minor.
    pub fn rank(&self) -> u32 {
        match self {
            CrimeSeverity::Minor => 0,
            CrimeSeverity::Lesser => 1,
            CrimeSeverity::Serious => 2,
            CrimeSeverity::Severe => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum WantedStatus {
    Alive,
    DeadOrAlive,
}

string_enum!(WantedStatus {
    Alive => "Alive",
    DeadOrAlive => "Dead or Alive",
});
