use serde::{Deserialize, Serialize};

/// What a thieves' guild earns its money from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Specialty {
    Corruption,
    Counterfeiting,
    Drugs,
    Exploitation,
    Fraud,
    Property,
    Racketeering,
    Smuggling,
    Vice,
    Violence,
}

string_enum!(Specialty {
    Corruption => "corruption",
    Counterfeiting => "counterfeiting",
    Drugs => "drugs",
    Exploitation => "exploitation",
    Fraud => "fraud",
    Property => "property",
    Racketeering => "racketeering",
    Smuggling => "smuggling",
    Vice => "vice",
    Violence => "violence",
});

/// Work that keeps a guild running but earns nothing directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GuildJob {
    GuardDuty,
    Patrol,
    Investigate,
    Recruit,
    Escort,
    Expansion,
}

string_enum!(GuildJob {
    GuardDuty => "guard duty",
    Patrol => "patrol",
    Investigate => "investigate",
    Recruit => "recruit",
    Escort => "escort",
    Expansion => "expansion",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_specialties() {
        assert_eq!(Specialty::ALL.len(), 10);
        assert_eq!(Specialty::parse("property"), Some(Specialty::Property));
        assert_eq!(Specialty::parse("Property"), None);
    }

    #[test]
    fn guild_jobs_use_spaces() {
        assert_eq!(GuildJob::GuardDuty.to_string(), "guard duty");
    }
}
