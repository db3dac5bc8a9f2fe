#[macro_use]
mod macros;

pub mod crime;
pub mod guild;
pub mod people;
pub mod settlement;

pub use crime::{CrimeSeverity, WantedStatus};
pub use guild::{GuildJob, Specialty};
pub use people::{Ancestry, CharacterClass, Gender, HumanEthnicity, SHOANTI_CLANS, Subgroup};
pub use settlement::{
    Alignment, CITY_SIZE_LIMITS, Disadvantage, Ethic, Government, Morality, Quality,
    SettlementStats, SettlementType,
};
