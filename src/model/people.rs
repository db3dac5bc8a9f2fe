use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Ancestry {
    Dwarf,
    Elf,
    Gnome,
    Goblin,
    HalfElf,
    HalfOrc,
    Halfling,
    Human,
    Tengu,
}

string_enum!(Ancestry {
    Dwarf => "Dwarf",
    Elf => "Elf",
    Gnome => "Gnome",
    Goblin => "Goblin",
    HalfElf => "Half-Elf",
    HalfOrc => "Half-Orc",
    Halfling => "Halfling",
    Human => "Human",
    Tengu => "Tengu",
});

impl Ancestry {
    pub fn plural(&self) -> &'static str {
        match self {
            Ancestry::Dwarf => "Dwarves",
            Ancestry::Elf => "Elves",
            Ancestry::Gnome => "Gnomes",
            Ancestry::Goblin => "Goblins",
            Ancestry::HalfElf => "Half-Elves",
            Ancestry::HalfOrc => "Half-Orcs",
            Ancestry::Halfling => "Halflings",
            Ancestry::Human => "Humans",
            Ancestry::Tengu => "Tengus",
        }
    }

    /// Ancestries whose given names are not split by gender.
    pub fn has_ungendered_given_names(&self) -> bool {
        matches!(self, Ancestry::Gnome | Ancestry::Goblin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum HumanEthnicity {
    Garundi,
    Keleshite,
    Kellid,
    Mwangi,
    Nidalese,
    Shoanti,
    Taldan,
    Tian,
    Ulfen,
    Varisian,
    Vudrani,
}

string_enum!(HumanEthnicity {
    Garundi => "Garundi",
    Keleshite => "Keleshite",
    Kellid => "Kellid",
    Mwangi => "Mwangi",
    Nidalese => "Nidalese",
    Shoanti => "Shoanti",
    Taldan => "Taldan",
    Tian => "Tian",
    Ulfen => "Ulfen",
    Varisian => "Varisian",
    Vudrani => "Vudrani",
});

impl HumanEthnicity {
    /// Subgroups an ethnicity is split into. Empty for ethnicities without any.
    pub fn subgroups(&self) -> &'static [Subgroup] {
        match self {
            HumanEthnicity::Mwangi => &[
                Subgroup::Bekyar,
                Subgroup::Bonuwat,
                Subgroup::Mauxi,
                Subgroup::Zenj,
            ],
            HumanEthnicity::Tian => &[Subgroup::Shu],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Subgroup {
    Bekyar,
    Bonuwat,
    Mauxi,
    Zenj,
    Shu,
}

string_enum!(Subgroup {
    Bekyar => "Bekyar",
    Bonuwat => "Bonuwat",
    Mauxi => "Mauxi",
    Zenj => "Zenj",
    Shu => "Shu",
});

impl Subgroup {
    /// The subgroup whose word lists supply this subgroup's names.
    /// Mauxi share their naming traditions with the Bonuwat.
    pub fn name_source(&self) -> Subgroup {
        match self {
            Subgroup::Mauxi => Subgroup::Bonuwat,
            other => *other,
        }
    }

    /// Shu list their surname in front of their given name.
    pub fn surname_first(&self) -> bool {
        matches!(self, Subgroup::Shu)
    }
}

pub const SHOANTI_CLANS: &[&str] = &[
    "Lyrune-Quah (Moon Clan)",
    "Shadde-Quah (Axe Clan)",
    "Shriikirri-Quah (Hawk Clan)",
    "Shundar-Quah (Spire Clan)",
    "Sklar-Quah (Sun Clan)",
    "Skoan-Quah (Skull Clan)",
    "Tamiir-Quah (Wind Clan)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Gender {
    Male,
    Female,
}

string_enum!(Gender {
    Male => "Male",
    Female => "Female",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CharacterClass {
    Adept,
    Alchemist,
    Aristocrat,
    Barbarian,
    Bard,
    Champion,
    Cleric,
    Commoner,
    Druid,
    Expert,
    Fighter,
    Monk,
    Ranger,
    Rogue,
    Sorcerer,
    Warrior,
    Wizard,
}

string_enum!(CharacterClass {
    Adept => "Adept",
    Alchemist => "Alchemist",
    Aristocrat => "Aristocrat",
    Barbarian => "Barbarian",
    Bard => "Bard",
    Champion => "Champion",
    Cleric => "Cleric",
    Commoner => "Commoner",
    Druid => "Druid",
    Expert => "Expert",
    Fighter => "Fighter",
    Monk => "Monk",
    Ranger => "Ranger",
    Rogue => "Rogue",
    Sorcerer => "Sorcerer",
    Warrior => "Warrior",
    Wizard => "Wizard",
});
