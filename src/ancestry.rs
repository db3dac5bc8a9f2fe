//! Ancestry, ethnicity, gender and name resolution.

use tracing::debug;

use crate::city::City;
use crate::error::Result;
use crate::generator::Generator;
use crate::model::{Ancestry, Gender, HumanEthnicity, SHOANTI_CLANS, Subgroup};
use crate::wordlist::WordList;

/// Redraws allowed when an elf's father would share the child's name.
const FATHER_NAME_REROLLS: usize = 10;

/// Where a name part came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrigin {
    /// The character's own ancestry (or ethnicity) lists.
    Own,
    Human(HumanEthnicity),
    Elf,
    HalfElf,
    /// There is no such name part.
    Absent,
}

/// Optional constraints on a generated ancestry. Unset fields are randomized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AncestryRequest {
    pub ancestry: Option<Ancestry>,
    pub gender: Option<Gender>,
}

impl AncestryRequest {
    pub fn ancestry(ancestry: Ancestry) -> Self {
        Self {
            ancestry: Some(ancestry),
            gender: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestrySelection {
    ancestry: Ancestry,
    ethnicity: Option<HumanEthnicity>,
    subgroup: Option<Subgroup>,
    gender: Gender,
    given_name: String,
    surname: String,
    full_name: String,
    notes: Vec<String>,
    given_name_origin: NameOrigin,
    surname_origin: NameOrigin,
}

impl AncestrySelection {
    pub fn ancestry(&self) -> Ancestry {
        self.ancestry
    }

    pub fn ethnicity(&self) -> Option<HumanEthnicity> {
        self.ethnicity
    }

    pub fn subgroup(&self) -> Option<Subgroup> {
        self.subgroup
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn given_name_origin(&self) -> NameOrigin {
        self.given_name_origin
    }

    pub fn surname_origin(&self) -> NameOrigin {
        self.surname_origin
    }
}

/// The parts of a lineage that pick word lists.
#[derive(Debug, Clone, Copy)]
struct Lineage {
    ancestry: Ancestry,
    ethnicity: Option<HumanEthnicity>,
    subgroup: Option<Subgroup>,
    gender: Gender,
}

/// Resolve a full ancestry and name. With a city, unset ancestry and any
/// human ethnicity follow the city's demographics; otherwise both are
/// uniform.
pub fn generate(
    generator: &mut Generator,
    request: &AncestryRequest,
    city: Option<&City>,
) -> Result<AncestrySelection> {
    let ancestry = match (request.ancestry, city) {
        (Some(ancestry), _) => ancestry,
        (None, Some(city)) => city.random_ancestry(generator.rng())?,
        (None, None) => *generator.choose(Ancestry::ALL)?,
    };

    let ethnicity = if ancestry == Ancestry::Human {
        Some(match city {
            Some(city) => city.random_human_ethnicity(generator.rng())?,
            None => *generator.choose(HumanEthnicity::ALL)?,
        })
    } else {
        None
    };
    let subgroup = match ethnicity {
        Some(ethnicity) => random_subgroup(generator, ethnicity)?,
        None => None,
    };

    let gender = match request.gender {
        Some(gender) => gender,
        None => random_gender(generator),
    };

    let lineage = Lineage {
        ancestry,
        ethnicity,
        subgroup,
        gender,
    };
    let mut notes = Vec::new();
    let (given_name, given_name_origin) = given_name(generator, &lineage, &mut notes)?;
    let (surname, surname_origin) = surname(generator, &lineage, &given_name, &mut notes)?;

    let full_name = if subgroup.is_some_and(|s| s.surname_first()) {
        format!("{surname} {given_name}")
    } else {
        format!("{given_name} {surname}")
    };
    let full_name = full_name.trim().to_string();
    debug!(%ancestry, ?ethnicity, ?subgroup, %gender, name = %full_name, "generated ancestry");

    Ok(AncestrySelection {
        ancestry,
        ethnicity,
        subgroup,
        gender,
        given_name,
        surname,
        full_name,
        notes,
        given_name_origin,
        surname_origin,
    })
}

pub fn random_gender(generator: &mut Generator) -> Gender {
    if generator.percent() < 51 {
        Gender::Male
    } else {
        Gender::Female
    }
}

fn random_subgroup(
    generator: &mut Generator,
    ethnicity: HumanEthnicity,
) -> Result<Option<Subgroup>> {
    let subgroups = ethnicity.subgroups();
    if subgroups.is_empty() {
        return Ok(None);
    }
    Ok(Some(*generator.choose(subgroups)?))
}

fn given_name(
    generator: &mut Generator,
    lineage: &Lineage,
    notes: &mut Vec<String>,
) -> Result<(String, NameOrigin)> {
    if lineage.ancestry == Ancestry::HalfElf {
        return half_elf_given_name(generator, lineage.gender, notes);
    }
    Ok((own_given_name(generator, lineage)?, NameOrigin::Own))
}

fn own_given_name(generator: &mut Generator, lineage: &Lineage) -> Result<String> {
    let list = match (lineage.ancestry, lineage.ethnicity) {
        (Ancestry::Human, Some(ethnicity)) => WordList::HumanGivenName {
            ethnicity,
            subgroup: lineage.subgroup,
            gender: lineage.gender,
        },
        (ancestry, _) => WordList::GivenName {
            ancestry,
            gender: lineage.gender,
        },
    };
    generator.pick(list)
}

fn half_elf_given_name(
    generator: &mut Generator,
    gender: Gender,
    notes: &mut Vec<String>,
) -> Result<(String, NameOrigin)> {
    let roll = generator.percent();
    if roll <= 33 {
        let ethnicity = *generator.choose(HumanEthnicity::ALL)?;
        let subgroup = random_subgroup(generator, ethnicity)?;
        let human = Lineage {
            ancestry: Ancestry::Human,
            ethnicity: Some(ethnicity),
            subgroup,
            gender,
        };
        let name = own_given_name(generator, &human)?;
        notes.push(format!("Given name is {ethnicity} in origin"));
        if let Some(subgroup) = subgroup {
            notes.push(format!("Non-Elven ancestor is from the {subgroup} subgroup"));
        }
        Ok((name, NameOrigin::Human(ethnicity)))
    } else if roll <= 66 {
        let name = generator.pick(WordList::GivenName {
            ancestry: Ancestry::HalfElf,
            gender,
        })?;
        notes.push("Half-Elf given name".to_string());
        Ok((name, NameOrigin::HalfElf))
    } else {
        let name = generator.pick(WordList::GivenName {
            ancestry: Ancestry::Elf,
            gender,
        })?;
        notes.push("Given name is Elven in origin".to_string());
        Ok((name, NameOrigin::Elf))
    }
}

fn surname(
    generator: &mut Generator,
    lineage: &Lineage,
    given_name: &str,
    notes: &mut Vec<String>,
) -> Result<(String, NameOrigin)> {
    match lineage.ancestry {
        Ancestry::Elf => Ok((
            elf_surname(generator, lineage.gender, given_name)?,
            NameOrigin::Own,
        )),
        Ancestry::Dwarf => {
            let clan = generator.pick(WordList::Surname(Ancestry::Dwarf))?;
            Ok((format!("of {clan}"), NameOrigin::Own))
        }
        Ancestry::Gnome | Ancestry::Goblin | Ancestry::HalfOrc | Ancestry::Tengu => {
            Ok((String::new(), NameOrigin::Absent))
        }
        Ancestry::Human => {
            let Some(ethnicity) = lineage.ethnicity else {
                return Ok((String::new(), NameOrigin::Absent));
            };
            let surname = human_surname(generator, ethnicity, lineage.subgroup)?;
            let origin = if surname.is_empty() {
                NameOrigin::Absent
            } else {
                NameOrigin::Own
            };
            Ok((surname, origin))
        }
        Ancestry::HalfElf => half_elf_surname(generator, lineage.gender, given_name, notes),
        Ancestry::Halfling => Ok((
            generator.pick(WordList::Surname(Ancestry::Halfling))?,
            NameOrigin::Own,
        )),
    }
}

fn human_surname(
    generator: &mut Generator,
    ethnicity: HumanEthnicity,
    subgroup: Option<Subgroup>,
) -> Result<String> {
    let ethnic = WordList::HumanSurname {
        ethnicity,
        subgroup: None,
    };
    let by_subgroup = WordList::HumanSurname {
        ethnicity,
        subgroup,
    };
    let surname = match ethnicity {
        HumanEthnicity::Garundi => format!("from {}", generator.pick(ethnic)?),
        HumanEthnicity::Keleshite => {
            let first = generator.pick(ethnic)?;
            let second = generator.pick(ethnic)?;
            let third = generator.pick(ethnic)?;
            let fourth = generator.pick(ethnic)?;
            format!("al-{first} {second} {third} al-{fourth}")
        }
        HumanEthnicity::Kellid => String::new(),
        HumanEthnicity::Mwangi => format!("from the {}", generator.pick(by_subgroup)?),
        HumanEthnicity::Shoanti => {
            let name = generator.pick(ethnic)?;
            let clan = generator.choose(SHOANTI_CLANS)?;
            format!("{name} of the {clan}")
        }
        HumanEthnicity::Tian => generator.pick(by_subgroup)?,
        _ => generator.pick(ethnic)?,
    };
    Ok(surname)
}

/// `son of X` / `daughter of X`, where X is a male elven name other than
/// the child's own.
fn elf_surname(generator: &mut Generator, gender: Gender, given_name: &str) -> Result<String> {
    let relationship = match gender {
        Gender::Male => "son",
        Gender::Female => "daughter",
    };
    let fathers = WordList::GivenName {
        ancestry: Ancestry::Elf,
        gender: Gender::Male,
    };
    let mut father = generator.pick(fathers)?;
    for _ in 0..FATHER_NAME_REROLLS {
        if father != given_name {
            break;
        }
        father = generator.pick(fathers)?;
    }
    Ok(format!("{relationship} of {father}"))
}

fn half_elf_surname(
    generator: &mut Generator,
    gender: Gender,
    given_name: &str,
    notes: &mut Vec<String>,
) -> Result<(String, NameOrigin)> {
    let roll = generator.percent();
    if roll <= 33 {
        let ethnicity = *generator.choose(HumanEthnicity::ALL)?;
        let subgroup = random_subgroup(generator, ethnicity)?;
        let surname = human_surname(generator, ethnicity, subgroup)?;
        notes.push(format!("Surname is Human ({ethnicity}) in origin"));
        if let Some(subgroup) = subgroup {
            notes.push(format!("Surname comes from the {subgroup} subgroup"));
        }
        Ok((surname, NameOrigin::Human(ethnicity)))
    } else if roll <= 66 {
        notes.push(
            "Character has forgotten, hidden, denied, or does not know their surname".to_string(),
        );
        Ok((String::new(), NameOrigin::Absent))
    } else {
        let surname = elf_surname(generator, gender, given_name)?;
        notes.push("Surname is of Elven origin".to_string());
        Ok((surname, NameOrigin::Elf))
    }
}
