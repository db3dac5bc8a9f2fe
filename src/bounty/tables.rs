/// Percent chance of each crime severity (minor, lesser, serious, severe)
/// by character level, levels 1 through 20.
pub const CRIME_PERCENTS: [[u32; 4]; 20] = [
    [75, 15, 5, 5],
    [70, 17, 7, 6],
    [65, 19, 9, 7],
    [60, 21, 11, 8],
    [55, 23, 13, 9],
    [50, 25, 15, 10],
    [45, 27, 17, 11],
    [40, 29, 19, 12],
    [35, 31, 21, 13],
    [30, 33, 23, 14],
    [25, 33, 25, 17],
    [20, 31, 27, 22],
    [15, 29, 29, 27],
    [10, 27, 31, 32],
    [5, 25, 33, 37],
    [0, 23, 33, 44],
    [0, 21, 31, 48],
    [0, 19, 29, 52],
    [0, 17, 27, 56],
    [0, 15, 25, 60],
];

pub const MAX_LEVEL: u32 = 20;

/// Severity row for a level, clamped to 1..=20.
pub fn crime_percents(level: u32) -> &'static [u32; 4] {
    let index = level.clamp(1, MAX_LEVEL) as usize - 1;
    &CRIME_PERCENTS[index]
}

/// Who posted a bounty, how often, and what it suggests to the GM.
pub struct BountySourceDef {
    pub name: &'static str,
    pub weight: u32,
    pub notes: &'static str,
}

pub const BOUNTY_SOURCES: &[BountySourceDef] = &[
    BountySourceDef {
        name: "City guard",
        weight: 40,
        notes: "Low level crimes, guard being used as a front, or someone was bribed",
    },
    BountySourceDef {
        name: "Army",
        weight: 25,
        notes: "Escaped prison, war crimes, hated by army official, violated national law, \
                outside city limits, or someone was bribed/enticed/influenced",
    },
    BountySourceDef {
        name: "Black Collar Union",
        weight: 10,
        notes: "Former guildsman that seriously violated the code, find a missing guildsman, \
                murdered a guildsman, knows something about a missing/murdered guildsman, guild \
                was bribed/enticed/influenced to front a quiet abduction, do a favor for an ally, \
                or nab a mark at the behest of another guildhouse",
    },
    BountySourceDef {
        name: "Wealthy merchant",
        weight: 5,
        notes: "Criminal identified by police but not prioritized, front to find someone who \
                knows something, or high-level thief",
    },
    BountySourceDef {
        name: "Nobility",
        weight: 5,
        notes: "Intrigue, sweeten the pot to locate a criminal that wronged them, find someone \
                who knows something, bribed a magister for nefarious reasons or locate fellow \
                nobility run away/missing/kidnapped",
    },
    BountySourceDef {
        name: "Criminal",
        weight: 5,
        notes: "Easiest way to find someone is to pay someone and then get/kill/rescue them.  \
                Could be informant, spy, ally, or enemy.  Have someone always following the PCs.  \
                Actual source will be a front.",
    },
    BountySourceDef {
        name: "Clergy",
        weight: 5,
        notes: "Silence a witness, find evil, find a heretic, etc.  Good way for a church to get \
                work done without getting their hands dirty.  Source might actually be city.  \
                Maybe have the PCs feebly followed.",
    },
    BountySourceDef {
        name: "Magister",
        weight: 5,
        notes: "Sometimes the court needs to get to the bottom of something.  Special inquiry, \
                official investigation, shady city guard, shady Black Jackets, etc.",
    },
];

pub const LOW_DEAD_REWARD_NOTE: &str = "A low percent dead bounty could indicate a low level or \
    dangerous criminal.  (e.g., court wants to make a public example, already slated for \
    execution, violent, case/criminal is generating bad press)";

pub const MID_DEAD_REWARD_NOTE: &str = "A mid percent dead bounty could indicate a dastardly or \
    slippery felon.  (e.g., bad crimes, mid-to-high level)";

pub const MATCHING_DEAD_REWARD_NOTES: [&str; 3] = [
    "Dead and Alive bounty rewards match.",
    "Perhaps, the mark is a nefarious or slippery villain. (e.g., egregious crimes, high level)",
    "Maybe someone wants the mark permanently silenced. (e.g., innocent, knows something)",
];

/// Percent chance of a dead-or-alive bounty at `level`. An exponential curve
/// through (1, 10) and (20, 90).
pub fn dead_or_alive_chance(level: u32) -> f64 {
    let step = 9f64.powf(1.0 / 19.0);
    (10.0 / step) * step.powi(level as i32)
}
