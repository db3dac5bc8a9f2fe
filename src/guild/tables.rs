//! Job tables: weighted sub-specialties per functional specialty and the
//! sentence templates each one fills in.
//!
//! Templates may use `{person}`, `{mark}`, `{thing}`, `{setting}`,
//! `{business}` and `{verb}`.

use crate::model::{GuildJob, Specialty};

/// Flat weight of every guild job other than expansion and patrol.
pub const GUILD_JOB_WEIGHT: f64 = 10.0;

pub struct SubSpecialty {
    pub name: &'static str,
    pub weight: u32,
    pub templates: &'static [&'static str],
}

const CORRUPTION: &[SubSpecialty] = &[
    SubSpecialty {
        name: "bribery",
        weight: 4,
        templates: &[
            "deliver a fat purse to {person} so the watch looks the other way {setting}.",
            "convince {person} to lose the paperwork on {thing}.",
        ],
    },
    SubSpecialty {
        name: "blackmail",
        weight: 3,
        templates: &[
            "find leverage on {person} and use it to {verb} {mark}.",
            "gather proof that {person} takes coin from {business} {setting}.",
        ],
    },
    SubSpecialty {
        name: "influence peddling",
        weight: 2,
        templates: &["arrange a quiet meeting between {person} and {mark} at {business} {setting}."],
    },
];

const COUNTERFEITING: &[SubSpecialty] = &[
    SubSpecialty {
        name: "forgery",
        weight: 4,
        templates: &[
            "forge papers that let {person} lay claim to {thing}.",
            "copy the seal of {person} well enough to fool {mark}.",
        ],
    },
    SubSpecialty {
        name: "false coin",
        weight: 3,
        templates: &["pass a purse of false silver at {business} {setting}."],
    },
    SubSpecialty {
        name: "fake goods",
        weight: 3,
        templates: &["sell a convincing fake of {thing} to {person}."],
    },
];

const DRUGS: &[SubSpecialty] = &[
    SubSpecialty {
        name: "dealing",
        weight: 5,
        templates: &[
            "move a crate of pesh through {business} {setting}.",
            "keep {person} supplied without {mark} finding out.",
        ],
    },
    SubSpecialty {
        name: "production",
        weight: 3,
        templates: &["guard the still hidden {setting} while {person} cooks a new batch."],
    },
    SubSpecialty {
        name: "debt collection",
        weight: 2,
        templates: &["collect what {person} owes for last month's shipment."],
    },
];

const EXPLOITATION: &[SubSpecialty] = &[
    SubSpecialty {
        name: "loan sharking",
        weight: 4,
        templates: &[
            "lend coin to {person} at ruinous interest and {verb} them if a payment is missed.",
        ],
    },
    SubSpecialty {
        name: "indenture",
        weight: 3,
        templates: &["make sure the workers at {business} {setting} keep their mouths shut."],
    },
    SubSpecialty {
        name: "extortion",
        weight: 3,
        templates: &["lean on {person} until they sign over {thing}."],
    },
];

const FRAUD: &[SubSpecialty] = &[
    SubSpecialty {
        name: "confidence trick",
        weight: 5,
        templates: &[
            "convince {person} to invest in a silver mine that does not exist.",
            "pose as an agent of {business} and talk {person} out of {thing}.",
        ],
    },
    SubSpecialty {
        name: "cheating",
        weight: 3,
        templates: &["fleece {person} at the dice tables in {business} {setting}."],
    },
    SubSpecialty {
        name: "false claims",
        weight: 2,
        templates: &["sink a worthless cargo {setting} and swear it held {thing}."],
    },
];

const PROPERTY: &[SubSpecialty] = &[
    SubSpecialty {
        name: "burglary",
        weight: 6,
        templates: &[
            "break into {business} {setting} and steal {thing}.",
            "slip into the home of {person} and come back with {thing}.",
        ],
    },
    SubSpecialty {
        name: "fencing",
        weight: 5,
        templates: &["find a buyer for {thing} before {person} notices it is gone."],
    },
    SubSpecialty {
        name: "pick-pocketing",
        weight: 2,
        templates: &["lift {thing} from {person} {setting}."],
    },
    SubSpecialty {
        name: "shoplifting",
        weight: 2,
        templates: &["walk out of {business} {setting} with {thing}."],
    },
    SubSpecialty {
        name: "arson",
        weight: 2,
        templates: &["burn down {business} {setting} as a warning to {person}."],
    },
    SubSpecialty {
        name: "vandalism",
        weight: 1,
        templates: &["wreck the front of {business} {setting} and leave the guild's mark."],
    },
];

const RACKETEERING: &[SubSpecialty] = &[
    SubSpecialty {
        name: "protection",
        weight: 6,
        templates: &[
            "collect protection money from {business} {setting}.",
            "{verb} {person} until {business} pays what it owes.",
        ],
    },
    SubSpecialty {
        name: "gambling",
        weight: 3,
        templates: &["run a crooked card game in the back room of {business} {setting}."],
    },
    SubSpecialty {
        name: "labor racket",
        weight: 2,
        templates: &["remind {person} who really runs the dockworkers."],
    },
];

const SMUGGLING: &[SubSpecialty] = &[
    SubSpecialty {
        name: "contraband",
        weight: 5,
        templates: &["sneak {thing} past the gate guards {setting}."],
    },
    SubSpecialty {
        name: "tariff evasion",
        weight: 3,
        templates: &["move a shipment for {business} without paying the harbor tariff."],
    },
    SubSpecialty {
        name: "people",
        weight: 2,
        templates: &["get {person} out of the city without {mark} noticing."],
    },
];

const VICE: &[SubSpecialty] = &[
    SubSpecialty {
        name: "gambling den",
        weight: 4,
        templates: &[
            "keep the games at {business} {setting} honest enough that {person} keeps coming back.",
        ],
    },
    SubSpecialty {
        name: "pleasure house",
        weight: 3,
        templates: &["settle a dispute between {person} and the owner of {business} {setting}."],
    },
    SubSpecialty {
        name: "fighting pit",
        weight: 3,
        templates: &["fix the next bout in the pit {setting} so that {person} loses."],
    },
];

const VIOLENCE: &[SubSpecialty] = &[
    SubSpecialty {
        name: "assault",
        weight: 4,
        templates: &["{verb} {person} so they remember who they owe."],
    },
    SubSpecialty {
        name: "robbery",
        weight: 3,
        templates: &["ambush {person} {setting} and take {thing}."],
    },
    SubSpecialty {
        name: "kidnapping",
        weight: 2,
        templates: &["snatch {person} and hold them {setting} until {mark} pays up."],
    },
    SubSpecialty {
        name: "murder",
        weight: 1,
        templates: &["make {person} disappear, quietly."],
    },
];

pub fn sub_specialties(specialty: Specialty) -> &'static [SubSpecialty] {
    match specialty {
        Specialty::Corruption => CORRUPTION,
        Specialty::Counterfeiting => COUNTERFEITING,
        Specialty::Drugs => DRUGS,
        Specialty::Exploitation => EXPLOITATION,
        Specialty::Fraud => FRAUD,
        Specialty::Property => PROPERTY,
        Specialty::Racketeering => RACKETEERING,
        Specialty::Smuggling => SMUGGLING,
        Specialty::Vice => VICE,
        Specialty::Violence => VIOLENCE,
    }
}

pub fn guild_job_templates(job: GuildJob) -> &'static [&'static str] {
    match job {
        GuildJob::GuardDuty => &[
            "watch the door at {business} {setting} tonight.",
            "stand guard over {thing} until {person} collects it.",
        ],
        GuildJob::Patrol => &[
            "walk the guild's streets {setting} and report anything unusual.",
            "make sure the guild's mark is still on every wall {setting}.",
        ],
        GuildJob::Investigate => &[
            "find out what {person} really wants with {mark}.",
            "learn who has been asking about {thing} {setting}.",
        ],
        GuildJob::Recruit => &[
            "sound out {person} about joining the guild.",
            "test whether {person} can keep a secret.",
        ],
        GuildJob::Escort => &[
            "see {person} safely to {business} {setting}.",
            "escort {person} and {thing} across the city.",
        ],
        GuildJob::Expansion => &[
            "push a rival crew out of {business} {setting}.",
            "convince {person} to switch loyalties to the guild.",
        ],
    }
}
