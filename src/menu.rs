//! Interactive number menus over any reader and writer.
//!
//! Every menu prints its options, reads one integer and acts on it.
//! Unrecognised input, including anything that is not an integer, exits.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::ancestry::{self, AncestryRequest};
use crate::bounty::{Bounty, BountyRequest};
use crate::character::Character;
use crate::city::City;
use crate::error::{Error, GenerationError, Result};
use crate::generator::Generator;
use crate::guild::{Guild, job_list_lines};
use crate::model::Ancestry;

pub const MAIN_MENU: i64 = 42;
pub const EXIT: i64 = 999;
/// Stands in for input that is not an integer.
pub const INVALID: i64 = -1;

/// ANSI erase display and home cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const PROMPT: &str = "Choose an option [999]:";
const GOODBYE: &str = "Exiting Gamemaster Guidance";

const RACE_OPTIONS: &[(i64, Option<Ancestry>)] = &[
    (1, None),
    (2, Some(Ancestry::Dwarf)),
    (3, Some(Ancestry::Elf)),
    (4, Some(Ancestry::Gnome)),
    (5, Some(Ancestry::Goblin)),
    (6, Some(Ancestry::Halfling)),
    (7, Some(Ancestry::Human)),
    (8, Some(Ancestry::HalfElf)),
    (9, Some(Ancestry::HalfOrc)),
    (10, Some(Ancestry::Tengu)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RaceChoice {
    Pick(AncestryRequest),
    MainMenu,
    Exit,
}

/// `"  1. Randomize a name"`: keys right-aligned to three columns.
pub fn option_line(key: i64, label: &str) -> String {
    format!("{key:>3}. {label}")
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    generator: Generator,
    city: Option<City>,
    guild: Option<Guild>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(
        input: R,
        output: W,
        generator: Generator,
        city: Option<City>,
        guild: Option<Guild>,
    ) -> Self {
        Self {
            input,
            output,
            generator,
            city,
            guild,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the main menu until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "\nWelcome to Gamemaster Guidance")?;
        loop {
            let choice = self.choose(&[
                (1, "Randomize a name"),
                (2, "Randomize a character"),
                (3, "Randomize a bounty"),
                (4, "City menu"),
                (5, "Guild menu"),
                (6, "Clear screen"),
                (EXIT, "Exit"),
            ])?;
            let flow = match choice {
                1 => self.name_menu()?,
                2 => self.character_menu()?,
                3 => self.bounty_menu()?,
                4 => self.city_menu()?,
                5 => self.guild_menu()?,
                6 => {
                    self.clear_screen()?;
                    Flow::Continue
                }
                _ => Flow::Exit,
            };
            if flow == Flow::Exit {
                writeln!(self.output, "{GOODBYE}")?;
                self.output.flush()?;
                return Ok(());
            }
        }
    }

    fn name_menu(&mut self) -> Result<Flow> {
        loop {
            let request = match self.race_menu()? {
                RaceChoice::Pick(request) => request,
                RaceChoice::MainMenu => return Ok(Flow::Continue),
                RaceChoice::Exit => return Ok(Flow::Exit),
            };
            let generated = ancestry::generate(&mut self.generator, &request, None);
            if let Some(selection) = self.recover(generated)? {
                writeln!(self.output, "\n{}\n", selection.full_name())?;
            }
        }
    }

    fn character_menu(&mut self) -> Result<Flow> {
        loop {
            let request = match self.race_menu()? {
                RaceChoice::Pick(request) => request,
                RaceChoice::MainMenu => return Ok(Flow::Continue),
                RaceChoice::Exit => return Ok(Flow::Exit),
            };
            let generated = Character::generate(&mut self.generator, &request, self.city.as_ref());
            if let Some(character) = self.recover(generated)? {
                writeln!(self.output, "\n{character}\n")?;
            }
        }
    }

    fn bounty_menu(&mut self) -> Result<Flow> {
        loop {
            let choice = self.choose(&[
                (1, "Choose bounty's minimum level"),
                (2, "Choose bounty's race"),
                (3, "Clear screen"),
                (MAIN_MENU, "Main Menu"),
                (EXIT, "Exit"),
            ])?;
            let request = match choice {
                1 => {
                    writeln!(self.output, "\nEnter bounty's minimum level:")?;
                    BountyRequest {
                        min_level: self.read_choice()?,
                        ..BountyRequest::default()
                    }
                }
                2 => match self.race_menu()? {
                    RaceChoice::Pick(ancestry) => BountyRequest {
                        ancestry,
                        ..BountyRequest::default()
                    },
                    RaceChoice::MainMenu => return Ok(Flow::Continue),
                    RaceChoice::Exit => return Ok(Flow::Exit),
                },
                3 => {
                    self.clear_screen()?;
                    continue;
                }
                MAIN_MENU => return Ok(Flow::Continue),
                _ => return Ok(Flow::Exit),
            };
            let generated = Bounty::generate(&mut self.generator, &request, self.city.as_ref());
            if let Some(bounty) = self.recover(generated)? {
                writeln!(self.output, "\n{bounty}\n")?;
            }
        }
    }

    fn city_menu(&mut self) -> Result<Flow> {
        if self.city.is_none() {
            writeln!(self.output, "\nNo city config provided")?;
            return Ok(Flow::Exit);
        }
        loop {
            let choice = self.choose(&[
                (1, "Print the city details"),
                (2, "Print the NPCs"),
                (3, "Clear screen"),
                (MAIN_MENU, "Main Menu"),
                (EXIT, "Exit"),
            ])?;
            let lines = match choice {
                1 | 2 => match self.city.as_ref() {
                    Some(city) if choice == 1 => city.report_lines(),
                    Some(city) => city.npc_lines(),
                    None => return self.missing(GenerationError::NoCity),
                },
                3 => {
                    self.clear_screen()?;
                    continue;
                }
                MAIN_MENU => return Ok(Flow::Continue),
                _ => return Ok(Flow::Exit),
            };
            self.print_lines(&lines)?;
        }
    }

    fn guild_menu(&mut self) -> Result<Flow> {
        if self.guild.is_none() {
            writeln!(self.output, "\nNo guild config provided")?;
            return Ok(Flow::Exit);
        }
        loop {
            let choice = self.choose(&[
                (1, "Print the guild details"),
                (2, "Randomize guild jobs"),
                (3, "Clear screen"),
                (MAIN_MENU, "Main Menu"),
                (EXIT, "Exit"),
            ])?;
            let lines = match choice {
                1 => match self.guild.as_ref() {
                    Some(guild) => guild.report_lines(),
                    None => return self.missing(GenerationError::NoGuild),
                },
                2 => {
                    let jobs = match self.guild.as_ref() {
                        Some(guild) => guild.random_jobs(&mut self.generator),
                        None => return self.missing(GenerationError::NoGuild),
                    };
                    match self.recover(jobs)? {
                        Some(jobs) => job_list_lines(&jobs),
                        None => continue,
                    }
                }
                3 => {
                    self.clear_screen()?;
                    continue;
                }
                MAIN_MENU => return Ok(Flow::Continue),
                _ => return Ok(Flow::Exit),
            };
            self.print_lines(&lines)?;
        }
    }

    fn race_menu(&mut self) -> Result<RaceChoice> {
        let mut options: Vec<(i64, &str)> = RACE_OPTIONS
            .iter()
            .map(|(key, ancestry)| {
                let label = match ancestry {
                    Some(ancestry) => ancestry.as_str(),
                    None => "Random race",
                };
                (*key, label)
            })
            .collect();
        options.push((MAIN_MENU, "Main Menu"));
        options.push((EXIT, "Exit"));

        let choice = self.choose(&options)?;
        if choice == MAIN_MENU {
            return Ok(RaceChoice::MainMenu);
        }
        Ok(RACE_OPTIONS
            .iter()
            .find(|(key, _)| *key == choice)
            .map(|(_, ancestry)| RaceChoice::Pick(AncestryRequest {
                ancestry: *ancestry,
                gender: None,
            }))
            .unwrap_or(RaceChoice::Exit))
    }

    fn choose(&mut self, options: &[(i64, &str)]) -> Result<i64> {
        writeln!(self.output)?;
        for (key, label) in options {
            writeln!(self.output, "{}", option_line(*key, label))?;
        }
        writeln!(self.output, "{PROMPT}")?;
        self.read_choice()
    }

    /// One line of input as an integer. End of input reads as exit.
    fn read_choice(&mut self) -> Result<i64> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Ok(EXIT);
        }
        Ok(line.trim().parse().unwrap_or(INVALID))
    }

    /// Report a generation failure and carry on. Other errors propagate.
    fn recover<T>(&mut self, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(Error::Generation(err)) => {
                warn!(%err, "generation failed");
                writeln!(self.output, "\n{err}")?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn missing(&mut self, err: GenerationError) -> Result<Flow> {
        writeln!(self.output, "\n{err}")?;
        Ok(Flow::Exit)
    }

    fn print_lines(&mut self, lines: &[String]) -> Result<()> {
        writeln!(self.output)?;
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        write!(self.output, "{CLEAR_SCREEN}")?;
        Ok(())
    }
}
