//! Random names, characters, bounties, cities and guild jobs for tabletop
//! game masters.

#[macro_use]
pub mod model;

pub mod ancestry;
pub mod args;
pub mod bounty;
pub mod character;
pub mod city;
pub mod config;
pub mod error;
pub mod generator;
pub mod guild;
pub mod logging;
pub mod menu;
pub mod rando;
pub mod text;
pub mod wordlist;

pub use ancestry::{AncestryRequest, AncestrySelection, NameOrigin};
pub use bounty::{Bounty, BountyRequest, Reward};
pub use character::Character;
pub use city::City;
pub use config::GeneratorConfig;
pub use error::{ConfigError, Error, FileError, GenerationError, Result};
pub use generator::Generator;
pub use guild::Guild;
pub use menu::Menu;
pub use wordlist::{JobBank, WordList, WordLists};
