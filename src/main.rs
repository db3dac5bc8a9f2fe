use std::io;
use std::process::ExitCode;

use gamemaster_guidance::args::{self, Command, Options, USAGE};
use gamemaster_guidance::{City, Generator, GeneratorConfig, Guild, Menu, Result, logging};

fn main() -> ExitCode {
    logging::init();

    let options = match args::parse(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: Options) -> Result<()> {
    let mut generator = Generator::new(GeneratorConfig::from_env());

    let city = match &options.city_file {
        Some(path) => Some(City::load(path, generator.rng())?),
        None => None,
    };
    let guild = match &options.guild_file {
        Some(path) => Some(Guild::load(path)?),
        None => None,
    };

    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), generator, city, guild);
    menu.run()
}
