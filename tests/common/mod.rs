#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use gamemaster_guidance::{City, Generator, GeneratorConfig, Guild, rando};

pub fn databases_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("databases")
}

pub fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

pub fn generator(seed: u64) -> Generator {
    Generator::new(
        GeneratorConfig::default()
            .with_databases_dir(databases_dir())
            .with_seed(seed),
    )
}

pub fn demo_city(seed: u64) -> City {
    City::load(&demo("city.yml"), &mut rando::make_rng(Some(seed))).unwrap()
}

pub fn demo_guild() -> Guild {
    Guild::load(&demo("guild.yml")).unwrap()
}

pub fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
