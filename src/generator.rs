use rand::RngCore;
use rand::rngs::SmallRng;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::rando;
use crate::wordlist::{WordList, WordLists};

/// One generation session: the RNG plus the word lists it has loaded.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    rng: SmallRng,
    words: WordLists,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        debug!(dir = %config.databases_dir.display(), seed = ?config.seed, "new generator");
        let rng = rando::make_rng(config.seed);
        let words = WordLists::new(config.databases_dir.clone());
        Self { config, rng, words }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut self.rng
    }

    pub fn percent(&mut self) -> u32 {
        rando::rand_percent(&mut self.rng)
    }

    pub fn integer(&mut self, low: i64, high: i64) -> i64 {
        rando::rand_integer(&mut self.rng, low, high)
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        Ok(rando::choose(&mut self.rng, items)?)
    }

    pub fn pick(&mut self, list: WordList) -> Result<String> {
        self.words.pick(&mut self.rng, list)
    }

    pub fn pick_many(&mut self, list: WordList, count: usize) -> Result<Vec<String>> {
        self.words.pick_many(&mut self.rng, list, count)
    }
}
