use log::warn;

pub const SEED_VAR: &str = "QUIZ_SEED";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Fixed shuffle seed, the thread rng is used when unset.
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            seed: parse_seed(std::env::var(SEED_VAR).ok().as_deref()),
        }
    }
}

fn parse_seed(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(err) => {
            warn!("Ignoring {}={:?}: {}", SEED_VAR, raw, err);
            None
        }
    }
}
