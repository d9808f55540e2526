//! Simulation settings read from the environment.
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use game_core::{AiProfile, GameConfig, Personality};
use runtime::SimulationConfig;

/// Settings for one headless match.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub simulation: SimulationConfig,
    /// JSON file with a full or partial [`GameConfig`].
    pub game_config_path: Option<PathBuf>,
    /// Match length override applied on top of the game configuration.
    pub match_time: Option<f32>,
    pub pretty: bool,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SOCCER_GAME_CONFIG` - JSON game configuration file (default: built-in tuning)
    /// - `SOCCER_SEED` - Random seed (default: 7)
    /// - `SOCCER_MAX_FRAMES` - Frame budget (default: 3600)
    /// - `SOCCER_MATCH_TIME` - Match length in seconds (default: 300)
    /// - `SOCCER_USE_TACTICS` - Tactical positioning instead of chasing (default: true)
    /// - `SOCCER_P1_PERSONALITY` / `SOCCER_P2_PERSONALITY` - Personality name
    ///   (aggressive, defensive, balanced, opportunist)
    /// - `SOCCER_P1_SKILL` / `SOCCER_P2_SKILL` - 0.0 to 1.0 (default: 0.7)
    /// - `SOCCER_P1_REACTION` / `SOCCER_P2_REACTION` - Seconds between decisions (default: 0.2)
    /// - `SOCCER_PRETTY` - Pretty-print the JSON summary (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let simulation = &mut config.simulation;

        if let Some(seed) = read_env::<u64>(&lookup, "SOCCER_SEED") {
            simulation.seed = seed;
        }
        if let Some(frames) = read_env::<u32>(&lookup, "SOCCER_MAX_FRAMES") {
            simulation.max_frames = frames.max(1);
        }
        if let Some(enable) = read_env::<bool>(&lookup, "SOCCER_USE_TACTICS") {
            simulation.use_tactics = enable;
        }

        for (index, prefix) in ["SOCCER_P1", "SOCCER_P2"].into_iter().enumerate() {
            read_profile(&lookup, prefix, &mut simulation.profiles[index]);
        }

        config.game_config_path = lookup("SOCCER_GAME_CONFIG").map(PathBuf::from);
        config.match_time = read_env::<f32>(&lookup, "SOCCER_MATCH_TIME");
        config.pretty = read_env::<bool>(&lookup, "SOCCER_PRETTY").unwrap_or(false);
        config
    }

    /// Final simulation settings, with the game configuration file applied.
    ///
    /// `SOCCER_MATCH_TIME` wins over the file.
    pub fn resolve(&self) -> Result<SimulationConfig> {
        let mut simulation = self.simulation.clone();
        if let Some(path) = &self.game_config_path {
            simulation.game = load_game_config(path)?;
        }
        if let Some(seconds) = self.match_time {
            simulation.game.match_rules.match_time = seconds;
        }
        simulation.validate().context("invalid settings")?;
        Ok(simulation)
    }
}

/// Reads and validates a JSON game configuration.
pub fn load_game_config(path: &Path) -> Result<GameConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read game config {}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse game config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid game config {}", path.display()))?;
    Ok(config)
}

fn read_profile(lookup: &impl Fn(&str) -> Option<String>, prefix: &str, profile: &mut AiProfile) {
    if let Some(personality) = read_env::<Personality>(lookup, &format!("{prefix}_PERSONALITY")) {
        profile.personality = personality;
    }
    if let Some(skill) = read_env::<f32>(lookup, &format!("{prefix}_SKILL")) {
        profile.skill = skill;
    }
    if let Some(reaction) = read_env::<f32>(lookup, &format!("{prefix}_REACTION")) {
        profile.reaction_time = reaction;
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = CliConfig::from_lookup(|_| None);
        assert_eq!(config.simulation, SimulationConfig::default());
        assert!(config.game_config_path.is_none());
        assert!(config.match_time.is_none());
        assert!(!config.pretty);
    }

    #[test]
    fn reads_overrides() {
        let config = CliConfig::from_lookup(lookup(&[
            ("SOCCER_SEED", "42"),
            ("SOCCER_MAX_FRAMES", "0"),
            ("SOCCER_USE_TACTICS", "false"),
            ("SOCCER_P1_PERSONALITY", "Aggressive"),
            ("SOCCER_P2_PERSONALITY", "opportunist"),
            ("SOCCER_P2_SKILL", " 0.3 "),
            ("SOCCER_P1_REACTION", "0.5"),
        ]));

        let simulation = &config.simulation;
        assert_eq!(simulation.seed, 42);
        assert_eq!(simulation.max_frames, 1);
        assert!(!simulation.use_tactics);
        assert_eq!(simulation.profiles[0].personality, Personality::Aggressive);
        assert_eq!(simulation.profiles[0].reaction_time, 0.5);
        assert_eq!(simulation.profiles[1].personality, Personality::Opportunist);
        assert_eq!(simulation.profiles[1].skill, 0.3);
    }

    #[test]
    fn ignores_unparsable_values() {
        let config = CliConfig::from_lookup(lookup(&[
            ("SOCCER_SEED", "many"),
            ("SOCCER_P1_PERSONALITY", "reckless"),
        ]));
        assert_eq!(config.simulation.seed, SimulationConfig::DEFAULT_SEED);
        let personality = config.simulation.profiles[0].personality;
        assert_eq!(personality, Personality::Balanced);
    }

    #[test]
    fn rejects_invalid_profile_on_resolve() {
        let config = CliConfig::from_lookup(lookup(&[("SOCCER_P1_SKILL", "1.5")]));
        assert!(config.resolve().is_err());
    }

    #[test]
    fn game_config_file_is_applied() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "match_rules": {{ "winning_score": 3 }} }}"#).expect("write");

        let path = file.path().display().to_string();
        let config = CliConfig::from_lookup(lookup(&[
            ("SOCCER_GAME_CONFIG", path.as_str()),
            ("SOCCER_MATCH_TIME", "60"),
        ]));
        let simulation = config.resolve().expect("valid file");

        assert_eq!(simulation.game.match_rules.winning_score, 3);
        assert_eq!(simulation.game.match_rules.match_time, 60.0);
        assert_eq!(simulation.game.movement, GameConfig::default().movement);
    }

    #[test]
    fn invalid_game_config_is_reported() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "match_rules": {{ "winning_score": 0 }} }}"#).expect("write");

        let error = load_game_config(file.path()).expect_err("zero winning score");
        assert!(error.to_string().contains("invalid game config"));
    }
}
