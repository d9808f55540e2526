//! Scores, clock and the playing/finished stage of a match.

use tracing::info;

use crate::PlayerNumber;
use crate::config::MatchConfig;
use crate::env::StageGate;

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchOutcome {
    Winner(PlayerNumber),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStage {
    Playing,
    Finished(MatchOutcome),
}

/// Running match bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchState {
    config: MatchConfig,
    scores: [u32; 2],
    remaining: f32,
    stage: MatchStage,
}

impl MatchState {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            scores: [0, 0],
            remaining: config.match_time,
            stage: MatchStage::Playing,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn score(&self, player: PlayerNumber) -> u32 {
        self.scores[slot(player)]
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn remaining_time(&self) -> f32 {
        self.remaining
    }

    pub fn stage(&self) -> MatchStage {
        self.stage
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self.stage {
            MatchStage::Playing => None,
            MatchStage::Finished(outcome) => Some(outcome),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.stage == MatchStage::Playing
    }

    /// Credits a goal to `player`. Ignored outside of play.
    ///
    /// Returns the outcome if this goal ended the match.
    pub fn player_scored(&mut self, player: PlayerNumber) -> Option<MatchOutcome> {
        if !self.is_playing() {
            return None;
        }

        let score = &mut self.scores[slot(player)];
        *score += 1;
        info!(%player, score = *score, "goal");

        if *score >= self.config.winning_score {
            return Some(self.finish(MatchOutcome::Winner(player)));
        }
        None
    }

    /// Runs the match clock. Returns the outcome if time ran out.
    pub fn advance(&mut self, dt: f32) -> Option<MatchOutcome> {
        if !self.is_playing() || !self.config.use_timer {
            return None;
        }

        self.remaining = (self.remaining - dt).max(0.0);
        if self.remaining > 0.0 {
            return None;
        }

        let [one, two] = self.scores;
        let outcome = match one.cmp(&two) {
            std::cmp::Ordering::Greater => MatchOutcome::Winner(PlayerNumber::One),
            std::cmp::Ordering::Less => MatchOutcome::Winner(PlayerNumber::Two),
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        };
        Some(self.finish(outcome))
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.config);
        info!("match restarted");
    }

    fn finish(&mut self, outcome: MatchOutcome) -> MatchOutcome {
        self.stage = MatchStage::Finished(outcome);
        info!(?outcome, scores = ?self.scores, "match finished");
        outcome
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl StageGate for MatchState {
    fn is_gameplay_active(&self) -> bool {
        self.is_playing()
    }
}

fn slot(player: PlayerNumber) -> usize {
    match player {
        PlayerNumber::One => 0,
        PlayerNumber::Two => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaching_winning_score_ends_match() {
        let mut state = MatchState::default();
        for _ in 0..4 {
            assert_eq!(state.player_scored(PlayerNumber::Two), None);
        }
        assert_eq!(
            state.player_scored(PlayerNumber::Two),
            Some(MatchOutcome::Winner(PlayerNumber::Two))
        );
        assert!(!state.is_gameplay_active());

        assert_eq!(state.player_scored(PlayerNumber::One), None);
        assert_eq!(state.scores(), [0, 5]);
    }

    #[test]
    fn timeout_picks_leader_or_draw() {
        let config = MatchConfig {
            match_time: 10.0,
            ..MatchConfig::default()
        };

        let mut state = MatchState::new(config);
        state.player_scored(PlayerNumber::One);
        assert_eq!(state.advance(6.0), None);
        let winner = MatchOutcome::Winner(PlayerNumber::One);
        assert_eq!(state.advance(6.0), Some(winner));
        assert_eq!(state.remaining_time(), 0.0);

        let mut state = MatchState::new(config);
        assert_eq!(state.advance(10.0), Some(MatchOutcome::Draw));
        assert_eq!(state.advance(1.0), None);
    }

    #[test]
    fn timer_can_be_disabled() {
        let mut state = MatchState::new(MatchConfig {
            use_timer: false,
            ..MatchConfig::default()
        });
        assert_eq!(state.advance(1000.0), None);
        assert!(state.is_playing());
    }

    #[test]
    fn restart_resets_everything() {
        let mut state = MatchState::default();
        state.player_scored(PlayerNumber::One);
        state.advance(400.0);
        assert!(state.outcome().is_some());

        state.restart();
        assert_eq!(state.scores(), [0, 0]);
        assert_eq!(state.remaining_time(), MatchConfig::DEFAULT_MATCH_TIME);
        assert_eq!(state.stage(), MatchStage::Playing);
    }
}
