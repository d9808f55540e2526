//! Per-player AI driver.
//!
//! [`AiController`] owns the behavior tree, the blackboard it runs on, the
//! tactical evaluator and the AI's random source. Every tick it:
//!
//! 1. refreshes the blackboard from [`Sensors`]
//! 2. runs a tactical analysis when a ball is in play
//! 3. ticks the tree and collects the queued [`AiCommand`]s
//! 4. in autonomous mode, injects a move/jump decision into the input driver
//!    no more often than the decision interval

use behavior_tree::{BehaviorTreeRunner, GameClock, Status};
use game_core::math::sign;
use game_core::{
    AiProfile, GameConfig, InputDriver, PlayerNumber, RandomSource, Situation, TacticalEvaluator,
};
use tracing::debug;

use super::{AiBlackboard, AiCommand, Sensors, TacticalView, presets};
use crate::error::Result;

/// Mode switches for an [`AiController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Run a behavior tree at all.
    pub tree_enabled: bool,
    /// Drive the player (autonomous tree and injected decisions) instead of
    /// mirroring its input.
    pub autonomous: bool,
    /// Use the tactical evaluator for decisions; otherwise chase by distance.
    pub use_tactics: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            tree_enabled: true,
            autonomous: true,
            use_tactics: true,
        }
    }
}

/// Result of one controller tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AiTick {
    /// Root status, `None` when no tree is installed.
    pub status: Option<Status>,
    pub commands: Vec<AiCommand>,
    /// Whether a move/jump decision was injected this tick.
    pub decided: bool,
}

pub struct AiController {
    runner: BehaviorTreeRunner<AiBlackboard>,
    blackboard: AiBlackboard,
    evaluator: TacticalEvaluator,
    profile: AiProfile,
    rng: Box<dyn RandomSource>,
    settings: ControllerSettings,
    last_decision: Option<f32>,
}

impl AiController {
    /// Fallback jump: the ball must be this far above the player...
    pub const JUMP_HEIGHT: f32 = 1.0;
    /// ...and no further away than this.
    pub const JUMP_REACH: f32 = 3.0;

    pub fn new(
        player: PlayerNumber,
        config: &GameConfig,
        profile: AiProfile,
        settings: ControllerSettings,
        rng: impl RandomSource + 'static,
    ) -> Result<Self> {
        profile.validate()?;

        let mut controller = Self {
            runner: BehaviorTreeRunner::default(),
            blackboard: AiBlackboard::new(player),
            evaluator: TacticalEvaluator::from_game_config(config),
            profile,
            rng: Box::new(rng),
            settings,
            last_decision: None,
        };
        controller.rebuild_tree();
        Ok(controller)
    }

    pub fn player(&self) -> PlayerNumber {
        self.blackboard.player()
    }

    pub fn profile(&self) -> &AiProfile {
        &self.profile
    }

    pub fn settings(&self) -> ControllerSettings {
        self.settings
    }

    pub fn blackboard(&self) -> &AiBlackboard {
        &self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut AiBlackboard {
        &mut self.blackboard
    }

    pub fn runner(&self) -> &BehaviorTreeRunner<AiBlackboard> {
        &self.runner
    }

    pub fn evaluator(&self) -> &TacticalEvaluator {
        &self.evaluator
    }

    pub fn is_autonomous(&self) -> bool {
        self.settings.autonomous
    }

    /// Switches between autonomous play and input mirroring. Rebuilds the tree.
    pub fn enable_ai(&mut self, enable: bool) {
        self.settings.autonomous = enable;
        debug!(player = %self.player(), autonomous = enable, "AI mode changed");
        self.rebuild_tree();
    }

    /// Installs or removes the behavior tree.
    pub fn set_tree_enabled(&mut self, enable: bool) {
        self.settings.tree_enabled = enable;
        self.rebuild_tree();
    }

    pub fn set_use_tactics(&mut self, enable: bool) {
        self.settings.use_tactics = enable;
    }

    /// Minimum time between two injected decisions.
    pub fn decision_interval(&self) -> f32 {
        self.evaluator
            .config()
            .decision_update_rate
            .max(self.profile.reaction_time)
    }

    /// Runs one AI tick. Decisions are written into `input` and take effect on
    /// its next update.
    pub fn tick(&mut self, sensors: Sensors, input: &mut InputDriver, dt: f32) -> AiTick {
        self.blackboard.refresh(sensors, dt);
        self.blackboard.tactics = self.analyze(&sensors);

        let now = self.blackboard.now();
        let decision_due = self
            .last_decision
            .is_none_or(|last| now - last >= self.decision_interval());

        // Sticky composites hold a running branch; re-plan at decision cadence
        // so higher-priority branches get another look.
        let holding = self
            .runner
            .root()
            .is_some_and(|root| root.status() == Some(Status::Running));
        if decision_due && holding {
            self.runner.abort(&mut self.blackboard);
        }

        let status = self.runner.tick(&mut self.blackboard);
        let commands = self.blackboard.take_commands();

        let decided = self.settings.autonomous && decision_due;
        if decided {
            self.last_decision = Some(now);
            self.decide(&sensors, input);
        }

        AiTick {
            status,
            commands,
            decided,
        }
    }

    fn rebuild_tree(&mut self) {
        self.runner.abort(&mut self.blackboard);
        let root = self
            .settings
            .tree_enabled
            .then(|| presets::for_mode(self.settings.autonomous));
        self.runner.set_root(root);
    }

    fn situation(&self, sensors: &Sensors) -> Option<Situation> {
        let ball = sensors.ball?;
        Some(Situation {
            player: self.player(),
            position: sensors.position,
            grounded: sensors.grounded,
            ball_position: ball.position,
            ball_velocity: ball.velocity,
        })
    }

    fn analyze(&mut self, sensors: &Sensors) -> Option<TacticalView> {
        if !self.settings.use_tactics {
            return None;
        }
        let situation = self.situation(sensors)?;
        let snapshot = self
            .evaluator
            .analyze(&situation, &self.profile, self.rng.as_mut());
        let move_axis = self.evaluator.move_direction(
            situation.position,
            snapshot.optimal_position,
            self.profile.skill,
            self.rng.as_mut(),
        );

        Some(TacticalView {
            snapshot,
            chase_aggressively: self.evaluator.should_chase_aggressively(&snapshot),
            defend: self.evaluator.should_defend(&snapshot),
            move_axis,
        })
    }

    fn decide(&mut self, sensors: &Sensors, input: &mut InputDriver) {
        let (axis, jump) = match (self.blackboard.tactics, self.situation(sensors)) {
            (Some(view), Some(situation)) => {
                let jump = self.evaluator.should_jump_for_ball(
                    &situation,
                    &view.snapshot,
                    self.profile.skill,
                    self.rng.as_mut(),
                );
                (view.move_axis, jump)
            }
            _ => (self.chase_axis(sensors), Self::fallback_jump(sensors)),
        };

        debug!(player = %self.player(), axis, jump, "AI decision");
        input.set_ai_move(axis);
        if jump {
            input.trigger_ai_jump();
        }
    }

    /// Full speed toward the ball while it is within the personality's chase
    /// distance.
    fn chase_axis(&self, sensors: &Sensors) -> f32 {
        let Some(ball) = sensors.ball else {
            return 0.0;
        };
        let offset = ball.position - sensors.position;
        if offset.length() < self.profile.personality.chase_distance() {
            sign(offset.x)
        } else {
            0.0
        }
    }

    fn fallback_jump(sensors: &Sensors) -> bool {
        let Some(ball) = sensors.ball else {
            return false;
        };
        sensors.grounded
            && ball.position.y > sensors.position.y + Self::JUMP_HEIGHT
            && ball.position.distance(sensors.position) < Self::JUMP_REACH
    }
}

impl std::fmt::Debug for AiController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiController")
            .field("player", &self.player())
            .field("profile", &self.profile)
            .field("settings", &self.settings)
            .field("last_decision", &self.last_decision)
            .finish()
    }
}
