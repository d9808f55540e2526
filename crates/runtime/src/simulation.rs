//! Headless AI-versus-AI match.
//!
//! Stands in for a game engine: kinematic bodies, a ball that falls toward the
//! planet, edge-triggered player/ball contacts and goal mouths on the surface.
//! Everything is seeded, so the same configuration replays the same match.

use game_core::{
    Actor, AiProfile, BallContact, BallSpawner, FeedbackLog, GameConfig, InputSource, KinematicBody,
    MatchOutcome, MatchState, Planet, PlayerNumber, PowerUpKind, SeededRandom, SoundCue, physics,
};
use glam::Vec2;
use tracing::{debug, info};

use crate::agent::PlayerAgent;
use crate::error::{Result, RuntimeError};
use crate::providers::ai::{AiController, BallSnapshot, ControllerSettings};

/// Tuning for a simulated match.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub game: GameConfig,
    pub profiles: [AiProfile; 2],
    pub seed: u64,
    /// Frame delta in seconds.
    pub frame_step: f32,
    /// Physics delta in seconds.
    pub fixed_step: f32,
    pub max_frames: u32,
    pub use_tactics: bool,
}

impl SimulationConfig {
    pub const DEFAULT_FRAME_STEP: f32 = 1.0 / 60.0;
    pub const DEFAULT_FIXED_STEP: f32 = 0.02;
    pub const DEFAULT_MAX_FRAMES: u32 = 60 * 60;
    pub const DEFAULT_SEED: u64 = 7;

    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;
        for profile in &self.profiles {
            profile.validate()?;
        }
        if self.frame_step <= 0.0 {
            return Err(RuntimeError::InvalidTimeStep(self.frame_step));
        }
        if self.fixed_step <= 0.0 {
            return Err(RuntimeError::InvalidTimeStep(self.fixed_step));
        }
        if self.fixed_step > self.frame_step * 10.0 {
            return Err(RuntimeError::FixedStepTooLarge {
                fixed_step: self.fixed_step,
                frame_step: self.frame_step,
            });
        }
        if self.max_frames == 0 {
            return Err(RuntimeError::NoFrames);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            profiles: [AiProfile::default(); 2],
            seed: Self::DEFAULT_SEED,
            frame_step: Self::DEFAULT_FRAME_STEP,
            fixed_step: Self::DEFAULT_FIXED_STEP,
            max_frames: Self::DEFAULT_MAX_FRAMES,
            use_tactics: true,
        }
    }
}

/// What happened in a simulated match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub frames: u32,
    pub elapsed: f32,
    pub scores: [u32; 2],
    pub outcome: Option<MatchOutcome>,
    /// Ball contacts that produced a kick.
    pub kicks: [u32; 2],
    pub jumps: [usize; 2],
    pub balls_spawned: u32,
    pub final_states: [String; 2],
}

const PLAYER_RADIUS: f32 = 0.5;
const BALL_RADIUS: f32 = 0.3;
const BALL_MASS: f32 = 0.5;
/// Fraction of ball speed lost per second.
const BALL_DRAG: f32 = 0.3;
const GOAL_RADIUS: f32 = 1.0;
/// Balls further than this from the surface are out of play.
const ARENA_MARGIN: f32 = 12.0;

pub struct Simulation {
    config: SimulationConfig,
    planet: Planet,
    agents: [PlayerAgent; 2],
    bodies: [KinematicBody; 2],
    feedback: [FeedbackLog; 2],
    ball: Option<KinematicBody>,
    touching: [bool; 2],
    kicks: [u32; 2],
    balls_spawned: u32,
    match_state: MatchState,
    spawner: BallSpawner,
    rng: SeededRandom,
    accumulator: f32,
    frame: u32,
    elapsed: f32,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let planet = config.game.planet;
        let feedback = [FeedbackLog::default(), FeedbackLog::default()];
        let settings = ControllerSettings {
            use_tactics: config.use_tactics,
            ..ControllerSettings::default()
        };

        let [log_one, log_two] = &feedback;
        let (agent_one, body_one) = spawn_player(PlayerNumber::One, &config, settings, log_one)?;
        let (agent_two, body_two) = spawn_player(PlayerNumber::Two, &config, settings, log_two)?;

        info!(
            seed = config.seed,
            tactics = config.use_tactics,
            "simulation ready"
        );
        Ok(Self {
            planet,
            agents: [agent_one, agent_two],
            bodies: [body_one, body_two],
            feedback,
            ball: None,
            touching: [false; 2],
            kicks: [0; 2],
            balls_spawned: 0,
            match_state: MatchState::new(config.game.match_rules),
            spawner: BallSpawner::new(config.game.spawner),
            rng: SeededRandom::from_seed(config.seed),
            accumulator: 0.0,
            frame: 0,
            elapsed: 0.0,
            config,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    pub fn agent(&self, player: PlayerNumber) -> &PlayerAgent {
        &self.agents[slot(player)]
    }

    pub fn body(&self, player: PlayerNumber) -> &KinematicBody {
        &self.bodies[slot(player)]
    }

    pub fn ball(&self) -> Option<&KinematicBody> {
        self.ball.as_ref()
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Hands `player` a power-up as if they had touched a pickup.
    pub fn collect_power_up(&mut self, player: PlayerNumber, kind: PowerUpKind) {
        let index = slot(player);
        let agent = &mut self.agents[index];
        agent.collect_power_up(&mut self.bodies[index], &self.planet, kind);
    }

    /// Advances one frame. Returns `false` once the match is over.
    pub fn step(&mut self) -> bool {
        if !self.match_state.is_playing() {
            return false;
        }

        self.maintain_ball();
        let snapshot = self.ball.as_ref().map(|ball| BallSnapshot {
            position: ball.position,
            velocity: ball.velocity,
        });

        let dt = self.config.frame_step;
        for (agent, body) in self.agents.iter_mut().zip(self.bodies.iter_mut()) {
            agent.update(body, snapshot, &self.planet, dt);
        }

        self.accumulator += dt;
        while self.accumulator >= self.config.fixed_step {
            self.accumulator -= self.config.fixed_step;
            self.fixed_step();
        }

        self.check_ball_in_play();
        self.match_state.advance(dt);
        self.frame += 1;
        self.elapsed += dt;
        true
    }

    /// Runs until the match ends or the frame budget is spent.
    pub fn run(&mut self) -> MatchSummary {
        while self.frame < self.config.max_frames && self.step() {}
        let summary = self.summary();
        info!(
            frames = summary.frames,
            scores = ?summary.scores,
            outcome = ?summary.outcome,
            "simulation finished"
        );
        summary
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            frames: self.frame,
            elapsed: self.elapsed,
            scores: self.match_state.scores(),
            outcome: self.match_state.outcome(),
            kicks: self.kicks,
            jumps: [
                self.feedback[0].count(SoundCue::Jump),
                self.feedback[1].count(SoundCue::Jump),
            ],
            balls_spawned: self.balls_spawned,
            final_states: [
                self.agents[0].machine().state_name(),
                self.agents[1].machine().state_name(),
            ],
        }
    }

    fn maintain_ball(&mut self) {
        if self.ball.is_some() {
            return;
        }
        let anchor = self.planet.center + Vec2::Y;
        if let Some(position) = self
            .spawner
            .try_spawn(&self.match_state, &self.planet, anchor, &mut self.rng)
        {
            self.ball = Some(KinematicBody::new(position).with_mass(BALL_MASS));
            self.balls_spawned += 1;
        }
    }

    fn fixed_step(&mut self) {
        let dt = self.config.fixed_step;
        let clearance = self.planet.player_offset;
        for (agent, body) in self.agents.iter_mut().zip(self.bodies.iter_mut()) {
            agent.fixed_update(body, &self.planet, dt);
            body.integrate(dt);
            body.clamp_to_surface(&self.planet, clearance);
        }

        let Some(ball) = self.ball.as_mut() else {
            return;
        };
        physics::apply_planet_gravity(ball, &self.planet, &self.config.game.physics);
        ball.integrate(dt);
        ball.velocity *= (1.0 - BALL_DRAG * dt).max(0.0);
        ball.clamp_to_surface(&self.planet, BALL_RADIUS);

        for index in 0..2 {
            let body = &mut self.bodies[index];
            let size = self.agents[index].actor().power_ups.size_multiplier();
            let reach = PLAYER_RADIUS * size + BALL_RADIUS;
            let offset = ball.position - body.position;
            if offset.length() >= reach {
                self.touching[index] = false;
                continue;
            }

            if !self.touching[index] {
                let contact = BallContact::between(body.position, ball.position);
                let agent = &mut self.agents[index];
                if agent.on_ball_collision(&mut *body, &mut *ball, &self.planet, contact) {
                    self.kicks[index] += 1;
                }
                self.touching[index] = true;
            }

            let push = offset.try_normalize().unwrap_or(Vec2::Y);
            ball.position = body.position + push * reach;
        }
    }

    fn check_ball_in_play(&mut self) {
        let Some(position) = self.ball.as_ref().map(|ball| ball.position) else {
            return;
        };

        let players = [PlayerNumber::One, PlayerNumber::Two];
        let scorer = players.into_iter().find(|&player| {
            let mouth = self.goal_mouth(self.config.game.field.enemy_goal(player));
            position.distance(mouth) < GOAL_RADIUS
        });

        if let Some(player) = scorer {
            self.match_state.player_scored(player);
            self.remove_ball();
        } else if self.planet.surface_distance(position) > ARENA_MARGIN {
            debug!("ball left the arena");
            self.remove_ball();
        }
    }

    fn remove_ball(&mut self) {
        self.ball = None;
        self.touching = [false; 2];
        self.spawner.ball_removed();
    }

    /// Surface point facing `goal`.
    fn goal_mouth(&self, goal: Vec2) -> Vec2 {
        let direction = (goal - self.planet.center).try_normalize().unwrap_or(Vec2::X);
        self.planet.center + direction * (self.planet.radius + BALL_RADIUS)
    }
}

/// Builds an AI-driven player standing upright at its spawn angle.
fn spawn_player(
    number: PlayerNumber,
    config: &SimulationConfig,
    settings: ControllerSettings,
    feedback: &FeedbackLog,
) -> Result<(PlayerAgent, KinematicBody)> {
    let planet = config.game.planet;
    let actor = Actor::new(number, InputSource::Ai, config.game.clone())
        .with_audio(feedback.clone())
        .with_effects(feedback.clone());
    let controller = AiController::new(
        number,
        &config.game,
        config.profiles[slot(number)],
        settings,
        SeededRandom::from_seed(config.seed.wrapping_add(slot(number) as u64 + 1)),
    )?;

    let mut body = KinematicBody::new(planet.surface_position(number.spawn_angle()));
    body.rotation = physics::upright_rotation(&planet, body.position);

    let mut agent = PlayerAgent::new(actor).with_ai(controller);
    agent.start(&mut body, &planet);
    Ok((agent, body))
}

fn slot(player: PlayerNumber) -> usize {
    match player {
        PlayerNumber::One => 0,
        PlayerNumber::Two => 1,
    }
}
