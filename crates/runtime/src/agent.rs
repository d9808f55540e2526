//! One player: actor, state machine and optional AI.

use game_core::{
    Actor, BallContact, Planet, PlayerNumber, PlayerStateMachine, PowerUpKind, RigidBody2D,
    SoundCue, StateContext, StateKind, physics,
};
use tracing::debug;

use crate::providers::ai::{AiCommand, AiController, AiTick, BallSnapshot, Sensors};

/// Drives a single player through its frame and physics passes.
///
/// The physics body belongs to the host and is lent to every call.
#[derive(Debug)]
pub struct PlayerAgent {
    actor: Actor,
    machine: PlayerStateMachine,
    ai: Option<AiController>,
}

impl PlayerAgent {
    pub fn new(actor: Actor) -> Self {
        Self {
            actor,
            machine: PlayerStateMachine::new(),
            ai: None,
        }
    }

    pub fn with_ai(mut self, controller: AiController) -> Self {
        self.ai = Some(controller);
        self
    }

    pub fn number(&self) -> PlayerNumber {
        self.actor.number()
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn machine(&self) -> &PlayerStateMachine {
        &self.machine
    }

    pub fn ai(&self) -> Option<&AiController> {
        self.ai.as_ref()
    }

    pub fn ai_mut(&mut self) -> Option<&mut AiController> {
        self.ai.as_mut()
    }

    /// Switches the AI between autonomous play and input mirroring.
    pub fn enable_ai(&mut self, enable: bool) {
        match self.ai.as_mut() {
            Some(ai) => ai.enable_ai(enable),
            None => debug!(player = %self.actor.number(), "no AI controller to toggle"),
        }
    }

    /// Enters the idle state. Call once before the first update.
    pub fn start(&mut self, body: &mut dyn RigidBody2D, planet: &Planet) {
        let mut ctx = StateContext::new(&mut self.actor, body, planet, 0.0);
        self.machine.start(&mut ctx);
    }

    /// Frame update: input, AI, then the state machine.
    pub fn update(
        &mut self,
        body: &mut dyn RigidBody2D,
        ball: Option<BallSnapshot>,
        planet: &Planet,
        dt: f32,
    ) -> Option<AiTick> {
        self.actor.input.update(dt);

        let tick = match self.ai.as_mut() {
            Some(ai) => {
                let sensors = Sensors {
                    position: body.position(),
                    velocity: body.velocity(),
                    grounded: self.actor.is_grounded(body, planet),
                    input: self.actor.input.state(),
                    moving: self.actor.input.is_moving(),
                    power_up: self.actor.power_ups.active(),
                    ball,
                };
                Some(ai.tick(sensors, &mut self.actor.input, dt))
            }
            None => None,
        };

        if let Some(tick) = &tick {
            for command in &tick.commands {
                self.apply_command(*command, body, planet);
            }
        }

        let mut ctx = StateContext::new(&mut self.actor, body, planet, dt);
        self.machine.update(&mut ctx);
        tick
    }

    pub fn fixed_update(&mut self, body: &mut dyn RigidBody2D, planet: &Planet, dt: f32) {
        let mut ctx = StateContext::new(&mut self.actor, body, planet, dt);
        self.machine.fixed_update(&mut ctx);
    }

    /// Returns `true` when the contact produced a kick.
    pub fn on_ball_collision(
        &mut self,
        body: &mut dyn RigidBody2D,
        ball: &mut dyn RigidBody2D,
        planet: &Planet,
        contact: BallContact,
    ) -> bool {
        let mut ctx = StateContext::new(&mut self.actor, body, planet, 0.0).with_ball(ball);
        self.machine.on_ball_collision(&mut ctx, contact)
    }

    /// Picks up a power-up, wrapping the current state until it expires.
    pub fn collect_power_up(
        &mut self,
        body: &mut dyn RigidBody2D,
        planet: &Planet,
        kind: PowerUpKind,
    ) {
        debug!(player = %self.actor.number(), %kind, "power-up collected");
        let mut ctx = StateContext::new(&mut self.actor, body, planet, 0.0);
        self.machine.apply_power_up(&mut ctx, kind);
    }

    fn apply_command(&mut self, command: AiCommand, body: &mut dyn RigidBody2D, planet: &Planet) {
        let grounded = self.actor.is_grounded(body, planet);
        match command {
            AiCommand::Move(axis) => {
                if !grounded {
                    return;
                }
                physics::move_around_planet(
                    body,
                    planet,
                    self.actor.number(),
                    axis,
                    grounded,
                    &self.actor.config().movement,
                );
                self.actor.face(axis);
            }
            AiCommand::Jump => {
                // A pressed jump is launched by the state machine itself.
                let airborne = self
                    .machine
                    .current()
                    .is_some_and(|state| state.base_kind() == StateKind::Jumping);
                if !grounded || airborne || self.actor.input.jump_pressed() {
                    return;
                }
                let multiplier = self.actor.power_ups.jump_multiplier();
                physics::jump(body, planet, &self.actor.config().movement, multiplier);
                self.actor.audio().play(SoundCue::Jump);
            }
            AiCommand::Kick => self.actor.audio().play(SoundCue::Kick),
            AiCommand::ApplyPowerUp(kind) => self.collect_power_up(body, planet, kind),
        }
    }
}
