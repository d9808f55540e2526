use game_core::{
    Actor, AiProfile, BallContact, FeedbackLog, FixedRandom, GameConfig, InputSource,
    KinematicBody, Personality, Planet, PlayerNumber, PowerUpKind, SoundCue, StateKind,
};
use glam::Vec2;
use runtime::{AiCommand, AiController, BallSnapshot, ControllerSettings, PlayerAgent};

const DT: f32 = 0.1;

struct Fixture {
    agent: PlayerAgent,
    body: KinematicBody,
    planet: Planet,
    log: FeedbackLog,
}

impl Fixture {
    fn new(settings: ControllerSettings) -> Self {
        let config = GameConfig::default();
        let planet = config.planet;
        let log = FeedbackLog::new();
        let actor = Actor::new(PlayerNumber::One, InputSource::Ai, config.clone())
            .with_audio(log.clone())
            .with_effects(log.clone());
        let controller = AiController::new(
            PlayerNumber::One,
            &config,
            AiProfile::new(Personality::Balanced, 1.0),
            settings,
            FixedRandom::constant(0.5),
        )
        .expect("valid profile");

        let mut body = KinematicBody::new(Vec2::new(0.0, planet.radius + planet.player_offset));
        let mut agent = PlayerAgent::new(actor).with_ai(controller);
        agent.start(&mut body, &planet);

        Self {
            agent,
            body,
            planet,
            log,
        }
    }

    fn update(&mut self, ball: Option<Vec2>) -> Option<runtime::AiTick> {
        let ball = ball.map(|position| BallSnapshot {
            position,
            velocity: Vec2::ZERO,
        });
        self.agent.update(&mut self.body, ball, &self.planet, DT)
    }
}

#[test]
fn agent_starts_idle() {
    let fixture = Fixture::new(ControllerSettings::default());
    assert_eq!(fixture.agent.machine().kind(), Some(StateKind::Idle));
    assert_eq!(fixture.agent.number(), PlayerNumber::One);
}

#[test]
fn ai_decision_moves_player_on_following_frames() {
    let mut fixture = Fixture::new(ControllerSettings::default());
    let ball = Some(Vec2::new(4.0, 3.5));

    let first = fixture.update(ball).expect("AI tick");
    assert!(first.decided);

    for _ in 0..3 {
        fixture.update(ball);
    }
    assert!(fixture.agent.actor().input.move_axis() > 0.0);
    assert_eq!(fixture.agent.machine().kind(), Some(StateKind::Moving));
}

#[test]
fn kick_command_plays_cue() {
    let mut fixture = Fixture::new(ControllerSettings::default());
    let tick = fixture.update(Some(Vec2::new(1.0, 5.5))).expect("AI tick");

    assert_eq!(tick.commands, vec![AiCommand::Kick]);
    assert_eq!(fixture.log.count(SoundCue::Kick), 1);
}

#[test]
fn tree_jump_launches_idle_player() {
    let settings = ControllerSettings {
        use_tactics: false,
        ..ControllerSettings::default()
    };
    let mut fixture = Fixture::new(settings);

    let tick = fixture.update(None).expect("AI tick");
    assert_eq!(tick.commands, vec![AiCommand::Jump]);
    assert_eq!(fixture.log.count(SoundCue::Jump), 1);
    assert!(fixture.body.velocity.y > 0.0);
}

#[test]
fn ball_collision_enters_kicking() {
    let mut fixture = Fixture::new(ControllerSettings::default());
    let mut ball = KinematicBody::new(Vec2::new(0.6, 5.5));
    let contact = BallContact::between(fixture.body.position, ball.position);

    let kicked = fixture
        .agent
        .on_ball_collision(&mut fixture.body, &mut ball, &fixture.planet, contact);

    assert!(kicked);
    assert_eq!(fixture.agent.machine().kind(), Some(StateKind::Kicking));
    assert!(ball.velocity.length() > 0.0);
    assert_eq!(fixture.log.count(SoundCue::Kick), 1);
}

#[test]
fn contact_during_kick_is_not_a_kick() {
    let mut fixture = Fixture::new(ControllerSettings::default());
    let mut ball = KinematicBody::new(Vec2::new(0.6, 5.5));
    let contact = BallContact::between(fixture.body.position, ball.position);

    let first = fixture
        .agent
        .on_ball_collision(&mut fixture.body, &mut ball, &fixture.planet, contact);
    let second = fixture
        .agent
        .on_ball_collision(&mut fixture.body, &mut ball, &fixture.planet, contact);

    assert!(first);
    assert!(!second);
    assert_eq!(fixture.log.count(SoundCue::Kick), 1);
}

#[test]
fn collected_power_up_wraps_state() {
    let mut fixture = Fixture::new(ControllerSettings::default());
    fixture
        .agent
        .collect_power_up(&mut fixture.body, &fixture.planet, PowerUpKind::HigherJump);

    let state = fixture.agent.machine().current().expect("state");
    assert_eq!(state.kind(), StateKind::PoweredUp);
    assert_eq!(state.power_up(), Some(PowerUpKind::HigherJump));
    assert_eq!(fixture.agent.actor().power_ups.jump_multiplier(), 2.0);
}

#[test]
fn toggling_ai_swaps_tree() {
    let mut fixture = Fixture::new(ControllerSettings::default());
    fixture.agent.enable_ai(false);

    let ai = fixture.agent.ai().expect("controller");
    assert!(!ai.is_autonomous());
    let root = ai.runner().root().map(|root| root.name());
    assert_eq!(root, Some("InputProcessing"));
}

#[test]
fn agent_without_ai_only_runs_state_machine() {
    let config = GameConfig::default();
    let planet = config.planet;
    let mut body = KinematicBody::new(Vec2::new(0.0, 5.5));
    let mut agent = PlayerAgent::new(Actor::new(PlayerNumber::Two, InputSource::Human, config));
    agent.start(&mut body, &planet);

    assert!(agent.update(&mut body, None, &planet, DT).is_none());
    assert_eq!(agent.machine().kind(), Some(StateKind::Idle));
}
