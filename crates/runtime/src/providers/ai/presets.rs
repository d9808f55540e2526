//! Ready-made soccer behavior trees.
//!
//! ```text
//! input_processing()            autonomous()
//!   └─ Selector                   └─ Selector
//!       ├─ Jump on press              ├─ KickBall     (ball within 2)
//!       ├─ Move with input            ├─ ChaseBall    (ball within 10)
//!       └─ Idle                       ├─ RandomJump   (every 3 s)
//!                                     └─ Idle
//! ```

use behavior_tree::{Node, builder};

use super::AiBlackboard;
use super::nodes::{
    BallNearby, CanJump, Idle, IsGrounded, IsMoving, Jump, KickBall, Move, MoveSource,
};

/// Tree type ticked by the AI controller.
pub type SoccerTree = Node<AiBlackboard>;

pub const KICK_RADIUS: f32 = 2.0;
pub const CHASE_RADIUS: f32 = 10.0;
pub const JUMP_COOLDOWN: f32 = 3.0;

/// Mirrors the player's own input: jump on a fresh press, move while the
/// stick is pushed, otherwise idle.
pub fn input_processing() -> SoccerTree {
    builder::selector(
        "InputProcessing",
        vec![
            builder::sequence(
                "JumpSequence",
                vec![Node::new("CanJump", CanJump), Node::new("Jump", Jump)],
            ),
            builder::sequence(
                "MoveSequence",
                vec![
                    Node::new("IsGrounded", IsGrounded),
                    Node::new("IsMoving", IsMoving),
                    Node::new("Move", Move::new(MoveSource::CurrentInput)),
                ],
            ),
            Node::new("Idle", Idle),
        ],
    )
}

/// Self-driven ball chaser.
pub fn autonomous() -> SoccerTree {
    builder::selector(
        "AI_Root",
        vec![
            builder::sequence(
                "KickBall",
                vec![
                    Node::new("BallNearby", BallNearby { radius: KICK_RADIUS }),
                    Node::new("IsGrounded", IsGrounded),
                    Node::new("KickBall", KickBall { range: KICK_RADIUS }),
                ],
            ),
            builder::sequence(
                "ChaseBall",
                vec![
                    Node::new("BallNearby", BallNearby { radius: CHASE_RADIUS }),
                    Node::new("IsGrounded", IsGrounded),
                    Node::new("Move", Move::new(MoveSource::TowardBall)),
                ],
            ),
            builder::sequence(
                "RandomJump",
                vec![
                    Node::new("IsGrounded", IsGrounded),
                    builder::cooldown("JumpCooldown", JUMP_COOLDOWN, Node::new("Jump", Jump)),
                ],
            ),
            builder::selector("DefaultBehavior", vec![Node::new("Idle", Idle)]),
        ],
    )
}

/// Tree for the given mode.
pub fn for_mode(autonomous: bool) -> SoccerTree {
    if autonomous { self::autonomous() } else { input_processing() }
}
