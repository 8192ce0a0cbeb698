//! Collision policies - pluggable physics for the moving ball
//!
//! A policy looks at the ball and the obstacles and reports what happened.
//! It never mutates anything; the frame driver applies the outcome.

use arrayvec::ArrayVec;

use crate::geometry::Rectangle;
use crate::objects::{Axis, Edge, MovingBody, Scene, Side};
use crate::types::Vector2i;

/// Upper bound on obstacles in a scene (two paddles, four borders)
pub const MAX_OBSTACLES: usize = 6;

/// What the ball can run into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Paddle(Side),
    Border(Edge),
}

impl ObstacleKind {
    /// Axis the ball is reflected on when penetration depth is tied
    pub fn normal(self) -> Axis {
        match self {
            ObstacleKind::Paddle(_) => Axis::X,
            ObstacleKind::Border(edge) => edge.normal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rectangle,
}

impl Obstacle {
    pub const fn new(kind: ObstacleKind, rect: Rectangle) -> Self {
        Self { kind, rect }
    }
}

/// Obstacles in the order they are checked: paddles first, then borders.
pub fn obstacles(scene: &Scene) -> ArrayVec<Obstacle, MAX_OBSTACLES> {
    let mut out = ArrayVec::new();
    out.push(Obstacle::new(
        ObstacleKind::Paddle(scene.player.side),
        scene.player.rect,
    ));
    out.push(Obstacle::new(
        ObstacleKind::Paddle(scene.opponent.side),
        scene.opponent.rect,
    ));
    for edge in Edge::ALL {
        out.push(Obstacle::new(ObstacleKind::Border(edge), edge.border()));
    }
    out
}

/// Result of one collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionOutcome {
    /// Nothing touched (or collisions are disabled)
    #[default]
    None,
    /// Ball hit an obstacle and must be pushed out along `axis`
    Bounced {
        obstacle: ObstacleKind,
        depth: Vector2i,
        axis: Axis,
    },
    /// Ball reached the wall behind `wall`'s paddle
    Goal {
        wall: Side,
        depth: Vector2i,
        axis: Axis,
    },
}

/// Decides what a moving body's contact with the obstacles means.
pub trait CollisionPolicy {
    fn resolve(&self, body: &MovingBody, obstacles: &[Obstacle]) -> CollisionOutcome;
}

impl<F> CollisionPolicy for F
where
    F: Fn(&MovingBody, &[Obstacle]) -> CollisionOutcome,
{
    fn resolve(&self, body: &MovingBody, obstacles: &[Obstacle]) -> CollisionOutcome {
        self(body, obstacles)
    }
}

/// Physics switched off: the ball passes through everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCollisions;

impl CollisionPolicy for NoCollisions {
    fn resolve(&self, _body: &MovingBody, _obstacles: &[Obstacle]) -> CollisionOutcome {
        CollisionOutcome::None
    }
}

/// Bounce off paddles and the top/bottom walls; report a goal on the side walls.
///
/// Only the first obstacle hit (in [`obstacles`] order) is reported per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct BouncePolicy;

impl CollisionPolicy for BouncePolicy {
    fn resolve(&self, body: &MovingBody, obstacles: &[Obstacle]) -> CollisionOutcome {
        let Some(hit) = obstacles
            .iter()
            .find(|o| body.rect.check_collisions(&o.rect))
        else {
            return CollisionOutcome::None;
        };

        let depth = body.rect.get_intersection(&hit.rect);
        let axis = if depth.x < depth.y {
            Axis::X
        } else if depth.y < depth.x {
            Axis::Y
        } else {
            hit.kind.normal()
        };

        match hit.kind {
            ObstacleKind::Border(Edge::Left) => CollisionOutcome::Goal {
                wall: Side::Left,
                depth,
                axis,
            },
            ObstacleKind::Border(Edge::Right) => CollisionOutcome::Goal {
                wall: Side::Right,
                depth,
                axis,
            },
            obstacle => CollisionOutcome::Bounced {
                obstacle,
                depth,
                axis,
            },
        }
    }
}
