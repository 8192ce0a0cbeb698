//! Game objects - everything that contributes pixels to a frame
//!
//! The scene is fixed: one ball, two paddles, a dashed net and four borders
//! placed one pixel outside the window. Each object exposes its rectangles
//! through the [`GameObject`] tagged view, which the frame driver renders.

use std::cmp::Ordering;

use arrayvec::ArrayVec;

use crate::bitplane::BitPlane;
use crate::geometry::Rectangle;
use crate::render::{rasterize_into, RenderStats};
use crate::types::{Vector2i, WINDOW_HIGHT, WINDOW_WIDTH};

/// Net dash length in pixels
pub const NET_DASH: i32 = 2;

/// Gap between net dashes in pixels
pub const NET_GAP: i32 = 2;

/// Upper bound on dashes the net can hold
pub const NET_SEGMENTS_MAX: usize = (WINDOW_HIGHT as usize).div_ceil((NET_DASH + NET_GAP) as usize);

/// Paddle size (width, height)
pub const PADDLE_SIZE: Vector2i = Vector2i::new(1, 4);

/// Ball edge length
pub const BALL_SIZE: i32 = 1;

/// Left or right half of the court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Collision normal used to break ties when both depths are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// A rectangle moving with a constant per-tick velocity (the ball).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingBody {
    pub rect: Rectangle,
    pub velocity: Vector2i,
}

impl MovingBody {
    pub const fn new(rect: Rectangle, velocity: Vector2i) -> Self {
        Self { rect, velocity }
    }

    /// Ball of `size` in the middle of the window, at rest
    pub const fn centered(size: i32) -> Self {
        Self::new(
            Rectangle::new(
                (WINDOW_WIDTH - size) / 2,
                (WINDOW_HIGHT - size) / 2,
                size,
                size,
            ),
            Vector2i::ZERO,
        )
    }

    /// Advance one tick
    pub fn step(&mut self) {
        self.rect = self.rect.translated(self.velocity);
    }

    /// Advance by at most one pixel per axis towards `remaining`, which is
    /// reduced by the distance moved. Returns false once nothing is left.
    pub fn step_pixel(&mut self, remaining: &mut Vector2i) -> bool {
        let delta = remaining.signum();
        self.rect = self.rect.translated(delta);
        *remaining = *remaining - delta;
        delta != Vector2i::ZERO
    }

    /// Push the body out of `obstacle` by `depth` along `axis` and send it
    /// away from the obstacle on that axis.
    pub fn handle_collision(&mut self, obstacle: &Rectangle, depth: Vector2i, axis: Axis) {
        match axis {
            Axis::X => {
                let away = push_direction(
                    (self.rect.left, self.rect.width),
                    (obstacle.left, obstacle.width),
                    WINDOW_WIDTH,
                );
                self.rect.left += depth.x * away;
                self.velocity.x = self.velocity.x.saturating_abs() * away;
            }
            Axis::Y => {
                let away = push_direction(
                    (self.rect.top, self.rect.hight),
                    (obstacle.top, obstacle.hight),
                    WINDOW_HIGHT,
                );
                self.rect.top += depth.y * away;
                self.velocity.y = self.velocity.y.saturating_abs() * away;
            }
        }
    }
}

/// Sign that moves a `(start, len)` span away from the obstacle's center.
/// Spans sharing a center are sent towards the middle of the window.
fn push_direction(body: (i32, i32), obstacle: (i32, i32), window: i32) -> i32 {
    // Doubled centers stay integral.
    let body = 2 * i64::from(body.0) + i64::from(body.1);
    let obstacle = 2 * i64::from(obstacle.0) + i64::from(obstacle.1);
    match body.cmp(&obstacle) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal if body < i64::from(window) => 1,
        Ordering::Equal => -1,
    }
}

/// A player bat hugging one side of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub rect: Rectangle,
    pub side: Side,
}

impl Paddle {
    /// Paddle one pixel in from the `side` edge, vertically centered
    pub const fn new(side: Side) -> Self {
        let left = match side {
            Side::Left => 1,
            Side::Right => WINDOW_WIDTH - 1 - PADDLE_SIZE.x,
        };
        Self {
            rect: Rectangle::new(
                left,
                (WINDOW_HIGHT - PADDLE_SIZE.y) / 2,
                PADDLE_SIZE.x,
                PADDLE_SIZE.y,
            ),
            side,
        }
    }

    /// Move vertically, staying inside the window
    pub fn move_by(&mut self, dy: i32) {
        let max_top = (WINDOW_HIGHT - self.rect.hight).max(0);
        self.rect.top = (self.rect.top + dy).clamp(0, max_top);
    }

    pub fn center_y(&self) -> i32 {
        self.rect.top + self.rect.hight / 2
    }
}

/// Dashed center line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Net {
    segments: ArrayVec<Rectangle, NET_SEGMENTS_MAX>,
}

impl Net {
    /// Net down the middle of a `width` x `hight` court
    pub fn new(width: i32, hight: i32) -> Self {
        let mut segments = ArrayVec::new();
        let mut top = 0;
        while top < hight && !segments.is_full() {
            segments.push(Rectangle::new(width / 2, top, 1, NET_DASH.min(hight - top)));
            top += NET_DASH + NET_GAP;
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[Rectangle] {
        &self.segments
    }
}

/// Which window edge a border guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// One-pixel-thick wall just outside the window on this edge
    pub const fn border(self) -> Rectangle {
        match self {
            Edge::Left => Rectangle::new(-1, -1, 1, WINDOW_HIGHT + 2),
            Edge::Right => Rectangle::new(WINDOW_WIDTH, -1, 1, WINDOW_HIGHT + 2),
            Edge::Top => Rectangle::new(-1, -1, WINDOW_WIDTH + 2, 1),
            Edge::Bottom => Rectangle::new(-1, WINDOW_HIGHT, WINDOW_WIDTH + 2, 1),
        }
    }

    pub const fn normal(self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::X,
            Edge::Top | Edge::Bottom => Axis::Y,
        }
    }
}

/// Tagged view over every renderable object.
#[derive(Debug, Clone, Copy)]
pub enum GameObject<'a> {
    Ball(&'a MovingBody),
    Paddle(&'a Paddle),
    Net(&'a Net),
    Border(Edge),
}

impl GameObject<'_> {
    /// Rectangles this object contributes to a frame
    pub fn rectangles(&self) -> ArrayVec<Rectangle, NET_SEGMENTS_MAX> {
        let mut out = ArrayVec::new();
        match self {
            GameObject::Ball(ball) => out.push(ball.rect),
            GameObject::Paddle(paddle) => out.push(paddle.rect),
            GameObject::Net(net) => out.extend(net.segments().iter().copied()),
            GameObject::Border(edge) => out.push(edge.border()),
        }
        out
    }

    /// Render into a fresh plane holding only this object's pixels.
    pub fn pattern(&self) -> (BitPlane, RenderStats) {
        let mut scratch = BitPlane::new();
        let mut stats = RenderStats::default();
        for rect in self.rectangles() {
            stats.merge(rasterize_into(&rect, &mut scratch));
        }
        (scratch, stats)
    }
}

/// The fixed set of objects in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub ball: MovingBody,
    pub player: Paddle,
    pub opponent: Paddle,
    pub net: Net,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            ball: MovingBody::centered(BALL_SIZE),
            player: Paddle::new(Side::Left),
            opponent: Paddle::new(Side::Right),
            net: Net::new(WINDOW_WIDTH, WINDOW_HIGHT),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.opponent,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.player,
            Side::Right => &mut self.opponent,
        }
    }

    /// Every object in render order: net, borders, paddles, ball
    pub fn objects(&self) -> impl Iterator<Item = GameObject<'_>> + '_ {
        std::iter::once(GameObject::Net(&self.net))
            .chain(Edge::ALL.into_iter().map(GameObject::Border))
            .chain([
                GameObject::Paddle(&self.player),
                GameObject::Paddle(&self.opponent),
                GameObject::Ball(&self.ball),
            ])
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borders_sit_outside_window() {
        for edge in Edge::ALL {
            let (plane, stats) = GameObject::Border(edge).pattern();
            assert!(plane.is_blank(), "{:?} border leaked into the window", edge);
            assert_eq!(stats.set, 0);
            assert_eq!(stats.clipped as i64, edge.border().area());
        }
    }

    #[test]
    fn test_net_is_dashed() {
        let net = Net::new(WINDOW_WIDTH, WINDOW_HIGHT);
        assert_eq!(net.segments().len(), NET_SEGMENTS_MAX);

        let (plane, stats) = GameObject::Net(&net).pattern();
        assert_eq!(stats.clipped, 0);
        let x = WINDOW_WIDTH / 2;
        assert!(plane.is_set(x, 0));
        assert!(plane.is_set(x, 1));
        assert!(!plane.is_set(x, 2));
        assert!(!plane.is_set(x, 3));
        assert!(plane.is_set(x, 4));
    }

    #[test]
    fn test_net_in_short_window_trims_last_dash() {
        let net = Net::new(8, 3);
        assert_eq!(
            net.segments(),
            &[Rectangle::new(4, 0, 1, 2)][..]
        );
        let net = Net::new(8, 5);
        assert_eq!(net.segments().len(), 2);
        assert_eq!(net.segments()[1], Rectangle::new(4, 4, 1, 1));
    }

    #[test]
    fn test_paddle_clamps_to_window() {
        let mut paddle = Paddle::new(Side::Right);
        assert_eq!(paddle.rect.left, WINDOW_WIDTH - 2);

        paddle.move_by(-1000);
        assert_eq!(paddle.rect.top, 0);
        paddle.move_by(1000);
        assert_eq!(paddle.rect.bottom(), WINDOW_HIGHT);
    }

    #[test]
    fn test_ball_step_and_bounce() {
        let mut ball = MovingBody::new(Rectangle::new(5, 0, 1, 1), Vector2i::new(1, -1));
        ball.step();
        assert_eq!(ball.rect.position(), Vector2i::new(6, -1));

        let top = Edge::Top.border();
        let depth = ball.rect.get_intersection(&top);
        assert_eq!(depth, Vector2i::new(1, 1));
        ball.handle_collision(&top, depth, Axis::Y);
        assert_eq!(ball.rect.position(), Vector2i::new(6, 0));
        assert_eq!(ball.velocity, Vector2i::new(1, 1));
    }

    #[test]
    fn test_step_pixel_walks_the_whole_velocity() {
        let mut ball = MovingBody::new(Rectangle::new(10, 10, 1, 1), Vector2i::new(-3, 2));
        let mut remaining = ball.velocity;
        let mut path = Vec::new();
        while ball.step_pixel(&mut remaining) {
            path.push(ball.rect.position());
        }
        assert_eq!(
            path,
            [Vector2i::new(9, 11), Vector2i::new(8, 12), Vector2i::new(7, 12)]
        );
        assert_eq!(remaining, Vector2i::ZERO);
    }

    #[test]
    fn test_stationary_ball_is_pushed_off_paddle() {
        let paddle = Paddle::new(Side::Left);
        // Paddle moved onto a ball that is not moving horizontally.
        let mut ball = MovingBody::new(
            Rectangle::new(paddle.rect.left, paddle.rect.top, 1, 1),
            Vector2i::new(0, 1),
        );
        let depth = ball.rect.get_intersection(&paddle.rect);
        ball.handle_collision(&paddle.rect, depth, Axis::X);
        assert_eq!(ball.rect.left, paddle.rect.right());
        assert!(!ball.rect.check_collisions(&paddle.rect));
        assert_eq!(ball.velocity, Vector2i::new(0, 1));

        let right = Paddle::new(Side::Right);
        let mut ball = MovingBody::new(
            Rectangle::new(right.rect.left, right.rect.top + 1, 1, 1),
            Vector2i::ZERO,
        );
        let depth = ball.rect.get_intersection(&right.rect);
        ball.handle_collision(&right.rect, depth, Axis::X);
        assert_eq!(ball.rect.right(), right.rect.left);
    }

    #[test]
    fn test_ball_leaving_obstacle_keeps_direction() {
        let paddle = Paddle::new(Side::Left);
        let mut ball = MovingBody::new(
            Rectangle::new(paddle.rect.left, paddle.rect.top, 1, 1),
            Vector2i::new(2, -1),
        );
        let depth = ball.rect.get_intersection(&paddle.rect);
        ball.handle_collision(&paddle.rect, depth, Axis::X);
        assert_eq!(ball.velocity, Vector2i::new(2, -1));
    }

    #[test]
    fn test_scene_render_order() {
        let scene = Scene::new();
        let kinds: Vec<&str> = scene
            .objects()
            .map(|o| match o {
                GameObject::Net(_) => "net",
                GameObject::Border(_) => "border",
                GameObject::Paddle(_) => "paddle",
                GameObject::Ball(_) => "ball",
            })
            .collect();
        assert_eq!(
            kinds,
            ["net", "border", "border", "border", "border", "paddle", "paddle", "ball"]
        );
    }
}
