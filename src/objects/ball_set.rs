use crate::objects::ball::{Ball, BallId, BallState};

/// Every ball currently on the table, object balls and exactly one cue ball.
///
/// Insertion order is the update order for a tick. Two balls hitting a third
/// in the same tick resolve in this order, so it must stay stable for runs to
/// be reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallSet {
    balls: Vec<Ball>,
}

impl BallSet {
    pub fn new() -> Self {
        Self { balls: Vec::new() }
    }

    pub fn push(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ball> {
        self.balls.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Ball> {
        self.balls.iter_mut()
    }

    pub fn as_slice(&self) -> &[Ball] {
        &self.balls
    }

    pub fn as_mut_slice(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn get(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BallId) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.id == id)
    }

    pub fn cue(&self) -> Option<&Ball> {
        self.balls.iter().find(|b| b.is_cue())
    }

    pub fn cue_mut(&mut self) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.is_cue())
    }

    pub fn object_count(&self) -> usize {
        self.balls.iter().filter(|b| !b.is_cue()).count()
    }

    /// True if any ball is above the rest threshold.
    pub fn is_any_ball_moving(&self) -> bool {
        self.balls.iter().any(|b| b.moving)
    }

    pub fn states(&self) -> Vec<BallState> {
        self.balls.iter().map(Ball::state).collect()
    }

    /// Drops the balls flagged in `pocketed` (indexed like the set), keeping the order of the rest.
    /// The cue ball is never removed.
    pub(crate) fn remove_pocketed(&mut self, pocketed: &[bool]) {
        debug_assert_eq!(pocketed.len(), self.balls.len());
        let mut flags = pocketed.iter();
        self.balls
            .retain(|ball| !(*flags.next().unwrap_or(&false) && !ball.is_cue()));
    }
}

impl FromIterator<Ball> for BallSet {
    fn from_iter<I: IntoIterator<Item = Ball>>(iter: I) -> Self {
        Self {
            balls: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BallSet {
    type Item = &'a Ball;
    type IntoIter = std::slice::Iter<'a, Ball>;

    fn into_iter(self) -> Self::IntoIter {
        self.balls.iter()
    }
}
