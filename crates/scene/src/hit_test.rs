//! Hit testing: resolving a 2D screen tap into a world-space point
//!
//! The surface tracking service owns the actual raycast against tracked
//! geometry; this module only picks a placement point out of its ranked
//! results.

use glam::{Vec2, Vec3};

/// A single surface intersection returned by the tracking service.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorldHit {
    /// World position where the ray hit a tracked surface
    pub position: Vec3,
    /// Distance from the ray origin to the hit point
    pub distance: f32,
}

impl WorldHit {
    pub fn new(position: Vec3, distance: f32) -> Self {
        Self { position, distance }
    }
}

/// Seam over the platform's surface hit-test facility.
///
/// Implementations cast a ray through the given screen point and return the
/// intersections with tracked surfaces, ordered nearest-first. An empty
/// result is a normal outcome (the tap missed every tracked surface), not an
/// error.
pub trait HitTestProvider {
    fn cast(&self, screen_point: Vec2) -> Vec<WorldHit>;
}

/// Resolves a screen tap into a single world-space placement point.
///
/// Pure selection logic: the nearest hit wins, and a miss resolves to `None`.
pub struct HitResolver<P> {
    provider: P,
}

impl<P: HitTestProvider> HitResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolve a tap to the position of the nearest tracked-surface hit.
    pub fn resolve(&self, screen_point: Vec2) -> Option<Vec3> {
        self.provider
            .cast(screen_point)
            .into_iter()
            .next()
            .map(|hit| hit.position)
    }
}

/// Hit-test provider that replays a preset list of hits for every cast.
///
/// Used by headless hosts and tests in place of a real tracking service.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHitTester {
    hits: Vec<WorldHit>,
}

impl ScriptedHitTester {
    /// Provider that reports the given ranked hits for every cast.
    pub fn new(hits: Vec<WorldHit>) -> Self {
        Self { hits }
    }

    /// Provider that never hits anything.
    pub fn empty() -> Self {
        Self { hits: Vec::new() }
    }

    /// Provider with a single hit at the given position.
    pub fn hitting(position: Vec3) -> Self {
        Self::new(vec![WorldHit::new(position, position.length())])
    }
}

impl HitTestProvider for ScriptedHitTester {
    fn cast(&self, _screen_point: Vec2) -> Vec<WorldHit> {
        self.hits.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_nearest_hit_position() {
        let resolver = HitResolver::new(ScriptedHitTester::new(vec![
            WorldHit::new(Vec3::new(1.0, 0.0, 2.0), 1.5),
            WorldHit::new(Vec3::new(4.0, 0.0, 8.0), 6.0),
        ]));

        let position = resolver.resolve(Vec2::new(100.0, 240.0));
        assert_eq!(position, Some(Vec3::new(1.0, 0.0, 2.0)));
    }

    #[test]
    fn resolve_misses_when_no_surface_is_hit() {
        let resolver = HitResolver::new(ScriptedHitTester::empty());
        assert_eq!(resolver.resolve(Vec2::ZERO), None);
    }
}
