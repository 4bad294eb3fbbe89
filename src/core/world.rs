use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bodies::{presets, Body, BodyFlags, BodyKind, Rgb};
use crate::collision::{resolve_collisions, ContactEvent, SpatialGrid};
use crate::core::{BodyId, SimStats, WorldConfig};
use crate::diagnostics;
use crate::error::EngineError;
use crate::forces::{self, ForceField};
use crate::math::{self, Vector2};
use crate::scenarios;
use crate::Result;

/// Velocity cap for the supernova shockwave impulse
const MAX_SHOCKWAVE_IMPULSE: f32 = 5.0;

/// The simulation world: the ordered body list plus everything needed to
/// advance it
///
/// Single-threaded by design: all mutation happens inside `step()` or
/// explicit caller-invoked mutators, and the renderer reads the body list
/// only between steps.
pub struct World {
    /// All bodies, ordered; indices shift on removal, ids never do
    bodies: Vec<Body>,

    /// Configuration for the simulation
    config: WorldConfig,

    /// Active force fields
    fields: Vec<ForceField>,

    /// Collision grid, rebuilt every substep
    grid: SpatialGrid,

    /// Cumulative event counters
    stats: SimStats,

    /// Total elapsed simulation time
    time: f32,

    /// Next id handed out by `insert_body`
    next_body_id: u32,

    /// Seeded RNG for internal stochastic events (debris spray)
    rng: StdRng,
}

impl World {
    /// Creates a new world with default settings
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Creates a new world with the given configuration
    pub fn with_config(config: WorldConfig) -> Self {
        let grid = SpatialGrid::new(config.grid_rows, config.grid_cols);
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            bodies: Vec::new(),
            config,
            fields: Vec::new(),
            grid,
            stats: SimStats::new(),
            time: 0.0,
            next_body_id: 1,
            rng,
        }
    }

    /// Returns the current simulation time
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Returns a reference to the configuration
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Returns a mutable reference to the configuration
    pub fn config_mut(&mut self) -> &mut WorldConfig {
        &mut self.config
    }

    /// Returns the collected statistics
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Resets the statistics counters
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Returns the body list
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Returns the body list mutably, for callers that edit between steps
    pub fn bodies_mut(&mut self) -> &mut Vec<Body> {
        &mut self.bodies
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Looks up a body by its stable id
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.index_of(id).map(|i| &self.bodies[i])
    }

    /// Looks up a body mutably by its stable id
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.index_of(id).map(move |i| &mut self.bodies[i])
    }

    /// Returns the current index of a body, if it is still alive
    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    /// Adds a body to the world
    ///
    /// Returns `None` without inserting when strict spawn overlap is enabled
    /// and the candidate overlaps an existing body's radius.
    pub fn add_body(&mut self, body: Body) -> Option<BodyId> {
        if self.config.strict_spawn_overlap {
            for existing in &self.bodies {
                let min_dist = body.radius + existing.radius;
                if body.position.distance_squared(&existing.position) < min_dist * min_dist {
                    return None;
                }
            }
        }
        Some(self.insert_body(body))
    }

    /// Inserts a body bypassing the overlap check, assigning a fresh id.
    /// Used by debris spawns, merges, and scenario generators.
    pub(crate) fn insert_body(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_body_id);
        self.next_body_id += 1;
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Removes a body by its stable id
    pub fn remove_body(&mut self, id: BodyId) -> Result<Body> {
        match self.index_of(id) {
            Some(index) => Ok(self.bodies.remove(index)),
            None => Err(EngineError::BodyNotFound(id)),
        }
    }

    /// Removes the most recently added non-static body, if any
    pub fn remove_last_dynamic(&mut self) -> Option<BodyId> {
        let index = self.bodies.iter().rposition(|b| !b.is_static())?;
        Some(self.bodies.remove(index).id)
    }

    /// Removes all bodies and resets time and statistics. Force fields are
    /// managed separately and survive a clear.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.stats.reset();
        self.time = 0.0;
    }

    /// Adds a force field and returns its index
    pub fn add_force_field(&mut self, field: ForceField) -> usize {
        self.fields.push(field);
        self.fields.len() - 1
    }

    /// Removes a force field by index
    pub fn remove_force_field(&mut self, index: usize) -> Result<ForceField> {
        if index >= self.fields.len() {
            return Err(EngineError::FieldIndexOutOfRange(index));
        }
        Ok(self.fields.remove(index))
    }

    /// Removes all force fields
    pub fn clear_force_fields(&mut self) {
        self.fields.clear();
    }

    /// Returns the force field list
    pub fn force_fields(&self) -> &[ForceField] {
        &self.fields
    }

    /// Returns the force field list mutably
    pub fn force_fields_mut(&mut self) -> &mut [ForceField] {
        &mut self.fields
    }

    /// Total kinetic energy of all non-static bodies
    pub fn total_kinetic_energy(&self) -> f32 {
        diagnostics::kinetic_energy(&self.bodies)
    }

    /// Total gravitational potential energy over unique pairs
    pub fn total_potential_energy(&self) -> f32 {
        diagnostics::potential_energy(&self.bodies, self.config.gravitational_constant)
    }

    /// Total momentum vector of all non-static bodies
    pub fn total_momentum(&self) -> Vector2 {
        diagnostics::momentum(&self.bodies)
    }

    /// Total angular momentum about the origin
    pub fn total_angular_momentum(&self) -> f32 {
        diagnostics::angular_momentum(&self.bodies)
    }

    /// Advances the simulation by `dt` seconds (scaled by the configured
    /// time warp)
    ///
    /// The step is subdivided so that no body moves more than half a
    /// reference unit per substep; large `dt` values are handled by more
    /// substeps, never by clamping. `dt = 0` is a no-op.
    pub fn step(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "negative dt is out of contract");
        if dt <= 0.0 || self.bodies.is_empty() {
            return;
        }

        let dt = dt * self.config.time_scale;
        let max_speed = self.bodies.iter().map(|b| b.speed()).fold(0.0f32, f32::max);
        let max_displacement = max_speed * dt;
        let substeps = ((max_displacement / (0.5 * dt)).ceil() as usize).max(1);
        let subdt = dt / substeps as f32;

        for _ in 0..substeps {
            self.substep(subdt);
        }

        // Once per frame, not per substep
        self.apply_tidal_disruption();
        forces::update_thermal(&mut self.bodies, dt);

        self.time += dt;
    }

    /// Runs the full pipeline for one fixed-size time slice
    fn substep(&mut self, subdt: f32) {
        self.handle_absorption();
        self.apply_orbit_constraints(subdt);
        self.advance_spin(subdt);
        self.update_lifetimes(subdt);

        forces::apply_gravity(
            &mut self.bodies,
            self.config.gravitational_constant,
            self.config.gravity_damping,
            self.config.softening,
        );
        forces::apply_force_fields(&mut self.bodies, &self.fields, subdt);
        forces::apply_air_drag(&mut self.bodies, self.config.drag_coefficient, subdt);

        self.integrate(subdt);
        self.handle_collisions();
        self.handle_walls();
    }

    /// Black holes swallow any non-hole body inside their event horizon
    ///
    /// Holes are updated in place during the scan so several absorptions
    /// against the same hole accumulate; removal is deferred and applied
    /// back-to-front after the scan to keep indices valid.
    fn handle_absorption(&mut self) {
        let mut absorbed: HashSet<usize> = HashSet::new();
        let n = self.bodies.len();

        for i in 0..n {
            if self.bodies[i].kind != BodyKind::BlackHole {
                continue;
            }
            for j in 0..n {
                if i == j || absorbed.contains(&j) || self.bodies[j].kind == BodyKind::BlackHole {
                    continue;
                }
                let horizon = self.bodies[i].event_horizon;
                let dist_sq = self.bodies[i]
                    .position
                    .distance_squared(&self.bodies[j].position);
                if dist_sq >= horizon * horizon {
                    continue;
                }

                let (o_pos, o_vel, o_mass, o_radius, o_color) = {
                    let other = &self.bodies[j];
                    (other.position, other.velocity, other.mass, other.radius, other.color)
                };

                let hole = &mut self.bodies[i];
                let total = hole.mass + o_mass;
                // Blend by mass before the hole's own mass is updated
                hole.color = Rgb::blend_weighted(hole.color, hole.mass, o_color, o_mass);
                if !hole.is_static() {
                    hole.velocity = (hole.velocity * hole.mass + o_vel * o_mass) / total;
                    hole.position = (hole.position * hole.mass + o_pos * o_mass) / total;
                }
                hole.mass = total;
                hole.radius = (hole.radius * hole.radius + o_radius * o_radius).sqrt();
                hole.event_horizon = presets::event_horizon_for_mass(total);

                absorbed.insert(j);
            }
        }

        if absorbed.is_empty() {
            return;
        }
        self.stats.bodies_absorbed += absorbed.len() as u64;
        let mut removals: Vec<usize> = absorbed.into_iter().collect();
        removals.sort_unstable();
        for &index in removals.iter().rev() {
            self.bodies.remove(index);
        }
    }

    /// Pins orbiting planets to an exact circular orbit around their target
    ///
    /// Position and velocity are overwritten, not force-integrated. Targets
    /// are resolved by id each substep; a stale target silently disables the
    /// constraint for that frame.
    fn apply_orbit_constraints(&mut self, subdt: f32) {
        let index_by_id: HashMap<BodyId, usize> = self
            .bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id, i))
            .collect();

        for i in 0..self.bodies.len() {
            let target_id = match (&self.bodies[i].kind, self.bodies[i].orbit_target) {
                (kind, Some(target)) if kind.is_planet() => target,
                _ => continue,
            };
            let target_index = match index_by_id.get(&target_id) {
                Some(&t) if t != i => t,
                _ => continue,
            };

            let (t_pos, t_vel, t_mass) = {
                let target = &self.bodies[target_index];
                (target.position, target.velocity, target.mass)
            };

            let body = &mut self.bodies[i];
            let r = body.orbit_radius.max(1.0e-4);
            let angle = body.orbit_angle;
            body.position = t_pos + Vector2::from_angle(angle) * r;

            let v = (0.5 * t_mass.max(0.0) / r).sqrt();
            body.velocity = Vector2::new(-v * angle.sin(), v * angle.cos()) + t_vel;

            // Advance by the angular rate v/r so orbital speed is
            // independent of the substep count
            body.orbit_angle = math::wrap_angle(body.orbit_angle + (v / r) * subdt);
            if body.is_tidally_locked() {
                body.spin_angle = body.orbit_angle;
            }
        }
    }

    /// Advances visual spin angles
    fn advance_spin(&mut self, subdt: f32) {
        for body in &mut self.bodies {
            if body.is_tidally_locked() || body.spin.abs() <= math::EPSILON {
                continue;
            }
            body.spin_angle = math::wrap_angle(body.spin_angle + body.spin * subdt);
        }
    }

    /// Ages bodies with finite lifetimes; expired stars go supernova, all
    /// other expired bodies are removed
    fn update_lifetimes(&mut self, subdt: f32) {
        let mut supernovae: Vec<usize> = Vec::new();
        let mut removals: Vec<usize> = Vec::new();

        for (i, body) in self.bodies.iter_mut().enumerate() {
            let lifetime = match body.lifetime {
                Some(lifetime) => lifetime,
                None => continue,
            };
            body.age += subdt;
            if body.age >= lifetime && !body.is_decaying() {
                body.flags.insert(BodyFlags::DECAYING);
                if body.kind == BodyKind::Star {
                    supernovae.push(i);
                } else {
                    removals.push(i);
                }
            }
        }

        // Supernovae convert in place and append debris, so earlier indices
        // stay valid; removals are applied last, back to front
        for &index in &supernovae {
            self.handle_supernova(index);
        }
        removals.sort_unstable();
        for &index in removals.iter().rev() {
            self.bodies.remove(index);
        }
    }

    /// Detonates the star at `index`: shockwave impulse, debris field, and
    /// in-place conversion to a black hole or neutron star
    fn handle_supernova(&mut self, index: usize) {
        let center = self.bodies[index].position;
        let star_mass = self.bodies[index].mass;
        let explosion_energy = star_mass * 0.5;

        for (i, body) in self.bodies.iter_mut().enumerate() {
            if i == index || body.is_static() {
                continue;
            }
            let delta = body.position - center;
            let dist_sq = delta.length_squared().max(1.0e-4);
            let impulse = (explosion_energy / dist_sq).min(MAX_SHOCKWAVE_IMPULSE);
            body.velocity += delta.normalize() * impulse;
        }

        self.spawn_debris_field(center, 50, 0.3);

        let star = &mut self.bodies[index];
        if star_mass > 8.0 {
            star.kind = BodyKind::BlackHole;
            star.mass = star_mass * 0.5;
            star.radius *= 0.4;
            star.event_horizon = presets::event_horizon_for_mass(star.mass);
            star.absorption = 1.0;
            star.density = 1000.0;
            star.luminosity = 0.0;
            star.color = Rgb::new(0.05, 0.0, 0.1);
            star.flags.remove(BodyFlags::EMITS_LIGHT);
        } else {
            star.kind = BodyKind::NeutronStar;
            star.mass = star_mass * 0.25;
            star.radius *= 0.15;
            star.density = 1.0e6;
            star.temperature = 600_000.0;
            star.magnetic_field = star.mass * 10.0;
            star.spin = 20.0;
            star.color = Rgb::new(0.8, 0.85, 1.0);
        }
        star.lifetime = None;
        star.age = 0.0;
        star.flags.remove(BodyFlags::DECAYING);

        self.stats.supernovae += 1;
    }

    /// Spawns a spray of short-lived asteroids at a point, drawing from the
    /// world's own seeded RNG
    pub fn spawn_debris_field(&mut self, center: Vector2, count: usize, base_speed: f32) -> usize {
        for _ in 0..count {
            let body = scenarios::debris_fragment(center, base_speed, &mut self.rng);
            self.insert_body(body);
        }
        count
    }

    /// Linear friction, gravity bias, and position integration
    fn integrate(&mut self, subdt: f32) {
        let friction = self.config.friction;
        let gravity_bias = self.config.gravity_bias;
        let relativistic = self.config.relativistic_effects;
        let max_speed = self.config.max_speed;

        for body in &mut self.bodies {
            if body.is_static() {
                continue;
            }

            let speed = body.speed();
            if speed > math::EPSILON {
                // Reduce speed magnitude, never reverse direction
                let scale = (speed - friction * subdt).max(0.0) / speed;
                body.velocity *= scale;
            }

            body.velocity.y += gravity_bias * subdt;

            if relativistic {
                let speed = body.speed();
                if speed > max_speed {
                    body.velocity *= max_speed / speed;
                }
            }

            body.position += body.velocity * subdt;

            if body.kind == BodyKind::Comet {
                body.push_trail();
            }
        }
    }

    /// Grid-pruned collision detection and resolution, then structural
    /// merge/split changes
    fn handle_collisions(&mut self) {
        if self.grid.resolution() != (self.config.grid_rows.max(1), self.config.grid_cols.max(1)) {
            self.grid = SpatialGrid::new(self.config.grid_rows, self.config.grid_cols);
        }
        self.grid.rebuild(&self.bodies, &self.config.bounds);
        let pairs = self.grid.candidate_pairs();

        let events = resolve_collisions(&mut self.bodies, &pairs, &self.config, &mut self.stats);
        if !events.is_empty() {
            self.apply_contact_events(events);
        }
    }

    /// Applies merge/split events collected during the pair scan
    ///
    /// Same collect-then-apply discipline as absorption: removals are sorted
    /// and applied back to front, insertions go in afterwards. Events
    /// touching an index already consumed this substep are dropped.
    fn apply_contact_events(&mut self, events: Vec<ContactEvent>) {
        let mut consumed: HashSet<usize> = HashSet::new();
        let mut removals: Vec<usize> = Vec::new();
        let mut inserts: Vec<Body> = Vec::new();
        let kick = self.config.split_speed_threshold * 0.5;

        for event in events {
            match event {
                ContactEvent::Merge { a, b } => {
                    if consumed.contains(&a) || consumed.contains(&b) {
                        continue;
                    }
                    consumed.insert(a);
                    consumed.insert(b);

                    let first = self.bodies[a].clone();
                    let second = self.bodies[b].clone();
                    let total = first.mass + second.mass;

                    let mut merged = Body::new(
                        (first.position * first.mass + second.position * second.mass) / total,
                        (first.velocity * first.mass + second.velocity * second.mass) / total,
                        // Area-conserving radius, not a linear sum
                        (first.radius * first.radius + second.radius * second.radius).sqrt(),
                        total,
                    );
                    merged.kind = BodyKind::Merged;
                    merged.color =
                        Rgb::blend_weighted(first.color, first.mass, second.color, second.mass);
                    merged.components = vec![first, second];

                    removals.push(a);
                    removals.push(b);
                    inserts.push(merged);
                }
                ContactEvent::Split { index } => {
                    if consumed.contains(&index) {
                        continue;
                    }
                    consumed.insert(index);

                    let merged = self.bodies[index].clone();
                    let m_pos = merged.position;
                    let m_vel = merged.velocity;
                    let m_radius = merged.radius;
                    let m_mass = merged.mass;
                    let m_color = merged.color;

                    let axis = if m_vel.is_zero() { Vector2::unit_x() } else { m_vel.normalize() };
                    let tangent = axis.perp();

                    removals.push(index);
                    if merged.components.len() == 2 {
                        for (k, mut part) in merged.components.into_iter().enumerate() {
                            let sign = if k == 0 { 1.0 } else { -1.0 };
                            part.position = m_pos + tangent * (sign * part.radius);
                            part.velocity = m_vel + tangent * (sign * kick);
                            part.components.clear();
                            inserts.push(part);
                        }
                    } else {
                        // No recorded components; halve into two plain bodies
                        for sign in [1.0f32, -1.0] {
                            let mut part = Body::new(
                                m_pos + tangent * (sign * m_radius * 0.5),
                                m_vel + tangent * (sign * kick),
                                m_radius * std::f32::consts::FRAC_1_SQRT_2,
                                m_mass * 0.5,
                            );
                            part.color = m_color;
                            inserts.push(part);
                        }
                    }
                }
            }
        }

        removals.sort_unstable();
        removals.dedup();
        for &index in removals.iter().rev() {
            self.bodies.remove(index);
        }
        for body in inserts {
            self.insert_body(body);
        }
    }

    /// Reflects and clamps bodies at the four boundary planes
    fn handle_walls(&mut self) {
        let bounds = self.config.bounds;
        let damping = self.config.wall_damping;

        for body in &mut self.bodies {
            if body.is_static() {
                continue;
            }
            if body.position.x - body.radius < bounds.left {
                body.position.x = bounds.left + body.radius;
                body.velocity.x = -body.velocity.x * damping;
            }
            if body.position.x + body.radius > bounds.right {
                body.position.x = bounds.right - body.radius;
                body.velocity.x = -body.velocity.x * damping;
            }
            if body.position.y - body.radius < bounds.bottom {
                body.position.y = bounds.bottom + body.radius;
                body.velocity.y = -body.velocity.y * damping;
            }
            if body.position.y + body.radius > bounds.top {
                body.position.y = bounds.top - body.radius;
                body.velocity.y = -body.velocity.y * damping;
            }
        }
    }

    /// End-of-frame Roche-limit check: disrupted planets are removed and, if
    /// heavy enough, burst into a debris field
    fn apply_tidal_disruption(&mut self) {
        let disruptions = forces::find_tidal_disruptions(&self.bodies);
        if disruptions.is_empty() {
            return;
        }

        let mut removals: Vec<usize> = disruptions.iter().map(|d| d.index).collect();
        removals.sort_unstable();
        removals.dedup();
        for &index in removals.iter().rev() {
            self.bodies.remove(index);
        }

        for disruption in &disruptions {
            if disruption.mass > 0.1 {
                self.spawn_debris_field(disruption.position, 12, 0.2);
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
