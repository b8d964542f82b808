//! Game session: owns all world state and the fixed per-frame update
//! order.

use super::obstacles::ObstacleField;
use super::physics;
use super::player::{self, DinoInput, Player};
use super::terrain::Terrain;
use super::types::{Camera, Cloud, DinoState, GameMode};
use crate::constants::*;
use crate::textures;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Session {
    pub mode: GameMode,
    pub elapsed_time: f64,
    /// Shared animation clock, `floor(elapsed_time * ANIM_CLOCK_HZ)`.
    pub anim_offset: u64,
    /// Derived each frame from the player's position, never accumulated.
    pub score: u64,
    pub player: Player,
    pub terrain: Terrain,
    pub obstacles: ObstacleField,
    pub clouds: Vec<Cloud>,
    pub camera: Camera,
}

impl Session {
    /// Set up a fresh playthrough: new terrain and obstacle layout, the
    /// dino set running, clouds scattered across the first screen. Also
    /// serves as the reset path after a crash.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let camera = Camera::new();
        let terrain = Terrain::generate(rng);
        let obstacles = ObstacleField::generate(camera.lookahead(), rng);

        let clouds = (0..MAX_CLOUDS)
            .map(|_| Cloud {
                left: rng.gen_range(0.0..=SCREEN_WIDTH),
                top: rng.gen_range(CLOUD_TOP_MIN..=CLOUD_TOP_MAX),
            })
            .collect();

        let mut player = Player::new();
        player.state = DinoState::Running;

        Self {
            mode: GameMode::Playing,
            elapsed_time: 0.0,
            anim_offset: 0,
            score: 0,
            player,
            terrain,
            obstacles,
            clouds,
            camera,
        }
    }

    /// Route one input event. While playing it drives the player state
    /// machine; after a crash any key release restarts the session with a
    /// fresh layout.
    pub fn handle_input<R: Rng>(&mut self, input: DinoInput, rng: &mut R) {
        match self.mode {
            GameMode::Playing => player::apply_input(&mut self.player, input),
            GameMode::GameOver => {
                if input.is_release() {
                    *self = Session::new(rng);
                }
            }
        }
    }

    /// One frame of simulation. `dt` is seconds since the previous frame
    /// and only feeds the animation clock; motion is per-frame like the
    /// physics contract.
    pub fn update<R: Rng>(&mut self, dt: f64, rng: &mut R) {
        // 1. Frozen after a crash: kill the run speed, hold the crash
        //    pose, and skip everything else until a reset.
        if self.mode == GameMode::GameOver {
            self.player.vx = 0.0;
            self.player.texture = textures::CRASHED;
            return;
        }

        // 2. Advance the shared animation clock.
        self.elapsed_time += dt;
        self.anim_offset = (self.elapsed_time * ANIM_CLOCK_HZ) as u64;

        // 3. Physics step, then landing ends a jump.
        physics::integrate(&mut self.player, &self.terrain);
        if self.player.state == DinoState::Jumping && self.player.is_grounded() {
            self.player.state = DinoState::Running;
        }

        // 4. Collision ends the run. The rest of this frame still
        //    completes; the freeze takes effect next frame.
        if self.obstacles.hit_test(&self.player.footprint()) {
            self.player.state = DinoState::Crashing;
            self.mode = GameMode::GameOver;
        }

        // 5. Texture by state and clock.
        self.player.texture = textures::dino_texture(self.player.state, self.anim_offset);

        // 6. Constant run speed while the session is live.
        self.player.vx = PLAYER_SPEED;

        // 7. Camera trails the player.
        self.camera.move_to(self.player.x - CAMERA_LEAD);
        self.camera.update();

        // 8. Score is a pure function of distance traveled.
        self.score = self.player.x.max(0.0) as u64 / SCORE_DIVISOR;

        // 9. Bird flap animation.
        self.obstacles.bird.texture = textures::bird_texture(self.anim_offset);

        // 10. Ground recycle, cascading into an obstacle pass over the
        //     newly exposed span.
        if let Some((from, to)) = self.terrain.recycle(self.camera.lookahead()) {
            self.obstacles
                .place(from, to, self.camera.lookahead(), rng);
        }

        // 11. Cloud parallax in screen space; at most one re-entry per
        //     frame.
        for cloud in &mut self.clouds {
            cloud.left += CLOUD_SPEED;
        }
        for cloud in &mut self.clouds {
            if cloud.right() < 0.0 {
                cloud.left = SCREEN_WIDTH + rng.gen_range(0.0..=CLOUD_RESPAWN_SLACK)
                    - cloud.width();
                cloud.top = rng.gen_range(CLOUD_TOP_MIN..=CLOUD_TOP_MAX);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::types::{Cactus, CactusSize};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const DT: f64 = 1.0 / 60.0;

    fn session(seed: u64) -> (Session, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let session = Session::new(&mut rng);
        (session, rng)
    }

    #[test]
    fn test_new_session_state() {
        let (s, _) = session(1);
        assert_eq!(s.mode, GameMode::Playing);
        assert_eq!(s.player.state, DinoState::Running);
        assert_eq!(s.score, 0);
        assert_eq!(s.clouds.len(), MAX_CLOUDS);
        assert!(s.terrain.covers(0.0, SCREEN_WIDTH));
        for cloud in &s.clouds {
            assert!(cloud.top >= CLOUD_TOP_MIN && cloud.top <= CLOUD_TOP_MAX);
        }
    }

    #[test]
    fn test_update_applies_run_speed_next_frame() {
        let (mut s, mut rng) = session(2);
        assert_eq!(s.player.vx, 0.0, "no run speed until the first update");

        s.update(DT, &mut rng);
        assert!((s.player.vx - PLAYER_SPEED).abs() < f64::EPSILON);

        let x = s.player.x;
        s.update(DT, &mut rng);
        assert!((s.player.x - (x + PLAYER_SPEED)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_is_floor_of_position_over_ten() {
        let (mut s, mut rng) = session(3);
        for _ in 0..100 {
            s.update(DT, &mut rng);
            if s.mode == GameMode::GameOver {
                break;
            }
            assert_eq!(s.score, s.player.x as u64 / SCORE_DIVISOR);
        }
    }

    #[test]
    fn test_score_is_monotonic_while_playing() {
        let (mut s, mut rng) = session(4);
        let mut last = s.score;
        for _ in 0..300 {
            s.update(DT, &mut rng);
            if s.mode == GameMode::GameOver {
                break;
            }
            assert!(s.score >= last, "score must never decrease while alive");
            last = s.score;
        }
    }

    #[test]
    fn test_camera_goal_trails_player_by_lead_margin() {
        let (mut s, mut rng) = session(5);
        s.update(DT, &mut rng);
        assert!((s.camera.lookahead() - (s.player.x - CAMERA_LEAD)).abs() < f64::EPSILON);
        assert!((s.camera.left_bound() - s.camera.lookahead()).abs() < f64::EPSILON);
    }

    fn plant_cactus_on_player(s: &mut Session) {
        s.obstacles.cacti.push(Cactus {
            left: s.player.x,
            size: CactusSize::Small,
            variant: 1,
        });
    }

    #[test]
    fn test_collision_crashes_on_frame_n_freezes_on_n_plus_one() {
        let (mut s, mut rng) = session(6);
        s.update(DT, &mut rng);
        plant_cactus_on_player(&mut s);

        // Frame N: collision detected, session over, but the frame still
        // finishes with run speed applied.
        s.update(DT, &mut rng);
        assert_eq!(s.mode, GameMode::GameOver);
        assert_eq!(s.player.state, DinoState::Crashing);
        assert!((s.player.vx - PLAYER_SPEED).abs() < f64::EPSILON);
        let score_at_crash = s.score;

        // Frame N+1: velocity freezes, crash pose shows, score holds.
        s.update(DT, &mut rng);
        assert_eq!(s.player.vx, 0.0);
        assert_eq!(s.player.texture, textures::CRASHED);
        assert_eq!(s.score, score_at_crash);

        // And stays frozen.
        for _ in 0..20 {
            s.update(DT, &mut rng);
        }
        assert_eq!(s.score, score_at_crash);
        assert_eq!(s.player.state, DinoState::Crashing);
    }

    #[test]
    fn test_crashing_only_reachable_through_collision() {
        let (mut s, mut rng) = session(7);
        // Far from any obstacle: hammer inputs and update freely.
        for _ in 0..50 {
            s.handle_input(DinoInput::JumpPressed, &mut rng);
            s.handle_input(DinoInput::JumpReleased, &mut rng);
            s.handle_input(DinoInput::DuckPressed, &mut rng);
            s.handle_input(DinoInput::DuckReleased, &mut rng);
            if s.mode == GameMode::GameOver {
                return; // ran into the generated layout, also fine
            }
            assert_ne!(s.player.state, DinoState::Crashing);
            s.update(DT, &mut rng);
        }
    }

    #[test]
    fn test_game_over_input_press_does_not_reset() {
        let (mut s, mut rng) = session(8);
        s.update(DT, &mut rng);
        plant_cactus_on_player(&mut s);
        s.update(DT, &mut rng);
        assert_eq!(s.mode, GameMode::GameOver);

        s.handle_input(DinoInput::JumpPressed, &mut rng);
        assert_eq!(s.mode, GameMode::GameOver, "presses never reset");
    }

    #[test]
    fn test_game_over_any_release_resets_with_fresh_layout() {
        let (mut s, mut rng) = session(9);
        s.update(DT, &mut rng);
        plant_cactus_on_player(&mut s);
        s.update(DT, &mut rng);
        assert_eq!(s.mode, GameMode::GameOver);

        s.handle_input(DinoInput::OtherReleased, &mut rng);
        assert_eq!(s.mode, GameMode::Playing);
        assert_eq!(s.player.state, DinoState::Running);
        assert_eq!(s.score, 0);
        assert!((s.player.x - PLAYER_START_X).abs() < f64::EPSILON);
        assert!((s.elapsed_time - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duck_footprint_avoids_high_bird_same_frame() {
        let (mut s, mut rng) = session(10);
        s.update(DT, &mut rng);

        // Bird overlapping the standing head, clear of the duck shape.
        let duck_top = GROUND_TOP + crate::textures::TextureKey::DinoDuck1.size().1;
        s.obstacles.bird.left = s.player.x;
        s.obstacles.bird.bottom = duck_top + 1.0;
        s.obstacles.cacti.clear();

        // Standing: the run footprint reaches the bird.
        assert!(s.obstacles.hit_test(&s.player.footprint()));

        // Duck input swaps the footprint before the next collision test.
        s.handle_input(DinoInput::DuckPressed, &mut rng);
        assert!(!s.obstacles.hit_test(&s.player.footprint()));

        s.obstacles.bird.left = s.player.x + PLAYER_SPEED;
        s.update(DT, &mut rng);
        assert_eq!(s.mode, GameMode::Playing, "duck must clear the bird");
    }

    #[test]
    fn test_terrain_recycle_cascades_into_obstacles() {
        let (mut s, mut rng) = session(11);

        // Drive long enough for the first segment to fall behind the
        // camera (camera ≈ player.x - 30; segment 0 ends at 600).
        let mut frames = 0;
        while s.terrain.left_extent() < f64::EPSILON && frames < 5000 {
            // Clear the dino's path, and keep the bird visible so cascade
            // passes plant cacti only.
            s.obstacles.cacti.clear();
            s.obstacles.bird.left = s.camera.left_bound() + 5000.0;
            s.obstacles.bird.bottom = 500.0;
            s.update(DT, &mut rng);
            frames += 1;
        }

        assert!(
            s.terrain.left_extent() > 0.0,
            "first segment must recycle eventually"
        );
        assert!(
            (s.terrain.right_extent() - (LEVEL_WIDTH + GROUND_WIDTH)).abs() < f64::EPSILON
        );
        // The cascade placed obstacles over the new span.
        assert!(!s.obstacles.cacti.is_empty());
        assert!(s
            .terrain
            .covers(s.camera.left_bound(), s.camera.left_bound() + SCREEN_WIDTH));
    }

    #[test]
    fn test_clouds_drift_and_recycle_off_left_edge() {
        let (mut s, mut rng) = session(12);
        s.clouds[0].left = -s.clouds[0].width() - 1.0;
        let lefts: Vec<f64> = s.clouds.iter().map(|c| c.left).collect();

        s.update(DT, &mut rng);

        assert!(
            s.clouds[0].left > SCREEN_WIDTH - s.clouds[0].width(),
            "off-screen cloud must re-enter from the right"
        );
        assert!(s.clouds[0].top >= CLOUD_TOP_MIN && s.clouds[0].top <= CLOUD_TOP_MAX);
        for (i, cloud) in s.clouds.iter().enumerate().skip(1) {
            assert!(
                (cloud.left - (lefts[i] + CLOUD_SPEED)).abs() < f64::EPSILON,
                "remaining clouds only drift"
            );
        }
    }

    #[test]
    fn test_anim_offset_follows_elapsed_time() {
        let (mut s, mut rng) = session(13);
        for _ in 0..30 {
            s.update(DT, &mut rng);
        }
        assert_eq!(s.anim_offset, (s.elapsed_time * ANIM_CLOCK_HZ) as u64);
        assert_eq!(s.player.texture, textures::dino_texture(s.player.state, s.anim_offset));
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let (mut a, mut rng_a) = session(99);
        let (mut b, mut rng_b) = session(99);
        for _ in 0..200 {
            a.update(DT, &mut rng_a);
            b.update(DT, &mut rng_b);
        }
        assert_eq!(a.mode, b.mode);
        assert!((a.player.x - b.player.x).abs() < f64::EPSILON);
        assert_eq!(a.score, b.score);
        assert_eq!(a.obstacles.cacti.len(), b.obstacles.cacti.len());
    }
}
