//! Game state, the run lifecycle and the fixed-tick simulation.
//!
//! Positions are in play-area percent units: `x` grows to the right, `y`
//! grows downward, both span 0..100.

use std::mem;
use std::time::Duration;

use log::{debug, info, warn};
use rand::Rng;

use crate::audio::{Audio, Tone};
use crate::difficulty::{Difficulty, Profile};
use crate::store::{HIGH_SCORE_KEY, HighScoreStore};
use crate::timer::RepeatingTimer;

// ── Play area ───────────────────────────────────────────────────────────────

pub const BIRD_LEFT: f64 = 15.0;
pub const BIRD_RIGHT: f64 = 20.0;
pub const BIRD_HEIGHT: f64 = 8.0;
pub const BIRD_START_Y: f64 = 50.0;
pub const BIRD_MIN_Y: f64 = 0.0;
pub const BIRD_MAX_Y: f64 = 90.0;

pub const GRAVITY: f64 = 0.5;
pub const JUMP_VELOCITY: f64 = -8.0;

pub const OBSTACLE_WIDTH: f64 = 8.0;
pub const OBSTACLE_SPAWN_X: f64 = 100.0;
pub const OBSTACLE_DESPAWN_X: f64 = -10.0;
pub const GAP_Y_MIN: f64 = 15.0;
pub const GAP_Y_SPAN: f64 = 50.0;

pub const DEFAULT_TICK: Duration = Duration::from_millis(30);

// ── Entities ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Top edge.
    pub y: f64,
    pub velocity: f64,
}

impl Bird {
    fn new() -> Self {
        Self {
            y: BIRD_START_Y,
            velocity: 0.0,
        }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + BIRD_HEIGHT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u64,
    /// Left edge.
    pub x: f64,
    /// Top of the gap.
    pub gap_y: f64,
    pub scored: bool,
}

impl Obstacle {
    pub fn right(&self) -> f64 {
        self.x + OBSTACLE_WIDTH
    }

    /// Whether the obstacle's solid region overlaps the bird. Edges that
    /// exactly touch do not count.
    pub fn hits(&self, bird: &Bird, gap_size: f64) -> bool {
        let overlaps_x = self.x < BIRD_RIGHT && self.right() > BIRD_LEFT;
        overlaps_x && (bird.top() < self.gap_y || bird.bottom() > self.gap_y + gap_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    OutOfBounds,
    Obstacle(u64),
}

/// What a tick produced, for the caller to turn into sound and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Scored { obstacle: u64, score: u32 },
    Crashed(Crash),
}

// ── Run ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Clock {
    tick: RepeatingTimer,
    spawn: RepeatingTimer,
}

/// One playthrough. Owns its timers; they are cleared the moment the run
/// ends and dropped with it.
#[derive(Debug, Clone)]
pub struct Run {
    difficulty: Difficulty,
    profile: Profile,
    pub bird: Bird,
    pub obstacles: Vec<Obstacle>,
    score: u32,
    ticks: u64,
    next_id: u64,
    clock: Option<Clock>,
    crash: Option<Crash>,
}

impl Run {
    pub fn new(difficulty: Difficulty, tick_interval: Duration) -> Self {
        let profile = difficulty.profile();
        Self {
            difficulty,
            profile,
            bird: Bird::new(),
            obstacles: Vec::new(),
            score: 0,
            ticks: 0,
            next_id: 0,
            clock: Some(Clock {
                tick: RepeatingTimer::new(tick_interval),
                spawn: RepeatingTimer::new(profile.spawn_interval),
            }),
            crash: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of ticks simulated so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn crash(&self) -> Option<Crash> {
        self.crash
    }

    pub fn is_over(&self) -> bool {
        self.crash.is_some()
    }

    /// Whether the run's timers are still live.
    pub fn timers_active(&self) -> bool {
        self.clock.is_some()
    }

    /// Sets the upward impulse. Returns false once the run is over.
    pub fn jump(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.bird.velocity = JUMP_VELOCITY;
        true
    }

    /// Feeds `dt` of wall-clock time to the timers and runs every tick and
    /// spawn that falls due, in time order. On a tie the tick goes first.
    pub fn advance<R: Rng>(&mut self, dt: Duration, rng: &mut R) -> Vec<Event> {
        let mut events = Vec::new();
        let mut remaining = dt;

        while let Some(clock) = self.clock.as_mut() {
            let step = clock.tick.remaining().min(clock.spawn.remaining());
            if step > remaining {
                clock.tick.wait(remaining);
                clock.spawn.wait(remaining);
                break;
            }
            remaining -= step;
            clock.tick.wait(step);
            clock.spawn.wait(step);
            let tick_due = clock.tick.take_due();
            let spawn_due = clock.spawn.take_due();

            if tick_due {
                events.extend(self.tick());
            }
            if spawn_due && !self.is_over() {
                self.spawn(rng);
            }
        }
        events
    }

    /// One simulation step: move the bird, apply gravity, scroll and prune
    /// obstacles, score passed obstacles, then test for collision.
    pub fn tick(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }
        self.ticks += 1;

        let y = self.bird.y + self.bird.velocity;
        if !(BIRD_MIN_Y..=BIRD_MAX_Y).contains(&y) {
            events.push(self.end(Crash::OutOfBounds));
            return events;
        }
        self.bird.y = y;
        self.bird.velocity += GRAVITY;

        let speed = self.profile.speed;
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
        self.obstacles.retain(|o| o.x > OBSTACLE_DESPAWN_X);

        for obstacle in &mut self.obstacles {
            // Measured against the bird's far edge: until then the two still overlap.
            if !obstacle.scored && obstacle.right() < BIRD_LEFT {
                obstacle.scored = true;
                self.score += 1;
                events.push(Event::Scored {
                    obstacle: obstacle.id,
                    score: self.score,
                });
            }
        }

        let gap_size = self.profile.gap_size;
        let hit = self
            .obstacles
            .iter()
            .find(|o| o.hits(&self.bird, gap_size))
            .map(|o| o.id);
        if let Some(id) = hit {
            events.push(self.end(Crash::Obstacle(id)));
        }

        events
    }

    /// Appends an obstacle at the right edge with a random gap.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) {
        let gap_y = rng.gen_range(GAP_Y_MIN..GAP_Y_MIN + GAP_Y_SPAN);
        self.obstacles.push(Obstacle {
            id: self.next_id,
            x: OBSTACLE_SPAWN_X,
            gap_y,
            scored: false,
        });
        self.next_id += 1;
    }

    fn end(&mut self, crash: Crash) -> Event {
        self.crash = Some(crash);
        self.clock = None;
        Event::Crashed(crash)
    }
}

// ── Lifecycle ───────────────────────────────────────────────────────────────

/// What the player is looking at. `GameOver` keeps the finished run so its
/// last frame stays on screen.
#[derive(Debug, Clone)]
pub enum Screen {
    Idle,
    DifficultySelect,
    Playing(Run),
    GameOver(Run),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    DifficultySelect,
    Playing,
    GameOver,
}

/// Input normalised away from keys and mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,
    Start,
    Select(Difficulty),
    Back,
    Retry,
    ToggleMute,
    Quit,
}

pub struct Game {
    screen: Screen,
    difficulty: Difficulty,
    high_score: u32,
    tick_interval: Duration,
    store: Box<dyn HighScoreStore>,
    audio: Audio,
}

impl Game {
    pub fn new(
        store: Box<dyn HighScoreStore>,
        audio: Audio,
        difficulty: Difficulty,
        tick_interval: Duration,
    ) -> Self {
        let high_score = store.get(HIGH_SCORE_KEY).unwrap_or(0);
        debug!("Loaded high score {high_score}");
        Self {
            screen: Screen::Idle,
            difficulty,
            high_score,
            tick_interval,
            store,
            audio,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn mode(&self) -> Mode {
        match self.screen {
            Screen::Idle => Mode::Idle,
            Screen::DifficultySelect => Mode::DifficultySelect,
            Screen::Playing(_) => Mode::Playing,
            Screen::GameOver(_) => Mode::GameOver,
        }
    }

    /// The current or just-finished run.
    pub fn run(&self) -> Option<&Run> {
        match &self.screen {
            Screen::Playing(run) | Screen::GameOver(run) => Some(run),
            _ => None,
        }
    }

    pub fn run_mut(&mut self) -> Option<&mut Run> {
        match &mut self.screen {
            Screen::Playing(run) | Screen::GameOver(run) => Some(run),
            _ => None,
        }
    }

    pub fn score(&self) -> u32 {
        self.run().map_or(0, Run::score)
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Difficulty the next run will use.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_muted(&self) -> bool {
        self.audio.is_muted()
    }

    /// True on the game-over screen when the run set the high score.
    pub fn is_new_record(&self) -> bool {
        match &self.screen {
            Screen::GameOver(run) => run.score() > 0 && run.score() == self.high_score,
            _ => false,
        }
    }

    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Jump => self.jump(),
            Action::Start => self.open_difficulty_select(),
            Action::Select(difficulty) => self.select(difficulty),
            Action::Back => self.back(),
            Action::Retry => self.retry(),
            Action::ToggleMute => self.toggle_mute(),
            Action::Quit => {}
        }
    }

    /// Starts a run from the menus, flaps while playing, ignored after a
    /// crash.
    pub fn jump(&mut self) {
        if matches!(self.screen, Screen::Idle | Screen::DifficultySelect) {
            self.start_run();
        } else if let Screen::Playing(run) = &mut self.screen {
            if run.jump() {
                self.audio.play(Tone::JUMP);
            }
        }
    }

    pub fn open_difficulty_select(&mut self) {
        if matches!(self.screen, Screen::Idle) {
            self.screen = Screen::DifficultySelect;
        }
    }

    /// Picks a difficulty and starts a run with it.
    pub fn select(&mut self, difficulty: Difficulty) {
        if matches!(self.screen, Screen::Idle | Screen::DifficultySelect) {
            self.difficulty = difficulty;
            self.start_run();
        }
    }

    pub fn back(&mut self) {
        if matches!(self.screen, Screen::DifficultySelect) {
            self.screen = Screen::Idle;
        }
    }

    /// Leaves the game-over screen. The difficulty is kept.
    pub fn retry(&mut self) {
        if matches!(self.screen, Screen::GameOver(_)) {
            self.screen = Screen::Idle;
        }
    }

    pub fn toggle_mute(&mut self) {
        let muted = self.audio.toggle_mute();
        debug!("Sound {}", if muted { "off" } else { "on" });
    }

    /// Advances the active run by `dt` and applies what happened.
    pub fn update<R: Rng>(&mut self, dt: Duration, rng: &mut R) -> Vec<Event> {
        let Screen::Playing(run) = &mut self.screen else {
            return Vec::new();
        };
        let events = run.advance(dt, rng);

        for event in &events {
            match *event {
                Event::Scored { score, .. } => {
                    self.audio.play(Tone::SCORE);
                    self.record_score(score);
                }
                Event::Crashed(crash) => {
                    self.audio.play(Tone::FAIL);
                    self.finish_run(crash);
                }
            }
        }
        events
    }

    fn start_run(&mut self) {
        info!("Starting {} run", self.difficulty);
        self.screen = Screen::Playing(Run::new(self.difficulty, self.tick_interval));
        self.audio.play(Tone::START);
    }

    fn finish_run(&mut self, crash: Crash) {
        if let Screen::Playing(run) = mem::replace(&mut self.screen, Screen::Idle) {
            info!(
                "Run over ({crash:?}) on {} with score {}, best {}",
                run.difficulty(),
                run.score(),
                self.high_score
            );
            self.screen = Screen::GameOver(run);
        }
    }

    fn record_score(&mut self, score: u32) {
        if score <= self.high_score {
            return;
        }
        self.high_score = score;
        debug!("New high score {score}");
        if let Err(err) = self.store.set(HIGH_SCORE_KEY, score) {
            warn!("Could not save high score: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn playing_run() -> Run {
        Run::new(Difficulty::Medium, DEFAULT_TICK)
    }

    fn obstacle(id: u64, x: f64, gap_y: f64) -> Obstacle {
        Obstacle {
            id,
            x,
            gap_y,
            scored: false,
        }
    }

    fn new_game() -> Game {
        Game::new(
            Box::new(MemoryStore::default()),
            Audio::silent(),
            Difficulty::Medium,
            DEFAULT_TICK,
        )
    }

    #[test]
    fn test_tick_applies_velocity_then_gravity() {
        let mut run = playing_run();
        run.bird.velocity = 2.0;
        run.tick();
        assert_eq!(run.bird.y, 52.0);
        assert_eq!(run.bird.velocity, 2.5);
    }

    #[test]
    fn test_leaving_bounds_ends_run_and_keeps_position() {
        let mut run = playing_run();
        run.bird.y = 88.0;
        run.bird.velocity = 3.0;
        let events = run.tick();
        assert_eq!(events, vec![Event::Crashed(Crash::OutOfBounds)]);
        assert_eq!(run.bird.y, 88.0);
        assert_eq!(run.bird.velocity, 3.0);
        assert!(!run.timers_active());
    }

    #[test]
    fn test_ceiling_is_terminal() {
        let mut run = playing_run();
        run.bird.y = 1.0;
        run.bird.velocity = -2.0;
        run.tick();
        assert_eq!(run.crash(), Some(Crash::OutOfBounds));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut run = playing_run();
        run.bird.y = 86.0;
        run.bird.velocity = 4.0;
        assert!(run.tick().is_empty());
        assert_eq!(run.bird.y, 90.0);
    }

    #[test]
    fn test_obstacles_scroll_by_profile_speed_and_are_pruned() {
        let mut run = playing_run();
        run.obstacles.push(obstacle(0, -8.0, 40.0));
        run.obstacles.push(obstacle(1, 60.0, 40.0));
        run.bird.velocity = -0.25;
        run.tick();
        assert_eq!(run.obstacles.len(), 1);
        assert_eq!(run.obstacles[0].id, 1);
        assert_eq!(run.obstacles[0].x, 58.0);
    }

    #[test]
    fn test_obstacle_scores_once() {
        let mut run = playing_run();
        // Right edge at 15.5: one step of 2.0 puts it behind the bird.
        run.obstacles.push(obstacle(4, 7.5, 40.0));
        run.bird.y = 45.0;

        let events = run.tick();
        assert_eq!(
            events,
            vec![Event::Scored {
                obstacle: 4,
                score: 1
            }]
        );
        run.bird.velocity = 0.0;
        assert!(run.tick().is_empty());
        assert_eq!(run.score(), 1);
    }

    #[test]
    fn test_obstacle_scores_only_once_clear_of_bird() {
        let mut run = playing_run();
        // Right edge lands exactly on the bird's far edge after one step.
        run.obstacles.push(obstacle(2, 9.0, 40.0));
        run.bird.y = 45.0;

        assert!(run.tick().is_empty());
        assert_eq!(run.obstacles[0].right(), BIRD_LEFT);
        assert_eq!(run.score(), 0);

        let events = run.tick();
        assert_eq!(
            events,
            vec![Event::Scored {
                obstacle: 2,
                score: 1
            }]
        );
    }

    #[test]
    fn test_collision_outside_gap() {
        let bird = Bird {
            y: 10.0,
            velocity: 0.0,
        };
        assert!(obstacle(0, 14.0, 30.0).hits(&bird, 25.0));
        // Same column, bird inside the gap.
        let bird = Bird {
            y: 35.0,
            velocity: 0.0,
        };
        assert!(!obstacle(0, 14.0, 30.0).hits(&bird, 25.0));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let bird = Bird {
            y: 0.0,
            velocity: 0.0,
        };
        // Obstacle's left edge exactly at the bird's right edge.
        assert!(!obstacle(0, BIRD_RIGHT, 50.0).hits(&bird, 25.0));
        // Obstacle's right edge exactly at the bird's left edge.
        assert!(!obstacle(0, BIRD_LEFT - OBSTACLE_WIDTH, 50.0).hits(&bird, 25.0));
        // Bird exactly filling the gap.
        let bird = Bird {
            y: 30.0,
            velocity: 0.0,
        };
        assert!(!obstacle(0, 16.0, 30.0).hits(&bird, BIRD_HEIGHT));
    }

    #[test]
    fn test_collision_ends_run() {
        let mut run = playing_run();
        run.obstacles.push(obstacle(9, 17.0, 70.0));
        let events = run.tick();
        assert_eq!(events, vec![Event::Crashed(Crash::Obstacle(9))]);
        assert!(run.is_over());
        assert!(run.tick().is_empty());
    }

    #[test]
    fn test_spawn_gap_range_and_ids() {
        let mut run = playing_run();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            run.spawn(&mut rng);
        }
        assert!(
            run.obstacles
                .iter()
                .all(|o| o.x == OBSTACLE_SPAWN_X && o.gap_y >= 15.0 && o.gap_y < 65.0)
        );
        let ids: Vec<u64> = run.obstacles.iter().map(|o| o.id).collect();
        assert_eq!(ids, (0..200).collect::<Vec<u64>>());
    }

    #[test]
    fn test_advance_interleaves_ticks_and_spawn() {
        let mut run = playing_run();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // Hover so the bird survives: gravity is cancelled each tick.
        run.bird.y = 40.0;
        run.bird.velocity = 0.0;
        let mut elapsed = Duration::ZERO;
        while elapsed < Duration::from_millis(1990) {
            run.bird.velocity = 0.0;
            run.advance(Duration::from_millis(10), &mut rng);
            elapsed += Duration::from_millis(10);
        }
        assert!(run.obstacles.is_empty());
        run.bird.velocity = 0.0;
        run.advance(Duration::from_millis(10), &mut rng);
        assert_eq!(run.ticks(), 66);
        assert_eq!(run.obstacles.len(), 1);
        assert_eq!(run.obstacles[0].x, OBSTACLE_SPAWN_X);
    }

    #[test]
    fn test_advance_stops_after_crash() {
        let mut run = playing_run();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let events = run.advance(Duration::from_secs(10), &mut rng);
        assert_eq!(events, vec![Event::Crashed(Crash::OutOfBounds)]);
        let ticks = run.ticks();
        assert!(run.advance(Duration::from_secs(10), &mut rng).is_empty());
        assert_eq!(run.ticks(), ticks);
        assert!(run.obstacles.is_empty());
    }

    #[test]
    fn test_lifecycle() {
        let mut game = new_game();
        assert_eq!(game.mode(), Mode::Idle);

        game.handle(Action::Start);
        assert_eq!(game.mode(), Mode::DifficultySelect);
        game.handle(Action::Back);
        assert_eq!(game.mode(), Mode::Idle);

        game.handle(Action::Start);
        game.handle(Action::Select(Difficulty::Hard));
        assert_eq!(game.mode(), Mode::Playing);
        assert_eq!(game.run().unwrap().difficulty(), Difficulty::Hard);

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        game.update(Duration::from_secs(5), &mut rng);
        assert_eq!(game.mode(), Mode::GameOver);

        game.handle(Action::Retry);
        assert_eq!(game.mode(), Mode::Idle);
        assert_eq!(game.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_jump_from_idle_starts_with_selected_difficulty() {
        let mut game = new_game();
        game.handle(Action::Jump);
        assert_eq!(game.mode(), Mode::Playing);
        let run = game.run().unwrap();
        assert_eq!(run.difficulty(), Difficulty::Medium);
        assert_eq!(run.bird.y, BIRD_START_Y);
        assert_eq!(run.bird.velocity, 0.0);
        assert_eq!(run.score(), 0);
    }

    #[test]
    fn test_jump_sets_exact_impulse() {
        let mut game = new_game();
        game.handle(Action::Jump);
        if let Screen::Playing(run) = &mut game.screen {
            run.bird.velocity = 6.5;
        }
        game.handle(Action::Jump);
        assert_eq!(game.run().unwrap().bird.velocity, JUMP_VELOCITY);
    }

    #[test]
    fn test_jump_after_crash_is_ignored() {
        let mut game = new_game();
        game.handle(Action::Jump);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        game.update(Duration::from_secs(5), &mut rng);
        assert_eq!(game.mode(), Mode::GameOver);

        let before = game.run().unwrap().bird;
        game.handle(Action::Jump);
        assert_eq!(game.mode(), Mode::GameOver);
        assert_eq!(game.run().unwrap().bird, before);
    }

    #[test]
    fn test_score_raises_and_persists_high_score() {
        let mut game = new_game();
        game.handle(Action::Jump);
        if let Screen::Playing(run) = &mut game.screen {
            run.bird.y = 45.0;
            run.obstacles.push(obstacle(0, 7.5, 40.0));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let events = game.update(DEFAULT_TICK, &mut rng);
        assert_eq!(
            events,
            vec![Event::Scored {
                obstacle: 0,
                score: 1
            }]
        );
        assert_eq!(game.high_score(), 1);
        assert_eq!(game.store.get(HIGH_SCORE_KEY), Some(1));
    }

    struct FailingStore;

    impl HighScoreStore for FailingStore {
        fn get(&self, _key: &str) -> Option<u32> {
            None
        }

        fn set(&mut self, _key: &str, _value: u32) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    #[test]
    fn test_failed_save_keeps_run_going() {
        let mut game = Game::new(
            Box::new(FailingStore),
            Audio::silent(),
            Difficulty::Medium,
            DEFAULT_TICK,
        );
        game.handle(Action::Jump);
        if let Some(run) = game.run_mut() {
            run.bird.y = 45.0;
            run.obstacles.push(obstacle(0, 7.5, 40.0));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let events = game.update(DEFAULT_TICK, &mut rng);
        assert_eq!(
            events,
            vec![Event::Scored {
                obstacle: 0,
                score: 1
            }]
        );
        assert_eq!(game.mode(), Mode::Playing);
        assert_eq!(game.high_score(), 1);
        assert!(game.run().unwrap().timers_active());
    }

    #[test]
    fn test_high_score_loaded_and_not_lowered() {
        let mut store = MemoryStore::default();
        store.set(HIGH_SCORE_KEY, 9).unwrap();
        let mut game = Game::new(
            Box::new(store),
            Audio::silent(),
            Difficulty::Easy,
            DEFAULT_TICK,
        );
        assert_eq!(game.high_score(), 9);

        game.record_score(4);
        assert_eq!(game.high_score(), 9);
        assert_eq!(game.store.get(HIGH_SCORE_KEY), Some(9));
    }

    #[test]
    fn test_select_ignored_while_playing() {
        let mut game = new_game();
        game.handle(Action::Select(Difficulty::Easy));
        game.handle(Action::Select(Difficulty::Hard));
        assert_eq!(game.run().unwrap().difficulty(), Difficulty::Easy);
        assert_eq!(game.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_toggle_mute() {
        let mut game = new_game();
        assert!(!game.is_muted());
        game.handle(Action::ToggleMute);
        assert!(game.is_muted());
    }
}
