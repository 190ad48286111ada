//! Turns the game state into pixels and text labels.
//!
//! Play-area units are stretched over the whole buffer, so the scene scales
//! with the terminal.

use crate::difficulty::Difficulty;
use crate::game::{BIRD_LEFT, BIRD_RIGHT, Bird, Game, Obstacle, Run, Screen};
use crate::render::{Label, PixelBuf, Rgb, SHADOW, WHITE, draw_number};

const SKY_TOP: Rgb = Rgb(70, 180, 200);
const SKY_BOT: Rgb = Rgb(190, 232, 245);
const GRASS: Rgb = Rgb(84, 168, 55);
const GRASS_LIGHT: Rgb = Rgb(110, 200, 70);
const DIRT: Rgb = Rgb(210, 185, 110);
const DIRT_DARK: Rgb = Rgb(185, 160, 90);
const PIPE_L: Rgb = Rgb(74, 122, 26);
const PIPE_M: Rgb = Rgb(100, 170, 40);
const PIPE_R: Rgb = Rgb(115, 191, 46);
const PIPE_HI: Rgb = Rgb(145, 215, 62);
const CAP_DARK: Rgb = Rgb(60, 100, 20);
const BIRD_Y: Rgb = Rgb(245, 200, 66);
const BIRD_HI: Rgb = Rgb(255, 225, 100);
const BIRD_WING: Rgb = Rgb(215, 165, 35);
const BIRD_EYE: Rgb = Rgb(255, 255, 255);
const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
const BIRD_BEAK: Rgb = Rgb(225, 75, 35);
const HILL_FAR: Rgb = Rgb(120, 195, 75);
const HILL_NEAR: Rgb = Rgb(95, 175, 55);

const CARD: Rgb = Rgb(245, 248, 252);
const INK_BLUE: Rgb = Rgb(37, 99, 235);
const INK_GRAY: Rgb = Rgb(75, 85, 99);
const INK_GREEN: Rgb = Rgb(22, 163, 74);
const INK_RED: Rgb = Rgb(220, 38, 38);
const INK_AMBER: Rgb = Rgb(217, 119, 6);

/// Top of the ground strip, in play-area units.
const GROUND_TOP: f64 = 87.0;
const CAP_HEIGHT: f64 = 4.0;
const CARD_LEFT: f64 = 22.0;
const CARD_RIGHT: f64 = 78.0;
const TITLE_BIRD_Y: f64 = 20.0;

// (x, y, radius) in play-area units
const CLOUDS: [(f64, f64, f64); 3] = [(10.0, 10.0, 5.0), (78.0, 22.0, 4.0), (35.0, 58.0, 6.0)];

/// Maps play-area units onto buffer pixels.
#[derive(Debug, Clone, Copy)]
struct Area {
    w: f64,
    h: f64,
}

impl Area {
    fn of(buf: &PixelBuf) -> Self {
        Self {
            w: buf.width() as f64,
            h: buf.height() as f64,
        }
    }

    fn x(&self, u: f64) -> i32 {
        (u / 100.0 * self.w).round() as i32
    }

    fn y(&self, u: f64) -> i32 {
        (u / 100.0 * self.h).round() as i32
    }

    /// Terminal row holding the pixel row at `u`.
    fn row(&self, u: f64) -> u16 {
        (self.y(u).max(0) / 2) as u16
    }

    fn cols(&self) -> u16 {
        self.w as u16
    }

    fn rows(&self) -> u16 {
        (self.h / 2.0) as u16
    }

    /// Pixel size relative to a 48-pixel-tall screen.
    fn scale(&self) -> f64 {
        (self.h / 48.0).max(0.5)
    }
}

// ── Pixels ──────────────────────────────────────────────────────────────────

/// Draws the scene for the current screen. `frame` drives idle animation.
pub fn draw(game: &Game, frame: u64, buf: &mut PixelBuf) {
    let area = Area::of(buf);
    let scroll = match game.run() {
        Some(run) => run.ticks() as f64 * run.profile().speed,
        None => frame as f64 * 0.5,
    };

    draw_sky(buf, area);
    draw_clouds(buf, area, frame);
    draw_hills(buf, area, scroll);

    match game.screen() {
        Screen::Idle | Screen::DifficultySelect => {
            draw_ground(buf, area, scroll);
            let bird = Bird {
                y: TITLE_BIRD_Y + (frame as f64 * 0.08).sin() * 3.0,
                velocity: 0.0,
            };
            draw_bird(buf, area, &bird, frame);
            draw_card(buf, area, 22.0, 76.0);
        }
        Screen::Playing(run) => {
            draw_run(buf, area, run, frame);
            draw_number(buf, area.x(50.0), area.y(6.0), run.score(), WHITE);
        }
        Screen::GameOver(run) => {
            draw_run(buf, area, run, frame);
            buf.darken();
            draw_card(buf, area, 26.0, 64.0);
            draw_number(buf, area.x(50.0), area.y(6.0), run.score(), WHITE);
        }
    }
}

fn draw_run(buf: &mut PixelBuf, area: Area, run: &Run, frame: u64) {
    let gap_size = run.profile().gap_size;
    for obstacle in &run.obstacles {
        draw_obstacle(buf, area, obstacle, gap_size);
    }
    draw_ground(buf, area, run.ticks() as f64 * run.profile().speed);
    draw_bird(buf, area, &run.bird, frame);
}

fn draw_sky(buf: &mut PixelBuf, area: Area) {
    let sky_h = area.y(GROUND_TOP).max(1);
    for y in 0..sky_h {
        let t = (y * 256 / sky_h) as u16;
        let c = Rgb::lerp(SKY_TOP, SKY_BOT, t);
        buf.fill_rect(0, y, area.w as i32, 1, c);
    }
}

fn draw_clouds(buf: &mut PixelBuf, area: Area, frame: u64) {
    for (i, &(x, y, r)) in CLOUDS.iter().enumerate() {
        let float = (frame as f64 * 0.05 + i as f64 * 2.0).sin() * 1.5;
        let cx = area.x(x);
        let cy = area.y(y + float);
        let radius = (area.x(r) - area.x(0.0)).max(1);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let (px, py) = (cx + dx, cy + dy);
                if px < 0 || py < 0 || px >= area.w as i32 || py >= area.h as i32 {
                    continue;
                }
                let c = buf.get(px as usize, py as usize);
                buf.set(px, py, Rgb::lerp(c, WHITE, 90));
            }
        }
    }
}

fn draw_hills(buf: &mut PixelBuf, area: Area, scroll: f64) {
    let base = area.y(GROUND_TOP);
    let scale = area.scale();
    // Far hills
    for x in 0..area.w as i32 {
        let fx = (x as f64 + scroll * 0.2) * 0.04;
        let h = (fx.sin() * 6.0 + (fx * 1.7).sin() * 3.0) * scale;
        let top = base - h as i32 - (4.0 * scale) as i32;
        for y in top..base {
            buf.set(x, y, HILL_FAR);
        }
    }
    // Near hills
    for x in 0..area.w as i32 {
        let fx = (x as f64 + scroll * 0.4) * 0.06;
        let h = (fx.sin() * 4.0 + (fx * 2.3).sin() * 2.0) * scale;
        let top = base - h as i32 - (2.0 * scale) as i32;
        for y in top..base {
            buf.set(x, y, HILL_NEAR);
        }
    }
}

fn draw_ground(buf: &mut PixelBuf, area: Area, scroll: f64) {
    let gy = area.y(GROUND_TOP);
    for x in 0..area.w as i32 {
        let alt = ((x as f64 + scroll) as i32 / 3) % 2 == 0;
        buf.set(x, gy, if alt { GRASS } else { GRASS_LIGHT });
        buf.set(x, gy + 1, GRASS);
    }
    for y in (gy + 2)..area.h as i32 {
        for x in 0..area.w as i32 {
            let stripe = ((x as f64 + scroll * 0.8) as i32 + (y - gy) * 2).rem_euclid(12) < 6;
            buf.set(x, y, if stripe { DIRT } else { DIRT_DARK });
        }
    }
}

fn draw_obstacle(buf: &mut PixelBuf, area: Area, obstacle: &Obstacle, gap_size: f64) {
    let px = area.x(obstacle.x);
    let pw = (area.x(obstacle.right()) - px).max(1);
    let gap_top = area.y(obstacle.gap_y);
    let gap_bot = area.y(obstacle.gap_y + gap_size);
    let cap_h = area.y(CAP_HEIGHT).max(1);
    let cap_extra = (pw / 6).max(1);

    // Top body
    for x in 0..pw {
        let c = pipe_shade(x, pw);
        for y in 0..gap_top - cap_h {
            buf.set(px + x, y, c);
        }
    }
    // Top cap
    for x in -cap_extra..(pw + cap_extra) {
        let c = pipe_shade(x + cap_extra, pw + cap_extra * 2);
        for y in (gap_top - cap_h)..gap_top {
            buf.set(px + x, y, c);
        }
        buf.set(px + x, gap_top - 1, CAP_DARK);
    }
    // Bottom cap
    for x in -cap_extra..(pw + cap_extra) {
        let c = pipe_shade(x + cap_extra, pw + cap_extra * 2);
        for y in gap_bot..(gap_bot + cap_h) {
            buf.set(px + x, y, c);
        }
        buf.set(px + x, gap_bot, CAP_DARK);
    }
    // Bottom body, the ground is drawn over its foot
    for x in 0..pw {
        let c = pipe_shade(x, pw);
        for y in (gap_bot + cap_h)..area.h as i32 {
            buf.set(px + x, y, c);
        }
    }
}

fn draw_bird(buf: &mut PixelBuf, area: Area, bird: &Bird, frame: u64) {
    let x0 = area.x(BIRD_LEFT);
    let x1 = area.x(BIRD_RIGHT).max(x0 + 2);
    let y0 = area.y(bird.top());
    let y1 = area.y(bird.bottom()).max(y0 + 2);
    let (w, h) = (x1 - x0, y1 - y0);

    // Nose tilts with velocity, capped at 45 degrees down
    let degrees = (bird.velocity * 3.0).min(45.0);
    let tilt = (degrees / 30.0).round().clamp(-1.0, 1.0) as i32;

    // Body
    buf.fill_rect(x0, y0 + 1, w, h - 2, BIRD_Y);
    buf.fill_rect(x0 + 1, y0, w - 2, 1, BIRD_HI);
    buf.fill_rect(x0 + 1, y1 - 1, w - 2, 1, BIRD_Y);

    // Wing
    let wing_y = y0 + h / 2 + if frame % 8 < 4 { -1 } else { 0 };
    buf.fill_rect(x0, wing_y, (w / 2).max(1), (h / 4).max(1), BIRD_WING);

    // Eye
    let ex = x1 - (w / 3).max(1) - 1;
    let ey = y0 + (h / 4).max(1);
    buf.fill_rect(ex, ey, 2, 2, BIRD_EYE);
    buf.set(ex + 1, ey + 1, BIRD_PUPIL);

    // Beak
    let beak_y = y0 + h / 2 + tilt;
    buf.fill_rect(x1, beak_y, (w / 3).max(1), (h / 5).max(1), BIRD_BEAK);

    // Tail
    buf.fill_rect(x0 - 1, y0 + h / 2 - 1 - tilt, 1, 2, BIRD_WING);
}

fn draw_card(buf: &mut PixelBuf, area: Area, top: f64, bottom: f64) {
    let x = area.x(CARD_LEFT);
    let y = area.y(top);
    let w = area.x(CARD_RIGHT) - x;
    let h = area.y(bottom) - y;
    buf.fill_rect(x - 1, y - 1, w + 2, h + 2, SHADOW);
    buf.fill_rect(x, y, w, h, CARD);
}

fn pipe_shade(x: i32, total_w: i32) -> Rgb {
    if total_w <= 1 {
        return PIPE_M;
    }
    let t = (x.max(0) as f64 / (total_w - 1) as f64 * 256.0) as u16;
    if t < 64 {
        Rgb::lerp(PIPE_L, PIPE_M, (t * 4).min(256))
    } else if t < 100 {
        Rgb::lerp(PIPE_M, PIPE_HI, ((t - 64) * 7).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_HI, PIPE_R, ((t - 100) * 4).min(256))
    } else {
        Rgb::lerp(PIPE_R, PIPE_L, ((t - 160) * 3).min(256))
    }
}

// ── Labels ──────────────────────────────────────────────────────────────────

/// Text for the current screen, drawn after the pixels.
pub fn labels(game: &Game, buf: &PixelBuf) -> Vec<Label> {
    let area = Area::of(buf);
    let cols = area.cols();
    let card = |at: f64, text: String, fg: Rgb| Label::centered(cols, area.row(at), text, fg, CARD);

    match game.screen() {
        Screen::Idle => vec![
            card(27.0, "FLAPPY BIRD".into(), INK_BLUE),
            card(35.0, "Help the bird fly between the trees".into(), INK_GRAY),
            card(43.0, "Click or press Space to flap".into(), INK_GRAY),
            card(51.0, format!("Best: {}", game.high_score()), INK_GREEN),
            card(61.0, "[Enter] Start game".into(), INK_BLUE),
            card(69.0, sound_hint(game), INK_GRAY),
        ],
        Screen::DifficultySelect => {
            let mut labels = vec![
                card(27.0, "Choose a level".into(), INK_BLUE),
                card(35.0, "Harder levels bring faster trees".into(), INK_GRAY),
            ];
            for (i, difficulty) in Difficulty::ALL.into_iter().enumerate() {
                labels.push(card(
                    45.0 + i as f64 * 7.0,
                    difficulty_option(difficulty, difficulty == game.difficulty()),
                    difficulty.profile().accent,
                ));
            }
            labels.push(card(69.0, "[Esc] Back".into(), INK_GRAY));
            labels
        }
        Screen::Playing(run) => {
            let mut labels = hud(game, run, area);
            labels.push(Label::centered(
                cols,
                area.rows().saturating_sub(1),
                "Space or click to flap",
                SHADOW,
                DIRT,
            ));
            labels
        }
        Screen::GameOver(run) => {
            let mut labels = hud(game, run, area);
            labels.push(card(31.0, "Game over!".into(), INK_RED));
            labels.push(card(39.0, format!("Score: {}", run.score()), INK_GRAY));
            if game.is_new_record() {
                labels.push(card(47.0, "New record!".into(), INK_AMBER));
            }
            labels.push(card(56.0, "[r] Try again   [q] Quit".into(), INK_BLUE));
            labels
        }
    }
}

fn hud(game: &Game, run: &Run, area: Area) -> Vec<Label> {
    let cols = area.cols();
    let score = format!(" Score: {} ", run.score());
    let best = format!(" Best: {} ", game.high_score());
    let sound = if game.is_muted() { " sound off " } else { " sound on " };
    let best_col = cols.saturating_sub(best.chars().count() as u16 + 1);
    vec![
        Label::new(1, 0, score, INK_BLUE, CARD),
        Label::new(best_col, 0, best, INK_AMBER, CARD),
        Label::centered(cols, 1, sound, INK_GRAY, CARD),
    ]
}

fn difficulty_option(difficulty: Difficulty, selected: bool) -> String {
    let profile = difficulty.profile();
    let marker = if selected { '>' } else { ' ' };
    format!(
        "{marker} [{}] {} {}",
        difficulty.hotkey(),
        profile.icon,
        profile.label
    )
}

fn sound_hint(game: &Game) -> String {
    let state = if game.is_muted() { "off" } else { "on" };
    format!("[s] Sound {state}   [q] Quit")
}
