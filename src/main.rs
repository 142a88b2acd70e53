//! Terminal snake runner (default binary).
//!
//! Owns the scheduler the simulation itself deliberately does not have: the
//! tick timer runs only while the game phase is `Running`, input events are
//! routed between ticks, and crossterm focus events drive the
//! container-activity signal (losing focus force-pauses; regaining it never
//! auto-resumes). On game over the loop switches into a name prompt and then
//! records the score on the leaderboard.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

use tui_snake::core::{Grid, SnakeGame, TickOutcome};
use tui_snake::input::{handle_key_event, should_quit, SwipeOutcome, SwipeTracker};
use tui_snake::store::{Leaderboard, DEFAULT_STORE_FILE};
use tui_snake::term::{GameView, Overlay, TerminalRenderer, Viewport};
use tui_snake::types::{GameAction, GamePhase, WallMode, GRID_SIZE, TICK_MS};

/// Poll timeout while the tick timer is disarmed
const IDLE_POLL_MS: u64 = 250;

/// Swipe threshold in terminal cells (coarser than pixels)
const CELL_SWIPE_THRESHOLD: i32 = 2;

const MAX_NAME_LEN: usize = 16;

#[derive(Debug, Clone)]
struct Options {
    wall_mode: WallMode,
    grid_size: i8,
    seed: u32,
    store_path: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            wall_mode: WallMode::Solid,
            grid_size: GRID_SIZE,
            seed: time_seed(),
            store_path: DEFAULT_STORE_FILE.to_string(),
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn parse_args() -> Result<Option<Options>> {
    let mut opts = Options::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--wrap" => opts.wall_mode = WallMode::Wrap,
            "--seed" => {
                let v = args.next().unwrap_or_default();
                opts.seed = v.parse().map_err(|_| anyhow::anyhow!("--seed needs a number, got {v:?}"))?;
            }
            "--grid" => {
                let v = args.next().unwrap_or_default();
                let size: i8 = v
                    .parse()
                    .map_err(|_| anyhow::anyhow!("--grid needs a number, got {v:?}"))?;
                if !(8..=32).contains(&size) {
                    bail!("--grid must be between 8 and 32");
                }
                opts.grid_size = size;
            }
            "--store" => match args.next() {
                Some(path) => opts.store_path = path,
                None => bail!("--store needs a path"),
            },
            "-h" | "--help" => {
                print_help();
                return Ok(None);
            }
            other => bail!("unknown argument {other:?} (try --help)"),
        }
    }
    Ok(Some(opts))
}

fn print_help() {
    println!(
        "tui-snake: terminal arcade snake with a local leaderboard

USAGE:
    tui-snake [OPTIONS]

OPTIONS:
    --wrap          wrap at the grid edge instead of losing a life
    --grid <n>      grid side length, 8..=32 (default {GRID_SIZE})
    --seed <n>      RNG seed (default: derived from the clock)
    --store <path>  leaderboard file (default {DEFAULT_STORE_FILE})
    -h, --help      show this help

CONTROLS:
    arrows / wasd   steer            space   pause / resume
    enter / tap     start            r       reset
    mouse drag      swipe-steer      q       quit"
    );
}

/// Pending game-over name prompt
struct NamePrompt {
    score: u32,
    buffer: String,
}

fn main() -> Result<()> {
    let Some(opts) = parse_args()? else {
        return Ok(());
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, opts);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, opts: Options) -> Result<()> {
    let grid = Grid::new(opts.grid_size, opts.wall_mode);
    let mut game = SnakeGame::with_grid(grid, opts.seed);
    let mut leaderboard = Leaderboard::open(&opts.store_path);

    let view = GameView::default();
    let mut swipe = SwipeTracker::with_threshold(CELL_SWIPE_THRESHOLD);
    let mut snap = game.snapshot();
    let mut prompt: Option<NamePrompt> = None;

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();
    let mut was_running = false;

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let overlay = match &prompt {
            Some(p) => Overlay::NameEntry {
                score: p.score,
                buffer: &p.buffer,
            },
            None => Overlay::for_snapshot(&snap),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let scores = leaderboard.top_default();
        let fb = view.render(&snap, &scores, overlay, Viewport::new(w, h));
        term.draw(&fb)?;

        // Re-arm the tick timer on the Paused/NotStarted -> Running edge so a
        // long pause does not burst-tick on resume.
        if game.is_running() && !was_running {
            last_tick = Instant::now();
        }
        was_running = game.is_running();

        // Input with timeout until the next due tick; slow poll when idle.
        let timeout = if game.is_running() {
            tick_duration
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0))
        } else {
            Duration::from_millis(IDLE_POLL_MS)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(p) = prompt.as_mut() {
                        if let Some(done) = prompt_key(p, key.code) {
                            leaderboard.record(&done, p.score);
                            prompt = None;
                        }
                        continue;
                    }
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Mouse(mouse) if prompt.is_none() => {
                    let (col, row) = (mouse.column, mouse.row);
                    match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            let layout = view.layout(snap.grid_size, Viewport::new(w, h));
                            if let Some(button) = layout.pad.and_then(|pad| pad.hit(col, row)) {
                                swipe.cancel();
                                game.apply_action(button.action());
                            } else {
                                swipe.begin(col as i32, row as i32);
                                // Tap-to-start, as on a touch screen
                                if game.phase() == GamePhase::NotStarted {
                                    game.apply_action(GameAction::Start);
                                }
                            }
                        }
                        MouseEventKind::Up(MouseButton::Left) => {
                            match swipe.end(col as i32, row as i32) {
                                Some(SwipeOutcome::Steer(dir)) => {
                                    game.apply_action(GameAction::Steer(dir));
                                }
                                Some(SwipeOutcome::Tap) | None => {}
                            }
                        }
                        _ => {}
                    }
                }
                Event::FocusGained => game.set_active(true),
                Event::FocusLost => game.set_active(false),
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if game.is_running() && last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let TickOutcome::GameOver { final_score } = game.tick() {
                prompt = Some(NamePrompt {
                    score: final_score,
                    buffer: String::new(),
                });
            }
        }
    }
}

/// Handle one key in the name prompt. Returns the submitted name when done.
fn prompt_key(prompt: &mut NamePrompt, code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Enter => Some(prompt.buffer.clone()),
        // Dismissing still records, under the default name
        KeyCode::Esc => Some(String::new()),
        KeyCode::Backspace => {
            prompt.buffer.pop();
            None
        }
        KeyCode::Char(ch) if !ch.is_control() && prompt.buffer.chars().count() < MAX_NAME_LEN => {
            prompt.buffer.push(ch);
            None
        }
        _ => None,
    }
}
