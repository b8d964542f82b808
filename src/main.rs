use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dinorun::constants::FRAME_INTERVAL_MS;
use dinorun::input::{map_key, map_key_press_only, InputAction};
use dinorun::ui::scene;
use dinorun::world::types::DinoState;
use dinorun::Session;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut seed: Option<u64> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                seed = args.get(i + 1).and_then(|s| s.parse().ok());
                if seed.is_none() {
                    eprintln!("--seed requires an integer value");
                    std::process::exit(1);
                }
                i += 1;
            }
            "--version" | "-v" => {
                println!("dinorun {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("dinorun - terminal endless runner\n");
                println!("Usage: dinorun [--seed N]\n");
                println!("Controls:");
                println!("  Space/Up   Jump");
                println!("  Down       Duck");
                println!("  Esc/q      Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'dinorun --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(&mut rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &mut rng, release_events);

    // Restore terminal even if the loop failed.
    if release_events {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
    rng: &mut StdRng,
    release_events: bool,
) -> io::Result<()> {
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| scene::render(frame, session))?;

        // Drain input until the next frame is due.
        let deadline = last_frame + frame_interval;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                let actions = if release_events {
                    map_key(key).into_iter().collect()
                } else {
                    let ducking = session.player.state == DinoState::Ducking;
                    map_key_press_only(key, ducking).0
                };
                for action in actions {
                    match action {
                        InputAction::Quit => return Ok(()),
                        InputAction::Game(input) => session.handle_input(input, rng),
                    }
                }
            }
            if Instant::now() >= deadline {
                break;
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        session.update(dt, rng);
    }
}
