//! Anigram CLI - Inspect and play sprite animations in the terminal.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::process;

use anigram::{
    animation::{AnimationLibrary, AnimationSource, format},
    schema::{AnimationRecord, EditorConfig},
    session::{EditSession, TextSurface},
};

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    animation: Option<PathBuf>,
    library: Option<PathBuf>,
    id: Option<String>,
    config: Option<PathBuf>,
    save: Option<PathBuf>,
    frame: Option<usize>,
    delay_ms: Option<u64>,
    cycles: Option<usize>,
    play: bool,
    looping: bool,
    example: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <animation.json> [options]");
    eprintln!("       {program} --library <dir> --id <id> [options]");
    eprintln!();
    eprintln!("Show or play a 16x16 sprite animation stored as a {{title, data}} record.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <file>   Editor configuration JSON");
    eprintln!("  --frame <n>       Frame to show (1-based, default: 1)");
    eprintln!("  --play            Play the animation instead of showing one frame");
    eprintln!("  --loop            Loop playback");
    eprintln!("  --delay <ms>      Delay between frames (default: from config)");
    eprintln!("  --cycles <n>      Stop looping playback after n frames");
    eprintln!("  --save <dir>      Store the animation as a new record in <dir>");
    eprintln!("  --example         Print an example record and configuration");
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut args = Args::default();
    while let Some(arg) = raw.next() {
        let mut value = |name: &str| raw.next().ok_or_else(|| format!("{name} needs a value"));
        match arg.as_str() {
            "--example" => args.example = true,
            "--play" => args.play = true,
            "--loop" => args.looping = true,
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--library" => args.library = Some(PathBuf::from(value("--library")?)),
            "--id" => args.id = Some(value("--id")?),
            "--save" => args.save = Some(PathBuf::from(value("--save")?)),
            "--frame" => {
                let n: usize = value("--frame")?
                    .parse()
                    .map_err(|e| format!("--frame: {e}"))?;
                if n == 0 {
                    return Err("--frame is 1-based".into());
                }
                args.frame = Some(n);
            }
            "--delay" => {
                args.delay_ms = Some(
                    value("--delay")?
                        .parse()
                        .map_err(|e| format!("--delay: {e}"))?,
                )
            }
            "--cycles" => {
                args.cycles = Some(
                    value("--cycles")?
                        .parse()
                        .map_err(|e| format!("--cycles: {e}"))?,
                )
            }
            other if other.starts_with("--") => return Err(format!("unknown option {other}")),
            path => {
                if args.animation.is_some() {
                    return Err(format!("unexpected argument {path}"));
                }
                args.animation = Some(PathBuf::from(path));
            }
        }
    }
    Ok(args)
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let mut raw = std::env::args();
    let program = raw.next().unwrap_or_else(|| "anigram".into());
    let args = parse_args(raw).unwrap_or_else(|e| {
        print_usage(&program);
        fail(e)
    });

    if args.example {
        print_example();
        return;
    }

    // Load configuration
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .unwrap_or_else(|e| fail(format!("reading config {}: {e}", path.display())));
            EditorConfig::from_json(&json).unwrap_or_else(|e| fail(e))
        }
        None => EditorConfig::default(),
    };
    if let Some(delay_ms) = args.delay_ms {
        config.playback.delay_ms = delay_ms;
    }
    if args.looping {
        config.playback.looping = true;
    }

    // Load the animation record
    let record = match (&args.animation, &args.library, &args.id) {
        (Some(path), None, None) => {
            let json = fs::read_to_string(path)
                .unwrap_or_else(|e| fail(format!("reading {}: {e}", path.display())));
            AnimationRecord::from_json(&json).unwrap_or_else(|e| fail(e))
        }
        (None, Some(dir), Some(id)) => {
            let library = AnimationLibrary::open(dir).unwrap_or_else(|e| fail(e));
            library.fetch(id).unwrap_or_else(|e| fail(e))
        }
        _ => {
            print_usage(&program);
            process::exit(1);
        }
    };

    if let Some(anomaly) = format::inspect(&record.data) {
        println!("Note: {anomaly}");
    }

    let surface = TextSurface::new(&config);
    let mut session = EditSession::new(&record, &config, surface).unwrap_or_else(|e| fail(e));

    println!("Anigram");
    println!("=======");
    println!("Title: {}", session.title());
    println!("Frames: {}", session.store().frame_count());
    println!();

    if args.play {
        let playback = config.playback;
        let max_ticks = if playback.looping { args.cycles } else { None };
        let shown = session.run_blocking(&playback, max_ticks, |surface| {
            // Clear screen and home the cursor between frames.
            print!("\x1b[2J\x1b[H{}\n{}", surface.label(), surface.render());
        });
        println!();
        println!("Played {shown} frames");
    } else {
        let target = args.frame.unwrap_or(1);
        for _ in 1..target.min(session.store().frame_count()) {
            session.next_frame();
        }
        let surface = session.surface();
        println!("{}", surface.label());
        print!("{}", surface.render());
    }

    if let Some(dir) = &args.save {
        let mut library = AnimationLibrary::open(dir).unwrap_or_else(|e| fail(e));
        let id = session.save_to(&mut library).unwrap_or_else(|e| fail(e));
        println!();
        println!("Saved as {id} in {}", dir.display());
    }
}

fn print_example() {
    let config = EditorConfig::default();
    let mut session = EditSession::blank("Example", &config, TextSurface::new(&config))
        .unwrap_or_else(|e| fail(e));
    for (row, col) in [(4, 4), (4, 11), (10, 5), (11, 6), (11, 9), (10, 10)] {
        session.paint_cell(row, col).unwrap_or_else(|e| fail(e));
    }
    session.copy_current_frame();
    session.next_frame();
    session.paste_into_current_frame();
    session.select_color(anigram::Color::Dark);
    for col in 6..10 {
        session.paint_cell(12, col).unwrap_or_else(|e| fail(e));
    }

    let record = session.to_record();
    println!("Example record (animation.json):");
    println!("{}", record.to_json().unwrap_or_else(|e| fail(e)));
    println!();
    println!("Example configuration (config.json):");
    println!(
        "{}",
        serde_json::to_string_pretty(&config).unwrap_or_else(|e| fail(e))
    );
}
