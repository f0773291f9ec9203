mod controls;
mod layout;
mod renderer;
mod scheduler;

use clap::Parser;
use controls::Controls;
use layout::Layout;
use lissajous_model::{App, Axis, LissajousConfig};
use lissajous_widgets::Window;
use renderer::Renderer;
use scheduler::TickScheduler;
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

#[derive(Parser)]
#[command(name = "lissajous_app")]
#[command(
    about = "Animates the lissajous curve traced by two sine waves with adjustable frequencies"
)]
struct Args {
    #[arg(long, default_value_t = 1200, value_parser = clap::value_parser!(u32).range(480..))]
    width: u32,
    #[arg(long, default_value_t = 700, value_parser = clap::value_parser!(u32).range(360..))]
    height: u32,
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    tick_interval_us: u64,
    #[arg(long, default_value_t = 64, value_parser = clap::value_parser!(u32).range(1..))]
    max_ticks_per_frame: u32,
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=16))]
    line_width: u32,
    /// Path to a TTF font used for text inside the window
    #[arg(long)]
    font: Option<PathBuf>,
    #[arg(long, default_value_t = 14)]
    font_size: u16,
    #[arg(long, default_value = "Lissajous")]
    title: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
    let args = Args::parse();
    let mut app = App::new(LissajousConfig::default())?;
    let config = app.config();
    for axis in Axis::ALL {
        let wave = config.wave(axis);
        log::info!(
            "{axis} wave: amplitude {}, phase {}, frequency {} in {}..{} step {}",
            wave.amplitude,
            wave.phase,
            wave.initial_frequency,
            wave.range.min,
            wave.range.max,
            wave.range.step,
        );
    }
    log::info!(
        "{} samples over {}..{}",
        config.sample_count,
        config.time_domain.start,
        config.time_domain.end
    );
    if args.font.is_none() {
        log::warn!(
            "No font given (--font); text will only appear in the title bar"
        );
    }
    let mut window = Window::new(
        args.title.as_str(),
        args.width,
        args.height,
        args.font.as_deref(),
        args.font_size,
    )?;
    let layout = Layout::new(args.width, args.height);
    let mut renderer =
        Renderer::new(&layout, &app, args.title.as_str(), args.line_width);
    let mut controls = Controls::new(&layout, &app);
    for command in app.initial_commands() {
        renderer.apply(command, &mut controls);
    }
    let mut scheduler = TickScheduler::new(
        Duration::from_micros(args.tick_interval_us),
        args.max_ticks_per_frame,
        Instant::now(),
    );
    loop {
        window.wait_until_next_frame();
        let events = window.event_pump.poll_iter().collect::<Vec<_>>();
        if !events.is_empty() {
            // hover and drag feedback on the widgets
            renderer.request_redraw();
        }
        for event in events {
            if Window::is_quit_event(&event) {
                log::info!("Window closed");
                return Ok(());
            }
            for app_event in controls.handle_event(&event, &mut app) {
                for command in app.handle_event(app_event) {
                    renderer.apply(command, &mut controls);
                }
            }
        }
        // input before ticks, so a restart always precedes the next frame
        for _ in 0..scheduler.due_ticks(Instant::now()) {
            for command in app.tick() {
                renderer.apply(command, &mut controls);
            }
        }
        if renderer.take_redraw_request() {
            renderer.render(&mut window, &controls)?;
        }
        window.prev_tick_complete = Instant::now();
    }
}
