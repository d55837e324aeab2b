use folio::adapters::SystemLinkOpener;
use folio::app::{App, FrameClock};
use folio::cli::{parse_args, run_cli_command, USAGE};
use folio::config::FolioConfig;
use folio::logging::init_logging;
use folio::profile::resolve_profile;
use folio::terminal::{setup_panic_hook, TerminalManager};
use folio::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("folio: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    let config = args.apply_to(FolioConfig::from_env());

    // Version, help and profile dump never touch the terminal
    if let Some(result) = run_cli_command(&args, &config) {
        return result;
    }

    color_eyre::install()?;
    setup_panic_hook();

    // Profile errors are reported before the alternate screen is entered
    let profile = match resolve_profile(config.profile_path.as_deref()) {
        Ok(profile) => Arc::new(profile),
        Err(e) => {
            eprintln!("folio: {}", e.user_message());
            std::process::exit(1);
        }
    };

    // Without a subscriber the tracing macros are no-ops
    init_logging(config.log_file.as_deref());
    config.log_rejected_env();
    tracing::info!(
        version = folio::cli::VERSION,
        profile = %profile.name,
        animations = config.animations,
        tick_ms = config.tick_ms,
        "Starting folio"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let mut term_manager = TerminalManager::new()?;
    let size = term_manager.size()?;

    let mut app = App::new(profile, &config, Box::new(SystemLinkOpener::new()));
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));

    term_manager.restore()?;
    tracing::info!("Exiting folio");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut clock = FrameClock::new(Duration::from_millis(app.tick_ms));

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            // Advance the animation clock by the real time that passed
            elapsed = clock.tick() => {
                app.advance_clock(elapsed);
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::FocusLost)) => app.handle_focus_lost(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Terminal event error");
                    }
                    // Input stream closed; nothing more can happen
                    None => return Ok(()),
                }
            }
        }
    }
}
