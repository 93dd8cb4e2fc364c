//! Interactive heatmap viewer for simulation output grids.
//!
//! Reads one raw binary grid file as an n-by-n matrix of 32-bit integers
//! and displays it as a heatmap in the terminal, blocking until the user
//! presses `q` or `Esc`.

use std::env;
use std::io;
use std::process::ExitCode;

use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use gt_core::{ElemWidth, Grid};
use gt_view::App;

const USAGE: &str = "Usage: gt-view <binfile> <n>";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    // A wrong argument count prints usage and exits cleanly; this tool has
    // always treated a malformed invocation as a non-error.
    if args.len() != 2 {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let binfile = &args[0];
    let n: usize = match args[1].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("error: grid size '{}' is not an integer", args[1]);
            return ExitCode::FAILURE;
        }
    };

    // The producer writes 4-byte elements; the viewer reads nothing else.
    let grid = match Grid::from_file(binfile, n, ElemWidth::I32) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(App::new(grid, binfile.clone())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Blocking draw/event loop; resize events trigger a recompose.
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let event = event::read()?;
        app.handle_event(event);

        if app.should_quit() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
