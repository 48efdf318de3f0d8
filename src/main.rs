// Stockroom: inventory catalog with a terminal menu

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use stockroom::inventory::constants::LOG_FILE;
use stockroom::inventory::{DataFiles, Inventory};
use stockroom::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [data-dir]", program_name);
    eprintln!();
    eprintln!("Keeps products.txt, suppliers.txt and stocks.txt in data-dir");
    eprintln!("(default: the current directory). Logs go to {}.", LOG_FILE);
}

/// Send log records to a file; the TUI owns the terminal while it runs
fn init_logging(data_dir: &Path) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE))?;
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("stockroom");

    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        print_usage(program_name);
        return Ok(());
    }

    if args.len() > 2 {
        eprintln!("Error: too many arguments");
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    }

    let data_dir = args.get(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    if !data_dir.is_dir() {
        eprintln!("Error: Directory '{}' not found", data_dir.display());
        print_usage(program_name);
        std::process::exit(1);
    }

    if let Err(e) = init_logging(&data_dir) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::info!("starting with data directory {}", data_dir.display());

    let inventory = Inventory::new(DataFiles::in_dir(&data_dir));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(inventory);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
