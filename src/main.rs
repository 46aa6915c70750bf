use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use configuration::{Overrides, Settings};
use core_types::DataBundle;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;
use views::{Controls, Navigator, ViewId};
use web_server::AppState;

mod terminal;

/// The main entry point for the NIFTY 50 dashboard.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = ?e, "niftyboard failed.");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// An interactive dashboard over a pre-processed NIFTY 50 data bundle.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard over HTTP.
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// List the dashboard pages in menu order.
    Views,
    /// Render a single page to the terminal.
    View(ViewArgs),
    /// Pick pages from stdin, one selection per line. `quit`, `exit` or EOF ends it.
    Browse,
}

#[derive(Args)]
struct ViewArgs {
    /// Menu label, slug (e.g. "sector-analysis") or 1-based menu index.
    view: String,

    /// Comma-separated symbols for the cumulative returns page.
    #[arg(long)]
    symbols: Option<String>,

    /// 1Y, 6M, 3M or 1M.
    #[arg(long)]
    time_range: Option<String>,

    /// Month key for the monthly trends page, e.g. 2024-03.
    #[arg(long)]
    month: Option<String>,

    /// Number of stocks on the correlation heatmap.
    #[arg(long)]
    num_stocks: Option<usize>,

    #[arg(long)]
    stock_a: Option<String>,

    #[arg(long)]
    stock_b: Option<String>,

    /// Print the page specification as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

impl ViewArgs {
    fn controls(&self) -> Controls {
        Controls {
            symbols: self.symbols.clone(),
            time_range: self.time_range.clone(),
            month: self.month.clone(),
            num_stocks: self.num_stocks,
            stock_a: self.stock_a.clone(),
            stock_b: self.stock_b.clone(),
        }
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = cli.overrides.load().context("Failed to load configuration")?;
    let _guard = configuration::init_tracing(&settings.logging)?;

    match cli.command {
        Commands::Views => {
            for view in ViewId::ALL {
                println!("{}. {} ({})", view.menu_index(), view.label(), view.slug());
            }
        }
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            let addr = settings.server.socket_addr()?;
            let bundle = load_bundle(&settings.data.bundle_path)?;
            web_server::run_server(addr, AppState { bundle, views: settings.views }).await?;
        }
        Commands::View(args) => {
            let view: ViewId = args.view.parse()?;
            let bundle = load_bundle(&settings.data.bundle_path)?;
            let page = views::render(bundle, view, &args.controls(), &settings.views)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                println!("{}", terminal::render_page(&page));
            }
        }
        Commands::Browse => {
            let bundle = load_bundle(&settings.data.bundle_path)?;
            browse(bundle, &settings)?;
        }
    }

    Ok(())
}

/// Loads the bundle into the process-wide cache behind a spinner.
fn load_bundle(path: &Path) -> anyhow::Result<&'static DataBundle> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Loading {}...", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = bundle::global().get_or_load(path);
    match &result {
        Ok(_) => spinner.finish_with_message("Data bundle loaded."),
        Err(_) => spinner.finish_and_clear(),
    }
    result.with_context(|| format!("Failed to load data bundle from {}", path.display()))
}

fn browse(bundle: &DataBundle, settings: &Settings) -> anyhow::Result<()> {
    let mut navigator = Navigator::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    show(bundle, navigator.current(), settings)?;
    loop {
        print_menu(navigator.current());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let selection = line.trim();
        if selection.eq_ignore_ascii_case("quit") || selection.eq_ignore_ascii_case("exit") {
            break;
        }
        if selection.is_empty() {
            continue;
        }

        match navigator.select(selection) {
            Ok(view) => show(bundle, view, settings)?,
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}

fn show(bundle: &DataBundle, view: ViewId, settings: &Settings) -> anyhow::Result<()> {
    let page = views::render(bundle, view, &Controls::default(), &settings.views)?;
    println!("{}", terminal::render_page(&page));
    Ok(())
}

fn print_menu(current: ViewId) {
    println!();
    for view in ViewId::ALL {
        let marker = if view == current { ">" } else { " " };
        println!("{} {}. {}", marker, view.menu_index(), view.label());
    }
    print!("Select a page (number or name, 'quit' to exit): ");
}
