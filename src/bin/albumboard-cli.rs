use albumboard::{Dashboard, DashboardConfig, Location, PageState, Route, Screen, ViewSlot, ViewState};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "albumboard-cli")]
#[command(about = "CLI for albumboard - albums, users and photos admin dashboard", long_about = None)]
struct Cli {
    /// API root (can also be set via ALBUMBOARD_API_URL env var)
    #[arg(long, env = "ALBUMBOARD_API_URL", default_value = albumboard::config::DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Print the view model as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Render with the sidebar collapsed
    #[arg(long)]
    collapsed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the paginated album table
    Albums {
        /// Albums per page
        #[arg(long, default_value_t = 10)]
        page_size: u32,

        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        current: u32,
    },
    /// Show one album with its owner and photos
    Album {
        /// Album ID
        id: u32,

        /// Open the preview on this photo
        #[arg(long)]
        preview: Option<u32>,

        /// Step the preview, in order (repeatable)
        #[arg(long, value_enum, requires = "preview")]
        step: Vec<Step>,
    },
    /// Show the user table
    Users,
    /// Show one user with their albums
    User {
        /// User ID
        id: u32,
    },
    /// Open a dashboard location, e.g. "/albums?pageSize=20&current=3"
    Open {
        /// Path and optional query
        location: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Step {
    Next,
    Previous,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = DashboardConfig::default().with_base_url(&cli.base_url);
    let mut dashboard = Dashboard::new(config)?;
    if cli.collapsed {
        dashboard.toggle_sidebar();
    }

    let route = match &cli.command {
        Commands::Albums { page_size, current } => {
            Route::Albums(PageState::new(*current, *page_size))
        }
        Commands::Album { id, .. } => Route::Album(*id),
        Commands::Users => Route::Users,
        Commands::User { id } => Route::User(*id),
        Commands::Open { location } => Location::parse(location)?.route()?,
    };
    let location = Location::parse(&route.location())?;

    let mut slot: ViewSlot<Screen> = ViewSlot::new();
    dashboard.navigate(&mut slot, route).await;

    if let Commands::Album {
        preview: Some(photo_id),
        step,
        ..
    } = &cli.command
    {
        if let Some(Screen::Album(data)) = slot.state_mut().data_mut() {
            if !data.carousel.open(*photo_id) {
                eprintln!("Photo {} is not in this album", photo_id);
            }
            for s in step {
                match s {
                    Step::Next => data.carousel.next(),
                    Step::Previous => data.carousel.previous(),
                };
            }
        }
    }

    match slot.state() {
        ViewState::Ready(screen) if cli.json => {
            println!("{}", serde_json::to_string_pretty(&dashboard.to_json(screen))?);
        }
        state => {
            print!("{}", dashboard.render_page(location.path(), state));
        }
    }

    if slot.state().error().is_some() {
        std::process::exit(1);
    }

    Ok(())
}
