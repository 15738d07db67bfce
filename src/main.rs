use clap::{Parser, Subcommand, ValueEnum};
use crumbtrail::{
    config::SiteConfig,
    guard::{self, Viewer},
    output::{render_page, serve},
    Error,
};
use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Site config; built-in defaults are used if the default file is missing.
    #[arg(long, short)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the breadcrumb trail for a path as JSON.
    Trail { path: String },
    /// Print the rendered page for a path.
    Render {
        path: String,
        #[arg(long, value_enum, default_value_t = Role::Anonymous)]
        viewer: Role,
    },
    /// Render pages on demand over HTTP.
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Role {
    Anonymous,
    User,
    Admin,
}

impl From<Role> for Viewer {
    fn from(role: Role) -> Self {
        match role {
            Role::Anonymous => Self::Anonymous,
            Role::User => Self::User,
            Role::Admin => Self::Admin,
        }
    }
}

fn main() -> Result<ExitCode, Error> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crumbtrail=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::load_or_default(Path::new("./crumbtrail.toml"))?,
    };
    info!(
        "({:.1}s) Loaded config for {}",
        start.elapsed().as_secs_f32(),
        config.title
    );

    match args.command {
        Command::Trail { path } => println!("{}", trail_json(&config, &path)?),
        Command::Render { path, viewer } => match render(&config, &path, viewer.into())? {
            Rendered::Page(html) => {
                std::io::stdout().write_all(&html)?;
                info!(
                    "({:.1}s) Rendered {path} ({} bytes)",
                    start.elapsed().as_secs_f32(),
                    html.len()
                );
            }
            Rendered::Redirect(location) => {
                warn!("{path} redirects to {location}");
                eprintln!("{location}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Serve { addr } => serve(&config, &addr)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn trail_json(config: &SiteConfig, path: &str) -> Result<String, Error> {
    let crumbs = config.breadcrumb_builder().build(path);
    Ok(serde_json::to_string_pretty(&crumbs)?)
}

#[derive(Debug)]
enum Rendered {
    Page(Vec<u8>),
    /// The viewer may not see the page; holds where they would be sent.
    Redirect(String),
}

fn render(config: &SiteConfig, path: &str, viewer: Viewer) -> Result<Rendered, Error> {
    if let Some(location) = guard::check(config, path, viewer).location(config) {
        return Ok(Rendered::Redirect(location));
    }
    let html = render_page(config, &config.breadcrumb_builder(), path)?;
    Ok(Rendered::Page(html))
}
