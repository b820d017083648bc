mod backend;
mod canvas;
mod data;
mod error;
mod geo;
mod globe;
mod help;
mod locate;
mod path;
mod scene;
mod settings;
mod style;
mod terminal;
mod viewer;

use canvas::{BrailleCanvas, ImageCanvas};
use clap::{Args, Parser, Subcommand};
use error::{Error, Result};
use geo::GeoPoint;
use globe::Globe;
use path::Step;
use scene::Scene;
use settings::Settings;
use std::path::PathBuf;
use std::process::ExitCode;
use style::Style;
use terminal::Terminal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "termglobe")]
#[command(version)]
#[command(about = "Orthographic globe rendering: graticules, coastlines and great-circle arcs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the drawing subcommands
#[derive(Args)]
struct ViewArgs {
    /// Center the view on LAT,LNG
    #[arg(short, long, value_name = "LAT,LNG", allow_hyphen_values = true)]
    center: Option<GeoPoint>,

    /// Center the view on your approximate location (IP lookup)
    #[arg(long, conflicts_with = "center")]
    here: bool,

    /// Degrees between graticule lines
    #[arg(short, long, value_name = "DEG")]
    interval: Option<f64>,

    /// Settings file (default: ~/.config/termglobe/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a single globe to the terminal or a PNG file
    Render {
        #[command(flatten)]
        view: ViewArgs,

        /// Leave out parallels and meridians
        #[arg(long)]
        no_graticule: bool,

        /// Draw coastlines
        #[arg(long)]
        land: bool,

        /// Draw country borders
        #[arg(long)]
        countries: bool,

        /// Mark major cities
        #[arg(long)]
        cities: bool,

        /// JSON path set to draw (repeatable)
        #[arg(long = "paths", value_name = "FILE")]
        paths: Vec<PathBuf>,

        /// Dot at LAT,LNG (repeatable)
        #[arg(long = "dot", value_name = "LAT,LNG", allow_hyphen_values = true)]
        dots: Vec<GeoPoint>,

        /// Great-circle arc between two points (repeatable)
        #[arg(long = "arc", value_name = "LAT,LNG:LAT,LNG", value_parser = parse_arc, allow_hyphen_values = true)]
        arcs: Vec<(GeoPoint, GeoPoint)>,

        /// Write a PNG instead of printing to the terminal
        #[arg(short, long, value_name = "FILE.png")]
        output: Option<PathBuf>,

        /// PNG width in pixels
        #[arg(long, default_value = "800")]
        width: u32,

        /// PNG height in pixels
        #[arg(long, default_value = "800")]
        height: u32,

        /// Terminal columns for printed output
        #[arg(long, default_value = "80")]
        cols: u16,

        /// Terminal rows for printed output
        #[arg(long, default_value = "40")]
        rows: u16,
    },

    /// Spin the globe interactively in the terminal
    Live {
        #[command(flatten)]
        view: ViewArgs,

        /// Degrees of longitude to turn per frame
        #[arg(short, long, default_value = "1.0", allow_hyphen_values = true)]
        spin: f64,

        /// Animation speed (seconds per frame)
        #[arg(short, long, default_value = "0.05")]
        time: f32,
    },

    /// Great-circle distance between two points
    Distance {
        #[arg(value_name = "FROM", allow_hyphen_values = true)]
        from: GeoPoint,

        #[arg(value_name = "TO", allow_hyphen_values = true)]
        to: GeoPoint,

        /// Sphere radius in kilometres (default: settings or 6371)
        #[arg(short, long, value_name = "KM")]
        radius: Option<f64>,

        /// Settings file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Point a fraction of the way along the great circle between two points
    Interpolate {
        #[arg(value_name = "FROM", allow_hyphen_values = true)]
        from: GeoPoint,

        #[arg(value_name = "TO", allow_hyphen_values = true)]
        to: GeoPoint,

        /// 0 is FROM, 1 is TO
        fraction: f64,
    },
}

fn parse_arc(s: &str) -> std::result::Result<(GeoPoint, GeoPoint), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LAT,LNG:LAT,LNG, got '{s}'"))?;
    Ok((from.parse()?, to.parse()?))
}

/// Resolve the view center: explicit flag, then IP lookup, then settings.
fn resolve_center(view: &ViewArgs, settings: &Settings) -> GeoPoint {
    if let Some(center) = view.center {
        return center;
    }
    let configured = settings.globe.center.unwrap_or(GeoPoint::new(0.0, 0.0));
    if view.here {
        return locate::fetch_user_location().unwrap_or_else(|| {
            info!("using configured center {configured}");
            configured
        });
    }
    configured
}

fn graticule_interval(view: &ViewArgs, settings: &Settings) -> Result<f64> {
    let interval = view.interval.unwrap_or(settings.globe.interval);
    Ok(Step::new(interval)?.degrees())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            view,
            no_graticule,
            land,
            countries,
            cities,
            paths,
            dots,
            arcs,
            output,
            width,
            height,
            cols,
            rows,
        } => {
            let settings = Settings::load(view.config.as_deref())?;
            let step = Step::new(settings.globe.step)?;

            let mut path_sets = Vec::new();
            for file in settings.globe.paths.iter().chain(&paths) {
                path_sets.push(data::load_path_set(file)?);
            }

            let scene = Scene {
                center: resolve_center(&view, &settings),
                graticule: if no_graticule { None } else { Some(graticule_interval(&view, &settings)?) },
                land,
                countries,
                cities,
                path_sets,
                dots,
                arcs,
            };

            match output {
                Some(file) => {
                    if width == 0 || height == 0 {
                        return Err(Error::Args(format!("image size must be positive, got {width}x{height}")));
                    }
                    let mut globe = Globe::with_style(settings.style_or(Style::default())).with_step(step);
                    scene.draw(&mut globe)?;
                    let mut canvas = ImageCanvas::new(width, height);
                    globe.render(&mut canvas);
                    canvas.save(&file)?;
                    info!("wrote {}x{} globe to {}", width, height, file.display());
                }
                None => {
                    let mut globe = Globe::with_style(settings.style_or(Style::terminal())).with_step(step);
                    scene.draw(&mut globe)?;
                    let mut canvas = BrailleCanvas::new(cols, rows);
                    globe.render(&mut canvas);
                    let mut term = Terminal::headless(cols, rows);
                    canvas.blit(&mut term);
                    term.print_to_stdout()?;
                }
            }
        }

        Commands::Live { view, spin, time } => {
            let settings = Settings::load(view.config.as_deref())?;
            let step = Step::new(settings.globe.step)?;

            let mut path_sets = Vec::new();
            for file in &settings.globe.paths {
                path_sets.push(data::load_path_set(file)?);
            }

            let scene = Scene {
                center: resolve_center(&view, &settings),
                graticule: Some(graticule_interval(&view, &settings)?),
                cities: true,
                path_sets,
                ..Scene::default()
            };
            let style = settings.style_or(Style::terminal());
            let options = viewer::ViewOptions { frame_time: time, spin };
            options.validate()?;

            let mut term = Terminal::new(true)?;
            term.clear_screen()?;
            viewer::run(&mut term, scene, &style, step, options, None)?;
        }

        Commands::Distance {
            from,
            to,
            radius,
            config,
        } => {
            let radius = match radius {
                Some(r) if r.is_finite() && r > 0.0 => r,
                Some(r) => return Err(Error::Args(format!("radius must be positive, got {r}"))),
                None => Settings::load(config.as_deref())?.globe.earth_radius_km,
            };
            let km = geo::haversine_distance(from, to, radius);
            debug!("distance {from} -> {to} on radius {radius}");
            println!("{km:.3} km");
        }

        Commands::Interpolate { from, to, fraction } => {
            if !fraction.is_finite() {
                return Err(Error::Args(format!("fraction must be a finite number, got {fraction}")));
            }
            println!("{}", geo::interpolate(from, to, fraction)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "termglobe=warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("termglobe: {e}");
            ExitCode::FAILURE
        }
    }
}
