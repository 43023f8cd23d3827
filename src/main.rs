use anyhow::{Context, Result, bail};
use clap::Parser;
use geo::CoordsIter;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use oceanhull::config::{FileConfig, defaults};
use oceanhull::domain::CoastlineCollection;
use oceanhull::geometry::{
    HullStrategy, alpha_shape, collection_centroids, encompassing_polygon, simplify_boundary,
};
use oceanhull::io::{Resolution, load_coastline, save_polygon_shapefile};
use oceanhull::render::write_map;

const OUTPUT_SHAPEFILE: &str = "islands_alpha_shape.shp";
const MAP_SHAPES: &str = "map_with_shapes.html";
const MAP_BOUNDS: &str = "map_bounds.html";

/// Derive a simplified ocean boundary shapefile from GSHHS coastline data
///
/// Examples:
///   # Run with defaults (expects GSHHS_i_L1.shp in the current directory)
///   oceanhull
///
///   # High resolution coastlines with a tighter alpha
///   oceanhull -r h --alpha 0.2
///
///   # Convex hull with every landmass carved back out
///   oceanhull --hull convex
///
///   # Read GSHHS data from elsewhere and write into a build directory
///   oceanhull --data-dir /data/gshhs -o build
///
///   # Use a config file
///   oceanhull --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "oceanhull")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches oceanhull.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// GSHHS resolution: c, l, i, h or f
    #[arg(short = 'r', long, default_value = "i")]
    resolution: Resolution,

    /// Smallest landmass area to keep, km2
    #[arg(long, default_value = "300.0")]
    min_area: f64,

    /// Largest landmass area to keep, km2
    #[arg(long, default_value = "10000.0")]
    max_area: f64,

    /// Alpha shape tightness in inverse degrees (0 falls back to the convex hull)
    #[arg(short = 'a', long, default_value = "0.1")]
    alpha: f64,

    /// Simplification tolerance for the output boundary, square degrees (triangle area)
    #[arg(short = 't', long, default_value = "0.01")]
    tolerance: f64,

    /// Boundary strategy: alpha or convex
    #[arg(long, default_value = "alpha")]
    hull: HullStrategy,

    /// Directory holding the GSHHS shapefiles
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Directory the shapefile and map pages are written into
    #[arg(short = 'o', long, default_value = ".")]
    out_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Effective run parameters after layering CLI flags over the config file
#[derive(Debug)]
struct Settings {
    resolution: Resolution,
    min_area: f64,
    max_area: f64,
    alpha: f64,
    tolerance: f64,
    hull: HullStrategy,
    data_dir: PathBuf,
    out_dir: PathBuf,
    verbose: bool,
}

/// A flag that deviates from its built-in default wins; otherwise the file
/// value applies, and the built-in default backstops both.
fn resolve_settings(args: &Args, file_config: Option<&FileConfig>) -> Settings {
    let resolution = if args.resolution != defaults::RESOLUTION {
        args.resolution
    } else {
        file_config
            .map(|c| c.resolution)
            .unwrap_or(defaults::RESOLUTION)
    };
    let min_area = if (args.min_area - defaults::MIN_AREA_KM2).abs() > 1e-9 {
        args.min_area
    } else {
        file_config
            .map(|c| c.min_area)
            .unwrap_or(defaults::MIN_AREA_KM2)
    };
    let max_area = if (args.max_area - defaults::MAX_AREA_KM2).abs() > 1e-9 {
        args.max_area
    } else {
        file_config
            .map(|c| c.max_area)
            .unwrap_or(defaults::MAX_AREA_KM2)
    };
    let alpha = if (args.alpha - defaults::ALPHA).abs() > 1e-9 {
        args.alpha
    } else {
        file_config.map(|c| c.alpha).unwrap_or(defaults::ALPHA)
    };
    let tolerance = if (args.tolerance - defaults::TOLERANCE).abs() > 1e-9 {
        args.tolerance
    } else {
        file_config
            .map(|c| c.tolerance)
            .unwrap_or(defaults::TOLERANCE)
    };
    let hull = if args.hull != defaults::HULL {
        args.hull
    } else {
        file_config.map(|c| c.hull).unwrap_or(defaults::HULL)
    };
    let data_dir = if args.data_dir != PathBuf::from(".") {
        args.data_dir.clone()
    } else {
        file_config
            .and_then(|c| c.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    };
    let out_dir = if args.out_dir != PathBuf::from(".") {
        args.out_dir.clone()
    } else {
        file_config
            .and_then(|c| c.out_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    };
    let verbose = args.verbose || file_config.map(|c| c.verbose).unwrap_or(false);

    Settings {
        resolution,
        min_area,
        max_area,
        alpha,
        tolerance,
        hull,
        data_dir,
        out_dir,
        verbose,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let Settings {
        resolution,
        min_area,
        max_area,
        alpha,
        tolerance,
        hull,
        data_dir,
        out_dir,
        verbose,
    } = resolve_settings(&args, file_config.as_ref());

    if min_area > max_area {
        bail!(
            "--min-area ({}) must not exceed --max-area ({})",
            min_area,
            max_area
        );
    }
    if tolerance < 0.0 {
        bail!("--tolerance must be non-negative");
    }

    println!("oceanhull - Ocean Boundary Extractor");
    println!("====================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Resolution: {} ({})", resolution, resolution.file_name());
        println!("  Area band: [{}, {}] km2", min_area, max_area);
        println!("  Alpha: {}", alpha);
        println!("  Tolerance: {}", tolerance);
        println!("  Hull strategy: {}", hull);
        println!("  Data dir: {}", data_dir.display());
        println!("  Output dir: {}", out_dir.display());
        println!();
    }

    std::fs::create_dir_all(&out_dir)
        .context(format!("Failed to create output directory: {:?}", out_dir))?;

    let spinner = create_spinner("Reading coastline shapefile...");
    let start = Instant::now();
    let coastlines =
        load_coastline(resolution, &data_dir).context("Failed to load coastline dataset")?;
    spinner.finish_with_message(format!(
        "Loaded {} coastline polygons ({}) [{:.1}s]",
        coastlines.len(),
        resolution,
        start.elapsed().as_secs_f32()
    ));

    let filtered = coastlines.filter_by_area(min_area, max_area);
    if filtered.is_empty() {
        bail!(
            "No landmass between {} and {} km2 at resolution {}; widen the area band",
            min_area,
            max_area,
            resolution
        );
    }
    println!(
        "Kept {} of {} polygons in [{}, {}] km2",
        filtered.len(),
        coastlines.len(),
        min_area,
        max_area
    );

    let spinner = create_spinner("Calculating centroids...");
    let start = Instant::now();
    let centroids = collection_centroids(&filtered).context("Failed to compute centroids")?;
    spinner.finish_with_message(format!(
        "Calculated {} centroids [{:.1}s]",
        centroids.len(),
        start.elapsed().as_secs_f32()
    ));

    let boundary = match hull {
        HullStrategy::Alpha => {
            let spinner = create_spinner("Fitting alpha shape...");
            let start = Instant::now();
            let shape = alpha_shape(&centroids, alpha)
                .context("Failed to fit alpha shape; try a smaller --alpha or a wider area band")?;
            spinner.finish_with_message(format!(
                "Alpha shape with {} part(s) [{:.1}s]",
                shape.0.len(),
                start.elapsed().as_secs_f32()
            ));
            shape
        }
        HullStrategy::Convex => {
            let landmasses: Vec<_> = filtered
                .features
                .iter()
                .map(|f| f.geometry.clone())
                .collect();
            let start = Instant::now();
            let ocean = encompassing_polygon(&centroids, &landmasses)
                .context("Failed to build encompassing polygon")?;
            println!(
                "Encompassing polygon with {} part(s) [{:.1}s]",
                ocean.0.len(),
                start.elapsed().as_secs_f32()
            );
            ocean
        }
    };

    let before = boundary.coords_count();
    let simplified = simplify_boundary(&boundary, tolerance);
    println!(
        "Simplified boundary: {} -> {} vertices",
        before,
        simplified.coords_count()
    );

    let shapefile_path = out_dir.join(OUTPUT_SHAPEFILE);
    save_polygon_shapefile(&simplified, &shapefile_path, filtered.crs)
        .context("Failed to write boundary shapefile")?;

    let spinner = create_spinner("Rendering map pages...");
    let start = Instant::now();
    let shapes_map = out_dir.join(MAP_SHAPES);
    write_map(&filtered, &shapes_map).context("Failed to write island map")?;
    let bounds_collection = CoastlineCollection::wrap(simplified.clone(), filtered.crs);
    let bounds_map = out_dir.join(MAP_BOUNDS);
    write_map(&bounds_collection, &bounds_map).context("Failed to write boundary map")?;
    spinner.finish_with_message(format!(
        "Rendered {} and {} [{:.1}s]",
        shapes_map.display(),
        bounds_map.display(),
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", shapefile_path.display());

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
