mod ui;

use std::{
    error::Error,
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::{Args as ClapArgs, Parser, Subcommand};
use log::info;

use launchdash::{
    Dataset, LaunchDashError, PayloadRange, SiteSelector,
    engine::{filter_scatter, payload_range_label, success_pie},
    export,
};
use ui::{config::AppConfig, dashboard::LaunchDashboardApp};

const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ClapArgs, Debug)]
struct FilterArgs {
    /// Launch site to chart, ALL for every site
    #[arg(short, long, default_value = "ALL")]
    site: String,

    /// Lowest payload mass (kg), defaults to the smallest payload in the dataset
    #[arg(long)]
    min: Option<f64>,

    /// Highest payload mass (kg), defaults to the largest payload in the dataset
    #[arg(long)]
    max: Option<f64>,
}

impl FilterArgs {
    fn payload_range(&self, dataset: &Dataset) -> Result<PayloadRange, LaunchDashError> {
        let defaults = PayloadRange::for_dataset(dataset);
        PayloadRange::new(
            self.min.unwrap_or(defaults.low()),
            self.max.unwrap_or(defaults.high()),
        )
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive dashboard
    Show {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print the chart data for a selection
    Summary {
        #[arg(short, long, default_value = DEFAULT_DATASET)]
        input: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Write the launches matching a selection as JSON lines
    Export {
        #[arg(short, long, default_value = DEFAULT_DATASET)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

fn show(input: Option<PathBuf>) -> Result<(), LaunchDashError> {
    let mut app_config = AppConfig::from_local_file().unwrap_or_default();
    let input = input
        .or_else(|| app_config.last_dataset.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // a bad dataset stops us before any window is created
    let dataset = Arc::new(Dataset::from_csv_path(&input)?);
    app_config.last_dataset = Some(input.clone());

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_title("SpaceX Launch Dashboard")
        .with_inner_size(app_config.window_size.clone());

    eframe::run_native(
        "SpaceX Launch Dashboard",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(LaunchDashboardApp::new(
                dataset,
                Some(input),
                app_config,
                cc,
            )))
        }),
    )
    .map_err(|e| LaunchDashError::DashboardStartError {
        description: e.to_string(),
    })
}

fn summary(input: &Path, filter: &FilterArgs) -> Result<(), LaunchDashError> {
    let dataset = Dataset::from_csv_path(input)?;
    let site = SiteSelector::from(filter.site.as_str());
    let range = filter.payload_range(&dataset)?;

    let pie = success_pie(&dataset, &site);
    println!("{}", pie.title);
    if pie.is_empty() {
        println!("  (no launches)");
    }
    for (label, count) in pie.iter() {
        println!("  {}: {}", label, count);
    }

    println!();
    println!("{}", payload_range_label(range.low(), range.high()));

    let scatter = filter_scatter(&dataset, &site, &range);
    println!();
    println!("{}", scatter.title());
    if let Some(annotation) = scatter.annotation() {
        println!("  {}", annotation);
    }
    for (category, points) in scatter.by_booster_category() {
        println!("  {} ({} launches)", category, points.len());
        for point in points {
            println!(
                "    {:>8} kg  {:<8} {}",
                point.x(),
                point.outcome_label,
                point.record.launch_site
            );
        }
    }
    Ok(())
}

fn export_points(input: &Path, output: &Path, filter: &FilterArgs) -> Result<(), LaunchDashError> {
    let dataset = Dataset::from_csv_path(input)?;
    let site = SiteSelector::from(filter.site.as_str());
    let range = filter.payload_range(&dataset)?;
    let scatter = filter_scatter(&dataset, &site, &range);
    export::write_points(output, &scatter)?;
    info!(
        "Wrote {} launches for site {} to {:?}",
        scatter.points().len(),
        site,
        output
    );
    Ok(())
}

fn main() {
    colog::init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    let result = match &cli.command {
        Commands::Show { input } => show(input.clone()),
        Commands::Summary { input, filter } => summary(input, filter),
        Commands::Export {
            input,
            output,
            filter,
        } => export_points(input, output, filter),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}
