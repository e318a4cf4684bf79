use clap::Parser;
use log::{info, warn};
use mlcourse::core::config::{self, CliOverrides, CourseConfig};
use mlcourse::core::state::App;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mlcourse", about = "Machine learning lessons for beginners, in your terminal")]
struct Args {
    /// Course definition to load instead of the built-in course
    #[arg(long)]
    course: Option<PathBuf>,

    /// Where the chosen language is remembered
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Log file (the terminal is taken by the UI)
    #[arg(long, default_value = "mlcourse.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    info!("mlcourse starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            warn!("Ignoring config file: {}", e);
            CourseConfig::default()
        }
    };
    let overrides = CliOverrides {
        course_file: args.course,
        preferences_file: args.preferences,
    };
    let resolved = config::resolve(&file_config, &overrides);

    // Configuration problems abort before the terminal is touched
    let app = match App::from_config(&resolved) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            return Err(e.into());
        }
    };

    mlcourse::tui::run(app)?;
    Ok(())
}
