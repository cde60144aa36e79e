use std::path::PathBuf;

use clap::Parser;
use mazepath::{
    logging,
    settings::{Overrides, Settings},
    AppError,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazepath")]
struct Args {
    #[clap(short, long, help = "Number of rows, odd values give the cleanest mazes")]
    rows: Option<usize>,
    #[clap(short, long, help = "Number of columns")]
    cols: Option<usize>,
    #[clap(short, long, help = "Seed for the random generator")]
    seed: Option<u64>,
    #[clap(long, help = "Path to the settings file")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Show settings path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Don't color the path")]
    no_color: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, can be repeated")]
    verbose: u8,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);
    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load(&settings_path)?.with_overrides(&Overrides {
        rows: args.rows,
        cols: args.cols,
        seed: args.seed,
        no_color: args.no_color,
    });
    logging::init(settings.log_level.raised(args.verbose).to_filter())?;

    log::debug!("Settings: {:?}", settings);

    let report = mazepath::run(&settings)?;
    print!("{}", report);

    Ok(())
}
