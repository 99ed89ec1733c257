use clap::Parser;
use clap::error::ErrorKind;
use scandisk::{Volume, scandisk};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    quiet: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// FAT12 image file, repaired in place
    image: String,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            error.exit()
        }
        Err(_) => {
            let progname = std::env::args().next().unwrap_or_else(|| "scandisk".into());
            eprintln!("usage: {} <imagename>", progname);
            std::process::exit(1);
        }
    };
    let level = match (args.quiet, args.verbosity) {
        (true, _) => log::LevelFilter::Off,
        (_, 0) => log::LevelFilter::Info,
        (_, 1) => log::LevelFilter::Debug,
        (_, _) => log::LevelFilter::Trace,
    };
    log::set_max_level(level);
    env_logger::builder().filter(None, level).target(env_logger::Target::Stdout).init();

    let mut volume = match Volume::open(&args.image) {
        Ok(volume) => volume,
        Err(error) => {
            eprintln!("{}: {}", args.image, error);
            std::process::exit(1);
        }
    };
    let report = scandisk(&mut volume);
    if let Err(error) = volume.flush() {
        eprintln!("{}: {}", args.image, error);
        std::process::exit(1);
    }
    println!("{}", report);
}
