use clap::Parser;

use buoymon::ingest::ndbc;
use buoymon::logging::{self, LogLevel};
use buoymon::model::{NdbcError, StationReport};
use buoymon::page::StationPage;
use buoymon::reading;

/// Fetch NOAA NDBC buoy observations and print a structured or pretty summary.
#[derive(Parser, Debug)]
#[command(name = "buoymon", version, about = "Scrape wave and wind conditions from NDBC station pages")]
struct Args {
    /// Station id to pull wave metrics from (e.g. 46053)
    #[arg(short = 's', long)]
    wave_station: Option<String>,

    /// Station id to pull wind metrics from
    #[arg(short = 'w', long)]
    wind_station: Option<String>,

    /// Station id for a raw swell-label dump (no normalization)
    #[arg(long)]
    swell_station: Option<String>,

    /// Show verbose diagnostics (label match counts, pattern failures)
    #[arg(short, long)]
    verbose: bool,

    /// Pretty one-line output instead of JSON
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    let args = Args::parse();

    let min_level = if args.verbose { LogLevel::Debug } else { LogLevel::Warning };
    logging::init_logger(min_level);

    if let Err(e) = run(&args) {
        eprintln!("buoymon: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), NdbcError> {
    let client = ndbc::build_client()?;

    if let Some(station_id) = &args.swell_station {
        let page = StationPage::parse(&ndbc::fetch_station_page(&client, station_id)?);
        for (label, value) in reading::swell_summary(&page) {
            println!("{} :: {}", label, value.unwrap_or_else(|| "(not found)".to_string()));
        }
        return Ok(());
    }

    // One fetch per requested kind, sequentially; freshness is evaluated
    // per page inside the assembler.
    let wave = match &args.wave_station {
        Some(station_id) => {
            logging::debug(Some(station_id), "fetching wave data");
            let page = StationPage::parse(&ndbc::fetch_station_page(&client, station_id)?);
            Some(reading::wave_reading(&page)?)
        }
        None => None,
    };

    let wind = match &args.wind_station {
        Some(station_id) => {
            logging::debug(Some(station_id), "fetching wind data");
            let page = StationPage::parse(&ndbc::fetch_station_page(&client, station_id)?);
            Some(reading::wind_reading(&page)?)
        }
        None => None,
    };

    let report = StationReport { wave, wind };

    if args.pretty {
        println!("{}", reading::pretty_line(&report));
    } else {
        let json = serde_json::to_string_pretty(&report)
            .expect("station report is plain data and always serializes");
        println!("{}", json);
    }

    Ok(())
}
