use attendance_gate::app_config::AppConfig;
use attendance_gate::commands::{self, ScheduleRequest};
use attendance_gate::domain::GeoPoint;
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about = "Geofenced class attendance")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Checks whether a position is close enough to the venue of an attendance link
    Check {
        #[arg(long)]
        link: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Overrides the configured geofence radius in meters
        #[arg(long)]
        radius: Option<f64>,
        /// Prints the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolves the venue at a position, or the default venue when no position is given
    Locate {
        #[arg(long, allow_hyphen_values = true, requires = "lng")]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lng: Option<f64>,
    },
    /// Schedules a class at a venue and prints its attendance link
    Schedule {
        #[arg(long)]
        course_id: String,
        #[arg(long)]
        course_title: String,
        #[arg(long)]
        course_code: String,
        /// Date of the class, e.g. 2024-10-07
        #[arg(long)]
        date: NaiveDate,
        /// Start time of the class, e.g. 09:30
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
        #[arg(long)]
        note: Option<String>,
        #[arg(long, allow_hyphen_values = true, requires = "lng")]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lng: Option<f64>,
        /// Name of the venue, looked up from its position when left out
        #[arg(long)]
        venue_name: Option<String>,
    },
}

fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, "%H:%M")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let cli = Cli::parse();
    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    match cli.command {
        Command::Check { link, lat, lng, radius, json } => {
            let result = commands::check(&config, &link, GeoPoint::new(lat, lng)?, radius)?;
            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                let decision = if result.admitted { "admitted" } else { "rejected" };
                println!("Distance to lecture venue: {:.2} meters, {}", result.distance_meters, decision);
            }
        }
        Command::Locate { lat, lng } => {
            let point = match (lat, lng) {
                (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)?),
                _ => None,
            };
            let venue = commands::locate(&config, point).await?;
            println!("{} {}", venue.location, venue.name);
        }
        Command::Schedule {
            course_id,
            course_title,
            course_code,
            date,
            time,
            note,
            lat,
            lng,
            venue_name,
        } => {
            let venue = match (lat, lng) {
                (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)?),
                _ => None,
            };
            let request = ScheduleRequest {
                course_id,
                course_title,
                course_code,
                date,
                time,
                note,
                venue,
                venue_name,
            };
            let scheduled = commands::schedule(&config, request).await?;
            println!("{} at {}", scheduled.schedule.course_code(), scheduled.schedule.location_name());
            println!("{}", scheduled.url);
            println!("{}", scheduled.venue_geography);
        }
    }

    Ok(())
}
