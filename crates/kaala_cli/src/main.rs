use clap::{Parser, Subcommand};
use kaala_panchanga::{PanchangaConfig, compute_panchanga};
use kaala_time::Instant;
use kaala_vedic::{AyanamshaSystem, GeoLocation, catalogue, lookup, nakshatra_from_longitude};

#[derive(Parser)]
#[command(name = "kaala", about = "Kaala panchanga CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Complete panchanga for a local datetime and location
    Panchanga {
        /// Local datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        date: String,
        /// UTC offset in hours (east positive, e.g. -7 or 5.5)
        #[arg(long, default_value = "0")]
        offset: f64,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Altitude in meters (default 0)
        #[arg(long, default_value = "0")]
        alt: f64,
        /// Ayanamsha system code (0-39, default 1=Lahiri)
        #[arg(long, default_value = "1")]
        ayanamsha: i32,
        /// Evaluate at the exact instant instead of the day's sunrise
        #[arg(long)]
        at_instant: bool,
        /// IANA timezone name, echoed in the report only
        #[arg(long)]
        timezone: Option<String>,
    },
    /// Sunrise/sunset and moonrise/moonset for a local date
    Riseset {
        /// Local datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        date: String,
        /// UTC offset in hours (east positive)
        #[arg(long, default_value = "0")]
        offset: f64,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Altitude in meters (default 0)
        #[arg(long, default_value = "0")]
        alt: f64,
    },
    /// List all 40 ayanamsha systems at a local datetime
    AyanamshaList {
        /// Local datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        date: String,
        /// UTC offset in hours (east positive)
        #[arg(long, default_value = "0")]
        offset: f64,
    },
    /// Look up one ayanamsha system by id or name
    AyanamshaLookup {
        /// System id (0-39) or name fragment
        query: String,
        /// Local datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        date: String,
        /// UTC offset in hours (east positive)
        #[arg(long, default_value = "0")]
        offset: f64,
    },
    /// Nakshatra and pada from a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
}

fn parse_local(s: &str, offset: f64) -> Result<Instant, String> {
    // Parse "YYYY-MM-DDThh:mm:ss" (trailing Z tolerated for offset 0)
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ss, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    let instant = Instant::new(year, month, day, hour, minute, second, offset);
    if !instant.is_valid() {
        return Err(format!("instant out of range: {s} offset {offset}"));
    }
    Ok(instant)
}

fn require_local(s: &str, offset: f64) -> Instant {
    parse_local(s, offset).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_aya_system(code: i32) -> AyanamshaSystem {
    AyanamshaSystem::from_id(code).unwrap_or_else(|| {
        eprintln!("Invalid ayanamsha code: {code} (0-39)");
        std::process::exit(1);
    })
}

fn fmt_opt(instant: Option<Instant>) -> String {
    match instant {
        Some(i) => i.to_string(),
        None => "—".to_string(),
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Panchanga {
            date,
            offset,
            lat,
            lon,
            alt,
            ayanamsha,
            at_instant,
            timezone,
        } => {
            let instant = require_local(&date, offset);
            let mut location = GeoLocation::new(lat, lon, alt);
            if let Some(tz) = timezone {
                location = location.with_timezone(tz);
            }
            let config = PanchangaConfig {
                ayanamsha: require_aya_system(ayanamsha),
                evaluate_at_sunrise: !at_instant,
                ..Default::default()
            };
            let result = match compute_panchanga(&instant, &location, &config, None) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };

            println!("Panchanga for {instant}");
            if let Some(tz) = &location.timezone {
                println!("Location: {lat:.4}, {lon:.4} ({tz})");
            } else {
                println!("Location: {lat:.4}, {lon:.4}");
            }
            println!(
                "Ayanamsha: {} = {:.4} deg",
                result.ayanamsha.name, result.ayanamsha.degree_deg
            );
            println!(
                "Evaluated at: {} ({})",
                result.evaluated_at,
                if result.evaluated_at_sunrise {
                    "sunrise"
                } else {
                    "requested instant"
                }
            );
            println!(
                "Vaar: {} ({})",
                result.vaar.name(),
                result.vaar.weekday_name()
            );
            println!(
                "Tithi: {} {} ({:.1}% elapsed), ends {}",
                result.tithi.paksha.name(),
                result.tithi.name,
                result.tithi.percentage_complete,
                fmt_opt(result.tithi.ends_at)
            );
            println!(
                "Nakshatra: {} pada {} (lord {}), ends {}",
                result.nakshatra.nakshatra.name(),
                result.nakshatra.pada,
                result.nakshatra.lord.name(),
                fmt_opt(result.nakshatra.ends_at)
            );
            println!(
                "Yoga: {}, ends {}",
                result.yoga.yoga.name(),
                fmt_opt(result.yoga.ends_at)
            );
            println!(
                "Karana: {} (#{}), ends {}",
                result.karana.karana.name(),
                result.karana.number,
                fmt_opt(result.karana.ends_at)
            );
            println!("Moon phase: {}", result.moon_phase.name());
            println!("Sunrise:  {}", fmt_opt(result.horizon.sunrise));
            println!("Sunset:   {}", fmt_opt(result.horizon.sunset));
            println!("Moonrise: {}", fmt_opt(result.horizon.moonrise));
            println!("Moonset:  {}", fmt_opt(result.horizon.moonset));
            if let Some(kalam) = result.kalam {
                println!("Rahu Kalam:      {} - {}", kalam.rahu.start, kalam.rahu.end);
                println!(
                    "Gulikai Kalam:   {} - {}",
                    kalam.gulikai.start, kalam.gulikai.end
                );
                println!(
                    "Yamaganda Kalam: {} - {}",
                    kalam.yamaganda.start, kalam.yamaganda.end
                );
            } else {
                println!("Kalam: not defined (no sunrise/sunset)");
            }
            if let Some(muhurta) = result.muhurta {
                for (name, w) in muhurta.windows {
                    println!("{name:>16}: {} - {}", w.start, w.end);
                }
                if !muhurta.active.is_empty() {
                    println!("Active muhurta: {}", muhurta.active.join(", "));
                }
            } else {
                println!("Muhurta: not defined (no sunrise/sunset)");
            }
        }
        Commands::Riseset {
            date,
            offset,
            lat,
            lon,
            alt,
        } => {
            let instant = require_local(&date, offset);
            let location = GeoLocation::new(lat, lon, alt);
            let result = match compute_panchanga(
                &instant,
                &location,
                &PanchangaConfig::default(),
                None,
            ) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            println!("Sunrise:  {}", fmt_opt(result.horizon.sunrise));
            println!("Sunset:   {}", fmt_opt(result.horizon.sunset));
            println!("Moonrise: {}", fmt_opt(result.horizon.moonrise));
            println!("Moonset:  {}", fmt_opt(result.horizon.moonset));
            if result.horizon.sunrise.is_none() {
                println!("(polar day or night: the Sun does not cross the horizon)");
            }
        }
        Commands::AyanamshaList { date, offset } => {
            let instant = require_local(&date, offset);
            let jd = instant.to_jd_utc();
            println!("Ayanamsha systems at {instant} (sorted by degree):");
            for row in catalogue(jd) {
                println!(
                    "{:>2}  {:<36} {:9.4} deg  {}",
                    row.system_id, row.name, row.degree_deg, row.description
                );
            }
        }
        Commands::AyanamshaLookup {
            query,
            date,
            offset,
        } => {
            let instant = require_local(&date, offset);
            match lookup(instant.to_jd_utc(), &query) {
                Some(row) => {
                    println!("{} (id {})", row.name, row.system_id);
                    println!("Degree: {:.4} deg", row.degree_deg);
                    println!("{}", row.description);
                }
                None => {
                    eprintln!("No ayanamsha system matches '{query}'");
                    std::process::exit(1);
                }
            }
        }
        Commands::Nakshatra { lon } => {
            let pos = nakshatra_from_longitude(lon);
            println!(
                "Nakshatra: {} (index {}), pada {}",
                pos.nakshatra.name(),
                pos.nakshatra_index,
                pos.pada
            );
            println!("Lord: {}", pos.lord.name());
            println!(
                "Degrees in nakshatra: {:.4} of {:.4}",
                pos.degrees_in_nakshatra,
                kaala_vedic::NAKSHATRA_SPAN_DEG
            );
        }
    }
}
