//! Command-line ECEF to SEZ topocentric frame converter.
//!
//! Takes a ground-station ECEF position and an object ECEF position as six
//! positional values in kilometers, and prints the station-to-object vector
//! in the South-East-Zenith frame as three lines on stdout.

use clap::Parser;
use glam::DVec3;
use topoframe::{Ellipsoid, ecef_to_sez};

#[derive(Parser)]
#[command(about = "Convert ECEF station and object positions to the topocentric SEZ frame")]
struct CliArgs {
    /// Station ECEF x-position in kilometers.
    o_x_km: f64,

    /// Station ECEF y-position in kilometers.
    o_y_km: f64,

    /// Station ECEF z-position in kilometers.
    o_z_km: f64,

    /// Object ECEF x-position in kilometers.
    x_km: f64,

    /// Object ECEF y-position in kilometers.
    y_km: f64,

    /// Object ECEF z-position in kilometers.
    z_km: f64,
}

fn main() {
    // Diagnostics go to stderr via tracing; stdout carries only the result.
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let args = CliArgs::parse();
    let station_km = DVec3::new(args.o_x_km, args.o_y_km, args.o_z_km);
    let object_km = DVec3::new(args.x_km, args.y_km, args.z_km);

    match ecef_to_sez(station_km, object_km, &Ellipsoid::WGS84) {
        Ok(sez) => {
            println!("{}", sez.s_km);
            println!("{}", sez.e_km);
            println!("{}", sez.z_km);
        }
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}
