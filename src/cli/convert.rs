//! Convert command handler
//!
//! Converts between decimal degrees and the degrees/minutes/seconds rationals
//! stored in photo metadata.

use crate::coord::{decimal_to_dms, dms_to_decimal, latitude_ref, longitude_ref, Dms};
use crate::error::{Error, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Which axis a decimal value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Axis {
    Lat,
    Lon,
}

/// Convert command arguments
#[derive(Args)]
pub struct ConvertArgs {
    /// Decimal degrees to split into DMS
    #[arg(allow_negative_numbers = true, required_unless_present = "dms")]
    pub decimal: Option<f64>,

    /// Axis of the decimal value, selects N/S or E/W
    #[arg(long, short = 'a', value_enum, default_value = "lat")]
    pub axis: Axis,

    /// Degrees, minutes, seconds and hemisphere to join into decimal degrees
    #[arg(
        long,
        num_args = 4,
        value_names = ["DEG", "MIN", "SEC", "REF"],
        conflicts_with = "decimal"
    )]
    pub dms: Option<Vec<String>>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

/// DMS rendering of one decimal value
#[derive(Debug, Serialize)]
struct Conversion {
    decimal: f64,
    #[serde(rename = "ref")]
    hemisphere: &'static str,
    dms: Dms,
}

/// Run the convert command
pub fn run(args: ConvertArgs) -> Result<()> {
    if let Some(parts) = &args.dms {
        let decimal = join_dms(parts)?;
        if args.json {
            println!("{}", serde_json::json!({ "decimal": decimal }));
        } else {
            println!("{}", decimal);
        }
        return Ok(());
    }

    let decimal = args
        .decimal
        .ok_or_else(|| Error::InvalidCoordinates("No value to convert".to_string()))?;
    let conversion = split_decimal(decimal, args.axis)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        let dms = &conversion.dms;
        println!(
            "{}° {}' {:.4}\" {}",
            dms.degrees.numerator,
            dms.minutes.numerator,
            dms.seconds.to_f64(),
            conversion.hemisphere
        );
        println!("{} {} {} {}", dms.degrees, dms.minutes, dms.seconds, conversion.hemisphere);
    }

    Ok(())
}

fn split_decimal(decimal: f64, axis: Axis) -> Result<Conversion> {
    let (limit, hemisphere) = match axis {
        Axis::Lat => (90.0, latitude_ref(decimal)),
        Axis::Lon => (180.0, longitude_ref(decimal)),
    };
    if !decimal.is_finite() || decimal.abs() > limit {
        return Err(Error::InvalidCoordinates(format!(
            "{} is out of range for {:?}",
            decimal, axis
        )));
    }

    Ok(Conversion {
        decimal,
        hemisphere,
        dms: decimal_to_dms(decimal),
    })
}

fn join_dms(parts: &[String]) -> Result<f64> {
    let number = |text: &str| {
        text.parse::<f64>()
            .map_err(|_| Error::InvalidCoordinates(format!("Not a number: {}", text)))
    };
    match parts {
        [degrees, minutes, seconds, hemisphere] => Ok(dms_to_decimal(
            number(degrees)?,
            number(minutes)?,
            number(seconds)?,
            hemisphere,
        )),
        _ => Err(Error::InvalidCoordinates(
            "Expected degrees, minutes, seconds and a hemisphere".to_string(),
        )),
    }
}
