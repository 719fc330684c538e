//! workpoint CLI - points along straight edges.
//!
//! Computes subdivision points on an edge given as two endpoints, either a
//! single point at `index/parts` or one point per cut boundary.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use workpoint_divide::{point_at_division, points_at_all_divisions, Division, Segment};
use workpoint_math::Point3;

#[derive(Parser)]
#[command(name = "workpoint")]
#[command(about = "Points along straight edges at configurable fractions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the point at index/parts along an edge
    Divide {
        /// Edge start as "x,y,z"
        #[arg(long)]
        start: String,
        /// Edge end as "x,y,z"
        #[arg(long)]
        end: String,
        /// Number of parts to cut the edge into (clamped to 2..=100)
        #[arg(short = 'n', long, default_value_t = 2)]
        parts: i64,
        /// Which cut boundary to report (negative or >parts extrapolates)
        #[arg(short = 'k', long, default_value_t = 1)]
        index: i64,
        /// Emit every cut boundary 0..=parts instead of a single point
        #[arg(long)]
        all: bool,
        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Divide {
            start,
            end,
            parts,
            index,
            all,
            json,
        } => divide(&start, &end, parts, index, all, json),
    }
}

fn divide(start: &str, end: &str, parts: i64, index: i64, all: bool, json: bool) -> Result<()> {
    let segment = Segment::new(parse_point(start)?, parse_point(end)?);
    let division = Division::new(parts, index);

    let points = if all {
        points_at_all_divisions(&segment, division)
    } else {
        vec![point_at_division(&segment, division)]
    };

    if json {
        let coords: Vec<[f64; 3]> = points.iter().map(|p| [p.x, p.y, p.z]).collect();
        println!("{}", serde_json::to_string(&coords)?);
    } else {
        for p in &points {
            println!("{} {} {}", p.x, p.y, p.z);
        }
    }

    Ok(())
}

fn parse_point(text: &str) -> Result<Point3> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != 3 {
        bail!("expected \"x,y,z\", got {text:?}");
    }
    let coord = |i: usize| -> Result<f64> {
        fields[i]
            .trim()
            .parse()
            .with_context(|| format!("bad coordinate {:?} in {text:?}", fields[i]))
    };
    Ok(Point3::new(coord(0)?, coord(1)?, coord(2)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let p = parse_point("1.5, -2,4e1").unwrap();
        assert_eq!(p, Point3::new(1.5, -2.0, 40.0));
    }

    #[test]
    fn test_parse_point_rejects_bad_input() {
        assert!(parse_point("1,2").is_err());
        assert!(parse_point("1,2,three").is_err());
    }
}
