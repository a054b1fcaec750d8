use rand::SeedableRng;
use rand::rngs::StdRng;

use capgrid_analytics::{ConfidenceBand, SeriesParams, trailing_anchor};

use super::parse_day;

pub fn series(days: i64, seed: u64, anchor: Option<&str>) -> anyhow::Result<()> {
    let anchor = match anchor {
        Some(_) => parse_day(anchor)?,
        None => trailing_anchor(parse_day(None)?),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let points = SeriesParams::default().generate(days, anchor, &mut rng)?;
    let banded = ConfidenceBand::default().apply(&points);

    println!("{}", serde_json::to_string_pretty(&banded)?);
    Ok(())
}
