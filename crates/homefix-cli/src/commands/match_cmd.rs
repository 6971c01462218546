//! Match command implementation

use super::parse_discipline;
use crate::cli::MatchArgs;
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::{MatchOutput, MatchRow};
use anyhow::Result;
use homefix_core::config::LayeredConfig;
use homefix_core::models::GeoPoint;
use homefix_geo::{matches_to_feature_collection, MatchQuery, MatchingService};
use homefix_store::MemoryCandidateDirectory;

pub async fn execute(args: MatchArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let origin =
        GeoPoint::new(args.lat, args.lng).map_err(|_| errors::invalid_origin(args.lat, args.lng))?;
    let discipline = parse_discipline(args.discipline.as_deref())?;

    let directory = MemoryCandidateDirectory::load_json(&args.candidates)
        .map_err(|e| errors::candidates_unreadable(&args.candidates, e))?;

    let radius_km = config.radius_km.value;
    if !(radius_km.is_finite() && radius_km > 0.0) {
        output.warning(format!("Radius {} km matches nothing", radius_km));
    }

    let query = MatchQuery::new(origin, radius_km)
        .with_max_results(config.max_results.value)
        .with_discipline(discipline);
    let results = MatchingService::new(directory).find_matches(&query).await?;

    if args.geojson {
        return output.data(&matches_to_feature_collection(&results));
    }

    if output.is_json() {
        return output.result(MatchOutput { origin, radius_km, results });
    }

    if results.is_empty() {
        output.info(format!("No professionals within {} km of {}", radius_km, origin));
        return Ok(());
    }

    output.section(format!("Professionals within {} km of {}", radius_km, origin));
    let rows: Vec<MatchRow> =
        results.iter().enumerate().map(|(i, result)| MatchRow::new(i + 1, result)).collect();
    output.table(rows);

    Ok(())
}
