//! Lead command implementation

use super::{parse_discipline, pipeline};
use crate::cli::LeadArgs;
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::LeadOutput;
use anyhow::Result;
use homefix_core::config::LayeredConfig;
use homefix_core::error::LeadValidationError;
use homefix_core::models::{Contact, LeadRequest, LocationInput};
use homefix_core::ports::Geocoder;
use homefix_core::HomefixError;
use homefix_leads::{coordinates, LeadAssembler, LeadService};
use homefix_store::{GazetteerGeocoder, HttpGeocoder, MemoryLeadStore};
use std::sync::Arc;
use std::time::Duration;

pub async fn execute(args: LeadArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    // Contact is checked before any location parsing
    if args.phone.trim().is_empty() {
        return Err(errors::lead_rejected(&LeadValidationError::MissingContact).into());
    }

    let location = match (args.lat, args.lng, args.address) {
        (Some(lat), Some(lng), _) => {
            coordinates(lat, lng).map_err(|e| errors::lead_rejected(&e))?
        }
        (_, _, Some(address)) => LocationInput::Address(address),
        _ => LocationInput::Address(String::new()),
    };

    let preselected = parse_discipline(args.discipline.as_deref())?;
    let classification =
        pipeline(config).classify(&args.text, args.image.as_deref(), preselected).await;

    let geocoder: Arc<dyn Geocoder> = match (&config.geocoder_url.value, &args.gazetteer) {
        (Some(url), _) => Arc::new(HttpGeocoder::new(
            url.clone(),
            Duration::from_millis(config.remote_timeout_ms.value),
        )),
        (None, Some(path)) => Arc::new(
            GazetteerGeocoder::load_json(path).map_err(|e| errors::gazetteer_unreadable(path, e))?,
        ),
        (None, None) => Arc::new(GazetteerGeocoder::default()),
    };

    let service = LeadService::new(
        LeadAssembler::new(geocoder, config.fallback_location.value),
        MemoryLeadStore::new(),
    );

    let mut request = LeadRequest::new(Contact::new(args.name, args.phone), location)
        .with_description(args.text)
        .with_priority_tier(args.priority);
    if let Some(image) = args.image {
        request = request.with_image(image);
    }

    let lead = match service.submit(Some(&classification), request).await {
        Ok(lead) => lead,
        Err(HomefixError::Validation(e)) => return Err(errors::lead_rejected(&e).into()),
        Err(e) => return Err(e.into()),
    };
    let result = LeadOutput::from(&lead);

    if result.location_approximate {
        output.warning(format!("Address could not be resolved; using {}", result.location));
    }

    if output.is_json() {
        return output.result(result);
    }

    output.section("Lead");
    output.kv("ID", result.id);
    output.kv("Discipline", result.discipline.label());
    output.kv("Urgency", result.urgency);
    output.kv("Diagnosis", &result.diagnosis);
    output.kv("Location", result.location);
    if let Some(address) = &result.address {
        output.kv("Address", address);
    }
    output.kv("Priority", if result.priority_boost { "yes" } else { "no" });

    Ok(())
}
