use homefix_core::error::LeadValidationError;
use homefix_core::models::{
    Classification, GeoPoint, Lead, LeadRequest, LocationInput, ResolvedLocation,
};
use homefix_core::ports::Geocoder;

/// Turns a lead request into a validated [`Lead`].
///
/// Rules are checked in a fixed order and the first failure is returned:
/// contact phone, then location, then classification.
pub struct LeadAssembler<G: Geocoder> {
    geocoder: G,
    fallback: GeoPoint,
}

impl<G: Geocoder> LeadAssembler<G> {
    /// `fallback` stands in for addresses the geocoder cannot resolve
    pub fn new(geocoder: G, fallback: GeoPoint) -> Self {
        Self { geocoder, fallback }
    }

    pub fn fallback(&self) -> GeoPoint {
        self.fallback
    }

    pub async fn assemble(
        &self,
        classification: Option<&Classification>,
        request: LeadRequest,
    ) -> Result<Lead, LeadValidationError> {
        if request.contact.phone.trim().is_empty() {
            return Err(LeadValidationError::MissingContact);
        }

        let location = self.resolve_location(&request.location).await?;

        let classification = classification.ok_or(LeadValidationError::MissingDiscipline)?;

        let description = request
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| classification.normalized_description().to_string());

        let lead = Lead::new(
            request.contact,
            description,
            location,
            classification,
            request.priority_tier,
            request.image_ref,
        )?;

        tracing::info!(
            lead_id = %lead.id(),
            discipline = %lead.discipline(),
            urgency = %lead.urgency(),
            approximate = lead.location_approximate(),
            priority = lead.priority_boost(),
            "Lead assembled"
        );

        Ok(lead)
    }

    async fn resolve_location(
        &self,
        input: &LocationInput,
    ) -> Result<ResolvedLocation, LeadValidationError> {
        match input {
            LocationInput::Point(point) => Ok(ResolvedLocation {
                point: *point,
                approximate: false,
                address: self.describe(*point).await,
            }),
            LocationInput::Address(address) => {
                let address = address.trim();
                if address.is_empty() {
                    return Err(LeadValidationError::UnresolvableLocation);
                }

                let resolved = match self.geocoder.geocode(address).await {
                    Ok(Some(point)) => Some(point),
                    Ok(None) => {
                        tracing::warn!(address, "Address not found, using fallback location");
                        None
                    }
                    Err(e) => {
                        tracing::warn!(address, error = %e, "Geocoding failed, using fallback location");
                        None
                    }
                };

                Ok(ResolvedLocation {
                    point: resolved.unwrap_or(self.fallback),
                    approximate: resolved.is_none(),
                    address: Some(address.to_string()),
                })
            }
        }
    }

    /// Reverse geocoding never blocks a lead
    async fn describe(&self, point: GeoPoint) -> Option<String> {
        match self.geocoder.reverse_geocode(point).await {
            Ok(address) => address,
            Err(e) => {
                tracing::debug!(%point, error = %e, "Reverse geocoding failed");
                None
            }
        }
    }
}

/// Raw coordinates as a location input
pub fn coordinates(lat: f64, lng: f64) -> Result<LocationInput, LeadValidationError> {
    GeoPoint::new(lat, lng)
        .map(LocationInput::Point)
        .map_err(|_| LeadValidationError::InvalidCoordinates { lat, lng })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use homefix_core::models::{ClassificationSource, Contact, Discipline, Urgency};
    use homefix_core::{HomefixError, Result};

    /// Knows one address and one point
    struct StubGeocoder {
        fail: bool,
    }

    const KNOWN_ADDRESS: &str = "Av. Reforma 222";

    fn known_point() -> GeoPoint {
        GeoPoint::new(19.4270, -99.1677).unwrap()
    }

    #[async_trait]
    impl Geocoder for StubGeocoder {
        async fn geocode(&self, address: &str) -> Result<Option<GeoPoint>> {
            if self.fail {
                return Err(HomefixError::Geocoding { reason: "service down".to_string() });
            }
            Ok((address == KNOWN_ADDRESS).then(known_point))
        }

        async fn reverse_geocode(&self, point: GeoPoint) -> Result<Option<String>> {
            if self.fail {
                return Err(HomefixError::Geocoding { reason: "service down".to_string() });
            }
            Ok((point == known_point()).then(|| KNOWN_ADDRESS.to_string()))
        }
    }

    fn fallback() -> GeoPoint {
        GeoPoint::new(19.4326, -99.1332).unwrap()
    }

    fn assembler() -> LeadAssembler<StubGeocoder> {
        LeadAssembler::new(StubGeocoder { fail: false }, fallback())
    }

    fn classification() -> Classification {
        Classification::new(
            Discipline::Electrical,
            Urgency::HIGH,
            "Electrical service",
            "se me poncho un cable",
            ClassificationSource::Local,
        )
        .unwrap()
    }

    fn request(phone: &str, location: LocationInput) -> LeadRequest {
        LeadRequest::new(Contact::new("Maria", phone), location)
    }

    #[tokio::test]
    async fn test_assembles_lead_from_point() {
        let request = request("5512345678", LocationInput::Point(known_point()))
            .with_description("Se me ponchó un cable")
            .with_image("uploads/cable.jpg");

        let lead = assembler().assemble(Some(&classification()), request).await.unwrap();

        assert_eq!(lead.contact_phone(), "5512345678");
        assert_eq!(lead.location(), known_point());
        assert!(!lead.location_approximate());
        assert_eq!(lead.address(), Some(KNOWN_ADDRESS));
        assert_eq!(lead.discipline(), Discipline::Electrical);
        assert_eq!(lead.urgency(), Urgency::HIGH);
        assert_eq!(lead.diagnosis(), "Electrical service");
        assert_eq!(lead.description(), "Se me ponchó un cable");
        assert_eq!(lead.image_ref(), Some("uploads/cable.jpg"));
        assert!(!lead.priority_boost());
    }

    #[tokio::test]
    async fn test_empty_phone_is_missing_contact() {
        let empty = LeadRequest::new(Contact::new("", ""), LocationInput::Point(known_point()));
        let err = assembler().assemble(Some(&classification()), empty).await.unwrap_err();
        assert_eq!(err, LeadValidationError::MissingContact);
        assert_eq!(err.field(), "contact.phone");

        let blank = request("   ", LocationInput::Point(known_point()));
        let err = assembler().assemble(Some(&classification()), blank).await.unwrap_err();
        assert_eq!(err, LeadValidationError::MissingContact);
    }

    #[tokio::test]
    async fn test_phone_checked_before_location_and_discipline() {
        let request = request("", LocationInput::Address(String::new()));
        let err = assembler().assemble(None, request).await.unwrap_err();
        assert_eq!(err, LeadValidationError::MissingContact);
    }

    #[tokio::test]
    async fn test_location_checked_before_discipline() {
        let request = request("5512345678", LocationInput::Address("   ".to_string()));
        let err = assembler().assemble(None, request).await.unwrap_err();
        assert_eq!(err, LeadValidationError::UnresolvableLocation);
        assert_eq!(err.field(), "location");
    }

    #[tokio::test]
    async fn test_missing_classification() {
        let request = request("5512345678", LocationInput::Point(known_point()));
        let err = assembler().assemble(None, request).await.unwrap_err();
        assert_eq!(err, LeadValidationError::MissingDiscipline);
    }

    #[tokio::test]
    async fn test_known_address_is_geocoded() {
        let request = request("5512345678", LocationInput::Address(KNOWN_ADDRESS.to_string()));
        let lead = assembler().assemble(Some(&classification()), request).await.unwrap();
        assert_eq!(lead.location(), known_point());
        assert!(!lead.location_approximate());
        assert_eq!(lead.address(), Some(KNOWN_ADDRESS));
    }

    #[tokio::test]
    async fn test_unknown_address_falls_back_approximate() {
        let request = request("5512345678", LocationInput::Address("Calle Falsa 123".to_string()));
        let lead = assembler().assemble(Some(&classification()), request).await.unwrap();
        assert_eq!(lead.location(), fallback());
        assert!(lead.location_approximate());
        assert_eq!(lead.address(), Some("Calle Falsa 123"));
    }

    #[tokio::test]
    async fn test_geocoder_failure_does_not_block() {
        let assembler = LeadAssembler::new(StubGeocoder { fail: true }, fallback());

        let by_address = request("5512345678", LocationInput::Address(KNOWN_ADDRESS.to_string()));
        let lead = assembler.assemble(Some(&classification()), by_address).await.unwrap();
        assert!(lead.location_approximate());

        let by_point = request("5512345678", LocationInput::Point(known_point()));
        let lead = assembler.assemble(Some(&classification()), by_point).await.unwrap();
        assert!(!lead.location_approximate());
        assert_eq!(lead.address(), None);
    }

    #[tokio::test]
    async fn test_priority_boost_follows_tier() {
        for tier in [true, false] {
            let request = request("5512345678", LocationInput::Point(known_point()))
                .with_priority_tier(tier);
            let lead = assembler().assemble(Some(&classification()), request).await.unwrap();
            assert_eq!(lead.priority_boost(), tier);
        }
    }

    #[tokio::test]
    async fn test_blank_description_uses_normalized_text() {
        let request =
            request("5512345678", LocationInput::Point(known_point())).with_description("  ");
        let lead = assembler().assemble(Some(&classification()), request).await.unwrap();
        assert_eq!(lead.description(), "se me poncho un cable");
    }

    #[test]
    fn test_coordinates_helper() {
        let expected = LocationInput::Point(GeoPoint::new(19.43, -99.13).unwrap());
        assert_eq!(coordinates(19.43, -99.13).unwrap(), expected);

        let err = coordinates(95.0, -99.13).unwrap_err();
        assert_eq!(err, LeadValidationError::InvalidCoordinates { lat: 95.0, lng: -99.13 });
        assert_eq!(err.field(), "location.coordinates");
    }
}
