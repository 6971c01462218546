use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HomefixError;
use crate::text::normalize;

/// Category of home-service work
///
/// The declaration order is significant: keyword ties in the classifier are
/// resolved in favour of the discipline declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    Electrical,
    Plumbing,
    Hvac,
    Carpentry,
    Painting,
    Locksmith,
    Masonry,
    Appliances,
    /// Fallback when nothing more specific can be inferred
    General,
}

impl Discipline {
    /// Every discipline in declaration order, fallback last
    pub const ALL: [Discipline; 9] = [
        Discipline::Electrical,
        Discipline::Plumbing,
        Discipline::Hvac,
        Discipline::Carpentry,
        Discipline::Painting,
        Discipline::Locksmith,
        Discipline::Masonry,
        Discipline::Appliances,
        Discipline::General,
    ];

    /// Designated fallback discipline
    pub const FALLBACK: Discipline = Discipline::General;

    /// Stable machine identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::Electrical => "electrical",
            Discipline::Plumbing => "plumbing",
            Discipline::Hvac => "hvac",
            Discipline::Carpentry => "carpentry",
            Discipline::Painting => "painting",
            Discipline::Locksmith => "locksmith",
            Discipline::Masonry => "masonry",
            Discipline::Appliances => "appliances",
            Discipline::General => "general",
        }
    }

    /// Human-readable label used in diagnoses
    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Electrical => "Electrical",
            Discipline::Plumbing => "Plumbing",
            Discipline::Hvac => "HVAC",
            Discipline::Carpentry => "Carpentry",
            Discipline::Painting => "Painting",
            Discipline::Locksmith => "Locksmith",
            Discipline::Masonry => "Masonry",
            Discipline::Appliances => "Appliance",
            Discipline::General => "General",
        }
    }

    /// Trade names clients use for each discipline (normalized form)
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Discipline::Electrical => &["electricidad", "electrico", "electrica", "electricista"],
            Discipline::Plumbing => &["plomeria", "fontaneria", "plomero", "fontanero"],
            Discipline::Hvac => &[
                "aire acondicionado",
                "climatizacion",
                "refrigeracion",
                "air conditioning",
            ],
            Discipline::Carpentry => &["carpinteria", "carpintero"],
            Discipline::Painting => &["pintura", "pintor"],
            Discipline::Locksmith => &["cerrajeria", "cerrajero"],
            Discipline::Masonry => &["albanileria", "albanil", "construccion"],
            Discipline::Appliances => &["electrodomesticos", "linea blanca", "appliance"],
            Discipline::General => &["general", "otro", "other", "mantenimiento"],
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Discipline {
    type Err = HomefixError;

    /// Parse a discipline from its identifier, label or a trade alias.
    /// Matching is case and accent insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = normalize(s);

        Discipline::ALL
            .into_iter()
            .find(|d| {
                d.as_str() == needle
                    || normalize(d.label()) == needle
                    || d.aliases().iter().any(|alias| *alias == needle)
            })
            .ok_or_else(|| HomefixError::UnknownDiscipline { value: s.to_string() })
    }
}
