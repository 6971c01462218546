//! Static keyword tables for the local classifier.
//!
//! Every phrase is stored in normalized form (lowercase, no diacritics) so it
//! can be compared directly against [`homefix_core::text::normalize`] output.
//! The tables are read-only and shared freely between threads.

use homefix_core::models::Discipline;

/// Keyword set for one discipline
#[derive(Debug)]
pub struct LexiconEntry {
    pub discipline: Discipline,
    /// Matched as plain substrings, so stems are allowed
    pub keywords: &'static [&'static str],
}

/// Keyword table in declaration order. Ties are won by the earlier entry.
pub static LEXICON: &[LexiconEntry] = &[
    LexiconEntry {
        discipline: Discipline::Electrical,
        keywords: &[
            "luz",
            "cable",
            "enchufe",
            "contacto",
            "apagador",
            "corto circuito",
            "cortocircuito",
            "foco",
            "fusible",
            "pastilla",
            "breaker",
            "voltaje",
            "tablero electrico",
            "electric",
            "wiring",
            "outlet",
            "light switch",
        ],
    },
    LexiconEntry {
        discipline: Discipline::Plumbing,
        keywords: &[
            "fuga",
            "agua",
            "tuberia",
            "tubo",
            "llave de agua",
            "grifo",
            "drenaje",
            "coladera",
            "inodoro",
            "excusado",
            "bano",
            "lavabo",
            "regadera",
            "tinaco",
            "boiler",
            "calentador",
            "leak",
            "pipe",
            "toilet",
            "drain",
            "faucet",
        ],
    },
    LexiconEntry {
        discipline: Discipline::Hvac,
        keywords: &[
            "aire acondicionado",
            "minisplit",
            "clima",
            "calefaccion",
            "ventilacion",
            "refrigerante",
            "air conditioning",
            "hvac",
            "heating",
            "furnace",
            "thermostat",
        ],
    },
    LexiconEntry {
        discipline: Discipline::Carpentry,
        keywords: &[
            "madera",
            "puerta",
            "closet",
            "mueble",
            "cajon",
            "repisa",
            "gabinete",
            "bisagra",
            "wood",
            "cabinet",
            "furniture",
            "shelf",
        ],
    },
    LexiconEntry {
        discipline: Discipline::Painting,
        keywords: &[
            "pintura",
            "pintar",
            "barniz",
            "fachada",
            "resane",
            "brocha",
            "paint",
            "varnish",
        ],
    },
    LexiconEntry {
        discipline: Discipline::Locksmith,
        keywords: &[
            "cerradura",
            "chapa",
            "llaves",
            "candado",
            "me quede afuera",
            "lock",
            "locked out",
            "keys",
        ],
    },
    LexiconEntry {
        discipline: Discipline::Masonry,
        keywords: &[
            "concreto",
            "cemento",
            "ladrillo",
            "tabique",
            "grieta",
            "azulejo",
            "loseta",
            "muro",
            "barda",
            "impermeabiliz",
            "goteras",
            "brick",
            "concrete",
            "tile",
            "crack",
        ],
    },
    LexiconEntry {
        discipline: Discipline::Appliances,
        keywords: &[
            "lavadora",
            "secadora",
            "refrigerador",
            "estufa",
            "horno",
            "microondas",
            "lavavajillas",
            "washer",
            "dryer",
            "fridge",
            "oven",
            "dishwasher",
        ],
    },
];

/// Professional titles that force a discipline before any scoring.
/// Matched at a word start with plural or feminine endings allowed.
pub static OVERRIDES: &[(&str, Discipline)] = &[
    ("electricista", Discipline::Electrical),
    ("electrician", Discipline::Electrical),
    ("plomero", Discipline::Plumbing),
    ("fontanero", Discipline::Plumbing),
    ("plumber", Discipline::Plumbing),
    ("tecnico en refrigeracion", Discipline::Hvac),
    ("tecnico de aire", Discipline::Hvac),
    ("carpintero", Discipline::Carpentry),
    ("carpenter", Discipline::Carpentry),
    ("pintor", Discipline::Painting),
    ("painter", Discipline::Painting),
    ("cerrajero", Discipline::Locksmith),
    ("locksmith", Discipline::Locksmith),
    ("albanil", Discipline::Masonry),
    ("mason", Discipline::Masonry),
    ("tecnico en linea blanca", Discipline::Appliances),
];

/// Phrases that raise urgency, matched at a word start with inflected
/// endings allowed (`urgentemente`, `emergencias`)
pub static URGENCY_MARKERS: &[&str] = &[
    "urgente",
    "urge",
    "urgencia",
    "emergencia",
    "ahora",
    "ahorita",
    "ya mismo",
    "inmediato",
    "inmediatamente",
    "lo antes posible",
    "cuanto antes",
    "urgent",
    "emergency",
    "now",
    "immediately",
    "asap",
];

/// Phrases indicating new installation work, matched on word boundaries
pub static INSTALL_MARKERS: &[&str] = &[
    "instalar",
    "instalacion",
    "colocar",
    "poner",
    "cambiar",
    "install",
    "installation",
    "replace",
];

/// Phrases indicating repair work, matched on word boundaries
pub static REPAIR_MARKERS: &[&str] = &[
    "reparar",
    "reparacion",
    "arreglar",
    "arreglo",
    "componer",
    "descompuesto",
    "descompuesta",
    "no funciona",
    "no sirve",
    "repair",
    "fix",
    "broken",
];
