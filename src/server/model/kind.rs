use std::fmt;

/// Selects which reference table, and matching favorite table, an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// `character` / `favorite_character`
    Character,
    /// `planet` / `favorite_planet`
    Planet,
    /// `vehicle` / `favorite_vehicle`
    Vehicle,
}

impl EntityKind {
    /// Resolution order used when a request names more than one target
    pub const PRIORITY: [EntityKind; 3] = [Self::Character, Self::Planet, Self::Vehicle];

    /// Lowercase singular name, e.g. `character`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Planet => "planet",
            Self::Vehicle => "vehicle",
        }
    }

    /// Capitalized singular name, e.g. `Character`
    pub fn title(&self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Planet => "Planet",
            Self::Vehicle => "Vehicle",
        }
    }

    /// Capitalized plural name, e.g. `Characters`
    pub fn plural_title(&self) -> &'static str {
        match self {
            Self::Character => "Characters",
            Self::Planet => "Planets",
            Self::Vehicle => "Vehicles",
        }
    }

    /// Name of the request body field holding the target ID, e.g. `character_id`
    pub fn id_field(&self) -> &'static str {
        match self {
            Self::Character => "character_id",
            Self::Planet => "planet_id",
            Self::Vehicle => "vehicle_id",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
