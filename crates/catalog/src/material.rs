//! Material categories and their disposal metadata.

/// A disposal class the scanner can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MaterialCategory {
    /// Plastic packaging.
    Plastic,
    /// Paper and cardboard.
    Paper,
    /// Glass bottles and jars.
    Glass,
    /// Metal and aluminium.
    Metal,
    /// Organic / wet waste.
    WetOrganic,
    /// Non-recyclable residual waste.
    DryResidual,
    /// The sensors could not identify the material.
    Unknown,
}

impl MaterialCategory {
    /// Every category, in catalog order.
    pub const ALL: [MaterialCategory; 7] = [
        MaterialCategory::Plastic,
        MaterialCategory::Paper,
        MaterialCategory::Glass,
        MaterialCategory::Metal,
        MaterialCategory::WetOrganic,
        MaterialCategory::DryResidual,
        MaterialCategory::Unknown,
    ];

    /// The six categories a scan can produce. `Unknown` is excluded.
    pub const DETECTABLE: [MaterialCategory; 6] = [
        MaterialCategory::Plastic,
        MaterialCategory::Paper,
        MaterialCategory::Glass,
        MaterialCategory::Metal,
        MaterialCategory::WetOrganic,
        MaterialCategory::DryResidual,
    ];

    /// Stable lowercase identifier, as used by the device firmware.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            MaterialCategory::Plastic => "plastica",
            MaterialCategory::Paper => "carta",
            MaterialCategory::Glass => "vetro",
            MaterialCategory::Metal => "metallo",
            MaterialCategory::WetOrganic => "umido",
            MaterialCategory::DryResidual => "secco",
            MaterialCategory::Unknown => "sconosciuto",
        }
    }

    /// Disposal metadata for this category.
    #[must_use]
    pub const fn info(self) -> &'static MaterialInfo {
        lookup(self)
    }

    /// `true` for every category a scan can yield.
    #[must_use]
    pub const fn is_detectable(self) -> bool {
        !matches!(self, MaterialCategory::Unknown)
    }
}

impl core::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.info().name)
    }
}

/// Returned by [`MaterialCategory::from_str`] for an unrecognised key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseCategoryError;

impl core::fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown material key")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseCategoryError {}

impl core::str::FromStr for MaterialCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialCategory::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or(ParseCategoryError)
    }
}

/// Presentation colour of a category card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Swatch {
    /// Card fill as `0xRRGGBB`.
    pub fill: u32,
    /// Whether text drawn on the card is light (white) rather than dark.
    pub light_text: bool,
}

impl Swatch {
    /// Red, green and blue channels of the fill.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.fill.to_be_bytes();
        (r, g, b)
    }

    /// Perceived brightness of the fill, `0..=255` (Rec. 601 weights).
    #[must_use]
    pub const fn luma(self) -> u8 {
        let (r, g, b) = self.rgb();
        let weighted = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
        // Max 255_000 / 1000 = 255, fits in u8.
        #[allow(clippy::cast_possible_truncation)]
        let luma = (weighted / 1000) as u8;
        luma
    }
}

/// Display and disposal metadata for one [`MaterialCategory`].
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MaterialInfo {
    /// Name shown on the result card.
    pub name: &'static str,
    /// Which bin the item goes in.
    pub bin: &'static str,
    /// How to prepare the item before disposal.
    pub instructions: &'static str,
    /// Icon shown on the result card and history rows.
    pub icon: &'static str,
    /// Card colour.
    pub swatch: Swatch,
}

static PLASTIC: MaterialInfo = MaterialInfo {
    name: "Plastica",
    bin: "Contenitore Giallo",
    instructions: "Svuota e sciacqua i contenitori. Schiaccia le bottiglie per ridurre il volume.",
    icon: "♻️",
    swatch: Swatch { fill: 0xFACC15, light_text: false },
};

static PAPER: MaterialInfo = MaterialInfo {
    name: "Carta e Cartone",
    bin: "Contenitore Blu",
    instructions: "Rimuovi nastro adesivo o parti metalliche. Non inserire carta sporca di cibo.",
    icon: "📦",
    swatch: Swatch { fill: 0x3B82F6, light_text: true },
};

static GLASS: MaterialInfo = MaterialInfo {
    name: "Vetro",
    bin: "Contenitore Verde",
    instructions: "Togli tappi e coperchi. Non è necessario rimuovere le etichette.",
    icon: "🍾",
    swatch: Swatch { fill: 0x16A34A, light_text: true },
};

static METAL: MaterialInfo = MaterialInfo {
    name: "Metalli / Alluminio",
    bin: "Contenitore Metalli/Plastica",
    instructions: "Lattine e fogli di alluminio sono riciclabili al 100%. Svuota bene.",
    icon: "🥫",
    swatch: Swatch { fill: 0x9CA3AF, light_text: false },
};

static WET_ORGANIC: MaterialInfo = MaterialInfo {
    name: "Organico / Umido",
    bin: "Contenitore Marrone",
    instructions: "Usa solo sacchetti compostabili. Scarti alimentari e piccole potature.",
    icon: "🍎",
    swatch: Swatch { fill: 0x92400E, light_text: true },
};

static DRY_RESIDUAL: MaterialInfo = MaterialInfo {
    name: "Secco Residuo",
    bin: "Contenitore Grigio",
    instructions: "Tutto ciò che non può essere riciclato. No pile o farmaci.",
    icon: "🗑️",
    swatch: Swatch { fill: 0x1F2937, light_text: true },
};

static UNKNOWN: MaterialInfo = MaterialInfo {
    name: "Non Identificato",
    bin: "Verifica Manuale",
    instructions: "I sensori non hanno riconosciuto il materiale. Riprova o consulta la guida.",
    icon: "❓",
    swatch: Swatch { fill: 0xEF4444, light_text: true },
};

/// Look up the metadata for `category`. Total over the enumeration.
#[must_use]
pub const fn lookup(category: MaterialCategory) -> &'static MaterialInfo {
    match category {
        MaterialCategory::Plastic => &PLASTIC,
        MaterialCategory::Paper => &PAPER,
        MaterialCategory::Glass => &GLASS,
        MaterialCategory::Metal => &METAL,
        MaterialCategory::WetOrganic => &WET_ORGANIC,
        MaterialCategory::DryResidual => &DRY_RESIDUAL,
        MaterialCategory::Unknown => &UNKNOWN,
    }
}
