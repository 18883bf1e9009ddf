//! The ten irrigation form fields and their input catalogue.

use std::fmt;
use std::str::FromStr;

/// One form field. Declaration order is the insertion order of the form
/// mapping, which is also the validation order and the JSON key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CropType,
    GrowthStage,
    Area,
    SoilType,
    SoilHumidity,
    Precipitation,
    Temperature,
    SolarRadiation,
    WindSpeed,
    RootDepth,
}

/// A selectable option: the code sent on the wire and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

const CROPS: &[Choice] = &[choice("1", "Maíz"), choice("2", "Arroz"), choice("3", "Café")];

// Codes follow the stage map of the calculation service.
const STAGES: &[Choice] = &[
    choice("1", "Siembra"),
    choice("2", "Floración"),
    choice("3", "Crecimiento"),
    choice("4", "Cosecha"),
];

const SOILS: &[Choice] = &[
    choice("1", "Arenoso"),
    choice("2", "Arcilloso"),
    choice("3", "Franco"),
];

const LOW_MID_HIGH: &[Choice] = &[choice("1", "Baja"), choice("2", "Media"), choice("3", "Alta")];

const RADIATION: &[Choice] = &[
    choice("1", "Soleado"),
    choice("2", "Parcialmente nublado"),
    choice("3", "Nublado"),
];

const WIND: &[Choice] = &[
    choice("1", "Calma"),
    choice("2", "Brisa leve"),
    choice("3", "Viento fuerte"),
];

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    /// Free-text numeric input. The value is submitted as typed.
    Number,
    /// Fixed list of coded options.
    Select(&'static [Choice]),
}

/// Which of the two form layouts to render.
///
/// `Numeric` takes humidity, solar radiation and wind speed as free numbers;
/// `Categorical` offers coded selects for those three instead. Keys, order
/// and validation do not change between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVariant {
    #[default]
    Numeric,
    Categorical,
}

impl FormVariant {
    /// Variant selected at build time through `RIEGO_FORM_VARIANT`.
    pub fn from_build_env() -> Self {
        option_env!("RIEGO_FORM_VARIANT")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for FormVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" | "numerico" => Ok(FormVariant::Numeric),
            "categorical" | "categorico" => Ok(FormVariant::Categorical),
            other => Err(format!("unknown form variant: {other}")),
        }
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormVariant::Numeric => write!(f, "numeric"),
            FormVariant::Categorical => write!(f, "categorical"),
        }
    }
}

/// Visual grouping of fields on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Crop,
    Soil,
    Climate,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Crop, Section::Soil, Section::Climate];

    pub fn title(self) -> &'static str {
        match self {
            Section::Crop => "DATOS DEL CULTIVO",
            Section::Soil => "CONDICIONES DEL SUELO",
            Section::Climate => "CONDICIONES CLIMÁTICAS",
        }
    }

    /// Fields of this section in display order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Section::Crop => &[Field::CropType, Field::GrowthStage, Field::Area, Field::RootDepth],
            Section::Soil => &[Field::SoilType, Field::SoilHumidity],
            Section::Climate => &[
                Field::Precipitation,
                Field::Temperature,
                Field::SolarRadiation,
                Field::WindSpeed,
            ],
        }
    }
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::CropType,
        Field::GrowthStage,
        Field::Area,
        Field::SoilType,
        Field::SoilHumidity,
        Field::Precipitation,
        Field::Temperature,
        Field::SolarRadiation,
        Field::WindSpeed,
        Field::RootDepth,
    ];

    /// Position in `Field::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// JSON key sent to the calculation service.
    pub fn key(self) -> &'static str {
        match self {
            Field::CropType => "tipoCultivo",
            Field::GrowthStage => "etapaCultivo",
            Field::Area => "superficie",
            Field::SoilType => "tipoSuelo",
            Field::SoilHumidity => "humedad",
            Field::Precipitation => "precipitacion",
            Field::Temperature => "temperatura",
            Field::SolarRadiation => "radiacionSolar",
            Field::WindSpeed => "velocidadViento",
            Field::RootDepth => "profundidadRaiz",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::CropType => "Tipo de cultivo",
            Field::GrowthStage => "Etapa del cultivo",
            Field::Area => "Superficie sembrada (ha)",
            Field::SoilType => "Tipo de suelo",
            Field::SoilHumidity => "Humedad del suelo (%)",
            Field::Precipitation => "Precipitación",
            Field::Temperature => "Temperatura promedio (°C)",
            Field::SolarRadiation => "Radiación solar (MJ/m²/día)",
            Field::WindSpeed => "Velocidad del viento (m/s)",
            Field::RootDepth => "Profundidad de raíz (cm)",
        }
    }

    pub fn section(self) -> Section {
        match self {
            Field::CropType | Field::GrowthStage | Field::Area | Field::RootDepth => Section::Crop,
            Field::SoilType | Field::SoilHumidity => Section::Soil,
            Field::Precipitation
            | Field::Temperature
            | Field::SolarRadiation
            | Field::WindSpeed => Section::Climate,
        }
    }

    pub fn input(self, variant: FormVariant) -> FieldInput {
        match (self, variant) {
            (Field::CropType, _) => FieldInput::Select(CROPS),
            (Field::GrowthStage, _) => FieldInput::Select(STAGES),
            (Field::SoilType, _) => FieldInput::Select(SOILS),
            (Field::Precipitation, _) => FieldInput::Select(LOW_MID_HIGH),
            (Field::SoilHumidity, FormVariant::Categorical) => FieldInput::Select(LOW_MID_HIGH),
            (Field::SolarRadiation, FormVariant::Categorical) => FieldInput::Select(RADIATION),
            (Field::WindSpeed, FormVariant::Categorical) => FieldInput::Select(WIND),
            _ => FieldInput::Number,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("retencion"), None);
    }

    #[test]
    fn test_sections_cover_every_field_once() {
        let mut seen: Vec<Field> = Section::ALL
            .iter()
            .flat_map(|s| s.fields().iter().copied())
            .collect();
        assert_eq!(seen.len(), 10);
        seen.sort_by_key(|f| f.index());
        assert_eq!(seen, Field::ALL.to_vec());
        for section in Section::ALL {
            for field in section.fields() {
                assert_eq!(field.section(), section);
            }
        }
    }

    #[test]
    fn test_variant_changes_only_weather_inputs() {
        let changed: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| f.input(FormVariant::Numeric) != f.input(FormVariant::Categorical))
            .collect();
        assert_eq!(
            changed,
            vec![Field::SoilHumidity, Field::SolarRadiation, Field::WindSpeed]
        );
        assert_eq!(Field::Precipitation.input(FormVariant::Numeric), FieldInput::Select(LOW_MID_HIGH));
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("Numeric".parse::<FormVariant>(), Ok(FormVariant::Numeric));
        assert_eq!("categorical".parse::<FormVariant>(), Ok(FormVariant::Categorical));
        assert!("sliders".parse::<FormVariant>().is_err());
    }
}
