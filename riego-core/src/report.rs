//! Recommendation report built from a calculation result.
//!
//! Fixed structure: a general recommendation, irrigation frequency and
//! recommended volume, then three evapotranspiration/requirement metrics.
//! Values are copied from the result as-is (see [`CalculationResult::display`]).

use crate::result::{keys, CalculationResult};
use std::fmt;

pub const TITLE: &str = "✅ Recomendaciones para tu cultivo";
pub const INTRO: &str = "Según tus datos, el sistema generó las siguientes recomendaciones:";
pub const TIP: &str = "Ajusta la frecuencia y el volumen de riego si hay cambios de clima \
    (altas temperaturas, lluvias o vientos). Estos factores afectan las necesidades hídricas del cultivo.";
pub const ACKNOWLEDGE: &str = "Entendido ✅";

/// One labelled value of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub key: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
    pub unit: Option<&'static str>,
    pub caption: Option<&'static str>,
}

impl ReportEntry {
    fn read(
        result: &CalculationResult,
        key: &'static str,
        icon: &'static str,
        label: &'static str,
        unit: Option<&'static str>,
        caption: Option<&'static str>,
    ) -> Self {
        Self {
            key,
            icon,
            label,
            value: result.display(key),
            unit,
            caption,
        }
    }

    pub fn value_with_unit(&self) -> String {
        match self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub recommendation: ReportEntry,
    /// Frequency and volume.
    pub schedule: [ReportEntry; 2],
    /// ET₀, ETc and net requirement.
    pub metrics: [ReportEntry; 3],
}

impl Report {
    pub fn from_result(result: &CalculationResult) -> Self {
        Self {
            recommendation: ReportEntry::read(
                result,
                keys::RECOMMENDATION,
                "💧",
                "Recomendación general",
                None,
                None,
            ),
            schedule: [
                ReportEntry::read(
                    result,
                    keys::FREQUENCY,
                    "🌿",
                    "Frecuencia de riego",
                    None,
                    Some("Cada cuánto aplicar riego para mantener la humedad óptima."),
                ),
                ReportEntry::read(
                    result,
                    keys::VOLUME,
                    "🚿",
                    "Volumen recomendado",
                    Some("m³/ha"),
                    Some("Cantidad total de agua que deberías aplicar por jornada de riego."),
                ),
            ],
            metrics: [
                ReportEntry::read(
                    result,
                    keys::ET0,
                    "☀️",
                    "Evapotranspiración de referencia (ET₀)",
                    Some("mm/día"),
                    Some("Pérdida de agua por evaporación y transpiración en condiciones estándar."),
                ),
                ReportEntry::read(
                    result,
                    keys::ETC,
                    "🌱",
                    "Evapotranspiración del cultivo (ETc)",
                    Some("mm/día"),
                    Some("Cantidad de agua que tu cultivo necesita según su tipo y etapa."),
                ),
                ReportEntry::read(
                    result,
                    keys::NET_REQUIREMENT,
                    "📉",
                    "Requerimiento neto de riego",
                    Some("mm"),
                    Some("Agua que debes reponer al suelo para evitar estrés hídrico."),
                ),
            ],
        }
    }

    /// All six entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &ReportEntry> {
        std::iter::once(&self.recommendation)
            .chain(self.schedule.iter())
            .chain(self.metrics.iter())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{INTRO}")?;
        writeln!(f)?;
        writeln!(f, "{} {}:", self.recommendation.icon, self.recommendation.label)?;
        writeln!(f, "   {}", self.recommendation.value)?;
        for (i, entry) in self.schedule.iter().chain(self.metrics.iter()).enumerate() {
            if i == 2 {
                writeln!(f, "---")?;
            }
            writeln!(f, "{} {}: {}", entry.icon, entry.label, entry.value_with_unit())?;
            if let Some(caption) = entry.caption {
                writeln!(f, "   ({caption})")?;
            }
        }
        writeln!(f, "---")?;
        write!(f, "🌾 Consejo práctico: {TIP}")
    }
}
