//! `calculate` command: submit the form once and print the report.

use clap::Args;
use log::{debug, info};
use riego_core::client::RiegoClient;
use riego_core::config::{ClientConfig, DEFAULT_BASE_URL};
use riego_core::field::Field;
use riego_core::form::FormState;
use riego_core::report::Report;
use riego_core::submit::{submit, SubmitOutcome};
use std::io::Write;
use std::time::Duration;

/// Form values plus where to send them. Omitted values stay empty and fail
/// validation before any request is made.
#[derive(Args, Debug, Clone, Default)]
pub struct CalculateArgs {
    /// Crop type code (1 Maíz, 2 Arroz, 3 Café)
    #[arg(long, default_value = "")]
    pub tipo_cultivo: String,

    /// Growth stage code (1 Siembra, 2 Floración, 3 Crecimiento, 4 Cosecha)
    #[arg(long, default_value = "")]
    pub etapa_cultivo: String,

    /// Planted area in hectares
    #[arg(long, default_value = "")]
    pub superficie: String,

    /// Soil type code (1 Arenoso, 2 Arcilloso, 3 Franco)
    #[arg(long, default_value = "")]
    pub tipo_suelo: String,

    /// Soil humidity in percent, or code 1-3
    #[arg(long, default_value = "")]
    pub humedad: String,

    /// Precipitation code (1 Baja, 2 Media, 3 Alta)
    #[arg(long, default_value = "")]
    pub precipitacion: String,

    /// Mean temperature in °C
    #[arg(long, default_value = "")]
    pub temperatura: String,

    /// Solar radiation in MJ/m²/day, or code 1-3
    #[arg(long, default_value = "")]
    pub radiacion_solar: String,

    /// Wind speed in m/s, or code 1-3
    #[arg(long, default_value = "")]
    pub velocidad_viento: String,

    /// Root depth in cm
    #[arg(long, default_value = "")]
    pub profundidad_raiz: String,

    /// Base URL of the calculation service
    #[arg(long, env = "RIEGO_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds (none by default)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print the service response as JSON instead of the report
    #[arg(long)]
    pub json: bool,
}

impl CalculateArgs {
    pub fn form(&self) -> FormState {
        FormState::new()
            .with(Field::CropType, &self.tipo_cultivo)
            .with(Field::GrowthStage, &self.etapa_cultivo)
            .with(Field::Area, &self.superficie)
            .with(Field::SoilType, &self.tipo_suelo)
            .with(Field::SoilHumidity, &self.humedad)
            .with(Field::Precipitation, &self.precipitacion)
            .with(Field::Temperature, &self.temperatura)
            .with(Field::SolarRadiation, &self.radiacion_solar)
            .with(Field::WindSpeed, &self.velocidad_viento)
            .with(Field::RootDepth, &self.profundidad_raiz)
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::with_base_url(&self.api_url)
            .timeout(self.timeout_secs.map(Duration::from_secs))
    }
}

pub async fn run_calculate(args: &CalculateArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let form = args.form();
    let client = RiegoClient::new(&args.config())?;
    info!("Submitting form to {}", client.url());

    let outcome = submit(&form, &client, |on| debug!("loading: {}", on)).await;
    let message = outcome.notice().map(|n| n.to_string()).unwrap_or_default();
    match outcome {
        SubmitOutcome::Calculated(result) => {
            if args.json {
                writeln!(out, "{}", result.to_pretty_json()?)?;
            } else {
                writeln!(out, "{}", Report::from_result(&result))?;
            }
            Ok(())
        }
        SubmitOutcome::Failed(err) => Err(anyhow::Error::new(err).context(message)),
        SubmitOutcome::Invalid(_) => Err(anyhow::anyhow!(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Router};
    use riego_core::config::CALCULATE_PATH;
    use riego_core::RiegoError;
    use tokio::net::TcpListener;

    fn filled_args() -> CalculateArgs {
        CalculateArgs {
            tipo_cultivo: "1".into(),
            etapa_cultivo: "3".into(),
            superficie: "2.5".into(),
            tipo_suelo: "3".into(),
            humedad: "40".into(),
            precipitacion: "2".into(),
            temperatura: "24".into(),
            radiacion_solar: "18".into(),
            velocidad_viento: "2".into(),
            profundidad_raiz: "30".into(),
            api_url: DEFAULT_BASE_URL.into(),
            ..Default::default()
        }
    }

    async fn serve(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route(CALCULATE_PATH, post(move || async move { (status, body) }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_form_follows_field_order() {
        let form = filled_args().form();
        let keys: Vec<_> = form.iter().map(|(field, _)| field.key()).collect();
        assert_eq!(keys[0], "tipoCultivo");
        assert_eq!(keys[9], "profundidadRaiz");
        assert_eq!(form.get(Field::Area), "2.5");
        assert!(form.is_complete());
    }

    #[tokio::test]
    async fn test_missing_field_fails_before_request() {
        let args = CalculateArgs {
            temperatura: String::new(),
            // Unroutable: a request would fail with a transport error instead.
            api_url: "http://127.0.0.1:9".into(),
            ..filled_args()
        };

        let err = run_calculate(&args, &mut Vec::new()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "⚠️ Campo vacío: Por favor completa el campo \"temperatura\"."
        );
    }

    #[tokio::test]
    async fn test_prints_report() {
        let url = serve(
            StatusCode::OK,
            r#"{"recomendacion": "Regar temprano", "frecuencia_riego": "Cada 3 días",
                "volumen_riego_recomendado": 45.2, "ET0_mm_per_day": 4.1,
                "ETc_mm_per_day": 4.5, "RequerimientoNeto_mm": 13.5}"#,
        )
        .await;
        let args = CalculateArgs { api_url: url, ..filled_args() };

        let mut out = Vec::new();
        run_calculate(&args, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Regar temprano"));
        assert!(text.contains("45.2"));
    }

    #[tokio::test]
    async fn test_json_output_is_raw_response() {
        let url = serve(StatusCode::OK, r#"{"recomendacion": "Regar"}"#).await;
        let args = CalculateArgs {
            api_url: url,
            json: true,
            ..filled_args()
        };

        let mut out = Vec::new();
        run_calculate(&args, &mut out).await.unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["recomendacion"], "Regar");
    }

    #[tokio::test]
    async fn test_server_error_keeps_cause() {
        let url = serve(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        let args = CalculateArgs { api_url: url, ..filled_args() };

        let err = run_calculate(&args, &mut Vec::new()).await.unwrap_err();

        assert!(err.to_string().contains("No se pudo obtener respuesta del servidor."));
        assert!(matches!(
            err.downcast_ref::<RiegoError>(),
            Some(RiegoError::Status(500))
        ));
    }
}
