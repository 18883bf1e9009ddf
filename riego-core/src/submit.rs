//! Form submission flow: validation → request → outcome.

use crate::error::{Result, RiegoError};
use crate::field::Field;
use crate::form::FormState;
use crate::notice::Notice;
use crate::report::Report;
use crate::result::CalculationResult;
use async_trait::async_trait;
use log::{error, info, warn};

/// Remote calculation endpoint.
///
/// `?Send` because the browser fetch future is not `Send`.
#[async_trait(?Send)]
pub trait CalculationService {
    async fn calculate(&self, form: &FormState) -> Result<CalculationResult>;
}

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Aborted before any request: this field is empty.
    Invalid(Field),
    /// Server replied with a JSON object.
    Calculated(CalculationResult),
    /// Transport failure, non-success status or undecodable body.
    Failed(RiegoError),
}

impl SubmitOutcome {
    pub fn report(&self) -> Option<Report> {
        match self {
            SubmitOutcome::Calculated(result) => Some(Report::from_result(result)),
            _ => None,
        }
    }

    /// Notice to show, if any. Failures always map to the generic notice.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitOutcome::Invalid(field) => Some(Notice::empty_field(*field)),
            SubmitOutcome::Failed(_) => Some(Notice::server_unreachable()),
            SubmitOutcome::Calculated(_) => None,
        }
    }
}

/// Holds the loading flag up and drops it on every exit path.
struct LoadingGuard<F: FnMut(bool)> {
    set_loading: F,
}

impl<F: FnMut(bool)> LoadingGuard<F> {
    fn engage(mut set_loading: F) -> Self {
        set_loading(true);
        Self { set_loading }
    }
}

impl<F: FnMut(bool)> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        (self.set_loading)(false);
    }
}

/// Run one submission.
///
/// An incomplete form aborts without calling `service` or touching the
/// loading flag. Otherwise `set_loading(true)` is called, exactly one
/// request is made, and `set_loading(false)` follows whatever the result,
/// including when the future is dropped mid-flight.
pub async fn submit<S, F>(form: &FormState, service: &S, set_loading: F) -> SubmitOutcome
where
    S: CalculationService + ?Sized,
    F: FnMut(bool),
{
    if let Some(field) = form.first_empty() {
        warn!("Submission aborted: field \"{}\" is empty", field);
        return SubmitOutcome::Invalid(field);
    }

    let _loading = LoadingGuard::engage(set_loading);
    match service.calculate(form).await {
        Ok(result) => {
            info!("Calculation response: {:?}", result.fields());
            SubmitOutcome::Calculated(result)
        }
        Err(err) => {
            error!("Calculation request failed: {}", err);
            SubmitOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::tests::filled_form;
    use std::cell::RefCell;

    /// Records every request and answers with a canned reply.
    struct Recorder {
        calls: RefCell<Vec<FormState>>,
        reply: fn() -> Result<CalculationResult>,
    }

    impl Recorder {
        fn new(reply: fn() -> Result<CalculationResult>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply,
            }
        }
    }

    #[async_trait(?Send)]
    impl CalculationService for Recorder {
        async fn calculate(&self, form: &FormState) -> Result<CalculationResult> {
            self.calls.borrow_mut().push(form.clone());
            (self.reply)()
        }
    }

    fn ok_reply() -> Result<CalculationResult> {
        CalculationResult::from_json(
            r#"{"recomendacion":"Riego ligero","frecuencia_riego":"Cada 3.0 días","volumen_riego_recomendado":13.333,"ET0_mm_per_day":3.9,"ETc_mm_per_day":3.51,"RequerimientoNeto_mm":1.0}"#,
        )
    }

    fn status_500() -> Result<CalculationResult> {
        Err(RiegoError::Status(500))
    }

    #[tokio::test]
    async fn test_empty_field_issues_no_request() {
        for field in Field::ALL {
            let service = Recorder::new(ok_reply);
            let mut flags = Vec::new();
            let form = filled_form().with(field, "");

            let outcome = submit(&form, &service, |on| flags.push(on)).await;

            assert!(matches!(outcome, SubmitOutcome::Invalid(f) if f == field));
            assert!(service.calls.borrow().is_empty());
            assert!(flags.is_empty(), "loading flag must not be touched");
            assert_eq!(outcome.notice(), Some(Notice::empty_field(field)));
        }
    }

    #[tokio::test]
    async fn test_complete_form_issues_exactly_one_request() {
        let service = Recorder::new(ok_reply);
        let mut flags = Vec::new();
        let form = filled_form();

        let outcome = submit(&form, &service, |on| flags.push(on)).await;

        assert_eq!(*service.calls.borrow(), vec![form]);
        assert_eq!(flags, vec![true, false]);
        assert!(outcome.notice().is_none());
        let report = outcome.report().expect("report");
        assert_eq!(report.recommendation.value, "Riego ligero");
        assert_eq!(report.metrics[2].value, "1.0");
    }

    #[tokio::test]
    async fn test_server_error_shows_generic_notice_and_clears_loading() {
        let service = Recorder::new(status_500);
        let mut loading = false;
        let mut history = Vec::new();

        let outcome = submit(&filled_form(), &service, |on| {
            loading = on;
            history.push(on);
        })
        .await;

        assert!(matches!(outcome, SubmitOutcome::Failed(RiegoError::Status(500))));
        assert_eq!(
            outcome.notice().map(|n| n.text),
            Some("No se pudo obtener respuesta del servidor.".to_string())
        );
        assert_eq!(history, vec![true, false]);
        assert!(!loading);
        assert!(outcome.report().is_none());
    }

    #[tokio::test]
    async fn test_dropped_request_clears_loading() {
        struct Never;

        #[async_trait(?Send)]
        impl CalculationService for Never {
            async fn calculate(&self, _form: &FormState) -> Result<CalculationResult> {
                std::future::pending().await
            }
        }

        let flags = RefCell::new(Vec::new());
        let form = filled_form();
        let pending = submit(&form, &Never, |on| flags.borrow_mut().push(on));
        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(10), pending).await;

        assert!(timed_out.is_err());
        assert_eq!(*flags.borrow(), vec![true, false]);
    }
}
