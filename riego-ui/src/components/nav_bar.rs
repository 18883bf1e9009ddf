//! Header with the brand link and the logout control.

use super::ConfirmDialog;
use crate::state::{AppState, Dialog};
use crate::web::{sleep, use_router};
use dioxus::prelude::*;
use dioxus_logger::tracing::error;
use riego_core::notice::{LogoutPrompt, Notice, NoticeKind};
use riego_core::route::AppRoute;

#[component]
pub fn NavBar() -> Element {
    let mut state = use_context::<AppState>();
    let mut router = use_router();
    let mut confirming = use_signal(|| false);

    let on_confirm = move |_: ()| {
        confirming.set(false);
        let outcome = state.session.write().logout(true);
        let sign_out = match outcome {
            Ok(Some(sign_out)) => sign_out,
            Ok(None) => return,
            Err(e) => {
                error!("Failed to clear session: {}", e);
                state.show(Dialog::Notice(Notice::new(NoticeKind::Error, "Error", e.to_string())));
                return;
            }
        };
        let toast = Dialog::Toast(sign_out.notice.clone());
        state.show(toast.clone());
        spawn(async move {
            sleep(sign_out.delay).await;
            if state.dialog.peek().as_ref() == Some(&toast) {
                state.dismiss();
            }
            router.navigate(sign_out.redirect);
        });
    };

    let home_href = AppRoute::Home.fragment();

    rsx! {
        div {
            style: "display: flex; justify-content: space-around; align-items: center; padding: 12px 16px; border-bottom: 1px solid #ddd;",
            a {
                href: "{home_href}",
                style: "text-decoration: none; font-weight: bold; color: #2e7d32;",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    router.navigate(AppRoute::Home);
                },
                "💧 Simulador de Riego"
            }
            button {
                style: "display: flex; gap: 8px; align-items: center; background: none; border: none; cursor: pointer;",
                onclick: move |_| confirming.set(true),
                span { "Cerrar Sesión" }
                "⎋"
            }
        }
        if confirming() {
            ConfirmDialog {
                title: LogoutPrompt::TITLE.to_string(),
                text: LogoutPrompt::TEXT.to_string(),
                confirm_label: LogoutPrompt::CONFIRM.to_string(),
                cancel_label: LogoutPrompt::CANCEL.to_string(),
                on_confirm,
                on_cancel: move |_| confirming.set(false),
            }
        }
    }
}
