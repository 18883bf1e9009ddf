//! Login page.

use crate::state::{AppState, Dialog};
use crate::web::use_router;
use dioxus::prelude::*;
use riego_core::notice::Notice;

/// Identifier and secret form checked against the configured credential pair.
///
/// A match navigates to the home route without writing a session flag. A
/// mismatch raises a blocking alert and keeps what was typed.
#[component]
pub fn LoginPage() -> Element {
    let mut state = use_context::<AppState>();
    let mut router = use_router();
    let mut user = use_signal(String::new);
    let mut password = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = state.credentials.read().authenticate(&user(), &password());
        match outcome {
            Ok(route) => router.navigate(route),
            Err(_) => state.show(Dialog::Notice(Notice::invalid_credentials())),
        }
    };

    let width = if state.is_mobile() { "90%" } else { "360px" };

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; justify-content: center; align-items: center; background: #f4f6f4;",
            div {
                style: "width: {width}; padding: 32px; background: #fff; border-radius: 8px; box-shadow: 0 4px 16px rgba(0, 0, 0, 0.1);",
                form {
                    id: "form-login",
                    onsubmit: on_submit,
                    h5 { style: "text-align: center; margin-bottom: 16px;", "INICIO DE SESIÓN" }
                    div {
                        style: "display: flex; flex-direction: column; margin-bottom: 8px;",
                        label { r#for: "user", "Usuario" }
                        input {
                            r#type: "email",
                            id: "user",
                            placeholder: "name@example.com",
                            required: true,
                            value: "{user}",
                            oninput: move |evt: FormEvent| user.set(evt.value()),
                        }
                    }
                    div {
                        style: "display: flex; flex-direction: column; margin-bottom: 16px;",
                        label { r#for: "password", "Contraseña" }
                        input {
                            r#type: "password",
                            id: "password",
                            placeholder: "Password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        style: "width: 100%; padding: 8px; border: none; border-radius: 4px; background: #212529; color: #fff; cursor: pointer;",
                        "Iniciar sesión"
                    }
                }
            }
        }
    }
}
