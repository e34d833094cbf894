use dioxus::prelude::*;
use diagnostix_api::prelude::*;

use crate::show_toast;
use crate::style;
use crate::use_session;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    SignIn,
    SignUp,
}

/// Email and password form for the hosted identity provider. A successful
/// sign-in is picked up by the shared session store, which drives redirects.
#[component]
pub fn Auth() -> Element {
    let session = use_session();
    let mut mode = use_signal(|| Mode::SignIn);
    let mut email = use_signal(|| String::new());
    let mut password = use_signal(|| String::new());
    let mut full_name = use_signal(|| String::new());
    let status_message = use_signal(|| String::new());
    let is_loading = use_signal(|| false);

    let handle_submit = move |_| {
        let email_val = email.read().trim().to_string();
        let password_val = password.read().clone();
        let full_name_val = Some(full_name.read().trim().to_string()).filter(|v| !v.is_empty());
        let current_mode = mode();
        let identity = session.identity();
        let mut status = status_message.clone();
        let mut loading = is_loading.clone();

        spawn(async move {
            loading.set(true);
            match current_mode {
                Mode::SignIn => {
                    status.set("Signing in...".to_string());
                    match identity.sign_in_with_password(&email_val, &password_val).await {
                        Ok(session) => {
                            status.set(String::new());
                            show_toast(Toast::success(
                                "Welcome back",
                                &format!("Signed in as {}", session.user.display_name()),
                            ));
                        }
                        Err(e) => status.set(format!("Sign in failed: {e}")),
                    }
                }
                Mode::SignUp => {
                    status.set("Creating account...".to_string());
                    match identity.sign_up(&email_val, &password_val, full_name_val).await {
                        Ok(SignUpOutcome::SignedIn(_)) => {
                            status.set(String::new());
                            show_toast(Toast::success("Account created", "You are now signed in"));
                        }
                        Ok(SignUpOutcome::ConfirmationSent(_)) => {
                            status.set("Signup successful! Check your email to confirm your account.".to_string());
                            show_toast(Toast::success(
                                "Check your email",
                                "We sent you a confirmation link",
                            ));
                        }
                        Err(e) => status.set(format!("Sign up failed: {e}")),
                    }
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            style: "padding: 40px; max-width: 400px; margin: 0 auto;",

            h1 {
                style: "text-align: center; margin-bottom: 30px; color: #333;",
                if mode() == Mode::SignIn { "Sign In" } else { "Create Account" }
            }

            if mode() == Mode::SignUp {
                div {
                    style: "margin-bottom: 20px;",
                    label {
                        style: "display: block; margin-bottom: 5px; font-weight: bold; color: #555;",
                        "Full name:"
                    }
                    input {
                        r#type: "text",
                        value: "{full_name}",
                        oninput: move |e| full_name.set(e.value()),
                        style: "width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px;",
                        placeholder: "Optional"
                    }
                }
            }

            div {
                style: "margin-bottom: 20px;",
                label {
                    style: "display: block; margin-bottom: 5px; font-weight: bold; color: #555;",
                    "Email:"
                }
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                    style: "width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px;",
                    placeholder: "you@example.com"
                }
            }

            div {
                style: "margin-bottom: 30px;",
                label {
                    style: "display: block; margin-bottom: 5px; font-weight: bold; color: #555;",
                    "Password:"
                }
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                    style: "width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px;",
                    placeholder: "Enter your password"
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 10px; margin-bottom: 20px;",

                button {
                    onclick: handle_submit,
                    disabled: is_loading(),
                    style: "{style::BUTTON_LARGE} justify-content: center;",
                    style: if is_loading() { "opacity: 0.6; cursor: not-allowed;" } else { "" },
                    if mode() == Mode::SignIn { "Sign In" } else { "Sign Up" }
                }

                button {
                    onclick: move |_| {
                        let next = if mode() == Mode::SignIn { Mode::SignUp } else { Mode::SignIn };
                        mode.set(next);
                    },
                    style: style::BUTTON_GHOST,
                    if mode() == Mode::SignIn {
                        "Need an account? Sign up"
                    } else {
                        "Already registered? Sign in"
                    }
                }
            }

            if !status_message.read().is_empty() {
                div {
                    style: "padding: 10px; border-radius: 4px; text-align: center; font-weight: bold;",
                    style: if status_message.read().contains("successful") || status_message.read().ends_with("...") {
                        "background-color: #d4edda; color: #155724; border: 1px solid #c3e6cb;"
                    } else {
                        "background-color: #f8d7da; color: #721c24; border: 1px solid #f5c6cb;"
                    },
                    "{status_message}"
                }
            }
        }
    }
}
