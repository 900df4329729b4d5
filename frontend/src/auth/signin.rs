use std::rc::Rc;

use log::info;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::auth::otp::OTP_LEN;
use crate::auth::wizard::{Wizard, WizardAction, WizardExit, WizardForm, WizardStep};

#[derive(Properties, PartialEq)]
pub struct SignInModalProps {
    /// Leaving from the login step, or closing the modal.
    pub on_back: Callback<()>,
    pub on_success: Callback<()>,
}

fn bind_field(
    wizard: &UseStateHandle<Wizard>,
    apply: fn(&mut WizardForm, String),
) -> Callback<InputEvent> {
    let wizard = wizard.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            let mut next = (*wizard).clone();
            apply(&mut next.form, input.value());
            wizard.set(next);
        }
    })
}

fn focus_box(refs: &[NodeRef], index: Option<usize>) {
    if let Some(input) = index
        .and_then(|i| refs.get(i))
        .and_then(|r| r.cast::<HtmlInputElement>())
    {
        let _ = input.focus();
        input.select();
    }
}

#[function_component(SignInModal)]
pub fn sign_in_modal(props: &SignInModalProps) -> Html {
    let wizard = use_state(Wizard::new);
    let show_password = use_state(|| false);
    let otp_refs: Rc<Vec<NodeRef>> = use_memo(|_| (0..OTP_LEN).map(|_| NodeRef::default()).collect(), ());

    let dispatch = {
        let wizard = wizard.clone();
        let on_back = props.on_back.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |action: WizardAction| {
            let mut next = (*wizard).clone();
            match next.apply(action) {
                Some(WizardExit::SignedIn) => on_success.emit(()),
                Some(WizardExit::Back) => {
                    next.reset();
                    on_back.emit(());
                }
                None => {}
            }
            wizard.set(next);
        })
    };

    let submit = |action: WizardAction| {
        let dispatch = dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch.emit(action);
        })
    };

    let click = |action: WizardAction| {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.emit(action);
        })
    };

    let on_close = {
        let wizard = wizard.clone();
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| {
            wizard.set(Wizard::new());
            on_back.emit(());
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };
    let password_type = if *show_password { "text" } else { "password" };

    let on_resend = {
        let wizard = wizard.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            info!("Resending reset code to: {}", next.form.reset_email.trim());
            next.form.otp.clear();
            wizard.set(next);
        })
    };

    let error = wizard
        .error
        .as_ref()
        .map(|e| html! { <div class="message error-message" role="alert">{e.to_string()}</div> });

    let form = &wizard.form;
    let body = match wizard.step {
        WizardStep::Login => html! {
            <form onsubmit={submit(WizardAction::SubmitLogin)}>
                <p class="step-subtitle">{"Sign in to your Workblox workspace."}</p>
                <label for="signin-email">{"Email"}</label>
                <input id="signin-email" type="email" autocomplete="email" placeholder="you@company.com"
                    value={form.email.clone()} oninput={bind_field(&wizard, |f, v| f.email = v)} />
                <label for="signin-password">{"Password"}</label>
                <div class="password-field">
                    <input id="signin-password" type={password_type} autocomplete="current-password"
                        value={form.password.clone()} oninput={bind_field(&wizard, |f, v| f.password = v)} />
                    <button type="button" class="password-toggle" onclick={toggle_password.clone()}>
                        {if *show_password { "Hide" } else { "Show" }}
                    </button>
                </div>
                <a href="#" class="forgot-password-link" onclick={click(WizardAction::ForgotPassword)}>
                    {"Forgot password?"}
                </a>
                {error.clone()}
                <button type="submit" class="submit-button">{"Sign in"}</button>
                <p class="auth-redirect">
                    {"Don't have an account?"}
                    <a href="#" onclick={click(WizardAction::JoinWaitlist)}>{"Get early access"}</a>
                </p>
            </form>
        },
        WizardStep::ForgotPassword => html! {
            <form onsubmit={submit(WizardAction::SubmitResetEmail)}>
                <p class="step-subtitle">{"Enter your email and we'll send you a 6-digit code."}</p>
                <label for="reset-email">{"Email"}</label>
                <input id="reset-email" type="email" autocomplete="email"
                    value={form.reset_email.clone()} oninput={bind_field(&wizard, |f, v| f.reset_email = v)} />
                {error.clone()}
                <button type="submit" class="submit-button">{"Send code"}</button>
            </form>
        },
        WizardStep::ResetVerification => html! {
            <form onsubmit={submit(WizardAction::SubmitCode)}>
                <p class="step-subtitle">
                    {format!("We sent a code to {}. Enter it below.", form.reset_email.trim())}
                </p>
                <div class="otp-inputs">
                    { for (0..OTP_LEN).map(|index| {
                        let oninput = {
                            let wizard = wizard.clone();
                            let refs = otp_refs.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    let mut next = (*wizard).clone();
                                    let focus = next.form.otp.input(index, &input.value());
                                    // Keep the box showing the stored digit only
                                    input.set_value(&next.form.otp.digit(index));
                                    wizard.set(next);
                                    focus_box(&refs, focus);
                                }
                            })
                        };
                        let onkeydown = {
                            let wizard = wizard.clone();
                            let refs = otp_refs.clone();
                            Callback::from(move |e: KeyboardEvent| {
                                if e.key() == "Backspace" {
                                    e.prevent_default();
                                    let mut next = (*wizard).clone();
                                    let focus = next.form.otp.backspace(index);
                                    wizard.set(next);
                                    focus_box(&refs, focus);
                                }
                            })
                        };
                        let onpaste = {
                            let wizard = wizard.clone();
                            let refs = otp_refs.clone();
                            Callback::from(move |e: Event| {
                                let text = e
                                    .dyn_ref::<ClipboardEvent>()
                                    .and_then(|e| e.clipboard_data())
                                    .and_then(|data| data.get_data("text").ok());
                                if let Some(text) = text {
                                    e.prevent_default();
                                    let mut next = (*wizard).clone();
                                    let focus = next.form.otp.paste(&text);
                                    wizard.set(next);
                                    focus_box(&refs, Some(focus));
                                }
                            })
                        };
                        html! {
                            <input
                                ref={otp_refs[index].clone()}
                                class="otp-box"
                                type="text"
                                inputmode="numeric"
                                autocomplete="one-time-code"
                                maxlength="2"
                                aria-label={format!("Digit {}", index + 1)}
                                value={form.otp.digit(index)}
                                {oninput}
                                {onkeydown}
                                {onpaste}
                            />
                        }
                    })}
                </div>
                {error.clone()}
                <button type="submit" class="submit-button" disabled={!wizard.can_verify()}>
                    {"Verify code"}
                </button>
                <p class="auth-redirect">
                    {"Didn't get it?"}
                    <a href="#" onclick={on_resend}>{"Resend code"}</a>
                </p>
            </form>
        },
        WizardStep::NewPassword => {
            let mismatch = !form.confirm_password.is_empty() && form.new_password != form.confirm_password;
            html! {
                <form onsubmit={submit(WizardAction::SubmitNewPassword)}>
                    <label for="new-password">{"New password"}</label>
                    <input id="new-password" type={password_type} autocomplete="new-password"
                        value={form.new_password.clone()} oninput={bind_field(&wizard, |f, v| f.new_password = v)} />
                    <label for="confirm-password">{"Confirm password"}</label>
                    <input id="confirm-password" type={password_type} autocomplete="new-password"
                        class={classes!(mismatch.then_some("input-error"))}
                        value={form.confirm_password.clone()} oninput={bind_field(&wizard, |f, v| f.confirm_password = v)} />
                    if mismatch {
                        <p class="field-hint error-hint">{"Passwords do not match"}</p>
                    }
                    <button type="button" class="password-toggle" onclick={toggle_password.clone()}>
                        {if *show_password { "Hide passwords" } else { "Show passwords" }}
                    </button>
                    {error.clone()}
                    <button type="submit" class="submit-button">{"Update password"}</button>
                </form>
            }
        }
        WizardStep::Waitlist => html! {
            <form onsubmit={submit(WizardAction::SubmitWaitlist)}>
                <p class="step-subtitle">{"Workblox is invite-only while we're in early access. Leave your details and we'll be in touch."}</p>
                <label for="waitlist-name">{"Name"}</label>
                <input id="waitlist-name" type="text" autocomplete="name"
                    value={form.waitlist_name.clone()} oninput={bind_field(&wizard, |f, v| f.waitlist_name = v)} />
                <label for="waitlist-email">{"Work email"}</label>
                <input id="waitlist-email" type="email" autocomplete="email"
                    value={form.waitlist_email.clone()} oninput={bind_field(&wizard, |f, v| f.waitlist_email = v)} />
                <label for="waitlist-company">{"Company (optional)"}</label>
                <input id="waitlist-company" type="text" autocomplete="organization"
                    value={form.waitlist_company.clone()} oninput={bind_field(&wizard, |f, v| f.waitlist_company = v)} />
                {error.clone()}
                <button type="submit" class="submit-button">{"Join the waitlist"}</button>
            </form>
        },
        WizardStep::WaitlistSuccess => html! {
            <div class="waitlist-success">
                <div class="success-icon">{"✓"}</div>
                <p>{format!("Thanks, {}! We'll email {} when your spot opens up.", form.waitlist_name.trim(), form.waitlist_email.trim())}</p>
                <button class="submit-button" onclick={click(WizardAction::Back)}>{"Back to sign in"}</button>
            </div>
        },
    };

    html! {
        <div class="modal-overlay">
            <div class="login-container" role="dialog" aria-modal="true" aria-labelledby="wizard-heading">
                <div class="modal-header">
                    if wizard.step != WizardStep::WaitlistSuccess {
                        <button class="back-button" onclick={click(WizardAction::Back)} aria-label="Back">{"←"}</button>
                    }
                    <button class="close-button" onclick={on_close} aria-label="Close">{"✕"}</button>
                </div>
                <h1 id="wizard-heading">{wizard.step.heading()}</h1>
                {body}
            </div>
        </div>
    }
}
