use log::info;

use crate::auth::otp::OtpCode;
use crate::auth::validation::{self, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Login,
    ForgotPassword,
    ResetVerification,
    NewPassword,
    Waitlist,
    WaitlistSuccess,
}

impl WizardStep {
    pub fn heading(&self) -> &'static str {
        match self {
            WizardStep::Login => "Welcome back",
            WizardStep::ForgotPassword => "Reset your password",
            WizardStep::ResetVerification => "Check your email",
            WizardStep::NewPassword => "Choose a new password",
            WizardStep::Waitlist => "Get early access",
            WizardStep::WaitlistSuccess => "You're on the list",
        }
    }

    fn is_reset_flow(&self) -> bool {
        matches!(
            self,
            WizardStep::ForgotPassword | WizardStep::ResetVerification | WizardStep::NewPassword
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardAction {
    SubmitLogin,
    ForgotPassword,
    SubmitResetEmail,
    SubmitCode,
    SubmitNewPassword,
    JoinWaitlist,
    SubmitWaitlist,
    Back,
}

/// Leaves the wizard through one of the callbacks the host page passes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardExit {
    SignedIn,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Goto(WizardStep),
    Exit(WizardExit),
    Stay,
}

/// Where `action` leads from `step`, assuming the step's form is valid.
pub fn transition(step: WizardStep, action: WizardAction) -> Transition {
    use WizardAction as A;
    use WizardStep as S;

    match (step, action) {
        (S::Login, A::SubmitLogin) => Transition::Exit(WizardExit::SignedIn),
        (S::Login, A::ForgotPassword) => Transition::Goto(S::ForgotPassword),
        (S::Login, A::JoinWaitlist) => Transition::Goto(S::Waitlist),
        (S::Login, A::Back) => Transition::Exit(WizardExit::Back),
        (S::ForgotPassword, A::SubmitResetEmail) => Transition::Goto(S::ResetVerification),
        (S::ResetVerification, A::SubmitCode) => Transition::Goto(S::NewPassword),
        (S::NewPassword, A::SubmitNewPassword) => Transition::Goto(S::Login),
        (S::Waitlist, A::SubmitWaitlist) => Transition::Goto(S::WaitlistSuccess),
        (_, A::Back) => Transition::Goto(S::Login),
        _ => Transition::Stay,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardForm {
    pub email: String,
    pub password: String,
    pub reset_email: String,
    pub otp: OtpCode,
    pub new_password: String,
    pub confirm_password: String,
    pub waitlist_name: String,
    pub waitlist_email: String,
    pub waitlist_company: String,
}

impl WizardForm {
    /// Checks the fields the submit action of `step` depends on.
    pub fn validate(&self, step: WizardStep, action: WizardAction) -> Result<(), ValidationError> {
        match (step, action) {
            (WizardStep::Login, WizardAction::SubmitLogin) => {
                validation::validate_email(&self.email)?;
                validation::validate_password(&self.password)
            }
            (WizardStep::ForgotPassword, WizardAction::SubmitResetEmail) => {
                validation::validate_email(&self.reset_email)
            }
            (WizardStep::ResetVerification, WizardAction::SubmitCode) => {
                if self.otp.is_complete() {
                    Ok(())
                } else {
                    Err(ValidationError::IncompleteCode)
                }
            }
            (WizardStep::NewPassword, WizardAction::SubmitNewPassword) => {
                validation::validate_password_pair(&self.new_password, &self.confirm_password)
            }
            (WizardStep::Waitlist, WizardAction::SubmitWaitlist) => {
                validation::require("name", &self.waitlist_name)?;
                validation::validate_email(&self.waitlist_email)
            }
            _ => Ok(()),
        }
    }

    pub fn clear_reset(&mut self) {
        self.reset_email.clear();
        self.otp.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }

    pub fn clear_waitlist(&mut self) {
        self.waitlist_name.clear();
        self.waitlist_email.clear();
        self.waitlist_company.clear();
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wizard {
    pub step: WizardStep,
    pub form: WizardForm,
    pub error: Option<ValidationError>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and applies `action`. Returns the exit to report to the
    /// host page, if the wizard is being left.
    pub fn apply(&mut self, action: WizardAction) -> Option<WizardExit> {
        if let Err(error) = self.form.validate(self.step, action) {
            self.error = Some(error);
            return None;
        }
        self.error = None;

        match transition(self.step, action) {
            Transition::Goto(next) => {
                self.log_submission(action);
                if action == WizardAction::ForgotPassword && self.form.reset_email.is_empty() {
                    self.form.reset_email = self.form.email.trim().to_string();
                }
                if self.step.is_reset_flow() && next == WizardStep::Login {
                    self.form.clear_reset();
                }
                if self.step == WizardStep::WaitlistSuccess {
                    self.form.clear_waitlist();
                }
                self.step = next;
                None
            }
            Transition::Exit(exit) => {
                self.log_submission(action);
                Some(exit)
            }
            Transition::Stay => None,
        }
    }

    /// Back to a blank login step, as when the modal closes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn can_verify(&self) -> bool {
        self.form.otp.is_complete()
    }

    fn log_submission(&self, action: WizardAction) {
        match action {
            WizardAction::SubmitLogin => info!("Login attempt: {}", self.form.email.trim()),
            WizardAction::SubmitResetEmail => info!("Password reset requested for: {}", self.form.reset_email.trim()),
            WizardAction::SubmitCode => info!("Verification code entered: {}", self.form.otp.code()),
            WizardAction::SubmitNewPassword => info!("Password reset completed"),
            WizardAction::SubmitWaitlist => info!(
                "Waitlist signup: {} <{}> {}",
                self.form.waitlist_name.trim(),
                self.form.waitlist_email.trim(),
                self.form.waitlist_company.trim()
            ),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: [WizardStep; 6] = [
        WizardStep::Login,
        WizardStep::ForgotPassword,
        WizardStep::ResetVerification,
        WizardStep::NewPassword,
        WizardStep::Waitlist,
        WizardStep::WaitlistSuccess,
    ];

    fn at(step: WizardStep) -> Wizard {
        Wizard { step, ..Wizard::default() }
    }

    fn fill_code(wizard: &mut Wizard, code: &str) {
        for (i, c) in code.chars().enumerate() {
            wizard.form.otp.input(i, &c.to_string());
        }
    }

    #[test]
    fn transition_table() {
        use WizardAction as A;
        use WizardStep as S;

        assert_eq!(transition(S::Login, A::ForgotPassword), Transition::Goto(S::ForgotPassword));
        assert_eq!(transition(S::Login, A::JoinWaitlist), Transition::Goto(S::Waitlist));
        assert_eq!(transition(S::Login, A::SubmitLogin), Transition::Exit(WizardExit::SignedIn));
        assert_eq!(transition(S::ForgotPassword, A::SubmitResetEmail), Transition::Goto(S::ResetVerification));
        assert_eq!(transition(S::ResetVerification, A::SubmitCode), Transition::Goto(S::NewPassword));
        assert_eq!(transition(S::NewPassword, A::SubmitNewPassword), Transition::Goto(S::Login));
        assert_eq!(transition(S::Waitlist, A::SubmitWaitlist), Transition::Goto(S::WaitlistSuccess));
        assert_eq!(transition(S::Waitlist, A::SubmitCode), Transition::Stay);
        assert_eq!(transition(S::NewPassword, A::JoinWaitlist), Transition::Stay);
    }

    #[test]
    fn back_returns_to_login_or_exits() {
        for step in STEPS {
            let expected = if step == WizardStep::Login {
                Transition::Exit(WizardExit::Back)
            } else {
                Transition::Goto(WizardStep::Login)
            };
            assert_eq!(transition(step, WizardAction::Back), expected);
        }
    }

    #[test]
    fn login_submission_exits_without_changing_step() {
        let mut wizard = Wizard::new();
        wizard.form.email = "ada@example.com".to_string();
        wizard.form.password = "analytical".to_string();
        assert_eq!(wizard.apply(WizardAction::SubmitLogin), Some(WizardExit::SignedIn));
        assert_eq!(wizard.step, WizardStep::Login);
        assert!(wizard.error.is_none());
    }

    #[test]
    fn invalid_login_shows_error() {
        let mut wizard = Wizard::new();
        wizard.form.email = "not-an-email".to_string();
        wizard.form.password = "analytical".to_string();
        assert_eq!(wizard.apply(WizardAction::SubmitLogin), None);
        assert_eq!(wizard.error, Some(ValidationError::InvalidEmail));
    }

    #[test]
    fn full_reset_flow_returns_to_clean_login() {
        let mut wizard = Wizard::new();
        wizard.form.email = "ada@example.com".to_string();

        wizard.apply(WizardAction::ForgotPassword);
        assert_eq!(wizard.step, WizardStep::ForgotPassword);
        assert_eq!(wizard.form.reset_email, "ada@example.com");

        wizard.apply(WizardAction::SubmitResetEmail);
        assert_eq!(wizard.step, WizardStep::ResetVerification);

        fill_code(&mut wizard, "12345");
        assert!(!wizard.can_verify());
        wizard.apply(WizardAction::SubmitCode);
        assert_eq!(wizard.step, WizardStep::ResetVerification);
        assert_eq!(wizard.error, Some(ValidationError::IncompleteCode));

        fill_code(&mut wizard, "123456");
        assert!(wizard.can_verify());
        wizard.apply(WizardAction::SubmitCode);
        assert_eq!(wizard.step, WizardStep::NewPassword);
        assert!(wizard.error.is_none());

        wizard.form.new_password = "new secret".to_string();
        wizard.form.confirm_password = "new secret".to_string();
        wizard.apply(WizardAction::SubmitNewPassword);
        assert_eq!(wizard.step, WizardStep::Login);
        assert!(wizard.form.reset_email.is_empty());
        assert!(wizard.form.new_password.is_empty());
        assert!(wizard.form.confirm_password.is_empty());
        assert_eq!(wizard.form.otp, OtpCode::new());
        assert_eq!(wizard.form.email, "ada@example.com");
    }

    #[test]
    fn mismatched_passwords_block_the_transition() {
        let pairs = [("password", "passw0rd"), ("a", "b"), ("same", "Same")];
        for (password, confirm) in pairs {
            let mut wizard = at(WizardStep::NewPassword);
            wizard.form.new_password = password.to_string();
            wizard.form.confirm_password = confirm.to_string();
            assert_eq!(wizard.apply(WizardAction::SubmitNewPassword), None);
            assert_eq!(wizard.step, WizardStep::NewPassword);
            assert_eq!(wizard.error, Some(ValidationError::PasswordMismatch));
            assert_eq!(wizard.form.new_password, password);
        }
    }

    #[test]
    fn equal_passwords_are_accepted() {
        let mut wizard = at(WizardStep::NewPassword);
        wizard.form.new_password = "p".to_string();
        wizard.form.confirm_password = "p".to_string();
        wizard.apply(WizardAction::SubmitNewPassword);
        assert_eq!(wizard.step, WizardStep::Login);
    }

    #[test]
    fn whitespace_only_equal_passwords_are_accepted() {
        let mut wizard = at(WizardStep::NewPassword);
        wizard.form.new_password = "   ".to_string();
        wizard.form.confirm_password = "   ".to_string();
        assert_eq!(wizard.apply(WizardAction::SubmitNewPassword), None);
        assert_eq!(wizard.step, WizardStep::Login);
        assert!(wizard.error.is_none());
    }

    #[test]
    fn waitlist_flow() {
        let mut wizard = Wizard::new();
        wizard.apply(WizardAction::JoinWaitlist);
        assert_eq!(wizard.step, WizardStep::Waitlist);

        wizard.apply(WizardAction::SubmitWaitlist);
        assert_eq!(wizard.error, Some(ValidationError::EmptyField("name")));

        wizard.form.waitlist_name = "Grace".to_string();
        wizard.form.waitlist_email = "grace@example.com".to_string();
        wizard.apply(WizardAction::SubmitWaitlist);
        assert_eq!(wizard.step, WizardStep::WaitlistSuccess);

        wizard.apply(WizardAction::Back);
        assert_eq!(wizard.step, WizardStep::Login);
        assert!(wizard.form.waitlist_name.is_empty());
    }

    #[test]
    fn error_clears_after_successful_action() {
        let mut wizard = at(WizardStep::ForgotPassword);
        wizard.apply(WizardAction::SubmitResetEmail);
        assert_eq!(wizard.error, Some(ValidationError::EmptyField("email")));
        wizard.apply(WizardAction::Back);
        assert!(wizard.error.is_none());
        assert_eq!(wizard.step, WizardStep::Login);
    }

    #[test]
    fn reset_returns_to_blank_login() {
        let mut wizard = at(WizardStep::NewPassword);
        wizard.form.email = "ada@example.com".to_string();
        wizard.error = Some(ValidationError::PasswordMismatch);
        wizard.reset();
        assert_eq!(wizard, Wizard::new());
    }
}
