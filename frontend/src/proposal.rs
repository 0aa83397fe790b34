//! State of the custom proposal wizard.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    ClientDetails,
    ScopeOfWork,
    GoalsContext,
}

impl WizardStep {
    pub const COUNT: u8 = 3;

    pub fn number(self) -> u8 {
        match self {
            WizardStep::ClientDetails => 1,
            WizardStep::ScopeOfWork => 2,
            WizardStep::GoalsContext => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::ClientDetails => "Client Details",
            WizardStep::ScopeOfWork => "Scope of Work",
            WizardStep::GoalsContext => "Goals & Context",
        }
    }

    pub fn next(self) -> Self {
        match self {
            WizardStep::ClientDetails => WizardStep::ScopeOfWork,
            WizardStep::ScopeOfWork | WizardStep::GoalsContext => WizardStep::GoalsContext,
        }
    }

    pub fn back(self) -> Self {
        match self {
            WizardStep::ClientDetails | WizardStep::ScopeOfWork => WizardStep::ClientDetails,
            WizardStep::GoalsContext => WizardStep::ScopeOfWork,
        }
    }

    pub fn is_first(self) -> bool {
        self == WizardStep::ClientDetails
    }

    pub fn is_last(self) -> bool {
        self == WizardStep::GoalsContext
    }

    /// Width of the progress bar, in percent.
    pub fn progress_percent(self) -> f64 {
        f64::from(self.number()) / f64::from(Self::COUNT) * 100.0
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct ProposalForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub website: String,
    /// Selection order is kept for display, membership is what matters.
    pub services: Vec<String>,
    pub budget: Option<String>,
    pub goals: String,
    #[serde(skip)]
    pub step: WizardStep,
}

impl ProposalForm {
    pub fn next(&mut self) {
        self.step = self.step.next();
    }

    pub fn back(&mut self) {
        self.step = self.step.back();
    }

    pub fn toggle_service(&mut self, service: &str) {
        if let Some(pos) = self.services.iter().position(|s| s == service) {
            self.services.remove(pos);
        } else {
            self.services.push(service.to_string());
        }
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    pub fn select_budget(&mut self, budget: &str) {
        self.budget = Some(budget.to_string());
    }

    pub fn is_budget(&self, budget: &str) -> bool {
        self.budget.as_deref() == Some(budget)
    }

    /// Name and email are required before leaving the first step.
    pub fn client_details_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::ClientDetails => self.client_details_complete(),
            WizardStep::ScopeOfWork => true,
            WizardStep::GoalsContext => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_is_clamped() {
        let mut form = ProposalForm::default();
        assert_eq!(form.step.number(), 1);
        form.back();
        assert_eq!(form.step, WizardStep::ClientDetails);
        for _ in 0..5 {
            form.next();
        }
        assert_eq!(form.step, WizardStep::GoalsContext);
        form.next();
        assert_eq!(form.step.number(), 3);
        form.back();
        assert_eq!(form.step, WizardStep::ScopeOfWork);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut form = ProposalForm::default();
        form.toggle_service("SEO Optimization");
        let before = form.services.clone();
        form.toggle_service("Brand Strategy");
        form.toggle_service("Brand Strategy");
        assert_eq!(form.services, before);
        form.toggle_service("SEO Optimization");
        assert!(form.services.is_empty());
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut form = ProposalForm::default();
        form.toggle_service("Lead Generation");
        form.toggle_service("Email Marketing");
        form.toggle_service("Lead Generation");
        form.toggle_service("Lead Generation");
        assert_eq!(form.services.iter().filter(|s| *s == "Lead Generation").count(), 1);
        assert!(form.has_service("Email Marketing"));
    }

    #[test]
    fn test_budget_is_single_select() {
        let mut form = ProposalForm::default();
        form.select_budget("₹20k - ₹50k");
        form.select_budget("₹3 Lakhs+");
        assert_eq!(form.budget.as_deref(), Some("₹3 Lakhs+"));
        assert!(!form.is_budget("₹20k - ₹50k"));
    }

    #[test]
    fn test_first_step_requires_name_and_email() {
        let mut form = ProposalForm::default();
        assert!(!form.can_advance());
        form.name = "Asha Rao".to_string();
        assert!(!form.can_advance());
        form.email = "asha@acme.in".to_string();
        assert!(form.can_advance());
        form.next();
        assert!(form.can_advance());
        form.next();
        assert!(!form.can_advance());
    }

    #[test]
    fn test_progress_and_reset() {
        let mut form = ProposalForm::default();
        assert!((form.step.progress_percent() - 100.0 / 3.0).abs() < 1e-9);
        form.name = "Asha".to_string();
        form.toggle_service("SEO Optimization");
        form.next();
        form.next();
        assert_eq!(form.step.progress_percent(), 100.0);
        form.reset();
        assert_eq!(form, ProposalForm::default());
    }
}
