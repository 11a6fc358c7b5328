use super::repository::{AdminRepository, AdminSnapshot};
use crate::api::{ApiClient, ApiError, Role};
use crate::utils::message::MessageState;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Users,
    Advocates,
    Bookings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Overview,
        AdminTab::Users,
        AdminTab::Advocates,
        AdminTab::Bookings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Users => "Users",
            AdminTab::Advocates => "Advocates",
            AdminTab::Bookings => "Bookings",
        }
    }
}

/// Admin accounts are never offered for deletion.
pub fn can_delete_user(role: Role) -> bool {
    role != Role::Admin
}

pub fn unverified_count(snapshot: &AdminSnapshot) -> usize {
    snapshot.advocates.iter().filter(|a| !a.is_verified).count()
}

pub fn format_currency(amount: Option<f64>) -> String {
    let paise = (amount.unwrap_or(0.0) * 100.0).round() as i64;
    let digits = (paise.abs() / 100).to_string();
    // Indian grouping: last three digits, then pairs.
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (front, pair) = rest.split_at(rest.len() - 2);
            groups.push(pair);
            rest = front;
        }
        groups.push(rest);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };
    let sign = if paise < 0 { "-" } else { "" };
    format!("{}₹{}.{:02}", sign, grouped, paise.abs() % 100)
}

#[derive(Clone, Copy)]
pub struct AdminDashboardViewModel {
    pub tab: RwSignal<AdminTab>,
    pub snapshot: RwSignal<AdminSnapshot>,
    pub message: RwSignal<MessageState>,
    pub delete_target: RwSignal<Option<i64>>,
    pub load_action: Action<(), Result<(), ApiError>>,
    pub verify_action: Action<(i64, bool), Result<bool, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
}

async fn reload(repo: &AdminRepository, snapshot: RwSignal<AdminSnapshot>) -> Result<(), ApiError> {
    let fresh = repo.snapshot().await?;
    snapshot.set(fresh);
    Ok(())
}

impl AdminDashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(AdminRepository::new(api));
        let tab = create_rw_signal(AdminTab::default());
        let snapshot = create_rw_signal(AdminSnapshot::default());
        let message = create_rw_signal(MessageState::default());
        let delete_target = create_rw_signal(None::<i64>);

        let load_action = create_action(move |_: &()| {
            let repo = repository.get_value();
            async move { reload(&repo, snapshot).await }
        });
        let verify_action = create_action(move |(id, verified): &(i64, bool)| {
            let repo = repository.get_value();
            let (id, verified) = (*id, *verified);
            async move {
                repo.set_verified(id, verified).await?;
                reload(&repo, snapshot).await?;
                Ok(verified)
            }
        });
        let delete_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move {
                repo.delete_user(id).await?;
                reload(&repo, snapshot).await
            }
        });

        create_effect(move |loaded: Option<()>| {
            if loaded.is_none() {
                load_action.dispatch(());
            }
        });
        create_effect(move |_| {
            if let Some(Err(_)) = load_action.value().get() {
                message.update(|m| m.set_error("Failed to fetch admin data"));
            }
        });
        create_effect(move |_| match verify_action.value().get() {
            Some(Ok(true)) => message.update(|m| m.set_success("Advocate verified successfully")),
            Some(Ok(false)) => message.update(|m| m.set_success("Advocate unverified")),
            Some(Err(_)) => message.update(|m| m.set_error("Failed to update verification status")),
            None => {}
        });
        create_effect(move |_| match delete_action.value().get() {
            Some(Ok(())) => message.update(|m| m.set_success("User deleted successfully")),
            Some(Err(_)) => message.update(|m| m.set_error("Failed to delete user")),
            None => {}
        });

        Self {
            tab,
            snapshot,
            message,
            delete_target,
            load_action,
            verify_action,
            delete_action,
        }
    }

    /// Flips the current verification flag of an advocate.
    pub fn toggle_verified(&self, advocate_id: i64) {
        let current = self.snapshot.with_untracked(|s| {
            s.advocates
                .iter()
                .find(|a| a.id == advocate_id)
                .map(|a| a.is_verified)
        });
        if let Some(current) = current {
            self.verify_action.dispatch((advocate_id, !current));
        }
    }

    pub fn request_delete(&self, user_id: i64) {
        let deletable = self.snapshot.with_untracked(|s| {
            s.users
                .iter()
                .find(|u| u.id == user_id)
                .map(|u| can_delete_user(u.role))
                .unwrap_or(false)
        });
        if deletable {
            self.delete_target.set(Some(user_id));
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(id) = self.delete_target.get_untracked() {
            self.delete_target.set(None);
            self.delete_action.dispatch(id);
        }
    }
}

impl Default for AdminDashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_indian_grouping() {
        assert_eq!(format_currency(None), "₹0.00");
        assert_eq!(format_currency(Some(1500.0)), "₹1,500.00");
        assert_eq!(format_currency(Some(45000.5)), "₹45,000.50");
        assert_eq!(format_currency(Some(12345678.0)), "₹1,23,45,678.00");
    }

    #[test]
    fn currency_rounds_to_paise_before_splitting() {
        assert_eq!(format_currency(Some(12.999)), "₹13.00");
        assert_eq!(format_currency(Some(999.996)), "₹1,000.00");
        assert_eq!(format_currency(Some(-0.5)), "-₹0.50");
        assert_eq!(format_currency(Some(-1500.25)), "-₹1,500.25");
    }

    #[test]
    fn admins_cannot_be_deleted() {
        assert!(can_delete_user(Role::User));
        assert!(can_delete_user(Role::Advocate));
        assert!(!can_delete_user(Role::Admin));
    }

    #[test]
    fn tabs_start_on_overview() {
        assert_eq!(AdminTab::default(), AdminTab::Overview);
        let labels: Vec<_> = AdminTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Overview", "Users", "Advocates", "Bookings"]);
    }
}
