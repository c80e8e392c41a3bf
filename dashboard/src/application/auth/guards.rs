// Page guards: where a page should send the user, if anywhere

use super::AuthFacade;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Redirect(String),
}

impl AuthFacade {
    /// For protected pages: anonymous users go to the login page.
    pub async fn require_auth(&self) -> Navigation {
        if self.is_logged_in().await {
            Navigation::Stay
        } else {
            Navigation::Redirect(self.config.routes.login.clone())
        }
    }

    /// For the login and register pages: signed-in users go to the dashboard.
    pub async fn redirect_if_logged_in(&self) -> Navigation {
        if self.is_logged_in().await {
            Navigation::Redirect(self.config.routes.dashboard.clone())
        } else {
            Navigation::Stay
        }
    }
}
