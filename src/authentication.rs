use serde::Serialize;
use utoipa::ToSchema;

use crate::configuration::StubAccountSettings;

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub favorite_genres: Vec<String>,
    pub ott_services: Vec<String>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: String,
    pub profile: UserProfile,
}

/// What a successful login hands back. The tokens are fixed placeholders;
/// nothing is issued or remembered.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

/// Checks credentials against the single configured account.
#[derive(Debug, Clone)]
pub struct StubAuthenticator {
    account: StubAccountSettings,
}

impl StubAuthenticator {
    pub fn new(account: StubAccountSettings) -> Self {
        StubAuthenticator { account }
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Option<LoginSession> {
        if email != self.account.email || password != self.account.password {
            return None;
        }
        let user = &self.account.user;
        Some(LoginSession {
            access_token: self.account.access_token.clone(),
            refresh_token: self.account.refresh_token.clone(),
            user: User {
                id: user.id,
                email: self.account.email.clone(),
                name: user.name.clone(),
                created_at: user.created_at.clone(),
                profile: UserProfile {
                    favorite_genres: user.favorite_genres.clone(),
                    ott_services: user.ott_services.clone(),
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::StubUserSettings;

    fn authenticator() -> StubAuthenticator {
        StubAuthenticator::new(StubAccountSettings {
            email: "test@test.com".to_string(),
            password: "password123".to_string(),
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            user: StubUserSettings {
                id: 1,
                name: "tester".to_string(),
                created_at: "2025-01-01T00:00:00Z".to_string(),
                favorite_genres: vec!["SF".to_string()],
                ott_services: vec!["Netflix".to_string()],
            },
        })
    }

    #[test]
    fn configured_credentials_log_in() {
        let session = authenticator()
            .authenticate("test@test.com", "password123")
            .unwrap();
        assert_eq!(session.access_token, "access");
        assert_eq!(session.user.email, "test@test.com");
        assert_eq!(session.user.profile.ott_services, vec!["Netflix"]);
    }

    #[test]
    fn any_mismatch_is_rejected() {
        let auth = authenticator();
        assert!(auth.authenticate("test@test.com", "wrong").is_none());
        assert!(auth.authenticate("other@test.com", "password123").is_none());
        assert!(auth.authenticate("TEST@test.com", "password123").is_none());
        assert!(auth.authenticate("", "").is_none());
    }

    #[test]
    fn session_serializes_in_camel_case() {
        let session = authenticator()
            .authenticate("test@test.com", "password123")
            .unwrap();
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["accessToken"], "access");
        assert_eq!(value["refreshToken"], "refresh");
        assert_eq!(value["user"]["createdAt"], "2025-01-01T00:00:00Z");
        assert_eq!(value["user"]["profile"]["favoriteGenres"][0], "SF");
    }
}
