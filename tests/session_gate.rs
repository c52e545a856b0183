mod common;

use common::{ADMIN_EMAIL, ADMIN_PASSWORD};
use storefront_admin::{
    error::AppError,
    session::{
        AdminCredentials, CredentialSource, FlagSessionProvider, LOGGED_IN_KEY, SessionProvider,
    },
};
use uuid::Uuid;

#[tokio::test]
async fn correct_pair_sets_logged_in_flag() -> anyhow::Result<()> {
    let sessions = common::sessions();

    let token = sessions.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;

    assert_eq!(
        sessions.flags().get(&token, LOGGED_IN_KEY).await.as_deref(),
        Some("true")
    );
    assert!(sessions.is_authenticated(&token).await);
    Ok(())
}

#[tokio::test]
async fn any_other_pair_is_rejected_without_writing_flags() {
    let sessions = common::sessions();
    let attempts = [
        (ADMIN_EMAIL, "wrong"),
        ("someone@else.test", ADMIN_PASSWORD),
        ("", ""),
        ("ADMIN@SHOP.TEST", ADMIN_PASSWORD),
    ];

    for (email, password) in attempts {
        let err = sessions
            .login(email, password)
            .await
            .expect_err("login should fail");
        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    assert!(sessions.flags().is_empty().await);
}

#[tokio::test]
async fn failed_attempts_do_not_lock_out() -> anyhow::Result<()> {
    let sessions = common::sessions();
    for _ in 0..10 {
        assert!(sessions.login(ADMIN_EMAIL, "nope").await.is_err());
    }
    let token = sessions.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;
    assert!(sessions.is_authenticated(&token).await);
    Ok(())
}

#[tokio::test]
async fn unknown_token_is_not_authenticated() {
    let sessions = common::sessions();
    assert!(!sessions.is_authenticated(&Uuid::new_v4()).await);
}

#[tokio::test]
async fn logout_clears_flag() -> anyhow::Result<()> {
    let sessions = common::sessions();
    let token = sessions.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;

    sessions.logout(&token).await;

    assert!(!sessions.is_authenticated(&token).await);
    assert_eq!(sessions.flags().get(&token, LOGGED_IN_KEY).await, None);
    Ok(())
}

#[tokio::test]
async fn sessions_are_independent() -> anyhow::Result<()> {
    let sessions = common::sessions();
    let first = sessions.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;
    let second = sessions.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;
    assert_ne!(first, second);

    sessions.logout(&first).await;
    assert!(!sessions.is_authenticated(&first).await);
    assert!(sessions.is_authenticated(&second).await);
    Ok(())
}

struct Unconfigured;

impl CredentialSource for Unconfigured {
    fn admin_credentials(&self) -> Option<AdminCredentials> {
        None
    }
}

#[tokio::test]
async fn missing_configuration_behaves_like_mismatch() {
    let sessions = FlagSessionProvider::new(Unconfigured);
    let err = sessions.login("", "").await.expect_err("no admin configured");
    assert!(matches!(err, AppError::InvalidCredentials));
    assert!(sessions.flags().is_empty().await);
}

/// Reads the admin pair the way `EnvCredentials` does, from fixed values
/// standing in for a `.env` with `ADMIN_EMAIL=` and `ADMIN_PASSWORD=`.
struct BlankValues;

impl CredentialSource for BlankValues {
    fn admin_credentials(&self) -> Option<AdminCredentials> {
        AdminCredentials::from_values(Some(String::new()), Some("  ".into()))
    }
}

#[tokio::test]
async fn blank_configured_values_reject_empty_login() {
    let sessions = FlagSessionProvider::new(BlankValues);

    let err = sessions.login("", "").await.expect_err("blank admin pair must not match");
    assert!(matches!(err, AppError::InvalidCredentials));
    let err = sessions.login("  ", "").await.expect_err("blank admin pair must not match");
    assert!(matches!(err, AppError::InvalidCredentials));
    assert!(sessions.flags().is_empty().await);
}

#[test]
fn credentials_need_both_values_non_blank() {
    assert_eq!(AdminCredentials::from_values(None, Some("pw".into())), None);
    assert_eq!(AdminCredentials::from_values(Some("a@b.test".into()), None), None);
    assert_eq!(AdminCredentials::from_values(Some("".into()), Some("pw".into())), None);
    assert_eq!(AdminCredentials::from_values(Some("a@b.test".into()), Some(" \t".into())), None);
    assert_eq!(
        AdminCredentials::from_values(Some("a@b.test".into()), Some("pw".into())),
        Some(AdminCredentials {
            email: "a@b.test".into(),
            password: "pw".into(),
        })
    );
}
