//! Account service tests

use crate::support::{
    BreachAnswer, GatedBreachChecker, STRONG_PASSWORD, account_service, fixture, seed, token_for,
    tokens,
};
use notegate_application::{AdminSeed, RegisterRequest};
use notegate_domain::Error;
use notegate_domain::entities::IdentityChanges;
use notegate_domain::ports::TokenService;
use notegate_domain::repositories::IdentityRepository;
use notegate_domain::value_objects::OperationContext;
use notegate_infrastructure::InMemoryIdentityRepository;
use std::sync::Arc;

fn register_request(username: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_stores_digest_and_defaults_inactive() {
    let fx = fixture(BreachAnswer::Clean, false);

    let identity = fx
        .service
        .register(register_request("alice", "alice@example.com", STRONG_PASSWORD))
        .await
        .unwrap();

    assert!(!identity.is_admin);
    assert!(!identity.is_active);
    assert_ne!(identity.password_digest, STRONG_PASSWORD);
    assert!(identity.password_digest.starts_with("$argon2id$"));
    assert_eq!(fx.breach.calls(), 1);
}

#[tokio::test]
async fn test_register_validation_happens_before_persistence() {
    let fx = fixture(BreachAnswer::Clean, true);
    fx.service
        .register(register_request("alice", "alice@example.com", STRONG_PASSWORD))
        .await
        .unwrap();

    let invalid = fx
        .service
        .register(register_request("bob", "not-an-email", STRONG_PASSWORD))
        .await;
    assert!(matches!(invalid, Err(Error::InvalidEmail { .. })));

    match fx
        .service
        .register(register_request("bob", "alice@example.com", STRONG_PASSWORD))
        .await
    {
        Err(Error::AlreadyExists { field }) => assert_eq!(field, "Email"),
        other => panic!("Expected AlreadyExists, got {other:?}"),
    }

    match fx
        .service
        .register(register_request("alice", "bob@example.com", STRONG_PASSWORD))
        .await
    {
        Err(Error::AlreadyExists { field }) => assert_eq!(field, "Username"),
        other => panic!("Expected AlreadyExists, got {other:?}"),
    }

    let weak = fx
        .service
        .register(register_request("bob", "bob@example.com", "short"))
        .await;
    assert!(matches!(weak, Err(Error::WeakPassword { .. })));

    assert_eq!(fx.repo.len().await, 1);
    // Only the first, successful registration reached the breach checker
    assert_eq!(fx.breach.calls(), 1);
}

#[tokio::test]
async fn test_register_fails_closed_when_breach_service_is_down() {
    let fx = fixture(BreachAnswer::Unavailable, true);

    let result = fx
        .service
        .register(register_request("alice", "alice@example.com", STRONG_PASSWORD))
        .await;
    assert!(matches!(result, Err(Error::DependencyUnavailable { .. })));
    assert!(fx.repo.is_empty().await);
}

#[tokio::test]
async fn test_login_issues_token_and_stamps_last_login() {
    let fx = fixture(BreachAnswer::Clean, true);
    fx.service
        .register(register_request("alice", "alice@example.com", STRONG_PASSWORD))
        .await
        .unwrap();

    let outcome = fx
        .service
        .login("alice@example.com", STRONG_PASSWORD)
        .await
        .unwrap();

    let claims = fx.tokens.verify(&outcome.token).unwrap();
    assert_eq!(claims.sub, "alice@example.com");
    assert!(outcome.identity.last_login.is_some());

    let stored = fx
        .repo
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.last_login, outcome.identity.last_login);
}

#[tokio::test]
async fn test_login_rejections() {
    let fx = fixture(BreachAnswer::Clean, true);
    seed(&fx.repo, "alice", STRONG_PASSWORD, false, true).await;
    seed(&fx.repo, "dormant", STRONG_PASSWORD, false, false).await;

    let wrong = fx.service.login("alice@example.com", "wrong-password").await;
    let unknown = fx.service.login("ghost@example.com", STRONG_PASSWORD).await;
    assert!(matches!(wrong, Err(Error::InvalidCredential)));
    assert!(matches!(unknown, Err(Error::InvalidCredential)));
    assert_eq!(
        wrong.unwrap_err().to_string(),
        unknown.unwrap_err().to_string()
    );

    assert!(matches!(
        fx.service.login("dormant@example.com", STRONG_PASSWORD).await,
        Err(Error::AccountInactive)
    ));
    // Inactive accounts still fail on a wrong password first
    assert!(matches!(
        fx.service.login("dormant@example.com", "wrong-password").await,
        Err(Error::InvalidCredential)
    ));
    assert!(
        fx.repo
            .find_by_email("dormant@example.com")
            .await
            .unwrap()
            .unwrap()
            .last_login
            .is_none()
    );
}

#[tokio::test]
async fn test_renew_token() {
    let fx = fixture(BreachAnswer::Clean, true);
    let alice = seed(&fx.repo, "alice", STRONG_PASSWORD, false, true).await;
    let token = token_for(&fx.tokens, &alice);

    let renewed = fx
        .service
        .renew_token(&OperationContext::bearer(&token))
        .await
        .unwrap();
    assert_eq!(fx.tokens.verify(&renewed).unwrap().sub, "alice@example.com");

    assert!(matches!(
        fx.service.renew_token(&OperationContext::detached()).await,
        Err(Error::AuthenticationFailure { .. })
    ));
    assert!(matches!(
        fx.service
            .renew_token(&OperationContext::bearer("garbage"))
            .await,
        Err(Error::InvalidToken)
    ));
}

#[tokio::test]
async fn test_get_and_list_users() {
    let fx = fixture(BreachAnswer::Clean, true);
    let alice = seed(&fx.repo, "alice", STRONG_PASSWORD, false, true).await;
    let bob = seed(&fx.repo, "bob", STRONG_PASSWORD, false, true).await;
    let admin = seed(&fx.repo, "admin", STRONG_PASSWORD, true, true).await;
    let alice_ctx = OperationContext::bearer(&token_for(&fx.tokens, &alice));
    let admin_ctx = OperationContext::bearer(&token_for(&fx.tokens, &admin));

    assert_eq!(
        fx.service.get_user(&alice_ctx, alice.id).await.unwrap().id,
        alice.id
    );
    assert!(matches!(
        fx.service.get_user(&alice_ctx, bob.id).await,
        Err(Error::AuthorizationFailure { .. })
    ));
    assert_eq!(
        fx.service.get_user(&admin_ctx, bob.id).await.unwrap().id,
        bob.id
    );
    assert!(matches!(
        fx.service.get_user(&admin_ctx, 404).await,
        Err(Error::NotFound { .. })
    ));

    assert!(matches!(
        fx.service.list_users(&alice_ctx).await,
        Err(Error::AuthorizationFailure { .. })
    ));
    assert_eq!(fx.service.list_users(&admin_ctx).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_user_by_owner() {
    let fx = fixture(BreachAnswer::Clean, true);
    let alice = seed(&fx.repo, "alice", STRONG_PASSWORD, false, true).await;
    let ctx = OperationContext::bearer(&token_for(&fx.tokens, &alice));

    let updated = fx
        .service
        .update_user(
            &ctx,
            alice.id,
            IdentityChanges {
                username: Some("alice2".to_string()),
                password: Some("An0ther-Str0ng-Pass".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.username, "alice2");
    assert_ne!(updated.password_digest, alice.password_digest);
    assert!(
        fx.service
            .login("alice@example.com", "An0ther-Str0ng-Pass")
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_login_during_password_change_keeps_both_writes() {
    let repo = Arc::new(InMemoryIdentityRepository::new());
    let tokens = tokens();
    let breach = GatedBreachChecker::new();
    let service = account_service(repo.clone(), tokens.clone(), breach.clone(), true);
    let alice = seed(&repo, "alice", STRONG_PASSWORD, false, true).await;
    let ctx = OperationContext::bearer(&token_for(&tokens, &alice));

    let update = service.update_user(
        &ctx,
        alice.id,
        IdentityChanges {
            password: Some("An0ther-Str0ng-Pass".to_string()),
            ..Default::default()
        },
    );
    let login = async {
        breach.entered().await;
        let outcome = service.login("alice@example.com", STRONG_PASSWORD).await;
        breach.release();
        outcome
    };
    let (updated, logged_in) = tokio::join!(update, login);
    let updated = updated.unwrap();
    let logged_in = logged_in.unwrap();

    let stored = repo.find_by_id(alice.id).await.unwrap().unwrap();
    assert!(logged_in.identity.last_login.is_some());
    assert_eq!(stored.last_login, logged_in.identity.last_login);
    assert_eq!(stored.password_digest, updated.password_digest);
    assert!(
        service
            .login("alice@example.com", "An0ther-Str0ng-Pass")
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_update_user_rejections() {
    let fx = fixture(BreachAnswer::Clean, true);
    let alice = seed(&fx.repo, "alice", STRONG_PASSWORD, false, true).await;
    let bob = seed(&fx.repo, "bob", STRONG_PASSWORD, false, true).await;
    let admin = seed(&fx.repo, "admin", STRONG_PASSWORD, true, true).await;
    let alice_ctx = OperationContext::bearer(&token_for(&fx.tokens, &alice));
    let admin_ctx = OperationContext::bearer(&token_for(&fx.tokens, &admin));

    let rename = || IdentityChanges {
        username: Some("renamed".to_string()),
        ..Default::default()
    };

    assert!(matches!(
        fx.service.update_user(&alice_ctx, bob.id, rename()).await,
        Err(Error::AuthorizationFailure { .. })
    ));
    assert_eq!(
        fx.service
            .update_user(&admin_ctx, bob.id, rename())
            .await
            .unwrap()
            .username,
        "renamed"
    );

    let taken_email = IdentityChanges {
        email: Some("admin@example.com".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        fx.service.update_user(&alice_ctx, alice.id, taken_email).await,
        Err(Error::AlreadyExists { .. })
    ));

    let bad_email = IdentityChanges {
        email: Some("nope".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        fx.service.update_user(&alice_ctx, alice.id, bad_email).await,
        Err(Error::InvalidEmail { .. })
    ));

    let weak = IdentityChanges {
        password: Some("short".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        fx.service.update_user(&alice_ctx, alice.id, weak).await,
        Err(Error::WeakPassword { .. })
    ));
}

#[tokio::test]
async fn test_bootstrap_admin_is_idempotent() {
    let fx = fixture(BreachAnswer::Unavailable, false);
    let admin_seed = || AdminSeed {
        username: "admin".to_string(),
        email: "admin@example.com".to_string(),
        password: "operator password".to_string(),
    };

    let admin = fx.service.bootstrap_admin(admin_seed()).await.unwrap().unwrap();
    assert!(admin.is_admin);
    assert!(admin.is_active);
    assert!(fx.service.bootstrap_admin(admin_seed()).await.unwrap().is_none());
    assert_eq!(fx.repo.len().await, 1);
    assert_eq!(fx.breach.calls(), 0);

    assert!(
        fx.service
            .login("admin@example.com", "operator password")
            .await
            .is_ok()
    );
}
