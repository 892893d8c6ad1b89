use super::*;

// =============================================================================
// authenticate — fixed records
// =============================================================================

#[tokio::test]
async fn authenticate_known_admin() {
    let identity = FixedCredentialVerifier
        .authenticate("admin@sigepa.com", "admin123")
        .await
        .expect("known credentials must match");
    assert_eq!(identity.id, "1");
    assert_eq!(identity.name, "Administrador");
    assert_eq!(identity.email, "admin@sigepa.com");
    assert_eq!(identity.role, Role::Administrator);
}

#[tokio::test]
async fn authenticate_known_co_owner() {
    let identity = FixedCredentialVerifier
        .authenticate("user@sigepa.com", "user123")
        .await
        .expect("known credentials must match");
    assert_eq!(identity.id, "2");
    assert_eq!(identity.role, Role::CoOwner);
}

#[tokio::test]
async fn authenticate_unknown_pair_rejected() {
    let result = FixedCredentialVerifier.authenticate("unknown@x.com", "wrong").await;
    assert!(result.is_none());
}

#[tokio::test]
async fn authenticate_wrong_password_rejected() {
    let result = FixedCredentialVerifier.authenticate("admin@sigepa.com", "user123").await;
    assert!(result.is_none());
}

#[tokio::test]
async fn authenticate_is_case_sensitive() {
    let result = FixedCredentialVerifier.authenticate("Admin@sigepa.com", "admin123").await;
    assert!(result.is_none());
}

#[tokio::test]
async fn authenticate_empty_inputs_rejected() {
    let result = FixedCredentialVerifier.authenticate("", "").await;
    assert!(result.is_none());
}

// =============================================================================
// register — unconditional issue, co-owner role
// =============================================================================

#[tokio::test]
async fn register_issues_co_owner() {
    let identity = FixedCredentialVerifier
        .register("Jane", "jane@x.com", "pw")
        .await
        .expect("registration always succeeds");
    assert_eq!(identity.name, "Jane");
    assert_eq!(identity.email, "jane@x.com");
    assert_eq!(identity.role, Role::CoOwner);
}

#[tokio::test]
async fn register_duplicate_email_still_succeeds() {
    let first = FixedCredentialVerifier.register("Jane", "jane@x.com", "pw").await;
    let second = FixedCredentialVerifier.register("Jane", "jane@x.com", "pw").await;
    assert!(first.is_some());
    assert!(second.is_some());
}

#[tokio::test]
async fn register_ids_are_unique() {
    let a = FixedCredentialVerifier.register("A", "a@x.com", "pw").await.unwrap();
    let b = FixedCredentialVerifier.register("B", "b@x.com", "pw").await.unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn register_never_issues_administrator() {
    let identity = FixedCredentialVerifier
        .register("Admin Wannabe", "admin@sigepa.com", "admin123")
        .await
        .unwrap();
    assert_eq!(identity.role, Role::CoOwner);
}
