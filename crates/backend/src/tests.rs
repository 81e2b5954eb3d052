//! End-to-end properties of the table layer over a throwaway SQLite file.
//!
//! One test function: the database connection is a process-wide OnceCell, so
//! everything that needs it runs on a single runtime, in sequence.

use contracts::domain::order::{OrderDraft, OrderPatch};
use contracts::domain::payment_method::{PaymentMethodDraft, PaymentMethodPatch};
use contracts::domain::service::{ServiceDraft, ServicePatch};
use contracts::domain::site_settings::SiteSettingsPatch;

use crate::domain::{orders, payment_methods, services, site_settings};
use crate::shared::data::db;
use crate::system::{auth::jwt, auth::password, initialization};

#[tokio::test]
async fn crud_properties() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_file = dir.path().join("test.db");
    db::initialize_database(Some(&db_file.to_string_lossy()))
        .await
        .expect("db init");

    // ---- round-trip mapping: create then list returns the same fields ----
    let created = services::service::create(ServiceDraft {
        name: "PayPal Verified Account".into(),
        price: "15$".into(),
        order: 12,
        active: true,
    })
    .await
    .expect("create service");
    assert!(!created.id.is_empty());

    let listed = services::service::list_all().await.expect("list services");
    let found = listed
        .iter()
        .find(|s| s.id == created.id)
        .expect("created service listed");
    assert_eq!(found.name, "PayPal Verified Account");
    assert_eq!(found.price, "15$");
    assert_eq!(found.order, 12);
    assert!(found.active);

    // ---- partial update changes only the patched field ----
    let updated = services::service::update(
        &created.id,
        ServicePatch {
            price: Some("20$".into()),
            ..Default::default()
        },
    )
    .await
    .expect("update service")
    .expect("service exists");
    assert_eq!(updated.price, "20$");
    assert_eq!(updated.name, "PayPal Verified Account");
    assert_eq!(updated.order, 12);
    assert!(updated.active);

    // ---- listing respects the display-rank column ----
    let low = services::service::create(ServiceDraft {
        name: "Wise".into(),
        price: "10$".into(),
        order: 1,
        active: true,
    })
    .await
    .expect("create low-rank service");
    let all = services::service::list_all().await.expect("list services");
    let pos_low = all.iter().position(|s| s.id == low.id).unwrap();
    let pos_high = all.iter().position(|s| s.id == created.id).unwrap();
    assert!(pos_low < pos_high, "rank 1 sorts before rank 12");

    // ---- updating an unknown id reports None, not an error ----
    let missing = services::service::update(
        "no-such-id",
        ServicePatch {
            price: Some("1$".into()),
            ..Default::default()
        },
    )
    .await
    .expect("update unknown id");
    assert!(missing.is_none());

    // ---- order/service decoupling: deleting a service keeps its orders ----
    let order = orders::service::create(OrderDraft {
        customer_name: "Ali".into(),
        service_name: "Wise".into(),
        notes: Some("asap".into()),
    })
    .await
    .expect("create order");
    assert!(!order.archived);

    assert!(services::service::delete(&low.id).await.expect("delete service"));
    let remaining = orders::service::list_all().await.expect("list orders");
    let kept = remaining
        .iter()
        .find(|o| o.id == order.id)
        .expect("order survives service deletion");
    assert_eq!(kept.service_name, "Wise");
    assert_eq!(kept.customer_name, "Ali");

    // ---- delete is idempotent: a second delete is a no-op ----
    assert!(!services::service::delete(&low.id).await.expect("re-delete"));
    assert!(!services::service::delete("no-such-id")
        .await
        .expect("delete unknown id"));

    // ---- archive flips only the archived flag ----
    let archived = orders::service::update(
        &order.id,
        OrderPatch {
            archived: Some(true),
            ..Default::default()
        },
    )
    .await
    .expect("archive order")
    .expect("order exists");
    assert!(archived.archived);
    assert_eq!(archived.customer_name, "Ali");
    assert_eq!(archived.notes.as_deref(), Some("asap"));
    assert_eq!(archived.timestamp, order.timestamp);

    // ---- payment methods: full verb pass ----
    let pm = payment_methods::service::create(PaymentMethodDraft {
        name: "Vodafone Cash".into(),
        details: "01000000000".into(),
        active: true,
    })
    .await
    .expect("create payment method");
    let pm = payment_methods::service::update(
        &pm.id,
        PaymentMethodPatch {
            active: Some(false),
            ..Default::default()
        },
    )
    .await
    .expect("update payment method")
    .expect("payment method exists");
    assert!(!pm.active);
    assert_eq!(pm.details, "01000000000");
    assert!(payment_methods::service::delete(&pm.id)
        .await
        .expect("delete payment method"));

    // ---- site settings: singleton seeds itself, sparse update holds ----
    let settings = site_settings::service::get().await.expect("get settings");
    assert!(!settings.title.is_empty());
    let updated = site_settings::service::update(SiteSettingsPatch {
        title: Some("KYC Trust | فتح حسابات".into()),
        ..Default::default()
    })
    .await
    .expect("update settings");
    assert_eq!(updated.title, "KYC Trust | فتح حسابات");
    assert_eq!(updated.description, settings.description);
    assert_eq!(updated.order_notice, settings.order_notice);

    // ---- admin credential seed + token round trip ----
    initialization::ensure_admin_credential_exists()
        .await
        .expect("seed credential");
    let hash = initialization::admin_password_hash()
        .await
        .expect("read hash")
        .expect("hash seeded");
    assert!(password::verify_password("admin123123", &hash).expect("verify"));
    assert!(!password::verify_password("wrong", &hash).expect("verify wrong"));

    let token = jwt::generate_access_token("admin").await.expect("token");
    let claims = jwt::validate_token(&token).await.expect("claims");
    assert_eq!(claims.sub, "admin");
}
