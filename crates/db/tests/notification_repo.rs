use scholar_core::notifications::NotificationKind;
use scholar_core::roles::Role;
use scholar_core::types::DbId;
use scholar_db::models::account::{CreateAccount, NewStudentProfile};
use scholar_db::repositories::{AccountRepo, NotificationRepo};
use sqlx::PgPool;

async fn account(pool: &PgPool, name: &str, role: Role) -> DbId {
    let input = CreateAccount {
        name: name.to_string(),
        email: format!("{name}@college.edu"),
        password_hash: "hash".to_string(),
        role,
    };
    AccountRepo::register(pool, &input, &NewStudentProfile::default())
        .await
        .unwrap()
        .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn batch_insert_creates_one_row_per_recipient(pool: PgPool) {
    let admin = account(&pool, "hod", Role::Admin).await;
    let mut recipients = Vec::new();
    for name in ["a", "b", "c"] {
        recipients.push(account(&pool, name, Role::Student).await);
    }

    let rows = NotificationRepo::create_batch(
        &pool,
        admin,
        "Placement drive on Monday",
        NotificationKind::Competition,
        &recipients,
    )
    .await
    .unwrap();

    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.sender_id, admin);
        assert_eq!(row.kind, "competition");
        assert!(!row.is_read);
    }
    let mut got: Vec<DbId> = rows.iter().map(|r| r.recipient_id).collect();
    got.sort_unstable();
    assert_eq!(got, recipients);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_batch_is_a_no_op(pool: PgPool) {
    let admin = account(&pool, "hod", Role::Admin).await;
    let rows = NotificationRepo::create_batch(&pool, admin, "nobody", NotificationKind::General, &[])
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn batch_with_unknown_recipient_inserts_nothing(pool: PgPool) {
    let admin = account(&pool, "hod", Role::Admin).await;
    let student = account(&pool, "real", Role::Student).await;

    let result =
        NotificationRepo::create_batch(&pool, admin, "hi", NotificationKind::General, &[student, 777_777])
            .await;
    assert!(result.is_err());
    assert!(NotificationRepo::list_for_recipient(&pool, student).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mark_read_checks_recipient(pool: PgPool) {
    let admin = account(&pool, "hod", Role::Admin).await;
    let owner = account(&pool, "owner", Role::Student).await;
    let other = account(&pool, "other", Role::Student).await;

    let rows = NotificationRepo::create_batch(&pool, admin, "hello", NotificationKind::General, &[owner])
        .await
        .unwrap();
    let id = rows[0].id;

    assert!(!NotificationRepo::mark_read(&pool, id, other).await.unwrap());
    assert!(NotificationRepo::mark_read(&pool, id, owner).await.unwrap());

    let inbox = NotificationRepo::list_for_recipient(&pool, owner).await.unwrap();
    assert!(inbox[0].is_read);
}
