//! Registration and directory queries against a real database.

use scholar_core::roles::Role;
use scholar_db::models::account::{CreateAccount, NewStudentProfile};
use scholar_db::repositories::{AccountRepo, ProfileRepo};
use sqlx::PgPool;

fn new_account(name: &str, role: Role) -> CreateAccount {
    CreateAccount {
        name: name.to_string(),
        email: format!("{name}@college.edu"),
        password_hash: "$argon2id$placeholder".to_string(),
        role,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn student_registration_creates_profile_with_fallbacks(pool: PgPool) {
    let account = AccountRepo::register(&pool, &new_account("nina", Role::Student), &NewStudentProfile::default())
        .await
        .unwrap();

    let profile = ProfileRepo::find_by_account(&pool, account.id)
        .await
        .unwrap()
        .expect("student must have a profile");
    assert_eq!(profile.enrollment_no, format!("TEMP{}", account.id));
    assert_eq!(profile.branch, "General");
    assert_eq!(profile.current_semester, 1);
    assert_eq!(profile.cgpa, 0.0);
    assert!(profile.skills.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_details_also_fall_back(pool: PgPool) {
    let details = NewStudentProfile {
        enrollment_no: Some("   ".to_string()),
        branch: Some(String::new()),
    };
    let account = AccountRepo::register(&pool, &new_account("omar", Role::Student), &details)
        .await
        .unwrap();

    let profile = ProfileRepo::find_by_account(&pool, account.id).await.unwrap().unwrap();
    assert_eq!(profile.enrollment_no, format!("TEMP{}", account.id));
    assert_eq!(profile.branch, "General");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_registration_has_no_profile(pool: PgPool) {
    let account = AccountRepo::register(&pool, &new_account("dean", Role::Admin), &NewStudentProfile::default())
        .await
        .unwrap();

    assert_eq!(account.role().unwrap(), Role::Admin);
    assert!(ProfileRepo::find_by_account(&pool, account.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_enrollment_rolls_back_the_account(pool: PgPool) {
    let details = NewStudentProfile {
        enrollment_no: Some("21CS042".to_string()),
        branch: Some("CSE".to_string()),
    };
    AccountRepo::register(&pool, &new_account("first", Role::Student), &details)
        .await
        .unwrap();

    let err = AccountRepo::register(&pool, &new_account("second", Role::Student), &details)
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("unique violation");
    assert_eq!(db_err.constraint(), Some("uq_student_profiles_enrollment_no"));

    assert!(AccountRepo::find_by_email(&pool, "second@college.edu")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_violates_unique_constraint(pool: PgPool) {
    let input = new_account("twin", Role::Admin);
    AccountRepo::register(&pool, &input, &NewStudentProfile::default())
        .await
        .unwrap();

    let err = AccountRepo::register(&pool, &input, &NewStudentProfile::default())
        .await
        .unwrap_err();
    assert_eq!(
        err.as_database_error().and_then(|e| e.constraint()),
        Some("uq_accounts_email")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contacts_are_listed_by_role_in_name_order(pool: PgPool) {
    for (name, role) in [("zoe", Role::Student), ("amit", Role::Student), ("hod", Role::Admin)] {
        AccountRepo::register(&pool, &new_account(name, role), &NewStudentProfile::default())
            .await
            .unwrap();
    }

    let students = AccountRepo::list_contacts_by_role(&pool, Role::Student).await.unwrap();
    let names: Vec<&str> = students.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["amit", "zoe"]);

    let admins = AccountRepo::list_contacts_by_role(&pool, Role::Admin).await.unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].email, "hod@college.edu");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_contact_for_missing_id_is_none(pool: PgPool) {
    assert!(AccountRepo::find_contact(&pool, 12345).await.unwrap().is_none());
}
