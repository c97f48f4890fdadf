use scholar_core::profile::{Internship, SocialLinks};
use scholar_core::roles::Role;
use scholar_core::types::DbId;
use scholar_db::models::account::{CreateAccount, NewStudentProfile};
use scholar_db::models::profile::UpdateProfile;
use scholar_db::repositories::{AccountRepo, ProfileRepo};
use sqlx::PgPool;

async fn student(pool: &PgPool, name: &str) -> DbId {
    let input = CreateAccount {
        name: name.to_string(),
        email: format!("{name}@college.edu"),
        password_hash: "hash".to_string(),
        role: Role::Student,
    };
    AccountRepo::register(pool, &input, &NewStudentProfile::default())
        .await
        .unwrap()
        .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_overwrites_supplied_fields_only(pool: PgPool) {
    let id = student(&pool, "pia").await;

    let first = UpdateProfile {
        phone: Some("99999".to_string()),
        internships: Some(vec![Internship {
            company: "Acme".to_string(),
            description: "Built a scheduler".to_string(),
            ..Default::default()
        }]),
        ..Default::default()
    };
    ProfileRepo::update_by_account(&pool, id, &first).await.unwrap().unwrap();

    let second = UpdateProfile {
        cgpa: Some(9.1),
        social_links: Some(SocialLinks {
            github: Some("github.com/pia".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let profile = ProfileRepo::update_by_account(&pool, id, &second).await.unwrap().unwrap();

    assert_eq!(profile.phone.as_deref(), Some("99999"));
    assert_eq!(profile.internships.len(), 1);
    assert_eq!(profile.internships[0].company, "Acme");
    assert_eq!(profile.cgpa, 9.1);
    assert_eq!(profile.social_links.github.as_deref(), Some("github.com/pia"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_without_profile_is_none(pool: PgPool) {
    let result = ProfileRepo::update_by_account(&pool, 31337, &UpdateProfile::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn min_cgpa_filter_is_inclusive_and_sorted(pool: PgPool) {
    for (name, cgpa) in [("low", 7.0), ("edge", 8.5), ("high", 9.4)] {
        let id = student(&pool, name).await;
        let update = UpdateProfile {
            cgpa: Some(cgpa),
            ..Default::default()
        };
        ProfileRepo::update_by_account(&pool, id, &update).await.unwrap();
    }

    let names: Vec<String> = ProfileRepo::list_with_min_cgpa(&pool, 8.5)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["high", "edge"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn joined_listing_carries_account_fields(pool: PgPool) {
    let id = student(&pool, "quinn").await;

    let all = ProfileRepo::list_with_accounts(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].profile.account_id, id);
    assert_eq!(all[0].email, "quinn@college.edu");

    let one = ProfileRepo::find_with_account(&pool, id).await.unwrap().unwrap();
    assert_eq!(one.name, "quinn");
}
