use carnet::models::{CategoryParams, PostParams};
use carnet::services::posts::PostRules;
use carnet::services::validation::{MSG_EXACT_LENGTH, MSG_INVALID, MSG_TAKEN};
use carnet::services::{categories, posts, ServiceError};
use carnet::Database;

fn create_test_db() -> Database {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let id: u32 = rng.gen();
    let name = format!("test_db_{}", id);

    let db = Database::open_memory(&name).expect("Failed to create test database");
    db.migrate().expect("Failed to run migrations");
    db
}

fn post_params(name: &str, content: &str, slug: &str) -> PostParams {
    PostParams {
        name: Some(name.to_string()),
        content: Some(content.to_string()),
        slug: Some(slug.to_string()),
    }
}

fn category_params(name: &str, slug: &str) -> CategoryParams {
    CategoryParams {
        name: Some(name.to_string()),
        slug: Some(slug.to_string()),
    }
}

fn expect_invalid(result: Result<i64, ServiceError>) -> carnet::services::validation::ValidationErrors {
    match result {
        Err(ServiceError::Invalid(errors)) => errors,
        other => panic!("expected validation failure, got {:?}", other),
    }
}

mod slug_integration_tests {
    use super::*;

    #[test]
    fn test_empty_slug_is_derived_for_both_resources() {
        let db = create_test_db();

        let post_id = posts::create_post(
            &db,
            post_params("Hello World", "body", ""),
            PostRules::default(),
        )
        .unwrap();
        let category_id = categories::create_category(&db, category_params("Tech", "")).unwrap();

        assert_eq!(
            posts::get_post(&db, post_id).unwrap().slug.as_deref(),
            Some("hello-world")
        );
        assert_eq!(categories::get_category(&db, category_id).unwrap().slug, "tech");
    }

    #[test]
    fn test_invalid_format_is_rejected_for_both_resources() {
        let db = create_test_db();

        for slug in ["Hello", "hello world", "hello_world", "héllo"] {
            let errors = expect_invalid(posts::create_post(
                &db,
                post_params("Hello", "body", slug),
                PostRules::default(),
            ));
            assert!(errors.has("slug", MSG_INVALID), "post slug {:?}", slug);

            let errors =
                expect_invalid(categories::create_category(&db, category_params("Hello", slug)));
            assert!(errors.has("slug", MSG_INVALID), "category slug {:?}", slug);
        }

        assert!(posts::list_posts(&db).unwrap().is_empty());
        assert!(categories::list_categories(&db).unwrap().is_empty());
    }

    #[test]
    fn test_symbol_only_name_derives_no_usable_slug() {
        let db = create_test_db();

        let errors = expect_invalid(posts::create_post(
            &db,
            post_params("🎉", "body", ""),
            PostRules::default(),
        ));
        assert!(errors.has("slug", MSG_INVALID));

        let errors = expect_invalid(categories::create_category(&db, category_params("🎉", "")));
        assert!(errors.has("slug", MSG_INVALID));

        assert!(posts::list_posts(&db).unwrap().is_empty());
    }

    #[test]
    fn test_second_post_with_same_slug_fails() {
        let db = create_test_db();

        posts::create_post(&db, post_params("Hi", "body", "hi"), PostRules::default()).unwrap();
        let errors = expect_invalid(posts::create_post(
            &db,
            post_params("Hi", "body", "hi"),
            PostRules::default(),
        ));

        assert!(errors.has("slug", MSG_TAKEN));
        assert_eq!(posts::list_posts(&db).unwrap().len(), 1);
    }

    #[test]
    fn test_derived_slug_collides_with_explicit_slug() {
        let db = create_test_db();

        categories::create_category(&db, category_params("Anything", "hello-world")).unwrap();
        let errors =
            expect_invalid(categories::create_category(&db, category_params("Hello World", "")));
        assert!(errors.has("slug", MSG_TAKEN));
    }
}

mod length_rule_tests {
    use super::*;

    #[test]
    fn test_strict_length_applies_to_name_and_content() {
        let db = create_test_db();
        let rules = PostRules { strict_length: true };

        posts::create_post(&db, post_params("ab", "cd", ""), rules).unwrap();

        for (name, content) in [("a", "cd"), ("abc", "cd"), ("ab", ""), ("ab", "xyz")] {
            let errors = expect_invalid(posts::create_post(
                &db,
                post_params(name, content, "unique-slug"),
                rules,
            ));
            assert!(
                errors.has("name", MSG_EXACT_LENGTH) || errors.has("content", MSG_EXACT_LENGTH),
                "{:?}/{:?}",
                name,
                content
            );
        }

        let errors = expect_invalid(posts::create_post(
            &db,
            PostParams {
                name: None,
                content: Some("cd".to_string()),
                slug: Some("other".to_string()),
            },
            rules,
        ));
        assert!(errors.has("name", MSG_EXACT_LENGTH));
    }

    #[test]
    fn test_length_rule_off_by_default() {
        let db = create_test_db();
        posts::create_post(
            &db,
            post_params("A much longer name", "and longer content", ""),
            PostRules::default(),
        )
        .unwrap();
    }
}

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_post_lifecycle() {
        let db = create_test_db();

        let id = posts::create_post(&db, post_params("Draft", "body", ""), PostRules::default())
            .unwrap();
        let created = posts::get_post(&db, id).unwrap();
        assert_eq!(created.slug.as_deref(), Some("draft"));

        let updated = posts::update_post(
            &db,
            id,
            PostParams {
                name: Some("Final".to_string()),
                ..Default::default()
            },
            PostRules::default(),
        )
        .unwrap();
        assert_eq!(updated.name, "Final");
        assert_eq!(updated.slug.as_deref(), Some("draft"));
        assert_eq!(updated.created_at, created.created_at);

        posts::delete_post(&db, id).unwrap();
        assert!(posts::get_post(&db, id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_missing_post_leaves_others() {
        let db = create_test_db();
        let id = posts::create_post(&db, post_params("Keep", "body", ""), PostRules::default())
            .unwrap();

        assert!(posts::delete_post(&db, id + 100).unwrap_err().is_not_found());
        assert_eq!(posts::list_posts(&db).unwrap().len(), 1);
    }

    #[test]
    fn test_deleting_category_does_not_cascade() {
        let db = create_test_db();
        let category_id = categories::create_category(&db, category_params("Tech", "")).unwrap();
        let post_id = posts::create_post(&db, post_params("Hi", "body", ""), PostRules::default())
            .unwrap();
        posts::set_post_category(&db, post_id, Some(category_id)).unwrap();

        let listed = posts::list_posts(&db).unwrap();
        assert_eq!(listed[0].category.as_ref().map(|c| c.id), Some(category_id));

        categories::delete_category(&db, category_id).unwrap();

        let listed = posts::list_posts(&db).unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].category.is_none());
    }

    #[test]
    fn test_shared_memory_database_between_handles() {
        let db = create_test_db();
        let other = db.clone();

        categories::create_category(&db, category_params("Tech", "")).unwrap();
        assert_eq!(categories::list_categories(&other).unwrap().len(), 1);
    }
}
