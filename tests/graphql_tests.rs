use std::sync::Arc;

use gqblog::graphql::{BlogSchema, build_schema};
use gqblog::storage::{BlogRepository, Fixtures};
use serde_json::{Value, json};

fn bundled_schema() -> BlogSchema {
    build_schema(Arc::new(BlogRepository::new(Fixtures::bundled().unwrap())))
}

fn persisting_schema() -> BlogSchema {
    let repo = BlogRepository::new(Fixtures::bundled().unwrap()).with_persisted_posts(true);
    build_schema(Arc::new(repo))
}

async fn run(schema: &BlogSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    serde_json::to_value(&response).unwrap()
}

fn error_codes(response: &Value) -> Vec<String> {
    response["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .map(|e| e["extensions"]["code"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn ids(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect()
}

// =============================================================================
// Authors
// =============================================================================

#[tokio::test]
async fn test_authors_in_id_order() {
    let schema = bundled_schema();
    let res = run(&schema, "{ authors { id name twitter } }").await;
    assert!(res.get("errors").is_none());
    assert_eq!(ids(&res["data"]["authors"]), vec!["arunoda", "indi", "pahan"]);
}

#[tokio::test]
async fn test_author_returns_stored_record() {
    let schema = bundled_schema();
    let res = run(&schema, r#"{ author(id: "pahan") { id name twitter } }"#).await;
    assert_eq!(
        res["data"]["author"],
        json!({ "id": "pahan", "name": "Pahan Sarathchandra", "twitter": "pahans" })
    );
}

#[tokio::test]
async fn test_unknown_author_is_lookup_fault() {
    let schema = bundled_schema();
    let res = run(&schema, r#"{ author(id: "nobody") { name } }"#).await;
    assert_eq!(res["data"]["author"], Value::Null);
    assert_eq!(error_codes(&res), vec!["LOOKUP_FAULT"]);
    assert_eq!(res["errors"][0]["message"], "No such author: nobody");
    assert_eq!(res["errors"][0]["path"], json!(["author"]));
}

#[tokio::test]
async fn test_field_error_does_not_abort_siblings() {
    let schema = bundled_schema();
    let res = run(
        &schema,
        r#"{ author(id: "nobody") { name } latestPost { id } }"#,
    )
    .await;
    assert_eq!(res["data"]["latestPost"]["id"], "lean-launch-plan");
    assert_eq!(error_codes(&res), vec!["LOOKUP_FAULT"]);
}

// =============================================================================
// Posts
// =============================================================================

#[tokio::test]
async fn test_missing_post_is_null_not_error() {
    let schema = bundled_schema();
    let res = run(&schema, r#"{ post(id: "missing-id") { id } }"#).await;
    assert_eq!(res["data"]["post"], Value::Null);
    assert!(res.get("errors").is_none());
}

#[tokio::test]
async fn test_post_by_id() {
    let schema = bundled_schema();
    let res = run(
        &schema,
        r#"{ post(id: "kadira-debug") { id title category summary timestamp } }"#,
    )
    .await;
    let post = &res["data"]["post"];
    assert_eq!(post["title"], "Introducing Kadira Debug");
    assert_eq!(post["category"], "PRODUCT");
    assert_eq!(
        post["summary"],
        "A new tool to see what happens inside your Meteor app in real time."
    );
    assert_eq!(post["timestamp"].as_f64(), Some(1_446_732_000_000.0));
}

#[tokio::test]
async fn test_posts_filtered_by_category() {
    let schema = bundled_schema();
    let res = run(&schema, "{ posts(category: METEOR) { id category } }").await;
    assert_eq!(
        ids(&res["data"]["posts"]),
        vec!["lean-launch-plan", "meteor-performance-tips"]
    );

    let res = run(&schema, "{ posts(category: USER_STORY) { id } }").await;
    assert_eq!(ids(&res["data"]["posts"]), vec!["from-zero-to-scale"]);
}

#[tokio::test]
async fn test_posts_without_category_is_empty() {
    let schema = bundled_schema();
    let res = run(&schema, "{ posts { id } }").await;
    assert_eq!(res["data"]["posts"], json!([]));
    assert!(res.get("errors").is_none());
}

#[tokio::test]
async fn test_latest_post_is_first_in_list() {
    let schema = bundled_schema();
    let res = run(&schema, "{ latestPost { id } }").await;
    assert_eq!(res["data"]["latestPost"]["id"], "lean-launch-plan");
}

#[tokio::test]
async fn test_recent_posts() {
    let schema = bundled_schema();

    let res = run(&schema, "{ recentPosts(count: 2) { id } }").await;
    assert_eq!(
        ids(&res["data"]["recentPosts"]),
        vec!["lean-launch-plan", "kadira-debug"]
    );

    let res = run(&schema, "{ recentPosts { id } }").await;
    assert_eq!(res["data"]["recentPosts"].as_array().unwrap().len(), 5);

    let res = run(&schema, "{ recentPosts(count: 50) { id } }").await;
    assert_eq!(res["data"]["recentPosts"].as_array().unwrap().len(), 5);

    let res = run(&schema, "{ recentPosts(count: -1) { id } }").await;
    assert_eq!(res["data"]["recentPosts"].as_array().unwrap().len(), 4);
}

// =============================================================================
// Comments and replies
// =============================================================================

#[tokio::test]
async fn test_comments_count() {
    let schema = bundled_schema();

    let res = run(&schema, "{ latestPost { comments(count: 2) { id } } }").await;
    assert_eq!(ids(&res["data"]["latestPost"]["comments"]), vec!["c1", "c2"]);

    let res = run(&schema, "{ latestPost { comments(count: 0) { id } } }").await;
    assert_eq!(
        ids(&res["data"]["latestPost"]["comments"]),
        vec!["c1", "c2", "c3"]
    );

    let res = run(&schema, "{ latestPost { comments { id } } }").await;
    assert_eq!(res["data"]["latestPost"]["comments"].as_array().unwrap().len(), 3);

    let res = run(&schema, "{ latestPost { comments(count: 99) { id } } }").await;
    assert_eq!(res["data"]["latestPost"]["comments"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_every_comment_shares_reply_list() {
    let schema = bundled_schema();
    let res = run(
        &schema,
        "{ latestPost { comments { id replies { id replies { id } } } } }",
    )
    .await;
    for comment in res["data"]["latestPost"]["comments"].as_array().unwrap() {
        assert_eq!(ids(&comment["replies"]), vec!["r1", "r2"]);
        for reply in comment["replies"].as_array().unwrap() {
            assert_eq!(ids(&reply["replies"]), vec!["r1", "r2"]);
        }
    }
}

#[tokio::test]
async fn test_author_resolved_on_posts_and_comments() {
    let schema = bundled_schema();
    let res = run(
        &schema,
        "{ latestPost { author { id } comments(count: 1) { author { name } } } }",
    )
    .await;
    assert_eq!(res["data"]["latestPost"]["author"]["id"], "arunoda");
    assert_eq!(
        res["data"]["latestPost"]["comments"][0]["author"]["name"],
        "Pahan Sarathchandra"
    );
}

#[tokio::test]
async fn test_dangling_author_is_field_error() {
    let fixtures = Fixtures::parse(
        r#"
authors:
  a: { id: a, name: Ann, twitter: ann }
posts:
  - { id: p, title: T, category: other, content: C, date: "2015-01-01T00:00:00Z", author: ghost }
"#,
    )
    .unwrap();
    let schema = build_schema(Arc::new(BlogRepository::new(fixtures)));
    let res = run(&schema, r#"{ post(id: "p") { title author { name } } }"#).await;

    assert_eq!(res["data"]["post"]["title"], "T");
    assert_eq!(res["data"]["post"]["author"], Value::Null);
    assert_eq!(error_codes(&res), vec!["LOOKUP_FAULT"]);
    assert_eq!(res["errors"][0]["path"], json!(["post", "author"]));
}

#[tokio::test]
async fn test_bad_date_is_field_error() {
    let fixtures = Fixtures::parse(
        r#"
authors:
  a: { id: a, name: Ann, twitter: ann }
posts:
  - { id: p, title: T, content: C, date: "last tuesday", author: a }
"#,
    )
    .unwrap();
    let schema = build_schema(Arc::new(BlogRepository::new(fixtures)));
    let res = run(&schema, r#"{ post(id: "p") { id timestamp } }"#).await;
    assert_eq!(res["data"]["post"]["id"], "p");
    assert_eq!(res["data"]["post"]["timestamp"], Value::Null);
    assert_eq!(error_codes(&res), vec!["INTERNAL"]);
}

// =============================================================================
// createPost
// =============================================================================

const CREATE_FRESH: &str = r#"mutation {
    createPost(id: "fresh", title: "Fresh", content: "Body", author: "indi", category: PRODUCT) {
        ok
        post { id title category summary timestamp comments { id } author { id } }
    }
}"#;

#[tokio::test]
async fn test_create_post_duplicate_id() {
    let schema = bundled_schema();
    let res = run(
        &schema,
        r#"mutation { createPost(id: "kadira-debug", title: "T", content: "C", author: "arunoda") { ok } }"#,
    )
    .await;
    assert_eq!(res["data"]["createPost"], Value::Null);
    assert_eq!(error_codes(&res), vec!["VALIDATION_FAULT"]);
    assert_eq!(res["errors"][0]["message"], "Post already exists: kadira-debug");
}

#[tokio::test]
async fn test_create_post_unknown_author() {
    let schema = bundled_schema();
    let res = run(
        &schema,
        r#"mutation { createPost(id: "new", title: "T", content: "C", author: "nobody") { ok } }"#,
    )
    .await;
    assert_eq!(res["data"]["createPost"], Value::Null);
    assert_eq!(error_codes(&res), vec!["VALIDATION_FAULT"]);
    assert_eq!(res["errors"][0]["message"], "No such author: nobody");
}

#[tokio::test]
async fn test_create_post_requires_inputs() {
    let schema = bundled_schema();
    let res = run(
        &schema,
        r#"mutation { createPost(id: "new", title: "T", author: "arunoda") { ok } }"#,
    )
    .await;
    assert!(res["errors"].as_array().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_create_post_returns_new_post() {
    let schema = bundled_schema();
    let before = chrono::Utc::now().timestamp_millis() as f64;
    let res = run(&schema, CREATE_FRESH).await;
    let after = chrono::Utc::now().timestamp_millis() as f64;

    assert!(res.get("errors").is_none(), "{res}");
    let payload = &res["data"]["createPost"];
    assert_eq!(payload["ok"], true);
    assert_eq!(payload["post"]["id"], "fresh");
    assert_eq!(payload["post"]["category"], "PRODUCT");
    assert_eq!(payload["post"]["summary"], Value::Null);
    assert_eq!(payload["post"]["comments"], json!([]));
    assert_eq!(payload["post"]["author"]["id"], "indi");

    let timestamp = payload["post"]["timestamp"].as_f64().unwrap();
    assert!(timestamp >= before && timestamp <= after);
}

/// Created posts are answered but not stored unless persistence is
/// switched on in the config.
#[tokio::test]
async fn test_created_post_not_visible_by_default() {
    let schema = bundled_schema();
    run(&schema, CREATE_FRESH).await;

    let res = run(&schema, r#"{ post(id: "fresh") { id } }"#).await;
    assert_eq!(res["data"]["post"], Value::Null);

    // Not stored, so creating it again succeeds.
    let res = run(&schema, CREATE_FRESH).await;
    assert_eq!(res["data"]["createPost"]["ok"], true);
}

#[tokio::test]
async fn test_created_post_visible_with_persistence() {
    let schema = persisting_schema();
    run(&schema, CREATE_FRESH).await;

    let res = run(&schema, r#"{ post(id: "fresh") { id title } }"#).await;
    assert_eq!(res["data"]["post"]["title"], "Fresh");

    let res = run(&schema, "{ posts(category: PRODUCT) { id } }").await;
    assert_eq!(ids(&res["data"]["posts"]), vec!["kadira-debug", "fresh"]);

    let res = run(&schema, CREATE_FRESH).await;
    assert_eq!(error_codes(&res), vec!["VALIDATION_FAULT"]);
}

// =============================================================================
// Type graph
// =============================================================================

#[tokio::test]
async fn test_has_author_interface() {
    let schema = bundled_schema();
    let res = run(
        &schema,
        r#"{ __type(name: "HasAuthor") { kind fields { name } possibleTypes { name } } }"#,
    )
    .await;
    let ty = &res["data"]["__type"];
    assert_eq!(ty["kind"], "INTERFACE");
    assert_eq!(ty["fields"], json!([{ "name": "author" }]));
    let mut possible: Vec<&str> = ty["possibleTypes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    possible.sort_unstable();
    assert_eq!(possible, vec!["Comment", "Post"]);
}

#[tokio::test]
async fn test_author_field_through_interface_fragment() {
    let schema = bundled_schema();
    let res = run(
        &schema,
        "{ latestPost { ... on HasAuthor { author { id } } } }",
    )
    .await;
    assert!(res.get("errors").is_none(), "{res}");
    assert_eq!(res["data"]["latestPost"]["author"]["id"], "arunoda");
}

#[tokio::test]
async fn test_category_enum_values() {
    let schema = bundled_schema();
    let res = run(&schema, r#"{ __type(name: "Category") { enumValues { name } } }"#).await;
    let names: Vec<&str> = res["data"]["__type"]["enumValues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["METEOR", "PRODUCT", "USER_STORY", "OTHER"]);
}

#[tokio::test]
async fn test_unknown_category_rejected() {
    let schema = bundled_schema();
    let res = run(&schema, "{ posts(category: NEWS) { id } }").await;
    assert!(res["errors"].as_array().is_some_and(|e| !e.is_empty()));
}

#[test]
fn test_sdl_declares_roots() {
    let sdl = bundled_schema().sdl();
    assert!(sdl.contains("interface HasAuthor"));
    assert!(sdl.contains("type Comment implements HasAuthor"));
    assert!(sdl.contains("type Post implements HasAuthor"));
    assert!(sdl.contains("latestPost: Post"));
    assert!(sdl.contains("createPost("));
}
