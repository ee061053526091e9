use crate::helpers::TestApp;
use std::time::Duration;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn login_success() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "message": "Login successful",
        "user": {"username": "alice"}
    }))
}

#[tokio::test]
async fn the_root_page_is_an_empty_login_form() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let response = app.get_login_page().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"action="/login""#));
    assert!(html_page.contains(r#"name="username" value="""#));
}

#[tokio::test]
async fn login_forwards_the_credentials_to_the_auth_api() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "username": "alice",
            "password": "wonderland"
        })))
        .respond_with(login_success())
        .expect(1)
        .mount(&app.api_server)
        .await;

    // Act
    let response = app
        .post_login(&serde_json::json!({
            "username": "alice",
            "password": "wonderland"
        }))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"value="alice""#));
    assert!(!html_page.contains("wonderland"));
    let received = app.received_logins(1).await;
    assert_eq!(
        received,
        vec![serde_json::json!({"username": "alice", "password": "wonderland"})]
    );
}

#[tokio::test]
async fn empty_credentials_are_forwarded_without_validation() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&app.api_server)
        .await;

    // Act
    let response = app
        .post_login(&serde_json::json!({"username": "", "password": ""}))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let received = app.received_logins(1).await;
    assert_eq!(
        received,
        vec![serde_json::json!({"username": "", "password": ""})]
    );
}

#[tokio::test]
async fn a_rejected_login_leaves_the_form_unchanged() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"message": "Unauthorized"})),
        )
        .expect(1)
        .mount(&app.api_server)
        .await;

    // Act
    let response = app
        .post_login(&serde_json::json!({"username": "alice", "password": "wrong"}))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"value="alice""#));
    assert!(!html_page.contains("Unauthorized"));
    app.received_logins(1).await;
}

#[tokio::test]
async fn the_page_is_returned_before_the_auth_api_answers() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(any())
        .respond_with(login_success().set_delay(Duration::from_secs(10)))
        .mount(&app.api_server)
        .await;

    // Act
    let outcome = tokio::time::timeout(
        Duration::from_secs(1),
        app.post_login(&serde_json::json!({"username": "alice", "password": "wonderland"})),
    )
    .await;

    // Assert
    let response = outcome.expect("The login page waited for the auth api");
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn repeated_submissions_are_each_forwarded() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(login_success())
        .expect(2)
        .mount(&app.api_server)
        .await;
    let body = serde_json::json!({"username": "alice", "password": "wonderland"});

    // Act
    let (first, second) = tokio::join!(app.post_login(&body), app.post_login(&body));

    // Assert
    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
    assert_eq!(app.received_logins(2).await.len(), 2);
}

#[tokio::test]
async fn login_returns_a_400_when_a_field_is_missing() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(any())
        .respond_with(login_success())
        .expect(0)
        .mount(&app.api_server)
        .await;
    let test_cases = vec![
        (serde_json::json!({"username": "alice"}), "missing the password"),
        (serde_json::json!({"password": "wonderland"}), "missing the username"),
    ];

    for (invalid_body, error_msg) in test_cases {
        // Act
        let response = app.post_login(&invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The shell did not fail with 400 Bad Request when the payload was {}",
            error_msg
        );
    }
}
