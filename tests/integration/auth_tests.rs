use bookrags_index::{BookRags, BookRagsError, Credentials, ProductType, SiteConfig};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::mock_config;

fn credentials() -> Credentials {
    Credentials::new("alice", "s3cret")
}

async fn login(server: &MockServer) -> BookRags {
    BookRags::login(mock_config(server), credentials())
        .await
        .expect("Login failed")
}

#[tokio::test]
async fn test_login_sequence_posts_credentials_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("cookie", "layout=desktop"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>home</html>"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/session/"))
        .and(header("cookie", "layout=desktop"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/login/"))
        .and(header("cookie", "layout=desktop"))
        .and(body_string_contains("edEmailOrName=alice"))
        .and(body_string_contains("edPW=s3cret"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    login(&server).await;

    server.verify().await;
}

#[tokio::test]
async fn test_login_does_not_verify_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("bad password"))
        .mount(&server)
        .await;

    assert!(BookRags::login(mock_config(&server), credentials())
        .await
        .is_ok());
}

#[tokio::test]
async fn test_login_transport_error_propagates() {
    // Nothing listens on port 1
    let config = SiteConfig::for_base_url("http://127.0.0.1:1/", "127.0.0.1");

    let result = BookRags::login(config, credentials()).await;
    assert!(matches!(result.unwrap_err(), BookRagsError::Http { .. }));
}

#[tokio::test]
async fn test_is_logged_in_with_account_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/"))
        .and(header("cookie", "layout=desktop"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>My Account</html>"))
        .mount(&server)
        .await;

    let client = login(&server).await;
    assert!(client.is_logged_in().await.unwrap());
}

#[tokio::test]
async fn test_is_logged_in_false_on_empty_redirect() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/login/"))
        .mount(&server)
        .await;

    // Would turn the probe into a non-empty page if the redirect were followed
    Mock::given(method("GET"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<form>login</form>"))
        .mount(&server)
        .await;

    let client = login(&server).await;
    assert!(!client.is_logged_in().await.unwrap());
}

#[tokio::test]
async fn test_logout_hits_logout_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/logout/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = login(&server).await;
    client.logout().await.unwrap();

    server.verify().await;
}

#[tokio::test]
async fn test_resolve_product_keeps_type_and_link() {
    let server = MockServer::start().await;
    let client = login(&server).await;

    let cases = [
        ("studyguide-hamlet/", ProductType::StudyGuide),
        ("research/hamlet/", ProductType::Encyclopedia),
        ("ebooks/1524/", ProductType::Ebook),
        ("biography-william-shakespeare/", ProductType::Biography),
        ("essay-2004/hamlet/", ProductType::Essay),
    ];

    for (suffix, expected) in cases {
        let link = format!("{}/{}", server.uri(), suffix);
        let product = client
            .resolve_product(&link)
            .unwrap_or_else(|| panic!("{} should resolve", link));

        assert_eq!(product.product_type(), expected);
        assert_eq!(product.link(), link);
        assert!(std::ptr::eq(product.session(), client.session()));
    }
}

#[tokio::test]
async fn test_resolve_product_rejects_non_products() {
    let server = MockServer::start().await;
    let client = login(&server).await;

    let lesson_plan = format!("{}/lessonplan/hamlet/", server.uri());
    let lens = format!("{}/lens/hamlet/", server.uri());
    let unknown = format!("{}/about/", server.uri());

    assert!(client.resolve_product(&lesson_plan).is_none());
    assert!(client.resolve_product(&lens).is_none());
    assert!(client.resolve_product(&unknown).is_none());
    assert!(client
        .resolve_product("https://www.example.com/studyguide-hamlet/")
        .is_none());
}

#[tokio::test]
async fn test_search_returns_nothing() {
    let server = MockServer::start().await;
    let client = login(&server).await;

    assert!(client.search("hamlet").is_empty());
}
