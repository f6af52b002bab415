use bookrags_index::{BookRags, BookRagsError, Credentials, Lens, ProductType, SiteConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::mock_config;

async fn login(server: &MockServer) -> BookRags {
    BookRags::login(mock_config(server), Credentials::new("alice", "s3cret"))
        .await
        .expect("Login failed")
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .and(header("cookie", "layout=desktop"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn links(lens_products: Vec<bookrags_index::Product<'_>>) -> Vec<String> {
    lens_products
        .iter()
        .map(|p| p.link().to_string())
        .collect()
}

#[tokio::test]
async fn test_lens_link_used_directly() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/lens/hamlet/",
        "<title>Hamlet</title>".to_string(),
    )
    .await;

    let client = login(&server).await;
    let link = format!("{}/lens/hamlet/", server.uri());
    let lens = client
        .resolve_study_plan(&link)
        .await
        .unwrap()
        .expect("lens link should resolve");

    assert_eq!(lens.link(), link);
    assert_eq!(lens.title().unwrap(), "Hamlet");

    server.verify().await;
}

#[tokio::test]
async fn test_study_plan_through_upsell_block() {
    let server = MockServer::start().await;
    let lens_link = format!("{}/lens/hamlet/", server.uri());

    mount_page(
        &server,
        "/studyguide-hamlet/",
        format!(
            "<html><div id='contentSPUpsellBlock'>\n<a href='{}'>Get the study pack</a>\n</div></html>",
            lens_link
        ),
    )
    .await;
    mount_page(
        &server,
        "/lens/hamlet/",
        format!(
            "<title>Hamlet Study Pack</title>\n<!-- BEGIN STUDY GUIDE BLOCK --><a href='{}/studyguide-hamlet/'>SG</a><!-- END STUDY GUIDE BLOCK -->",
            server.uri()
        ),
    )
    .await;

    let client = login(&server).await;
    let lens = client
        .resolve_study_plan(&format!("{}/studyguide-hamlet/", server.uri()))
        .await
        .unwrap()
        .expect("study guide should lead to a lens");

    assert_eq!(lens.link(), lens_link);
    assert_eq!(lens.title().unwrap(), "Hamlet Study Pack");
    assert_eq!(lens.study_guides().len(), 1);

    server.verify().await;
}

#[tokio::test]
async fn test_missing_upsell_block_is_markup_error() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/ebooks/1524/",
        "<html><body>No study pack here</body></html>".to_string(),
    )
    .await;

    let client = login(&server).await;
    let result = client
        .resolve_study_plan(&format!("{}/ebooks/1524/", server.uri()))
        .await;

    assert!(matches!(result.unwrap_err(), BookRagsError::Markup { .. }));
}

#[tokio::test]
async fn test_unknown_link_has_no_study_plan() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/about/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = login(&server).await;
    let lens = client
        .resolve_study_plan(&format!("{}/about/", server.uri()))
        .await
        .unwrap();

    assert!(lens.is_none());
    server.verify().await;
}

#[tokio::test]
async fn test_lesson_plan_link_leads_to_study_plan() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/lessonplan/hamlet/",
        "<div id='contentSPUpsellBlock'><a href='/lens/hamlet/'>pack</a></div>".to_string(),
    )
    .await;

    let client = login(&server).await;
    let result = client
        .resolve_study_plan(&format!("{}/lessonplan/hamlet/", server.uri()))
        .await;

    // The upsell link is relative, so fetching the lens fails at the transport layer
    assert!(matches!(result.unwrap_err(), BookRagsError::Http { .. }));
}

#[tokio::test]
async fn test_fetched_lens_categories() {
    let server = MockServer::start().await;
    let page = r#"<html><head><title>Macbeth</title></head><body>
<!-- BEGIN STUDY GUIDE BLOCK -->href='A' href='B'<!-- END STUDY GUIDE BLOCK -->
<!-- BEGIN ENCYCLOPEDIA BLOCK -->href='X' href='X' href='Y'<!-- END ENCYCLOPEDIA BLOCK -->
<!-- BEGIN EBOOKS BLOCK --><a href='E1'>1</a><a href='E2'>2</a><!-- #topicEBooksBlock -->
<!-- BEGIN ESSAYS BLOCK --><a href='S1'>essay</a><!-- END ESSAYS BLOCK -->
<!-- BEGIN LESSON PLAN CONTENTS BLOCK --><a href='L1'>1</a><a href='L2'>2</a><!-- END LESSON PLAN CONTENTS BLOCK -->
</body></html>"#;
    mount_page(&server, "/lens/macbeth/", page.to_string()).await;

    let client = login(&server).await;
    let lens = Lens::fetch(client.session(), format!("{}/lens/macbeth/", server.uri()))
        .await
        .unwrap();

    assert_eq!(links(lens.study_guides()), vec!["A"]);
    assert_eq!(links(lens.encyclopedias()), vec!["X", "Y"]);
    assert_eq!(links(lens.ebooks()), vec!["E1", "E2"]);
    assert!(lens.biographies().is_empty());
    assert_eq!(links(lens.essays()), vec!["S1"]);
    assert_eq!(links(lens.lesson_plans()), vec!["L1"]);
    assert!(lens.notes().is_empty());

    let pack = lens.study_pack();
    let types: Vec<ProductType> = pack.iter().map(|p| p.product_type()).collect();
    assert_eq!(
        types,
        vec![
            ProductType::StudyGuide,
            ProductType::Encyclopedia,
            ProductType::Encyclopedia,
            ProductType::Ebook,
            ProductType::Ebook,
            ProductType::Essay,
        ]
    );

    // Accessors re-scan the snapshot; the page is fetched only once
    assert_eq!(lens.study_pack().len(), 6);
    server.verify().await;
}

#[tokio::test]
async fn test_study_pack_with_guide_and_encyclopedia() {
    let server = MockServer::start().await;
    let page = "<!-- BEGIN STUDY GUIDE BLOCK -->href='SG'<!-- END STUDY GUIDE BLOCK -->\
<!-- BEGIN ENCYCLOPEDIA BLOCK -->href='EN'<!-- END ENCYCLOPEDIA BLOCK -->";
    mount_page(&server, "/lens/othello/", page.to_string()).await;

    let client = login(&server).await;
    let lens = Lens::fetch(client.session(), format!("{}/lens/othello/", server.uri()))
        .await
        .unwrap();

    assert_eq!(links(lens.study_pack()), vec!["SG", "EN"]);
}

#[tokio::test]
async fn test_product_fetch_title() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/studyguide-hamlet/",
        "<html><head><title>Hamlet Summary & Study Guide</title></head></html>".to_string(),
    )
    .await;

    let client = login(&server).await;
    let product = client
        .resolve_product(&format!("{}/studyguide-hamlet/", server.uri()))
        .unwrap();

    assert_eq!(
        product.fetch_title().await.unwrap(),
        "Hamlet Summary & Study Guide"
    );
}

#[tokio::test]
async fn test_layout_cookie_sent_across_site_hosts() {
    let server = MockServer::start().await;
    let port = url::Url::parse(&server.uri())
        .expect("Failed to parse mock server URL")
        .port()
        .expect("Mock server URL has no port");

    let config = SiteConfig::for_base_url(&format!("http://localhost:{}/", port), "*.localhost");
    let client = BookRags::login(config, Credentials::new("alice", "s3cret"))
        .await
        .expect("Login failed");

    mount_page(&server, "/lens/hamlet/", "<title>Hamlet</title>".to_string()).await;
    let lens = client
        .resolve_study_plan(&format!("http://localhost:{}/lens/hamlet/", port))
        .await
        .unwrap()
        .expect("lens link should resolve");
    assert_eq!(lens.title().unwrap(), "Hamlet");

    for other in [
        format!("http://study.localhost:{}/studyguide-hamlet/", port),
        format!("http://a.b.localhost:{}/ebooks/1/", port),
    ] {
        let url = url::Url::parse(&other).unwrap();
        assert_eq!(
            client.session().cookie_header(&url).as_deref(),
            Some("layout=desktop"),
            "{}",
            other
        );
    }

    server.verify().await;
}
