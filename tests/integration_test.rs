use chrono::{TimeZone, Utc};
use mockito::{Matcher, Server};
use serde_json::json;
use slack_release_notifier::{Notify, Release, Repository, RequestError, SlackNotifier};

fn repository(name: &str, release: &str, prerelease: bool) -> Repository {
    Repository {
        owner: "acme".to_string(),
        name: name.to_string(),
        url: format!("https://github.com/acme/{}", name),
        release: Release {
            name: release.to_string(),
            description: format!("Changes in {}", release),
            url: format!("https://github.com/acme/{}/releases/{}", name, release),
            published_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap(),
            prerelease,
        },
    }
}

#[tokio::test]
async fn test_end_to_end_prerelease_notification() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/services/T000/B000/XXXX")
        .match_header("content-type", Matcher::Missing)
        .match_body(Matcher::Json(json!({
            "attachments": [{
                "fallback": "<https://github.com/acme/gadget|acme/gadget>: <https://github.com/acme/gadget/releases/v2.0.0-rc.1|v2.0.0-rc.1> released",
                "text": "<https://github.com/acme/gadget|acme/gadget>: <https://github.com/acme/gadget/releases/v2.0.0-rc.1|v2.0.0-rc.1> released",
                "pretext": "*acme/gadget* - _v2.0.0-rc.1_",
                "color": "#FFC600",
                "title": "v2.0.0-rc.1",
                "title_link": "https://github.com/acme/gadget/releases/v2.0.0-rc.1",
                "fields": [{"title": "Description", "value": "Changes in v2.0.0-rc.1", "short": false}],
                "footer": " ",
                "footer_icon": "https://assets-cdn.github.com/images/modules/logos_page/GitHub-Mark.png",
                "mrkdwn_in": ["pretext"],
                "ts": 1717245000
            }]
        })))
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let notifier =
        SlackNotifier::new(&format!("{}/services/T000/B000/XXXX", server.url())).unwrap();
    notifier
        .send(&repository("gadget", "v2.0.0-rc.1", true))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_shared_client_concurrent_sends() {
    let mut server = Server::new_async().await;

    let first = server
        .mock("POST", "/hooks/first")
        .match_body(Matcher::PartialJson(json!({
            "attachments": [{"title": "v1.0.0", "color": "#15e415"}]
        })))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("POST", "/hooks/second")
        .match_body(Matcher::PartialJson(json!({
            "attachments": [{"title": "v1.1.0-beta", "color": "#FFC600"}]
        })))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let a = SlackNotifier::with_client(client.clone(), &format!("{}/hooks/first", server.url()))
        .unwrap();
    let b = SlackNotifier::with_client(client, &format!("{}/hooks/second", server.url())).unwrap();

    let first_repo = repository("widget", "v1.0.0", false);
    let second_repo = repository("widget", "v1.1.0-beta", true);
    let (ra, rb) = tokio::join!(a.send(&first_repo), b.send(&second_repo));

    ra.unwrap();
    rb.unwrap();
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_rejected_webhook_surfaces_status_and_body() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/services/T000/B000/gone")
        .with_status(404)
        .with_body("no_service")
        .expect(1)
        .create_async()
        .await;

    let notifier: Box<dyn Notify> = Box::new(
        SlackNotifier::new(&format!("{}/services/T000/B000/gone", server.url())).unwrap(),
    );
    let err = notifier
        .notify(&repository("widget", "v1.0.0", false))
        .await
        .unwrap_err();

    // one attempt only
    mock.assert_async().await;
    let msg = err.to_string();
    assert!(msg.contains("404 Not Found"));
    assert!(msg.contains("no_service"));
    assert!(matches!(
        err.downcast_ref::<RequestError>(),
        Some(RequestError::Status { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_webhook_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let notifier = SlackNotifier::new(&format!("http://{}/hook", addr)).unwrap();
    let err = notifier
        .send(&repository("widget", "v1.0.0", false))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<RequestError>(),
        Some(RequestError::Transport(_))
    ));
}
