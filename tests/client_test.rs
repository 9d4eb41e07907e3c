use mockito::{Matcher, Mock, Server, ServerGuard};
use reqwest::StatusCode;
use serde_json::json;

use moodmix::error::ApiError;
use moodmix::spotify::SpotifyClient;
use moodmix::types::{Credentials, Endpoints, Recommendations, RecommendedSongsQuery};

// Helper function to point a client at the mock server
fn create_test_client(server: &ServerGuard) -> SpotifyClient {
    SpotifyClient::with_endpoints(
        Credentials::new("id", "secret"),
        Endpoints {
            auth_url: server.url(),
            api_url: server.url(),
        },
    )
}

// Helper function to serve a valid client-credentials token
async fn mock_token(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("POST", "/api/token")
        .match_header("authorization", "Basic aWQ6c2VjcmV0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"server-token","token_type":"Bearer","expires_in":3600}"#)
        .expect(hits)
        .create_async()
        .await
}

#[tokio::test]
async fn test_fresh_client_authenticates_once() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 1).await;
    let album = server
        .mock("GET", "/v1/albums/a1")
        .match_header("authorization", "Bearer server-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"a1","name":"Discovery"}"#)
        .expect(2)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let first = client.get_album("a1").await.unwrap();
    let second = client.get_album("a1").await.unwrap();

    assert_eq!(first["name"], "Discovery");
    assert_eq!(first, second);

    token.assert_async().await;
    album.assert_async().await;
}

#[tokio::test]
async fn test_get_resource_not_found_returns_empty_object() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("GET", "/v1/albums/missing")
        .with_status(404)
        .with_body(r#"{"error":{"status":404,"message":"Not found"}}"#)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let value = client.get_resource("missing", "albums", "v1").await.unwrap();

    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn test_get_resource_builds_versioned_path() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    let shows = server
        .mock("GET", "/v2/shows/s1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"s1"}"#)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let value = client.get_resource("s1", "shows", "v2").await.unwrap();

    assert_eq!(value["id"], "s1");
    shows.assert_async().await;
}

#[tokio::test]
async fn test_artist_and_track_specializations() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("GET", "/v1/artists/ar1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"ar1","type":"artist"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/v1/tracks/t1")
        .with_status(500)
        .create_async()
        .await;

    let mut client = create_test_client(&server);

    assert_eq!(client.get_artist("ar1").await.unwrap()["type"], "artist");
    // server errors are swallowed as well
    assert_eq!(client.get_track("t1").await.unwrap(), json!({}));
}

#[tokio::test]
async fn test_user_playlists_and_genre_seeds() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("GET", "/v1/users/wizzler/playlists")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items":[{"id":"p1"}],"total":1}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/v1/recommendations/available-genre-seeds")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"genres":["folk","techno"]}"#)
        .create_async()
        .await;

    let mut client = create_test_client(&server);

    let playlists = client.get_user_playlists("wizzler").await.unwrap();
    assert_eq!(playlists["items"][0]["id"], "p1");

    let genres = client.get_available_genres().await.unwrap();
    assert_eq!(genres["genres"], json!(["folk", "techno"]));
}

#[tokio::test]
async fn test_authentication_failure_propagates() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/token")
        .with_status(400)
        .with_body(r#"{"error":"invalid_client"}"#)
        .create_async()
        .await;
    let album = server
        .mock("GET", "/v1/albums/a1")
        .expect(0)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let err = client.get_album("a1").await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Authentication { status } if status == StatusCode::BAD_REQUEST
    ));
    assert!(client.token_manager().state().access_token.is_none());
    album.assert_async().await;
}

#[tokio::test]
async fn test_search_track_returns_first_id() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("GET", "/v1/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "around the world".into()),
            Matcher::UrlEncoded("type".into(), "track".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "tracks": {
                    "items": [
                        {"id": "first-track", "name": "Around the World"},
                        {"id": "second-track", "name": "Around the World (Live)"}
                    ]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let id = client.search_track("around the world").await.unwrap();

    assert_eq!(id, "first-track");
}

#[tokio::test]
async fn test_search_artist_uses_url_segment() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("GET", "/v1/search")
        .match_query(Matcher::UrlEncoded("type".into(), "artist".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "artists": {
                    "items": [
                        {"id": "ignored", "external_urls": {"spotify": "https://open.spotify.com/artist/4tZwfgrHOc3mvqYlEYSvVi"}},
                        {"id": "other", "external_urls": {"spotify": "https://open.spotify.com/artist/other"}}
                    ]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let id = client.search_artist("daft punk").await.unwrap();

    assert_eq!(id, "4tZwfgrHOc3mvqYlEYSvVi");
}

#[tokio::test]
async fn test_search_without_results() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("GET", "/v1/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"tracks":{"items":[]}}"#)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let err = client.search_track("nothing like this").await.unwrap_err();

    assert!(matches!(err, ApiError::EmptyResult(q) if q == "nothing like this"));
}

#[tokio::test]
async fn test_search_with_unexpected_shape() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("GET", "/v1/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"albums":{"items":[]}}"#)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let err = client.search_artist("daft punk").await.unwrap_err();

    assert!(matches!(err, ApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_recommend_track_rejected_returns_status() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("GET", "/v1/recommendations")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let result = client
        .recommend_track(&[], &["folk".to_string()], &[])
        .await
        .unwrap();

    assert_eq!(result, Recommendations::Rejected(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_recommend_track_sends_seeds() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    let recs = server
        .mock("GET", "/v1/recommendations")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("seed_artists".into(), "ar1,ar2".into()),
            Matcher::UrlEncoded("seed_genres".into(), "folk,country".into()),
            Matcher::UrlEncoded("seed_tracks".into(), "t1".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"tracks":[{"id":"r1"}]}"#)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let result = client
        .recommend_track(
            &["ar1".to_string(), "ar2".to_string()],
            &["folk".to_string(), "country".to_string()],
            &["t1".to_string()],
        )
        .await
        .unwrap();

    assert_eq!(
        result,
        Recommendations::Found(json!({"tracks": [{"id": "r1"}]}))
    );
    recs.assert_async().await;
}

#[tokio::test]
async fn test_recommended_songs_with_caller_token() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 0).await;
    server
        .mock("GET", "/v1/recommendations")
        .match_header("authorization", "Bearer user-token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "5".into()),
            Matcher::UrlEncoded("max_instrumentalness".into(), "0.3".into()),
            Matcher::UrlEncoded("seed_artists".into(), "ar1,ar2".into()),
            Matcher::UrlEncoded("seed_genres".into(), "".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "tracks": [
                    {
                        "name": "One More Time",
                        "artists": [{"name": "Daft Punk"}],
                        "external_urls": {"spotify": "https://open.spotify.com/track/0DiWol3AO6WpXZgp0goxAV"}
                    },
                    {
                        "name": "Get Lucky",
                        "artists": [{"name": "Daft Punk"}, {"name": "Pharrell Williams"}],
                        "external_urls": {"spotify": "https://open.spotify.com/track/69kOkLUCkxIZYexIgSG8rq"}
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let query = RecommendedSongsQuery {
        limit: 5,
        seed_artists: "ar1,ar2".to_string(),
        max_instrumentalness: 0.3,
        ..Default::default()
    };

    let ids = client
        .get_recommended_songs(&query, Some("user-token"))
        .await
        .unwrap();

    assert_eq!(ids, vec!["0DiWol3AO6WpXZgp0goxAV", "69kOkLUCkxIZYexIgSG8rq"]);

    // the caller token is not kept on the client
    assert!(client.token_manager().state().access_token.is_none());
    token.assert_async().await;
}

#[tokio::test]
async fn test_recommended_songs_without_tracks_key() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("GET", "/v1/recommendations")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"seeds":[]}"#)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let err = client
        .get_recommended_songs(&RecommendedSongsQuery::default(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_recommended_songs_rejected_is_empty() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("GET", "/v1/recommendations")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let ids = client
        .get_recommended_songs(&RecommendedSongsQuery::default(), None)
        .await
        .unwrap();

    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_create_playlist_sends_json_body() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 0).await;
    let create = server
        .mock("POST", "/v1/users/wizzler/playlists")
        .match_header("authorization", "Bearer user-token")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "Morning Walk",
            "description": "folk, country, techno",
            "public": true
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"new-playlist","name":"Morning Walk"}"#)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let playlist = client
        .create_playlist(
            "wizzler",
            "Morning Walk",
            "folk, country, techno",
            Some("user-token"),
        )
        .await
        .unwrap();

    assert_eq!(playlist["id"], "new-playlist");
    create.assert_async().await;
}

#[tokio::test]
async fn test_create_playlist_forbidden() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("POST", "/v1/users/wizzler/playlists")
        .with_status(403)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let err = client
        .create_playlist("wizzler", "Nope", "", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Status(s) if s == StatusCode::FORBIDDEN));
}

#[tokio::test]
async fn test_get_user_profile() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("GET", "/v1/me")
        .match_header("authorization", "Bearer server-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"wizzler","display_name":"Wizzler"}"#)
        .create_async()
        .await;

    let mut client = create_test_client(&server);
    let profile = client.get_user_profile().await.unwrap();

    assert_eq!(profile["display_name"], "Wizzler");
}

#[tokio::test]
async fn test_resource_with_invalid_json_body() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, 1).await;
    server
        .mock("GET", "/v1/albums/broken")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>gateway hiccup</html>")
        .create_async()
        .await;
    server
        .mock("POST", "/v1/users/wizzler/playlists")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create_async()
        .await;

    let mut client = create_test_client(&server);

    let err = client.get_album("broken").await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));

    let err = client
        .create_playlist("wizzler", "Broken", "", Some("user-token"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));
}
