
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use test_startup::*;

#[derive(Deserialize, Debug)]
struct Recommendation {
    movie_id: i64,
    runtime: i64,
    genres: Vec<String>,
    poster_url: String,
    vote_average: f64,
}

#[derive(Deserialize, Debug)]
struct FiltersApplied {
    runtime: i64,
    genres: Vec<i64>,
    include_adult: bool,
}

#[derive(Deserialize, Debug)]
struct RecommendResponse {
    recommendations: Vec<Recommendation>,
    total: usize,
    filters_applied: FiltersApplied,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: String,
    message: String,
}

async fn post_recommend(address: &str, body: serde_json::Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/chatbot/recommend", address))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request")
}

fn ids(response: &RecommendResponse) -> Vec<i64> {
    response
        .recommendations
        .iter()
        .map(|movie| movie.movie_id)
        .collect()
}

#[actix_rt::test]
async fn longer_movies_are_excluded() {
    let catalog = catalog_from_json(json!([
        {"movie_id": 1, "title": "A", "original_title": "A", "overview": "", "poster_path": "/a.jpg",
         "runtime": 90, "release_date": "2020-01-01", "genres": [{"id": 1, "name": "SF"}],
         "vote_average": 7.5, "adult": false},
        {"movie_id": 2, "title": "B", "original_title": "B", "overview": "", "poster_path": "/b.jpg",
         "runtime": 200, "release_date": "2020-01-01", "genres": [{"id": 1, "name": "SF"}],
         "vote_average": 9.0, "adult": false}
    ]));
    let app = spawn_app_with_catalog(Arc::new(catalog)).await;

    let response = post_recommend(
        &app.address,
        json!({"runtime": 120, "genres": [1], "include_adult": false}),
    )
    .await;
    assert!(response.status().is_success());

    let body = response.json::<RecommendResponse>().await.unwrap();
    assert_eq!(ids(&body), vec![1]);
    assert_eq!(body.total, 1);
    assert_eq!(body.recommendations[0].genres, vec!["SF"]);
    assert_eq!(
        body.recommendations[0].poster_url,
        format!("{}/a.jpg", app.settings.catalog.image_base_url)
    );
}

#[actix_rt::test]
async fn results_are_ranked_by_vote_average() {
    let app = spawn_app().await;
    let response = post_recommend(&app.address, json!({"runtime": 120})).await;
    assert!(response.status().is_success());

    let body = response.json::<RecommendResponse>().await.unwrap();
    // 3 and 6 tie at 8.0 and keep catalog order; 4 is adult.
    assert_eq!(ids(&body), vec![3, 6, 1, 5]);
    assert_eq!(body.total, 4);
    assert!(body
        .recommendations
        .windows(2)
        .all(|pair| pair[0].vote_average >= pair[1].vote_average));
    assert!(body.recommendations.iter().all(|movie| movie.runtime <= 120));
}

#[actix_rt::test]
async fn adult_movies_only_on_request() {
    let app = spawn_app().await;
    let response = post_recommend(
        &app.address,
        json!({"runtime": 120, "genres": [], "include_adult": true}),
    )
    .await;

    let body = response.json::<RecommendResponse>().await.unwrap();
    assert_eq!(ids(&body), vec![4, 3, 6, 1, 5]);
    assert!(body.filters_applied.include_adult);
}

#[actix_rt::test]
async fn genre_filter_matches_any_requested_genre() {
    let app = spawn_app().await;

    let response = post_recommend(&app.address, json!({"runtime": 180, "genres": [18]})).await;
    let body = response.json::<RecommendResponse>().await.unwrap();
    assert_eq!(ids(&body), vec![2, 1]);

    let response = post_recommend(
        &app.address,
        json!({"runtime": 180, "genres": [16, 53], "include_adult": true}),
    )
    .await;
    let body = response.json::<RecommendResponse>().await.unwrap();
    assert_eq!(ids(&body), vec![4, 3, 6]);
}

#[actix_rt::test]
async fn filters_are_echoed_back() {
    let app = spawn_app().await;
    let response = post_recommend(
        &app.address,
        json!({"runtime": 150, "genres": [18, 18, 9999], "include_adult": false}),
    )
    .await;
    assert!(response.status().is_success());

    let body = response.json::<RecommendResponse>().await.unwrap();
    assert_eq!(body.filters_applied.runtime, 150);
    assert_eq!(body.filters_applied.genres, vec![18, 18, 9999]);
    assert!(!body.filters_applied.include_adult);
    assert_eq!(ids(&body), vec![1]);
}

#[actix_rt::test]
async fn no_match_is_not_found() {
    let app = spawn_app().await;
    let response = post_recommend(&app.address, json!({"runtime": 30, "genres": []})).await;
    assert_eq!(response.status().as_u16(), 404);

    let error = response.json::<ErrorResponse>().await.unwrap();
    assert_eq!(error.error, "NO_RECOMMENDATIONS");
    assert!(!error.message.is_empty());
}

#[actix_rt::test]
async fn out_of_range_runtime_is_rejected() {
    let app = spawn_app().await;
    for runtime in [29, 181, -5] {
        let response = post_recommend(&app.address, json!({"runtime": runtime})).await;
        assert_eq!(response.status().as_u16(), 422, "runtime {}", runtime);
        let error = response.json::<ErrorResponse>().await.unwrap();
        assert_eq!(error.error, "VALIDATION_ERROR");
    }
}

#[actix_rt::test]
async fn too_many_genres_are_rejected() {
    let app = spawn_app().await;
    let response = post_recommend(
        &app.address,
        json!({"runtime": 120, "genres": [1, 2, 3, 4]}),
    )
    .await;
    assert_eq!(response.status().as_u16(), 422);

    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["genres"].is_array());
}

#[actix_rt::test]
async fn malformed_body_is_rejected() {
    let app = spawn_app().await;
    let cases = [
        json!({}),
        json!({"runtime": "two hours"}),
        json!({"runtime": 90, "genres": "SF"}),
    ];
    for body in cases {
        let response = post_recommend(&app.address, body.clone()).await;
        assert_eq!(response.status().as_u16(), 422, "body {}", body);
    }

    let response = reqwest::Client::new()
        .post(format!("{}/chatbot/recommend", app.address))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 422);
}
