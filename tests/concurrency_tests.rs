//! Concurrent use of the calculator and the router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use futures::future::join_all;
use std::sync::Arc;
use tower::ServiceExt;

use packorder::config::Config;
use packorder::create_router;
use packorder::services::AppState;
use packorder::PackCalculator;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_calculator_across_tasks() {
    let calculator = PackCalculator::default();

    let handles: Vec<_> = (1..=200u64)
        .map(|quantity| {
            tokio::spawn(async move { (quantity, calculator.calculate(quantity)) })
        })
        .collect();

    for result in join_all(handles).await {
        let (quantity, packs) = result.unwrap();
        assert_eq!(packs, calculator.calculate(quantity));
        let shipped: u64 = packs.iter().map(|p| p.pack_size * p.count).sum();
        assert!(shipped >= quantity);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_are_independent() {
    let app = create_router(Arc::new(AppState::new(Config::default())));

    let requests = (1..=50u64).map(|quantity| {
        let app = app.clone();
        async move {
            let request = Request::builder()
                .method("POST")
                .uri("/order")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!("items={}", quantity * 37)))
                .unwrap();
            let response = app.oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            (quantity * 37, status, body)
        }
    });

    for (quantity, status, body) in join_all(requests).await {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Order"]["Items ordered"], quantity);
    }
}
