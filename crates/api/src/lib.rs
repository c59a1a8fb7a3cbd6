pub mod error;
mod generate;

use http_body_util::Full;
use hyper::{
    body::{Body, Bytes},
    Method, Request, Response,
};

pub const GENERATE_PATH: &str = "/api/generate-docx";

fn reply_with_error(err: &error::Error) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": err.to_string() }).to_string();
    let mut res = Response::new(Full::new(Bytes::from(body)));
    *res.status_mut() = err.status();

    use hyper::header::{HeaderValue, CONTENT_TYPE};
    assert!(res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json")).is_none());
    res
}

/// Routes a single request. Failures are turned into a JSON `{"error": ...}` body with the
/// matching status code.
pub async fn respond<B>(req: Request<B>) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let err = if req.uri().path() != GENERATE_PATH {
        error::Error::NotFound
    } else if req.method() != Method::POST {
        error::Error::MethodNotAllowed
    } else {
        // Rejections past routing are logged where they are detected.
        return generate::try_respond(req.into_body(), &chrono::Local::now())
            .await
            .unwrap_or_else(|err| reply_with_error(&err));
    };

    log::warn!("{} {}: {err}", req.method(), req.uri().path());
    reply_with_error(&err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use hyper::{header, StatusCode};

    fn post(body: &'static str) -> Request<Full<Bytes>> {
        Request::post(GENERATE_PATH).body(Full::new(Bytes::from_static(body.as_bytes()))).unwrap()
    }

    async fn error_of(res: Response<Full<Bytes>>) -> String {
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["error"].as_str().unwrap().to_owned()
    }

    #[tokio::test]
    async fn exports_flat_questions() {
        let res = respond(post(r#"{"questions":[{"id":"q1","type":"mcq","question":"2+2=?","options":["3","4","5"],"marks":2}]}"#)).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_TYPE], docx::MEDIA_TYPE);

        let disposition = res.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_owned();
        assert!(disposition.starts_with("attachment; filename=\"QuestionPaper_"));
        assert!(disposition.ends_with(".docx\""));

        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn exports_sections() {
        let res = respond(post(
            r#"{"sections":[{"id":"s1","title":"Part I","instructions":"","questions":[{"id":"q","type":"short","question":"Why?"}]}]}"#,
        ))
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn empty_question_list_is_rejected() {
        let res = respond(post(r#"{"questions":[]}"#)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_of(res).await, "No questions found");

        let res = respond(post(r#"{"sections":[{"id":"s1","title":"Empty"}]}"#)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_of(res).await, "No questions found");
    }

    #[tokio::test]
    async fn malformed_bodies_are_rejected() {
        for body in ["not json", "{}", r#"{"questions":[{"id":"x","type":"essay","question":"?"}]}"#] {
            let res = respond(post(body)).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
            assert_eq!(error_of(res).await, "Invalid request body");
        }
    }

    #[tokio::test]
    async fn non_object_bodies_are_rejected() {
        for body in ["[]", r#"[null,[{"id":"q","type":"short","question":"Why?"}]]"#, "null", "42"] {
            let res = respond(post(body)).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
            assert_eq!(error_of(res).await, "Invalid request body");
        }
    }

    #[tokio::test]
    async fn oversized_bodies_are_rejected() {
        let huge = "x".repeat(2 << 20);
        let req = Request::post(GENERATE_PATH).body(Full::new(Bytes::from(huge))).unwrap();
        let res = respond(req).await;
        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn unknown_routes_are_rejected() {
        let req = Request::post("/").body(Full::new(Bytes::new())).unwrap();
        assert_eq!(respond(req).await.status(), StatusCode::NOT_FOUND);

        let req = Request::get(GENERATE_PATH).body(Full::new(Bytes::new())).unwrap();
        assert_eq!(respond(req).await.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn attachment_name_follows_the_clock() {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 8, 30, 0).unwrap();
        let res = generate::try_respond(Full::new(Bytes::from_static(br#"{"questions":[{"id":"q","type":"long","question":"Why?"}]}"#)), &now)
            .await
            .unwrap();
        assert_eq!(res.headers()[header::CONTENT_DISPOSITION], "attachment; filename=\"QuestionPaper_1792053000000.docx\"");
    }
}
