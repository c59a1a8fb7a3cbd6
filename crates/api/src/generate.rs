use crate::error::{Error, Result};
use chrono::{DateTime, TimeZone};
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::{
    body::{Body, Bytes},
    Response,
};
use model::Payload;

/// Upper bound on the size of an export request.
const MAX_BODY: usize = 1 << 20;

/// Parses an export request and replies with the assembled document as an attachment.
pub async fn try_respond<B, Tz>(body: B, now: &DateTime<Tz>) -> Result<Response<Full<Bytes>>>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    Tz: TimeZone,
{
    let payload = Limited::new(body, MAX_BODY)
        .collect()
        .await
        .map_err(|err| {
            log::warn!("cannot read export request: {err}");
            if err.is::<LengthLimitError>() {
                Error::TooLarge
            } else {
                Error::InvalidBody
            }
        })?
        .to_bytes();

    let payload: Payload = serde_json::from_slice(&payload).map_err(|err| {
        log::warn!("rejected malformed export request: {err}");
        Error::InvalidBody
    })?;
    let questions = payload.into_questions().ok_or_else(|| {
        log::warn!("rejected export request without `sections` or `questions`");
        Error::InvalidBody
    })?;

    let document = docx::assemble(&questions, now).map_err(|err| {
        // Assembly failures are already logged by the renderer.
        if err == docx::error::Error::NoQuestions {
            log::warn!("rejected export request: {err}");
        }
        Error::from(err)
    })?;
    let disposition = format!("attachment; filename=\"{}\"", document.filename);

    use hyper::header::{HeaderValue, CONTENT_DISPOSITION, CONTENT_TYPE};
    let disposition = HeaderValue::from_str(&disposition).map_err(|err| {
        log::error!("cannot encode attachment header: {err}");
        Error::Assembly
    })?;
    let mut res = Response::new(Full::new(Bytes::from(document.bytes)));
    let headers = res.headers_mut();
    assert!(headers.insert(CONTENT_TYPE, HeaderValue::from_static(docx::MEDIA_TYPE)).is_none());
    assert!(headers.insert(CONTENT_DISPOSITION, disposition).is_none());
    Ok(res)
}
