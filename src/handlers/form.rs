use axum::{
    async_trait,
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::header,
    Form,
};
use std::convert::Infallible;

use crate::validation::{items_from_form, ITEMS_FIELD};

/// Raw `items` values from a urlencoded or multipart form body, in
/// submission order. A body that cannot be decoded yields no items.
#[derive(Debug, Default)]
pub struct OrderItems(pub Vec<String>);

#[async_trait]
impl<S> FromRequest<S> for OrderItems
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let items = match Multipart::from_request(req, state).await {
                Ok(multipart) => multipart_items(multipart).await.unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Unreadable multipart body");
                    Vec::new()
                }),
                Err(rejection) => {
                    tracing::warn!(error = %rejection, "Rejected multipart body");
                    Vec::new()
                }
            };
            return Ok(Self(items));
        }

        let fields = match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(fields)) => fields,
            Err(_) => Vec::new(),
        };
        Ok(Self(items_from_form(&fields)))
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

async fn multipart_items(mut multipart: Multipart) -> Result<Vec<String>, MultipartError> {
    let mut items = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(ITEMS_FIELD) {
            items.push(field.text().await?);
        }
    }

    Ok(items)
}
