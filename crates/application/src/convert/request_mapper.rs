//! Dump request to Insomnia request mapping.

use porter_domain::{
    Authentication, DumpAuth, DumpKeyValue, DumpQueryParam, DumpRequest, Pair, RequestBody,
    RequestResource, ResourceKind,
};

use super::ids::IdGenerator;
use super::warning::ConversionWarning;
use crate::ports::RandomSource;

/// Fresh pair ids for one request's headers, parameters and form fields.
pub struct PairFactory<'g, R> {
    ids: &'g mut IdGenerator<R>,
    id_length: usize,
}

impl<'g, R: RandomSource> PairFactory<'g, R> {
    /// Creates a factory producing ids with `id_length` random characters.
    pub fn new(ids: &'g mut IdGenerator<R>, id_length: usize) -> Self {
        Self { ids, id_length }
    }

    fn pair(&mut self, name: &str, value: &str, disabled: Option<bool>) -> Pair {
        Pair {
            id: self.ids.generate(ResourceKind::Pair, self.id_length),
            name: name.to_string(),
            value: value.to_string(),
            disabled,
        }
    }
}

/// Map headers, `None` when the source has none
pub fn map_headers<R: RandomSource>(
    headers: &[DumpKeyValue],
    pairs: &mut PairFactory<'_, R>,
) -> Option<Vec<Pair>> {
    if headers.is_empty() {
        return None;
    }
    Some(headers.iter().map(|h| pairs.pair(&h.key, &h.value, None)).collect())
}

/// Map query parameters. A parameter is disabled when it was not enabled.
pub fn map_query_params<R: RandomSource>(
    params: &[DumpQueryParam],
    pairs: &mut PairFactory<'_, R>,
) -> Option<Vec<Pair>> {
    if params.is_empty() {
        return None;
    }
    Some(
        params
            .iter()
            .map(|p| pairs.pair(&p.key, &p.value, Some(!p.enabled)))
            .collect(),
    )
}

/// Map authentication. Only the first bearer entry is carried over.
pub fn map_auth(auth: Option<&DumpAuth>) -> Option<Authentication> {
    auth.map(|a| Authentication {
        auth_type: a.auth_type.clone(),
        token: if a.auth_type == "bearer" {
            a.first_bearer_value().map(str::to_string)
        } else {
            None
        },
    })
}

/// Map the body.
///
/// `urlencoded` becomes a form body, `raw` is copied verbatim as JSON text
/// without validation. Any other mode is skipped with an info warning.
pub fn map_body<R: RandomSource>(
    request: &DumpRequest,
    pairs: &mut PairFactory<'_, R>,
    path: &str,
) -> (Option<RequestBody>, Vec<ConversionWarning>) {
    let mut warnings = Vec::new();

    let body = match request.data_mode.as_deref().filter(|m| !m.is_empty()) {
        None => None,
        Some("urlencoded") if request.data.is_empty() => None,
        Some("urlencoded") => Some(RequestBody {
            mime_type: mime::APPLICATION_WWW_FORM_URLENCODED.to_string(),
            text: None,
            params: Some(
                request
                    .data
                    .iter()
                    .map(|p| pairs.pair(&p.key, &p.value, None))
                    .collect(),
            ),
        }),
        Some("raw") => Some(RequestBody {
            mime_type: mime::APPLICATION_JSON.to_string(),
            text: request.raw_mode_data.clone(),
            params: None,
        }),
        Some(other) => {
            warnings.push(ConversionWarning::info(
                path,
                format!("Body mode '{other}' is not supported and was skipped"),
            ));
            None
        }
    };

    (body, warnings)
}

/// Map one request.
///
/// The parent is the request's folder group, or its collection group when
/// it sits at the collection root.
pub fn map_request<R: RandomSource>(
    request: &DumpRequest,
    ids: &mut IdGenerator<R>,
    pair_id_length: usize,
    path: &str,
) -> (RequestResource, Vec<ConversionWarning>) {
    let mut pairs = PairFactory::new(ids, pair_id_length);

    let headers = map_headers(&request.header_data, &mut pairs);
    let parameters = map_query_params(&request.query_params, &mut pairs);
    let authentication = map_auth(request.auth.as_ref());
    let (body, warnings) = map_body(request, &mut pairs, path);

    let mapped = RequestResource {
        id: ResourceKind::Request.id_for(&request.id),
        parent_id: ResourceKind::RequestGroup.id_for(request.owner_id()),
        name: request.name.clone(),
        description: request.description.clone().unwrap_or_default(),
        url: request.url.clone().unwrap_or_default(),
        method: request.method.clone(),
        headers,
        parameters,
        authentication,
        body,
    };

    (mapped, warnings)
}
