use crate::api::api_url;
use crate::api::utils::{credentialed_get, fetch_json};
use log::{debug, warn};
use shared::{contests_from_wire, Contest, ContestDto, ContestListResponse};

/// Upper bound on listing pages followed in one load
const MAX_PAGES: usize = 20;

pub fn contests_path() -> String {
    "/api/contests/contests/".to_string()
}

pub fn contest_path(contest_id: i64) -> String {
    format!("/api/contests/contests/{}/", contest_id)
}

/// Maps a pagination link from the server onto the configured API base.
///
/// The server answers with absolute links; only their path and query are kept.
pub fn next_page_url(next: &str) -> String {
    let path = match next.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |i| &rest[i..]),
        None => next,
    };
    api_url(path)
}

/// Settles a listing whose page number `pages` failed with `error`.
///
/// Records from earlier pages are kept so the views still have data to run on.
pub fn partial_listing(
    records: Vec<ContestDto>,
    pages: usize,
    error: String,
) -> Result<Vec<Contest>, String> {
    if pages == 0 {
        return Err(error);
    }
    warn!(
        "Contest listing stopped after {} page(s), keeping {} records: {}",
        pages,
        records.len(),
        error
    );
    Ok(contests_from_wire(records))
}

/// Loads every contest, following pagination links.
///
/// Records whose timestamps cannot be read are dropped here.
pub async fn fetch_contests() -> Result<Vec<Contest>, String> {
    let mut records: Vec<ContestDto> = Vec::new();
    let mut next = Some(api_url(&contests_path()));
    let mut pages = 0;

    while let Some(url) = next.take() {
        if pages == MAX_PAGES {
            warn!("Stopped contest listing after {} pages", MAX_PAGES);
            break;
        }
        let page: ContestListResponse = match fetch_json(credentialed_get(&url)).await {
            Ok(page) => page,
            Err(e) => return partial_listing(records, pages, e),
        };
        debug!("Fetched contest page {} ({} of {})", pages + 1, page.results.len(), page.count);
        records.extend(page.results);
        next = page.next.as_deref().map(next_page_url);
        pages += 1;
    }

    Ok(contests_from_wire(records))
}

pub async fn fetch_contest(contest_id: i64) -> Result<Contest, String> {
    let dto: ContestDto = fetch_json(credentialed_get(&api_url(&contest_path(contest_id)))).await?;
    Contest::try_from(dto).map_err(|e| e.to_string())
}
