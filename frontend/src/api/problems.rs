use crate::api::api_url;
use crate::api::utils::{credentialed_get, fetch_json};
use shared::Problem;

pub fn problems_path(contest_id: i64) -> String {
    format!("/api/contests/problems/{}/", contest_id)
}

pub fn problem_path(contest_id: i64, problem_id: i64) -> String {
    format!("/api/contests/problems/{}/{}/", contest_id, problem_id)
}

/// Orders problems by index ("A", "B1", "B2", "C")
pub fn sort_problems(problems: &mut [Problem]) {
    problems.sort_by(|a, b| a.index.cmp(&b.index));
}

pub async fn fetch_problems(contest_id: i64) -> Result<Vec<Problem>, String> {
    let mut problems: Vec<Problem> =
        fetch_json(credentialed_get(&api_url(&problems_path(contest_id)))).await?;
    sort_problems(&mut problems);
    Ok(problems)
}

pub async fn fetch_problem(contest_id: i64, problem_id: i64) -> Result<Problem, String> {
    fetch_json(credentialed_get(&api_url(&problem_path(contest_id, problem_id)))).await
}
