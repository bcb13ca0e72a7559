//! GET /api greeting: echoes the query and reports the current UTC time and weekday.

use axum::extract::Query;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const GITHUB_FILE_URL: &str = "https://github.com/DrOncogene/hngx-2023/blob/main/stage_one/main.py";
pub const GITHUB_REPO_URL: &str = "https://github.com/DrOncogene/hngx-2023";

#[derive(Debug, Default, Deserialize)]
pub struct GreetingQuery {
    pub slack_name: Option<String>,
    pub track: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GreetingBody {
    pub slack_name: Option<String>,
    pub current_day: String,
    pub utc_time: String,
    pub track: Option<String>,
    pub github_file_url: &'static str,
    pub github_repo_url: &'static str,
    pub status_code: u16,
}

impl GreetingBody {
    pub fn at(now: DateTime<Utc>, query: GreetingQuery) -> GreetingBody {
        GreetingBody {
            slack_name: query.slack_name,
            current_day: now.format("%A").to_string(),
            utc_time: now.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            track: query.track,
            github_file_url: GITHUB_FILE_URL,
            github_repo_url: GITHUB_REPO_URL,
            status_code: 200,
        }
    }
}

pub async fn greeting(Query(query): Query<GreetingQuery>) -> Json<GreetingBody> {
    Json(GreetingBody::at(Utc::now(), query))
}
