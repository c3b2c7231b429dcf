//! Screening of obviously automated callers on the public verification
//! endpoint. A static user-agent blocklist plus a missing-headers heuristic;
//! anything smarter belongs in a real bot-management layer.

use actix_web::HttpRequest;

const BOT_UA_MARKERS: &[&str] = &[
    "bot",
    "crawler",
    "spider",
    "slurp",
    "baidu",
    "yandex",
    "bingbot",
    "googlebot",
    "duckduckbot",
    "curl",
    "wget",
    "python",
    "node",
    "axios",
    "postman",
    "selenium",
    "puppeteer",
    "playwright",
    "phantomjs",
    "headless",
];

/// Pure decision: known bot UA, or a request carrying none of the headers a
/// browser always sends.
pub fn looks_automated(
    user_agent: Option<&str>,
    has_accept: bool,
    has_accept_language: bool,
    has_accept_encoding: bool,
) -> bool {
    let ua = user_agent.unwrap_or("").to_lowercase();
    let flagged_ua = BOT_UA_MARKERS.iter().any(|marker| ua.contains(marker));
    let headerless = !has_accept && !has_accept_language && !has_accept_encoding;

    flagged_ua || headerless
}

pub fn is_automated(req: &HttpRequest) -> bool {
    let headers = req.headers();
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok());

    looks_automated(
        user_agent,
        headers.contains_key("accept"),
        headers.contains_key("accept-language"),
        headers.contains_key("accept-encoding"),
    )
}
