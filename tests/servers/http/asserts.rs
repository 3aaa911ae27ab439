use reqwest::Response;
use torrust_tracker_primitives::tracker_stats::TrackerStats;

/// It extracts the number inside the element with the given id.
pub fn counter_in_html(page: &str, id: &str) -> u64 {
    let opening = format!("<span id=\"{id}\">");

    let start = page.find(&opening).unwrap_or_else(|| panic!("the page should contain the {id} element")) + opening.len();
    let end = start + page[start..].find('<').unwrap();

    page[start..end].parse().unwrap()
}

pub async fn assert_json_stats(response: Response, expected: &TrackerStats) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");

    let stats: TrackerStats = response.json().await.unwrap();

    assert_eq!(&stats, expected);
}

pub async fn assert_html_stats(response: Response, expected: &TrackerStats) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/html; charset=utf-8");

    let page = response.text().await.unwrap();

    for (id, value) in expected.counters() {
        assert_eq!(counter_in_html(&page, id), value, "unexpected {id}");
    }
}
