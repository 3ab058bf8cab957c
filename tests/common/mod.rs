//! Shared helpers for the integration tests: a mock link page in the shape
//! of the public demo page, plus fixture bodies for each scenario.

use httpmock::prelude::*;

/// Render a download page listing `names` as links under `/download/`.
pub fn download_page(names: &[&str]) -> String {
    let items: Vec<String> = names
        .iter()
        .map(|name| format!("    <li><a href=\"download/{name}\">{name}</a></li>"))
        .collect();
    format!(
        "<html><body><div class=\"example\">\n<h3>File Downloader</h3>\n<ul>\n{}\n</ul>\n</div></body></html>",
        items.join("\n")
    )
}

/// Mount the link page at `/download` on `server`.
pub fn mock_page(server: &MockServer, names: &[&str]) {
    server.mock(|when, then| {
        when.method(GET).path("/download");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(download_page(names));
    });
}

/// Mount a file body under `/download/{name}`.
pub fn mock_file(server: &MockServer, name: &str, content_type: &str, body: Vec<u8>) {
    let path = format!("/download/{name}");
    server.mock(move |when, then| {
        when.method(GET).path(path.clone());
        then.status(200)
            .header("Content-Type", content_type)
            .body(body.clone());
    });
}
