//! Data Export
//!
//! Serializes the campaign list to CSV or JSON and hands the result to the
//! browser as a file download.

use crate::model::Campaign;

/// Render campaigns as CSV with a header row.
pub fn campaigns_to_csv(campaigns: &[Campaign]) -> String {
    let mut out = String::from(
        "id,name,status,start_date,end_date,participants,total_edits,articles_edited\n",
    );
    for c in campaigns {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            c.id,
            csv_field(&c.name),
            c.status.label(),
            c.start_date,
            c.end_date,
            c.participants,
            c.total_edits,
            c.articles_edited,
        ));
    }
    out
}

/// Quote a field when it contains a comma, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render campaigns as pretty-printed JSON.
pub fn campaigns_to_json(campaigns: &[Campaign]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(campaigns)
}

/// Trigger a browser download of `contents` as `filename`.
///
/// Browser API failures are swallowed; an export that silently does nothing
/// is the worst outcome here.
#[cfg(target_arch = "wasm32")]
pub fn download_file(filename: &str, contents: &str) {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let parts = js_sys::Array::of1(&contents.into());
    let Ok(blob) = web_sys::Blob::new_with_str_sequence(&parts) else {
        web_sys::console::error_1(&"export: failed to build blob".into());
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        web_sys::console::error_1(&"export: failed to create object URL".into());
        return;
    };

    if let Ok(a) = document.create_element("a") {
        let _ = a.set_attribute("href", &url);
        let _ = a.set_attribute("download", filename);
        if let Some(el) = a.dyn_ref::<web_sys::HtmlElement>() {
            el.click();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

/// No-op off wasm; downloads only exist in the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn download_file(_filename: &str, _contents: &str) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_csv_has_header_and_one_row_per_campaign() {
        let campaigns = data::sample_campaigns();
        let csv = campaigns_to_csv(&campaigns);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), campaigns.len() + 1);
        assert!(lines[0].starts_with("id,name,status"));
        assert_eq!(
            lines[1],
            "1,Women in Science 2025,active,2025-10-01,2025-11-30,52,1234,245"
        );
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_json_round_trips() {
        let campaigns = data::sample_campaigns();
        let json = campaigns_to_json(&campaigns).unwrap();
        let parsed: Vec<crate::model::Campaign> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, campaigns);
    }

    #[test]
    fn test_json_uses_lowercase_status() {
        let campaigns = data::sample_campaigns();
        let json = campaigns_to_json(&campaigns).unwrap();
        assert!(json.contains("\"status\": \"active\""));
        assert!(json.contains("\"status\": \"completed\""));
    }
}
