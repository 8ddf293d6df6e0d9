//! Typed wrappers around JS interop.
//!
//! The D3.js bubble chart lives in `assets/js/*.js` and is evaluated as
//! globals (no ES modules) exposed via `window.*`. This module serializes
//! data for it, and also owns the single dataset fetch each page performs.

use anyhow::{anyhow, Context};
use tsa_core::Dataset;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BUBBLE_CHART_JS: &str = include_str!("../assets/js/bubble-chart.js");

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

/// Fetch the dataset at `url` and parse it. A `.gz` URL is gunzipped first.
///
/// This is the only suspension point of each page.
pub async fn fetch_dataset(url: &str) -> anyhow::Result<Dataset> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
    }
    let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::info!("[TSA] fetched {} bytes from {}", bytes.len(), url);

    let dataset = if url.ends_with(".gz") {
        Dataset::from_gz_bytes(&bytes)
    } else {
        Dataset::from_reader(bytes.as_slice())
    };
    dataset.with_context(|| format!("error reading CSV file {}", url))
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('TSA JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions via `function` declarations. They are
/// evaluated at global scope via indirect eval once D3 is ready, then each
/// function is promoted to `window.*`. Safe to call more than once.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BUBBLE_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__tsaChartsReady && !window.__tsaChartScripts) {{ window.__tsaChartScripts = {}; }}",
        js_string(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__tsaChartsReady || window.__tsaChartsPolling) return;
            window.__tsaChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__tsaChartScripts);
                    delete window.__tsaChartScripts;
                    if (typeof renderBubbleChart !== 'undefined') window.renderBubbleChart = renderBubbleChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof moveTooltip !== 'undefined') window.moveTooltip = moveTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__tsaChartsReady = true;
                    console.log('TSA charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render (or re-render) the force-laid-out bubble chart.
///
/// `data_json` is a JSON array of `BubbleView`, `config_json` a `ChartConfig`.
/// Polls until D3.js, the chart scripts and the container element exist.
pub fn render_bubble_chart(container_id: &str, data_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__tsaChartsReady &&
                    typeof window.renderBubbleChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderBubbleChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[TSA] renderBubbleChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = ''; if (window.__tsaBubbleCharts) delete window.__tsaBubbleCharts[{}];",
        js_string(container_id),
        js_string(container_id)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("it's \"x\"\n"), r#""it's \"x\"\n""#);
    }

    #[test]
    fn embedded_scripts_define_entry_points() {
        assert!(BUBBLE_CHART_JS.contains("function renderBubbleChart("));
        assert!(TOOLTIP_JS.contains("function showTooltip("));
    }
}
