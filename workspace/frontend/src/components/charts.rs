pub mod forecast;
pub mod time_series;

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

pub(crate) const PRIMARY: &str = "#0B3D91";
pub(crate) const SECONDARY: &str = "#1F6FEB";

/// Shared axis and margin settings for the metric charts.
pub(crate) fn base_layout(height: u32) -> serde_json::Value {
    serde_json::json!({
        "height": height,
        "margin": {"t": 20, "r": 10, "l": 50, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false, "tickfont": {"size": 12}},
        "yaxis": {"showgrid": true, "gridcolor": "#eee", "tickfont": {"size": 12}},
        "legend": {"orientation": "h", "y": -0.2}
    })
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}

/// Serializes plotly traces and draws them into the element `div_id`.
pub(crate) fn render_plot<T: Serialize>(div_id: &str, traces: &[T], layout: &serde_json::Value) {
    let converted = (|| -> Result<(JsValue, JsValue, JsValue), String> {
        let data = js_sys::Array::new();
        for trace in traces {
            data.push(&to_js(trace)?);
        }
        let config = serde_json::json!({"responsive": true, "displayModeBar": false});
        Ok((data.into(), to_js(layout)?, to_js(&config)?))
    })();

    match converted {
        Ok((data, layout, config)) => {
            log::trace!("Drawing chart {} with {} traces", div_id, traces.len());
            newPlot(div_id, data, layout, config);
        }
        Err(e) => log::error!("Failed to prepare chart {}: {}", div_id, e),
    }
}
