//! DOM region rasterization.
//!
//! Stable adapter with a single entry point: serialize the target subtree
//! into an SVG `foreignObject`, decode it through an image element and draw
//! it onto a canvas sized to the target's full scrollable extent. The result
//! is a PNG of the whole report region, not just the visible viewport.

use super::ExportError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlImageElement,
    Url, XmlSerializer,
};

pub struct CaptureOptions {
    /// Raster scale factor relative to CSS pixels.
    pub scale: f64,
    /// Canvas background fill, painted before the snapshot.
    pub background: &'static str,
}

/// A captured raster image of the report region.
pub struct CapturedImage {
    pub png: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

/// Rasterize `target` into a PNG at the configured scale.
pub async fn rasterize(
    target: &Element,
    options: CaptureOptions,
) -> Result<CapturedImage, ExportError> {
    // Full scrollable extent, not the clipped viewport.
    let width = target.scroll_width().max(target.client_width()) as f64;
    let height = target.scroll_height().max(target.client_height()) as f64;
    if width <= 0.0 || height <= 0.0 {
        return Err(ExportError::ContentNotVisible);
    }

    let markup = serialize_subtree(target)?;
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}'>\
         <foreignObject width='100%' height='100%'>{markup}</foreignObject>\
         </svg>",
        w = width,
        h = height,
    );

    let url = svg_object_url(&svg)?;
    let image = load_image(&url).await;
    Url::revoke_object_url(&url).ok();
    let image = image?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::LibrariesUnavailable("document unavailable".into()))?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| ExportError::LibrariesUnavailable("canvas element".into()))?
        .dyn_into()
        .map_err(|_| ExportError::LibrariesUnavailable("canvas element".into()))?;
    canvas.set_width((width * options.scale).ceil() as u32);
    canvas.set_height((height * options.scale).ceil() as u32);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| ExportError::LibrariesUnavailable("canvas 2d context".into()))?
        .ok_or_else(|| ExportError::LibrariesUnavailable("canvas 2d context".into()))?
        .dyn_into()
        .map_err(|_| ExportError::LibrariesUnavailable("canvas 2d context".into()))?;

    context.set_fill_style_str(options.background);
    context.fill_rect(0.0, 0.0, width * options.scale, height * options.scale);
    context
        .scale(options.scale, options.scale)
        .map_err(|_| ExportError::LibrariesUnavailable("canvas transform".into()))?;
    context
        .draw_image_with_html_image_element(&image, 0.0, 0.0)
        .map_err(|_| ExportError::CaptureEmpty)?;

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| ExportError::CaptureEmpty)?;
    let png = decode_data_url(&data_url)?;

    Ok(CapturedImage {
        png,
        width_px: canvas.width(),
        height_px: canvas.height(),
    })
}

fn serialize_subtree(target: &Element) -> Result<String, ExportError> {
    let serializer = XmlSerializer::new()
        .map_err(|_| ExportError::LibrariesUnavailable("XMLSerializer".into()))?;
    let clone = target
        .clone_node_with_deep(true)
        .map_err(|_| ExportError::CaptureEmpty)?;
    serializer
        .serialize_to_string(&clone)
        .map_err(|_| ExportError::CaptureEmpty)
}

fn svg_object_url(svg: &str) -> Result<String, ExportError> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(svg));
    let properties = BlobPropertyBag::new();
    properties.set_type("image/svg+xml;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|_| ExportError::LibrariesUnavailable("svg blob".into()))?;
    Url::create_object_url_with_blob(&blob)
        .map_err(|_| ExportError::LibrariesUnavailable("object URL".into()))
}

async fn load_image(url: &str) -> Result<HtmlImageElement, ExportError> {
    let image = HtmlImageElement::new()
        .map_err(|_| ExportError::LibrariesUnavailable("image element".into()))?;
    image.set_src(url);
    JsFuture::from(image.decode())
        .await
        .map_err(|_| ExportError::CaptureEmpty)?;
    Ok(image)
}

/// Extract PNG bytes from a canvas data URL, rejecting placeholder output.
fn decode_data_url(data_url: &str) -> Result<Vec<u8>, ExportError> {
    // Browsers return "data:," for zero-sized or tainted canvases.
    let payload = match data_url.split_once(',') {
        Some((_, payload)) if !payload.is_empty() => payload,
        _ => return Err(ExportError::CaptureEmpty),
    };
    let bytes = BASE64
        .decode(payload)
        .map_err(|_| ExportError::CaptureEmpty)?;
    if bytes.is_empty() {
        return Err(ExportError::CaptureEmpty);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_placeholder_data_url() {
        // What browsers return for zero-sized or tainted canvases.
        assert_eq!(decode_data_url("data:,"), Err(ExportError::CaptureEmpty));
    }

    #[test]
    fn rejects_missing_or_empty_payload() {
        assert_eq!(decode_data_url("data:image/png;base64,"), Err(ExportError::CaptureEmpty));
        assert_eq!(decode_data_url("not a data url"), Err(ExportError::CaptureEmpty));
        assert_eq!(
            decode_data_url("data:image/png;base64,!!invalid!!"),
            Err(ExportError::CaptureEmpty)
        );
    }

    #[test]
    fn decodes_valid_payload() {
        let payload = BASE64.encode(b"png-bytes");
        let url = format!("data:image/png;base64,{payload}");
        assert_eq!(decode_data_url(&url).unwrap(), b"png-bytes");
    }
}
