//! Browser download of the generated document.
//!
//! Preferred path: blob object URL behind a synthetic link click. If blob
//! construction fails, fall back to a base64 data-URI link. Exhausting both
//! fails the export with `SaveFailed`.

use super::ExportError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Hand the PDF bytes to the browser's download mechanism.
pub fn save_pdf(bytes: &[u8], filename: &str) -> Result<(), ExportError> {
    match save_via_blob(bytes, filename) {
        Ok(()) => Ok(()),
        Err(err) => {
            log::warn!("blob download failed, falling back to data URI: {err}");
            save_via_data_uri(bytes, filename).map_err(|err| {
                log::error!("data URI download failed: {err}");
                ExportError::SaveFailed
            })
        }
    }
}

fn save_via_blob(bytes: &[u8], filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let result = click_download_link(&url, filename);
    Url::revoke_object_url(&url).ok();
    result
}

fn save_via_data_uri(bytes: &[u8], filename: &str) -> Result<(), String> {
    let href = format!("data:application/pdf;base64,{}", BASE64.encode(bytes));
    click_download_link(&href, filename)
}

/// Create a hidden anchor, click it and remove it again.
fn click_download_link(href: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(href);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}
