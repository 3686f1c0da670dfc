//! Paginated PDF assembly.
//!
//! The captured raster is scaled to the page width and sliced across as many
//! portrait A4 pages as needed: each page draws the same image shifted up by
//! the height already consumed. This reproduces one tall screenshot cut by
//! vertical offset, not a content-aware re-layout.

use super::capture::CapturedImage;
use super::ExportError;
use printpdf::{Image, Mm, PdfDocument};
use std::io::BufWriter;

pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;

const MM_PER_INCH: f64 = 25.4;

/// Number of pages needed for an image of the given height.
pub fn page_count(image_height_mm: f64, page_height_mm: f64) -> usize {
    let pages = (image_height_mm / page_height_mm).ceil() as usize;
    pages.max(1)
}

/// Vertical offset (mm from the image top) consumed before each page.
///
/// Page `i` shows the slice starting at `i * page_height`.
pub fn page_offsets(image_height_mm: f64, page_height_mm: f64) -> Vec<f64> {
    (0..page_count(image_height_mm, page_height_mm))
        .map(|i| i as f64 * page_height_mm)
        .collect()
}

/// Build a portrait A4 document from the captured image.
pub fn build_document(captured: &CapturedImage) -> Result<Vec<u8>, ExportError> {
    if captured.width_px == 0 || captured.height_px == 0 {
        return Err(ExportError::CaptureEmpty);
    }

    let dynamic = image::load_from_memory_with_format(&captured.png, image::ImageFormat::Png)
        .map_err(|e| ExportError::PdfConstructionFailed(e.to_string()))?;

    // Dpi that maps the raster width exactly onto the page width.
    let dpi = captured.width_px as f64 * MM_PER_INCH / PAGE_WIDTH_MM;
    let image_height_mm = captured.height_px as f64 * MM_PER_INCH / dpi;

    let (doc, first_page, first_layer) = PdfDocument::new(
        "weekly-ai-analysis",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "report",
    );

    for (index, offset) in page_offsets(image_height_mm, PAGE_HEIGHT_MM)
        .into_iter()
        .enumerate()
    {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
            doc.get_page(page).get_layer(layer)
        };

        // Origin is the page's bottom-left corner; shifting the image bottom
        // up by `offset` exposes the next slice at the top of this page.
        let translate_y = Mm(PAGE_HEIGHT_MM - image_height_mm + offset);
        let page_image = Image::from_dynamic_image(&dynamic);
        page_image.add_to_layer(
            layer,
            Some(Mm(0.0)),
            Some(translate_y),
            None,
            None,
            None,
            Some(dpi),
        );
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| ExportError::PdfConstructionFailed(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| ExportError::PdfConstructionFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_when_image_fits() {
        assert_eq!(page_count(100.0, PAGE_HEIGHT_MM), 1);
        assert_eq!(page_count(297.0, PAGE_HEIGHT_MM), 1);
        assert_eq!(page_offsets(100.0, PAGE_HEIGHT_MM), vec![0.0]);
    }

    #[test]
    fn page_count_is_ceiling() {
        assert_eq!(page_count(297.1, PAGE_HEIGHT_MM), 2);
        assert_eq!(page_count(594.0, PAGE_HEIGHT_MM), 2);
        assert_eq!(page_count(600.0, PAGE_HEIGHT_MM), 3);
    }

    #[test]
    fn offsets_step_by_page_height() {
        let offsets = page_offsets(1000.0, PAGE_HEIGHT_MM);
        assert_eq!(offsets.len(), 4);
        for (i, offset) in offsets.iter().enumerate() {
            assert_eq!(*offset, i as f64 * PAGE_HEIGHT_MM);
        }
    }

    #[test]
    fn zero_height_still_yields_one_page() {
        assert_eq!(page_count(0.0, PAGE_HEIGHT_MM), 1);
    }
}
